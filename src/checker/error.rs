use std::{error::Error, fmt::Display};

use crate::ast::Position;

/// The checker's closed error taxonomy (§7). Every fallible operation
/// returns `Result<T, CheckError>`; the library never hides a failure
/// behind a catch-all error type since there is no binary layer above it
/// to flatten one into.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckError {
    UnknownType(UnknownType, Position),
    UnknownVariable(UnknownVariable, Position),
    UnknownFunction(UnknownFunction, Position),
    UnknownField(UnknownField, Position),
    UnknownImport(UnknownImport, Position),
    Arity(ArityMismatch, Position),
    TypeMismatch(TypeMismatch, Position),
    NotGeneric(NotGeneric, Position),
    GenericRequiresArguments(GenericRequiresArguments, Position),
    UnguardedUnionField(UnguardedUnionField, Position),
    InvalidAttributeReceiver(InvalidAttributeReceiver, Position),
    ImportNotFound(ImportNotFound, Position),
    ImportCycle(ImportCycle, Position),
    Unsupported(Unsupported, Position),
}

impl CheckError {
    pub fn position(&self) -> &Position {
        match self {
            CheckError::UnknownType(_, p) => p,
            CheckError::UnknownVariable(_, p) => p,
            CheckError::UnknownFunction(_, p) => p,
            CheckError::UnknownField(_, p) => p,
            CheckError::UnknownImport(_, p) => p,
            CheckError::Arity(_, p) => p,
            CheckError::TypeMismatch(_, p) => p,
            CheckError::NotGeneric(_, p) => p,
            CheckError::GenericRequiresArguments(_, p) => p,
            CheckError::UnguardedUnionField(_, p) => p,
            CheckError::InvalidAttributeReceiver(_, p) => p,
            CheckError::ImportNotFound(_, p) => p,
            CheckError::ImportCycle(_, p) => p,
            CheckError::Unsupported(_, p) => p,
        }
    }

    fn inner(&self) -> &dyn Display {
        match self {
            CheckError::UnknownType(e, _) => e,
            CheckError::UnknownVariable(e, _) => e,
            CheckError::UnknownFunction(e, _) => e,
            CheckError::UnknownField(e, _) => e,
            CheckError::UnknownImport(e, _) => e,
            CheckError::Arity(e, _) => e,
            CheckError::TypeMismatch(e, _) => e,
            CheckError::NotGeneric(e, _) => e,
            CheckError::GenericRequiresArguments(e, _) => e,
            CheckError::UnguardedUnionField(e, _) => e,
            CheckError::InvalidAttributeReceiver(e, _) => e,
            CheckError::ImportNotFound(e, _) => e,
            CheckError::ImportCycle(e, _) => e,
            CheckError::Unsupported(e, _) => e,
        }
    }
}

impl Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (file, line, col) = self.position();
        write!(f, "{} ({file}:{line}:{col})", self.inner())
    }
}

impl Error for CheckError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownType {
    pub name: String,
    pub module: String,
}

impl Display for UnknownType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not a type of module {}", self.name, self.module)
    }
}
impl Error for UnknownType {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariable {
    pub name: String,
    pub module: String,
}

impl Display for UnknownVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not a variable of the current scope, in module {}",
            self.name, self.module
        )
    }
}
impl Error for UnknownVariable {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFunction {
    pub name: String,
    pub module: String,
}

impl Display for UnknownFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not a function of the current scope, in module {}",
            self.name, self.module
        )
    }
}
impl Error for UnknownFunction {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownField {
    pub field: String,
    pub type_name: String,
    pub module: String,
}

impl Display for UnknownField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not a field of type {}, in module {}",
            self.field, self.type_name, self.module
        )
    }
}
impl Error for UnknownField {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownImport {
    pub alias: String,
    pub module: String,
}

impl Display for UnknownImport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not an import of module {}",
            self.alias, self.module
        )
    }
}
impl Error for UnknownImport {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArityMismatch {
    pub construct: String,
    pub expected: usize,
    pub got: usize,
}

impl Display for ArityMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (verb, noun) = if self.got > self.expected {
            ("many", "fields/arguments")
        } else {
            ("few", "fields/arguments")
        };
        write!(
            f,
            "too {verb} {noun} to {}, expected {}, got {}",
            self.construct, self.expected, self.got
        )
    }
}
impl Error for ArityMismatch {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMismatch {
    pub context: String,
    pub expected: String,
    pub got: String,
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "type mismatch in {}: expected {}, got {}",
            self.context, self.expected, self.got
        )
    }
}
impl Error for TypeMismatch {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotGeneric {
    pub name: String,
}

impl Display for NotGeneric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "type {} is not generic", self.name)
    }
}
impl Error for NotGeneric {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericRequiresArguments {
    pub name: String,
}

impl Display for GenericRequiresArguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is generic, you must pass its type arguments",
            self.name
        )
    }
}
impl Error for GenericRequiresArguments {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnguardedUnionField {
    pub access: String,
}

impl Display for UnguardedUnionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "accessing union field '{}' directly is not allowed, you must check if it is initialized first",
            self.access
        )
    }
}
impl Error for UnguardedUnionField {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidAttributeReceiver {
    pub receiver: String,
}

impl Display for InvalidAttributeReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is neither a variable, an import, nor a type",
            self.receiver
        )
    }
}
impl Error for InvalidAttributeReceiver {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportNotFound {
    pub module_name: String,
    pub path: String,
}

impl Display for ImportNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "can't import '{}', file '{}' does not exist",
            self.module_name, self.path
        )
    }
}
impl Error for ImportNotFound {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportCycle {
    pub module_name: String,
}

impl Display for ImportCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "import cycle detected: '{}' is already being checked",
            self.module_name
        )
    }
}
impl Error for ImportCycle {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unsupported {
    pub construct: String,
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bug(checker): checking for {} is not implemented yet", self.construct)
    }
}
impl Error for Unsupported {}
