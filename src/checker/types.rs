use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::function::Function;

/// The name half of a `Type`: either a bare declared name or, for a
/// monomorphized generic, the head name plus the concrete type arguments it
/// was instantiated with (§3.2).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeName {
    Simple(String),
    Instantiated(String, Vec<Type>),
}

impl TypeName {
    pub fn head(&self) -> &str {
        match self {
            TypeName::Simple(name) => name,
            TypeName::Instantiated(name, _) => name,
        }
    }

    pub fn render(&self) -> String {
        match self {
            TypeName::Simple(name) => name.clone(),
            TypeName::Instantiated(name, args) => format!(
                "{name}[{}]",
                args.iter().map(Type::render).collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

/// Distinguishes a struct declaration from a union declaration, since only
/// the latter is subject to the guard requirement of §4.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Struct,
    Union,
}

#[derive(Debug)]
pub struct TypeInner {
    pub name: TypeName,
    pub fields: Vec<(String, Type)>,
    pub functions: RefCell<HashMap<String, Function>>,
    pub anon_functions: RefCell<HashMap<String, Function>>,
    /// Generic associated-function stubs, deferred until a dotted call
    /// supplies type arguments (§4.6's "AssociatedFunction stub").
    pub generic_functions: RefCell<HashMap<String, super::function::GenericFunction>>,
    pub decl_kind: Option<DeclKind>,
    pub module_name: String,
}

/// The elaborated form of a declared type (§3.2). Cheaply cloneable; two
/// `Type`s compare equal only if they are the *same* registered entry
/// (invariant 2) — primitives and module-registered types are singletons,
/// so pointer identity is the right notion of equality here. `ptr`
/// instantiation is the one exception (§9), handled structurally by
/// `compatible` via `TypeName` rather than by this `PartialEq`.
#[derive(Debug, Clone)]
pub struct Type(pub Rc<TypeInner>);

impl Type {
    pub fn new(
        name: TypeName,
        fields: Vec<(String, Type)>,
        decl_kind: Option<DeclKind>,
        module_name: impl Into<String>,
    ) -> Self {
        Type(Rc::new(TypeInner {
            name,
            fields,
            functions: RefCell::new(HashMap::new()),
            anon_functions: RefCell::new(HashMap::new()),
            generic_functions: RefCell::new(HashMap::new()),
            decl_kind,
            module_name: module_name.into(),
        }))
    }

    pub fn primitive(name: &str) -> Self {
        Type::new(TypeName::Simple(name.to_string()), Vec::new(), None, "global")
    }

    pub fn name(&self) -> &TypeName {
        &self.0.name
    }

    pub fn render(&self) -> String {
        self.0.name.render()
    }

    pub fn is_union(&self) -> bool {
        self.0.decl_kind == Some(DeclKind::Union)
    }

    pub fn field(&self, name: &str) -> Option<&Type> {
        self.0
            .fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field_type)| field_type)
    }

    pub fn function(&self, name: &str) -> Option<Function> {
        self.0.functions.borrow().get(name).cloned()
    }

    pub fn register_function(&self, name: impl Into<String>, function: Function) {
        self.0.functions.borrow_mut().insert(name.into(), function);
    }

    pub fn generic_function(&self, name: &str) -> Option<super::function::GenericFunction> {
        self.0.generic_functions.borrow().get(name).cloned()
    }

    pub fn register_generic_function(
        &self,
        name: impl Into<String>,
        generic: super::function::GenericFunction,
    ) {
        self.0
            .generic_functions
            .borrow_mut()
            .insert(name.into(), generic);
    }

    pub fn anon_function(&self, key: &str) -> Option<Function> {
        self.0.anon_functions.borrow().get(key).cloned()
    }

    pub fn register_anon_function(&self, key: impl Into<String>, function: Function) {
        self.0
            .anon_functions
            .borrow_mut()
            .insert(key.into(), function);
    }

    /// A fresh pointer type over `referent`, sharing its field and function
    /// tables (§9: pointer types inherit the referent's tables so `&x.field`
    /// keeps working through the indirection). Deliberately not memoized —
    /// every `&expr` produces an independent `Type`, which is why
    /// `compatible`'s rule 2 falls back to structural `TypeName` equality
    /// for subscript-named types instead of relying on identity.
    pub fn new_ptr_for(referent: &Type) -> Self {
        Type(Rc::new(TypeInner {
            name: TypeName::Instantiated("ptr".to_string(), vec![referent.clone()]),
            fields: referent.0.fields.clone(),
            functions: RefCell::new(referent.0.functions.borrow().clone()),
            anon_functions: RefCell::new(referent.0.anon_functions.borrow().clone()),
            generic_functions: RefCell::new(referent.0.generic_functions.borrow().clone()),
            decl_kind: referent.0.decl_kind,
            module_name: referent.0.module_name.clone(),
        }))
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// An unchecked struct/union declaration plus its type-parameter names,
/// deferred to instantiation (§3.2, §4.3).
#[derive(Debug, Clone)]
pub struct GenericType {
    pub name: String,
    pub parameters: Vec<String>,
    pub declaration: GenericTypeDeclaration,
    pub module_name: String,
}

/// Which concrete AST a `GenericType` was deferred from; carried so
/// instantiation (§4.3) knows how to rewrite field hints and what
/// `DeclKind` to stamp on the result.
#[derive(Debug, Clone)]
pub enum GenericTypeDeclaration {
    Struct(crate::ast::StructDeclaration),
    Union(crate::ast::UnionDeclaration),
}

/// Either a fully checked `Type` or a deferred `GenericType`, as stored in
/// `Module::types`.
#[derive(Debug, Clone)]
pub enum TypeEntry {
    Type(Type),
    Generic(GenericType),
}

impl TypeEntry {
    pub fn as_type(&self) -> Option<&Type> {
        match self {
            TypeEntry::Type(t) => Some(t),
            TypeEntry::Generic(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_compare_by_identity() {
        let a = Type::primitive("int");
        let b = Type::primitive("int");
        assert_eq!(a, a.clone());
        assert_ne!(a, b, "two independently created primitives are not the same singleton");
    }

    #[test]
    fn pointer_is_not_memoized_but_shares_fields() {
        let point = Type::new(
            TypeName::Simple("Point".to_string()),
            vec![("x".to_string(), Type::primitive("int"))],
            Some(DeclKind::Struct),
            "main",
        );
        let ptr_a = Type::new_ptr_for(&point);
        let ptr_b = Type::new_ptr_for(&point);
        assert_ne!(ptr_a, ptr_b);
        assert_eq!(ptr_a.field("x"), ptr_b.field("x"));
    }
}
