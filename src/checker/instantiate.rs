use log::trace;

use crate::ast::{Expr, Position};

use super::driver;
use super::error::CheckError;
use super::function::{Function, GenericFunction};
use super::module::Module;
use super::types::{DeclKind, GenericType, GenericTypeDeclaration, Type, TypeName};

/// Recursively rewrites a type-hint expression under a substitution map,
/// re-resolving through the module's type registry so nested generics
/// cascade (§4.3 step 3). A hint naming a type parameter is replaced
/// outright — substitution shadows any module type of the same name, per
/// the behavior observed in the distilled source (§2.2).
fn substitute(
    module: &Module,
    hint: &Expr,
    substitution: &std::collections::HashMap<String, Type>,
) -> Result<Type, CheckError> {
    if let Expr::Name(n) = hint {
        if let Some(concrete) = substitution.get(&n.value) {
            return Ok(concrete.clone());
        }
    }

    if let Expr::Subscript(s) = hint {
        let mut rewritten_items = Vec::with_capacity(s.items.len());
        for item in &s.items {
            rewritten_items.push(substitute(module, item, substitution)?);
        }
        // Re-resolve via the registry so the rewritten subscript benefits
        // from the same memoization path as a hand-written one.
        let head_is_ptr = matches!(s.head.as_ref(), Expr::Name(n) if n.value == "ptr");
        if head_is_ptr {
            if rewritten_items.len() != 1 {
                return Err(CheckError::Arity(
                    super::error::ArityMismatch {
                        construct: format!("type '{}'", hint.render()),
                        expected: 1,
                        got: rewritten_items.len(),
                    },
                    s.position.clone(),
                ));
            }
            return Ok(Type::new_ptr_for(&rewritten_items[0]));
        }
        let head_name = match s.head.as_ref() {
            Expr::Name(n) => n.value.clone(),
            other => other.render(),
        };
        let key = format!(
            "{head_name}[{}]",
            rewritten_items
                .iter()
                .map(Type::render)
                .collect::<Vec<_>>()
                .join(", ")
        );
        if let Some(cached) = module.get_anon_type(&key) {
            return Ok(cached);
        }
        let entry = module.get_type_entry(&head_name);
        if let Some(super::types::TypeEntry::Generic(generic)) = entry {
            let instantiated = instantiate_type(module, &generic, &rewritten_items, &s.position)?;
            module.cache_anon_type(key, instantiated.clone());
            return Ok(instantiated);
        }
        return module.import_type(hint);
    }

    module.import_type(hint)
}

/// Instantiates a `GenericType` with concrete argument `Type`s, producing
/// a fresh `Type` with rewritten fields (§4.3 steps 1-4). Self-contained —
/// unlike function instantiation, no body-checking is required.
pub fn instantiate_type(
    module: &Module,
    generic: &GenericType,
    args: &[Type],
    position: &Position,
) -> Result<Type, CheckError> {
    trace!(
        "instantiating generic type {} with {} argument(s)",
        generic.name,
        args.len()
    );
    if args.len() != generic.parameters.len() {
        return Err(CheckError::Arity(
            super::error::ArityMismatch {
                construct: format!("type '{}'", generic.name),
                expected: generic.parameters.len(),
                got: args.len(),
            },
            position.clone(),
        ));
    }

    let substitution: std::collections::HashMap<String, Type> = generic
        .parameters
        .iter()
        .cloned()
        .zip(args.iter().cloned())
        .collect();

    let (field_hints, decl_kind): (Vec<(String, Expr)>, DeclKind) = match &generic.declaration {
        GenericTypeDeclaration::Struct(s) => (
            s.fields
                .iter()
                .map(|f| (f.name.value.clone(), f.type_hint.clone()))
                .collect(),
            DeclKind::Struct,
        ),
        GenericTypeDeclaration::Union(u) => (
            u.fields
                .iter()
                .map(|f| (f.name.value.clone(), f.type_hint.clone()))
                .collect(),
            DeclKind::Union,
        ),
    };

    let mut fields = Vec::with_capacity(field_hints.len());
    for (field_name, hint) in field_hints {
        fields.push((field_name, substitute(module, &hint, &substitution)?));
    }

    Ok(Type::new(
        TypeName::Instantiated(generic.name.clone(), args.to_vec()),
        fields,
        Some(decl_kind),
        generic.module_name.clone(),
    ))
}

/// Instantiates a `GenericFunction` (§4.3 step 5): rewrite parameters and
/// return hint, clear the generic list, then run the full declaration
/// checker on the concrete form. Mirrors the source's habit of building a
/// throwaway checker for this (there, `Checker.new(self.module)` inside
/// `GenericFunction.apply_generic`) rather than threading the caller's
/// checker state through — instantiation must be valid independent of who
/// asked for it.
pub fn instantiate_function(
    module: &Module,
    generic: &GenericFunction,
    args: &[Type],
    position: &Position,
) -> Result<Function, CheckError> {
    trace!(
        "instantiating generic function {} with {} argument(s)",
        generic.declaration.head.name.value,
        args.len()
    );
    if args.len() != generic.parameters.len() {
        return Err(CheckError::Arity(
            super::error::ArityMismatch {
                construct: format!("function '{}'", generic.declaration.head.name.value),
                expected: generic.parameters.len(),
                got: args.len(),
            },
            position.clone(),
        ));
    }

    let substitution: std::collections::HashMap<String, Type> = generic
        .parameters
        .iter()
        .cloned()
        .zip(args.iter().cloned())
        .collect();

    let mut parameters = Vec::with_capacity(generic.declaration.head.parameters.len());
    for field in &generic.declaration.head.parameters {
        parameters.push((
            field.name.value.clone(),
            substitute(module, &field.type_hint, &substitution)?,
        ));
    }
    let return_type = match &generic.declaration.head.return_hint {
        Some(hint) => substitute(module, hint, &substitution)?,
        None => super::primitives::lookup("void").expect("void is always registered"),
    };

    let receiver = match &generic.receiver_name {
        Some(receiver_name) => Some(module.import_type(&Expr::Name(crate::ast::Name::new(
            receiver_name.clone(),
            position.clone(),
        )))?),
        None => None,
    };

    driver::check_function_body(module, &generic.declaration, parameters, return_type, receiver)
}
