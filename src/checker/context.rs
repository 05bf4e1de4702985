use std::collections::{HashMap, HashSet};

use crate::ast::{Attribute, Expr, Name};

use super::error::{CheckError, UnknownField, UnknownFunction, UnknownVariable};
use super::module::{FunctionEntry, Module};
use super::types::Type;

/// The lexical checking scope (§3.2): current module, the variable
/// environment, functions visible in scope, and the set of active union
/// guards. Cheap to copy — `copy()` clones the variable/function maps but
/// shares the module by reference-counted handle, matching the source's
/// `Context.copy` (a shallow dict copy per function body / branch).
#[derive(Debug, Clone)]
pub struct Context {
    pub module: Module,
    pub variables: HashMap<String, Type>,
    pub functions: HashMap<String, FunctionEntry>,
    pub guards: HashSet<String>,
}

impl Context {
    pub fn new(module: Module) -> Self {
        Context {
            module,
            variables: HashMap::new(),
            functions: HashMap::new(),
            guards: HashSet::new(),
        }
    }

    /// A fresh nested scope: variables and functions are inherited (cloned),
    /// guards start empty (§3.4 — guards never cross a function boundary).
    pub fn copy(&self) -> Self {
        Context {
            module: self.module.clone(),
            variables: self.variables.clone(),
            functions: self.functions.clone(),
            guards: HashSet::new(),
        }
    }

    pub fn bind_variable(&mut self, name: impl Into<String>, type_: Type) {
        self.variables.insert(name.into(), type_);
    }

    /// Resolution order for a dotted `Attribute(L, R)` (§4.1):
    /// 1. `L` itself an `Attribute` — recurse, then take field `R`.
    /// 2. `L` a variable — take field `R` of its type.
    /// 3. fall through to the module resolver.
    pub fn import_variable(&self, name: &Expr) -> Result<Type, CheckError> {
        match name {
            Expr::Name(n) => self.variables.get(&n.value).cloned().ok_or_else(|| {
                CheckError::UnknownVariable(
                    UnknownVariable {
                        name: n.value.clone(),
                        module: self.module.name(),
                    },
                    n.position.clone(),
                )
            }),
            Expr::Attribute(a) => self.import_attribute(a),
            other => Err(CheckError::Unsupported(
                super::error::Unsupported {
                    construct: format!("variable reference {}", other.render()),
                },
                other.position(),
            )),
        }
    }

    fn import_attribute(&self, a: &Attribute) -> Result<Type, CheckError> {
        let receiver_type = match a.left.as_ref() {
            Expr::Attribute(inner) => self.import_attribute(inner)?,
            _ => self.import_variable(&a.left)?,
        };
        receiver_type.field(&a.right).cloned().ok_or_else(|| {
            CheckError::UnknownField(
                UnknownField {
                    field: a.right.clone(),
                    type_name: receiver_type.render(),
                    module: self.module.name(),
                },
                a.position.clone(),
            )
        })
    }

    /// Function resolution additionally consults the variable environment
    /// (for `value.method(...)`) and the scope's function table before
    /// falling through to the module (§4.1).
    pub fn import_function(&self, name: &Expr) -> Result<FunctionEntry, CheckError> {
        match name {
            Expr::Name(n) => {
                if let Some(entry) = self.functions.get(&n.value) {
                    return Ok(entry.clone());
                }
                self.module.import_function(name).map_err(|_| {
                    CheckError::UnknownFunction(
                        UnknownFunction {
                            name: n.value.clone(),
                            module: self.module.name(),
                        },
                        n.position.clone(),
                    )
                })
            }
            Expr::Attribute(a) => {
                if let Expr::Attribute(inner) = a.left.as_ref() {
                    let receiver = self.import_attribute(inner)?;
                    if let Some(f) = receiver.function(&a.right) {
                        return Ok(FunctionEntry::Function(f));
                    }
                    if let Some(g) = receiver.generic_function(&a.right) {
                        return Ok(FunctionEntry::Generic(g));
                    }
                    return Err(CheckError::UnknownField(
                        UnknownField {
                            field: a.right.clone(),
                            type_name: receiver.render(),
                            module: self.module.name(),
                        },
                        a.position.clone(),
                    ));
                }
                if let Expr::Name(left_name) = a.left.as_ref() {
                    if let Some(variable_type) = self.variables.get(&left_name.value) {
                        if let Some(f) = variable_type.function(&a.right) {
                            return Ok(FunctionEntry::Function(f));
                        }
                        if let Some(g) = variable_type.generic_function(&a.right) {
                            return Ok(FunctionEntry::Generic(g));
                        }
                        return Err(CheckError::UnknownField(
                            UnknownField {
                                field: a.right.clone(),
                                type_name: variable_type.render(),
                                module: self.module.name(),
                            },
                            a.position.clone(),
                        ));
                    }
                }
                self.module.import_function(name)
            }
            Expr::Subscript(_) => self.module.import_function(name),
            other => Err(CheckError::Unsupported(
                super::error::Unsupported {
                    construct: format!("function reference {}", other.render()),
                },
                other.position(),
            )),
        }
    }

    pub fn import_type(&self, name: &Expr) -> Result<Type, CheckError> {
        self.module.import_type(name)
    }
}

/// Canonicalizes a (possibly nested) attribute access into a stable guard
/// key — `root.a.b` — so two syntactically equal occurrences of the same
/// access path both benefit from a guard, rather than comparing raw AST
/// node identity as the source does (§9 open issue).
pub fn guard_key(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Name(Name { value, .. }) => Some(value.clone()),
        Expr::Attribute(a) => guard_key(&a.left).map(|base| format!("{base}.{}", a.right)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::no_position;

    #[test]
    fn guard_key_canonicalizes_nested_access() {
        let expr = Expr::Attribute(Attribute::new(
            Expr::Name(Name::new("v", no_position())),
            "some".to_string(),
            no_position(),
        ));
        assert_eq!(guard_key(&expr).as_deref(), Some("v.some"));
    }

    #[test]
    fn context_copy_clears_guards_but_keeps_variables() {
        let module = Module::new("main");
        let mut ctx = Context::new(module);
        ctx.bind_variable("x", Type::primitive("int"));
        ctx.guards.insert("v.some".to_string());

        let copied = ctx.copy();
        assert!(copied.guards.is_empty());
        assert_eq!(copied.variables.get("x"), Some(&Type::primitive("int")));
    }
}
