use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::trace;

use crate::ast::{Expr, Name};

use super::error::{CheckError, UnknownField, UnknownImport, UnknownType};
use super::function::{Function, GenericFunction};
use super::instantiate;
use super::primitives;
use super::types::{Type, TypeEntry};

#[derive(Debug, Clone)]
pub enum FunctionEntry {
    Function(Function),
    Generic(GenericFunction),
}

#[derive(Debug)]
struct ModuleInner {
    name: String,
    types: HashMap<String, TypeEntry>,
    anon_types: HashMap<String, Type>,
    functions: HashMap<String, FunctionEntry>,
    anon_functions: HashMap<String, Function>,
    imports: HashMap<String, Module>,
}

/// One compilation unit; owns its type, function, and import tables
/// (§3.2). Cheaply cloneable — every clone shares the same underlying
/// tables, which is what lets a `Context` carry "the current module" by
/// value instead of by lifetime-bound reference.
#[derive(Debug, Clone)]
pub struct Module(Rc<RefCell<ModuleInner>>);

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Module(Rc::new(RefCell::new(ModuleInner {
            name: name.into(),
            types: HashMap::new(),
            anon_types: HashMap::new(),
            functions: HashMap::new(),
            anon_functions: HashMap::new(),
            imports: HashMap::new(),
        })))
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn register_type(&self, name: impl Into<String>, entry: TypeEntry) {
        self.0.borrow_mut().types.insert(name.into(), entry);
    }

    pub fn register_function(&self, name: impl Into<String>, entry: FunctionEntry) {
        self.0.borrow_mut().functions.insert(name.into(), entry);
    }

    pub fn register_import(&self, alias: impl Into<String>, module: Module) {
        self.0.borrow_mut().imports.insert(alias.into(), module);
    }

    pub fn get_import(&self, alias: &str) -> Option<Module> {
        self.0.borrow().imports.get(alias).cloned()
    }

    pub fn get_type_entry(&self, name: &str) -> Option<TypeEntry> {
        self.0.borrow().types.get(name).cloned()
    }

    pub fn get_function_entry(&self, name: &str) -> Option<FunctionEntry> {
        self.0.borrow().functions.get(name).cloned()
    }

    pub fn cache_anon_type(&self, key: impl Into<String>, type_: Type) {
        self.0.borrow_mut().anon_types.insert(key.into(), type_);
    }

    pub fn get_anon_type(&self, key: &str) -> Option<Type> {
        self.0.borrow().anon_types.get(key).cloned()
    }

    pub fn cache_anon_function(&self, key: impl Into<String>, function: Function) {
        self.0
            .borrow_mut()
            .anon_functions
            .insert(key.into(), function);
    }

    pub fn get_anon_function(&self, key: &str) -> Option<Function> {
        self.0.borrow().anon_functions.get(key).cloned()
    }

    /// `import_type` (§4.1): resolve a `Name`, dotted `Attribute`, or
    /// parameterized `Subscript` against primitives, this module's type
    /// table, and (recursively) imported modules.
    pub fn import_type(&self, name: &Expr) -> Result<Type, CheckError> {
        match name {
            Expr::Name(n) => self.import_type_by_name(n),
            Expr::Attribute(a) => {
                let alias = leftmost_name(&a.left).ok_or_else(|| {
                    unknown_import_error(&a.left, &self.name())
                })?;
                let module = self.get_import(&alias).ok_or_else(|| {
                    CheckError::UnknownImport(
                        UnknownImport {
                            alias: alias.clone(),
                            module: self.name(),
                        },
                        a.position.clone(),
                    )
                })?;
                module.import_type(&Expr::Name(Name::new(a.right.clone(), a.position.clone())))
            }
            Expr::Subscript(s) => {
                if leftmost_name(&s.head).as_deref() == Some("ptr") {
                    if s.items.len() != 1 {
                        return Err(CheckError::Arity(
                            super::error::ArityMismatch {
                                construct: format!("type '{}'", name_expr_render(name)),
                                expected: 1,
                                got: s.items.len(),
                            },
                            s.position.clone(),
                        ));
                    }
                    let referent = self.import_type(&s.items[0])?;
                    return Ok(Type::new_ptr_for(&referent));
                }

                let key = subscript_key(&s.head, &s.items, self)?;
                if let Some(cached) = self.get_anon_type(&key) {
                    trace!("monomorphization cache hit for type {key} in module {}", self.name());
                    return Ok(cached);
                }

                let head_name = leftmost_name(&s.head).ok_or_else(|| {
                    CheckError::UnknownType(
                        UnknownType {
                            name: name_expr_render(&s.head),
                            module: self.name(),
                        },
                        s.position.clone(),
                    )
                })?;
                let entry = self.get_type_entry(&head_name).ok_or_else(|| {
                    CheckError::UnknownType(
                        UnknownType {
                            name: head_name.clone(),
                            module: self.name(),
                        },
                        s.position.clone(),
                    )
                })?;
                let generic = match entry {
                    TypeEntry::Generic(g) => g,
                    TypeEntry::Type(_) => {
                        return Err(CheckError::NotGeneric(
                            super::error::NotGeneric { name: head_name },
                            s.position.clone(),
                        ))
                    }
                };

                let mut args = Vec::with_capacity(s.items.len());
                for item in &s.items {
                    args.push(self.import_type(item)?);
                }

                trace!("instantiating generic type {head_name} in module {}", self.name());
                let instantiated = instantiate::instantiate_type(self, &generic, &args, &s.position)?;
                self.cache_anon_type(key, instantiated.clone());
                Ok(instantiated)
            }
            other => Err(CheckError::Unsupported(
                super::error::Unsupported {
                    construct: format!("type hint {}", other.render()),
                },
                other.position(),
            )),
        }
    }

    fn import_type_by_name(&self, n: &Name) -> Result<Type, CheckError> {
        if let Some(primitive) = primitives::lookup(&n.value) {
            return Ok(primitive);
        }
        match self.get_type_entry(&n.value) {
            Some(TypeEntry::Type(t)) => Ok(t),
            Some(TypeEntry::Generic(_)) => Err(CheckError::GenericRequiresArguments(
                super::error::GenericRequiresArguments {
                    name: n.value.clone(),
                },
                n.position.clone(),
            )),
            None => Err(CheckError::UnknownType(
                UnknownType {
                    name: n.value.clone(),
                    module: self.name(),
                },
                n.position.clone(),
            )),
        }
    }

    /// `import_function` (§4.1): module-table lookup, not a variable
    /// lookup — dotted access may cross into an import or a declared
    /// type's associated-function table.
    pub fn import_function(&self, name: &Expr) -> Result<FunctionEntry, CheckError> {
        match name {
            Expr::Name(n) => self.get_function_entry(&n.value).ok_or_else(|| {
                CheckError::UnknownFunction(
                    super::error::UnknownFunction {
                        name: n.value.clone(),
                        module: self.name(),
                    },
                    n.position.clone(),
                )
            }),
            Expr::Attribute(a) => {
                let left_name = leftmost_name(&a.left);
                if let Some(alias) = &left_name {
                    if let Some(module) = self.get_import(alias) {
                        return module.import_function(&Expr::Name(Name::new(
                            a.right.clone(),
                            a.position.clone(),
                        )));
                    }
                    if let Some(TypeEntry::Type(t)) = self.get_type_entry(alias) {
                        if let Some(f) = t.function(&a.right) {
                            return Ok(FunctionEntry::Function(f));
                        }
                        if let Some(g) = t.generic_function(&a.right) {
                            return Ok(FunctionEntry::Generic(g));
                        }
                        return Err(CheckError::UnknownField(
                            UnknownField {
                                field: a.right.clone(),
                                type_name: t.render(),
                                module: self.name(),
                            },
                            a.position.clone(),
                        ));
                    }
                }
                Err(unknown_import_error(&a.left, &self.name()))
            }
            Expr::Subscript(s) => {
                let base = self.import_function(&s.head)?;
                let generic = match base {
                    FunctionEntry::Generic(g) => g,
                    FunctionEntry::Function(f) => {
                        return Err(CheckError::NotGeneric(
                            super::error::NotGeneric { name: f.0.name.clone() },
                            s.position.clone(),
                        ))
                    }
                };
                let key = subscript_key(&s.head, &s.items, self)?;
                if let Some(cached) = self.get_anon_function(&key) {
                    trace!("monomorphization cache hit for function {key} in module {}", self.name());
                    return Ok(FunctionEntry::Function(cached));
                }
                let mut args = Vec::with_capacity(s.items.len());
                for item in &s.items {
                    args.push(self.import_type(item)?);
                }
                let instantiated = instantiate::instantiate_function(self, &generic, &args, &s.position)?;
                self.cache_anon_function(key, instantiated.clone());
                Ok(FunctionEntry::Function(instantiated))
            }
            other => Err(CheckError::Unsupported(
                super::error::Unsupported {
                    construct: format!("function reference {}", other.render()),
                },
                other.position(),
            )),
        }
    }
}

fn unknown_import_error(left: &Expr, _module: &str) -> CheckError {
    CheckError::InvalidAttributeReceiver(
        super::error::InvalidAttributeReceiver {
            receiver: left.render(),
        },
        left.position(),
    )
}

fn leftmost_name(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Name(n) => Some(n.value.clone()),
        _ => None,
    }
}

fn name_expr_render(expr: &Expr) -> String {
    expr.render()
}

/// A stable cache key for a `Subscript(head, items)` instantiation —
/// `head[item1, item2, ...]` rendered from the *resolved* argument types so
/// two textually different but semantically identical subscripts (e.g. via
/// an alias) still collide on the same cache entry.
fn subscript_key(head: &Expr, items: &[Expr], module: &Module) -> Result<String, CheckError> {
    let head_name = leftmost_name(head).unwrap_or_else(|| head.render());
    let mut rendered = Vec::with_capacity(items.len());
    for item in items {
        rendered.push(module.import_type(item)?.render());
    }
    Ok(format!("{head_name}[{}]", rendered.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::no_position;

    #[test]
    fn primitive_resolves_without_registration() {
        let module = Module::new("main");
        let resolved = module
            .import_type(&Expr::Name(Name::new("int", no_position())))
            .unwrap();
        assert_eq!(resolved, primitives::lookup("int").unwrap());
    }

    #[test]
    fn unknown_type_fails() {
        let module = Module::new("main");
        let err = module
            .import_type(&Expr::Name(Name::new("Widget", no_position())))
            .unwrap_err();
        assert!(matches!(err, CheckError::UnknownType(_, _)));
    }
}
