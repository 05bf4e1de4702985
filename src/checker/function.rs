use std::rc::Rc;

use crate::ast::FunctionDeclaration;

use super::types::Type;
use super::typed::CheckedBody;

#[derive(Debug)]
pub struct FunctionInner {
    pub name: String,
    pub parameters: Vec<(String, Type)>,
    pub return_type: Type,
    /// `Some` marks this as an `AssociatedFunction` (§3.2): the receiver's
    /// type, auto-prepended to the argument list on a dotted call (§4.7).
    pub receiver: Option<Type>,
    pub body: Option<CheckedBody>,
}

/// A checked declaration — `extern` functions carry no body (§4.6).
/// Cheaply cloneable so it can live in both a module's function table and,
/// for associated functions, the receiver type's function table.
#[derive(Debug, Clone)]
pub struct Function(pub Rc<FunctionInner>);

impl Function {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<(String, Type)>,
        return_type: Type,
        receiver: Option<Type>,
        body: Option<CheckedBody>,
    ) -> Self {
        Function(Rc::new(FunctionInner {
            name: name.into(),
            parameters,
            return_type,
            receiver,
            body,
        }))
    }

    pub fn is_associated(&self) -> bool {
        self.0.receiver.is_some()
    }

    pub fn parameters(&self) -> &[(String, Type)] {
        &self.0.parameters
    }

    pub fn return_type(&self) -> &Type {
        &self.0.return_type
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// An unchecked function declaration with parameter (type-parameter) names;
/// produces a `Function` on instantiation (§3.2, §4.3).
#[derive(Debug, Clone)]
pub struct GenericFunction {
    pub parameters: Vec<String>,
    pub declaration: FunctionDeclaration,
    pub module_name: String,
    /// Set when the declaration's head names a dotted receiver — the
    /// instantiated function is registered as an `AssociatedFunction` on
    /// that type rather than in the module's function table.
    pub receiver_name: Option<String>,
}
