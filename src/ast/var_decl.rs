use super::{Expr, Name, Position};

/// `let name = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: Name,
    pub value: Expr,
    pub position: Position,
}

impl VariableDeclaration {
    pub fn new(name: Name, value: Expr, position: Position) -> Self {
        VariableDeclaration {
            name,
            value,
            position,
        }
    }

    pub fn render(&self) -> String {
        format!("let {} = {}", self.name.render(), self.value.render())
    }
}
