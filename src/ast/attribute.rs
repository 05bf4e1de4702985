use super::{Expr, Position};

/// Dotted access `left.right`. Depending on what `left` resolves to, this
/// doubles as qualified module access, a struct/union field read, or an
/// associated-function reference — the checker's name resolver (component B)
/// disambiguates.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub left: Box<Expr>,
    pub right: String,
    pub position: Position,
}

impl Attribute {
    pub fn new(left: Expr, right: impl Into<String>, position: Position) -> Self {
        Attribute {
            left: Box::new(left),
            right: right.into(),
            position,
        }
    }

    pub fn render(&self) -> String {
        format!("{}.{}", self.left.render(), self.right)
    }
}
