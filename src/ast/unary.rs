use super::{Expr, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `&expr` — address-of; typed as `ptr<T(expr)>` (§4.4).
    AddressOf,
    Not,
    Negate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperator {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
    pub position: Position,
}

impl UnaryOperator {
    pub fn new(op: UnaryOp, expr: Expr, position: Position) -> Self {
        UnaryOperator {
            op,
            expr: Box::new(expr),
            position,
        }
    }

    pub fn render(&self) -> String {
        let sigil = match self.op {
            UnaryOp::AddressOf => "&",
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
        };
        format!("{sigil}{}", self.expr.render())
    }
}
