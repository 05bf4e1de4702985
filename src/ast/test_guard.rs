use super::{Expr, Position};

/// `test(expr)` — wraps a union-discriminant check. When it is the direct
/// condition of an `If`, the checker adds `expr` to the guard set for the
/// true branch (§4.5).
#[derive(Debug, Clone, PartialEq)]
pub struct TestGuard {
    pub expr: Box<Expr>,
    pub position: Position,
}

impl TestGuard {
    pub fn new(expr: Expr, position: Position) -> Self {
        TestGuard {
            expr: Box::new(expr),
            position,
        }
    }

    pub fn render(&self) -> String {
        format!("test({})", self.expr.render())
    }
}
