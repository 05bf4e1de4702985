use super::{
    Attribute, BinaryOperator, Call, Literal, Name, Position, StructLiteral, Subscript, TestGuard,
    UnaryOperator,
};

/// Any expression the checker may be asked to type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Name(Name),
    Attribute(Attribute),
    Subscript(Subscript),
    Literal(Literal),
    StructLiteral(StructLiteral),
    Call(Call),
    UnaryOperator(UnaryOperator),
    BinaryOperator(BinaryOperator),
    TestGuard(TestGuard),
}

impl Expr {
    pub fn position(&self) -> Position {
        match self {
            Expr::Name(n) => n.position.clone(),
            Expr::Attribute(a) => a.position.clone(),
            Expr::Subscript(s) => s.position.clone(),
            Expr::Literal(l) => l.position.clone(),
            Expr::StructLiteral(s) => s.position.clone(),
            Expr::Call(c) => c.position.clone(),
            Expr::UnaryOperator(u) => u.position.clone(),
            Expr::BinaryOperator(b) => b.position.clone(),
            Expr::TestGuard(t) => t.position.clone(),
        }
    }

    /// A diagnostic-friendly textual rendering, standing in for the
    /// source-text rendering a real parser would supply.
    pub fn render(&self) -> String {
        match self {
            Expr::Name(n) => n.render(),
            Expr::Attribute(a) => a.render(),
            Expr::Subscript(s) => s.render(),
            Expr::Literal(l) => l.render(),
            Expr::StructLiteral(s) => s.render(),
            Expr::Call(c) => c.render(),
            Expr::UnaryOperator(u) => u.render(),
            Expr::BinaryOperator(b) => b.render(),
            Expr::TestGuard(t) => t.render(),
        }
    }
}
