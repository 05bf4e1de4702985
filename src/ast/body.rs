use super::{Expr, If, Position, VariableDeclaration};

/// One statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VariableDeclaration(VariableDeclaration),
    If(If),
    Return(Expr, Position),
    Expression(Expr),
    Body(Body),
}

impl Stmt {
    pub fn position(&self) -> Position {
        match self {
            Stmt::VariableDeclaration(v) => v.position.clone(),
            Stmt::If(i) => i.position.clone(),
            Stmt::Return(_, position) => position.clone(),
            Stmt::Expression(e) => e.position(),
            Stmt::Body(b) => b.position.clone(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Stmt::VariableDeclaration(v) => v.render(),
            Stmt::If(i) => i.render(),
            Stmt::Return(e, _) => format!("return {}", e.render()),
            Stmt::Expression(e) => e.render(),
            Stmt::Body(b) => b.render(),
        }
    }
}

/// `{ lines... }` — a sequence of statements forming a lexical block.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub lines: Vec<Stmt>,
    pub position: Position,
}

impl Body {
    pub fn new(lines: Vec<Stmt>, position: Position) -> Self {
        Body { lines, position }
    }

    pub fn render(&self) -> String {
        let inner = self
            .lines
            .iter()
            .map(Stmt::render)
            .collect::<Vec<_>>()
            .join("; ");
        format!("{{ {inner} }}")
    }
}
