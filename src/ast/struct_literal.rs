use super::{Expr, Position};

/// `Name { args... }` — a struct or union construction. For a union exactly
/// one argument is expected; the checker picks the matching arm (§4.4).
#[derive(Debug, Clone, PartialEq)]
pub struct StructLiteral {
    pub name: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

impl StructLiteral {
    pub fn new(name: Expr, arguments: Vec<Expr>, position: Position) -> Self {
        StructLiteral {
            name: Box::new(name),
            arguments,
            position,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{} {{ {} }}",
            self.name.render(),
            self.arguments
                .iter()
                .map(Expr::render)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
