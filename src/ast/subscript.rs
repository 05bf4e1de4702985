use super::{Expr, Position};

/// A parameterized reference, e.g. `Box[int]` or `id[int]`. Names a generic
/// type or function together with the concrete type arguments it should be
/// instantiated with.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscript {
    pub head: Box<Expr>,
    pub items: Vec<Expr>,
    pub position: Position,
}

impl Subscript {
    pub fn new(head: Expr, items: Vec<Expr>, position: Position) -> Self {
        Subscript {
            head: Box::new(head),
            items,
            position,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}[{}]",
            self.head.render(),
            self.items
                .iter()
                .map(Expr::render)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
