use super::{Expr, Position};

/// `name(arguments...)`, optionally with explicit type arguments
/// (`name[generic...](arguments...)`), which forces instantiation of a
/// generic function (§4.7).
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub generic: Option<Vec<Expr>>,
    pub position: Position,
}

impl Call {
    pub fn new(name: Expr, arguments: Vec<Expr>, position: Position) -> Self {
        Call {
            name: Box::new(name),
            arguments,
            generic: None,
            position,
        }
    }

    pub fn with_generic(mut self, generic: Vec<Expr>) -> Self {
        self.generic = Some(generic);
        self
    }

    pub fn render(&self) -> String {
        let generic = match &self.generic {
            Some(items) if !items.is_empty() => format!(
                "[{}]",
                items.iter().map(Expr::render).collect::<Vec<_>>().join(", ")
            ),
            _ => String::new(),
        };
        format!(
            "{}{generic}({})",
            self.name.render(),
            self.arguments
                .iter()
                .map(Expr::render)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
