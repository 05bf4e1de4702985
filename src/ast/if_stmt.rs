use super::{Body, Expr, Position};

/// `if condition { true_body } [else { false_body }]`.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Box<Expr>,
    pub true_body: Body,
    pub false_body: Option<Body>,
    pub position: Position,
}

impl If {
    pub fn new(
        condition: Expr,
        true_body: Body,
        false_body: Option<Body>,
        position: Position,
    ) -> Self {
        If {
            condition: Box::new(condition),
            true_body,
            false_body,
            position,
        }
    }

    pub fn render(&self) -> String {
        match &self.false_body {
            Some(false_body) => format!(
                "if {} {} else {}",
                self.condition.render(),
                self.true_body.render(),
                false_body.render()
            ),
            None => format!("if {} {}", self.condition.render(), self.true_body.render()),
        }
    }
}
