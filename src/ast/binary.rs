use super::{Expr, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    And,
    Or,
}

impl BinaryOp {
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::LessThan
                | BinaryOp::GreaterThan
                | BinaryOp::And
                | BinaryOp::Or
        )
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Subtract | BinaryOp::Multiply | BinaryOp::Divide
        )
    }

    pub fn render(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperator {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub position: Position,
}

impl BinaryOperator {
    pub fn new(op: BinaryOp, left: Expr, right: Expr, position: Position) -> Self {
        BinaryOperator {
            op,
            left: Box::new(left),
            right: Box::new(right),
            position,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.left.render(),
            self.op.render(),
            self.right.render()
        )
    }
}
