use super::{Body, Expr, FieldHint, Name, Position};

/// `name[generic...](parameters...) -> return_hint`. A dotted `name`
/// (e.g. `Vec.len`) marks the declaration as associated, with the first
/// parameter serving as the receiver (§3.2).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionHead {
    pub name: Name,
    pub receiver: Option<Name>,
    pub parameters: Vec<FieldHint>,
    pub return_hint: Option<Expr>,
    pub generic: Vec<Name>,
    pub position: Position,
}

impl FunctionHead {
    pub fn new(
        name: Name,
        parameters: Vec<FieldHint>,
        return_hint: Option<Expr>,
        generic: Vec<Name>,
        position: Position,
    ) -> Self {
        FunctionHead {
            name,
            receiver: None,
            parameters,
            return_hint,
            generic,
            position,
        }
    }

    pub fn with_receiver(mut self, receiver: Name) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.generic.is_empty()
    }

    pub fn is_associated(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn render(&self) -> String {
        let qualifier = match &self.receiver {
            Some(receiver) => format!("{}.", receiver.render()),
            None => String::new(),
        };
        let generic = if self.generic.is_empty() {
            String::new()
        } else {
            format!(
                "[{}]",
                self.generic
                    .iter()
                    .map(Name::render)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        };
        let params = self
            .parameters
            .iter()
            .map(FieldHint::render)
            .collect::<Vec<_>>()
            .join(", ");
        let ret = match &self.return_hint {
            Some(hint) => format!(" -> {}", hint.render()),
            None => String::new(),
        };
        format!("{qualifier}{}{generic}({params}){ret}", self.name.render())
    }
}

/// `fn head { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub head: FunctionHead,
    pub body: Body,
}

impl FunctionDeclaration {
    pub fn new(head: FunctionHead, body: Body) -> Self {
        FunctionDeclaration { head, body }
    }

    pub fn render(&self) -> String {
        format!("fn {} {}", self.head.render(), self.body.render())
    }
}
