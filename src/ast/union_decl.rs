use super::{FieldHint, Name, Position};

/// `union Name[generic...] { fields... }` — same shape as a struct
/// declaration, distinguished by kind so the checker can enforce §4.5's
/// guard requirement on the resulting type.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDeclaration {
    pub name: Name,
    pub generic: Vec<Name>,
    pub fields: Vec<FieldHint>,
    pub position: Position,
}

impl UnionDeclaration {
    pub fn new(name: Name, generic: Vec<Name>, fields: Vec<FieldHint>, position: Position) -> Self {
        UnionDeclaration {
            name,
            generic,
            fields,
            position,
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.generic.is_empty()
    }

    pub fn render(&self) -> String {
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
        format!(
            "union {}{generic} {{ {} }}",
            self.name.render(),
            self.fields
                .iter()
                .map(FieldHint::render)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
