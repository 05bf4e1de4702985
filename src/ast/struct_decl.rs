use super::{Expr, Name, Position};

/// A single `name: hint` field entry appearing in a struct or union
/// declaration. `type_hint` is an unresolved reference — a `Name`,
/// `Attribute`, or `Subscript` — resolved by the type registry (§4.1).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldHint {
    pub name: Name,
    pub type_hint: Expr,
}

impl FieldHint {
    pub fn new(name: Name, type_hint: Expr) -> Self {
        FieldHint { name, type_hint }
    }

    pub fn render(&self) -> String {
        format!("{}: {}", self.name.render(), self.type_hint.render())
    }
}

/// `struct Name[generic...] { fields... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclaration {
    pub name: Name,
    pub generic: Vec<Name>,
    pub fields: Vec<FieldHint>,
    pub position: Position,
}

impl StructDeclaration {
    pub fn new(name: Name, generic: Vec<Name>, fields: Vec<FieldHint>, position: Position) -> Self {
        StructDeclaration {
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
            "struct {}{generic} {{ {} }}",
            self.name.render(),
            self.fields
                .iter()
                .map(FieldHint::render)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
