use super::{Extern, FunctionDeclaration, Import, Position, StructDeclaration, UnionDeclaration};

/// One top-level declaration, as produced by the parser for a single
/// compilation unit (§3.1). The declaration checker (§4.6) dispatches on
/// this enum in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevelDecl {
    Import(Import),
    StructDeclaration(StructDeclaration),
    UnionDeclaration(UnionDeclaration),
    Extern(Extern),
    FunctionDeclaration(FunctionDeclaration),
}

impl TopLevelDecl {
    pub fn position(&self) -> Position {
        match self {
            TopLevelDecl::Import(i) => i.position.clone(),
            TopLevelDecl::StructDeclaration(s) => s.position.clone(),
            TopLevelDecl::UnionDeclaration(u) => u.position.clone(),
            TopLevelDecl::Extern(e) => e.head.position.clone(),
            TopLevelDecl::FunctionDeclaration(f) => f.head.position.clone(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            TopLevelDecl::Import(i) => i.render(),
            TopLevelDecl::StructDeclaration(s) => s.render(),
            TopLevelDecl::UnionDeclaration(u) => u.render(),
            TopLevelDecl::Extern(e) => e.render(),
            TopLevelDecl::FunctionDeclaration(f) => f.render(),
        }
    }
}
