//! Shared fixtures for the integration tests. There is no lexer/parser in
//! this crate, so "source" here means hand-built `TopLevelDecl` trees —
//! the same shape a real front end would hand to [`lang_checker::Driver`].

use std::path::Path;

use lang_checker::ast::{
    no_position, Attribute, Body, Call, Expr, Extern, FieldHint, FunctionDeclaration,
    FunctionHead, If, Import, Name, Stmt, StructDeclaration, StructLiteral, TestGuard,
    TopLevelDecl, UnionDeclaration, VariableDeclaration,
};
use lang_checker::checker::{CheckerConfig, SourceProvider};

pub fn name(value: &str) -> Name {
    Name::new(value, no_position())
}

pub fn type_name(value: &str) -> Expr {
    Expr::Name(name(value))
}

pub fn field(name_str: &str, hint: Expr) -> FieldHint {
    FieldHint::new(name(name_str), hint)
}

pub fn attribute(left: Expr, right: &str) -> Expr {
    Expr::Attribute(Attribute::new(left, right, no_position()))
}

pub fn var(value: &str) -> Expr {
    Expr::Name(name(value))
}

pub fn int_literal(v: i64) -> Expr {
    Expr::Literal(lang_checker::ast::Literal::int(v, no_position()))
}

pub fn struct_literal(type_name: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::StructLiteral(StructLiteral::new(type_name, arguments, no_position()))
}

pub fn body(lines: Vec<Stmt>) -> Body {
    Body::new(lines, no_position())
}

pub fn let_stmt(binding: &str, value: Expr) -> Stmt {
    Stmt::VariableDeclaration(VariableDeclaration::new(name(binding), value, no_position()))
}

pub fn if_stmt(condition: Expr, true_body: Body, false_body: Option<Body>) -> Stmt {
    Stmt::If(If::new(condition, true_body, false_body, no_position()))
}

pub fn test_guard(expr: Expr) -> Expr {
    Expr::TestGuard(TestGuard::new(expr, no_position()))
}

pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::Call(Call::new(callee, arguments, no_position()))
}

pub fn subscript(head: Expr, items: Vec<Expr>) -> Expr {
    Expr::Subscript(lang_checker::ast::Subscript::new(head, items, no_position()))
}

pub fn struct_decl(
    name_str: &str,
    generic: Vec<&str>,
    fields: Vec<FieldHint>,
) -> StructDeclaration {
    StructDeclaration::new(
        name(name_str),
        generic.into_iter().map(name).collect(),
        fields,
        no_position(),
    )
}

pub fn union_decl(name_str: &str, fields: Vec<FieldHint>) -> UnionDeclaration {
    UnionDeclaration::new(name(name_str), Vec::new(), fields, no_position())
}

pub fn extern_decl(
    name_str: &str,
    parameters: Vec<FieldHint>,
    return_hint: Option<Expr>,
) -> Extern {
    Extern::new(FunctionHead::new(
        name(name_str),
        parameters,
        return_hint,
        Vec::new(),
        no_position(),
    ))
}

pub fn function_decl(
    name_str: &str,
    parameters: Vec<FieldHint>,
    return_hint: Option<Expr>,
    body: Body,
) -> FunctionDeclaration {
    FunctionDeclaration::new(
        FunctionHead::new(name(name_str), parameters, return_hint, Vec::new(), no_position()),
        body,
    )
}

pub fn generic_function_decl(
    name_str: &str,
    generic: Vec<&str>,
    parameters: Vec<FieldHint>,
    return_hint: Option<Expr>,
    body: Body,
) -> FunctionDeclaration {
    FunctionDeclaration::new(
        FunctionHead::new(
            name(name_str),
            parameters,
            return_hint,
            generic.into_iter().map(name).collect(),
            no_position(),
        ),
        body,
    )
}

pub fn associated_function_decl(
    receiver_type: &str,
    name_str: &str,
    parameters: Vec<FieldHint>,
    return_hint: Option<Expr>,
    body: Body,
) -> FunctionDeclaration {
    FunctionDeclaration::new(
        FunctionHead::new(name(name_str), parameters, return_hint, Vec::new(), no_position())
            .with_receiver(name(receiver_type)),
        body,
    )
}

pub fn import(module_name: &str) -> Import {
    Import::new(module_name, no_position())
}

/// A [`SourceProvider`] backed by an in-memory map from dotted module name
/// to its declarations, standing in for a real file-system-backed parser.
pub struct FixedProvider {
    modules: std::collections::HashMap<String, Vec<TopLevelDecl>>,
}

impl FixedProvider {
    pub fn new(modules: Vec<(&str, Vec<TopLevelDecl>)>) -> Self {
        FixedProvider {
            modules: modules
                .into_iter()
                .map(|(dotted_name, decls)| (dotted_name.to_string(), decls))
                .collect(),
        }
    }
}

impl SourceProvider for FixedProvider {
    fn load(&self, path: &Path) -> std::io::Result<Vec<TopLevelDecl>> {
        let dotted = path
            .with_extension("")
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(".");
        self.modules
            .get(&dotted)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, dotted))
    }
}

pub fn empty_provider() -> FixedProvider {
    FixedProvider::new(Vec::new())
}

pub fn default_config() -> CheckerConfig {
    CheckerConfig::default()
}
