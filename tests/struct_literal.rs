mod support;

use lang_checker::ast::{Stmt, TopLevelDecl};
use lang_checker::checker::{check_module, CheckError};
use support::*;

fn point_decl() -> TopLevelDecl {
    TopLevelDecl::StructDeclaration(struct_decl(
        "Point",
        vec![],
        vec![field("x", type_name("int")), field("y", type_name("int"))],
    ))
}

#[test]
fn struct_literal_with_matching_arity_checks() {
    let provider = empty_provider();
    let make_point = function_decl(
        "make_point",
        vec![],
        Some(type_name("Point")),
        body(vec![Stmt::Return(
            struct_literal(type_name("Point"), vec![int_literal(1), int_literal(2)]),
            lang_checker::ast::no_position(),
        )]),
    );
    let decls = vec![point_decl(), TopLevelDecl::FunctionDeclaration(make_point)];

    let (_module, checked) =
        check_module(&provider, default_config(), "main", &decls).expect("should check");
    assert_eq!(checked.len(), 2);
}

#[test]
fn struct_literal_with_wrong_arity_is_rejected() {
    let provider = empty_provider();
    let make_point = function_decl(
        "make_point",
        vec![],
        Some(type_name("Point")),
        body(vec![Stmt::Return(
            struct_literal(type_name("Point"), vec![int_literal(1)]),
            lang_checker::ast::no_position(),
        )]),
    );
    let decls = vec![point_decl(), TopLevelDecl::FunctionDeclaration(make_point)];

    let err = check_module(&provider, default_config(), "main", &decls).unwrap_err();
    assert!(matches!(err, CheckError::Arity(_, _)));
}
