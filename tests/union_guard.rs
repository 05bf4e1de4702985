mod support;

use lang_checker::ast::{Stmt, TopLevelDecl};
use lang_checker::checker::{check_module, CheckError};
use support::*;

fn opt_decl() -> TopLevelDecl {
    TopLevelDecl::UnionDeclaration(union_decl(
        "Opt",
        vec![field("some", type_name("int")), field("none", type_name("void"))],
    ))
}

#[test]
fn guarded_union_field_access_inside_if_checks() {
    let provider = empty_provider();
    let handler = function_decl(
        "handle",
        vec![field("v", type_name("Opt"))],
        None,
        body(vec![if_stmt(
            test_guard(attribute(var("v"), "some")),
            body(vec![let_stmt("x", attribute(var("v"), "some"))]),
            None,
        )]),
    );
    let decls = vec![opt_decl(), TopLevelDecl::FunctionDeclaration(handler)];

    check_module(&provider, default_config(), "main", &decls)
        .expect("access inside the guarded branch should type-check");
}

#[test]
fn unguarded_union_field_access_is_rejected() {
    let provider = empty_provider();
    let handler = function_decl(
        "handle",
        vec![field("v", type_name("Opt"))],
        None,
        body(vec![Stmt::Expression(attribute(var("v"), "some"))]),
    );
    let decls = vec![opt_decl(), TopLevelDecl::FunctionDeclaration(handler)];

    let err = check_module(&provider, default_config(), "main", &decls).unwrap_err();
    assert!(matches!(err, CheckError::UnguardedUnionField(_, _)));
}

#[test]
fn guard_does_not_carry_into_the_false_branch() {
    let provider = empty_provider();
    let handler = function_decl(
        "handle",
        vec![field("v", type_name("Opt"))],
        None,
        body(vec![if_stmt(
            test_guard(attribute(var("v"), "some")),
            body(vec![let_stmt("x", attribute(var("v"), "some"))]),
            Some(body(vec![Stmt::Expression(attribute(var("v"), "some"))])),
        )]),
    );
    let decls = vec![opt_decl(), TopLevelDecl::FunctionDeclaration(handler)];

    let err = check_module(&provider, default_config(), "main", &decls).unwrap_err();
    assert!(matches!(err, CheckError::UnguardedUnionField(_, _)));
}
