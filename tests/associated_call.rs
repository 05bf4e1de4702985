mod support;

use lang_checker::ast::{no_position, Stmt, TopLevelDecl};
use lang_checker::checker::{check_module, CheckError};
use support::*;

fn vec_decl() -> TopLevelDecl {
    TopLevelDecl::StructDeclaration(struct_decl("Vec", vec![], vec![field("len", type_name("int"))]))
}

fn get_len_decl() -> TopLevelDecl {
    TopLevelDecl::FunctionDeclaration(associated_function_decl(
        "Vec",
        "get_len",
        vec![field("self", type_name("Vec"))],
        Some(type_name("int")),
        body(vec![Stmt::Return(
            attribute(var("self"), "len"),
            no_position(),
        )]),
    ))
}

#[test]
fn dotted_call_injects_the_receiver_as_first_argument() {
    let provider = empty_provider();
    let caller = function_decl(
        "use_it",
        vec![field("v", type_name("Vec"))],
        Some(type_name("int")),
        body(vec![Stmt::Return(
            call(attribute(var("v"), "get_len"), vec![]),
            no_position(),
        )]),
    );
    let decls = vec![
        vec_decl(),
        get_len_decl(),
        TopLevelDecl::FunctionDeclaration(caller),
    ];

    check_module(&provider, default_config(), "main", &decls)
        .expect("dotted call should auto-inject the receiver and match arity");
}

#[test]
fn supplying_the_receiver_explicitly_still_overflows_arity() {
    let provider = empty_provider();
    let caller = function_decl(
        "use_it",
        vec![field("v", type_name("Vec"))],
        Some(type_name("int")),
        body(vec![Stmt::Return(
            call(attribute(var("v"), "get_len"), vec![var("v")]),
            no_position(),
        )]),
    );
    let decls = vec![
        vec_decl(),
        get_len_decl(),
        TopLevelDecl::FunctionDeclaration(caller),
    ];

    let err = check_module(&provider, default_config(), "main", &decls).unwrap_err();
    assert!(matches!(err, CheckError::Arity(_, _)));
}
