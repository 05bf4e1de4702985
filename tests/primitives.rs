mod support;

use lang_checker::ast::TopLevelDecl;
use lang_checker::checker::{check_module, CheckError};
use support::*;

#[test]
fn extern_declaration_resolves_primitive_types() {
    let provider = empty_provider();
    let decls = vec![TopLevelDecl::Extern(extern_decl(
        "add",
        vec![field("a", type_name("int")), field("b", type_name("int"))],
        Some(type_name("int")),
    ))];

    let (_module, checked) =
        check_module(&provider, default_config(), "main", &decls).expect("extern should check");
    assert_eq!(checked.len(), 1);
}

#[test]
fn unknown_parameter_type_is_rejected() {
    let provider = empty_provider();
    let decls = vec![TopLevelDecl::Extern(extern_decl(
        "broken",
        vec![field("a", type_name("Widget"))],
        None,
    ))];

    let err = check_module(&provider, default_config(), "main", &decls).unwrap_err();
    assert!(matches!(err, CheckError::UnknownType(_, _)));
}
