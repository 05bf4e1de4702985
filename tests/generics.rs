mod support;

use lang_checker::ast::TopLevelDecl;
use lang_checker::checker::{check_module, CheckedDecl};
use support::*;

#[test]
fn generic_struct_instantiation_is_memoized() {
    let provider = empty_provider();
    let box_decl = TopLevelDecl::StructDeclaration(struct_decl(
        "Box",
        vec!["T"],
        vec![field("value", type_name("T"))],
    ));
    let uses_box = extern_decl(
        "identity",
        vec![field(
            "a",
            subscript(type_name("Box"), vec![type_name("int")]),
        )],
        Some(subscript(type_name("Box"), vec![type_name("int")])),
    );
    let decls = vec![box_decl, TopLevelDecl::Extern(uses_box)];

    let (_module, checked) =
        check_module(&provider, default_config(), "main", &decls).expect("should check");

    let function = match &checked[1] {
        CheckedDecl::Extern(f) => f.clone(),
        other => panic!("expected an Extern declaration, got {other:?}"),
    };

    let parameter_type = &function.parameters()[0].1;
    let return_type = function.return_type();
    assert_eq!(
        parameter_type, return_type,
        "two references to Box[int] in the same module must resolve to the \
         same monomorphized Type instance (P6)"
    );
}

#[test]
fn instantiating_with_wrong_arity_is_rejected() {
    let provider = empty_provider();
    let box_decl = TopLevelDecl::StructDeclaration(struct_decl(
        "Box",
        vec!["T"],
        vec![field("value", type_name("T"))],
    ));
    let uses_box = extern_decl(
        "broken",
        vec![field(
            "a",
            subscript(type_name("Box"), vec![type_name("int"), type_name("str")]),
        )],
        None,
    );
    let decls = vec![box_decl, TopLevelDecl::Extern(uses_box)];

    let err = check_module(&provider, default_config(), "main", &decls).unwrap_err();
    assert!(matches!(err, lang_checker::checker::CheckError::Arity(_, _)));
}
