mod support;

use lang_checker::ast::TopLevelDecl;
use lang_checker::checker::{check_module, CheckError};
use support::*;

#[test]
fn cyclic_imports_are_rejected() {
    let provider = FixedProvider::new(vec![
        ("a", vec![TopLevelDecl::Import(import("b"))]),
        ("b", vec![TopLevelDecl::Import(import("a"))]),
    ]);
    let decls = vec![TopLevelDecl::Import(import("a"))];

    let err = check_module(&provider, default_config(), "main", &decls).unwrap_err();
    assert!(matches!(err, CheckError::ImportCycle(_, _)));
}

#[test]
fn non_cyclic_diamond_import_still_checks() {
    let provider = FixedProvider::new(vec![
        (
            "shared",
            vec![TopLevelDecl::StructDeclaration(struct_decl(
                "Thing",
                vec![],
                vec![field("value", type_name("int"))],
            ))],
        ),
        ("left", vec![TopLevelDecl::Import(import("shared"))]),
        ("right", vec![TopLevelDecl::Import(import("shared"))]),
    ]);
    let decls = vec![
        TopLevelDecl::Import(import("left")),
        TopLevelDecl::Import(import("right")),
    ];

    check_module(&provider, default_config(), "main", &decls)
        .expect("importing the same module from two different paths is not a cycle");
}
