use crate::ast::{Body, If, Stmt};

use super::context::{guard_key, Context};
use super::error::CheckError;
use super::expr::check_expression;
use super::typed::{CheckedBody, CheckedStmt};

/// Traverses a function body (§4.5, §4.6), maintaining the lexical
/// variable environment and the active union-guard set.
pub fn check_body(ctx: &mut Context, body: &Body) -> Result<CheckedBody, CheckError> {
    let mut lines = Vec::with_capacity(body.lines.len());
    for line in &body.lines {
        lines.push(check_stmt(ctx, line)?);
    }
    Ok(CheckedBody { lines })
}

fn check_stmt(ctx: &mut Context, stmt: &Stmt) -> Result<CheckedStmt, CheckError> {
    match stmt {
        Stmt::VariableDeclaration(v) => {
            let value = check_expression(ctx, &v.value)?;
            ctx.bind_variable(v.name.value.clone(), value.type_.clone());
            Ok(CheckedStmt::VariableDeclaration {
                name: v.name.value.clone(),
                value,
            })
        }
        Stmt::If(i) => check_if(ctx, i),
        Stmt::Return(value, _) => Ok(CheckedStmt::Return(check_expression(ctx, value)?)),
        Stmt::Expression(e) => Ok(CheckedStmt::Expression(check_expression(ctx, e)?)),
        Stmt::Body(inner) => Ok(CheckedStmt::Body(check_body(ctx, inner)?)),
    }
}

/// `check_if` (§4.5): a `TestGuard` condition adds its canonicalized access
/// path to the guard set for the true branch only, and the set is restored
/// to exactly its prior value afterwards (P8) — the false branch never
/// inherits the guard.
fn check_if(ctx: &mut Context, if_: &If) -> Result<CheckedStmt, CheckError> {
    let condition = check_expression(ctx, &if_.condition)?;

    let added_guard = match if_.condition.as_ref() {
        crate::ast::Expr::TestGuard(t) => guard_key(&t.expr),
        _ => None,
    };
    if let Some(key) = &added_guard {
        ctx.guards.insert(key.clone());
    }

    let true_body = check_body(ctx, &if_.true_body);

    if let Some(key) = &added_guard {
        ctx.guards.remove(key);
    }
    let true_body = true_body?;

    let false_body = match &if_.false_body {
        Some(body) => Some(check_body(ctx, body)?),
        None => None,
    };

    Ok(CheckedStmt::If {
        condition,
        true_body,
        false_body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        no_position, Expr, Name, TestGuard, VariableDeclaration,
    };
    use crate::checker::module::Module;
    use crate::checker::types::{DeclKind, Type, TypeName};

    fn union_type() -> Type {
        Type::new(
            TypeName::Simple("Opt".to_string()),
            vec![
                ("some".to_string(), Type::primitive("int")),
                ("none".to_string(), Type::primitive("void")),
            ],
            Some(DeclKind::Union),
            "main",
        )
    }

    #[test]
    fn guard_added_and_removed_around_if() {
        let module = Module::new("main");
        let mut ctx = Context::new(module);
        ctx.bind_variable("v", union_type());

        let access = Expr::Attribute(crate::ast::Attribute::new(
            Expr::Name(Name::new("v", no_position())),
            "some".to_string(),
            no_position(),
        ));
        let if_stmt = If::new(
            Expr::TestGuard(TestGuard::new(access.clone(), no_position())),
            Body::new(
                vec![Stmt::Expression(access.clone())],
                no_position(),
            ),
            None,
            no_position(),
        );

        check_stmt(&mut ctx, &Stmt::If(if_stmt)).expect("guarded access should type-check");
        assert!(ctx.guards.is_empty(), "guard must not leak past the if (P8)");
    }

    #[test]
    fn unguarded_union_access_fails() {
        let module = Module::new("main");
        let mut ctx = Context::new(module);
        ctx.bind_variable("v", union_type());

        let access = Expr::Attribute(crate::ast::Attribute::new(
            Expr::Name(Name::new("v", no_position())),
            "some".to_string(),
            no_position(),
        ));

        let err = check_stmt(&mut ctx, &Stmt::Expression(access)).unwrap_err();
        assert!(matches!(err, CheckError::UnguardedUnionField(_, _)));
    }

    #[test]
    fn variable_declaration_binds_type() {
        let module = Module::new("main");
        let mut ctx = Context::new(module);
        let decl = VariableDeclaration::new(
            Name::new("x", no_position()),
            Expr::Literal(crate::ast::Literal::int(1, no_position())),
            no_position(),
        );
        check_stmt(&mut ctx, &Stmt::VariableDeclaration(decl)).unwrap();
        assert_eq!(ctx.variables.get("x"), Some(&Type::primitive("int")));
    }
}
