use crate::ast::{
    Attribute, BinaryOperator, Call, Expr, Literal, LiteralValue, StructLiteral, TestGuard,
    UnaryOp, UnaryOperator,
};

use super::compat::compatible;
use super::context::{guard_key, Context};
use super::error::{ArityMismatch, CheckError, TypeMismatch, UnguardedUnionField, Unsupported};
use super::module::FunctionEntry;
use super::primitives;
use super::typed::{CheckedExpr, Typed};
use super::types::{DeclKind, Type};

/// `check_expression` (§4.4): assigns a type to every expression AST kind
/// the typer defines. `Subscript` has no case — encountering one here is an
/// internal error, matching the source this was distilled from.
pub fn check_expression(ctx: &Context, expr: &Expr) -> Result<Typed<CheckedExpr>, CheckError> {
    match expr {
        Expr::Literal(l) => Ok(check_literal(l)),
        Expr::Name(n) => {
            let type_ = ctx.variables.get(&n.value).cloned().ok_or_else(|| {
                CheckError::UnknownVariable(
                    super::error::UnknownVariable {
                        name: n.value.clone(),
                        module: ctx.module.name(),
                    },
                    n.position.clone(),
                )
            })?;
            Ok(Typed::new(CheckedExpr::Name(n.value.clone()), type_))
        }
        Expr::Attribute(a) => check_attribute(ctx, a),
        Expr::StructLiteral(s) => check_struct_literal(ctx, s),
        Expr::Call(c) => check_call(ctx, c),
        Expr::UnaryOperator(u) => check_unary_operator(ctx, u),
        Expr::BinaryOperator(b) => check_binary_operator(ctx, b),
        Expr::TestGuard(t) => check_test_guard(ctx, t),
        Expr::Subscript(s) => Err(CheckError::Unsupported(
            Unsupported {
                construct: format!("expression {}", s.render()),
            },
            s.position.clone(),
        )),
    }
}

fn check_literal(literal: &Literal) -> Typed<CheckedExpr> {
    let type_name = match &literal.value {
        LiteralValue::Str(_) => "str",
        LiteralValue::Int(_) => "int",
        LiteralValue::Float(_) => "float",
    };
    Typed::new(
        CheckedExpr::Literal(literal.value.clone()),
        primitives::lookup(type_name).expect("primitive always registered"),
    )
}

fn check_attribute(ctx: &Context, a: &Attribute) -> Result<Typed<CheckedExpr>, CheckError> {
    let receiver_type = ctx.import_variable(&a.left)?;
    let field_type = receiver_type.field(&a.right).cloned().ok_or_else(|| {
        CheckError::UnknownField(
            super::error::UnknownField {
                field: a.right.clone(),
                type_name: receiver_type.render(),
                module: ctx.module.name(),
            },
            a.position.clone(),
        )
    })?;

    if receiver_type.is_union() {
        let key = guard_key(&expr_of(a));
        let guarded = key.map(|k| ctx.guards.contains(&k)).unwrap_or(false);
        if !guarded {
            return Err(CheckError::UnguardedUnionField(
                UnguardedUnionField {
                    access: expr_of(a).render(),
                },
                a.position.clone(),
            ));
        }
    }

    let checked_receiver = check_expression(ctx, &a.left)?;
    Ok(Typed::new(
        CheckedExpr::Attribute {
            receiver: Box::new(checked_receiver),
            field: a.right.clone(),
        },
        field_type,
    ))
}

fn expr_of(a: &Attribute) -> Expr {
    Expr::Attribute(a.clone())
}

fn check_struct_literal(ctx: &Context, s: &StructLiteral) -> Result<Typed<CheckedExpr>, CheckError> {
    let type_ = ctx.import_type(&s.name)?;

    let mut checked_arguments = Vec::with_capacity(s.arguments.len());
    for argument in &s.arguments {
        checked_arguments.push(check_expression(ctx, argument)?);
    }

    if type_.0.decl_kind == Some(DeclKind::Union) {
        if checked_arguments.len() != 1 {
            return Err(CheckError::Arity(
                ArityMismatch {
                    construct: format!("union literal '{}'", s.render()),
                    expected: 1,
                    got: checked_arguments.len(),
                },
                s.position.clone(),
            ));
        }
        let argument = &checked_arguments[0];
        let matches_any_field = type_
            .0
            .fields
            .iter()
            .any(|(_, field_type)| compatible(&argument.type_, field_type));
        if !matches_any_field {
            return Err(CheckError::TypeMismatch(
                TypeMismatch {
                    context: format!("union literal '{}'", s.render()),
                    expected: type_
                        .0
                        .fields
                        .iter()
                        .map(|(_, t)| t.render())
                        .collect::<Vec<_>>()
                        .join(" | "),
                    got: argument.type_.render(),
                },
                s.position.clone(),
            ));
        }
        return Ok(Typed::new(
            CheckedExpr::StructLiteral {
                arguments: checked_arguments,
            },
            type_,
        ));
    }

    if checked_arguments.len() != type_.0.fields.len() {
        return Err(CheckError::Arity(
            ArityMismatch {
                construct: format!("struct literal '{}'", s.render()),
                expected: type_.0.fields.len(),
                got: checked_arguments.len(),
            },
            s.position.clone(),
        ));
    }

    for (argument, (field_name, field_type)) in checked_arguments.iter().zip(type_.0.fields.iter())
    {
        if !compatible(&argument.type_, field_type) {
            return Err(CheckError::TypeMismatch(
                TypeMismatch {
                    context: format!("struct literal '{}' field '{field_name}'", s.render()),
                    expected: field_type.render(),
                    got: argument.type_.render(),
                },
                s.position.clone(),
            ));
        }
    }

    Ok(Typed::new(
        CheckedExpr::StructLiteral {
            arguments: checked_arguments,
        },
        type_,
    ))
}

/// Call checking (§4.7).
fn check_call(ctx: &Context, call: &Call) -> Result<Typed<CheckedExpr>, CheckError> {
    let function_entry = if let Some(generic_items) = &call.generic {
        let mut resolved_items = Vec::with_capacity(generic_items.len());
        for item in generic_items {
            resolved_items.push(ctx.import_type(item)?);
        }
        let subscripted = Expr::Subscript(crate::ast::Subscript::new(
            (*call.name).clone(),
            generic_items.clone(),
            call.position.clone(),
        ));
        ctx.import_function(&subscripted)?
    } else {
        let resolved = ctx.import_function(&call.name)?;
        if let FunctionEntry::Generic(_) = &resolved {
            return Err(CheckError::GenericRequiresArguments(
                super::error::GenericRequiresArguments {
                    name: call.name.render(),
                },
                call.position.clone(),
            ));
        }
        resolved
    };

    let function = match function_entry {
        FunctionEntry::Function(f) => f,
        FunctionEntry::Generic(_) => unreachable!("generic functions are rejected above"),
    };

    let mut arguments = call.arguments.clone();
    if function.is_associated() {
        if let Expr::Attribute(a) = call.name.as_ref() {
            arguments.insert(0, (*a.left).clone());
        }
    }

    if arguments.len() != function.parameters().len() {
        return Err(CheckError::Arity(
            ArityMismatch {
                construct: format!("function '{}'", call.render()),
                expected: function.parameters().len(),
                got: arguments.len(),
            },
            call.position.clone(),
        ));
    }

    let mut checked_arguments = Vec::with_capacity(arguments.len());
    for argument in &arguments {
        checked_arguments.push(check_expression(ctx, argument)?);
    }

    for (argument, (parameter_name, parameter_type)) in
        checked_arguments.iter().zip(function.parameters().iter())
    {
        if !compatible(&argument.type_, parameter_type) {
            return Err(CheckError::TypeMismatch(
                TypeMismatch {
                    context: format!("function '{}' parameter '{parameter_name}'", call.render()),
                    expected: parameter_type.render(),
                    got: argument.type_.render(),
                },
                call.position.clone(),
            ));
        }
    }

    Ok(Typed::new(
        CheckedExpr::Call {
            arguments: checked_arguments,
        },
        function.return_type().clone(),
    ))
}

fn check_unary_operator(ctx: &Context, u: &UnaryOperator) -> Result<Typed<CheckedExpr>, CheckError> {
    let checked_expr = check_expression(ctx, &u.expr)?;

    match u.op {
        UnaryOp::AddressOf => {
            let ptr_type = Type::new_ptr_for(&checked_expr.type_);
            Ok(Typed::new(
                CheckedExpr::UnaryOperator {
                    op: u.op,
                    expr: Box::new(checked_expr),
                },
                ptr_type,
            ))
        }
        UnaryOp::Not | UnaryOp::Negate => Err(CheckError::Unsupported(
            Unsupported {
                construct: format!("unary operator {}", u.render()),
            },
            u.position.clone(),
        )),
    }
}

fn check_binary_operator(ctx: &Context, b: &BinaryOperator) -> Result<Typed<CheckedExpr>, CheckError> {
    let left = check_expression(ctx, &b.left)?;
    let right = check_expression(ctx, &b.right)?;

    if !compatible(&left.type_, &right.type_) {
        return Err(CheckError::TypeMismatch(
            TypeMismatch {
                context: format!("operator {}", b.render()),
                expected: left.type_.render(),
                got: right.type_.render(),
            },
            b.position.clone(),
        ));
    }

    let result_type = if b.op.is_logical() {
        primitives::lookup("bool").expect("primitive always registered")
    } else if b.op.is_numeric() {
        left.type_.clone()
    } else {
        return Err(CheckError::Unsupported(
            Unsupported {
                construct: format!("binary operator {}", b.render()),
            },
            b.position.clone(),
        ));
    };

    Ok(Typed::new(
        CheckedExpr::BinaryOperator {
            op: b.op,
            left: Box::new(left),
            right: Box::new(right),
        },
        result_type,
    ))
}

fn check_test_guard(ctx: &Context, t: &TestGuard) -> Result<Typed<CheckedExpr>, CheckError> {
    let checked_inner = check_expression(ctx, &t.expr)?;
    Ok(Typed::new(
        CheckedExpr::TestGuard {
            expr: Box::new(checked_inner),
        },
        primitives::lookup("bool").expect("primitive always registered"),
    ))
}
