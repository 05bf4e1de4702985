//! The semantic analysis core: name resolution, generic monomorphization,
//! struct/union literal validation, flow-sensitive union-guard gating, and
//! recursive module imports (§1-§9).
//!
//! Submodules mirror the components of §2's system overview: [`module`] is
//! the type registry (A), [`context`]/[`expr`] are the name resolver and
//! expression typer (B, D), [`instantiate`] is the generic instantiator
//! (C), [`stmt`] is the statement/body checker (E), [`driver`] is the
//! declaration checker (F), and [`compat`] is the compatibility relation
//! (G).

pub mod compat;
pub mod context;
pub mod driver;
pub mod error;
pub mod expr;
pub mod function;
pub mod instantiate;
pub mod module;
pub mod primitives;
pub mod stmt;
pub mod typed;
pub mod types;

pub use compat::compatible;
pub use context::Context;
pub use driver::{CheckerConfig, Driver, SourceProvider};
pub use error::CheckError;
pub use function::{Function, GenericFunction};
pub use module::Module;
pub use typed::{CheckedBody, CheckedDecl, CheckedExpr, CheckedStmt, Typed};
pub use types::{DeclKind, GenericType, Type, TypeName};

/// Checks a whole module's top-level declarations against a fresh
/// registry, top to bottom (§4.6, §5). Convenience entry point wrapping
/// [`Driver::check_module`] for a caller with no imports to resolve, or one
/// that has already loaded the entry file itself.
pub fn check_module(
    provider: &dyn SourceProvider,
    config: CheckerConfig,
    module_name: impl Into<String>,
    decls: &[crate::ast::TopLevelDecl],
) -> Result<(Module, Vec<CheckedDecl>), CheckError> {
    let module = Module::new(module_name);
    let driver = Driver::new(provider, config);
    let checked = driver.check_module(&module, decls)?;
    Ok((module, checked))
}
