//! Data shapes for the parsed AST this crate's checker consumes.
//!
//! This module intentionally contains no lexing or parsing logic: the spec
//! treats the lexer/parser as an external collaborator and only names the
//! node kinds it hands to the checker. Each node carries a [`Position`] and
//! a `render()` method so the checker can build diagnostics without needing
//! to re-derive source text.

mod attribute;
mod binary;
mod body;
mod call;
mod expr;
mod extern_decl;
mod function;
mod if_stmt;
mod import;
mod literal;
mod name;
mod struct_decl;
mod struct_literal;
mod subscript;
mod test_guard;
mod top_level;
mod unary;
mod union_decl;
mod var_decl;

pub use self::attribute::*;
pub use self::binary::*;
pub use self::body::*;
pub use self::call::*;
pub use self::expr::*;
pub use self::extern_decl::*;
pub use self::function::*;
pub use self::if_stmt::*;
pub use self::import::*;
pub use self::literal::*;
pub use self::name::*;
pub use self::struct_decl::*;
pub use self::struct_literal::*;
pub use self::subscript::*;
pub use self::test_guard::*;
pub use self::top_level::*;
pub use self::unary::*;
pub use self::union_decl::*;
pub use self::var_decl::*;

/// A position within a source file: file name, line, column.
pub type Position = (String, usize, usize);

/// A placeholder position for hand-built nodes that have no real source
/// location — used by this crate's own tests and available to callers that
/// synthesize AST nodes without a parser.
pub fn no_position() -> Position {
    (String::new(), 0, 0)
}
