//! SuperSQL syntax front end: lexer, resilient parser, and lossless CST.
//!
//! SuperSQL blends SQL clause syntax with Unix-pipe data transformation
//! operators. This crate provides the editor-facing front end:
//! - `parser` - lexer, CST construction, error-recovering grammar
//! - `diagnostics` - error collection and rendering
//! - `query` - high-level Query facade
//! - `ide` - read-only tree consumers (highlighting, folding, brace pairs)
//! - `validate` - data-file dialect restriction
//!
//! # Example
//!
//! ```
//! use supersql_syntax::Query;
//!
//! let source = "from data.log | where x > 0 | head 10";
//! let query = Query::new(source);
//! assert!(!query.diagnostics().has_errors());
//! ```
//!
//! Parsing never fails: malformed input yields a tree with error nodes and
//! a diagnostic for each, so editors always have something to work with.

pub mod diagnostics;
pub mod ide;
pub mod parser;
pub mod query;
pub mod validate;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{Parse, SyntaxKind, SyntaxNode, SyntaxToken, parse};
pub use query::{FileKind, Query};

/// Errors surfaced by the strict facade entry points.
///
/// The parser itself is total - it always produces a tree. These errors
/// exist for callers that want "parse or fail" semantics instead of
/// inspecting diagnostics themselves.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("parsing failed with {} errors", .0.error_count())]
    Parse(Diagnostics),

    #[error("data file validation failed with {} errors", .0.error_count())]
    DataFile(Diagnostics),
}

/// Result type for strict query operations.
pub type Result<T> = std::result::Result<T, Error>;
