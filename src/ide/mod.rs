//! Read-only tree consumers for editor integration.
//!
//! Nothing in here influences the grammar or the tree shape; these
//! modules only traverse the CST and token stream:
//! - `highlight` - token kind → display category mapping
//! - `builtins` - built-in scalar/aggregate function registry
//! - `folding` - collapsible region selection
//! - `braces` - bracket pairing metadata
//! - `errors` - error nodes → UI-anchored diagnostics

pub mod braces;
pub mod builtins;
pub mod errors;
pub mod folding;
pub mod highlight;


pub use braces::{BRACE_PAIRS, BracePair};
pub use errors::{SyntaxError, syntax_errors};
pub use folding::{FoldRegion, fold_regions};
pub use highlight::{HighlightClass, HighlightSpan, classify_token, highlight};
