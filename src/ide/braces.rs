//! Bracket pairing metadata for brace matching and auto-indent.

use serde::Serialize;

use crate::parser::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracePair {
    pub open: &'static str,
    pub close: &'static str,
    /// Whether the editor should treat the pair as a structural block for
    /// auto-indent (brace-shaped pairs only).
    pub structural: bool,
}

pub const BRACE_PAIRS: [BracePair; 5] = [
    BracePair { open: "(", close: ")", structural: false },
    BracePair { open: "[", close: "]", structural: false },
    BracePair { open: "{", close: "}", structural: true },
    BracePair { open: "|[", close: "]|", structural: false },
    BracePair { open: "|{", close: "}|", structural: true },
];

/// Closing kind for an opening kind, and vice versa.
pub fn matching_brace(kind: SyntaxKind) -> Option<SyntaxKind> {
    use SyntaxKind::*;
    let paired = match kind {
        ParenOpen => ParenClose,
        ParenClose => ParenOpen,
        BracketOpen => BracketClose,
        BracketClose => BracketOpen,
        BraceOpen => BraceClose,
        BraceClose => BraceOpen,
        SetOpen => SetClose,
        SetClose => SetOpen,
        MapOpen => MapClose,
        MapClose => MapOpen,
        _ => return None,
    };
    Some(paired)
}
