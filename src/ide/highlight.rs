//! Token kind → display category mapping for syntax highlighting.
//!
//! The parser doesn't care about keyword categories; this is where the
//! partition from the token inventory pays off for presentation. An
//! identifier is upgraded to `FunctionCall` when it names a built-in and
//! the next non-trivia token is `(`.

use serde::Serialize;

use super::builtins::is_builtin_function;
use crate::parser::{SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HighlightClass {
    Keyword,
    OperatorKeyword,
    TypeKeyword,
    Constant,
    String,
    Number,
    Identifier,
    FunctionCall,
    Comment,
    OperationSign,
    Parenthesis,
    Bracket,
    Brace,
    Comma,
    Semicolon,
    Dot,
    BadCharacter,
}

/// Static classification of a single token kind. Returns `None` for
/// whitespace and for node kinds.
pub fn classify_token(kind: SyntaxKind) -> Option<HighlightClass> {
    use SyntaxKind::*;

    if kind.is_operator_keyword() {
        return Some(HighlightClass::OperatorKeyword);
    }
    if kind.is_type_keyword() {
        return Some(HighlightClass::TypeKeyword);
    }
    if kind.is_sql_keyword() || kind.is_decl_keyword() {
        return Some(HighlightClass::Keyword);
    }
    if kind.is_constant() {
        return Some(HighlightClass::Constant);
    }
    if kind.is_string() {
        return Some(HighlightClass::String);
    }
    if kind.is_number() {
        return Some(HighlightClass::Number);
    }

    let class = match kind {
        LineComment | BlockComment => HighlightClass::Comment,
        Ident => HighlightClass::Identifier,
        Pipe | PipeArrow | Concat | DoubleColon | Assign | Spread | Eq | Neq | Lt | Gt | Le
        | Ge | Equals | Tilde | Plus | Minus | Star | Slash | Percent | Bang | Question | Colon
        | At | Amp => HighlightClass::OperationSign,
        ParenOpen | ParenClose => HighlightClass::Parenthesis,
        BracketOpen | BracketClose | SetOpen | SetClose => HighlightClass::Bracket,
        BraceOpen | BraceClose | MapOpen | MapClose => HighlightClass::Brace,
        Comma => HighlightClass::Comma,
        Semicolon => HighlightClass::Semicolon,
        Dot => HighlightClass::Dot,
        Garbage => HighlightClass::BadCharacter,
        _ => return None,
    };
    Some(class)
}

/// One classified span of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: u32,
    pub end: u32,
    pub class: HighlightClass,
}

/// Classify every token under `root`, upgrading built-in function names
/// followed by `(` to `FunctionCall`.
pub fn highlight(root: &SyntaxNode) -> Vec<HighlightSpan> {
    let tokens: Vec<_> = root
        .descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .collect();

    let mut spans = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let Some(mut class) = classify_token(token.kind()) else {
            continue;
        };

        if class == HighlightClass::Identifier && is_builtin_function(token.text()) {
            let followed_by_paren = tokens[i + 1..]
                .iter()
                .find(|t| !t.kind().is_trivia())
                .is_some_and(|t| t.kind() == SyntaxKind::ParenOpen);
            if followed_by_paren {
                class = HighlightClass::FunctionCall;
            }
        }

        let range = token.text_range();
        spans.push(HighlightSpan {
            start: range.start().into(),
            end: range.end().into(),
            class,
        });
    }
    spans
}
