//! Lexer for SuperSQL.
//!
//! Produces span-based tokens without storing text - text is sliced from
//! source only when needed. A fresh call against the same text always
//! yields the same sequence; there is no hidden state.
//!
//! ## Error handling
//!
//! The lexer never fails. It coalesces consecutive unrecognized characters
//! into single `Garbage` tokens rather than producing one error per
//! character, which keeps the token stream manageable for malformed input.
//! Whether a `Garbage` token is actually a problem is the parser's call.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Re-splits IPv6-shaped runs that are actually casts (`a::int64`)
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    resplit_cast_runs(source, &mut tokens);

    tokens
}

/// Longest-match classifies `a::int64` as IPv6 `a::` followed by a type
/// keyword, because `a` is a valid hextet and `a::` a valid compressed
/// address. When a single-group `hex::` address butts directly against
/// something that reads as a cast target, the `::` was meant as the cast
/// operator: split the token back into prefix + `::`.
///
/// `fe80::` followed by whitespace, a closing delimiter, or end of input is
/// left alone - that really is an address.
fn resplit_cast_runs(source: &str, tokens: &mut Vec<Token>) {
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if token.kind == SyntaxKind::Ip6Lit
            && let Some(next) = tokens.get(i + 1)
            && next.span.start() == token.span.end()
            && starts_cast_target(next.kind)
        {
            let text = token_text(source, &token);
            if let Some(prefix) = text.strip_suffix("::")
                && !prefix.is_empty()
                && !prefix.contains(':')
            {
                let start = token.span.start();
                let split = start + rowan::TextSize::from(prefix.len() as u32);
                let prefix_kind = if prefix.bytes().all(|b| b.is_ascii_digit()) {
                    SyntaxKind::IntLit
                } else {
                    SyntaxKind::Ident
                };
                tokens[i] = Token::new(prefix_kind, TextRange::new(start, split));
                tokens.insert(
                    i + 1,
                    Token::new(SyntaxKind::DoubleColon, TextRange::new(split, token.span.end())),
                );
                i += 1;
            }
        }
        i += 1;
    }
}

fn starts_cast_target(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Ident
        || kind.is_keyword()
        || matches!(
            kind,
            SyntaxKind::IntLit
                | SyntaxKind::FloatLit
                | SyntaxKind::HexLit
                | SyntaxKind::ParenOpen
                | SyntaxKind::BraceOpen
                | SyntaxKind::BracketOpen
                | SyntaxKind::SetOpen
                | SyntaxKind::MapOpen
        )
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
