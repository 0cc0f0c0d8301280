//! Collapsible region selection.
//!
//! Each construct has a minimum span so trivially short instances don't
//! grow a folding handle.

use rowan::NodeOrToken;
use serde::Serialize;

use crate::parser::{File, SyntaxKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldRegion {
    pub start: u32,
    pub end: u32,
    pub placeholder: &'static str,
}

/// Block comments, container literals, CASE expressions, scope bodies,
/// and function-shaped declarations.
pub fn fold_regions(file: &File) -> Vec<FoldRegion> {
    let mut regions = Vec::new();

    for element in file.syntax().descendants_with_tokens() {
        let range = element.text_range();
        let len = u32::from(range.len());

        let placeholder = match &element {
            NodeOrToken::Token(token) => {
                if token.kind() == SyntaxKind::BlockComment && len > 4 {
                    "/* ... */"
                } else {
                    continue;
                }
            }
            NodeOrToken::Node(node) => match node.kind() {
                SyntaxKind::RecordLiteral if len > 2 => "{...}",
                SyntaxKind::ArrayLiteral if len > 2 => "[...]",
                SyntaxKind::SetLiteral if len > 4 => "|[...]|",
                SyntaxKind::MapLiteral if len > 4 => "|{...}|",
                SyntaxKind::CaseExpr if len > 10 => "CASE...END",
                SyntaxKind::ScopeBody if len > 10 => "(...)",
                SyntaxKind::FnDecl | SyntaxKind::OpDecl if len > 20 => "fn ...",
                _ => continue,
            },
        };

        regions.push(FoldRegion {
            start: range.start().into(),
            end: range.end().into(),
            placeholder,
        });
    }

    regions
}
