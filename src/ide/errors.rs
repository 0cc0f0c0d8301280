//! Error nodes → UI-anchored diagnostics.
//!
//! Zero-width error nodes (missing-token errors) have nothing to
//! underline; they anchor to the end of the nearest preceding non-trivia
//! sibling so the caret lands on visible text.

use rowan::TextSize;
use serde::Serialize;

use crate::query::Query;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    pub message: String,
    pub start: u32,
    pub end: u32,
}

/// Every surviving diagnostic at its span, with zero-width spans moved to
/// their error node's anchor.
pub fn syntax_errors(query: &Query<'_>) -> Vec<SyntaxError> {
    let file = query.file();
    let anchors: Vec<(TextSize, TextSize)> = file
        .errors()
        .filter(|e| e.is_empty())
        .map(|e| (e.text_range().start(), e.anchor_offset()))
        .collect();

    query
        .diagnostics()
        .filtered()
        .iter()
        .map(|diag| {
            let range = diag.range();
            let (mut start, mut end) = (range.start(), range.end());
            if start == end
                && let Some(&(_, anchor)) = anchors.iter().find(|(pos, _)| *pos == start)
            {
                start = anchor;
                end = anchor;
            }
            SyntaxError {
                message: diag.text().to_string(),
                start: start.into(),
                end: end.into(),
            }
        })
        .collect()
}
