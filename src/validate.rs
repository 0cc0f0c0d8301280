//! Data-file dialect restriction.
//!
//! SuperJSON data files hold literal values only. The parser accepts the
//! full grammar regardless; this pass walks the finished tree and flags
//! every declaration and operator node. Bare expression stages pass - a
//! data file is exactly a sequence of values.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::File;

pub fn validate_data_file(file: &File) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    for node in file.syntax().descendants() {
        let kind = node.kind();
        if kind.is_decl_node() {
            diagnostics
                .report(DiagnosticKind::DeclarationInDataFile, node.text_range())
                .emit();
        } else if kind.is_operator_node() {
            diagnostics
                .report(DiagnosticKind::OperatorInDataFile, node.text_range())
                .emit();
        }
    }

    diagnostics
}
