//! High-level facade tying the parser, diagnostics, and dialect
//! validation together.

mod printer;

#[cfg(test)]
mod dump;

pub use printer::QueryPrinter;

use crate::parser::{File, Parse, SyntaxNode, parse};
use crate::validate::validate_data_file;
use crate::{Diagnostics, Error};

/// Which dialect a source file is held to.
///
/// The parser always accepts the full grammar; the data dialect is a
/// post-parse restriction, not a grammar change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileKind {
    /// Full SuperSQL query (`.spq`): declarations, operators, SQL.
    #[default]
    Query,
    /// Data values only (`.sup`): literal records, arrays, scalars.
    Data,
}

impl FileKind {
    /// Classify by file extension. Unknown extensions get the full grammar.
    pub fn from_extension(ext: &str) -> FileKind {
        if ext.eq_ignore_ascii_case("sup") {
            FileKind::Data
        } else {
            FileKind::Query
        }
    }
}

/// A parsed SuperSQL source with its diagnostics.
///
/// Construction never fails; `is_valid` and `diagnostics` tell you how the
/// parse went. The tree and diagnostics are immutable once built and can
/// be read from any number of threads.
pub struct Query<'src> {
    pub source: &'src str,
    file_kind: FileKind,
    parse: Parse,
    diagnostics: Diagnostics,
}

impl<'src> Query<'src> {
    /// Parse as a full query.
    pub fn new(source: &'src str) -> Self {
        Self::with_file_kind(source, FileKind::Query)
    }

    /// Parse and apply the dialect restriction for `kind`.
    pub fn with_file_kind(source: &'src str, kind: FileKind) -> Self {
        let (parse, mut diagnostics) = parse(source);
        if kind == FileKind::Data {
            diagnostics.extend(validate_data_file(&parse.file()));
        }
        Self {
            source,
            file_kind: kind,
            parse,
            diagnostics,
        }
    }

    /// Strict entry point: parse or fail.
    pub fn try_new(source: &'src str) -> crate::Result<Self> {
        let query = Self::new(source);
        if query.diagnostics.has_errors() {
            return Err(Error::Parse(query.diagnostics));
        }
        Ok(query)
    }

    pub fn file_kind(&self) -> FileKind {
        self.file_kind
    }

    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    pub fn syntax(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    pub fn file(&self) -> File {
        self.parse.file()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn printer(&self) -> QueryPrinter<'_, 'src> {
        QueryPrinter::new(self)
    }
}
