//! Type expressions: primitives, unions, records, arrays, sets, maps,
//! and named references.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::TYPE_FIRST;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    pub(crate) fn at_type_first(&mut self) -> bool {
        let kind = self.current();
        kind.is_type_keyword() || TYPE_FIRST.contains(kind)
    }

    /// A type, possibly a `|`-union of alternatives. The union only
    /// extends across a `|` when what follows can start a type, so a
    /// pipeline separator after a type declaration is left alone.
    pub(crate) fn parse_type(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_type_primary();

        if self.at(SyntaxKind::Pipe) && self.next_starts_type() {
            self.start_node_at(checkpoint, SyntaxKind::UnionType);
            while self.at(SyntaxKind::Pipe) && self.next_starts_type() {
                self.bump(); // |
                self.parse_type_primary();
            }
            self.finish_node();
        }
    }

    fn next_starts_type(&mut self) -> bool {
        let next = self.peek_nth(1);
        next.is_type_keyword() || TYPE_FIRST.contains(next)
    }

    fn parse_type_primary(&mut self) {
        match self.current() {
            kind if kind.is_type_keyword() => {
                self.start_node(SyntaxKind::PrimitiveType);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Ident => {
                self.start_node(SyntaxKind::NamedType);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::BraceOpen => self.parse_record_type(),
            SyntaxKind::BracketOpen => self.parse_array_type(),
            SyntaxKind::SetOpen => self.parse_set_type(),
            SyntaxKind::MapOpen => self.parse_map_type(),
            SyntaxKind::ParenOpen => self.parse_paren_type(),
            _ => {
                self.error(DiagnosticKind::ExpectedType);
                self.start_node(SyntaxKind::Error);
                self.finish_node();
            }
        }
    }

    /// `{ name: type, ... }`
    fn parse_record_type(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::RecordType);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        loop {
            if self.eof() || self.at(SyntaxKind::BraceClose) {
                break;
            }
            let kind = self.current();
            if kind == SyntaxKind::Ident || kind.is_string() {
                self.start_node(SyntaxKind::RecordTypeField);
                self.bump(); // name
                self.expect(SyntaxKind::Colon, "`:` after field name");
                if self.at_type_first() {
                    self.parse_type();
                } else {
                    self.error(DiagnosticKind::ExpectedType);
                }
                self.finish_node();
            } else {
                self.error_and_bump_msg(DiagnosticKind::ExpectedName, "record type field");
                continue;
            }
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBrace,
                "record type started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::BraceClose, "closing `}` for record type");
        }
        self.finish_node();
    }

    /// `[ type ]`
    fn parse_array_type(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::ArrayType);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();

        if self.at_type_first() {
            self.parse_type();
        } else {
            self.error(DiagnosticKind::ExpectedType);
        }

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBracket,
                "array type started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::BracketClose, "closing `]` for array type");
        }
        self.finish_node();
    }

    /// `|[ type ]|`
    fn parse_set_type(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::SetType);
        self.push_delimiter(SyntaxKind::SetOpen);
        self.bump();

        if self.at_type_first() {
            self.parse_type();
        } else {
            self.error(DiagnosticKind::ExpectedType);
        }

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedSetBracket,
                "set type started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::SetClose, "closing `]|` for set type");
        }
        self.finish_node();
    }

    /// `|{ key-type: value-type }|`
    fn parse_map_type(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::MapType);
        self.push_delimiter(SyntaxKind::MapOpen);
        self.bump();

        if self.at_type_first() {
            self.parse_type();
        } else {
            self.error(DiagnosticKind::ExpectedType);
        }
        self.expect(SyntaxKind::Colon, "`:` between key and value types");
        if self.at_type_first() {
            self.parse_type();
        } else {
            self.error(DiagnosticKind::ExpectedType);
        }

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedMapBrace,
                "map type started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::MapClose, "closing `}|` for map type");
        }
        self.finish_node();
    }

    /// `( type )`
    fn parse_paren_type(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::ParenType);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        if self.at_type_first() {
            self.parse_type();
        } else {
            self.error(DiagnosticKind::ExpectedType);
        }

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedParen,
                "parenthesized type started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::ParenClose, "closing `)`");
        }
        self.finish_node();
    }
}
