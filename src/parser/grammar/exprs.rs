//! Precedence-climbing expression parser.
//!
//! Binding strengths, tightest first: postfix (`.` field access, calls,
//! indexing, `::` casts) > unary (`-` `!` `NOT`) > `* / %` > `+ -` > `||`
//! > comparison (`== != <> < > <= >= = ~ LIKE BETWEEN IN IS`) > `AND` >
//! `OR`. Everything is left-associative within one level except `::`,
//! which is non-associative: a second cast on the same operand needs
//! parentheses.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::{CLOSERS, EXPR_FIRST, LITERALS, PIPE};
use crate::parser::cst::SyntaxKind;

const UNARY_BP: u8 = 13;

fn infix_bp(kind: SyntaxKind) -> Option<(u8, u8)> {
    use SyntaxKind::*;
    let bp = match kind {
        KwOr => (1, 2),
        KwAnd => (3, 4),
        Eq | Neq | Lt | Gt | Le | Ge | Equals | Tilde | KwLike | KwIn => (5, 6),
        Concat => (7, 8),
        Plus | Minus => (9, 10),
        Star | Slash | Percent => (11, 12),
        _ => return None,
    };
    Some(bp)
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) {
        self.parse_expr_bp(0);
    }

    fn parse_expr_bp(&mut self, min_bp: u8) {
        if !self.enter_recursion() {
            self.consume_rest_as_error(PIPE.union(CLOSERS));
            return;
        }

        let checkpoint = self.checkpoint();

        // Only a bare name can be called. Without this, `( pass )` after a
        // switch case value or a fork keyword would parse as call
        // arguments.
        let mut callable = false;

        match self.current() {
            SyntaxKind::Minus | SyntaxKind::Bang | SyntaxKind::KwNot => {
                self.start_node(SyntaxKind::UnaryExpr);
                self.bump();
                if EXPR_FIRST.contains(self.current()) {
                    self.parse_expr_bp(UNARY_BP);
                } else {
                    self.expr_missing();
                }
                self.finish_node();
            }
            SyntaxKind::Ident => {
                callable = true;
                self.parse_primary();
            }
            _ => self.parse_primary(),
        }

        loop {
            let kind = self.current();

            // Postfix forms bind tightest and ignore min_bp
            match kind {
                SyntaxKind::Dot => {
                    callable = false;
                    self.start_node_at(checkpoint, SyntaxKind::FieldExpr);
                    self.bump();
                    if !self.eat(SyntaxKind::Ident) {
                        self.error_msg(DiagnosticKind::ExpectedName, "field after `.`");
                    }
                    self.finish_node();
                    continue;
                }
                SyntaxKind::ParenOpen if callable => {
                    callable = false;
                    self.start_node_at(checkpoint, SyntaxKind::CallExpr);
                    self.parse_arg_list();
                    self.finish_node();
                    continue;
                }
                SyntaxKind::BracketOpen => {
                    callable = false;
                    self.start_node_at(checkpoint, SyntaxKind::IndexExpr);
                    self.parse_index_suffix();
                    self.finish_node();
                    continue;
                }
                SyntaxKind::DoubleColon => {
                    callable = false;
                    self.start_node_at(checkpoint, SyntaxKind::CastExpr);
                    self.bump();
                    if self.at_type_first() {
                        self.parse_type();
                    } else {
                        self.error(DiagnosticKind::ExpectedType);
                    }
                    self.finish_node();
                    if self.at(SyntaxKind::DoubleColon) {
                        // Non-associative; keep parsing so recovery stays
                        // local, but say so
                        self.error(DiagnosticKind::ChainedCast);
                    }
                    continue;
                }
                _ => {}
            }

            // Comparison-level forms that need more than one operator token
            if min_bp <= 5 {
                match kind {
                    SyntaxKind::KwBetween => {
                        callable = false;
                        self.parse_between_tail(checkpoint, false);
                        continue;
                    }
                    SyntaxKind::KwNot
                        if matches!(
                            self.peek_nth(1),
                            SyntaxKind::KwLike | SyntaxKind::KwIn | SyntaxKind::KwBetween
                        ) =>
                    {
                        callable = false;
                        if self.peek_nth(1) == SyntaxKind::KwBetween {
                            self.parse_between_tail(checkpoint, true);
                        } else {
                            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
                            self.bump(); // NOT
                            self.bump(); // LIKE / IN
                            self.infix_rhs(6);
                            self.finish_node();
                        }
                        continue;
                    }
                    SyntaxKind::KwIs => {
                        callable = false;
                        self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
                        self.bump(); // IS
                        self.eat(SyntaxKind::KwNot);
                        self.infix_rhs(6);
                        self.finish_node();
                        continue;
                    }
                    _ => {}
                }
            }

            let Some((left_bp, right_bp)) = infix_bp(kind) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }

            callable = false;
            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
            self.bump();
            self.infix_rhs(right_bp);
            self.finish_node();
        }

        self.exit_recursion();
    }

    fn infix_rhs(&mut self, bp: u8) {
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr_bp(bp);
        } else {
            self.expr_missing();
        }
    }

    /// `expr [NOT] BETWEEN low AND high`. Bounds parse above the
    /// comparison level so the `AND` separating them stays visible.
    fn parse_between_tail(&mut self, checkpoint: rowan::Checkpoint, negated: bool) {
        self.start_node_at(checkpoint, SyntaxKind::BetweenExpr);
        if negated {
            self.bump(); // NOT
        }
        self.bump(); // BETWEEN
        self.infix_rhs(7);
        self.expect(SyntaxKind::KwAnd, "`AND` between bounds");
        self.infix_rhs(7);
        self.finish_node();
    }

    /// Report a missing operand and leave a zero-width error node for it.
    fn expr_missing(&mut self) {
        self.error(DiagnosticKind::ExpectedExpression);
        self.start_node(SyntaxKind::Error);
        self.finish_node();
    }

    fn parse_primary(&mut self) {
        match self.current() {
            kind if LITERALS.contains(kind) => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Ident => {
                self.start_node(SyntaxKind::NameRef);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::ParenOpen => self.parse_paren_expr(),
            SyntaxKind::BracketOpen => self.parse_array_literal(),
            SyntaxKind::BraceOpen => self.parse_record_literal(),
            SyntaxKind::SetOpen => self.parse_set_literal(),
            SyntaxKind::MapOpen => self.parse_map_literal(),
            SyntaxKind::KwCase => self.parse_case_expr(),
            SyntaxKind::KwCount => {
                // `count` lexes as a keyword but doubles as an aggregate
                // function name in expression position
                self.start_node(SyntaxKind::CallExpr);
                self.bump();
                if self.at(SyntaxKind::ParenOpen) {
                    self.parse_arg_list();
                }
                self.finish_node();
            }
            SyntaxKind::KwCast => self.parse_cast_call(),
            SyntaxKind::KwExtract => self.parse_extract_expr(),
            SyntaxKind::KwExists => self.parse_exists_expr(),
            SyntaxKind::KwLambda => self.parse_lambda_expr(),
            _ => self.expr_missing(),
        }
    }

    /// `( expr )` or an `IN`-style tuple `( expr, expr, ... )`.
    fn parse_paren_expr(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::ParenExpr);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.expr_missing();
        }
        while self.eat(SyntaxKind::Comma) {
            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.expr_missing();
                break;
            }
        }

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedParen,
                "opened here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::ParenClose, "closing `)`");
        }
        self.finish_node();
    }

    /// `[ expr, ... ]` with spread items.
    fn parse_array_literal(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::ArrayLiteral);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();

        self.container_items(SyntaxKind::BracketClose, Self::parse_spread_or_expr);

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBracket,
                "array started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::BracketClose, "closing `]`");
        }
        self.finish_node();
    }

    /// `{ name: expr, ... }` with spread items and bare shorthand fields.
    fn parse_record_literal(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::RecordLiteral);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        self.container_items(SyntaxKind::BraceClose, |p| {
            if p.at(SyntaxKind::Spread) {
                p.parse_spread_item();
                return;
            }
            let kind = p.current();
            if (kind == SyntaxKind::Ident || kind.is_string()) && p.next_is(SyntaxKind::Colon) {
                p.start_node(SyntaxKind::RecordField);
                p.bump(); // name
                p.bump(); // colon
                if EXPR_FIRST.contains(p.current()) {
                    p.parse_expr();
                } else {
                    p.expr_missing();
                }
                p.finish_node();
            } else if EXPR_FIRST.contains(kind) {
                p.start_node(SyntaxKind::RecordField);
                p.parse_expr();
                p.finish_node();
            }
        });

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBrace,
                "record started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::BraceClose, "closing `}`");
        }
        self.finish_node();
    }

    /// `|[ expr, ... ]|`
    fn parse_set_literal(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::SetLiteral);
        self.push_delimiter(SyntaxKind::SetOpen);
        self.bump();

        self.container_items(SyntaxKind::SetClose, Self::parse_spread_or_expr);

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedSetBracket,
                "set started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::SetClose, "closing `]|`");
        }
        self.finish_node();
    }

    /// `|{ key: value, ... }|`
    fn parse_map_literal(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::MapLiteral);
        self.push_delimiter(SyntaxKind::MapOpen);
        self.bump();

        self.container_items(SyntaxKind::MapClose, |p| {
            if EXPR_FIRST.contains(p.current()) {
                p.start_node(SyntaxKind::MapEntry);
                p.parse_expr();
                p.expect(SyntaxKind::Colon, "`:` between key and value");
                if EXPR_FIRST.contains(p.current()) {
                    p.parse_expr();
                } else {
                    p.expr_missing();
                }
                p.finish_node();
            }
        });

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedMapBrace,
                "map started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::MapClose, "closing `}|`");
        }
        self.finish_node();
    }

    fn parse_spread_or_expr(&mut self) {
        if self.at(SyntaxKind::Spread) {
            self.parse_spread_item();
        } else if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        }
    }

    fn parse_spread_item(&mut self) {
        self.start_node(SyntaxKind::SpreadItem);
        self.bump(); // ...
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.expr_missing();
        }
        self.finish_node();
    }

    /// Comma-separated items until `close`. Tolerates missing commas,
    /// doubled commas, and junk between items; a stray closer belonging to
    /// an outer construct ends the list instead of being swallowed.
    fn container_items(&mut self, close: SyntaxKind, mut item: impl FnMut(&mut Self)) {
        loop {
            if self.eof() || self.at(close) {
                break;
            }
            let kind = self.current();
            if kind == SyntaxKind::Comma {
                self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "expected an item before `,`");
                continue;
            }
            if CLOSERS.contains(kind) {
                // belongs to an enclosing construct
                break;
            }

            let before = self.pos;
            item(self);
            if self.pos == before {
                self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "not valid here");
                continue;
            }

            if self.eat(SyntaxKind::Comma) {
                continue;
            }
            if self.at(close) || self.eof() || CLOSERS.contains(self.current()) {
                break;
            }
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `,`");
        }
    }

    /// `CASE [subject] WHEN cond THEN result ... [ELSE result] END`
    fn parse_case_expr(&mut self) {
        let case_span = self.current_span();
        self.start_node(SyntaxKind::CaseExpr);
        self.bump(); // CASE

        if !self.at(SyntaxKind::KwWhen) && EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        }

        while self.at(SyntaxKind::KwWhen) {
            self.start_node(SyntaxKind::WhenClause);
            self.bump();
            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.expr_missing();
            }
            self.expect(SyntaxKind::KwThen, "`THEN`");
            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.expr_missing();
            }
            self.finish_node();
        }

        if self.eat(SyntaxKind::KwElse) {
            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.expr_missing();
            }
        }

        if !self.eat(SyntaxKind::KwEnd) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnterminatedCase,
                "CASE started here",
                case_span,
            );
        }
        self.finish_node();
    }

    /// `CAST ( expr AS type )`
    fn parse_cast_call(&mut self) {
        self.start_node(SyntaxKind::CastExpr);
        self.bump(); // CAST

        if self.at(SyntaxKind::ParenOpen) {
            let open_span = self.current_span();
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();

            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.expr_missing();
            }
            self.expect(SyntaxKind::KwAs, "`AS`");
            if self.at_type_first() {
                self.parse_type();
            } else {
                self.error(DiagnosticKind::ExpectedType);
            }

            self.pop_delimiter();
            if self.eof() {
                self.error_unclosed_delimiter(
                    DiagnosticKind::UnclosedParen,
                    "CAST opened here",
                    open_span,
                );
            } else {
                self.expect(SyntaxKind::ParenClose, "closing `)` for CAST");
            }
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, "after `CAST`");
        }
        self.finish_node();
    }

    /// `EXTRACT ( part FROM expr )`
    fn parse_extract_expr(&mut self) {
        self.start_node(SyntaxKind::ExtractExpr);
        self.bump(); // EXTRACT

        if self.at(SyntaxKind::ParenOpen) {
            let open_span = self.current_span();
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();

            if self.at(SyntaxKind::Ident) || self.current().is_keyword() {
                self.bump();
            } else {
                self.error_msg(DiagnosticKind::ExpectedName, "date part to extract");
            }
            self.expect(SyntaxKind::KwFrom, "`FROM`");
            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.expr_missing();
            }

            self.pop_delimiter();
            if self.eof() {
                self.error_unclosed_delimiter(
                    DiagnosticKind::UnclosedParen,
                    "EXTRACT opened here",
                    open_span,
                );
            } else {
                self.expect(SyntaxKind::ParenClose, "closing `)` for EXTRACT");
            }
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, "after `EXTRACT`");
        }
        self.finish_node();
    }

    /// `EXISTS ( subquery )` - the subquery is a full pipeline.
    fn parse_exists_expr(&mut self) {
        self.start_node(SyntaxKind::ExistsExpr);
        self.bump(); // EXISTS
        if self.at(SyntaxKind::ParenOpen) {
            self.parse_scope_body();
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, "subquery after `EXISTS`");
        }
        self.finish_node();
    }

    /// `lambda a, b: expr`
    fn parse_lambda_expr(&mut self) {
        self.start_node(SyntaxKind::LambdaExpr);
        self.bump(); // lambda

        self.start_node(SyntaxKind::ParamList);
        while self.at(SyntaxKind::Ident) {
            self.start_node(SyntaxKind::Param);
            self.bump();
            self.finish_node();
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();

        self.expect(SyntaxKind::Colon, "`:` before lambda body");
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.expr_missing();
        }
        self.finish_node();
    }

    /// `( arg, ... )` after a callee.
    pub(crate) fn parse_arg_list(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::ArgList);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        self.container_items(SyntaxKind::ParenClose, |p| {
            if p.at(SyntaxKind::Star) {
                // `count(*)`
                p.bump();
            } else {
                p.parse_spread_or_expr();
            }
        });

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedParen,
                "call opened here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::ParenClose, "closing `)` for call");
        }
        self.finish_node();
    }

    /// `[ index ]` after an indexable expression.
    fn parse_index_suffix(&mut self) {
        let open_span = self.current_span();
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();

        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.expr_missing();
        }

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBracket,
                "index opened here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::BracketClose, "closing `]`");
        }
    }
}
