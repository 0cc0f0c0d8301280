//! The SQL clause sequence stage: SELECT ... FROM ... WHERE ... GROUP BY
//! ... HAVING ... ORDER BY ... LIMIT ... OFFSET, JOIN sub-clauses, UNION,
//! and WITH-introduced CTEs.
//!
//! Clauses are dispatched from a loop rather than a fixed sequence, so an
//! out-of-order clause still parses (and still lands in the tree) instead
//! of killing the rest of the stage.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::EXPR_FIRST;
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    pub(crate) fn parse_sql_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::SqlOp);

        if self.at(SyntaxKind::KwWith) {
            self.parse_with_clause(stop);
        }

        loop {
            match self.current() {
                SyntaxKind::KwSelect => self.parse_select_clause(),
                SyntaxKind::KwFrom => self.parse_from_clause(),
                SyntaxKind::KwJoin
                | SyntaxKind::KwLeft
                | SyntaxKind::KwRight
                | SyntaxKind::KwInner
                | SyntaxKind::KwOuter
                | SyntaxKind::KwFull
                | SyntaxKind::KwCross
                | SyntaxKind::KwAnti => self.parse_join_clause(),
                SyntaxKind::KwWhere => {
                    self.start_node(SyntaxKind::WhereClause);
                    self.bump();
                    self.sql_expr_or_error(stop);
                    self.finish_node();
                }
                SyntaxKind::KwGroup => {
                    self.start_node(SyntaxKind::GroupByClause);
                    self.bump();
                    self.expect(SyntaxKind::KwBy, "`BY` after `GROUP`");
                    self.sql_expr_list(stop);
                    self.finish_node();
                }
                SyntaxKind::KwHaving => {
                    self.start_node(SyntaxKind::HavingClause);
                    self.bump();
                    self.sql_expr_or_error(stop);
                    self.finish_node();
                }
                SyntaxKind::KwOrder => {
                    self.start_node(SyntaxKind::OrderByClause);
                    self.bump();
                    self.expect(SyntaxKind::KwBy, "`BY` after `ORDER`");
                    self.sql_sort_keys(stop);
                    self.finish_node();
                }
                SyntaxKind::KwLimit => {
                    self.start_node(SyntaxKind::LimitClause);
                    self.bump();
                    self.sql_expr_or_error(stop);
                    self.finish_node();
                }
                SyntaxKind::KwOffset => {
                    self.start_node(SyntaxKind::OffsetClause);
                    self.bump();
                    self.sql_expr_or_error(stop);
                    self.finish_node();
                }
                SyntaxKind::KwUnion => {
                    self.start_node(SyntaxKind::UnionClause);
                    self.bump();
                    self.eat(SyntaxKind::KwAll);
                    self.finish_node();
                    if !self.at(SyntaxKind::KwSelect)
                        && !self.at(SyntaxKind::KwFrom)
                        && !self.at(SyntaxKind::KwWith)
                    {
                        self.error_msg(DiagnosticKind::ExpectedStage, "query after `UNION`");
                    }
                }
                _ => break,
            }
        }

        self.finish_node();
    }

    /// `SELECT [DISTINCT|ALL] item, ...` where item is `*` or
    /// `expr [AS alias]`.
    fn parse_select_clause(&mut self) {
        self.start_node(SyntaxKind::SelectClause);
        self.bump(); // SELECT

        if !self.eat(SyntaxKind::KwDistinct) {
            self.eat(SyntaxKind::KwAll);
        }

        if !self.at_select_item() {
            // `SELECT FROM ...`: leave a zero-width error node so the
            // missing list is visible, then let the FROM clause parse
            self.error_msg(DiagnosticKind::ExpectedExpression, "after `SELECT`");
            self.start_node(SyntaxKind::Error);
            self.finish_node();
            self.finish_node();
            return;
        }

        self.parse_select_item();
        while self.eat(SyntaxKind::Comma) {
            if self.at_select_item() {
                self.parse_select_item();
            } else {
                self.error_msg(DiagnosticKind::ExpectedExpression, "after `,`");
                break;
            }
        }
        self.finish_node();
    }

    fn at_select_item(&mut self) -> bool {
        self.at(SyntaxKind::Star) || EXPR_FIRST.contains(self.current())
    }

    fn parse_select_item(&mut self) {
        self.start_node(SyntaxKind::SelectItem);
        if self.at(SyntaxKind::Star) {
            self.bump();
        } else {
            self.parse_expr();
            if self.eat(SyntaxKind::KwAs) && !self.eat(SyntaxKind::Ident) {
                self.error_msg(DiagnosticKind::ExpectedName, "alias after `AS`");
            }
        }
        self.finish_node();
    }

    /// `FROM source [AS alias], ...`
    fn parse_from_clause(&mut self) {
        self.start_node(SyntaxKind::FromClause);
        self.bump(); // FROM

        if EXPR_FIRST.contains(self.current()) {
            self.parse_from_item();
            while self.eat(SyntaxKind::Comma) {
                if EXPR_FIRST.contains(self.current()) {
                    self.parse_from_item();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedExpression, "after `,`");
                    break;
                }
            }
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, "after `FROM`");
            self.start_node(SyntaxKind::Error);
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_from_item(&mut self) {
        self.start_node(SyntaxKind::FromItem);
        self.parse_expr();
        if self.eat(SyntaxKind::KwAs) && !self.eat(SyntaxKind::Ident) {
            self.error_msg(DiagnosticKind::ExpectedName, "alias after `AS`");
        }
        self.finish_node();
    }

    /// `[LEFT|RIGHT|INNER|OUTER|FULL|CROSS|ANTI]* JOIN source
    /// [ON expr | USING (col, ...)]`
    fn parse_join_clause(&mut self) {
        self.start_node(SyntaxKind::JoinClause);
        while matches!(
            self.current(),
            SyntaxKind::KwLeft
                | SyntaxKind::KwRight
                | SyntaxKind::KwInner
                | SyntaxKind::KwOuter
                | SyntaxKind::KwFull
                | SyntaxKind::KwCross
                | SyntaxKind::KwAnti
        ) {
            self.bump();
        }
        self.expect(SyntaxKind::KwJoin, "`JOIN`");

        if EXPR_FIRST.contains(self.current()) {
            self.parse_from_item();
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, "join source");
            self.start_node(SyntaxKind::Error);
            self.finish_node();
        }

        if self.at(SyntaxKind::KwOn) {
            self.parse_on_clause();
        } else if self.at(SyntaxKind::KwUsing) {
            self.parse_using_clause();
        }
        self.finish_node();
    }

    pub(crate) fn parse_on_clause(&mut self) {
        self.start_node(SyntaxKind::OnClause);
        self.bump(); // ON
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, "join condition after `ON`");
            self.start_node(SyntaxKind::Error);
            self.finish_node();
        }
        self.finish_node();
    }

    /// `USING ( col, ... )`
    pub(crate) fn parse_using_clause(&mut self) {
        self.start_node(SyntaxKind::UsingClause);
        self.bump(); // USING

        if self.at(SyntaxKind::ParenOpen) {
            let open_span = self.current_span();
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();

            loop {
                if self.eof() || self.at(SyntaxKind::ParenClose) {
                    break;
                }
                if !self.eat(SyntaxKind::Ident) {
                    self.error_and_bump_msg(DiagnosticKind::ExpectedName, "join column");
                    continue;
                }
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }

            self.pop_delimiter();
            if self.eof() {
                self.error_unclosed_delimiter(
                    DiagnosticKind::UnclosedParen,
                    "USING list started here",
                    open_span,
                );
            } else {
                self.expect(SyntaxKind::ParenClose, "closing `)` for USING");
            }
        } else {
            self.error_msg(DiagnosticKind::ExpectedName, "`(` with join columns");
        }
        self.finish_node();
    }

    /// `WITH [RECURSIVE] name [(col, ...)] AS ( query ), ...`
    fn parse_with_clause(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::WithClause);
        self.bump(); // WITH
        self.eat(SyntaxKind::KwRecursive);

        if self.at(SyntaxKind::Ident) {
            self.parse_cte(stop);
            while self.eat(SyntaxKind::Comma) {
                if self.at(SyntaxKind::Ident) {
                    self.parse_cte(stop);
                } else {
                    self.error_msg(DiagnosticKind::ExpectedName, "CTE after `,`");
                    break;
                }
            }
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedName,
                "CTE name after `WITH`",
                self.stage_recovery(stop).union(TokenSet::single(SyntaxKind::KwSelect)),
            );
        }
        self.finish_node();
    }

    /// `name [(col, ...)] AS ( query )` - the body recurses into the full
    /// pipeline grammar, which is what makes recursive CTEs parse.
    fn parse_cte(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::Cte);
        self.bump(); // name

        if self.at(SyntaxKind::ParenOpen) {
            let open_span = self.current_span();
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            loop {
                if self.eof() || self.at(SyntaxKind::ParenClose) {
                    break;
                }
                if !self.eat(SyntaxKind::Ident) {
                    self.error_and_bump_msg(DiagnosticKind::ExpectedName, "column name");
                    continue;
                }
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
            self.pop_delimiter();
            if self.eof() {
                self.error_unclosed_delimiter(
                    DiagnosticKind::UnclosedParen,
                    "column list started here",
                    open_span,
                );
            } else {
                self.expect(SyntaxKind::ParenClose, "closing `)` for column list");
            }
        }

        self.expect(SyntaxKind::KwAs, "`AS` before CTE body");
        if self.at(SyntaxKind::ParenOpen) {
            self.parse_scope_body();
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedBranch,
                "parenthesized CTE body",
                self.stage_recovery(stop),
            );
        }
        self.finish_node();
    }

    fn sql_expr_or_error(&mut self, stop: TokenSet) {
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedExpression,
                "in SQL clause",
                self.stage_recovery(stop).union(SQL_CLAUSE_FIRST),
            );
        }
    }

    fn sql_expr_list(&mut self, stop: TokenSet) {
        self.sql_expr_or_error(stop);
        while self.eat(SyntaxKind::Comma) {
            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.error_msg(DiagnosticKind::ExpectedExpression, "after `,`");
                break;
            }
        }
    }

    fn sql_sort_keys(&mut self, stop: TokenSet) {
        if !EXPR_FIRST.contains(self.current()) {
            self.error_recover(
                DiagnosticKind::ExpectedExpression,
                "ordering key",
                self.stage_recovery(stop).union(SQL_CLAUSE_FIRST),
            );
            return;
        }
        self.parse_sort_key();
        while self.eat(SyntaxKind::Comma) {
            if EXPR_FIRST.contains(self.current()) {
                self.parse_sort_key();
            } else {
                self.error_msg(DiagnosticKind::ExpectedExpression, "after `,`");
                break;
            }
        }
    }
}

/// Tokens that resume the SQL clause loop after an error inside a clause.
const SQL_CLAUSE_FIRST: TokenSet = TokenSet::new(&[
    SyntaxKind::KwSelect,
    SyntaxKind::KwFrom,
    SyntaxKind::KwWhere,
    SyntaxKind::KwGroup,
    SyntaxKind::KwHaving,
    SyntaxKind::KwOrder,
    SyntaxKind::KwLimit,
    SyntaxKind::KwOffset,
    SyntaxKind::KwUnion,
    SyntaxKind::KwJoin,
]);
