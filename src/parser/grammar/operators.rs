//! Pipe operator stages.
//!
//! Each operator consumes its leading keyword and whatever argument shape
//! it takes: nothing (`pass`), an optional expression (`head`), an
//! expression list (`cut`), assignments (`put`), or parenthesized
//! sub-pipelines (`fork`, `switch`, `join`).

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::EXPR_FIRST;
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// `from source [, source ...]`
    pub(crate) fn parse_from_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::FromOp);
        self.bump();
        self.op_expr_list(stop);
        self.finish_node();
    }

    /// `fork ( pipeline ) ( pipeline ) ...`
    pub(crate) fn parse_fork_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::ForkOp);
        self.bump();

        if !self.at(SyntaxKind::ParenOpen) {
            self.error_recover(
                DiagnosticKind::ExpectedBranch,
                "after `fork`",
                self.stage_recovery(stop),
            );
        }
        while self.at(SyntaxKind::ParenOpen) {
            self.parse_scope_body();
        }
        self.finish_node();
    }

    /// `switch [subject] case value ( pipeline ) ... [default ( pipeline )]`
    pub(crate) fn parse_switch_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::SwitchOp);
        self.bump();

        if !self.at(SyntaxKind::KwCase)
            && !self.at(SyntaxKind::KwDefault)
            && EXPR_FIRST.contains(self.current())
        {
            self.parse_expr();
        }

        let mut saw_default = false;
        loop {
            match self.current() {
                SyntaxKind::KwCase => {
                    if saw_default {
                        self.error(DiagnosticKind::TrailingSwitchArm);
                    }
                    self.start_node(SyntaxKind::SwitchCase);
                    self.bump();
                    if EXPR_FIRST.contains(self.current()) {
                        self.parse_expr();
                    } else {
                        self.error_msg(DiagnosticKind::ExpectedExpression, "after `case`");
                    }
                    self.switch_arm_body(stop);
                    self.finish_node();
                }
                SyntaxKind::KwDefault => {
                    saw_default = true;
                    self.start_node(SyntaxKind::SwitchCase);
                    self.bump();
                    self.switch_arm_body(stop);
                    self.finish_node();
                }
                _ => break,
            }
        }
        self.finish_node();
    }

    fn switch_arm_body(&mut self, stop: TokenSet) {
        if self.at(SyntaxKind::ParenOpen) {
            self.parse_scope_body();
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedBranch,
                "for this arm",
                self.stage_recovery(stop)
                    .union(TokenSet::new(&[SyntaxKind::KwCase, SyntaxKind::KwDefault])),
            );
        }
    }

    pub(crate) fn parse_search_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::SearchOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    pub(crate) fn parse_assert_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::AssertOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    /// `sort [key [asc|desc] [nulls first|last], ...]`
    pub(crate) fn parse_sort_op(&mut self, _stop: TokenSet) {
        self.start_node(SyntaxKind::SortOp);
        self.bump();

        if EXPR_FIRST.contains(self.current()) {
            self.parse_sort_key();
            while self.eat(SyntaxKind::Comma) {
                if EXPR_FIRST.contains(self.current()) {
                    self.parse_sort_key();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedExpression, "sort key after `,`");
                    break;
                }
            }
        }
        self.finish_node();
    }

    /// One ordering key with optional direction and nulls placement.
    /// Shared with SQL's ORDER BY.
    pub(crate) fn parse_sort_key(&mut self) {
        self.start_node(SyntaxKind::SortKey);
        self.parse_expr();
        if !self.eat(SyntaxKind::KwAsc) {
            self.eat(SyntaxKind::KwDesc);
        }
        if self.eat(SyntaxKind::KwNulls) && !self.eat(SyntaxKind::KwFirst) {
            self.expect(SyntaxKind::KwLast, "`FIRST` or `LAST` after `NULLS`");
        }
        self.finish_node();
    }

    pub(crate) fn parse_top_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::TopOp);
        self.bump();
        if EXPR_FIRST.contains(self.current()) {
            self.op_expr_list(stop);
        }
        self.finish_node();
    }

    /// `cut field [:= expr], ...`
    pub(crate) fn parse_cut_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::CutOp);
        self.bump();
        self.op_assignment_list(stop);
        self.finish_node();
    }

    pub(crate) fn parse_distinct_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::DistinctOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    pub(crate) fn parse_drop_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::DropOp);
        self.bump();
        self.op_expr_list(stop);
        self.finish_node();
    }

    pub(crate) fn parse_head_op(&mut self, _stop: TokenSet) {
        self.start_node(SyntaxKind::HeadOp);
        self.bump();
        self.op_opt_expr();
        self.finish_node();
    }

    pub(crate) fn parse_tail_op(&mut self, _stop: TokenSet) {
        self.start_node(SyntaxKind::TailOp);
        self.bump();
        self.op_opt_expr();
        self.finish_node();
    }

    pub(crate) fn parse_skip_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::SkipOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    pub(crate) fn parse_where_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::WhereOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    pub(crate) fn parse_uniq_op(&mut self) {
        self.start_node(SyntaxKind::UniqOp);
        self.bump();
        self.finish_node();
    }

    /// `put field := expr, ...`
    pub(crate) fn parse_put_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::PutOp);
        self.bump();
        self.op_assignment_list(stop);
        self.finish_node();
    }

    /// `rename new := old, ...`
    pub(crate) fn parse_rename_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::RenameOp);
        self.bump();
        self.op_assignment_list(stop);
        self.finish_node();
    }

    pub(crate) fn parse_fuse_op(&mut self) {
        self.start_node(SyntaxKind::FuseOp);
        self.bump();
        self.finish_node();
    }

    pub(crate) fn parse_shapes_op(&mut self) {
        self.start_node(SyntaxKind::ShapesOp);
        self.bump();
        self.op_opt_expr();
        self.finish_node();
    }

    pub(crate) fn parse_pass_op(&mut self) {
        self.start_node(SyntaxKind::PassOp);
        self.bump();
        self.finish_node();
    }

    /// `explode expr [, expr ...] [by type]` - the `by` argument is the
    /// element type to explode into, not a grouping key.
    pub(crate) fn parse_explode_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::ExplodeOp);
        self.bump();
        self.op_expr_list(stop);
        if self.at(SyntaxKind::KwBy) {
            self.start_node(SyntaxKind::ByClause);
            self.bump();
            if self.at_type_first() {
                self.parse_type();
            } else {
                self.error(DiagnosticKind::ExpectedType);
            }
            self.finish_node();
        }
        self.finish_node();
    }

    pub(crate) fn parse_merge_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::MergeOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    pub(crate) fn parse_unnest_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::UnnestOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    pub(crate) fn parse_values_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::ValuesOp);
        self.bump();
        self.op_expr_list(stop);
        self.finish_node();
    }

    pub(crate) fn parse_load_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::LoadOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    pub(crate) fn parse_output_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::OutputOp);
        self.bump();
        self.op_expr(stop);
        self.finish_node();
    }

    pub(crate) fn parse_debug_op(&mut self) {
        self.start_node(SyntaxKind::DebugOp);
        self.bump();
        self.op_opt_expr();
        self.finish_node();
    }

    /// `call name [arg, ...]`
    pub(crate) fn parse_call_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::CallOp);
        self.bump();
        if !self.eat(SyntaxKind::Ident) {
            self.error_msg(DiagnosticKind::ExpectedName, "operator to call");
        }
        if EXPR_FIRST.contains(self.current()) {
            self.op_expr_list(stop);
        }
        self.finish_node();
    }

    /// Bare `count`, or `count()` in aggregate position.
    pub(crate) fn parse_count_op(&mut self) {
        self.start_node(SyntaxKind::CountOp);
        self.bump();
        if self.at(SyntaxKind::ParenOpen) {
            self.parse_arg_list();
        }
        self.finish_node();
    }

    /// `aggregate [name :=] agg(expr), ... [by key, ...]`
    pub(crate) fn parse_aggregate_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::AggregateOp);
        self.bump(); // aggregate/summarize

        if EXPR_FIRST.contains(self.current()) {
            self.parse_aggregation();
            while self.eat(SyntaxKind::Comma) {
                if EXPR_FIRST.contains(self.current()) {
                    self.parse_aggregation();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedExpression, "aggregation after `,`");
                    break;
                }
            }
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedExpression,
                "after `aggregate`",
                self.stage_recovery(stop).union(TokenSet::single(SyntaxKind::KwBy)),
            );
        }

        if self.at(SyntaxKind::KwBy) {
            self.parse_by_clause(stop);
        }
        self.finish_node();
    }

    /// `[name :=] call-expr`
    fn parse_aggregation(&mut self) {
        self.start_node(SyntaxKind::Aggregation);
        if self.at(SyntaxKind::Ident) && self.next_is(SyntaxKind::Assign) {
            self.bump(); // name
            self.bump(); // :=
        }
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.error(DiagnosticKind::ExpectedExpression);
        }
        self.finish_node();
    }

    /// `[left|right|inner|outer|full|cross|anti] join source [as alias] [on expr | using (...)]`
    pub(crate) fn parse_join_op(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::JoinOp);
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
        self.expect(SyntaxKind::KwJoin, "`join`");

        if self.at(SyntaxKind::ParenOpen) {
            self.parse_scope_body();
        } else if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedExpression,
                "join source",
                self.stage_recovery(stop)
                    .union(TokenSet::new(&[SyntaxKind::KwOn, SyntaxKind::KwUsing, SyntaxKind::KwAs])),
            );
        }

        if self.eat(SyntaxKind::KwAs) && EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        }
        if self.at(SyntaxKind::KwOn) {
            self.parse_on_clause();
        } else if self.at(SyntaxKind::KwUsing) {
            self.parse_using_clause();
        }
        self.finish_node();
    }

    /// `by key, ...` - trailing grouping for aggregate/explode.
    fn parse_by_clause(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::ByClause);
        self.bump(); // by
        self.op_expr_list(stop);
        self.finish_node();
    }

    // --- Argument shape helpers ---

    /// Required single expression.
    pub(crate) fn op_expr(&mut self, stop: TokenSet) {
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedExpression,
                "operator argument",
                self.stage_recovery(stop),
            );
        }
    }

    /// Optional single expression.
    pub(crate) fn op_opt_expr(&mut self) {
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        }
    }

    /// Required comma-separated expression list.
    pub(crate) fn op_expr_list(&mut self, stop: TokenSet) {
        if !EXPR_FIRST.contains(self.current()) {
            self.error_recover(
                DiagnosticKind::ExpectedExpression,
                "operator argument",
                self.stage_recovery(stop),
            );
            return;
        }
        self.parse_expr();
        while self.eat(SyntaxKind::Comma) {
            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.error_msg(DiagnosticKind::ExpectedExpression, "after `,`");
                break;
            }
        }
    }

    /// Comma-separated items that may each be `target := expr`.
    pub(crate) fn op_assignment_list(&mut self, stop: TokenSet) {
        if !EXPR_FIRST.contains(self.current()) {
            self.error_recover(
                DiagnosticKind::ExpectedExpression,
                "operator argument",
                self.stage_recovery(stop),
            );
            return;
        }
        self.parse_assignment_item();
        while self.eat(SyntaxKind::Comma) {
            if EXPR_FIRST.contains(self.current()) {
                self.parse_assignment_item();
            } else {
                self.error_msg(DiagnosticKind::ExpectedExpression, "after `,`");
                break;
            }
        }
    }

    /// `target := expr`, or a bare expression when no `:=` follows.
    fn parse_assignment_item(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_expr();
        if self.at(SyntaxKind::Assign) {
            self.start_node_at(checkpoint, SyntaxKind::Assignment);
            self.bump(); // :=
            if EXPR_FIRST.contains(self.current()) {
                self.parse_expr();
            } else {
                self.error_msg(DiagnosticKind::ExpectedExpression, "after `:=`");
            }
            self.finish_node();
        }
    }
}
