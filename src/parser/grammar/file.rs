//! File root, pipelines, and stage dispatch.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::token_sets::{DECL_FIRST, EXPR_FIRST, PIPE, STAGE_FIRST};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// A file is an optional declaration block followed by a pipeline.
    pub(crate) fn parse_file(&mut self) {
        self.start_node(SyntaxKind::File);

        while self.at_set(DECL_FIRST) {
            self.parse_decl();
        }

        if !self.eof() {
            self.parse_pipeline(TokenSet::EMPTY);
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Pipe-separated stages. `stop` carries the closing delimiter of an
    /// enclosing scope body, so nested pipelines end where their parens do.
    pub(crate) fn parse_pipeline(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::Pipeline);

        loop {
            let stage_ok = self.parse_stage(stop);

            if self.at_set(PIPE) {
                self.bump();
                continue;
            }
            if self.eof() || self.at_set(stop) {
                break;
            }
            if self.at_set(STAGE_FIRST) {
                // Missing separator before the next stage. Stay quiet when
                // the stage we just left already errored and resynced here.
                if stage_ok {
                    self.error_msg(
                        DiagnosticKind::UnexpectedToken,
                        "expected `|` between stages",
                    );
                }
                continue;
            }

            // A stage ended but the next token is neither a separator nor
            // the end of the enclosing scope. Skip to somewhere a stage can
            // resume. Stray closers are consumed here one at a time.
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                "expected `|` between stages",
                PIPE.union(STAGE_FIRST).union(stop),
            );
            if self.at_set(PIPE) {
                self.bump();
                continue;
            }
            if self.at_set(STAGE_FIRST) {
                continue;
            }
            break;
        }

        self.finish_node();
    }

    /// Dispatch on the leading keyword. Anything that can start an
    /// expression becomes an implicit expression stage (bare values).
    /// Returns `false` when the stage position held nothing usable and
    /// recovery already ran.
    pub(crate) fn parse_stage(&mut self, stop: TokenSet) -> bool {
        match self.current() {
            SyntaxKind::KwSelect | SyntaxKind::KwWith => self.parse_sql_op(stop),
            SyntaxKind::KwFrom => self.parse_from_op(stop),
            SyntaxKind::KwFork => self.parse_fork_op(stop),
            SyntaxKind::KwSwitch => self.parse_switch_op(stop),
            SyntaxKind::KwSearch => self.parse_search_op(stop),
            SyntaxKind::KwAssert => self.parse_assert_op(stop),
            SyntaxKind::KwSort => self.parse_sort_op(stop),
            SyntaxKind::KwTop => self.parse_top_op(stop),
            SyntaxKind::KwCut => self.parse_cut_op(stop),
            SyntaxKind::KwDistinct => self.parse_distinct_op(stop),
            SyntaxKind::KwDrop => self.parse_drop_op(stop),
            SyntaxKind::KwHead => self.parse_head_op(stop),
            SyntaxKind::KwTail => self.parse_tail_op(stop),
            SyntaxKind::KwSkip => self.parse_skip_op(stop),
            SyntaxKind::KwWhere => self.parse_where_op(stop),
            SyntaxKind::KwUniq => self.parse_uniq_op(),
            SyntaxKind::KwPut => self.parse_put_op(stop),
            SyntaxKind::KwRename => self.parse_rename_op(stop),
            SyntaxKind::KwFuse => self.parse_fuse_op(),
            SyntaxKind::KwShapes => self.parse_shapes_op(),
            SyntaxKind::KwPass => self.parse_pass_op(),
            SyntaxKind::KwExplode => self.parse_explode_op(stop),
            SyntaxKind::KwMerge => self.parse_merge_op(stop),
            SyntaxKind::KwUnnest => self.parse_unnest_op(stop),
            SyntaxKind::KwValues => self.parse_values_op(stop),
            SyntaxKind::KwLoad => self.parse_load_op(stop),
            SyntaxKind::KwOutput => self.parse_output_op(stop),
            SyntaxKind::KwDebug => self.parse_debug_op(),
            SyntaxKind::KwCall => self.parse_call_op(stop),
            SyntaxKind::KwCount => self.parse_count_op(),
            SyntaxKind::KwAggregate | SyntaxKind::KwSummarize => self.parse_aggregate_op(stop),
            SyntaxKind::KwJoin
            | SyntaxKind::KwLeft
            | SyntaxKind::KwRight
            | SyntaxKind::KwInner
            | SyntaxKind::KwOuter
            | SyntaxKind::KwFull
            | SyntaxKind::KwCross
            | SyntaxKind::KwAnti => self.parse_join_op(stop),
            kind if EXPR_FIRST.contains(kind) => {
                self.start_node(SyntaxKind::ExprOp);
                self.parse_expr();
                self.finish_node();
            }
            _ => {
                self.error_recover(
                    DiagnosticKind::ExpectedStage,
                    "e.g. `where`, `sort`, `head`, or a SQL clause",
                    PIPE.union(STAGE_FIRST).union(stop),
                );
                return false;
            }
        }
        true
    }

    /// Parenthesized sub-pipeline: fork/switch branches, CTE bodies,
    /// EXISTS subqueries. The one genuinely recursive construct in the
    /// stage grammar - it re-enters `parse_pipeline` directly.
    pub(crate) fn parse_scope_body(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::ScopeBody);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump(); // consume '('

        self.parse_pipeline(TokenSet::single(SyntaxKind::ParenClose));

        self.pop_delimiter();
        if self.eof() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedParen,
                "scope started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::ParenClose, "closing `)`");
        }
        self.finish_node();
    }

    /// Recovery set for productions nested inside a stage: stage
    /// separators, the next stage keyword, or the enclosing scope's end.
    pub(crate) fn stage_recovery(&self, stop: TokenSet) -> TokenSet {
        PIPE.union(STAGE_FIRST).union(stop)
    }
}
