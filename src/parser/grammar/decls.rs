//! Declarations: `const`, `fn`, `let`, `op`, `type`, `pragma`.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{EXPR_FIRST, PIPE, STAGE_FIRST, DECL_FIRST};
use crate::parser::cst::TokenSet;

impl Parser<'_> {
    pub(crate) fn parse_decl(&mut self) {
        match self.current() {
            SyntaxKind::KwConst => self.parse_value_decl(SyntaxKind::ConstDecl),
            SyntaxKind::KwLet => self.parse_value_decl(SyntaxKind::LetDecl),
            SyntaxKind::KwFn => self.parse_fn_decl(),
            SyntaxKind::KwOp => self.parse_op_decl(),
            SyntaxKind::KwType => self.parse_type_decl(),
            SyntaxKind::KwPragma => self.parse_pragma_decl(),
            kind => unreachable!("parse_decl called on non-declaration token {:?}", kind),
        }
    }

    /// `const NAME = expr` | `let NAME = expr`
    fn parse_value_decl(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump(); // const/let keyword

        if !self.eat(SyntaxKind::Ident) {
            self.error(DiagnosticKind::ExpectedName);
        }
        self.expect(SyntaxKind::Equals, "`=`");

        self.decl_body_expr();
        self.finish_node();
    }

    /// `fn NAME(params): expr`
    fn parse_fn_decl(&mut self) {
        self.start_node(SyntaxKind::FnDecl);
        self.bump(); // fn

        if !self.eat(SyntaxKind::Ident) {
            self.error(DiagnosticKind::ExpectedName);
        }
        self.parse_param_list();
        self.expect(SyntaxKind::Colon, "`:` before function body");

        self.decl_body_expr();
        self.finish_node();
    }

    /// `op NAME(params): ( pipeline )`
    ///
    /// An unparenthesized body is accepted as a single stage; without the
    /// parens there is no way to tell where the body ends and the main
    /// pipeline begins.
    fn parse_op_decl(&mut self) {
        self.start_node(SyntaxKind::OpDecl);
        self.bump(); // op

        if !self.eat(SyntaxKind::Ident) {
            self.error(DiagnosticKind::ExpectedName);
        }
        if self.at(SyntaxKind::ParenOpen) {
            self.parse_param_list();
        }
        self.expect(SyntaxKind::Colon, "`:` before operator body");

        if self.at(SyntaxKind::ParenOpen) {
            self.parse_scope_body();
        } else if EXPR_FIRST.contains(self.current()) || STAGE_FIRST.contains(self.current()) {
            self.start_node(SyntaxKind::Pipeline);
            self.parse_single_stage();
            self.finish_node();
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedStage,
                "operator body",
                self.stage_recovery(TokenSet::EMPTY).union(DECL_FIRST),
            );
        }
        self.finish_node();
    }

    /// `type NAME = type-expr`
    fn parse_type_decl(&mut self) {
        self.start_node(SyntaxKind::TypeDecl);
        self.bump(); // type

        if !self.eat(SyntaxKind::Ident) {
            self.error(DiagnosticKind::ExpectedName);
        }
        self.expect(SyntaxKind::Equals, "`=`");

        if self.at_type_first() {
            self.parse_type();
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedType,
                "after `=` in type declaration",
                self.stage_recovery(DECL_FIRST),
            );
        }
        self.finish_node();
    }

    /// `pragma NAME value`
    fn parse_pragma_decl(&mut self) {
        self.start_node(SyntaxKind::PragmaDecl);
        self.bump(); // pragma

        if !self.eat(SyntaxKind::Ident) {
            self.error(DiagnosticKind::ExpectedName);
        }
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// `(a, b, c)`
    pub(crate) fn parse_param_list(&mut self) {
        let open_span = self.current_span();
        self.start_node(SyntaxKind::ParamList);
        self.push_delimiter(SyntaxKind::ParenOpen);
        if !self.expect(SyntaxKind::ParenOpen, "`(` for parameter list") {
            self.pop_delimiter();
            self.finish_node();
            return;
        }

        loop {
            if self.eof() || self.at(SyntaxKind::ParenClose) {
                break;
            }
            if self.at(SyntaxKind::Ident) {
                self.start_node(SyntaxKind::Param);
                self.bump();
                self.finish_node();
            } else {
                self.error_and_bump_msg(DiagnosticKind::ExpectedName, "parameter name");
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
                "parameter list started here",
                open_span,
            );
        } else {
            self.expect(SyntaxKind::ParenClose, "closing `)` for parameter list");
        }
        self.finish_node();
    }

    fn decl_body_expr(&mut self) {
        if EXPR_FIRST.contains(self.current()) {
            self.parse_expr();
        } else {
            self.error_recover(
                DiagnosticKind::ExpectedExpression,
                "declaration body",
                self.stage_recovery(DECL_FIRST),
            );
        }
    }

    /// One stage with no pipe continuation, for unparenthesized op bodies.
    /// A trailing separator is left for the main pipeline.
    fn parse_single_stage(&mut self) {
        self.parse_stage(PIPE);
    }
}
