//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors. Cast is
//! infallible for the correct `SyntaxKind` - validation happens elsewhere.

use rowan::{TextRange, TextSize};

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn syntax(&self) -> &SyntaxNode {
                &self.0
            }

            pub fn text_range(&self) -> TextRange {
                self.0.text_range()
            }
        }
    };
}

ast_node!(File, File);
ast_node!(Pipeline, Pipeline);
ast_node!(ScopeBody, ScopeBody);

ast_node!(ConstDecl, ConstDecl);
ast_node!(FnDecl, FnDecl);
ast_node!(LetDecl, LetDecl);
ast_node!(OpDecl, OpDecl);
ast_node!(TypeDecl, TypeDecl);
ast_node!(PragmaDecl, PragmaDecl);

ast_node!(RecordLiteral, RecordLiteral);
ast_node!(ArrayLiteral, ArrayLiteral);
ast_node!(SetLiteral, SetLiteral);
ast_node!(MapLiteral, MapLiteral);
ast_node!(CaseExpr, CaseExpr);
ast_node!(ErrorNode, Error);

/// A file-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decl {
    Const(ConstDecl),
    Fn(FnDecl),
    Let(LetDecl),
    Op(OpDecl),
    Type(TypeDecl),
    Pragma(PragmaDecl),
}

impl Decl {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::ConstDecl => ConstDecl::cast(node).map(Decl::Const),
            SyntaxKind::FnDecl => FnDecl::cast(node).map(Decl::Fn),
            SyntaxKind::LetDecl => LetDecl::cast(node).map(Decl::Let),
            SyntaxKind::OpDecl => OpDecl::cast(node).map(Decl::Op),
            SyntaxKind::TypeDecl => TypeDecl::cast(node).map(Decl::Type),
            SyntaxKind::PragmaDecl => PragmaDecl::cast(node).map(Decl::Pragma),
            _ => None,
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Decl::Const(n) => n.syntax(),
            Decl::Fn(n) => n.syntax(),
            Decl::Let(n) => n.syntax(),
            Decl::Op(n) => n.syntax(),
            Decl::Type(n) => n.syntax(),
            Decl::Pragma(n) => n.syntax(),
        }
    }

    /// The declared name, when present.
    pub fn name(&self) -> Option<SyntaxToken> {
        self.syntax()
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Ident)
    }
}

/// One stage of a pipeline: a SQL clause sequence, a pipe operator, or a
/// bare expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stage(SyntaxNode);

impl Stage {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let kind = node.kind();
        (kind.is_operator_node() || kind == SyntaxKind::ExprOp || kind == SyntaxKind::Error)
            .then_some(Self(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    /// A keyword-introduced transformation or SQL sequence, as opposed to
    /// a bare value stage or an error placeholder.
    pub fn is_operator(&self) -> bool {
        self.0.kind().is_operator_node()
    }
}

impl File {
    pub fn decls(&self) -> impl Iterator<Item = Decl> + '_ {
        self.0.children().filter_map(Decl::cast)
    }

    pub fn pipeline(&self) -> Option<Pipeline> {
        self.0.children().find_map(Pipeline::cast)
    }

    /// All error nodes anywhere in the tree, in source order.
    pub fn errors(&self) -> impl Iterator<Item = ErrorNode> + '_ {
        self.0
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::Error)
            .map(ErrorNode)
    }
}

impl Pipeline {
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.0.children().filter_map(Stage::cast)
    }
}

impl ScopeBody {
    pub fn pipeline(&self) -> Option<Pipeline> {
        self.0.children().find_map(Pipeline::cast)
    }
}

impl FnDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Ident)
    }
}

impl OpDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Ident)
    }
}

impl ErrorNode {
    /// Whether the node covers no source text (a missing-token error).
    pub fn is_empty(&self) -> bool {
        self.0.text_range().is_empty()
    }

    /// Offset a UI should anchor this error to. Zero-width error nodes
    /// anchor to the end of the nearest preceding non-trivia sibling so
    /// the caret lands on something visible.
    pub fn anchor_offset(&self) -> TextSize {
        if !self.is_empty() {
            return self.0.text_range().start();
        }
        let mut prev = self.0.prev_sibling_or_token();
        while let Some(element) = prev {
            let is_trivia = element
                .as_token()
                .is_some_and(|t| t.kind().is_trivia());
            if !is_trivia && !element.text_range().is_empty() {
                return element.text_range().end();
            }
            prev = element.prev_sibling_or_token();
        }
        self.0.text_range().start()
    }
}
