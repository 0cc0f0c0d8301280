//! Syntax kinds for SuperSQL.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds
//! (from parser). Logos derives token recognition; node kinds lack
//! token/regex attributes. `SuperSql` implements Rowan's `Language` trait
//! for tree construction.
//!
//! Keywords are matched case-insensitively (`SELECT` == `select`);
//! identifiers keep their case. Network, duration, and timestamp literals
//! are classified by lexeme shape before the generic numeric rules, which
//! is why their patterns live here next to the simpler ones they shadow.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Delimiters ---
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    /// `|[` opens a set literal or set type.
    #[token("|[")]
    SetOpen,

    /// `]|` closes a set literal or set type.
    #[token("]|")]
    SetClose,

    /// `|{` opens a map literal or map type.
    #[token("|{")]
    MapOpen,

    /// `}|` closes a map literal or map type.
    #[token("}|")]
    MapClose,

    // --- Operators ---
    /// `|>` pipe-arrow, an alternative stage separator.
    #[token("|>")]
    PipeArrow,

    /// `||` string concatenation.
    #[token("||")]
    Concat,

    /// `|` pipeline stage separator and type union.
    #[token("|")]
    Pipe,

    /// `::` cast operator. Defined before `Colon` for correct precedence.
    #[token("::")]
    DoubleColon,

    /// `:=` assignment in `put`, `rename`, and aggregations.
    #[token(":=")]
    Assign,

    #[token(":")]
    Colon,

    /// `...` record/array spread.
    #[token("...")]
    Spread,

    #[token(".")]
    Dot,

    #[token("==")]
    Eq,

    /// `!=` and `<>` both mean not-equal.
    #[token("!=")]
    #[token("<>")]
    Neq,

    #[token("<=")]
    Le,

    #[token(">=")]
    Ge,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    /// Bare `=` (SQL-style equality).
    #[token("=")]
    Equals,

    /// `~` pattern match.
    #[token("~")]
    Tilde,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("!")]
    Bang,

    #[token("?")]
    Question,

    #[token("@")]
    At,

    #[token("&")]
    Amp,

    // --- Literals ---
    #[regex(r"[0-9]+")]
    IntLit,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    FloatLit,

    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexLit,

    /// Compound duration: `1h30m`, `500ms`, `90s`.
    #[regex(r"([0-9]+(ns|us|µs|ms|s|m|h))+")]
    DurationLit,

    /// ISO 8601 timestamp: `2024-01-15T10:30:00Z`.
    #[regex(r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]+)?([Zz]|[+-][0-9]{2}:[0-9]{2})?")]
    TimestampLit,

    /// Dotted-quad IPv4 address: `10.0.0.1`.
    #[regex(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}")]
    Ip4Lit,

    /// IPv4 CIDR network: `10.0.0.0/8`.
    #[regex(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}/[0-9]{1,2}")]
    Ip4NetLit,

    /// Colon-hex IPv6 address: `::1`, `fe80::`, `2001:db8::1`.
    ///
    /// A bare `::` never matches (that's the cast operator); the lexer
    /// post-pass re-splits `hex::` runs that sit directly against a
    /// following identifier, so casts like `a::int64` survive.
    #[regex(r"([0-9a-fA-F]{1,4}:){2,7}[0-9a-fA-F]{1,4}")]
    #[regex(r"([0-9a-fA-F]{1,4}:){1,7}:")]
    #[regex(r"([0-9a-fA-F]{1,4}:){1,7}(:[0-9a-fA-F]{1,4}){1,7}")]
    #[regex(r":(:[0-9a-fA-F]{1,4}){1,7}")]
    Ip6Lit,

    /// IPv6 CIDR network: `2001:db8::/32`.
    #[regex(r"([0-9a-fA-F]{1,4}:){2,7}[0-9a-fA-F]{1,4}/[0-9]{1,3}")]
    #[regex(r"([0-9a-fA-F]{1,4}:){1,7}:/[0-9]{1,3}")]
    #[regex(r"([0-9a-fA-F]{1,4}:){1,7}(:[0-9a-fA-F]{1,4}){1,7}/[0-9]{1,3}")]
    #[regex(r":(:[0-9a-fA-F]{1,4}){1,7}/[0-9]{1,3}")]
    Ip6NetLit,

    #[token("NaN")]
    NanLit,

    /// Signed infinity: `Inf`, `+Inf`, `-Inf`. Priority keeps the bare
    /// form ahead of the identifier rule.
    #[regex(r"[+-]?Inf", priority = 10)]
    InfLit,

    // --- Strings ---
    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuotedString,

    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuotedString,

    #[regex(r"`[^`]*`")]
    BacktickString,

    /// Raw string, no escape processing: `r"C:\path"`.
    #[regex(r#"r"[^"]*""#)]
    RawString,

    /// Interpolated string: `f"hello {name}"`.
    #[regex(r#"f"([^"\\]|\\.)*""#)]
    FString,

    // --- SQL keywords ---
    #[token("select", ignore(ascii_case))]
    KwSelect,

    #[token("from", ignore(ascii_case))]
    KwFrom,

    #[token("where", ignore(ascii_case))]
    KwWhere,

    #[token("group", ignore(ascii_case))]
    KwGroup,

    #[token("by", ignore(ascii_case))]
    KwBy,

    #[token("having", ignore(ascii_case))]
    KwHaving,

    #[token("order", ignore(ascii_case))]
    KwOrder,

    #[token("limit", ignore(ascii_case))]
    KwLimit,

    #[token("offset", ignore(ascii_case))]
    KwOffset,

    #[token("join", ignore(ascii_case))]
    KwJoin,

    #[token("left", ignore(ascii_case))]
    KwLeft,

    #[token("right", ignore(ascii_case))]
    KwRight,

    #[token("inner", ignore(ascii_case))]
    KwInner,

    #[token("outer", ignore(ascii_case))]
    KwOuter,

    #[token("full", ignore(ascii_case))]
    KwFull,

    #[token("cross", ignore(ascii_case))]
    KwCross,

    #[token("anti", ignore(ascii_case))]
    KwAnti,

    #[token("on", ignore(ascii_case))]
    KwOn,

    #[token("using", ignore(ascii_case))]
    KwUsing,

    #[token("union", ignore(ascii_case))]
    KwUnion,

    #[token("all", ignore(ascii_case))]
    KwAll,

    #[token("distinct", ignore(ascii_case))]
    KwDistinct,

    #[token("as", ignore(ascii_case))]
    KwAs,

    #[token("with", ignore(ascii_case))]
    KwWith,

    #[token("recursive", ignore(ascii_case))]
    KwRecursive,

    #[token("case", ignore(ascii_case))]
    KwCase,

    #[token("when", ignore(ascii_case))]
    KwWhen,

    #[token("then", ignore(ascii_case))]
    KwThen,

    #[token("else", ignore(ascii_case))]
    KwElse,

    #[token("end", ignore(ascii_case))]
    KwEnd,

    #[token("cast", ignore(ascii_case))]
    KwCast,

    #[token("extract", ignore(ascii_case))]
    KwExtract,

    #[token("between", ignore(ascii_case))]
    KwBetween,

    #[token("like", ignore(ascii_case))]
    KwLike,

    #[token("in", ignore(ascii_case))]
    KwIn,

    #[token("is", ignore(ascii_case))]
    KwIs,

    #[token("exists", ignore(ascii_case))]
    KwExists,

    #[token("asc", ignore(ascii_case))]
    KwAsc,

    #[token("desc", ignore(ascii_case))]
    KwDesc,

    #[token("nulls", ignore(ascii_case))]
    KwNulls,

    #[token("first", ignore(ascii_case))]
    KwFirst,

    #[token("last", ignore(ascii_case))]
    KwLast,

    #[token("and", ignore(ascii_case))]
    KwAnd,

    #[token("or", ignore(ascii_case))]
    KwOr,

    #[token("not", ignore(ascii_case))]
    KwNot,

    // --- Pipe operator keywords ---
    #[token("fork", ignore(ascii_case))]
    KwFork,

    #[token("switch", ignore(ascii_case))]
    KwSwitch,

    #[token("search", ignore(ascii_case))]
    KwSearch,

    #[token("assert", ignore(ascii_case))]
    KwAssert,

    #[token("sort", ignore(ascii_case))]
    KwSort,

    #[token("top", ignore(ascii_case))]
    KwTop,

    #[token("cut", ignore(ascii_case))]
    KwCut,

    #[token("drop", ignore(ascii_case))]
    KwDrop,

    #[token("head", ignore(ascii_case))]
    KwHead,

    #[token("tail", ignore(ascii_case))]
    KwTail,

    #[token("skip", ignore(ascii_case))]
    KwSkip,

    #[token("uniq", ignore(ascii_case))]
    KwUniq,

    #[token("put", ignore(ascii_case))]
    KwPut,

    #[token("rename", ignore(ascii_case))]
    KwRename,

    #[token("fuse", ignore(ascii_case))]
    KwFuse,

    #[token("shapes", ignore(ascii_case))]
    KwShapes,

    #[token("pass", ignore(ascii_case))]
    KwPass,

    #[token("explode", ignore(ascii_case))]
    KwExplode,

    #[token("merge", ignore(ascii_case))]
    KwMerge,

    #[token("unnest", ignore(ascii_case))]
    KwUnnest,

    #[token("values", ignore(ascii_case))]
    KwValues,

    #[token("load", ignore(ascii_case))]
    KwLoad,

    #[token("output", ignore(ascii_case))]
    KwOutput,

    #[token("debug", ignore(ascii_case))]
    KwDebug,

    #[token("call", ignore(ascii_case))]
    KwCall,

    #[token("count", ignore(ascii_case))]
    KwCount,

    #[token("aggregate", ignore(ascii_case))]
    KwAggregate,

    #[token("summarize", ignore(ascii_case))]
    KwSummarize,

    #[token("default", ignore(ascii_case))]
    KwDefault,

    // --- Declaration keywords ---
    #[token("const", ignore(ascii_case))]
    KwConst,

    #[token("fn", ignore(ascii_case))]
    KwFn,

    #[token("let", ignore(ascii_case))]
    KwLet,

    #[token("lambda", ignore(ascii_case))]
    KwLambda,

    #[token("op", ignore(ascii_case))]
    KwOp,

    #[token("pragma", ignore(ascii_case))]
    KwPragma,

    #[token("type", ignore(ascii_case))]
    KwType,

    // --- Constant keywords ---
    #[token("true", ignore(ascii_case))]
    KwTrue,

    #[token("false", ignore(ascii_case))]
    KwFalse,

    #[token("null", ignore(ascii_case))]
    KwNull,

    // --- Primitive type keywords ---
    #[token("uint8", ignore(ascii_case))]
    TyUint8,

    #[token("uint16", ignore(ascii_case))]
    TyUint16,

    #[token("uint32", ignore(ascii_case))]
    TyUint32,

    #[token("uint64", ignore(ascii_case))]
    TyUint64,

    #[token("int8", ignore(ascii_case))]
    TyInt8,

    #[token("int16", ignore(ascii_case))]
    TyInt16,

    #[token("int32", ignore(ascii_case))]
    TyInt32,

    #[token("int64", ignore(ascii_case))]
    TyInt64,

    #[token("float16", ignore(ascii_case))]
    TyFloat16,

    #[token("float32", ignore(ascii_case))]
    TyFloat32,

    #[token("float64", ignore(ascii_case))]
    TyFloat64,

    #[token("bool", ignore(ascii_case))]
    TyBool,

    #[token("string", ignore(ascii_case))]
    TyString,

    #[token("bytes", ignore(ascii_case))]
    TyBytes,

    #[token("duration", ignore(ascii_case))]
    TyDuration,

    #[token("time", ignore(ascii_case))]
    TyTime,

    #[token("ip", ignore(ascii_case))]
    TyIp,

    #[token("net", ignore(ascii_case))]
    TyNet,

    #[token("error", ignore(ascii_case))]
    TyError,

    #[token("enum", ignore(ascii_case))]
    TyEnum,

    // SQL-style aliases
    #[token("bigint", ignore(ascii_case))]
    TyBigint,

    #[token("boolean", ignore(ascii_case))]
    TyBoolean,

    #[token("bytea", ignore(ascii_case))]
    TyBytea,

    #[token("char", ignore(ascii_case))]
    TyChar,

    #[token("cidr", ignore(ascii_case))]
    TyCidr,

    #[token("integer", ignore(ascii_case))]
    TyInteger,

    #[token("inet", ignore(ascii_case))]
    TyInet,

    #[token("real", ignore(ascii_case))]
    TyReal,

    #[token("smallint", ignore(ascii_case))]
    TySmallint,

    #[token("text", ignore(ascii_case))]
    TyText,

    #[token("varchar", ignore(ascii_case))]
    TyVarchar,

    // --- Identifiers ---
    /// Case-sensitive, unlike keywords.
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    // --- Trivia ---
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"--[^\n]*")]
    LineComment,

    /// Non-nesting block comment. The second pattern accepts an
    /// unterminated comment running to end of input; the terminated form
    /// always wins on length, so well-formed comments are unaffected.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    BlockComment,

    /// Coalesced unrecognized characters.
    Garbage,

    // --- Node kinds (non-terminals) ---
    File,

    // Declarations
    ConstDecl,
    FnDecl,
    LetDecl,
    OpDecl,
    TypeDecl,
    PragmaDecl,
    ParamList,
    Param,

    // Pipeline structure
    Pipeline,
    /// Parenthesized sub-pipeline: fork/switch branches, CTE bodies,
    /// EXISTS subqueries.
    ScopeBody,

    // SQL clause sequence stage
    SqlOp,
    SelectClause,
    SelectItem,
    FromClause,
    FromItem,
    JoinClause,
    OnClause,
    UsingClause,
    WhereClause,
    GroupByClause,
    HavingClause,
    OrderByClause,
    SortKey,
    LimitClause,
    OffsetClause,
    UnionClause,
    WithClause,
    Cte,

    // Pipe operator stages
    FromOp,
    ForkOp,
    SwitchOp,
    SearchOp,
    AssertOp,
    SortOp,
    TopOp,
    CutOp,
    DistinctOp,
    DropOp,
    HeadOp,
    TailOp,
    SkipOp,
    WhereOp,
    UniqOp,
    PutOp,
    RenameOp,
    FuseOp,
    JoinOp,
    ShapesOp,
    PassOp,
    ExplodeOp,
    MergeOp,
    UnnestOp,
    ValuesOp,
    LoadOp,
    OutputOp,
    DebugOp,
    CallOp,
    CountOp,
    AggregateOp,
    /// Stage that is a bare expression (implicit `values`).
    ExprOp,

    SwitchCase,
    Aggregation,
    Assignment,
    ByClause,

    // Expressions
    Literal,
    NameRef,
    UnaryExpr,
    BinaryExpr,
    BetweenExpr,
    CastExpr,
    CaseExpr,
    WhenClause,
    CallExpr,
    ArgList,
    FieldExpr,
    IndexExpr,
    ParenExpr,
    RecordLiteral,
    RecordField,
    ArrayLiteral,
    SetLiteral,
    MapLiteral,
    MapEntry,
    SpreadItem,
    ExistsExpr,
    ExtractExpr,
    LambdaExpr,

    // Type expressions
    PrimitiveType,
    NamedType,
    UnionType,
    RecordType,
    RecordTypeField,
    ArrayType,
    SetType,
    MapType,
    ParenType,

    /// Explicit error node covering skipped tokens (possibly zero).
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    /// SQL clause keywords, for presentation.
    pub fn is_sql_keyword(self) -> bool {
        (self as u16) >= (KwSelect as u16) && (self as u16) <= (KwNot as u16)
    }

    /// Pipe operator keywords, for presentation.
    pub fn is_operator_keyword(self) -> bool {
        (self as u16) >= (KwFork as u16) && (self as u16) <= (KwDefault as u16)
    }

    /// Declaration keywords.
    pub fn is_decl_keyword(self) -> bool {
        (self as u16) >= (KwConst as u16) && (self as u16) <= (KwType as u16)
    }

    /// Primitive type keywords, including the SQL-style aliases.
    pub fn is_type_keyword(self) -> bool {
        (self as u16) >= (TyUint8 as u16) && (self as u16) <= (TyVarchar as u16)
    }

    /// `true` / `false` / `null` and the special float constants.
    pub fn is_constant(self) -> bool {
        matches!(self, KwTrue | KwFalse | KwNull | NanLit | InfLit)
    }

    pub fn is_keyword(self) -> bool {
        self.is_sql_keyword()
            || self.is_operator_keyword()
            || self.is_decl_keyword()
            || self.is_type_keyword()
            || matches!(self, KwTrue | KwFalse | KwNull)
    }

    pub fn is_string(self) -> bool {
        matches!(
            self,
            DoubleQuotedString | SingleQuotedString | BacktickString | RawString | FString
        )
    }

    /// Node kinds representing keyword-introduced stages: the SQL clause
    /// sequence and every pipe operator. `ExprOp` (a bare value stage) is
    /// deliberately excluded - data files are allowed to hold bare values.
    pub fn is_operator_node(self) -> bool {
        self == SqlOp || ((self as u16) >= (FromOp as u16) && (self as u16) <= (AggregateOp as u16))
    }

    /// Node kinds representing file-level declarations.
    pub fn is_decl_node(self) -> bool {
        (self as u16) >= (ConstDecl as u16) && (self as u16) <= (PragmaDecl as u16)
    }

    pub fn is_number(self) -> bool {
        matches!(
            self,
            IntLit
                | FloatLit
                | HexLit
                | DurationLit
                | TimestampLit
                | Ip4Lit
                | Ip6Lit
                | Ip4NetLit
                | Ip6NetLit
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuperSql {}

impl Language for SuperSql {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SuperSql>;
pub type SyntaxToken = rowan::SyntaxToken<SuperSql>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 256-bit bitset of `SyntaxKind`s for O(1) membership testing.
///
/// SuperSQL's token inventory is too large for a single `u64`, so this
/// spreads the bits over four words. Only token kinds belong in sets; node
/// kinds sit past bit 255 and are rejected at construction.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; 4]);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet([0; 4]);

    /// Panics at compile time if any kind's discriminant >= 256.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 256, "SyntaxKind value exceeds TokenSet capacity");
            bits[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        Self::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 256 {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..256u16 {
            if i < __LAST as u16 && self.0[(i / 64) as usize] & (1 << (i % 64)) != 0 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);

    pub const LITERALS: TokenSet = TokenSet::new(&[
        IntLit,
        FloatLit,
        HexLit,
        DurationLit,
        TimestampLit,
        Ip4Lit,
        Ip4NetLit,
        Ip6Lit,
        Ip6NetLit,
        NanLit,
        InfLit,
        DoubleQuotedString,
        SingleQuotedString,
        BacktickString,
        RawString,
        FString,
        KwTrue,
        KwFalse,
        KwNull,
    ]);

    /// FIRST set of expressions.
    pub const EXPR_FIRST: TokenSet = LITERALS.union(TokenSet::new(&[
        Ident,
        ParenOpen,
        BracketOpen,
        BraceOpen,
        SetOpen,
        MapOpen,
        Minus,
        Bang,
        KwNot,
        KwCase,
        KwCast,
        KwExtract,
        KwExists,
        KwLambda,
        KwCount,
    ]));

    /// FIRST set of type expressions. Primitive keywords are a contiguous
    /// discriminant range, checked separately via `is_type_keyword`.
    pub const TYPE_FIRST: TokenSet =
        TokenSet::new(&[Ident, BraceOpen, BracketOpen, SetOpen, MapOpen, ParenOpen]);

    /// Keywords that can begin a pipeline stage.
    pub const STAGE_FIRST: TokenSet = TokenSet::new(&[
        KwSelect, KwWith, KwFrom, KwFork, KwSwitch, KwSearch, KwAssert, KwSort, KwTop, KwCut,
        KwDistinct, KwDrop, KwHead, KwTail, KwSkip, KwWhere, KwUniq, KwPut, KwRename, KwFuse,
        KwJoin, KwLeft, KwRight, KwInner, KwCross, KwAnti, KwShapes, KwPass, KwExplode, KwMerge,
        KwUnnest, KwValues, KwLoad, KwOutput, KwDebug, KwCall, KwCount, KwAggregate, KwSummarize,
    ]);

    /// Keywords that can begin a declaration.
    pub const DECL_FIRST: TokenSet =
        TokenSet::new(&[KwConst, KwFn, KwLet, KwOp, KwPragma, KwType]);

    /// Stage separators.
    pub const PIPE: TokenSet = TokenSet::new(&[Pipe, PipeArrow]);

    /// Resynchronization points at stage level: a separator or anything
    /// that could begin the next stage or declaration.
    pub const STAGE_RECOVERY: TokenSet = PIPE.union(STAGE_FIRST).union(DECL_FIRST);

    /// Closing delimiters. A stray one of these is consumed one token at a
    /// time rather than treated as a boundary, unless it matches the
    /// innermost open delimiter.
    pub const CLOSERS: TokenSet =
        TokenSet::new(&[ParenClose, BracketClose, BraceClose, SetClose, MapClose]);
}
