use crate::Query;

#[test]
fn multiplication_binds_tighter_than_addition() {
    let res = Query::expect_valid_cst("values 1 + 2 * 3");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BinaryExpr
            Literal
              IntLit "1"
            Plus "+"
            BinaryExpr
              Literal
                IntLit "2"
              Star "*"
              Literal
                IntLit "3"
    "#);
}

#[test]
fn subtraction_is_left_associative() {
    let res = Query::expect_valid_cst("values 1 - 2 - 3");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BinaryExpr
            BinaryExpr
              Literal
                IntLit "1"
              Minus "-"
              Literal
                IntLit "2"
            Minus "-"
            Literal
              IntLit "3"
    "#);
}

#[test]
fn comparison_and_logic() {
    let res = Query::expect_valid_cst("values a < b and b < c");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BinaryExpr
            BinaryExpr
              NameRef
                Ident "a"
              Lt "<"
              NameRef
                Ident "b"
            KwAnd "and"
            BinaryExpr
              NameRef
                Ident "b"
              Lt "<"
              NameRef
                Ident "c"
    "#);
}

#[test]
fn unary_operators() {
    let res = Query::expect_valid_cst("values -x + !y");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BinaryExpr
            UnaryExpr
              Minus "-"
              NameRef
                Ident "x"
            Plus "+"
            UnaryExpr
              Bang "!"
              NameRef
                Ident "y"
    "#);
}

#[test]
fn concatenation() {
    let res = Query::expect_valid_cst("values a || ', ' || b");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BinaryExpr
            BinaryExpr
              NameRef
                Ident "a"
              Concat "||"
              Literal
                SingleQuotedString "', '"
            Concat "||"
            NameRef
              Ident "b"
    "#);
}

#[test]
fn between_bounds() {
    let res = Query::expect_valid_cst("values x between 1 and 10");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BetweenExpr
            NameRef
              Ident "x"
            KwBetween "between"
            Literal
              IntLit "1"
            KwAnd "and"
            Literal
              IntLit "10"
    "#);
}

#[test]
fn in_tuple() {
    let res = Query::expect_valid_cst("values x in (1, 2, 3)");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BinaryExpr
            NameRef
              Ident "x"
            KwIn "in"
            ParenExpr
              ParenOpen "("
              Literal
                IntLit "1"
              Comma ","
              Literal
                IntLit "2"
              Comma ","
              Literal
                IntLit "3"
              ParenClose ")"
    "#);
}

#[test]
fn is_not_null() {
    let res = Query::expect_valid_cst("values x is not null");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BinaryExpr
            NameRef
              Ident "x"
            KwIs "is"
            KwNot "not"
            Literal
              KwNull "null"
    "#);
}

#[test]
fn pattern_match() {
    let res = Query::expect_valid_cst(r#"values host ~ "api*""#);

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          BinaryExpr
            NameRef
              Ident "host"
            Tilde "~"
            Literal
              DoubleQuotedString "\"api*\""
    "#);
}

#[test]
fn case_expression() {
    let res = Query::expect_valid_cst(r#"values case when x > 0 then "pos" else "neg" end"#);

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          CaseExpr
            KwCase "case"
            WhenClause
              KwWhen "when"
              BinaryExpr
                NameRef
                  Ident "x"
                Gt ">"
                Literal
                  IntLit "0"
              KwThen "then"
              Literal
                DoubleQuotedString "\"pos\""
            KwElse "else"
            Literal
              DoubleQuotedString "\"neg\""
            KwEnd "end"
    "#);
}

#[test]
fn cast_operator() {
    let res = Query::expect_valid_cst("values x::int64");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          CastExpr
            NameRef
              Ident "x"
            DoubleColon "::"
            PrimitiveType
              TyInt64 "int64"
    "#);
}

#[test]
fn cast_function() {
    let res = Query::expect_valid_cst("values cast(x as string)");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          CastExpr
            KwCast "cast"
            ParenOpen "("
            NameRef
              Ident "x"
            KwAs "as"
            PrimitiveType
              TyString "string"
            ParenClose ")"
    "#);
}

#[test]
fn chained_cast_requires_parens() {
    let query = crate::Query::new("values a::int64::string");
    assert!(query.diagnostics().has_errors());
    assert!(
        query
            .diagnostics()
            .iter()
            .any(|d| d.kind() == crate::DiagnosticKind::ChainedCast)
    );
}

#[test]
fn extract_part() {
    let res = Query::expect_valid_cst("values extract(hour from ts)");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          ExtractExpr
            KwExtract "extract"
            ParenOpen "("
            Ident "hour"
            KwFrom "from"
            NameRef
              Ident "ts"
            ParenClose ")"
    "#);
}

#[test]
fn exists_subquery() {
    let res = Query::expect_valid_cst("values exists ( from audit | head 1 )");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          ExistsExpr
            KwExists "exists"
            ScopeBody
              ParenOpen "("
              Pipeline
                FromOp
                  KwFrom "from"
                  NameRef
                    Ident "audit"
                Pipe "|"
                HeadOp
                  KwHead "head"
                  Literal
                    IntLit "1"
              ParenClose ")"
    "#);
}

#[test]
fn record_array_and_spread() {
    let res = Query::expect_valid_cst(r#"values {name: "Ada", tags: [1, 2], ...rest}"#);

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          RecordLiteral
            BraceOpen "{"
            RecordField
              Ident "name"
              Colon ":"
              Literal
                DoubleQuotedString "\"Ada\""
            Comma ","
            RecordField
              Ident "tags"
              Colon ":"
              ArrayLiteral
                BracketOpen "["
                Literal
                  IntLit "1"
                Comma ","
                Literal
                  IntLit "2"
                BracketClose "]"
            Comma ","
            SpreadItem
              Spread "..."
              NameRef
                Ident "rest"
            BraceClose "}"
    "#);
}

#[test]
fn set_and_map_literals() {
    let res = Query::expect_valid_cst(r#"values |[1, 2]|, |{"a": 1}|"#);

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          SetLiteral
            SetOpen "|["
            Literal
              IntLit "1"
            Comma ","
            Literal
              IntLit "2"
            SetClose "]|"
          Comma ","
          MapLiteral
            MapOpen "|{"
            MapEntry
              Literal
                DoubleQuotedString "\"a\""
              Colon ":"
              Literal
                IntLit "1"
            MapClose "}|"
    "#);
}

#[test]
fn function_call_and_field_access() {
    let res = Query::expect_valid_cst("values lower(user.name)");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          CallExpr
            NameRef
              Ident "lower"
            ArgList
              ParenOpen "("
              FieldExpr
                NameRef
                  Ident "user"
                Dot "."
                Ident "name"
              ParenClose ")"
    "#);
}

#[test]
fn index_expression() {
    let res = Query::expect_valid_cst("values tags[0]");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          IndexExpr
            NameRef
              Ident "tags"
            BracketOpen "["
            Literal
              IntLit "0"
            BracketClose "]"
    "#);
}

#[test]
fn domain_literals() {
    let res = Query::expect_valid_cst("values 1h30m, 10.0.0.0/8, ::1, NaN, -Inf, 0xcafe");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          Literal
            DurationLit "1h30m"
          Comma ","
          Literal
            Ip4NetLit "10.0.0.0/8"
          Comma ","
          Literal
            Ip6Lit "::1"
          Comma ","
          Literal
            NanLit "NaN"
          Comma ","
          Literal
            InfLit "-Inf"
          Comma ","
          Literal
            HexLit "0xcafe"
    "#);
}
