use crate::Query;
use indoc::indoc;

#[test]
fn const_declaration() {
    let input = indoc! {r#"
    const threshold = 100
    from t | where x > threshold
    "#}
    .trim_end();

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    File
      ConstDecl
        KwConst "const"
        Ident "threshold"
        Equals "="
        Literal
          IntLit "100"
      Pipeline
        FromOp
          KwFrom "from"
          NameRef
            Ident "t"
        Pipe "|"
        WhereOp
          KwWhere "where"
          BinaryExpr
            NameRef
              Ident "x"
            Gt ">"
            NameRef
              Ident "threshold"
    "#);
}

#[test]
fn let_declaration() {
    let res = Query::expect_valid_cst("let cutoff = 2024-01-15T00:00:00Z");

    insta::assert_snapshot!(res, @r#"
    File
      LetDecl
        KwLet "let"
        Ident "cutoff"
        Equals "="
        Literal
          TimestampLit "2024-01-15T00:00:00Z"
    "#);
}

#[test]
fn function_declaration() {
    let res = Query::expect_valid_cst("fn double(x): x * 2");

    insta::assert_snapshot!(res, @r#"
    File
      FnDecl
        KwFn "fn"
        Ident "double"
        ParamList
          ParenOpen "("
          Param
            Ident "x"
          ParenClose ")"
        Colon ":"
        BinaryExpr
          NameRef
            Ident "x"
          Star "*"
          Literal
            IntLit "2"
    "#);
}

#[test]
fn op_declaration() {
    let res = Query::expect_valid_cst("op clean(): ( where valid | drop tmp )");

    insta::assert_snapshot!(res, @r#"
    File
      OpDecl
        KwOp "op"
        Ident "clean"
        ParamList
          ParenOpen "("
          ParenClose ")"
        Colon ":"
        ScopeBody
          ParenOpen "("
          Pipeline
            WhereOp
              KwWhere "where"
              NameRef
                Ident "valid"
            Pipe "|"
            DropOp
              KwDrop "drop"
              NameRef
                Ident "tmp"
          ParenClose ")"
    "#);
}

#[test]
fn type_declaration_union() {
    let res = Query::expect_valid_cst("type port = uint16 | string");

    insta::assert_snapshot!(res, @r#"
    File
      TypeDecl
        KwType "type"
        Ident "port"
        Equals "="
        UnionType
          PrimitiveType
            TyUint16 "uint16"
          Pipe "|"
          PrimitiveType
            TyString "string"
    "#);
}

#[test]
fn pragma_declaration() {
    let res = Query::expect_valid_cst(r#"pragma dialect "strict""#);

    insta::assert_snapshot!(res, @r#"
    File
      PragmaDecl
        KwPragma "pragma"
        Ident "dialect"
        Literal
          DoubleQuotedString "\"strict\""
    "#);
}

#[test]
fn lambda_expression() {
    let res = Query::expect_valid_cst("const f = lambda a, b: a + b");

    insta::assert_snapshot!(res, @r#"
    File
      ConstDecl
        KwConst "const"
        Ident "f"
        Equals "="
        LambdaExpr
          KwLambda "lambda"
          ParamList
            Param
              Ident "a"
            Comma ","
            Param
              Ident "b"
          Colon ":"
          BinaryExpr
            NameRef
              Ident "a"
            Plus "+"
            NameRef
              Ident "b"
    "#);
}

#[test]
fn multiple_declarations_then_pipeline() {
    let input = indoc! {r#"
    const limit = 10
    fn half(n): n / 2
    from t | head limit
    "#}
    .trim_end();

    let query = Query::expect_valid(input);
    let file = query.file();
    assert_eq!(file.decls().count(), 2);
    let names: Vec<_> = file
        .decls()
        .filter_map(|d| d.name().map(|t| t.text().to_string()))
        .collect();
    assert_eq!(names, vec!["limit", "half"]);
    assert!(file.pipeline().is_some());
}
