use crate::Query;

#[test]
fn sort_keys() {
    let res = Query::expect_valid_cst("sort ts desc, x");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SortOp
          KwSort "sort"
          SortKey
            NameRef
              Ident "ts"
            KwDesc "desc"
          Comma ","
          SortKey
            NameRef
              Ident "x"
    "#);
}

#[test]
fn put_assignments() {
    let res = Query::expect_valid_cst("put total := x + y, flag := true");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        PutOp
          KwPut "put"
          Assignment
            NameRef
              Ident "total"
            Assign ":="
            BinaryExpr
              NameRef
                Ident "x"
              Plus "+"
              NameRef
                Ident "y"
          Comma ","
          Assignment
            NameRef
              Ident "flag"
            Assign ":="
            Literal
              KwTrue "true"
    "#);
}

#[test]
fn rename_assignment() {
    let res = Query::expect_valid_cst("rename dst := src");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        RenameOp
          KwRename "rename"
          Assignment
            NameRef
              Ident "dst"
            Assign ":="
            NameRef
              Ident "src"
    "#);
}

#[test]
fn cut_mixed_items() {
    let res = Query::expect_valid_cst("cut id, name := full_name");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        CutOp
          KwCut "cut"
          NameRef
            Ident "id"
          Comma ","
          Assignment
            NameRef
              Ident "name"
            Assign ":="
            NameRef
              Ident "full_name"
    "#);
}

#[test]
fn aggregate_with_by() {
    let res = Query::expect_valid_cst("aggregate total := sum(x), count() by dept");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        AggregateOp
          KwAggregate "aggregate"
          Aggregation
            Ident "total"
            Assign ":="
            CallExpr
              NameRef
                Ident "sum"
              ArgList
                ParenOpen "("
                NameRef
                  Ident "x"
                ParenClose ")"
          Comma ","
          Aggregation
            CallExpr
              KwCount "count"
              ArgList
                ParenOpen "("
                ParenClose ")"
          ByClause
            KwBy "by"
            NameRef
              Ident "dept"
    "#);
}

#[test]
fn summarize_is_aggregate() {
    let res = Query::expect_valid_cst("summarize avg(x)");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        AggregateOp
          KwSummarize "summarize"
          Aggregation
            CallExpr
              NameRef
                Ident "avg"
              ArgList
                ParenOpen "("
                NameRef
                  Ident "x"
                ParenClose ")"
    "#);
}

#[test]
fn distinct_value() {
    let res = Query::expect_valid_cst("distinct id");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        DistinctOp
          KwDistinct "distinct"
          NameRef
            Ident "id"
    "#);
}

#[test]
fn head_without_count() {
    let res = Query::expect_valid_cst("head");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        HeadOp
          KwHead "head"
    "#);
}

#[test]
fn bare_operators() {
    let res = Query::expect_valid_cst("uniq | fuse | pass | count");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        UniqOp
          KwUniq "uniq"
        Pipe "|"
        FuseOp
          KwFuse "fuse"
        Pipe "|"
        PassOp
          KwPass "pass"
        Pipe "|"
        CountOp
          KwCount "count"
    "#);
}

#[test]
fn explode_by_type() {
    let res = Query::expect_valid_cst("explode addrs by ip");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        ExplodeOp
          KwExplode "explode"
          NameRef
            Ident "addrs"
          ByClause
            KwBy "by"
            PrimitiveType
              TyIp "ip"
    "#);
}

#[test]
fn join_op_with_subquery() {
    let res = Query::expect_valid_cst("anti join ( from blocklist ) on addr");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        JoinOp
          KwAnti "anti"
          KwJoin "join"
          ScopeBody
            ParenOpen "("
            Pipeline
              FromOp
                KwFrom "from"
                NameRef
                  Ident "blocklist"
            ParenClose ")"
          OnClause
            KwOn "on"
            NameRef
              Ident "addr"
    "#);
}

#[test]
fn call_named_op() {
    let res = Query::expect_valid_cst("call enrich");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        CallOp
          KwCall "call"
          Ident "enrich"
    "#);
}

#[test]
fn search_expression() {
    let res = Query::expect_valid_cst(r#"search "error" and code == 500"#);

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SearchOp
          KwSearch "search"
          BinaryExpr
            Literal
              DoubleQuotedString "\"error\""
            KwAnd "and"
            BinaryExpr
              NameRef
                Ident "code"
              Eq "=="
              Literal
                IntLit "500"
    "#);
}

#[test]
fn load_target() {
    let res = Query::expect_valid_cst(r#"load "s3://bucket/logs""#);

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        LoadOp
          KwLoad "load"
          Literal
            DoubleQuotedString "\"s3://bucket/logs\""
    "#);
}
