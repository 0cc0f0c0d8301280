use crate::Query;
use indoc::indoc;

#[test]
fn simple_select() {
    let res = Query::expect_valid_cst("SELECT * FROM users");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "SELECT"
            SelectItem
              Star "*"
          FromClause
            KwFrom "FROM"
            FromItem
              NameRef
                Ident "users"
    "#);
}

#[test]
fn select_with_where() {
    let res = Query::expect_valid_cst("select name from users where age >= 21");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "select"
            SelectItem
              NameRef
                Ident "name"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "users"
          WhereClause
            KwWhere "where"
            BinaryExpr
              NameRef
                Ident "age"
              Ge ">="
              Literal
                IntLit "21"
    "#);
}

#[test]
fn select_with_group_by_having() {
    let res = Query::expect_valid_cst("select dept from emp group by dept having count(*) > 3");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "select"
            SelectItem
              NameRef
                Ident "dept"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "emp"
          GroupByClause
            KwGroup "group"
            KwBy "by"
            NameRef
              Ident "dept"
          HavingClause
            KwHaving "having"
            BinaryExpr
              CallExpr
                KwCount "count"
                ArgList
                  ParenOpen "("
                  Star "*"
                  ParenClose ")"
              Gt ">"
              Literal
                IntLit "3"
    "#);
}

#[test]
fn select_with_join() {
    let res = Query::expect_valid_cst("select * from a left join b on a.id == b.id");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "select"
            SelectItem
              Star "*"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "a"
          JoinClause
            KwLeft "left"
            KwJoin "join"
            FromItem
              NameRef
                Ident "b"
            OnClause
              KwOn "on"
              BinaryExpr
                FieldExpr
                  NameRef
                    Ident "a"
                  Dot "."
                  Ident "id"
                Eq "=="
                FieldExpr
                  NameRef
                    Ident "b"
                  Dot "."
                  Ident "id"
    "#);
}

#[test]
fn join_using() {
    let res = Query::expect_valid_cst("select * from a join b using (id, name)");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "select"
            SelectItem
              Star "*"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "a"
          JoinClause
            KwJoin "join"
            FromItem
              NameRef
                Ident "b"
            UsingClause
              KwUsing "using"
              ParenOpen "("
              Ident "id"
              Comma ","
              Ident "name"
              ParenClose ")"
    "#);
}

#[test]
fn recursive_cte() {
    let input = indoc! {r#"
    with recursive nums as ( select n from t ) select n from nums
    "#}
    .trim_end();

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          WithClause
            KwWith "with"
            KwRecursive "recursive"
            Cte
              Ident "nums"
              KwAs "as"
              ScopeBody
                ParenOpen "("
                Pipeline
                  SqlOp
                    SelectClause
                      KwSelect "select"
                      SelectItem
                        NameRef
                          Ident "n"
                    FromClause
                      KwFrom "from"
                      FromItem
                        NameRef
                          Ident "t"
                ParenClose ")"
          SelectClause
            KwSelect "select"
            SelectItem
              NameRef
                Ident "n"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "nums"
    "#);
}

#[test]
fn order_limit_offset() {
    let res = Query::expect_valid_cst("select a from t order by a desc nulls last limit 10 offset 5");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "select"
            SelectItem
              NameRef
                Ident "a"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "t"
          OrderByClause
            KwOrder "order"
            KwBy "by"
            SortKey
              NameRef
                Ident "a"
              KwDesc "desc"
              KwNulls "nulls"
              KwLast "last"
          LimitClause
            KwLimit "limit"
            Literal
              IntLit "10"
          OffsetClause
            KwOffset "offset"
            Literal
              IntLit "5"
    "#);
}

#[test]
fn union_all() {
    let res = Query::expect_valid_cst("select a from t union all select b from u");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "select"
            SelectItem
              NameRef
                Ident "a"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "t"
          UnionClause
            KwUnion "union"
            KwAll "all"
          SelectClause
            KwSelect "select"
            SelectItem
              NameRef
                Ident "b"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "u"
    "#);
}

#[test]
fn select_alias() {
    let res = Query::expect_valid_cst("select a as total from t");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "select"
            SelectItem
              NameRef
                Ident "a"
              KwAs "as"
              Ident "total"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "t"
    "#);
}

#[test]
fn sql_stage_composes_with_pipe_operators() {
    let res = Query::expect_valid_cst("select a from t | head 3");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "select"
            SelectItem
              NameRef
                Ident "a"
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "t"
        Pipe "|"
        HeadOp
          KwHead "head"
          Literal
            IntLit "3"
    "#);
}
