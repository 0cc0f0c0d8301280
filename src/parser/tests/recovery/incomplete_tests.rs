//! Missing-token recovery: the absent thing gets a zero-width error node
//! and parsing continues with the structure that is present.

use crate::{DiagnosticKind, Query};

#[test]
fn select_missing_list_keeps_from_clause() {
    let query = Query::new("SELECT FROM users");
    assert!(query.diagnostics().has_errors());

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        SqlOp
          SelectClause
            KwSelect "SELECT"
            Error
          FromClause
            KwFrom "FROM"
            FromItem
              NameRef
                Ident "users"
    "#);
}

#[test]
fn where_missing_predicate() {
    let query = Query::new("where | head 2");
    assert!(query.diagnostics().has_errors());

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        WhereOp
          KwWhere "where"
          Error
        Pipe "|"
        HeadOp
          KwHead "head"
          Literal
            IntLit "2"
    "#);
}

#[test]
fn unclosed_paren_reports_once() {
    let query = Query::new("from t | where (x > 0");
    assert!(query.diagnostics().has_errors());
    assert!(
        query
            .diagnostics()
            .iter()
            .any(|d| d.kind() == DiagnosticKind::UnclosedParen)
    );

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        FromOp
          KwFrom "from"
          NameRef
            Ident "t"
        Pipe "|"
        WhereOp
          KwWhere "where"
          ParenExpr
            ParenOpen "("
            BinaryExpr
              NameRef
                Ident "x"
              Gt ">"
              Literal
                IntLit "0"
    "#);
}

#[test]
fn unclosed_nested_containers() {
    let query = Query::new("values {a: 1, b: [2");
    assert!(query.diagnostics().has_errors());

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          RecordLiteral
            BraceOpen "{"
            RecordField
              Ident "a"
              Colon ":"
              Literal
                IntLit "1"
            Comma ","
            RecordField
              Ident "b"
              Colon ":"
              ArrayLiteral
                BracketOpen "["
                Literal
                  IntLit "2"
    "#);
}

#[test]
fn case_missing_end() {
    let query = Query::new("values case when x then 1");
    assert!(
        query
            .diagnostics()
            .iter()
            .any(|d| d.kind() == DiagnosticKind::UnterminatedCase)
    );

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        ValuesOp
          KwValues "values"
          CaseExpr
            KwCase "case"
            WhenClause
              KwWhen "when"
              NameRef
                Ident "x"
              KwThen "then"
              Literal
                IntLit "1"
    "#);
}

#[test]
fn missing_branch_after_fork() {
    let query = Query::new("fork | head 1");
    assert!(
        query
            .diagnostics()
            .iter()
            .any(|d| d.kind() == DiagnosticKind::ExpectedBranch)
    );

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        ForkOp
          KwFork "fork"
          Error
        Pipe "|"
        HeadOp
          KwHead "head"
          Literal
            IntLit "1"
    "#);
}

#[test]
fn unclosed_scope_at_eof() {
    let query = Query::new("fork ( where x");
    assert!(query.diagnostics().has_errors());

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        ForkOp
          KwFork "fork"
          ScopeBody
            ParenOpen "("
            Pipeline
              WhereOp
                KwWhere "where"
                NameRef
                  Ident "x"
    "#);
}
