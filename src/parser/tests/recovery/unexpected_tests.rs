//! Garbage-token recovery: offending runs land in error nodes and parsing
//! resumes at the next safe boundary.

use crate::{DiagnosticKind, Query};

#[test]
fn garbage_before_stage() {
    let query = Query::new("^^^ values 1");
    assert!(query.diagnostics().has_errors());

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        Error
          Garbage "^^^"
        ValuesOp
          KwValues "values"
          Literal
            IntLit "1"
    "#);
}

#[test]
fn garbage_between_record_fields() {
    let query = Query::new("values {a: 1 @ b: 2}");
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
            Error
              At "@"
            RecordField
              Ident "b"
              Colon ":"
              Literal
                IntLit "2"
            BraceClose "}"
    "#);
}

#[test]
fn stray_closer_is_skipped() {
    let query = Query::new("values 1 ) | head 1");
    assert!(query.diagnostics().has_errors());

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        ExprOp
          Literal
            IntLit "1"
        Error
          ParenClose ")"
        Pipe "|"
        HeadOp
          KwHead "head"
          Literal
            IntLit "1"
    "#);
}

#[test]
fn errors_do_not_cascade_across_stages() {
    let query = Query::new("where | select from t | head 1");
    assert_eq!(query.diagnostics().error_count(), 2);

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        WhereOp
          KwWhere "where"
          Error
        Pipe "|"
        SqlOp
          SelectClause
            KwSelect "select"
            Error
          FromClause
            KwFrom "from"
            FromItem
              NameRef
                Ident "t"
        Pipe "|"
        HeadOp
          KwHead "head"
          Literal
            IntLit "1"
    "#);
}

#[test]
fn expression_stage_with_trailing_junk() {
    let query = Query::new("x y | pass");
    assert!(query.diagnostics().has_errors());

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        ExprOp
          NameRef
            Ident "x"
        Error
          Ident "y"
        Pipe "|"
        PassOp
          KwPass "pass"
    "#);
}

#[test]
fn empty_stage_between_pipes() {
    let query = Query::new("pass | | pass");
    assert!(
        query
            .diagnostics()
            .iter()
            .any(|d| d.kind() == DiagnosticKind::ExpectedStage)
    );

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        PassOp
          KwPass "pass"
        Pipe "|"
        Error
        Pipe "|"
        PassOp
          KwPass "pass"
    "#);
}

#[test]
fn missing_pipe_between_stages() {
    let query = Query::new("head 1 head 2");
    assert!(query.diagnostics().has_errors());

    insta::assert_snapshot!(query.dump_cst(), @r#"
    File
      Pipeline
        HeadOp
          KwHead "head"
          Literal
            IntLit "1"
        HeadOp
          KwHead "head"
          Literal
            IntLit "2"
    "#);
}
