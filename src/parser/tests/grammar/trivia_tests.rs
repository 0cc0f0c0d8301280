//! Trivia (whitespace, comments) preservation tests.
//!
//! These use `expect_valid_cst_full` to verify trivia tokens survive in
//! the tree; the default dump filters them.

use crate::Query;

#[test]
fn whitespace_preserved() {
    let res = Query::expect_valid_cst_full("head  10");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        HeadOp
          KwHead "head"
          Whitespace "  "
          Literal
            IntLit "10"
    "#);
}

#[test]
fn leading_comment_preserved() {
    let res = Query::expect_valid_cst_full("-- intro\nfrom t");

    insta::assert_snapshot!(res, @r#"
    File
      LineComment "-- intro"
      Newline "\n"
      Pipeline
        FromOp
          KwFrom "from"
          Whitespace " "
          NameRef
            Ident "t"
    "#);
}

#[test]
fn comment_between_stages() {
    let res = Query::expect_valid_cst_full("from t -- inline\n| head 1");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        FromOp
          KwFrom "from"
          Whitespace " "
          NameRef
            Ident "t"
        Whitespace " "
        LineComment "-- inline"
        Newline "\n"
        Pipe "|"
        Whitespace " "
        HeadOp
          KwHead "head"
          Whitespace " "
          Literal
            IntLit "1"
    "#);
}

#[test]
fn block_comment_preserved() {
    let res = Query::expect_valid_cst_full("/* setup */ pass");

    insta::assert_snapshot!(res, @r#"
    File
      BlockComment "/* setup */"
      Whitespace " "
      Pipeline
        PassOp
          KwPass "pass"
    "#);
}

#[test]
fn whitespace_only_input() {
    let res = Query::expect_valid_cst_full("   ");

    insta::assert_snapshot!(res, @r#"
    File
      Whitespace "   "
    "#);
}

#[test]
fn comment_only_input() {
    let res = Query::expect_valid_cst_full("-- just a comment\n");

    insta::assert_snapshot!(res, @r#"
    File
      LineComment "-- just a comment"
      Newline "\n"
    "#);
}

#[test]
fn trivia_filtered_by_default() {
    let res = Query::expect_valid_cst("-- comment\npass");

    insta::assert_snapshot!(res, @r#"
    File
      Pipeline
        PassOp
          KwPass "pass"
    "#);
}
