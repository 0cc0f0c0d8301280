mod declarations_tests;
mod expressions_tests;
mod operators_tests;
mod sql_tests;
mod trivia_tests;
