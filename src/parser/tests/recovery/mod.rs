mod incomplete_tests;
mod unexpected_tests;
