// crates/vaglio-expr/src/tests/mod.rs

mod test_lexer;
mod test_parser;
