// crates/vaglio-expr/src/lib.rs
//
// The expression side of the vaglio preprocessor: a value model with the
// host scripting language's dynamic semantics, a tokenizer, a
// recursive-descent parser and a tree-walking evaluator, plus the variable
// environment the directives mutate.

mod value;
pub use value::Value;

pub mod env;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;

pub use env::{VarEnv, is_valid_name};
pub use error::{ExprError, ExprResult};
pub use eval::{evaluate, evaluate_str};
pub use lexer::Lexer;
pub use parser::{Expr, parse};

#[cfg(test)]
mod tests; // holds multiple small test files
