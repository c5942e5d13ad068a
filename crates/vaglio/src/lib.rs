// crates/vaglio/src/lib.rs
//
// vaglio: a directive-driven conditional-compilation preprocessor. Directives
// hidden in host-language comments (`//#if`, `//#set`, ...) keep or strip
// spans of code, compile-time variables are substituted into active lines,
// and the output always has one line per input line so downstream source
// maps stay valid.

pub mod assemble;
pub mod blocks;
pub mod error;
pub mod options;
pub mod processor;
pub mod scanner;
pub mod substitute;

pub use assemble::{LineMap, SourceMap, Splice, Transform};
pub use error::{PrepError, PrepResult};
pub use options::{CommentMarker, CommentPolicy, CommentSelector, CommentSyntax, Options};
pub use processor::Preprocessor;
pub use scanner::{Directive, Line};
pub use vaglio_expr::{Value, VarEnv};

#[cfg(test)]
mod tests; // holds multiple small test files
