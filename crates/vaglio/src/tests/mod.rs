// crates/vaglio/src/tests/mod.rs

mod test_scanner;
mod test_substitute;

use crate::{Options, Preprocessor};

/// Runs one source through a fresh default-configured instance.
pub fn transform_defaults(source: &str) -> crate::PrepResult<crate::Transform> {
    let mut prep = Preprocessor::new(Options::default()).unwrap();
    prep.transform(source, "test.js")
}

/// The non-blank output lines, which is what most block tests care about.
pub fn visible_lines(code: &str) -> Vec<&str> {
    code.lines().filter(|l| !l.trim().is_empty()).collect()
}
