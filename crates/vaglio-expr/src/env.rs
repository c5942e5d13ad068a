// crates/vaglio-expr/src/env.rs

use std::collections::HashMap;

use crate::value::Value;

static UNDEFINED: Value = Value::Undefined;

/// Compile-time variable names are convention-marked: `__` followed by an
/// identifier, e.g. `__DEBUG` or `__FILE`.
pub fn is_valid_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("__") else {
        return false;
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The mapping of compile-time variable names to values. Owned by one
/// preprocessor instance and mutated in place by `#set`/`#unset`; it is
/// never implicitly reset between files.
#[derive(Debug, Default, Clone)]
pub struct VarEnv {
    vars: HashMap<String, Value>,
}

impl VarEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookups of an undefined name yield the `undefined` value rather than
    /// failing, matching the host language's lookup semantics.
    pub fn get(&self, name: &str) -> &Value {
        self.vars.get(name).unwrap_or(&UNDEFINED)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.vars.insert(name.to_string(), value);
    }

    pub fn unset(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    pub fn has(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
