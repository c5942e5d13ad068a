// crates/vaglio/src/tests/test_substitute.rs

use pretty_assertions::assert_eq;
use vaglio_expr::{Value, VarEnv};

use crate::assemble::Splice;
use crate::substitute::substitute;

fn env_with(pairs: &[(&str, Value)]) -> VarEnv {
    let mut env = VarEnv::new();
    for (name, value) in pairs {
        env.set(name, value.clone());
    }
    env
}

#[test]
fn test_no_known_names_no_splices() {
    let env = env_with(&[("__FOO", Value::Bool(true))]);
    let (out, splices) = substitute("let bar = baz;", &env);
    assert_eq!(out, "let bar = baz;");
    assert!(splices.is_empty());
}

#[test]
fn test_simple_replacement() {
    let env = env_with(&[("__FOO", Value::Bool(true))]);
    let (out, splices) = substitute("if (__FOO) {", &env);
    assert_eq!(out, "if (true) {");
    assert_eq!(
        splices,
        vec![Splice {
            column: 4,
            removed: 5,
            inserted: 4,
        }]
    );
}

#[test]
fn test_token_boundaries_respected() {
    let env = env_with(&[("__V", Value::Number(1.0))]);
    // `__V2` and `x__V` are different identifiers and must not change.
    let (out, splices) = substitute("__V + __V2 + x__V", &env);
    assert_eq!(out, "1 + __V2 + x__V");
    assert_eq!(splices.len(), 1);
}

#[test]
fn test_multiple_occurrences_on_one_line() {
    let env = env_with(&[("__N", Value::Number(3.0))]);
    let (out, splices) = substitute("__N * __N", &env);
    assert_eq!(out, "3 * 3");
    assert_eq!(splices.len(), 2);
    assert_eq!(splices[1].column, 6);
}

#[test]
fn test_string_value_rendered_quoted() {
    let env = env_with(&[("__NAME", Value::Str("vaglio".into()))]);
    let (out, _) = substitute("const name = __NAME;", &env);
    assert_eq!(out, "const name = \"vaglio\";");
}

#[test]
fn test_special_numeric_renderings() {
    let env = env_with(&[
        ("__NAN", Value::Number(f64::NAN)),
        ("__INFINITY", Value::Number(f64::INFINITY)),
        ("__NULL", Value::Null),
        ("__UNDEF", Value::Undefined),
    ]);
    let (out, _) = substitute("[__NAN, __INFINITY, __NULL, __UNDEF]", &env);
    assert_eq!(out, "[NaN, Infinity, null, undefined]");
}

#[test]
fn test_never_introduces_line_breaks() {
    let env = env_with(&[("__S", Value::Str("a\nb".into()))]);
    let (out, _) = substitute("x = __S;", &env);
    // The newline is escaped inside the rendered literal.
    assert_eq!(out, "x = \"a\\nb\";");
    assert!(!out.contains('\n'));
}
