// crates/vaglio-expr/src/tests/test_parser.rs

use crate::parser::{BinaryOp, Expr, parse};
use crate::value::Value;

#[test]
fn test_parse_literal_keywords() {
    assert_eq!(parse("true").unwrap(), Expr::Literal(Value::Bool(true)));
    assert_eq!(parse("null").unwrap(), Expr::Literal(Value::Null));
    assert_eq!(parse("undefined").unwrap(), Expr::Literal(Value::Undefined));
}

#[test]
fn test_parse_precedence() {
    // 1 + 2 * 3 parses as 1 + (2 * 3)
    let expr = parse("1 + 2 * 3").unwrap();
    match expr {
        Expr::Binary {
            op: BinaryOp::Add,
            rhs,
            ..
        } => match *rhs {
            Expr::Binary {
                op: BinaryOp::Mul, ..
            } => {}
            other => panic!("expected multiplication on the right, got {other:?}"),
        },
        other => panic!("expected addition at the top, got {other:?}"),
    }
}

#[test]
fn test_parse_ternary_nests_right() {
    let expr = parse("a ? b : c ? d : e").unwrap();
    match expr {
        Expr::Ternary { else_branch, .. } => {
            assert!(matches!(*else_branch, Expr::Ternary { .. }));
        }
        other => panic!("expected ternary, got {other:?}"),
    }
}

#[test]
fn test_parse_member_chain() {
    let expr = parse("__FOO.length").unwrap();
    match expr {
        Expr::Member { object, property } => {
            assert_eq!(*object, Expr::Ident("__FOO".into()));
            assert_eq!(property, "length");
        }
        other => panic!("expected member access, got {other:?}"),
    }
}

#[test]
fn test_parse_empty_is_error() {
    assert!(parse("").is_err());
    assert!(parse("   ").is_err());
}

#[test]
fn test_parse_trailing_tokens_are_error() {
    assert!(parse("1 2").is_err());
    assert!(parse("a b").is_err());
}

#[test]
fn test_parse_unbalanced_paren_is_error() {
    assert!(parse("(1 + 2").is_err());
    assert!(parse("a ? b").is_err());
}
