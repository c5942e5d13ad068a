// crates/vaglio-expr/src/tests/test_lexer.rs

use crate::lexer::{Lexer, Token};

fn toks(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.tok)
        .collect()
}

#[test]
fn test_lex_numbers() {
    assert_eq!(toks("42"), vec![Token::Number(42.0)]);
    assert_eq!(toks("1.5"), vec![Token::Number(1.5)]);
    assert_eq!(toks("2e3"), vec![Token::Number(2000.0)]);
    assert_eq!(toks("0x10"), vec![Token::Number(16.0)]);
}

#[test]
fn test_lex_strings_with_escapes() {
    assert_eq!(toks(r#""hi""#), vec![Token::Str("hi".into())]);
    assert_eq!(toks(r#"'a\'b'"#), vec![Token::Str("a'b".into())]);
    assert_eq!(toks(r#""line\n""#), vec![Token::Str("line\n".into())]);
}

#[test]
fn test_lex_operators() {
    assert_eq!(
        toks("a === b != c"),
        vec![
            Token::Ident("a".into()),
            Token::Op("==="),
            Token::Ident("b".into()),
            Token::Op("!="),
            Token::Ident("c".into()),
        ]
    );
    assert_eq!(
        toks("!x && y || z"),
        vec![
            Token::Op("!"),
            Token::Ident("x".into()),
            Token::Op("&&"),
            Token::Ident("y".into()),
            Token::Op("||"),
            Token::Ident("z".into()),
        ]
    );
}

#[test]
fn test_lex_member_access_after_integer() {
    // `1.length` is member access, not a fractional literal
    assert_eq!(
        toks("1.length"),
        vec![
            Token::Number(1.0),
            Token::Dot,
            Token::Ident("length".into()),
        ]
    );
}

#[test]
fn test_lex_rejects_single_ampersand() {
    assert!(Lexer::new("a & b").tokenize().is_err());
}

#[test]
fn test_lex_rejects_assignment() {
    assert!(Lexer::new("a = 1").tokenize().is_err());
}

#[test]
fn test_lex_rejects_unterminated_string() {
    assert!(Lexer::new("'oops").tokenize().is_err());
}
