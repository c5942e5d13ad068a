// crates/vaglio/src/tests/test_scanner.rs

use crate::options::CommentSyntax;
use crate::scanner::{Directive, Line, classify};

fn scan(line: &str) -> Line<'_> {
    classify(line, &CommentSyntax::script(), "test.js", 1).unwrap()
}

#[test]
fn test_code_lines_pass_through() {
    assert_eq!(scan("let x = 1;"), Line::Code);
    assert_eq!(scan("let url = 'http://x'; // trailing"), Line::Code);
    assert_eq!(scan(""), Line::Code);
}

#[test]
fn test_directive_in_line_comment() {
    assert_eq!(
        scan("//#if __DEBUG"),
        Line::Directive(Directive::If {
            expr: "__DEBUG".into()
        })
    );
}

#[test]
fn test_whitespace_inside_delimiters_is_irrelevant() {
    let bare = scan("//#endif");
    assert_eq!(scan("  //   #endif   "), bare);
    assert_eq!(scan("\t// #endif"), bare);
}

#[test]
fn test_directive_in_block_comment() {
    assert_eq!(
        scan("/* #if __DEBUG */"),
        Line::Directive(Directive::If {
            expr: "__DEBUG".into()
        })
    );
}

#[test]
fn test_open_block_comment_is_code() {
    // The close delimiter is on another line, so this is not a comment line.
    assert_eq!(scan("/* #if __DEBUG"), Line::Code);
}

#[test]
fn test_markup_syntax() {
    let syntax = CommentSyntax::markup();
    let line = classify("<!-- #if __DEBUG -->", &syntax, "page.html", 1).unwrap();
    assert_eq!(
        line,
        Line::Directive(Directive::If {
            expr: "__DEBUG".into()
        })
    );
    // Script comments mean nothing under markup syntax.
    assert_eq!(
        classify("//#if __DEBUG", &syntax, "page.html", 1).unwrap(),
        Line::Code
    );
}

#[test]
fn test_unknown_keyword_is_ordinary_comment() {
    assert_eq!(
        scan("//#pragma once"),
        Line::Comment {
            text: "#pragma once"
        }
    );
    assert_eq!(scan("// plain note"), Line::Comment { text: "plain note" });
}

#[test]
fn test_set_with_and_without_equals() {
    let expected = Line::Directive(Directive::Set {
        name: "__N".into(),
        expr: Some("1 + 2".into()),
    });
    assert_eq!(scan("//#set __N 1 + 2"), expected);
    assert_eq!(scan("//#set __N = 1 + 2"), expected);
}

#[test]
fn test_set_without_expression() {
    assert_eq!(
        scan("//#set __FLAG"),
        Line::Directive(Directive::Set {
            name: "__FLAG".into(),
            expr: None,
        })
    );
}

#[test]
fn test_error_directive_carries_message() {
    assert_eq!(
        scan("//#error unsupported build"),
        Line::Directive(Directive::Error {
            message: "unsupported build".into()
        })
    );
}

#[test]
fn test_ifset_requires_valid_name() {
    assert!(classify("//#ifset DEBUG", &CommentSyntax::script(), "t.js", 1).is_err());
    assert!(classify("//#ifset __A __B", &CommentSyntax::script(), "t.js", 1).is_err());
    assert_eq!(
        scan("//#ifset __A"),
        Line::Directive(Directive::Ifset { name: "__A".into() })
    );
}

#[test]
fn test_if_requires_expression() {
    assert!(classify("//#if", &CommentSyntax::script(), "t.js", 1).is_err());
    assert!(classify("//#elif   ", &CommentSyntax::script(), "t.js", 1).is_err());
}

#[test]
fn test_else_and_endif_take_no_argument() {
    assert!(classify("//#else what", &CommentSyntax::script(), "t.js", 1).is_err());
    assert!(classify("//#endif now", &CommentSyntax::script(), "t.js", 1).is_err());
}
