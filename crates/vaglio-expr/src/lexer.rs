// crates/vaglio-expr/src/lexer.rs

use crate::error::{ExprError, ExprResult};

/// Returns true if `c` can start an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Returns true if `c` can continue an identifier.
fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Str(String),
    Ident(String),
    Op(&'static str),
    LParen,
    RParen,
    Question,
    Colon,
    Dot,
}

/// A token plus the byte offset where it starts, for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub tok: Token,
    pub offset: usize,
}

/// The expression tokenizer.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `text` if the remaining input starts with it.
    fn eat(&mut self, text: &str) -> bool {
        if self.input[self.pos..].starts_with(text) {
            self.pos += text.len();
            true
        } else {
            false
        }
    }

    pub fn tokenize(mut self) -> ExprResult<Vec<SpannedToken>> {
        let mut out = Vec::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
                continue;
            }
            let offset = self.pos;
            let tok = match c {
                '(' => {
                    self.bump();
                    Token::LParen
                }
                ')' => {
                    self.bump();
                    Token::RParen
                }
                '?' => {
                    self.bump();
                    Token::Question
                }
                ':' => {
                    self.bump();
                    Token::Colon
                }
                '0'..='9' => self.read_number(offset)?,
                '"' | '\'' => self.read_string(c, offset)?,
                '.' => {
                    self.bump();
                    Token::Dot
                }
                c if is_identifier_start(c) => self.read_identifier(),
                '&' => {
                    if self.eat("&&") {
                        Token::Op("&&")
                    } else {
                        return Err(ExprError::syntax(offset, "expected `&&`"));
                    }
                }
                '|' => {
                    if self.eat("||") {
                        Token::Op("||")
                    } else {
                        return Err(ExprError::syntax(offset, "expected `||`"));
                    }
                }
                '=' => {
                    if self.eat("===") {
                        Token::Op("===")
                    } else if self.eat("==") {
                        Token::Op("==")
                    } else {
                        return Err(ExprError::syntax(offset, "assignment is not supported"));
                    }
                }
                '!' => {
                    if self.eat("!==") {
                        Token::Op("!==")
                    } else if self.eat("!=") {
                        Token::Op("!=")
                    } else {
                        self.bump();
                        Token::Op("!")
                    }
                }
                '<' => {
                    if self.eat("<=") {
                        Token::Op("<=")
                    } else {
                        self.bump();
                        Token::Op("<")
                    }
                }
                '>' => {
                    if self.eat(">=") {
                        Token::Op(">=")
                    } else {
                        self.bump();
                        Token::Op(">")
                    }
                }
                '+' => {
                    self.bump();
                    Token::Op("+")
                }
                '-' => {
                    self.bump();
                    Token::Op("-")
                }
                '*' => {
                    self.bump();
                    Token::Op("*")
                }
                '/' => {
                    self.bump();
                    Token::Op("/")
                }
                '%' => {
                    self.bump();
                    Token::Op("%")
                }
                other => {
                    return Err(ExprError::syntax(
                        offset,
                        format!("unexpected character `{other}`"),
                    ));
                }
            };
            out.push(SpannedToken { tok, offset });
        }
        Ok(out)
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_identifier_continue(c) {
                self.bump();
            } else {
                break;
            }
        }
        Token::Ident(self.input[start..self.pos].to_string())
    }

    fn read_number(&mut self, offset: usize) -> ExprResult<Token> {
        let start = self.pos;

        // Hex literals: 0x1F
        if self.eat("0x") || self.eat("0X") {
            let digits_start = self.pos;
            while let Some(c) = self.peek() {
                if c.is_ascii_hexdigit() {
                    self.bump();
                } else {
                    break;
                }
            }
            if self.pos == digits_start {
                return Err(ExprError::syntax(offset, "invalid hex literal"));
            }
            let n = u64::from_str_radix(&self.input[digits_start..self.pos], 16)
                .map_err(|_| ExprError::syntax(offset, "invalid hex literal"))?;
            return Ok(Token::Number(n as f64));
        }

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.bump();
            } else {
                break;
            }
        }
        // Fractional part only when a digit follows the dot, so `1.length`
        // still lexes as member access.
        if self.input[self.pos..].starts_with('.')
            && self.input[self.pos + 1..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
        {
            self.bump();
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    self.bump();
                } else {
                    break;
                }
            }
        }
        if self.peek() == Some('e') || self.peek() == Some('E') {
            let mark = self.pos;
            self.bump();
            if self.peek() == Some('+') || self.peek() == Some('-') {
                self.bump();
            }
            let mut digits = 0;
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    self.bump();
                    digits += 1;
                } else {
                    break;
                }
            }
            if digits == 0 {
                // Not an exponent after all (e.g. `2e` in `2 === x`).
                self.pos = mark;
            }
        }

        let text = &self.input[start..self.pos];
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ExprError::syntax(offset, format!("invalid number literal `{text}`")))
    }

    fn read_string(&mut self, quote: char, offset: usize) -> ExprResult<Token> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(Token::Str(out)),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some('0') => out.push('\0'),
                    Some(other) => out.push(other),
                    None => return Err(ExprError::syntax(offset, "unterminated string")),
                },
                Some(c) => out.push(c),
                None => return Err(ExprError::syntax(offset, "unterminated string")),
            }
        }
    }
}
