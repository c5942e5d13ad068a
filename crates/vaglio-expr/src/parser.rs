// crates/vaglio-expr/src/parser.rs

use crate::error::{ExprError, ExprResult};
use crate::lexer::{Lexer, SpannedToken, Token};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    StrictEq,
    StrictNe,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Ident(String),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    // `&&` and `||` are their own nodes: they short-circuit and yield the
    // deciding operand's value, not a boolean.
    And {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Or {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Ternary {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Member {
        object: Box<Expr>,
        property: String,
    },
}

/// Parses one expression; trailing tokens are a syntax error.
pub fn parse(input: &str) -> ExprResult<Expr> {
    let tokens = Lexer::new(input).tokenize()?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: input.len(),
    };
    let expr = parser.ternary()?;
    if let Some(t) = parser.tokens.get(parser.pos) {
        return Err(ExprError::syntax(t.offset, "unexpected trailing tokens"));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.tok)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |t| t.offset)
    }

    fn bump(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t.map(|t| t.tok)
    }

    fn eat_op(&mut self, op: &str) -> bool {
        if matches!(self.peek(), Some(Token::Op(o)) if *o == op) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn ternary(&mut self) -> ExprResult<Expr> {
        let cond = self.logical_or()?;
        if !matches!(self.peek(), Some(Token::Question)) {
            return Ok(cond);
        }
        self.pos += 1;
        let then_branch = self.ternary()?;
        if !matches!(self.peek(), Some(Token::Colon)) {
            return Err(ExprError::syntax(self.offset(), "expected `:` in ternary"));
        }
        self.pos += 1;
        let else_branch = self.ternary()?;
        Ok(Expr::Ternary {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    fn logical_or(&mut self) -> ExprResult<Expr> {
        let mut lhs = self.logical_and()?;
        while self.eat_op("||") {
            let rhs = self.logical_and()?;
            lhs = Expr::Or {
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn logical_and(&mut self) -> ExprResult<Expr> {
        let mut lhs = self.equality()?;
        while self.eat_op("&&") {
            let rhs = self.equality()?;
            lhs = Expr::And {
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn equality(&mut self) -> ExprResult<Expr> {
        let mut lhs = self.relational()?;
        loop {
            let op = match self.peek() {
                Some(Token::Op("===")) => BinaryOp::StrictEq,
                Some(Token::Op("!==")) => BinaryOp::StrictNe,
                Some(Token::Op("==")) => BinaryOp::Eq,
                Some(Token::Op("!=")) => BinaryOp::Ne,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.relational()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn relational(&mut self) -> ExprResult<Expr> {
        let mut lhs = self.additive()?;
        loop {
            let op = match self.peek() {
                Some(Token::Op("<=")) => BinaryOp::Le,
                Some(Token::Op(">=")) => BinaryOp::Ge,
                Some(Token::Op("<")) => BinaryOp::Lt,
                Some(Token::Op(">")) => BinaryOp::Gt,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.additive()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn additive(&mut self) -> ExprResult<Expr> {
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Op("+")) => BinaryOp::Add,
                Some(Token::Op("-")) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.multiplicative()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn multiplicative(&mut self) -> ExprResult<Expr> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Op("*")) => BinaryOp::Mul,
                Some(Token::Op("/")) => BinaryOp::Div,
                Some(Token::Op("%")) => BinaryOp::Rem,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> ExprResult<Expr> {
        let op = match self.peek() {
            Some(Token::Op("!")) => Some(UnaryOp::Not),
            Some(Token::Op("-")) => Some(UnaryOp::Neg),
            Some(Token::Op("+")) => Some(UnaryOp::Plus),
            _ => None,
        };
        if let Some(op) = op {
            self.pos += 1;
            let expr = self.unary()?;
            return Ok(Expr::Unary {
                op,
                expr: Box::new(expr),
            });
        }
        self.postfix()
    }

    fn postfix(&mut self) -> ExprResult<Expr> {
        let mut expr = self.primary()?;
        while matches!(self.peek(), Some(Token::Dot)) {
            self.pos += 1;
            match self.bump() {
                Some(Token::Ident(property)) => {
                    expr = Expr::Member {
                        object: Box::new(expr),
                        property,
                    };
                }
                _ => {
                    return Err(ExprError::syntax(
                        self.offset(),
                        "expected property name after `.`",
                    ));
                }
            }
        }
        Ok(expr)
    }

    fn primary(&mut self) -> ExprResult<Expr> {
        let offset = self.offset();
        match self.bump() {
            Some(Token::Number(n)) => Ok(Expr::Literal(Value::Number(n))),
            Some(Token::Str(s)) => Ok(Expr::Literal(Value::Str(s))),
            Some(Token::Ident(name)) => Ok(match name.as_str() {
                "true" => Expr::Literal(Value::Bool(true)),
                "false" => Expr::Literal(Value::Bool(false)),
                "null" => Expr::Literal(Value::Null),
                "undefined" => Expr::Literal(Value::Undefined),
                "NaN" => Expr::Literal(Value::Number(f64::NAN)),
                "Infinity" => Expr::Literal(Value::Number(f64::INFINITY)),
                _ => Expr::Ident(name),
            }),
            Some(Token::LParen) => {
                let expr = self.ternary()?;
                if !matches!(self.peek(), Some(Token::RParen)) {
                    return Err(ExprError::syntax(self.offset(), "expected `)`"));
                }
                self.pos += 1;
                Ok(expr)
            }
            Some(_) => Err(ExprError::syntax(offset, "expected an operand")),
            None => Err(ExprError::syntax(offset, "unexpected end of expression")),
        }
    }
}
