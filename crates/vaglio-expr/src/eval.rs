// crates/vaglio-expr/src/eval.rs

use crate::env::VarEnv;
use crate::error::{ExprError, ExprResult};
use crate::parser::{BinaryOp, Expr, UnaryOp, parse};
use crate::value::Value;

/// Parses and evaluates `input` against `env` in one step.
pub fn evaluate_str(input: &str, env: &VarEnv) -> ExprResult<Value> {
    let expr = parse(input)?;
    evaluate(&expr, env)
}

/// Tree-walking evaluation with the host language's dynamic semantics.
pub fn evaluate(expr: &Expr, env: &VarEnv) -> ExprResult<Value> {
    match expr {
        Expr::Literal(v) => Ok(v.clone()),
        Expr::Ident(name) => Ok(env.get(name).clone()),
        Expr::Unary { op, expr } => {
            let v = evaluate(expr, env)?;
            Ok(match op {
                UnaryOp::Not => Value::Bool(!v.is_truthy()),
                UnaryOp::Neg => Value::Number(-v.to_number()),
                UnaryOp::Plus => Value::Number(v.to_number()),
            })
        }
        Expr::And { lhs, rhs } => {
            let left = evaluate(lhs, env)?;
            if left.is_truthy() {
                evaluate(rhs, env)
            } else {
                Ok(left)
            }
        }
        Expr::Or { lhs, rhs } => {
            let left = evaluate(lhs, env)?;
            if left.is_truthy() {
                Ok(left)
            } else {
                evaluate(rhs, env)
            }
        }
        Expr::Ternary {
            cond,
            then_branch,
            else_branch,
        } => {
            if evaluate(cond, env)?.is_truthy() {
                evaluate(then_branch, env)
            } else {
                evaluate(else_branch, env)
            }
        }
        Expr::Member { object, property } => member(evaluate(object, env)?, property),
        Expr::Binary { op, lhs, rhs } => {
            let left = evaluate(lhs, env)?;
            let right = evaluate(rhs, env)?;
            Ok(binary(*op, &left, &right))
        }
    }
}

fn member(object: Value, property: &str) -> ExprResult<Value> {
    match &object {
        Value::Undefined | Value::Null => Err(ExprError::runtime(format!(
            "cannot read property `{property}` of {}",
            object.type_name()
        ))),
        Value::Str(s) if property == "length" => Ok(Value::Number(s.chars().count() as f64)),
        _ => Ok(Value::Undefined),
    }
}

fn binary(op: BinaryOp, left: &Value, right: &Value) -> Value {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => Value::Number(left.to_number() - right.to_number()),
        BinaryOp::Mul => Value::Number(left.to_number() * right.to_number()),
        BinaryOp::Div => Value::Number(left.to_number() / right.to_number()),
        BinaryOp::Rem => Value::Number(left.to_number() % right.to_number()),
        BinaryOp::Eq => Value::Bool(loose_eq(left, right)),
        BinaryOp::Ne => Value::Bool(!loose_eq(left, right)),
        BinaryOp::StrictEq => Value::Bool(strict_eq(left, right)),
        BinaryOp::StrictNe => Value::Bool(!strict_eq(left, right)),
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
            Value::Bool(compare(op, left, right))
        }
    }
}

/// `+` concatenates as soon as either side is a string.
fn add(left: &Value, right: &Value) -> Value {
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        Value::Str(format!("{}{}", left.to_text(), right.to_text()))
    } else {
        Value::Number(left.to_number() + right.to_number())
    }
}

fn compare(op: BinaryOp, left: &Value, right: &Value) -> bool {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return match op {
            BinaryOp::Lt => a < b,
            BinaryOp::Le => a <= b,
            BinaryOp::Gt => a > b,
            BinaryOp::Ge => a >= b,
            _ => unreachable!("compare called with a non-relational operator"),
        };
    }
    let (a, b) = (left.to_number(), right.to_number());
    // NaN compares false with everything.
    match op {
        BinaryOp::Lt => a < b,
        BinaryOp::Le => a <= b,
        BinaryOp::Gt => a > b,
        BinaryOp::Ge => a >= b,
        _ => unreachable!("compare called with a non-relational operator"),
    }
}

fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        _ => false,
    }
}

/// Loose equality: `null` and `undefined` are mutually equal (and equal to
/// nothing else); mixed scalar types compare after numeric coercion.
fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Bool(_), _)
        | (_, Value::Bool(_))
        | (Value::Number(_), Value::Str(_))
        | (Value::Str(_), Value::Number(_)) => left.to_number() == right.to_number(),
        _ => strict_eq(left, right),
    }
}
