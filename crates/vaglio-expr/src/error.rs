// crates/vaglio-expr/src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExprError {
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("runtime error: {message}")]
    Runtime { message: String },
}

pub type ExprResult<T> = Result<T, ExprError>;

impl ExprError {
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        ExprError::Syntax {
            offset,
            message: message.into(),
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        ExprError::Runtime {
            message: message.into(),
        }
    }
}
