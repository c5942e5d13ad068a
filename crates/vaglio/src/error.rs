// crates/vaglio/src/error.rs

use thiserror::Error;
use vaglio_expr::ExprError;

/// Everything that can go wrong while transforming one file. Every variant
/// except `Config` is attributed to a file and a 1-based line.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("{file}:{line}: bad directive: {message}")]
    DirectiveSyntax {
        file: String,
        line: usize,
        message: String,
    },

    #[error("{file}:{line}: `#{directive}` without an open `#if`")]
    UnbalancedBlock {
        file: String,
        line: usize,
        directive: String,
    },

    #[error("{file}:{line}: conditional block opened here is never closed")]
    UnclosedBlock { file: String, line: usize },

    #[error("{file}:{line}: {source}")]
    ExprSyntax {
        file: String,
        line: usize,
        source: ExprError,
    },

    #[error("{file}:{line}: {source}")]
    ExprRuntime {
        file: String,
        line: usize,
        source: ExprError,
    },

    #[error("{file}:{line}: {message}")]
    User {
        file: String,
        line: usize,
        message: String,
    },

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

pub type PrepResult<T> = Result<T, PrepError>;

impl PrepError {
    pub(crate) fn directive(file: &str, line: usize, message: impl Into<String>) -> Self {
        PrepError::DirectiveSyntax {
            file: file.to_string(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        PrepError::Config {
            message: message.into(),
        }
    }

    /// Splits the expression error taxonomy into the two preprocessor kinds.
    pub(crate) fn from_expr(err: ExprError, file: &str, line: usize) -> Self {
        match err {
            e @ ExprError::Syntax { .. } => PrepError::ExprSyntax {
                file: file.to_string(),
                line,
                source: e,
            },
            e @ ExprError::Runtime { .. } => PrepError::ExprRuntime {
                file: file.to_string(),
                line,
                source: e,
            },
        }
    }
}
