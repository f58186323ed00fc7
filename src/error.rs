// ABOUTME: Error types for evaluation and parsing failures

use crate::value::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EvalError {
    #[error("{function}: expected {expected}, got {actual} at argument {position}")]
    TypeMismatch {
        function: String,
        expected: String,
        actual: String,
        position: usize,
    },

    #[error("{function}: expected {expected} argument(s), got {actual}")]
    ArityError {
        function: String,
        expected: String,
        actual: usize,
    },

    #[error("Undefined name: {0}")]
    UnboundName(String),

    #[error("{0} is already defined and cannot be redefined")]
    Redefinition(String),

    #[error("{0}: empty list")]
    EmptyList(String),

    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    pub fn type_error(function: &str, expected: &str, actual: &Value, position: usize) -> Self {
        EvalError::TypeMismatch {
            function: function.to_string(),
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
            position,
        }
    }

    pub fn arity_error(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        EvalError::ArityError {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }
}

/// Errors raised while turning source text into a parse tree. Kept separate
/// from `EvalError` because a parse failure never reaches the evaluator.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unclosed '(' starting at byte {0}")]
    UnclosedParen(usize),

    #[error("'{0}' is a reserved name and cannot be used as an identifier")]
    ReservedName(String),

    #[error("malformed definition: {0}")]
    MalformedDefinition(String),

    #[error("could not parse '{0}' as an expression")]
    Syntax(String),
}
