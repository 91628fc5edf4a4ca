//! Expression errors.
//!
//! ┌ tokenize : unexpected character, malformed number
//! ├ parse    : unexpected/trailing token, unknown symbol
//! └ evaluate : division by zero, domain violation, non-finite value

use thiserror::Error;

/// Any failure while tokenizing, parsing, or evaluating a formula.
///
/// One taxonomy covers the whole evaluator contract so callers can treat
/// "the formula could not produce a number" uniformly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number literal `{literal}`")]
    InvalidNumber { literal: String },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("unexpected token `{found}`")]
    UnexpectedToken { found: String },

    #[error("trailing input after expression: `{found}`")]
    TrailingInput { found: String },

    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },

    #[error("unknown variable `{name}`: the only free variable is `x`")]
    UnknownVariable { name: String },

    #[error("division by zero while evaluating at x={x}")]
    DivisionByZero { x: f64 },

    #[error("domain error: {function}({arg}) is undefined over the reals")]
    Domain { function: &'static str, arg: f64 },

    #[error("expression value is not finite at x={x}")]
    NonFinite { x: f64 },
}
