//! Restricted expression-language interpreter.
//!
//! Turns user-entered formula text over a single free variable `x` into a
//! callable numeric function, without any general-purpose code execution.
//!
//! Pipeline:
//! - [`token`]  : formula text -> token stream
//! - [`parser`] : token stream -> [`ast::Expr`] via precedence climbing
//! - [`eval`]   : [`Formula`], the parsed form, evaluated at a given `x`
//!
//! Grammar: `+ - * / ^` (with `^` right-associative), parentheses, decimal
//! and scientific number literals, the constants `pi`, `e`, `tau`, and a
//! fixed allowlist of single-argument math functions (see [`ast::MathFn`]).
//!
//! Every failure mode, from an unexpected character to a domain violation at
//! evaluation time, is an [`ExprError`].

pub mod ast;
pub mod errors;
pub mod eval;
pub mod parser;
pub mod token;

pub use errors::ExprError;
pub use eval::Formula;
