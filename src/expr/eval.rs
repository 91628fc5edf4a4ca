//! [`Formula`]: a parsed expression bound to the free variable `x`.
//!
//! The parsed tree is immutable; evaluation takes `&self` and shares no
//! state, so a `Formula` may be evaluated from any number of runs (or
//! threads) without synchronization.

use super::ast::{Expr, Op};
use super::errors::ExprError;
use super::parser::Parser;
use super::token::Tokenizer;

/// A compiled formula over the single free variable `x`.
///
/// # Examples
/// ```
/// use numerix::expr::Formula;
///
/// let f = Formula::parse("x^2 - 2")?;
/// assert_eq!(f.eval(2.0)?, 2.0);
/// # Ok::<(), numerix::expr::ExprError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    source: String,
    ast: Expr,
}

impl Formula {
    /// Tokenizes and parses `source`.
    ///
    /// # Errors
    /// Any tokenize- or parse-stage [`ExprError`], including unknown
    /// functions and variables (the allowlist is closed at parse time).
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        let tokens = Tokenizer::new(source).tokenize()?;
        let ast = Parser::new(tokens).parse()?;
        Ok(Self { source: source.to_owned(), ast })
    }

    /// Evaluates the formula at `x`.
    ///
    /// The result is guaranteed finite: overflow and indeterminate forms
    /// (e.g. `exp(1000)`, `0^-1`) surface as [`ExprError::NonFinite`]
    /// rather than leaking NaN or infinity to the caller.
    ///
    /// # Errors
    /// - [`ExprError::DivisionByZero`] on an exactly-zero divisor
    /// - [`ExprError::Domain`] from an allowlisted function (see
    ///   [`super::ast::MathFn::apply`])
    /// - [`ExprError::NonFinite`] if the value is NaN or infinite
    pub fn eval(&self, x: f64) -> Result<f64, ExprError> {
        let value = self.ast.eval(x)?;
        if !value.is_finite() {
            return Err(ExprError::NonFinite { x });
        }
        Ok(value)
    }

    /// The original formula text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Expr {
    /// Tree-walking evaluation with `x` bound.
    pub(crate) fn eval(&self, x: f64) -> Result<f64, ExprError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Var => Ok(x),
            Expr::Neg(inner) => Ok(-inner.eval(x)?),
            Expr::BinOp { op, lhs, rhs } => {
                let l = lhs.eval(x)?;
                let r = rhs.eval(x)?;
                match op {
                    Op::Add => Ok(l + r),
                    Op::Sub => Ok(l - r),
                    Op::Mul => Ok(l * r),
                    Op::Div => {
                        if r == 0.0 {
                            return Err(ExprError::DivisionByZero { x });
                        }
                        Ok(l / r)
                    }
                    // fractional powers of a negative base give NaN,
                    // caught by the finite check in Formula::eval
                    Op::Pow => Ok(l.powf(r)),
                }
            }
            Expr::Call { func, arg } => func.apply(arg.eval(x)?),
        }
    }
}
