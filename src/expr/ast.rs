//! Syntax tree for parsed formulas.
//!
//! - [`Expr`]   : expression nodes over the single free variable `x`
//! - [`Op`]     : binary operators with precedence and associativity
//! - [`MathFn`] : the function allowlist, with declared-domain checks

use super::errors::ExprError;

/// A node in a parsed formula.
///
/// Constants (`pi`, `e`, `tau`) and unary plus are folded away at parse
/// time, so the tree contains only the shapes below.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal number.
    Number(f64),
    /// The free variable `x`.
    Var,
    /// Unary negation.
    Neg(Box<Expr>),
    /// Binary operation `lhs op rhs`.
    BinOp {
        op: Op,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Allowlisted function applied to one argument.
    Call { func: MathFn, arg: Box<Expr> },
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    /// Binding power for precedence climbing. Higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
            Op::Pow           => 3,
        }
    }

    /// `^` is right-associative: `2^3^2` is `2^(3^2)`.
    pub const fn is_right_assoc(self) -> bool {
        matches!(self, Op::Pow)
    }
}

/// The fixed allowlist of single-argument math functions.
///
/// Resolved by name at parse time, so an unlisted name never survives into
/// evaluation. [`MathFn::apply`] rejects arguments outside the real domain
/// of the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Exp,
    Ln,
    Log10,
    Abs,
    Floor,
    Ceil,
}

impl MathFn {
    pub fn resolve(name: &str) -> Option<MathFn> {
        let func = match name {
            "sin"   => MathFn::Sin,
            "cos"   => MathFn::Cos,
            "tan"   => MathFn::Tan,
            "asin"  => MathFn::Asin,
            "acos"  => MathFn::Acos,
            "atan"  => MathFn::Atan,
            "sinh"  => MathFn::Sinh,
            "cosh"  => MathFn::Cosh,
            "tanh"  => MathFn::Tanh,
            "sqrt"  => MathFn::Sqrt,
            "exp"   => MathFn::Exp,
            "ln"    => MathFn::Ln,
            "log10" => MathFn::Log10,
            "abs"   => MathFn::Abs,
            "floor" => MathFn::Floor,
            "ceil"  => MathFn::Ceil,
            _ => return None,
        };
        Some(func)
    }

    pub const fn name(self) -> &'static str {
        match self {
            MathFn::Sin   => "sin",
            MathFn::Cos   => "cos",
            MathFn::Tan   => "tan",
            MathFn::Asin  => "asin",
            MathFn::Acos  => "acos",
            MathFn::Atan  => "atan",
            MathFn::Sinh  => "sinh",
            MathFn::Cosh  => "cosh",
            MathFn::Tanh  => "tanh",
            MathFn::Sqrt  => "sqrt",
            MathFn::Exp   => "exp",
            MathFn::Ln    => "ln",
            MathFn::Log10 => "log10",
            MathFn::Abs   => "abs",
            MathFn::Floor => "floor",
            MathFn::Ceil  => "ceil",
        }
    }

    /// Applies the function, rejecting arguments outside its real domain.
    ///
    /// # Errors
    /// - [`ExprError::Domain`] for `sqrt` of a negative, `ln`/`log10` of a
    ///   non-positive, or `asin`/`acos` outside `[-1, 1]`.
    pub fn apply(self, arg: f64) -> Result<f64, ExprError> {
        let out_of_domain = match self {
            MathFn::Sqrt                 => arg < 0.0,
            MathFn::Ln | MathFn::Log10   => arg <= 0.0,
            MathFn::Asin | MathFn::Acos  => !(-1.0..=1.0).contains(&arg),
            _ => false,
        };
        if out_of_domain {
            return Err(ExprError::Domain { function: self.name(), arg });
        }

        let value = match self {
            MathFn::Sin   => arg.sin(),
            MathFn::Cos   => arg.cos(),
            MathFn::Tan   => arg.tan(),
            MathFn::Asin  => arg.asin(),
            MathFn::Acos  => arg.acos(),
            MathFn::Atan  => arg.atan(),
            MathFn::Sinh  => arg.sinh(),
            MathFn::Cosh  => arg.cosh(),
            MathFn::Tanh  => arg.tanh(),
            MathFn::Sqrt  => arg.sqrt(),
            MathFn::Exp   => arg.exp(),
            MathFn::Ln    => arg.ln(),
            MathFn::Log10 => arg.log10(),
            MathFn::Abs   => arg.abs(),
            MathFn::Floor => arg.floor(),
            MathFn::Ceil  => arg.ceil(),
        };
        Ok(value)
    }
}
