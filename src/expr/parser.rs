//! Parser: token stream -> [`Expr`].
//!
//! Precedence climbing over the token stream, one `parse_expr(min_bp)` loop
//! instead of a grammar rule per precedence level.
//!
//! Grammar (informal):
//! - expr   : prefix (OP prefix)*   with precedence/associativity from [`Op`]
//! - prefix : ('-' | '+') prefix | atom
//! - atom   : NUMBER | 'x' | CONSTANT | FUNC '(' expr ')' | '(' expr ')'
//!
//! Identifiers resolve at parse time: `x` to the free variable, `pi`/`e`/
//! `tau` to literals, anything followed by `(` against the [`MathFn`]
//! allowlist. Unknown names fail here, never at evaluation.

use super::ast::{Expr, MathFn, Op};
use super::errors::ExprError;
use super::token::Token;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a complete expression, rejecting trailing input.
    pub fn parse(mut self) -> Result<Expr, ExprError> {
        let expr = self.parse_expr(0)?;
        match self.peek() {
            Token::Eof => Ok(expr),
            tok => Err(ExprError::TrailingInput { found: tok.to_string() }),
        }
    }

    /// `min_bp` is the minimum binding power required to keep consuming
    /// infix operators.
    fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let op = match self.peek() {
                Token::Plus  => Op::Add,
                Token::Minus => Op::Sub,
                Token::Star  => Op::Mul,
                Token::Slash => Op::Div,
                Token::Caret => Op::Pow,
                _ => break,
            };

            let prec = op.precedence();
            if prec < min_bp {
                break;
            }
            self.advance();

            // right-associative operators re-enter at the same power
            let next_bp = if op.is_right_assoc() { prec } else { prec + 1 };
            let rhs = self.parse_expr(next_bp)?;

            lhs = Expr::BinOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    /// Unary sign or atom. The operand of a unary sign is parsed at `^`'s
    /// binding power, so `-x^2` reads as `-(x^2)` while `-x * y` negates
    /// only `x`.
    fn parse_prefix(&mut self) -> Result<Expr, ExprError> {
        match self.peek() {
            Token::Minus => {
                self.advance();
                let operand = self.parse_expr(Op::Pow.precedence())?;
                Ok(Expr::Neg(Box::new(operand)))
            }
            Token::Plus => {
                // unary plus folds away
                self.advance();
                self.parse_expr(Op::Pow.precedence())
            }
            _ => self.parse_atom(),
        }
    }

    fn parse_atom(&mut self) -> Result<Expr, ExprError> {
        match self.peek().clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Expr::Number(n))
            }
            Token::Ident(name) => {
                self.advance();
                if *self.peek() == Token::LParen {
                    let func = MathFn::resolve(&name)
                        .ok_or(ExprError::UnknownFunction { name })?;
                    self.advance();
                    let arg = self.parse_expr(0)?;
                    self.expect_rparen()?;
                    Ok(Expr::Call { func, arg: Box::new(arg) })
                } else if name == "x" {
                    Ok(Expr::Var)
                } else {
                    match constant(&name) {
                        Some(value) => Ok(Expr::Number(value)),
                        None        => Err(ExprError::UnknownVariable { name }),
                    }
                }
            }
            Token::LParen => {
                self.advance();
                let expr = self.parse_expr(0)?;
                self.expect_rparen()?;
                Ok(expr)
            }
            Token::Eof => Err(ExprError::UnexpectedEnd),
            tok => Err(ExprError::UnexpectedToken { found: tok.to_string() }),
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expect_rparen(&mut self) -> Result<(), ExprError> {
        match self.peek() {
            Token::RParen => {
                self.advance();
                Ok(())
            }
            Token::Eof => Err(ExprError::UnexpectedEnd),
            tok => Err(ExprError::UnexpectedToken { found: tok.to_string() }),
        }
    }
}

/// Named constants, folded to literals at parse time.
fn constant(name: &str) -> Option<f64> {
    match name {
        "pi"  => Some(std::f64::consts::PI),
        "e"   => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}
