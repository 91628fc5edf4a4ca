//! String-level entry points for the presentation surface.
//!
//! Each `solve_*` function takes the formula text and the documented
//! numeric parameters, parses the formula, and delegates to the matching
//! core algorithm. A formula that fails to parse ends the run immediately
//! with [`RootFindingError::InvalidFormula`] and an empty trace, so the
//! caller sees the same failure shape as any mid-run evaluation error.

use super::bisection::{bisection, BisectionCfg, BisectionError};
use super::errors::RootFindingError;
use super::fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
use super::newton::{newton, NewtonCfg, NewtonError};
use super::regula_falsi::{regula_falsi, RegulaFalsiCfg, RegulaFalsiError};
use super::report::{
    BisectionRecord, FixedPointRecord, NewtonRecord, RegulaFalsiRecord, RunFailure, RunResult,
    SecantRecord, Trace,
};
use super::secant::{secant, SecantCfg, SecantError};
use crate::expr::Formula;

fn parse_formula<E, R>(source: &str) -> Result<Formula, RunFailure<E, R>>
where
    E: From<RootFindingError>,
{
    Formula::parse(source).map_err(|source| {
        RunFailure::new(RootFindingError::InvalidFormula { source }, Trace::new())
    })
}

/// Bisection over `f(x)` given as formula text.
pub fn solve_bisection(
    fx: &str,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> RunResult<BisectionRecord, BisectionError> {
    let f = parse_formula(fx)?;
    bisection(|x| f.eval(x), a, b, cfg)
}

/// Fixed-point iteration over the map `g(x)` given as formula text.
///
/// Note that `gx` is the iteration map, not the root equation.
pub fn solve_fixed_point(
    gx: &str,
    x0: f64,
    cfg: FixedPointCfg,
) -> RunResult<FixedPointRecord, FixedPointError> {
    let g = parse_formula(gx)?;
    fixed_point(|x| g.eval(x), x0, cfg)
}

/// Secant method over `f(x)` given as formula text.
pub fn solve_secant(
    fx: &str,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> RunResult<SecantRecord, SecantError> {
    let f = parse_formula(fx)?;
    secant(|x| f.eval(x), x0, x1, cfg)
}

/// Newton-Raphson over `f(x)` given as formula text.
pub fn solve_newton(fx: &str, x0: f64, cfg: NewtonCfg) -> RunResult<NewtonRecord, NewtonError> {
    let f = parse_formula(fx)?;
    newton(|x| f.eval(x), x0, cfg)
}

/// Regula falsi over `f(x)` given as formula text.
pub fn solve_regula_falsi(
    fx: &str,
    a: f64,
    b: f64,
    cfg: RegulaFalsiCfg,
) -> RunResult<RegulaFalsiRecord, RegulaFalsiError> {
    let f = parse_formula(fx)?;
    regula_falsi(|x| f.eval(x), a, b, cfg)
}
