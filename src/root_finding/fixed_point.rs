//! Fixed-point iteration.
//!
//! Iterates `x_new = g(x_prev)` for a user-supplied iteration map `g`,
//! which is a different formula than the root equation `f(x) = 0` itself.
//! Converges only when `g` contracts near the fixed point; a
//! non-contracting map runs to the iteration cap and fails.

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{FixedPointRecord, RunFailure, RunReport, RunResult, Trace};
use crate::expr::ExprError;
use thiserror::Error;

/// Fixed-point iteration has no preconditions of its own; every failure is
/// a common one (evaluation failure or exhaustion).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    Common(#[from] RootFindingError),
}

/// Fixed-point configuration.
///
/// # Defaults
/// - tolerance `1e-6`; `max_iter` resolves to
///   [`Algorithm::default_max_iter`] for [`Algorithm::FixedPoint`] (30).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(FixedPointCfg);

/// Finds a fixed point of the iteration map `g` starting from `x0`.
///
/// # Arguments
/// - `map` : evaluator for `g` (the iteration map, not `f`)
/// - `x0`  : initial guess
/// - `cfg` : [`FixedPointCfg`]
///
/// # Returns
/// [`RunReport`] whose trace holds one [`FixedPointRecord`]
/// `(i, x_new, |x_new - x_prev|)` per step; the root is the first iterate
/// whose step size fell below the tolerance.
///
/// # Errors
/// * Propagated via [`FixedPointError::Common`]
/// - [`RootFindingError::Evaluation`]   : `map` failed at some point
/// - [`RootFindingError::NotConverged`] : step size never fell below the
///   tolerance within `max_iter` iterations
pub fn fixed_point<F>(
    map: F,
    x0: f64,
    cfg: FixedPointCfg,
) -> RunResult<FixedPointRecord, FixedPointError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let mut trace = Trace::new();
    let mut evals = 0;
    match fixed_point_loop(map, x0, cfg, &mut trace, &mut evals) {
        Ok((root, iterations)) => Ok(RunReport {
            root,
            iterations,
            evaluations: evals,
            trace,
        }),
        Err(reason) => Err(RunFailure::new(reason, trace)),
    }
}

fn fixed_point_loop<F>(
    mut map: F,
    x0: f64,
    cfg: FixedPointCfg,
    trace: &mut Trace<FixedPointRecord>,
    evals: &mut usize,
) -> Result<(f64, usize), FixedPointError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let tol = cfg.common.tolerance();
    let max_iter = cfg
        .common
        .max_iter()
        .unwrap_or(Algorithm::FixedPoint.default_max_iter());

    let mut eval = |x: f64| -> Result<f64, FixedPointError> {
        *evals += 1;
        map(x).map_err(|source| RootFindingError::Evaluation { x, source }.into())
    };

    let mut x_prev = x0;
    for i in 1..=max_iter {
        let x_new = eval(x_prev)?;
        let error = (x_new - x_prev).abs();
        trace.push(FixedPointRecord { iteration: i, x: x_new, error });

        if error < tol {
            return Ok((x_new, i));
        }
        x_prev = x_new;
    }

    Err(RootFindingError::NotConverged { iterations: max_iter }.into())
}
