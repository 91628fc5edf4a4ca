//! Newton-Raphson method with a finite-difference derivative.

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{NewtonRecord, RunFailure, RunReport, RunResult, Trace};
use crate::expr::ExprError;
use thiserror::Error;

/// Forward finite-difference step for the derivative estimate.
const FD_DELTA: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("derivative is zero at x={x}: Newton step undefined")]
    ZeroDerivative { x: f64 },
}

/// Newton-Raphson configuration.
///
/// # Defaults
/// - tolerance `1e-6`; `max_iter` resolves to
///   [`Algorithm::default_max_iter`] for [`Algorithm::Newton`] (100).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(NewtonCfg);

/// Finds a root of a function using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method),
/// estimating the derivative numerically.
///
/// # Arguments
/// - `func` : evaluator for `f`
/// - `x0`   : initial guess
/// - `cfg`  : [`NewtonCfg`]
///
/// # Returns
/// [`RunReport`] whose trace holds one [`NewtonRecord`] `(i, x0, error)`
/// per step. The record stores the iterate the step started from, not the
/// new estimate; the returned root is the new estimate at the converging
/// step.
///
/// # Errors
/// - [`NewtonError::ZeroDerivative`] : the derivative estimate was exactly
///   zero, leaving the step undefined
///
/// * Propagated via [`NewtonError::Common`]
/// - [`RootFindingError::Evaluation`]   : `func` failed at some point
/// - [`RootFindingError::NotConverged`] : loop exhausted `max_iter`
///
/// # Behavior
/// - Derivative: forward finite difference with the fixed step
///   `FD_DELTA = 1e-6`, `f'(x) ~ (f(x + 1e-6) - f(x)) / 1e-6`. The
///   already-computed `f(x)` is reused, so each iteration costs exactly
///   two evaluator calls. No symbolic or analytic derivative path exists.
/// - Convergence is local only. A poor `x0` can cycle or walk away; the
///   iteration cap is the sole guard.
pub fn newton<F>(
    func: F,
    x0: f64,
    cfg: NewtonCfg,
) -> RunResult<NewtonRecord, NewtonError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let mut trace = Trace::new();
    let mut evals = 0;
    match newton_loop(func, x0, cfg, &mut trace, &mut evals) {
        Ok((root, iterations)) => Ok(RunReport {
            root,
            iterations,
            evaluations: evals,
            trace,
        }),
        Err(reason) => Err(RunFailure::new(reason, trace)),
    }
}

fn newton_loop<F>(
    mut func: F,
    mut x0: f64,
    cfg: NewtonCfg,
    trace: &mut Trace<NewtonRecord>,
    evals: &mut usize,
) -> Result<(f64, usize), NewtonError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let tol = cfg.common.tolerance();
    let max_iter = cfg
        .common
        .max_iter()
        .unwrap_or(Algorithm::Newton.default_max_iter());

    let mut eval = |x: f64| -> Result<f64, NewtonError> {
        *evals += 1;
        func(x).map_err(|source| RootFindingError::Evaluation { x, source }.into())
    };

    for i in 1..=max_iter {
        let fx = eval(x0)?;
        let fpx = (eval(x0 + FD_DELTA)? - fx) / FD_DELTA;
        if fpx == 0.0 {
            return Err(NewtonError::ZeroDerivative { x: x0 });
        }

        let x1 = x0 - fx / fpx;
        let error = (x1 - x0).abs();
        trace.push(NewtonRecord { iteration: i, x: x0, error });

        if error < tol {
            return Ok((x1, i));
        }
        x0 = x1;
    }

    Err(RootFindingError::NotConverged { iterations: max_iter }.into())
}
