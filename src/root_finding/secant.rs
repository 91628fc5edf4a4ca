use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{RunFailure, RunReport, RunResult, SecantRecord, Trace};
use crate::expr::ExprError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SecantError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("division by zero in secant update: f(x1) - f(x0) == 0 for x0={x0}, x1={x1}")]
    DivisionByZero { x0: f64, x1: f64 },
}

/// Secant configuration.
///
/// # Defaults
/// - tolerance `1e-6`; `max_iter` resolves to
///   [`Algorithm::default_max_iter`] for [`Algorithm::Secant`] (100).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(SecantCfg);

/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func`     : evaluator for `f`
/// - `x0`, `x1` : the two initial estimates
/// - `cfg`      : [`SecantCfg`]
///
/// # Returns
/// [`RunReport`] whose trace holds one [`SecantRecord`]
/// `(i, x2, |x2 - x1|)` per step; the root is the first `x2` whose step
/// size fell below the tolerance.
///
/// # Errors
/// - [`SecantError::DivisionByZero`] : `f(x1) - f(x0)` was exactly zero
///
/// * Propagated via [`SecantError::Common`]
/// - [`RootFindingError::Evaluation`]   : `func` failed at some point
/// - [`RootFindingError::NotConverged`] : loop exhausted `max_iter`
///
/// # Behavior
/// - Both `f(x0)` and `f(x1)` are evaluated each iteration; only the
///   window `(x0, x1)` is carried between steps.
/// - The zero-denominator test is exact; nearly-equal function values pass
///   through and produce a large (finite) step instead.
pub fn secant<F>(
    func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> RunResult<SecantRecord, SecantError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let mut trace = Trace::new();
    let mut evals = 0;
    match secant_loop(func, x0, x1, cfg, &mut trace, &mut evals) {
        Ok((root, iterations)) => Ok(RunReport {
            root,
            iterations,
            evaluations: evals,
            trace,
        }),
        Err(reason) => Err(RunFailure::new(reason, trace)),
    }
}

fn secant_loop<F>(
    mut func: F,
    mut x0: f64,
    mut x1: f64,
    cfg: SecantCfg,
    trace: &mut Trace<SecantRecord>,
    evals: &mut usize,
) -> Result<(f64, usize), SecantError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let tol = cfg.common.tolerance();
    let max_iter = cfg
        .common
        .max_iter()
        .unwrap_or(Algorithm::Secant.default_max_iter());

    let mut eval = |x: f64| -> Result<f64, SecantError> {
        *evals += 1;
        func(x).map_err(|source| RootFindingError::Evaluation { x, source }.into())
    };

    for i in 1..=max_iter {
        let f0 = eval(x0)?;
        let f1 = eval(x1)?;
        if f1 - f0 == 0.0 {
            return Err(SecantError::DivisionByZero { x0, x1 });
        }

        let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
        let step = (x2 - x1).abs();
        trace.push(SecantRecord { iteration: i, x: x2, step });

        if step < tol {
            return Ok((x2, i));
        }
        x0 = x1;
        x1 = x2;
    }

    Err(RootFindingError::NotConverged { iterations: max_iter }.into())
}
