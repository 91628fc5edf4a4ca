use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{BisectionRecord, RunFailure, RunReport, RunResult, Trace};
use crate::expr::ExprError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) >= 0")]
    NoSignChange { a: f64, b: f64 },
}

/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with the tolerance and optional `max_iter`.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then the optional `set_*` builders.
///
/// # Defaults
/// - tolerance `1e-6`; `max_iter` resolves to
///   [`Algorithm::default_max_iter`] for [`Algorithm::Bisection`] (50).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(BisectionCfg);

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
/// - `func` : evaluator for `f`; any evaluation failure ends the run
/// - `a`    : one interval bound
/// - `b`    : the other interval bound (order is not enforced)
/// - `cfg`  : [`BisectionCfg`] (tolerance, optional `max_iter`)
///
/// # Returns
/// [`RunReport`] with
/// - `root`        : midpoint at the iteration where convergence first held
/// - `iterations`  : iterations performed
/// - `evaluations` : total evaluator calls
/// - `trace`       : one [`BisectionRecord`] `(i, a, b, x, f(x))` per step
///
/// # Errors
/// - [`BisectionError::NoSignChange`] : `f(a) * f(b) >= 0`, checked before
///   any iteration (a zero product is rejected too)
///
/// * Propagated via [`BisectionError::Common`]
/// - [`RootFindingError::Evaluation`]            : `func` failed at some point
/// - [`RootFindingError::MaxIterationsExceeded`] : loop exhausted `max_iter`
///
/// # Behavior
/// - Convergence: `|f(x)| < tolerance` or `|b - a| < tolerance`, tested
///   once per iteration on the fresh midpoint.
/// - Bracket update: the sign of `f(a)` is re-evaluated every iteration
///   rather than cached, so the update stays correct even against an
///   evaluator whose answers vary between calls. This costs one extra
///   evaluation per step. Contrast with [`regula_falsi`], which caches
///   both endpoint values.
///
/// [`regula_falsi`]: super::regula_falsi::regula_falsi
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> RunResult<BisectionRecord, BisectionError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let mut trace = Trace::new();
    let mut evals = 0;
    match bisection_loop(func, a, b, cfg, &mut trace, &mut evals) {
        Ok((root, iterations)) => Ok(RunReport {
            root,
            iterations,
            evaluations: evals,
            trace,
        }),
        Err(reason) => Err(RunFailure::new(reason, trace)),
    }
}

fn bisection_loop<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
    trace: &mut Trace<BisectionRecord>,
    evals: &mut usize,
) -> Result<(f64, usize), BisectionError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let tol = cfg.common.tolerance();
    let max_iter = cfg
        .common
        .max_iter()
        .unwrap_or(Algorithm::Bisection.default_max_iter());

    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        *evals += 1;
        func(x).map_err(|source| RootFindingError::Evaluation { x, source }.into())
    };

    if eval(a)? * eval(b)? >= 0.0 {
        return Err(BisectionError::NoSignChange { a, b });
    }

    for i in 1..=max_iter {
        let x = (a + b) / 2.0;
        let fx = eval(x)?;
        trace.push(BisectionRecord { iteration: i, a, b, x, fx });

        if fx.abs() < tol || (b - a).abs() < tol {
            return Ok((x, i));
        }

        // f(a) is re-evaluated, not cached
        if eval(a)? * fx < 0.0 {
            b = x;
        } else {
            a = x;
        }
    }

    Err(RootFindingError::MaxIterationsExceeded { iterations: max_iter }.into())
}
