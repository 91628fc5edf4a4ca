use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::report::{RegulaFalsiRecord, RunFailure, RunReport, RunResult, Trace};
use crate::expr::ExprError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no guaranteed root on [{a}, {b}]: f(a) * f(b) > 0")]
    NoGuaranteedRoot { a: f64, b: f64 },
}

/// Regula falsi configuration.
///
/// # Defaults
/// - tolerance `1e-6`; `max_iter` resolves to
///   [`Algorithm::default_max_iter`] for [`Algorithm::RegulaFalsi`] (100).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(RegulaFalsiCfg);

/// Finds a root of a function using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
/// - `func` : evaluator for `f`
/// - `a`    : one interval bound
/// - `b`    : the other interval bound (order is not enforced)
/// - `cfg`  : [`RegulaFalsiCfg`]
///
/// # Returns
/// [`RunReport`] whose trace holds one [`RegulaFalsiRecord`]
/// `(i, a, f(a), b, f(b), c, f(c), |b - a|)` per step; the root is the
/// interpolated point `c` at the converging step.
///
/// # Errors
/// - [`RegulaFalsiError::NoGuaranteedRoot`] : `f(a) * f(b) > 0`, checked
///   before any iteration. A zero at an endpoint is accepted, unlike
///   [`bisection`]'s strict sign-change requirement.
///
/// * Propagated via [`RegulaFalsiError::Common`]
/// - [`RootFindingError::Evaluation`]   : `func` failed at some point
/// - [`RootFindingError::NotConverged`] : loop exhausted `max_iter`
///
/// # Behavior
/// - Convergence: `|f(c)| < tolerance` or bracket width `< tolerance`.
/// - Endpoint function values are CACHED when the bracket shrinks, never
///   re-evaluated. Contrast with [`bisection`], which re-evaluates `f(a)`
///   every iteration; both behaviors are intentional and kept asymmetric.
/// - A collapsed secant denominator (`f(b) == f(a)`, possible once an
///   endpoint stagnates) is not special-cased: the resulting non-finite
///   `c` fails the evaluator's finiteness check at `f(c)` and the run
///   aborts as an evaluation failure.
///
/// [`bisection`]: super::bisection::bisection
pub fn regula_falsi<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: RegulaFalsiCfg,
) -> RunResult<RegulaFalsiRecord, RegulaFalsiError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let mut trace = Trace::new();
    let mut evals = 0;
    match regula_falsi_loop(func, a, b, cfg, &mut trace, &mut evals) {
        Ok((root, iterations)) => Ok(RunReport {
            root,
            iterations,
            evaluations: evals,
            trace,
        }),
        Err(reason) => Err(RunFailure::new(reason, trace)),
    }
}

fn regula_falsi_loop<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg,
    trace: &mut Trace<RegulaFalsiRecord>,
    evals: &mut usize,
) -> Result<(f64, usize), RegulaFalsiError>
where
    F: FnMut(f64) -> Result<f64, ExprError>,
{
    let tol = cfg.common.tolerance();
    let max_iter = cfg
        .common
        .max_iter()
        .unwrap_or(Algorithm::RegulaFalsi.default_max_iter());

    let mut eval = |x: f64| -> Result<f64, RegulaFalsiError> {
        *evals += 1;
        func(x).map_err(|source| RootFindingError::Evaluation { x, source }.into())
    };

    let mut fa = eval(a)?;
    let mut fb = eval(b)?;
    if fa * fb > 0.0 {
        return Err(RegulaFalsiError::NoGuaranteedRoot { a, b });
    }

    for i in 1..=max_iter {
        let c = b - fb * (b - a) / (fb - fa);
        let fc = eval(c)?;
        let width = (b - a).abs();
        trace.push(RegulaFalsiRecord { iteration: i, a, fa, b, fb, c, fc, width });

        if fc.abs() < tol || width < tol {
            return Ok((c, i));
        }

        // endpoint values stay cached, not recomputed
        if fa * fc < 0.0 {
            b = c;
            fb = fc;
        } else {
            a = c;
            fa = fc;
        }
    }

    Err(RootFindingError::NotConverged { iterations: max_iter }.into())
}
