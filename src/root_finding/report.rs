//! Run outcomes: per-iteration records, traces, and the final report.
//!
//! Each algorithm logs one record per iteration; the columns differ per
//! method, so each method has its own record struct. Records hold raw
//! numbers only. Formatting them for display is a presentation concern and
//! lives at the front-end boundary.
//!
//! A run ends in exactly one of:
//! - [`RunReport`]  : converged, with the full trace and the root
//! - [`RunFailure`] : terminal failure, with whatever trace had accumulated
//!   before the failure point (empty for precondition failures)

use thiserror::Error;

/// Ordered per-iteration log of a run. Append-only; its length never
/// exceeds the run's iteration cap.
pub type Trace<R> = Vec<R>;

/// One bisection step: bracket, midpoint, and the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionRecord {
    pub iteration: usize,
    pub a:  f64,
    pub b:  f64,
    pub x:  f64,
    pub fx: f64,
}

/// One fixed-point step: the new iterate and the step size `|x_new - x_prev|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointRecord {
    pub iteration: usize,
    pub x:     f64,
    pub error: f64,
}

/// One secant step: the new estimate and the step size `|x2 - x1|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantRecord {
    pub iteration: usize,
    pub x:    f64,
    pub step: f64,
}

/// One Newton-Raphson step.
///
/// `x` is the iterate the step started from, not the newly computed one;
/// `error` is the size of the step taken away from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRecord {
    pub iteration: usize,
    pub x:     f64,
    pub error: f64,
}

/// One regula falsi step: both endpoints with their cached function values,
/// the interpolated point `c` with `f(c)`, and the bracket width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegulaFalsiRecord {
    pub iteration: usize,
    pub a:  f64,
    pub fa: f64,
    pub b:  f64,
    pub fb: f64,
    pub c:  f64,
    pub fc: f64,
    pub width: f64,
}

/// Successful outcome of a root-finding run.
///
/// - `root`        : the estimate at the iteration where the method's
///   convergence test first held (no look-ahead past it)
/// - `iterations`  : iterations performed; equals `trace.len()`
/// - `evaluations` : total evaluator calls made during the run
/// - `trace`       : the full per-iteration log
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<R> {
    pub root: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub trace: Trace<R>,
}

/// Terminal failure of a root-finding run.
///
/// Carries the trace accumulated before the failure point, uniformly across
/// all methods: precondition failures carry an empty trace, an exhausted
/// loop carries the full-length one. Displays as its reason.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{reason}")]
pub struct RunFailure<E, R> {
    pub reason: E,
    pub trace: Trace<R>,
}

impl<E, R> RunFailure<E, R> {
    pub(crate) fn new(reason: impl Into<E>, trace: Trace<R>) -> Self {
        Self { reason: reason.into(), trace }
    }
}

/// Outcome of a run: success with a trace and root, or failure with a
/// reason. Never both.
pub type RunResult<R, E> = Result<RunReport<R>, RunFailure<E, R>>;
