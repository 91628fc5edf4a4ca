//! tests for the newton-raphson root-finding algorithm
use numerix::expr::ExprError;
use numerix::root_finding::errors::RootFindingError;
use numerix::root_finding::newton::{newton, NewtonCfg, NewtonError};
use numerix::root_finding::report::{NewtonRecord, RunFailure};

type TestResult = Result<(), RunFailure<NewtonError, NewtonRecord>>;

#[test]
fn finds_sqrt_2_from_1_5() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);

    let res = newton(f, 1.5, NewtonCfg::new())?;

    assert!((res.root - 1.414_213_56).abs() <= 1e-6);
    assert!(res.iterations <= 10);
    assert_eq!(res.trace.len(), res.iterations);
    Ok(())
}

#[test]
fn record_stores_the_previous_iterate() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);

    let res = newton(f, 1.5, NewtonCfg::new())?;

    // each record holds the point the step started from
    assert_eq!(res.trace[0].x, 1.5);
    assert!(res.trace.windows(2).all(|p| p[1].x != p[0].x));
    Ok(())
}

#[test]
fn two_evaluations_per_iteration() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);

    let res = newton(f, 1.5, NewtonCfg::new())?;

    // f(x) and f(x + delta), nothing else
    assert_eq!(res.evaluations, 2 * res.iterations);
    Ok(())
}

#[test]
fn zero_derivative_fails() {
    let f   = |_x: f64| Ok(3.0);
    let err = newton(f, 1.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(
        err.reason,
        NewtonError::ZeroDerivative { x } if x == 1.0
    ));
    assert!(err.trace.is_empty());
}

#[test]
fn rootless_function_exhausts() {
    let f    = |x: f64| Ok(x * x + 1.0);
    let nmax = 8;

    let cfg = NewtonCfg::new().set_max_iter(nmax).unwrap();
    let err = newton(f, 0.0, cfg).unwrap_err();

    assert!(matches!(
        err.reason,
        NewtonError::Common(RootFindingError::NotConverged { iterations })
        if iterations == nmax
    ));
    assert_eq!(err.trace.len(), nmax);
}

#[test]
fn evaluation_error_stops_the_run() {
    let f = |x: f64| Err::<f64, _>(ExprError::NonFinite { x });
    let err = newton(f, 2.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(
        err.reason,
        NewtonError::Common(RootFindingError::Evaluation { x, .. }) if x == 2.0
    ));
    assert!(err.trace.is_empty());
}
