//! tests for the bisection root finding algorithm
use numerix::expr::ExprError;
use numerix::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use numerix::root_finding::errors::RootFindingError;
use numerix::root_finding::report::{BisectionRecord, RunFailure};

type TestResult = Result<(), RunFailure<BisectionError, BisectionRecord>>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let tol = 1e-10;

    let cfg = BisectionCfg::new()
        .set_tolerance(tol)
        .and_then(|c| c.set_max_iter(60))
        .unwrap();

    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-9);
    assert!(res.iterations > 0);
    assert_eq!(res.trace.len(), res.iterations);

    // the root satisfies the method's own convergence test
    let last = res.trace.last().unwrap();
    assert!(last.fx.abs() < tol || (last.b - last.a).abs() < tol);
    Ok(())
}

#[test]
fn halves_bracket_width_each_iteration() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);
    let (a0, b0) = (0.0, 2.0);

    let cfg = BisectionCfg::new()
        .set_tolerance(1e-9)
        .and_then(|c| c.set_max_iter(40))
        .unwrap();

    let res = bisection(f, a0, b0, cfg)?;

    // the bracket recorded at iteration i is (b0 - a0) / 2^(i-1) wide,
    // exactly, since dyadic endpoints halve without rounding
    for rec in &res.trace {
        let expected = (b0 - a0) / 2.0_f64.powi(rec.iteration as i32 - 1);
        assert_eq!(rec.b - rec.a, expected);
        assert_eq!(rec.x, (rec.a + rec.b) / 2.0);
    }
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| Ok(x * x + 1.0);
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err.reason,
        BisectionError::NoSignChange { a: -1.0, b: 1.0 }
    ));
    assert!(err.trace.is_empty());
}

#[test]
fn zero_product_at_endpoint_is_rejected() {
    // f(a) == 0 makes the product zero, which fails the strict < 0 check
    let f   = |x: f64| Ok(x);
    let err = bisection(f, 0.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err.reason, BisectionError::NoSignChange { .. }));
}

#[test]
fn exhausts_max_iterations() {
    let f     = |x: f64| Ok(x);
    let niter = 5;

    let cfg = BisectionCfg::new()
        .set_tolerance(1e-300)
        .and_then(|c| c.set_max_iter(niter))
        .unwrap();

    let err = bisection(f, -3.0, 2.0, cfg).unwrap_err();

    assert!(matches!(
        err.reason,
        BisectionError::Common(RootFindingError::MaxIterationsExceeded { iterations })
        if iterations == niter
    ));
    assert_eq!(err.trace.len(), niter);
}

#[test]
fn recomputes_f_a_each_iteration() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);

    let cfg = BisectionCfg::new()
        .set_tolerance(1e-10)
        .and_then(|c| c.set_max_iter(60))
        .unwrap();

    let res = bisection(f, 0.0, 2.0, cfg)?;

    // 2 precondition evals, then midpoint + fresh f(a) per full iteration
    // and only the midpoint on the converging one
    assert_eq!(res.evaluations, 2 * res.iterations + 1);
    Ok(())
}

#[test]
fn evaluation_error_stops_the_run() {
    let f = |x: f64| {
        if x < 0.0 {
            Err(ExprError::Domain { function: "sqrt", arg: x })
        } else {
            Ok(x.sqrt() - 2.0)
        }
    };
    let err = bisection(f, -1.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err.reason,
        BisectionError::Common(RootFindingError::Evaluation { x, .. }) if x == -1.0
    ));
    assert!(err.trace.is_empty());
}

#[test]
fn identical_inputs_give_identical_runs() -> TestResult {
    let f = |x: f64| Ok((x - 1.0).powi(3));

    let cfg = BisectionCfg::new()
        .set_tolerance(1e-10)
        .and_then(|c| c.set_max_iter(80))
        .unwrap();

    let first  = bisection(f, -2.0, 2.5, cfg)?;
    let second = bisection(f, -2.0, 2.5, cfg)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn reversed_bounds_are_not_rejected() -> TestResult {
    // bounds order is the caller's business; the sign product still holds
    let f = |x: f64| Ok(x - 1.0);

    let cfg = BisectionCfg::new()
        .set_tolerance(1e-9)
        .and_then(|c| c.set_max_iter(80))
        .unwrap();

    let res = bisection(f, 3.0, 0.0, cfg)?;
    assert!((res.root - 1.0).abs() <= 1e-6);
    Ok(())
}

#[test]
fn rejects_invalid_tolerance() {
    assert!(matches!(
        BisectionCfg::new().set_tolerance(0.0),
        Err(RootFindingError::InvalidTolerance { got }) if got == 0.0
    ));
    assert!(matches!(
        BisectionCfg::new().set_tolerance(f64::NAN),
        Err(RootFindingError::InvalidTolerance { .. })
    ));
}

#[test]
fn rejects_zero_max_iter() {
    assert!(matches!(
        BisectionCfg::new().set_max_iter(0),
        Err(RootFindingError::InvalidMaxIter { got: 0 })
    ));
}
