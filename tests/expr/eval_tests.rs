//! tests for formula evaluation: variable binding, domain checks, and the
//! finiteness guarantee
use approx::assert_relative_eq;

use numerix::expr::{ExprError, Formula};

type TestResult = Result<(), ExprError>;

#[test]
fn binds_the_free_variable() -> TestResult {
    let f = Formula::parse("x^2 - 2")?;
    assert_eq!(f.eval(2.0)?, 2.0);
    assert_eq!(f.eval(-2.0)?, 2.0);
    assert_eq!(f.eval(0.0)?, -2.0);
    Ok(())
}

#[test]
fn evaluates_the_default_front_end_formulas() -> TestResult {
    let f = Formula::parse("exp(x) - 5*x^2")?;
    assert_eq!(f.eval(0.0)?, 1.0);

    let g = Formula::parse("sqrt(exp(x)/5)")?;
    assert_relative_eq!(g.eval(0.0)?, 0.2_f64.sqrt());
    Ok(())
}

#[test]
fn trigonometry_against_constants() -> TestResult {
    let f = Formula::parse("sin(pi/2) + cos(0)")?;
    assert_relative_eq!(f.eval(0.0)?, 2.0);
    Ok(())
}

#[test]
fn division_by_zero_is_reported_with_the_binding() {
    let f = Formula::parse("1 / (x - 1)").unwrap();
    assert_eq!(f.eval(1.0), Err(ExprError::DivisionByZero { x: 1.0 }));
    assert_eq!(f.eval(3.0), Ok(0.5));
}

#[test]
fn sqrt_of_negative_is_a_domain_error() {
    let f = Formula::parse("sqrt(x)").unwrap();
    assert_eq!(
        f.eval(-4.0),
        Err(ExprError::Domain { function: "sqrt", arg: -4.0 })
    );
}

#[test]
fn log_of_non_positive_is_a_domain_error() {
    let f = Formula::parse("ln(x)").unwrap();
    assert!(matches!(
        f.eval(0.0),
        Err(ExprError::Domain { function: "ln", .. })
    ));

    let g = Formula::parse("log10(x)").unwrap();
    assert!(matches!(
        g.eval(-1.0),
        Err(ExprError::Domain { function: "log10", .. })
    ));
}

#[test]
fn arcsine_outside_unit_interval_is_a_domain_error() {
    let f = Formula::parse("asin(x)").unwrap();
    assert!(matches!(
        f.eval(1.5),
        Err(ExprError::Domain { function: "asin", .. })
    ));
    assert_relative_eq!(f.eval(1.0).unwrap(), std::f64::consts::FRAC_PI_2);
}

#[test]
fn overflow_is_caught_as_non_finite() {
    let f = Formula::parse("exp(x)").unwrap();
    assert_eq!(f.eval(1000.0), Err(ExprError::NonFinite { x: 1000.0 }));
}

#[test]
fn zero_to_a_negative_power_is_non_finite() {
    let f = Formula::parse("x^-1").unwrap();
    assert_eq!(f.eval(0.0), Err(ExprError::NonFinite { x: 0.0 }));
}

#[test]
fn repeated_evaluation_is_stateless() -> TestResult {
    let f = Formula::parse("sin(x) - 1/x")?;
    let first  = f.eval(1.1)?;
    let second = f.eval(1.1)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn source_text_is_kept_verbatim() -> TestResult {
    let f = Formula::parse(" x^2 - 2 ")?;
    assert_eq!(f.source(), " x^2 - 2 ");
    assert_eq!(f.to_string(), " x^2 - 2 ");
    Ok(())
}
