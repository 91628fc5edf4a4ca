//! tests for the formula parser: precedence, associativity, symbol
//! resolution. Shapes are checked through evaluation of the parsed tree.
use numerix::expr::{ExprError, Formula};

type TestResult = Result<(), ExprError>;

fn eval_at(src: &str, x: f64) -> Result<f64, ExprError> {
    Formula::parse(src)?.eval(x)
}

#[test]
fn multiplication_binds_tighter_than_addition() -> TestResult {
    assert_eq!(eval_at("2 + 3 * 4", 0.0)?, 14.0);
    assert_eq!(eval_at("2 * 3 + 4", 0.0)?, 10.0);
    Ok(())
}

#[test]
fn power_is_right_associative() -> TestResult {
    assert_eq!(eval_at("2^3^2", 0.0)?, 512.0);
    Ok(())
}

#[test]
fn power_binds_tighter_than_unary_minus() -> TestResult {
    assert_eq!(eval_at("-2^2", 0.0)?, -4.0);
    assert_eq!(eval_at("-x^2", 3.0)?, -9.0);
    Ok(())
}

#[test]
fn unary_sign_in_operand_position() -> TestResult {
    assert_eq!(eval_at("2 * -3", 0.0)?, -6.0);
    assert_eq!(eval_at("2^-1", 0.0)?, 0.5);
    assert_eq!(eval_at("+x", 7.0)?, 7.0);
    Ok(())
}

#[test]
fn parentheses_override_precedence() -> TestResult {
    assert_eq!(eval_at("(2 + 3) * 4", 0.0)?, 20.0);
    Ok(())
}

#[test]
fn constants_fold_at_parse_time() -> TestResult {
    assert_eq!(eval_at("pi", 0.0)?, std::f64::consts::PI);
    assert_eq!(eval_at("tau / 2", 0.0)?, std::f64::consts::PI);
    assert_eq!(eval_at("e", 0.0)?, std::f64::consts::E);
    Ok(())
}

#[test]
fn allowlisted_function_call() -> TestResult {
    assert_eq!(eval_at("sqrt(16)", 0.0)?, 4.0);
    assert_eq!(eval_at("abs(-3)", 0.0)?, 3.0);
    Ok(())
}

#[test]
fn unknown_function_is_rejected() {
    let err = Formula::parse("foo(2)").unwrap_err();
    assert!(matches!(
        err,
        ExprError::UnknownFunction { name } if name == "foo"
    ));
}

#[test]
fn unknown_variable_is_rejected() {
    let err = Formula::parse("y + 1").unwrap_err();
    assert!(matches!(
        err,
        ExprError::UnknownVariable { name } if name == "y"
    ));
}

#[test]
fn trailing_input_is_rejected() {
    let err = Formula::parse("x 2").unwrap_err();
    assert!(matches!(err, ExprError::TrailingInput { .. }));
}

#[test]
fn truncated_expression_is_rejected() {
    assert_eq!(Formula::parse("2 +").unwrap_err(), ExprError::UnexpectedEnd);
    assert_eq!(Formula::parse("sin(x").unwrap_err(), ExprError::UnexpectedEnd);
}

#[test]
fn operator_in_operand_position_is_rejected() {
    let err = Formula::parse("x + * 2").unwrap_err();
    assert!(matches!(err, ExprError::UnexpectedToken { .. }));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(Formula::parse("").unwrap_err(), ExprError::UnexpectedEnd);
}
