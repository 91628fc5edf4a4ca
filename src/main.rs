//! Interactive front end.
//!
//! Presents the method menu, collects the formula and numeric parameters
//! (empty input accepts the shown default), runs the method, and prints
//! either the iteration table with the root, or the failure reason. Never
//! both.

use std::io;

use numerix::front::input::{prompt_f64, prompt_text, prompt_usize};
use numerix::front::table::{self, TraceRow};
use numerix::root_finding::algorithms::Algorithm;
use numerix::root_finding::bisection::BisectionCfg;
use numerix::root_finding::fixed_point::FixedPointCfg;
use numerix::root_finding::newton::NewtonCfg;
use numerix::root_finding::regula_falsi::RegulaFalsiCfg;
use numerix::root_finding::report::RunReport;
use numerix::root_finding::runner;
use numerix::root_finding::secant::SecantCfg;
use numerix::root_finding::DEFAULT_TOLERANCE;

const DEFAULT_FX: &str = "exp(x) - 5*x^2";
const DEFAULT_GX: &str = "sqrt(exp(x)/5)";

fn main() -> io::Result<()> {
    println!("numerix: iterative root finding");
    loop {
        println!();
        println!("  1) bisection");
        println!("  2) fixed-point iteration");
        println!("  3) secant");
        println!("  4) newton-raphson");
        println!("  5) regula falsi");
        println!("  q) quit");

        match prompt_text("method", "q")?.as_str() {
            "1" => run_bisection()?,
            "2" => run_fixed_point()?,
            "3" => run_secant()?,
            "4" => run_newton()?,
            "5" => run_regula_falsi()?,
            "q" | "quit" => break,
            other => println!("unknown selection: `{other}`"),
        }
    }
    Ok(())
}

fn prompt_convergence(algorithm: Algorithm) -> io::Result<(f64, usize)> {
    let tol = prompt_f64("tolerance", DEFAULT_TOLERANCE)?;
    let max_iter = prompt_usize("max iterations", algorithm.default_max_iter())?;
    Ok((tol, max_iter))
}

fn print_success<R: TraceRow>(report: &RunReport<R>) {
    println!("{}", table::render(&report.trace));
    println!(
        "root found: x = {:.6}  ({} iterations, {} evaluations)",
        report.root, report.iterations, report.evaluations
    );
}

fn run_bisection() -> io::Result<()> {
    let fx = prompt_text("f(x)", DEFAULT_FX)?;
    let a = prompt_f64("a", 0.0)?;
    let b = prompt_f64("b", 1.0)?;
    let (tol, max_iter) = prompt_convergence(Algorithm::Bisection)?;

    let cfg = BisectionCfg::new()
        .set_tolerance(tol)
        .and_then(|c| c.set_max_iter(max_iter));
    match cfg {
        Ok(cfg) => match runner::solve_bisection(&fx, a, b, cfg) {
            Ok(report) => print_success(&report),
            Err(failure) => eprintln!("error: {failure}"),
        },
        Err(e) => eprintln!("error: {e}"),
    }
    Ok(())
}

fn run_fixed_point() -> io::Result<()> {
    let gx = prompt_text("g(x)", DEFAULT_GX)?;
    let x0 = prompt_f64("x0", 0.0)?;
    let (tol, max_iter) = prompt_convergence(Algorithm::FixedPoint)?;

    let cfg = FixedPointCfg::new()
        .set_tolerance(tol)
        .and_then(|c| c.set_max_iter(max_iter));
    match cfg {
        Ok(cfg) => match runner::solve_fixed_point(&gx, x0, cfg) {
            Ok(report) => print_success(&report),
            Err(failure) => eprintln!("error: {failure}"),
        },
        Err(e) => eprintln!("error: {e}"),
    }
    Ok(())
}

fn run_secant() -> io::Result<()> {
    let fx = prompt_text("f(x)", DEFAULT_FX)?;
    let x0 = prompt_f64("x0", -1.0)?;
    let x1 = prompt_f64("x1", 0.0)?;
    let (tol, max_iter) = prompt_convergence(Algorithm::Secant)?;

    let cfg = SecantCfg::new()
        .set_tolerance(tol)
        .and_then(|c| c.set_max_iter(max_iter));
    match cfg {
        Ok(cfg) => match runner::solve_secant(&fx, x0, x1, cfg) {
            Ok(report) => print_success(&report),
            Err(failure) => eprintln!("error: {failure}"),
        },
        Err(e) => eprintln!("error: {e}"),
    }
    Ok(())
}

fn run_newton() -> io::Result<()> {
    let fx = prompt_text("f(x)", DEFAULT_FX)?;
    let x0 = prompt_f64("x0", 0.5)?;
    let (tol, max_iter) = prompt_convergence(Algorithm::Newton)?;

    let cfg = NewtonCfg::new()
        .set_tolerance(tol)
        .and_then(|c| c.set_max_iter(max_iter));
    match cfg {
        Ok(cfg) => match runner::solve_newton(&fx, x0, cfg) {
            Ok(report) => print_success(&report),
            Err(failure) => eprintln!("error: {failure}"),
        },
        Err(e) => eprintln!("error: {e}"),
    }
    Ok(())
}

fn run_regula_falsi() -> io::Result<()> {
    let fx = prompt_text("f(x)", DEFAULT_FX)?;
    let a = prompt_f64("a", 0.0)?;
    let b = prompt_f64("b", 1.0)?;
    let (tol, max_iter) = prompt_convergence(Algorithm::RegulaFalsi)?;

    let cfg = RegulaFalsiCfg::new()
        .set_tolerance(tol)
        .and_then(|c| c.set_max_iter(max_iter));
    match cfg {
        Ok(cfg) => match runner::solve_regula_falsi(&fx, a, b, cfg) {
            Ok(report) => print_success(&report),
            Err(failure) => eprintln!("error: {failure}"),
        },
        Err(e) => eprintln!("error: {e}"),
    }
    Ok(())
}
