//! numerix: iterative root-finding over runtime-parsed formulas.
//!
//! Five classic single-variable methods (bisection, fixed-point iteration,
//! secant, Newton-Raphson, regula falsi), each with its own convergence
//! test, failure taxonomy, and per-iteration trace, driven by formulas the
//! user types at runtime.
//!
//! Modules:
//! - [`expr`]         : restricted expression interpreter (`Formula`)
//! - [`root_finding`] : the five algorithms, configs, errors, reports, and
//!   the string-level `solve_*` runners
//! - [`front`]        : prompt and trace-table helpers for the interactive
//!   binary; all numeric formatting lives here
//!
//! Runs share no state: every invocation owns its loop variables and trace,
//! so identical inputs always produce identical results and runs may execute
//! concurrently without synchronization.
//!
//! ```
//! use numerix::root_finding::bisection::BisectionCfg;
//! use numerix::root_finding::runner::solve_bisection;
//!
//! let report = solve_bisection("x^2 - 2", 0.0, 2.0, BisectionCfg::new())
//!     .expect("bracket contains a root");
//! assert!((report.root - 2.0_f64.sqrt()).abs() < 1e-5);
//! ```

pub mod expr;
pub mod front;
pub mod root_finding;

pub use expr::{ExprError, Formula};
