//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with each method's display name and default iteration cap.

/// Root-finding algorithm variants.
///
/// - bracketing methods : [`Algorithm::Bisection`], [`Algorithm::RegulaFalsi`]
/// - open methods       : [`Algorithm::Secant`], [`Algorithm::Newton`]
/// - iteration map      : [`Algorithm::FixedPoint`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    FixedPoint,
    Secant,
    Newton,
    RegulaFalsi,
}

impl Algorithm {
    /// Iteration cap used when a config leaves `max_iter` unset.
    ///
    /// # Notes
    /// - Values are method-specific heuristics: the bracketing and open
    ///   methods get room to grind, while the fixed-point map fails fast
    ///   since a non-contracting map never improves with more iterations.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Bisection   => 50,
            Algorithm::FixedPoint  => 30,
            Algorithm::Secant      => 100,
            Algorithm::Newton      => 100,
            Algorithm::RegulaFalsi => 100,
        }
    }

    /// Method names for display and reporting.
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection   => "bisection",
            Algorithm::FixedPoint  => "fixed_point",
            Algorithm::Secant      => "secant",
            Algorithm::Newton      => "newton_raphson",
            Algorithm::RegulaFalsi => "regula_falsi",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
