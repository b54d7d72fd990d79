//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.


/// Most methods use heuristic defaults from [`Algorithm::default_max_iter`].
/// This cap is only applied when a bracket algorithm's theoretical iteration bound
/// would otherwise exceed it (e.g. [`BracketFamily::Bisection`]).
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 10_000;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    FixedPoint,
    Newton,
    Secant,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Applied only when `max_iter` is unset.
    /// - [`BracketFamily::Bisection`] returns `None`, meaning "compute the
    ///   predicted bound instead", capped by [`GLOBAL_MAX_ITER_FALLBACK`].
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => None,
            Algorithm::Open(OpenFamily::FixedPoint)      => Some(10),
            Algorithm::Open(OpenFamily::Newton)          => Some(20),
            Algorithm::Open(OpenFamily::Secant)          => Some(20),
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::FixedPoint)      => "fixed_point",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
