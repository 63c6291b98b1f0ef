//! Ambient configuration for the orchestration entry points: which CFPQ
//! fixed-point algorithm to dispatch to, and whether to log per-step
//! progress.

/// Selects which CFPQ fixed-point algorithm an orchestration call should
/// run. Both compute the same result (invariant 3 in the testable
/// properties); `Matrix` tends to win on dense instances, `Hellings` on
/// sparse ones with few variables.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Algorithm {
    /// The worklist fixed-point algorithm over explicit triples.
    Hellings,
    /// The per-variable boolean-matrix fixed-point algorithm.
    #[default]
    Matrix,
}

/// Configuration for a single CFPQ query.
#[derive(Clone, Debug, Default)]
pub struct CfpqConfig {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
}

impl CfpqConfig {
    pub fn new() -> Self {
        CfpqConfig::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}
