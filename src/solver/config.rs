//! Solver configuration

/// Absolute convergence threshold between successive Newton iterates
pub const MAX_ERROR: f64 = 1e-10;

/// Iteration cap per initial guess
pub const DEFAULT_MAX_ITERATIONS: u32 = 10_000;

/// Configuration for a solver run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Stop once `|r_{n+1} - r_n|` drops to this value
    pub tolerance: f64,

    /// Newton steps allowed per guess before the guess counts as non-convergent
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: MAX_ERROR,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
