//! XIRR solver: NPV evaluation and multi-start Newton-Raphson

mod config;
mod npv;
mod xirr;

pub use config::{SolverConfig, DEFAULT_MAX_ITERATIONS, MAX_ERROR};
pub use npv::{xnpv, year_fraction, DAYS_PER_YEAR};
pub use xirr::{compute, compute_with_config, INITIAL_GUESS};
