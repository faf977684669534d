//! XIRR - Extended internal rate of return for irregularly dated cash flows
//!
//! This library provides:
//! - XIRR via multi-start Newton-Raphson, matching spreadsheet XIRR
//! - XNPV over Actual/365 year fractions
//! - Payment loading from `date,amount` CSV files

pub mod error;
pub mod payment;
pub mod solver;

// Re-export commonly used types
pub use error::{XirrError, XirrResult};
pub use payment::Payment;
pub use solver::{compute, compute_with_config, xnpv, SolverConfig};
