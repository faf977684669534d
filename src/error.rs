//! Error types for XIRR computation

use thiserror::Error;

/// Result type returned by the solver entry points
pub type XirrResult<T> = Result<T, XirrError>;

/// Errors surfaced by [`compute`](crate::compute).
///
/// Failure to find a rate is not an error: the solver returns `Ok(f64::NAN)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum XirrError {
    /// The payment set lacks a strictly positive or a strictly negative amount.
    #[error("negative and positive payments are required")]
    InvalidPayments,
}
