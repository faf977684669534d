//! Extended Internal Rate of Return (XIRR)
//!
//! Finds the annual rate that zeroes the NPV of irregularly dated cash flows,
//! matching the XIRR function of spreadsheet applications.

use super::config::SolverConfig;
use super::npv::{npv, npv_derivative, sorted_by_date};
use crate::error::{XirrError, XirrResult};
use crate::payment::Payment;
use log::{debug, trace};

/// First guess tried for every payment set
pub const INITIAL_GUESS: f64 = 0.1;

const RETRY_GUESS_START: f64 = -0.99;
const RETRY_GUESS_STEP: f64 = 0.1;
const RETRY_GUESS_END: f64 = 1.0;

/// Calculate the internal rate of return of a series of irregular payments.
///
/// Uses Newton's method with an initial guess of 0.1. If that does not
/// produce a finite rate, guesses from -0.99 up to (but excluding) 1.0 in
/// steps of 0.1 are tried in order.
///
/// # Returns
/// * `Ok(rate)` - annual rate as a decimal (e.g., 0.05 for 5%)
/// * `Ok(NaN)` - no guess converged; check with `is_nan()`
/// * `Err(XirrError::InvalidPayments)` - no inflow or no outflow present
pub fn compute(payments: &[Payment]) -> XirrResult<f64> {
    compute_with_config(payments, &SolverConfig::default())
}

/// [`compute`] with an explicit tolerance and iteration cap
pub fn compute_with_config(payments: &[Payment], config: &SolverConfig) -> XirrResult<f64> {
    validate_payments(payments)?;

    let sorted = sorted_by_date(payments);
    let mut rate = solve_with_guess(&sorted, INITIAL_GUESS, config);

    let mut guesses = retry_guesses();
    while !rate.is_finite() {
        let Some(guess) = guesses.next() else {
            debug!("No convergent rate found for {} payments", sorted.len());
            return Ok(f64::NAN);
        };
        debug!("Guess produced {}, retrying with {:.2}", rate, guess);
        rate = solve_with_guess(&sorted, guess, config);
    }

    Ok(rate)
}

/// Require at least one strictly positive and one strictly negative amount.
/// Zero amounts satisfy neither.
fn validate_payments(payments: &[Payment]) -> XirrResult<()> {
    let mut positive = false;
    let mut negative = false;
    for p in payments {
        positive |= p.is_inflow();
        negative |= p.is_outflow();
    }

    if !positive || !negative {
        return Err(XirrError::InvalidPayments);
    }
    Ok(())
}

/// -0.99, -0.89, ..., 0.91, accumulated in floating point
fn retry_guesses() -> impl Iterator<Item = f64> {
    std::iter::successors(Some(RETRY_GUESS_START), |g| Some(g + RETRY_GUESS_STEP))
        .take_while(|g| *g < RETRY_GUESS_END)
}

/// Newton-Raphson from a single starting point over a date-sorted set.
///
/// NaN and infinities from the iteration are returned as-is. Running out of
/// iterations yields NaN.
fn solve_with_guess(sorted: &[Payment], guess: f64, config: &SolverConfig) -> f64 {
    let mut rate = guess;

    for _ in 0..config.max_iterations {
        let next = rate - npv(sorted, rate) / npv_derivative(sorted, rate);
        let error = (next - rate).abs();

        if error.is_nan() || error <= config.tolerance {
            return next;
        }

        rate = next;
    }

    trace!("Guess {} exhausted {} iterations", guess, config.max_iterations);
    f64::NAN
}
