//! Net present value of dated cash flows and its derivative with respect to rate
//!
//! Time is measured Actual/365 from the anchor date, the earliest payment date.
//! Negative bases (`1 + rate < 0`) with fractional exponents evaluate to NaN,
//! which the driver treats as a failed guess.

use crate::payment::Payment;
use chrono::NaiveDate;

/// Day-count denominator (Actual/365)
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Elapsed years from `anchor` to `date` as whole calendar days over 365
pub fn year_fraction(date: NaiveDate, anchor: NaiveDate) -> f64 {
    date.signed_duration_since(anchor).num_days() as f64 / DAYS_PER_YEAR
}

/// Private copy ordered by date. Ties are broken on amount so that the
/// summation order, and therefore the result, does not depend on input order.
pub(super) fn sorted_by_date(payments: &[Payment]) -> Vec<Payment> {
    let mut sorted = payments.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then(a.amount.total_cmp(&b.amount)));
    sorted
}

/// NPV over a date-sorted payment set
pub(super) fn npv(sorted: &[Payment], rate: f64) -> f64 {
    let Some(anchor) = sorted.first().map(|p| p.date) else {
        return 0.0;
    };

    sorted
        .iter()
        .map(|p| p.amount / (1.0 + rate).powf(year_fraction(p.date, anchor)))
        .sum()
}

/// d(NPV)/d(rate) over a date-sorted payment set
pub(super) fn npv_derivative(sorted: &[Payment], rate: f64) -> f64 {
    let Some(anchor) = sorted.first().map(|p| p.date) else {
        return 0.0;
    };

    let mut result = 0.0;
    for p in sorted {
        let exp = year_fraction(p.date, anchor);
        result -= p.amount * exp / (1.0 + rate).powf(exp + 1.0);
    }
    result
}

/// Net present value of payments in any order, discounted to the earliest date.
///
/// Returns `0.0` for an empty set.
pub fn xnpv(payments: &[Payment], rate: f64) -> f64 {
    npv(&sorted_by_date(payments), rate)
}
