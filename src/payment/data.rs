//! Dated cash flow record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A payment made or received on a particular date
///
/// Positive amounts are money received, negative amounts money paid out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: f64,
}

impl Payment {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }

    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }
}
