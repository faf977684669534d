//! Payment records and fixture loading

mod data;
pub mod loader;

pub use data::Payment;
pub use loader::{load_payments, load_payments_from_reader};
