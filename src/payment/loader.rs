//! Load payments from headerless `date,amount` CSV files

use super::Payment;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use std::error::Error;
use std::path::Path;

/// Load all payments from a CSV file of `YYYY-MM-DD,amount` rows
pub fn load_payments<P: AsRef<Path>>(path: P) -> Result<Vec<Payment>, Box<dyn Error>> {
    let reader = std::fs::File::open(path)?;
    load_payments_from_reader(reader)
}

/// Load payments from any reader (e.g., string buffer, network stream)
pub fn load_payments_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Payment>, Box<dyn Error>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);
    let mut payments = Vec::new();

    for result in csv_reader.deserialize() {
        let (date, amount): (NaiveDate, f64) = result?;
        payments.push(Payment::new(date, amount));
    }

    Ok(payments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples").join(name)
    }

    #[test]
    fn test_load_from_reader() {
        let data = "2016-06-11,-100\n 2018-06-11 , 250.75 \n";
        let payments = load_payments_from_reader(data.as_bytes()).unwrap();

        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].date, NaiveDate::from_ymd_opt(2016, 6, 11).unwrap());
        assert_eq!(payments[0].amount, -100.0);
        assert_eq!(payments[1].date, NaiveDate::from_ymd_opt(2018, 6, 11).unwrap());
        assert_eq!(payments[1].amount, 250.75);
    }

    #[test]
    fn test_preserves_file_order() {
        let payments = load_payments(sample("random.csv")).expect("Failed to load payments");
        assert_eq!(payments.len(), 8);
        assert_eq!(payments[0].date, NaiveDate::from_ymd_opt(2014, 1, 9).unwrap());
        assert_eq!(payments[2].amount, 13831.350347);
    }

    #[test]
    fn test_empty_input() {
        let payments = load_payments_from_reader("".as_bytes()).unwrap();
        assert!(payments.is_empty());
    }

    #[test]
    fn test_malformed_date() {
        let result = load_payments_from_reader("2016-13-40,-100\n".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_amount() {
        let result = load_payments_from_reader("2016-06-11,abc\n".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_payments(sample("does_not_exist.csv")).is_err());
    }
}
