//! Exchange rate types and logic.
//!
//! Rates here are plain caller-supplied values. Nothing checks that a rate
//! reflects the market; production use needs an external rate provider.

use chrono::NaiveDate;
use sarraf_shared::{MoneyResult, RoundingMode};
use serde::Serialize;

use crate::decimal::Amount;

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Amount,
    /// Date this rate is effective.
    pub effective_date: NaiveDate,
}

impl ExchangeRate {
    /// Creates a new exchange rate. Codes are upper-cased.
    #[must_use]
    pub fn new(
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        rate: Amount,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            from_currency: from_currency.into().trim().to_uppercase(),
            to_currency: to_currency.into().trim().to_uppercase(),
            rate,
            effective_date,
        }
    }

    /// Returns the inverse rate, rounded to `scale` fractional digits.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero rate, `RoundingRequired` if `mode` is
    /// `Unnecessary` and the inverse does not fit `scale`.
    pub fn inverse(&self, scale: u32, mode: RoundingMode) -> MoneyResult<Self> {
        Ok(Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            rate: Amount::one().div_to_scale(&self.rate, scale, mode)?,
            effective_date: self.effective_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use sarraf_shared::MoneyError;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_new_upper_cases_codes() {
        let rate = ExchangeRate::new("usd", " idr", Amount::from_decimal(dec!(15000)), date());
        assert_eq!(rate.from_currency, "USD");
        assert_eq!(rate.to_currency, "IDR");
    }

    #[test]
    fn test_inverse() {
        let rate = ExchangeRate::new("EUR", "USD", Amount::from_decimal(dec!(1.25)), date());
        let inverse = rate.inverse(4, RoundingMode::HalfEven).unwrap();
        assert_eq!(inverse.from_currency, "USD");
        assert_eq!(inverse.to_currency, "EUR");
        assert_eq!(inverse.rate.to_string(), "0.8000");
        assert_eq!(inverse.effective_date, date());
    }

    #[test]
    fn test_inverse_rounds() {
        let rate = ExchangeRate::new("USD", "IDR", Amount::from_decimal(dec!(15000)), date());
        let inverse = rate.inverse(6, RoundingMode::HalfUp).unwrap();
        assert_eq!(inverse.rate.to_string(), "0.000067");

        assert!(matches!(
            rate.inverse(6, RoundingMode::Unnecessary),
            Err(MoneyError::RoundingRequired(_))
        ));
    }

    #[test]
    fn test_inverse_of_zero_rate() {
        let rate = ExchangeRate::new("USD", "XXX", Amount::zero(), date());
        assert_eq!(
            rate.inverse(4, RoundingMode::HalfUp),
            Err(MoneyError::DivisionByZero)
        );
    }
}
