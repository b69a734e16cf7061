//! Conversions from raw inputs into [`Amount`].
//!
//! Accepted text forms: `123`, `-1.50`, `+.5`, `1.`, `1.2e3`, and exact
//! fractions such as `1/4`. A fraction without a finite decimal expansion
//! (`1/3`) fails with `RoundingRequired`.

use std::str::FromStr;

use num_bigint::BigInt;
use rust_decimal::Decimal;
use sarraf_shared::{MoneyError, MoneyResult};

use super::exact::pow10;
use super::Amount;

/// Largest exponent magnitude accepted in scientific notation.
const MAX_EXPONENT: u32 = 100_000;

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Some((numerator, denominator)) = text.split_once('/') {
            let numerator = parse_decimal(numerator.trim())?;
            let denominator = parse_decimal(denominator.trim())?;
            return numerator.checked_div(&denominator);
        }
        parse_decimal(text)
    }
}

fn parse_decimal(text: &str) -> MoneyResult<Amount> {
    let invalid = || MoneyError::InvalidAmount(text.to_string());

    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    };

    let unsigned = mantissa.strip_prefix(['-', '+']).unwrap_or(mantissa);
    let (integral, fractional) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (integral.is_empty() && fractional.is_empty())
        || !digits_only(integral)
        || !digits_only(fractional)
    {
        return Err(invalid());
    }

    let digits = format!("{integral}{fractional}");
    let mut coefficient: BigInt = digits.parse().map_err(|_| invalid())?;
    if mantissa.starts_with('-') {
        coefficient = -coefficient;
    }
    let scale = u32::try_from(fractional.len()).map_err(|_| MoneyError::Overflow)?;

    let Some(exponent) = exponent else {
        return Ok(Amount::from_minor_units(coefficient, scale));
    };
    let exponent: i64 = exponent.parse().map_err(|_| invalid())?;
    let magnitude = u32::try_from(exponent.unsigned_abs())
        .ok()
        .filter(|m| *m <= MAX_EXPONENT)
        .ok_or(MoneyError::Overflow)?;

    // Shift the decimal point: a positive exponent eats fractional digits
    // first, then appends zeros.
    if exponent < 0 {
        let scale = scale.checked_add(magnitude).ok_or(MoneyError::Overflow)?;
        Ok(Amount::from_minor_units(coefficient, scale))
    } else if magnitude <= scale {
        Ok(Amount::from_minor_units(coefficient, scale - magnitude))
    } else {
        Ok(Amount::from_minor_units(coefficient * pow10(magnitude - scale), 0))
    }
}

/// Anything that can become an exact [`Amount`].
///
/// Implemented for integers, `Decimal`, strings, and `f64`. Floats go through
/// their shortest round-trip text (`0.1` becomes exactly `0.1`), and NaN or
/// infinities fail with `InvalidAmount`.
pub trait IntoAmount {
    /// Performs the conversion.
    fn into_amount(self) -> MoneyResult<Amount>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> MoneyResult<Amount> {
        Ok(self)
    }
}

impl IntoAmount for &Amount {
    fn into_amount(self) -> MoneyResult<Amount> {
        Ok(self.clone())
    }
}

impl IntoAmount for Decimal {
    fn into_amount(self) -> MoneyResult<Amount> {
        Ok(Amount::from_decimal(self))
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> MoneyResult<Amount> {
        self.parse()
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> MoneyResult<Amount> {
        self.parse()
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> MoneyResult<Amount> {
        self.parse()
    }
}

impl IntoAmount for f64 {
    fn into_amount(self) -> MoneyResult<Amount> {
        if !self.is_finite() {
            return Err(MoneyError::InvalidAmount(self.to_string()));
        }
        self.to_string().parse()
    }
}

macro_rules! into_amount_from_int {
    ($($int:ty),*) => {
        $(
            impl IntoAmount for $int {
                fn into_amount(self) -> MoneyResult<Amount> {
                    Ok(Amount::from_minor_units(self, 0))
                }
            }
        )*
    };
}

into_amount_from_int!(i32, i64, i128, u32, u64, u128, usize);
