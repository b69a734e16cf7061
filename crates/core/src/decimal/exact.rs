//! Exact coefficient arithmetic backing [`Amount`](super::Amount).
//!
//! A decimal is `coefficient * 10^-scale` with an arbitrary-precision integer
//! coefficient. Nothing here rounds unless a `RoundingMode` says so.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use sarraf_shared::{MoneyError, MoneyResult, RoundingMode};

/// Largest scale a currency or a custom context may pin amounts to.
///
/// Amounts themselves carry any scale; this only bounds configuration.
pub const MAX_SCALE: u32 = 28;

/// Returns `10^exp`.
pub fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

/// Brings two coefficients to their common (wider) scale.
pub fn align(left: &BigInt, left_scale: u32, right: &BigInt, right_scale: u32) -> (BigInt, BigInt, u32) {
    let scale = left_scale.max(right_scale);
    (
        left * pow10(scale - left_scale),
        right * pow10(scale - right_scale),
        scale,
    )
}

/// Drops trailing zero digits from the fractional part. Zero gets scale 0.
pub fn strip_zeros(mut coefficient: BigInt, mut scale: u32) -> (BigInt, u32) {
    if coefficient.is_zero() {
        return (coefficient, 0);
    }
    let ten = BigInt::from(10u8);
    while scale > 0 {
        let (quotient, remainder) = coefficient.div_rem(&ten);
        if !remainder.is_zero() {
            break;
        }
        coefficient = quotient;
        scale -= 1;
    }
    (coefficient, scale)
}

/// Divides `numerator` by `denominator` and rounds the integer quotient.
///
/// The decision is taken from the exact remainder, so there is never double
/// rounding. `denominator` must not be zero.
pub fn div_round(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> MoneyResult<BigInt> {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return Ok(quotient);
    }

    let negative = numerator.is_negative() != denominator.is_negative();
    let twice_remainder = remainder.magnitude() * 2u32;
    let divisor = denominator.magnitude();

    let away_from_zero = match mode {
        RoundingMode::Unnecessary => {
            return Err(MoneyError::RoundingRequired(format!(
                "{numerator} / {denominator} is inexact"
            )));
        }
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp => twice_remainder >= *divisor,
        RoundingMode::HalfDown => twice_remainder > *divisor,
        RoundingMode::HalfEven => {
            twice_remainder > *divisor || (twice_remainder == *divisor && quotient.is_odd())
        }
    };

    if !away_from_zero {
        return Ok(quotient);
    }
    let step = if negative { -BigInt::one() } else { BigInt::one() };
    Ok(quotient + step)
}

/// Splits a positive denominator into `(twos, fives, rest)` with
/// `denominator = 2^twos * 5^fives * rest`.
pub fn factor_tens(denominator: &BigInt) -> (u32, u32, BigInt) {
    let (two, five) = (BigInt::from(2u8), BigInt::from(5u8));
    let mut rest = denominator.clone();
    let (mut twos, mut fives) = (0, 0);
    while !rest.is_zero() && rest.is_even() {
        rest /= &two;
        twos += 1;
    }
    while !rest.is_zero() && (&rest % &five).is_zero() {
        rest /= &five;
        fives += 1;
    }
    (twos, fives, rest)
}
