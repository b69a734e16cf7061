//! The exact decimal amount type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rust_decimal::Decimal;
use sarraf_shared::{MoneyError, MoneyResult, RoundingMode};

use super::exact;

/// An exact decimal number of unbounded precision.
///
/// Stored as an arbitrary-precision coefficient and a count of fractional
/// digits. Equality, ordering, and hashing are numeric: `1.50 == 1.5`. The
/// scale is kept and shows up in `Display`.
#[derive(Debug, Clone, Default)]
pub struct Amount {
    coefficient: BigInt,
    scale: u32,
}

impl Amount {
    /// Zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// One.
    #[must_use]
    pub fn one() -> Self {
        Self::from_minor_units(1, 0)
    }

    /// Converts a `Decimal`, keeping its scale.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        Self::from_minor_units(value.mantissa(), value.scale())
    }

    /// Converts back to a `Decimal`.
    ///
    /// # Errors
    ///
    /// `Overflow` if the value needs more than 96 bits of coefficient or 28
    /// fractional digits.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        let coefficient = i128::try_from(&self.coefficient).map_err(|_| MoneyError::Overflow)?;
        Decimal::try_from_i128_with_scale(coefficient, self.scale).map_err(|_| MoneyError::Overflow)
    }

    /// Builds an amount from an integer count of `10^-scale` units.
    ///
    /// `from_minor_units(1050, 2)` is `10.50`.
    #[must_use]
    pub fn from_minor_units(units: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            coefficient: units.into(),
            scale,
        }
    }

    /// Integer coefficient of the representation at its current scale.
    ///
    /// `10.50` gives `1050`; call [`Amount::to_scale`] first to pick the unit.
    #[must_use]
    pub const fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// Number of fractional digits in the representation.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.coefficient.is_positive()
    }

    /// Returns true if the amount is strictly less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_minor_units(self.coefficient.abs(), self.scale)
    }

    /// Negation. Zero stays unsigned.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_minor_units(-&self.coefficient, self.scale)
    }

    /// Numeric three-way comparison.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Same value with trailing fractional zeros removed.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let (coefficient, scale) = exact::strip_zeros(self.coefficient.clone(), self.scale);
        Self { coefficient, scale }
    }

    /// Lossy conversion for display integrations. Never feed it back into
    /// arithmetic.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or_default()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact quotient.
    ///
    /// Fails with `RoundingRequired` when the quotient has no finite decimal
    /// expansion (e.g. `10 / 3`); use [`Amount::div_to_scale`] for those.
    pub fn checked_div(&self, divisor: &Self) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let (numerator, left_scale) = exact::strip_zeros(self.coefficient.clone(), self.scale);
        let (denominator, right_scale) = exact::strip_zeros(divisor.coefficient.clone(), divisor.scale);
        let common = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = (numerator / &common, denominator / &common);
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        let (twos, fives, rest) = exact::factor_tens(&denominator);
        if !rest.is_one() {
            return Err(MoneyError::RoundingRequired(format!(
                "{self} / {divisor} has no exact decimal quotient"
            )));
        }

        // numerator / (2^twos * 5^fives) == numerator * 2^(k-twos) * 5^(k-fives) / 10^k
        let digits = twos.max(fives);
        let factor = BigInt::from(2u8).pow(digits - twos) * BigInt::from(5u8).pow(digits - fives);
        let coefficient = numerator * factor;

        let scale = i64::from(digits) + i64::from(left_scale) - i64::from(right_scale);
        match u32::try_from(scale) {
            Ok(scale) => Ok(Self::from_minor_units(coefficient, scale)),
            Err(_) => {
                let widen = u32::try_from(-scale).map_err(|_| MoneyError::Overflow)?;
                Ok(Self::from_minor_units(coefficient * exact::pow10(widen), 0))
            }
        }
    }

    /// Quotient with exactly `scale` fractional digits, rounded by `mode`.
    pub fn div_to_scale(&self, divisor: &Self, scale: u32, mode: RoundingMode) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }

        // self / divisor * 10^scale == (a * 10^(scale + sb)) / (b * 10^sa)
        let up = u64::from(scale) + u64::from(divisor.scale);
        let down = u64::from(self.scale);
        let (numerator, denominator) = if up >= down {
            let shift = u32::try_from(up - down).map_err(|_| MoneyError::Overflow)?;
            (&self.coefficient * exact::pow10(shift), divisor.coefficient.clone())
        } else {
            let shift = u32::try_from(down - up).map_err(|_| MoneyError::Overflow)?;
            (self.coefficient.clone(), &divisor.coefficient * exact::pow10(shift))
        };

        let coefficient = exact::div_round(&numerator, &denominator, mode)?;
        Ok(Self::from_minor_units(coefficient, scale))
    }

    // ========================================================================
    // Scale
    // ========================================================================

    /// Rescales to exactly `scale` fractional digits.
    ///
    /// Widening always succeeds. Narrowing rounds with `mode`;
    /// `RoundingMode::Unnecessary` fails with `RoundingRequired` if a non-zero
    /// digit would be dropped.
    pub fn to_scale(&self, scale: u32, mode: RoundingMode) -> MoneyResult<Self> {
        if scale >= self.scale {
            let widened = &self.coefficient * exact::pow10(scale - self.scale);
            return Ok(Self::from_minor_units(widened, scale));
        }

        let divisor = exact::pow10(self.scale - scale);
        let coefficient = exact::div_round(&self.coefficient, &divisor, mode)
            .map_err(|_| MoneyError::RoundingRequired(format!("{self} does not fit scale {scale}")))?;
        Ok(Self::from_minor_units(coefficient, scale))
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.coefficient.cmp(&other.coefficient);
        }
        let (left, right, _) = exact::align(&self.coefficient, self.scale, &other.coefficient, other.scale);
        left.cmp(&right)
    }
}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.coefficient.hash(state);
        normalized.scale.hash(state);
    }
}

/// Exact sum at the wider operand scale, so `1.50 + 1` is `2.50`.
impl Add for &Amount {
    type Output = Amount;

    fn add(self, other: Self) -> Amount {
        let (left, right, scale) = exact::align(&self.coefficient, self.scale, &other.coefficient, other.scale);
        Amount::from_minor_units(left + right, scale)
    }
}

impl Sub for &Amount {
    type Output = Amount;

    fn sub(self, other: Self) -> Amount {
        let (left, right, scale) = exact::align(&self.coefficient, self.scale, &other.coefficient, other.scale);
        Amount::from_minor_units(left - right, scale)
    }
}

/// Exact product; scales add up, so `1.5 * 1.50` is `2.250`.
impl Mul for &Amount {
    type Output = Amount;

    fn mul(self, other: Self) -> Amount {
        Amount::from_minor_units(&self.coefficient * &other.coefficient, self.scale + other.scale)
    }
}

impl Neg for &Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        self.negated()
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.magnitude().to_string();
        if self.is_negative() {
            f.write_str("-")?;
        }
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (integral, fractional) = padded.split_at(padded.len() - scale);
        write!(f, "{integral}.{fractional}")
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl TryFrom<&Amount> for Decimal {
    type Error = MoneyError;

    fn try_from(value: &Amount) -> Result<Self, Self::Error> {
        value.to_decimal()
    }
}

impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
