//! Money values: an exact amount tagged with a shared currency.
//!
//! A [`Money`] never truncates silently. Construction applies a [`Context`]
//! with an explicit rounding mode (default `Unnecessary`), arithmetic is exact,
//! and any step that would drop digits fails with `RoundingRequired` unless
//! the caller names a mode that permits rounding.
//!
//! Operations that combine two values (`add`, `subtract`, comparisons,
//! `min`/`max`) check [`Currency::is_same_as`] first and fail with
//! `CurrencyMismatch` otherwise.

mod context;

#[cfg(test)]
mod props;

pub use context::Context;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use sarraf_shared::{CurrencyId, MoneyError, MoneyResult, RoundingMode};
use serde::Serialize;

use crate::currency::{AllocationUtil, Currency, ExchangeRate};
use crate::decimal::{Amount, IntoAmount};

/// An immutable monetary amount.
#[derive(Debug, Clone)]
pub struct Money {
    amount: Amount,
    currency: Arc<Currency>,
    context: Context,
}

impl Money {
    /// Builds a money value at the currency's canonical scale.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for unparseable input, `RoundingRequired` if the amount
    /// has more fractional digits than the currency allows.
    pub fn of<A: IntoAmount>(amount: A, currency: &Arc<Currency>) -> MoneyResult<Self> {
        Self::of_with_context(amount, currency, Context::Default, RoundingMode::Unnecessary)
    }

    /// Builds a money value under `context`, rounding with `mode`.
    ///
    /// # Errors
    ///
    /// See [`Context::apply`].
    pub fn of_with_context<A: IntoAmount>(
        amount: A,
        currency: &Arc<Currency>,
        context: Context,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let amount = context.apply(amount.into_amount()?, currency, mode)?;
        Ok(Self {
            amount,
            currency: Arc::clone(currency),
            context,
        })
    }

    /// Zero at the currency's canonical scale.
    #[must_use]
    pub fn zero(currency: &Arc<Currency>) -> Self {
        Self {
            amount: Amount::from_minor_units(0, currency.decimal_places()),
            currency: Arc::clone(currency),
            context: Context::Default,
        }
    }

    /// The exact amount.
    #[must_use]
    pub const fn amount(&self) -> &Amount {
        &self.amount
    }

    /// The currency descriptor.
    #[must_use]
    pub const fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// The construction context.
    #[must_use]
    pub const fn context(&self) -> Context {
        self.context
    }

    /// Same currency and context, new amount.
    fn with_amount(&self, amount: Amount) -> Self {
        Self {
            amount,
            currency: Arc::clone(&self.currency),
            context: self.context,
        }
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency.is_same_as(&other.currency) {
            return Ok(());
        }
        tracing::debug!(
            expected = %self.currency.code(),
            found = %other.currency.code(),
            "rejected cross-currency operation"
        );
        Err(MoneyError::mismatch(self.currency.code(), other.currency.code()))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact sum. Keeps this value's currency and context.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for a different currency.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(self.with_amount(&self.amount + &other.amount))
    }

    /// Exact difference. Keeps this value's currency and context.
    ///
    /// # Errors
    ///
    /// Same as [`Money::add`].
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(self.with_amount(&self.amount - &other.amount))
    }

    /// Exact product with a plain number.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for an unparseable factor.
    pub fn multiply<A: IntoAmount>(&self, factor: A) -> MoneyResult<Self> {
        Ok(self.with_amount(&self.amount * &factor.into_amount()?))
    }

    /// Exact quotient by a plain number.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero divisor, `RoundingRequired` when the
    /// quotient has no finite decimal expansion.
    pub fn divide<A: IntoAmount>(&self, divisor: A) -> MoneyResult<Self> {
        Ok(self.with_amount(self.amount.checked_div(&divisor.into_amount()?)?))
    }

    /// Quotient at the currency's canonical scale, rounded with `mode`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero divisor; `RoundingRequired` if `mode` is
    /// `Unnecessary` and the quotient does not fit.
    pub fn divide_rounded<A: IntoAmount>(&self, divisor: A, mode: RoundingMode) -> MoneyResult<Self> {
        let quotient = self
            .amount
            .div_to_scale(&divisor.into_amount()?, self.currency.decimal_places(), mode)?;
        Ok(self.with_amount(quotient))
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_amount(self.amount.abs())
    }

    /// Sign-flipped value.
    #[must_use]
    pub fn negated(&self) -> Self {
        self.with_amount(self.amount.negated())
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// True iff the currency codes match and the amounts are numerically
    /// equal, so `1.50 USD` equals `1.5 USD`.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.currency.code() == other.currency.code() && self.amount == other.amount
    }

    /// Numeric comparison within one currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for a different currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.compare(&other.amount))
    }

    /// Returns true if `self` is strictly greater.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for a different currency.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns true if `self` is strictly less.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for a different currency.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// The smaller value: `self` if strictly less, otherwise `other`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for a different currency.
    pub fn min(&self, other: &Self) -> MoneyResult<Self> {
        Ok(if self.less_than(other)? { self.clone() } else { other.clone() })
    }

    /// The larger value: `self` if strictly greater, otherwise `other`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` for a different currency.
    pub fn max(&self, other: &Self) -> MoneyResult<Self> {
        Ok(if self.greater_than(other)? { self.clone() } else { other.clone() })
    }

    // ========================================================================
    // Rounding and conversion
    // ========================================================================

    /// Rescales to the currency's canonical scale with `mode`.
    ///
    /// # Errors
    ///
    /// `RoundingRequired` only for `RoundingMode::Unnecessary` on an inexact
    /// value. Every other mode succeeds at any magnitude.
    pub fn rounded(&self, mode: RoundingMode) -> MoneyResult<Self> {
        Ok(self.with_amount(self.amount.to_scale(self.currency.decimal_places(), mode)?))
    }

    /// [`Money::rounded`] with `HalfUp`.
    ///
    /// # Errors
    ///
    /// None in practice: `HalfUp` always has a result.
    pub fn round(&self) -> MoneyResult<Self> {
        self.rounded(RoundingMode::HalfUp)
    }

    /// Multiplies by `rate` and retags the result in `target`.
    ///
    /// No rescale happens, and nothing checks that `rate` is a real market
    /// rate.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for an unparseable rate.
    pub fn convert_to<A: IntoAmount>(&self, target: &Arc<Currency>, rate: A) -> MoneyResult<Self> {
        let rate = rate.into_amount()?;
        let amount = &self.amount * &rate;
        tracing::debug!(
            from = %self.currency.code(),
            to = %target.code(),
            %rate,
            "converted money"
        );
        Ok(Self {
            amount,
            currency: Arc::clone(target),
            context: self.context,
        })
    }

    /// Converts using an [`ExchangeRate`] whose codes must match both sides.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the rate's source is not this currency or its
    /// target is not `target`; otherwise as [`Money::convert_to`].
    pub fn convert_with(&self, rate: &ExchangeRate, target: &Arc<Currency>) -> MoneyResult<Self> {
        for (expected, found) in [
            (self.currency.code(), rate.from_currency.as_str()),
            (target.code(), rate.to_currency.as_str()),
        ] {
            if expected != found {
                tracing::debug!(expected, found, "exchange rate does not match currencies");
                return Err(MoneyError::mismatch(expected, found));
            }
        }
        self.convert_to(target, &rate.rate)
    }

    // ========================================================================
    // Allocation
    // ========================================================================

    /// Splits into `parts` shares at the canonical scale.
    ///
    /// The earlier shares take the extra minor units, so `100 USD / 3` is
    /// `[33.34, 33.33, 33.33]`.
    ///
    /// # Errors
    ///
    /// `InvalidAllocation` for zero parts.
    pub fn split(&self, parts: usize) -> MoneyResult<Vec<Self>> {
        let shares = AllocationUtil::allocate_equal(&self.amount, parts, self.currency.decimal_places())?;
        Ok(shares.into_iter().map(|share| self.with_amount(share)).collect())
    }

    /// Distributes by non-negative `ratios` with the largest-remainder
    /// method. Shares sum exactly to the amount at the canonical scale.
    ///
    /// # Errors
    ///
    /// `InvalidAllocation` for an empty, negative, or all-zero ratio list;
    /// `InvalidAmount` for an unparseable ratio.
    pub fn allocate<I>(&self, ratios: I) -> MoneyResult<Vec<Self>>
    where
        I: IntoIterator,
        I::Item: IntoAmount,
    {
        let ratios = ratios
            .into_iter()
            .map(IntoAmount::into_amount)
            .collect::<MoneyResult<Vec<_>>>()?;
        let shares =
            AllocationUtil::allocate_by_ratios(&self.amount, &ratios, self.currency.decimal_places())?;
        Ok(shares.into_iter().map(|share| self.with_amount(share)).collect())
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Formats with the currency's separators, scale, and symbol.
    #[must_use]
    pub fn format(&self) -> String {
        self.currency.format(&self.amount)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Wire shape of a money value.
#[derive(Serialize)]
struct MoneySnapshot<'a> {
    amount: &'a Amount,
    currency: CurrencySnapshot<'a>,
}

#[derive(Serialize)]
struct CurrencySnapshot<'a> {
    id: CurrencyId,
    code: &'a str,
    name: &'a str,
    symbol: &'a str,
}

impl Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneySnapshot {
            amount: &self.amount,
            currency: CurrencySnapshot {
                id: self.currency.id(),
                code: self.currency.code(),
                name: self.currency.name(),
                symbol: self.currency.symbol(),
            },
        }
        .serialize(serializer)
    }
}
