//! Amount allocation utilities using Largest Remainder Method.
//!
//! This module provides functions for allocating amounts fairly while
//! ensuring the sum exactly equals the original total (no cents lost).
//!
//! The Largest Remainder Method works by:
//! 1. Calculate exact allocations
//! 2. Round down each allocation
//! 3. Calculate the remainder (total - sum of rounded)
//! 4. Distribute remainder units to items with largest fractional parts
//!
//! All work happens on integer minor units, so the remainders being compared
//! are exact.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use sarraf_shared::{MoneyError, MoneyResult, RoundingMode};

use crate::decimal::Amount;

/// Allocation utility for distributing amounts.
///
/// Uses the Largest Remainder Method to ensure:
/// - Fair distribution of amounts
/// - Sum of allocations EXACTLY equals the original total
/// - No cents are lost or gained
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate amount equally across N recipients.
    ///
    /// The total is first rounded half-even to `decimal_places`. The first
    /// recipients take one extra unit each until the remainder is used up.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use sarraf_core::currency::AllocationUtil;
    /// use sarraf_core::decimal::Amount;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let total = Amount::from_decimal(dec!(100));
    /// let result = AllocationUtil::allocate_equal(&total, 3, 2).unwrap();
    /// assert_eq!(result[0].to_string(), "33.34");
    /// ```
    pub fn allocate_equal(total: &Amount, count: usize, decimal_places: u32) -> MoneyResult<Vec<Amount>> {
        if count == 0 {
            return Err(MoneyError::InvalidAllocation("cannot split into zero parts".into()));
        }

        let units = minor_units(total, decimal_places)?;
        let (base, rest) = units.div_rem(&BigInt::from(count));
        let extra = usize::try_from(rest.magnitude()).map_err(|_| MoneyError::Overflow)?;
        let bumped = &base + units.signum();

        Ok((0..count)
            .map(|i| {
                let share = if i < extra { bumped.clone() } else { base.clone() };
                Amount::from_minor_units(share, decimal_places)
            })
            .collect())
    }

    /// Allocate by ratios using Largest Remainder Method.
    ///
    /// Ratios are non-negative weights of any scale (`[50, 30, 20]`,
    /// `[1, 1, 2]`, `[0.5, 0.25, 0.25]`). Ties on the remainder go to the
    /// earlier recipient.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use sarraf_core::currency::AllocationUtil;
    /// use sarraf_core::decimal::Amount;
    ///
    /// // 100 split 50%/30%/20%
    /// let ratios = [dec!(50), dec!(30), dec!(20)].map(Amount::from_decimal);
    /// let result = AllocationUtil::allocate_by_ratios(&Amount::from_decimal(dec!(100)), &ratios, 2).unwrap();
    /// assert_eq!(result.iter().map(ToString::to_string).collect::<Vec<_>>(), ["50.00", "30.00", "20.00"]);
    /// ```
    pub fn allocate_by_ratios(
        total: &Amount,
        ratios: &[Amount],
        decimal_places: u32,
    ) -> MoneyResult<Vec<Amount>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidAllocation("no ratios given".into()));
        }
        if ratios.iter().any(Amount::is_negative) {
            return Err(MoneyError::InvalidAllocation("ratios must not be negative".into()));
        }

        // Scale every ratio to the same integer weight.
        let ratio_scale = ratios.iter().map(|r| r.normalize().scale()).max().unwrap_or(0);
        let weights = ratios
            .iter()
            .map(|ratio| Ok(ratio.to_scale(ratio_scale, RoundingMode::Unnecessary)?.coefficient().clone()))
            .collect::<MoneyResult<Vec<BigInt>>>()?;
        let weight_sum: BigInt = weights.iter().sum();
        if weight_sum.is_zero() {
            return Err(MoneyError::InvalidAllocation("ratios must not all be zero".into()));
        }

        let units = minor_units(total, decimal_places)?;
        let magnitude = units.abs();

        // Exact shares are magnitude * w / sum; keep floor and remainder.
        let mut shares = Vec::with_capacity(weights.len());
        let mut remainders = Vec::with_capacity(weights.len());
        for (i, weight) in weights.iter().enumerate() {
            let (share, remainder) = (&magnitude * weight).div_rem(&weight_sum);
            shares.push(share);
            remainders.push((i, remainder));
        }

        let allocated: BigInt = shares.iter().sum();
        let leftover = usize::try_from(&magnitude - allocated).map_err(|_| MoneyError::Overflow)?;

        // Stable sort keeps the earlier recipient first on equal remainders.
        remainders.sort_by(|a, b| b.1.cmp(&a.1));
        for (idx, _) in remainders.iter().take(leftover) {
            shares[*idx] += BigInt::one();
        }

        let negative = units.is_negative();
        Ok(shares
            .into_iter()
            .map(|share| Amount::from_minor_units(if negative { -share } else { share }, decimal_places))
            .collect())
    }
}

/// Total rounded half-even to `decimal_places`, as an integer count of units.
fn minor_units(total: &Amount, decimal_places: u32) -> MoneyResult<BigInt> {
    Ok(total.to_scale(decimal_places, RoundingMode::HalfEven)?.coefficient().clone())
}
