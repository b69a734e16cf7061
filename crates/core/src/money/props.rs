//! Property-based tests for money values.
//!
//! - Add then subtract returns the original value, at any magnitude
//! - Rounding is idempotent
//! - Cross-currency operations always fail

use std::sync::Arc;

use proptest::prelude::*;
use sarraf_shared::{CurrencyId, MoneyError, RoundingMode};

use super::{Context, Money};
use crate::currency::{Currency, NewCurrency};
use crate::decimal::Amount;
use crate::decimal::props::{any_amount, wide_amount};

fn currency(id: u64, code: &str) -> Arc<Currency> {
    Arc::new(
        Currency::new(NewCurrency {
            id: CurrencyId::new(id),
            code: code.into(),
            symbol: code.into(),
            ..NewCurrency::default()
        })
        .unwrap(),
    )
}

/// Strategy to generate any rounding mode except `Unnecessary`.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(
        RoundingMode::ALL
            .iter()
            .copied()
            .filter(|mode| *mode != RoundingMode::Unnecessary)
            .collect::<Vec<_>>(),
    )
}

fn auto(amount: Amount, currency: &Arc<Currency>) -> Money {
    Money::of_with_context(amount, currency, Context::Auto, RoundingMode::Unnecessary).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// `a + b - b == a`
    #[test]
    fn prop_add_subtract_identity(a in any_amount(), b in any_amount()) {
        let usd = currency(1, "USD");
        let a = auto(a, &usd);
        let b = auto(b, &usd);
        prop_assert!(a.add(&b).unwrap().subtract(&b).unwrap().equals(&a));
    }

    /// `a + b - b == a` when both sides carry 20+ fractional digits and
    /// integer parts past any machine word.
    #[test]
    fn prop_add_subtract_identity_wide(a in wide_amount(), b in wide_amount()) {
        let usd = currency(1, "USD");
        let a = auto(a, &usd);
        let b = auto(b, &usd);
        prop_assert!(a.add(&b).unwrap().subtract(&b).unwrap().equals(&a));
    }

    /// Addition does not depend on operand order.
    #[test]
    fn prop_add_commutative(a in any_amount(), b in any_amount()) {
        let usd = currency(1, "USD");
        let a = auto(a, &usd);
        let b = auto(b, &usd);
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    /// `rounded(mode)` applied twice equals applying it once.
    #[test]
    fn prop_rounding_idempotent(a in any_amount(), mode in rounding_mode()) {
        let usd = currency(1, "USD");
        let once = auto(a, &usd).rounded(mode).unwrap();
        let twice = once.rounded(mode).unwrap();
        prop_assert_eq!(once.amount().scale(), 2);
        prop_assert_eq!(twice.amount().to_string(), once.amount().to_string());
    }

    /// Rounding succeeds and is idempotent for extreme magnitudes and scales.
    #[test]
    fn prop_rounding_idempotent_wide(a in wide_amount(), mode in rounding_mode()) {
        let usd = currency(1, "USD");
        let once = auto(a, &usd).rounded(mode).unwrap();
        let twice = once.rounded(mode).unwrap();
        prop_assert_eq!(once.amount().scale(), 2);
        prop_assert_eq!(twice.amount().to_string(), once.amount().to_string());
    }

    /// Rounding never moves the value by a full minor unit or more.
    #[test]
    fn prop_rounding_within_one_unit(a in any_amount(), mode in rounding_mode()) {
        let usd = currency(1, "USD");
        let rounded = auto(a.clone(), &usd).rounded(mode).unwrap();
        let delta = (rounded.amount() - &a).abs();
        prop_assert!(delta < Amount::from_minor_units(1, 2));
    }

    /// Every currency-checked operation fails across currencies.
    #[test]
    fn prop_cross_currency_rejected(a in any_amount(), b in any_amount()) {
        let a = auto(a, &currency(1, "USD"));
        let b = auto(b, &currency(2, "EUR"));
        let mismatch = |result: Result<(), MoneyError>| {
            matches!(result, Err(MoneyError::CurrencyMismatch { .. }))
        };
        prop_assert!(mismatch(a.add(&b).map(drop)));
        prop_assert!(mismatch(a.subtract(&b).map(drop)));
        prop_assert!(mismatch(a.greater_than(&b).map(drop)));
        prop_assert!(mismatch(a.less_than(&b).map(drop)));
        prop_assert!(mismatch(a.min(&b).map(drop)));
        prop_assert!(mismatch(a.max(&b).map(drop)));
    }

    /// Split shares always sum to the rounded amount.
    #[test]
    fn prop_split_sums_to_rounded_amount(a in any_amount(), parts in 1usize..50) {
        let usd = currency(1, "USD");
        let money = auto(a, &usd);
        let total = money
            .split(parts)
            .unwrap()
            .iter()
            .try_fold(Money::zero(&usd), |acc, share| acc.add(share))
            .unwrap();
        prop_assert!(total.equals(&money.rounded(RoundingMode::HalfEven).unwrap()));
    }

    /// min returns one of its operands and never exceeds max.
    #[test]
    fn prop_min_not_greater_than_max(a in any_amount(), b in any_amount()) {
        let usd = currency(1, "USD");
        let a = auto(a, &usd);
        let b = auto(b, &usd);
        let min = a.min(&b).unwrap();
        let max = a.max(&b).unwrap();
        prop_assert!(!min.greater_than(&max).unwrap());
        prop_assert!(min.equals(&a) || min.equals(&b));
    }
}
