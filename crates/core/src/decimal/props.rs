//! Property-based tests for the decimal engine.
//!
//! - Exactness: add/sub and mul/div round-trips lose nothing, at any magnitude
//! - Rescale: idempotent, bounded by one unit, agrees with division

use proptest::prelude::*;
use rust_decimal::Decimal;
use sarraf_shared::RoundingMode;

use super::Amount;

/// Strategy to generate signed amounts with up to 6 fractional digits.
fn small_amount() -> impl Strategy<Value = Amount> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(units, scale)| Amount::from_decimal(Decimal::new(units, scale)))
}

/// Strategy to generate amounts far outside machine-word range: up to 40
/// integer digits and 20 to 36 fractional digits.
pub fn wide_amount() -> impl Strategy<Value = Amount> {
    ("[0-9]{1,40}", "[0-9]{20,36}", any::<bool>()).prop_map(|(integral, fractional, negative)| {
        let sign = if negative { "-" } else { "" };
        format!("{sign}{integral}.{fractional}").parse().unwrap()
    })
}

/// Strategy mixing everyday and extreme amounts.
pub fn any_amount() -> impl Strategy<Value = Amount> {
    prop_oneof![small_amount(), wide_amount()]
}

/// Strategy to generate non-zero amounts with up to 4 fractional digits.
fn non_zero_amount() -> impl Strategy<Value = Amount> {
    (1i64..10_000_000i64, 0u32..=4, any::<bool>()).prop_map(|(units, scale, negative)| {
        let units = if negative { -units } else { units };
        Amount::from_decimal(Decimal::new(units, scale))
    })
}

/// Strategy to pick any rounding mode that actually rounds.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(vec![
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// (a + b) - b == a, exactly.
    #[test]
    fn prop_add_sub_identity(a in any_amount(), b in any_amount()) {
        let back = &(&a + &b) - &b;
        prop_assert_eq!(back, a);
    }

    /// Addition commutes.
    #[test]
    fn prop_add_commutes(a in any_amount(), b in any_amount()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    /// (a * b) / b == a for non-zero b.
    #[test]
    fn prop_mul_div_identity(a in any_amount(), b in non_zero_amount()) {
        let product = &a * &b;
        prop_assert_eq!(product.checked_div(&b).unwrap(), a);
    }

    /// Rounding twice with the same mode equals rounding once.
    #[test]
    fn prop_to_scale_idempotent(a in any_amount(), scale in 0u32..=30, mode in rounding_mode()) {
        let once = a.to_scale(scale, mode).unwrap();
        let twice = once.to_scale(scale, mode).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.scale(), scale);
    }

    /// A rounded value is within one unit of the last place of the original.
    #[test]
    fn prop_to_scale_within_one_unit(a in any_amount(), scale in 0u32..=30, mode in rounding_mode()) {
        let rounded = a.to_scale(scale, mode).unwrap();
        let unit = Amount::from_minor_units(1, scale);
        let distance = (&rounded - &a).abs();
        prop_assert!(distance < unit, "{} -> {} moved by {}", a, rounded, distance);
    }

    /// Dividing by one to a scale is the same as rescaling.
    #[test]
    fn prop_div_to_scale_by_one_matches_to_scale(
        a in any_amount(),
        scale in 0u32..=30,
        mode in rounding_mode(),
    ) {
        let divided = a.div_to_scale(&Amount::one(), scale, mode).unwrap();
        prop_assert_eq!(divided, a.to_scale(scale, mode).unwrap());
    }

    /// Exact division agrees with scaled division whenever it succeeds.
    #[test]
    fn prop_exact_div_matches_scaled(a in any_amount(), b in non_zero_amount()) {
        if let Ok(exact) = a.checked_div(&b) {
            let scaled = a.div_to_scale(&b, exact.scale(), RoundingMode::Unnecessary).unwrap();
            prop_assert_eq!(exact, scaled);
        }
    }

    /// Half-even never differs from half-up by more than one unit, and only on ties.
    #[test]
    fn prop_half_even_vs_half_up(a in any_amount(), scale in 0u32..=30) {
        let up = a.to_scale(scale, RoundingMode::HalfUp).unwrap();
        let even = a.to_scale(scale, RoundingMode::HalfEven).unwrap();
        if up != even {
            let down = a.to_scale(scale, RoundingMode::HalfDown).unwrap();
            prop_assert_eq!(even, down);
        }
    }

    /// Display output parses back to the same digits.
    #[test]
    fn prop_display_parses_back(a in any_amount()) {
        let text = a.to_string();
        let back: Amount = text.parse().unwrap();
        prop_assert_eq!(back.to_string(), text);
    }
}
