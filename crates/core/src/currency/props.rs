//! Property-based tests for currency operations.
//!
//! - Formatting: symbol placement and separators follow the descriptor
//! - Allocation: shares always sum to the rounded total

use proptest::prelude::*;
use rust_decimal::Decimal;
use sarraf_shared::{CurrencyId, RoundingMode, SymbolPosition};

use super::allocation::AllocationUtil;
use super::descriptor::{Currency, NewCurrency};
use crate::decimal::props::wide_amount;
use crate::decimal::Amount;

/// Strategy to generate signed amounts with up to 4 fractional digits, mixed
/// with amounts far beyond machine-word range.
fn any_amount() -> impl Strategy<Value = Amount> {
    prop_oneof![
        (-100_000_000_000i64..100_000_000_000i64, 0u32..=4)
            .prop_map(|(units, scale)| Amount::from_decimal(Decimal::new(units, scale))),
        wide_amount(),
    ]
}

/// Strategy to generate decimal places (0 to 4).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=4
}

/// Strategy to generate any symbol position.
fn position() -> impl Strategy<Value = SymbolPosition> {
    prop::sample::select(SymbolPosition::ALL.to_vec())
}

/// Strategy to generate allocation count (1 to 100).
fn allocation_count() -> impl Strategy<Value = usize> {
    1usize..100
}

/// Strategy to generate non-negative ratios with at least one positive.
fn ratios() -> impl Strategy<Value = Vec<Amount>> {
    prop::collection::vec((0i64..10_000, 0u32..=2), 1..10).prop_filter_map(
        "at least one positive ratio",
        |values| {
            let ratios: Vec<Amount> = values
                .into_iter()
                .map(|(v, s)| Amount::from_decimal(Decimal::new(v, s)))
                .collect();
            ratios.iter().any(|r| r.is_positive()).then_some(ratios)
        },
    )
}

fn currency(decimal_places: u32, position: SymbolPosition) -> Currency {
    Currency::new(NewCurrency {
        id: CurrencyId::new(1),
        code: "XTS".into(),
        name: "Test".into(),
        symbol: "¤".into(),
        decimal_places,
        decimal_separator: "·".into(),
        group_separator: "_".into(),
        position,
    })
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The symbol sits where the position rule says, and nowhere for `Hidden`.
    #[test]
    fn prop_format_symbol_placement(
        amount in any_amount(),
        places in decimal_places(),
        position in position(),
    ) {
        let formatted = currency(places, position).format(&amount);
        let number = currency(places, SymbolPosition::Hidden).format(&amount);
        let expected = match position {
            SymbolPosition::Left => format!("¤{number}"),
            SymbolPosition::LeftWithSpace => format!("¤ {number}"),
            SymbolPosition::Right => format!("{number}¤"),
            SymbolPosition::RightWithSpace => format!("{number} ¤"),
            SymbolPosition::Hidden => number.clone(),
        };
        prop_assert_eq!(formatted, expected);
        prop_assert!(!number.contains('¤'));
    }

    /// Exactly `decimal_places` fractional digits after the separator.
    #[test]
    fn prop_format_fixed_width(amount in any_amount(), places in decimal_places()) {
        let number = currency(places, SymbolPosition::Hidden).format(&amount);
        match number.split_once('·') {
            Some((_, fraction)) => {
                prop_assert_eq!(fraction.len(), places as usize);
                prop_assert!(fraction.bytes().all(|b| b.is_ascii_digit()));
            }
            None => prop_assert_eq!(places, 0),
        }
    }

    /// Removing group separators gives back the rounded amount.
    #[test]
    fn prop_format_matches_rounded_value(amount in any_amount(), places in decimal_places()) {
        let number = currency(places, SymbolPosition::Hidden).format(&amount);
        let plain = number.replace('_', "").replace('·', ".");
        let expected = amount.to_scale(places, RoundingMode::HalfUp).unwrap();
        prop_assert_eq!(plain, expected.to_string());
    }

    /// Equal allocation sum equals the total rounded to the currency scale.
    #[test]
    fn prop_allocate_equal_sum_invariant(
        total in any_amount(),
        count in allocation_count(),
        places in decimal_places(),
    ) {
        let shares = AllocationUtil::allocate_equal(&total, count, places).unwrap();
        prop_assert_eq!(shares.len(), count);
        let sum = shares.iter().fold(Amount::zero(), |acc, s| &acc + s);
        prop_assert_eq!(sum, total.to_scale(places, RoundingMode::HalfEven).unwrap());

        // Shares differ by at most one unit.
        let unit = Amount::from_minor_units(1, places);
        let max = shares.iter().max().unwrap();
        let min = shares.iter().min().unwrap();
        prop_assert!(max - min <= unit);
    }

    /// Ratio allocation sum equals the rounded total, and zero weights get zero.
    #[test]
    fn prop_allocate_by_ratios_sum_invariant(
        total in any_amount(),
        ratios in ratios(),
        places in decimal_places(),
    ) {
        let shares = AllocationUtil::allocate_by_ratios(&total, &ratios, places).unwrap();
        prop_assert_eq!(shares.len(), ratios.len());
        let sum = shares.iter().fold(Amount::zero(), |acc, s| &acc + s);
        prop_assert_eq!(sum, total.to_scale(places, RoundingMode::HalfEven).unwrap());
        for (share, ratio) in shares.iter().zip(&ratios) {
            if ratio.is_zero() {
                prop_assert!(share.is_zero());
            }
        }
    }
}
