//! Exact decimal engine.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! [`Amount`] is an arbitrary-precision decimal (`BigInt` coefficient plus a
//! scale) and no operation silently drops a digit:
//! - add, subtract, and multiply are always exact
//! - divide is exact or fails with `RoundingRequired`
//! - rescaling only rounds when a `RoundingMode` allows it
//!
//! `rust_decimal::Decimal` values convert in losslessly and back out when they
//! fit its 96-bit range.

mod amount;
mod exact;
mod parse;

#[cfg(test)]
pub(crate) mod props;

pub use amount::Amount;
pub use exact::MAX_SCALE;
pub use parse::IntoAmount;
