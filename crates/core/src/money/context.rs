//! Scale and step policies applied when a [`Money`](super::Money) is built.

use sarraf_shared::{MoneyError, MoneyResult, RoundingMode};

use crate::currency::Currency;
use crate::decimal::{Amount, MAX_SCALE};

/// Construction policy for a money amount.
///
/// `step` counts minor units of the target scale: a cash step of `5` at
/// two places allows only multiples of `0.05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// The currency's canonical scale, step 1.
    #[default]
    Default,
    /// The currency's canonical scale with a cash rounding step.
    Cash {
        /// Smallest allowed increment, in minor units.
        step: u32,
    },
    /// Explicit scale and step, independent of the currency.
    Custom {
        /// Fractional digits to keep.
        scale: u32,
        /// Smallest allowed increment, in minor units.
        step: u32,
    },
    /// No scale constraint. Trailing zeros are stripped and no rounding is
    /// ever applied.
    Auto,
}

impl Context {
    /// Constrains `amount` to this context, rounding with `mode`.
    ///
    /// # Errors
    ///
    /// - `InvalidContext` for a zero step, a scale above [`MAX_SCALE`], or
    ///   `Auto` combined with any mode other than `Unnecessary`.
    /// - `RoundingRequired` when `mode` is `Unnecessary` and the amount does
    ///   not fit.
    pub fn apply(self, amount: Amount, currency: &Currency, mode: RoundingMode) -> MoneyResult<Amount> {
        match self {
            Self::Default => amount.to_scale(currency.decimal_places(), mode),
            Self::Cash { step } => stepped(&amount, currency.decimal_places(), step, mode),
            Self::Custom { scale, step } => {
                if scale > MAX_SCALE {
                    return Err(MoneyError::InvalidContext(format!(
                        "scale {scale} exceeds {MAX_SCALE}"
                    )));
                }
                stepped(&amount, scale, step, mode)
            }
            Self::Auto => {
                if mode != RoundingMode::Unnecessary {
                    return Err(MoneyError::InvalidContext(format!(
                        "auto context cannot round ({mode})"
                    )));
                }
                Ok(amount.normalize())
            }
        }
    }
}

/// `(amount / step)` rounded to `scale`, multiplied back by `step`.
fn stepped(amount: &Amount, scale: u32, step: u32, mode: RoundingMode) -> MoneyResult<Amount> {
    match step {
        0 => Err(MoneyError::InvalidContext("step must be positive".into())),
        1 => amount.to_scale(scale, mode),
        _ => {
            let step = Amount::from_minor_units(step, 0);
            let steps = amount.div_to_scale(&step, scale, mode)?;
            (&steps * &step).to_scale(scale, RoundingMode::Unnecessary)
        }
    }
}
