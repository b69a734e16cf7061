//! Rendering amounts as display strings.
//!
//! Output is always fixed width: exactly `decimal_places` fractional digits,
//! trailing zeros kept (`$1,200.00`, not `$1,200`). Amounts with more digits
//! are rounded half-up for display only. A negative sign stays on the number,
//! so a left symbol renders as `$-5.00`.

use sarraf_shared::SymbolPosition;

use crate::decimal::Amount;

/// Display rules for one currency.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    /// Fractional digits to render.
    pub decimal_places: u32,
    /// Separator between integer and fractional digits.
    pub decimal_separator: &'a str,
    /// Separator between groups of three integer digits.
    pub group_separator: &'a str,
    /// Currency symbol.
    pub symbol: &'a str,
    /// Symbol placement.
    pub position: SymbolPosition,
}

impl Formatter<'_> {
    /// Number with separators and symbol, e.g. `$1,234.50`.
    #[must_use]
    pub fn format(&self, amount: &Amount) -> String {
        place_symbol(&self.format_number(amount), self.symbol, self.position)
    }

    /// Number with separators only, e.g. `1,234.50`.
    ///
    /// Works on the exact digit string, so any magnitude and scale renders
    /// with exactly `decimal_places` fractional digits.
    #[must_use]
    pub fn format_number(&self, amount: &Amount) -> String {
        let places = self.decimal_places as usize;
        let text = amount.abs().to_string();
        let (integral, fractional) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let digits = round_half_up(integral, fractional, places);
        let (integral, fractional) = digits.split_at(digits.len() - places);

        let mut out = String::with_capacity(digits.len() + integral.len() / 3 * self.group_separator.len() + 2);
        if amount.is_negative() && digits.bytes().any(|d| d != b'0') {
            out.push('-');
        }
        out.push_str(&group_digits(integral, self.group_separator));
        if !fractional.is_empty() {
            out.push_str(self.decimal_separator);
            out.push_str(fractional);
        }
        out
    }
}

/// Keeps `places` fractional digits of an unsigned decimal, padding with zeros
/// or rounding half-up on the dropped digits. Returns the digits without a
/// separator; the last `places` of them are fractional.
fn round_half_up(integral: &str, fractional: &str, places: usize) -> String {
    let mut digits: Vec<u8> = integral.bytes().collect();
    digits.extend(fractional.bytes().chain(std::iter::repeat(b'0')).take(places));

    if fractional.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let carry = digits.iter_mut().rev().all(|d| {
            if *d == b'9' {
                *d = b'0';
                true
            } else {
                *d += 1;
                false
            }
        });
        if carry {
            digits.insert(0, b'1');
        }
    }
    digits.into_iter().map(char::from).collect()
}

/// Inserts `separator` between runs of three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

/// Applies a symbol placement rule to an already formatted number.
#[must_use]
pub fn place_symbol(number: &str, symbol: &str, position: SymbolPosition) -> String {
    match position {
        SymbolPosition::Left => format!("{symbol}{number}"),
        SymbolPosition::LeftWithSpace => format!("{symbol} {number}"),
        SymbolPosition::Right => format!("{number}{symbol}"),
        SymbolPosition::RightWithSpace => format!("{number} {symbol}"),
        SymbolPosition::Hidden => number.to_string(),
    }
}
