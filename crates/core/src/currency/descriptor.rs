//! Currency descriptor: identity plus display conventions.

use sarraf_shared::{CurrencyId, CurrencySettings, MoneyError, MoneyResult, SymbolPosition};

use super::format::Formatter;
use crate::decimal::{Amount, MAX_SCALE};

/// Input for creating a [`Currency`].
#[derive(Debug, Clone)]
pub struct NewCurrency {
    /// Stable identifier.
    pub id: CurrencyId,
    /// Currency code in any case, e.g. `usd`.
    pub code: String,
    /// Display name, e.g. `US Dollar`.
    pub name: String,
    /// Display symbol, e.g. `$`.
    pub symbol: String,
    /// Canonical number of fractional digits.
    pub decimal_places: u32,
    /// Separator between integer and fractional digits.
    pub decimal_separator: String,
    /// Separator between groups of three integer digits.
    pub group_separator: String,
    /// Symbol placement.
    pub position: SymbolPosition,
}

impl Default for NewCurrency {
    fn default() -> Self {
        Self {
            id: CurrencyId::new(0),
            code: String::new(),
            name: String::new(),
            symbol: String::new(),
            decimal_places: 2,
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            position: SymbolPosition::Left,
        }
    }
}

impl From<&CurrencySettings> for NewCurrency {
    fn from(settings: &CurrencySettings) -> Self {
        Self {
            id: settings.id,
            code: settings.code.clone(),
            name: settings.name.clone(),
            symbol: settings.symbol.clone(),
            decimal_places: settings.decimal_places,
            decimal_separator: settings.decimal_separator.clone(),
            group_separator: settings.group_separator.clone(),
            position: settings.position,
        }
    }
}

/// Immutable description of a currency.
///
/// Share it as `Arc<Currency>`; every `Money` built from it keeps a reference
/// instead of a copy.
#[derive(Debug, Clone)]
pub struct Currency {
    id: CurrencyId,
    code: String,
    name: String,
    symbol: String,
    decimal_places: u32,
    decimal_separator: String,
    group_separator: String,
    position: SymbolPosition,
}

impl Currency {
    /// Creates a currency, upper-casing the code.
    ///
    /// # Errors
    ///
    /// `InvalidCurrency` if the code is blank or `decimal_places` exceeds
    /// [`MAX_SCALE`].
    pub fn new(input: NewCurrency) -> MoneyResult<Self> {
        let code = input.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(MoneyError::InvalidCurrency("code must not be empty".into()));
        }
        if input.decimal_places > MAX_SCALE {
            return Err(MoneyError::InvalidCurrency(format!(
                "{code}: decimal places {} exceed {MAX_SCALE}",
                input.decimal_places
            )));
        }

        Ok(Self {
            id: input.id,
            code,
            name: input.name,
            symbol: input.symbol,
            decimal_places: input.decimal_places,
            decimal_separator: input.decimal_separator,
            group_separator: input.group_separator,
            position: input.position,
        })
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> CurrencyId {
        self.id
    }

    /// Upper-case currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Canonical number of fractional digits.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Separator between integer and fractional digits.
    #[must_use]
    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    /// Separator between groups of three integer digits.
    #[must_use]
    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }

    /// Symbol placement.
    #[must_use]
    pub const fn position(&self) -> SymbolPosition {
        self.position
    }

    /// Formatter carrying this currency's display rules.
    #[must_use]
    pub fn formatter(&self) -> Formatter<'_> {
        Formatter {
            decimal_places: self.decimal_places,
            decimal_separator: &self.decimal_separator,
            group_separator: &self.group_separator,
            symbol: &self.symbol,
            position: self.position,
        }
    }

    /// Formats `amount` with this currency's separators, scale, and symbol.
    #[must_use]
    pub fn format(&self, amount: &Amount) -> String {
        self.formatter().format(amount)
    }

    /// Returns true if both describe the same currency.
    ///
    /// Same allocation, or same `id` and `code`. Symmetric: which side is the
    /// stored record and which is built on the fly does not matter.
    #[must_use]
    pub fn is_same_as(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.id == other.id && self.code == other.code)
    }
}

impl TryFrom<&CurrencySettings> for Currency {
    type Error = MoneyError;

    fn try_from(settings: &CurrencySettings) -> Result<Self, Self::Error> {
        Self::new(NewCurrency::from(settings))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
