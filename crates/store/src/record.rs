//! Persisted shape of a currency.
//!
//! Column names follow the `currencies` table: `decimal` holds the canonical
//! scale and `currency_position` the symbol placement as its wire string.

use chrono::{DateTime, Utc};
use sarraf_core::currency::{Currency, NewCurrency};
use sarraf_shared::{CurrencyId, CurrencySettings, MoneyError, SymbolPosition};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// One row of the currency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// Primary key.
    pub id: CurrencyId,
    /// Currency code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Display symbol.
    pub symbol: String,
    /// Canonical number of fractional digits.
    pub decimal: u32,
    /// Separator between integer and fractional digits.
    pub decimal_separator: String,
    /// Separator between groups of three integer digits.
    pub group_separator: String,
    /// Symbol placement, e.g. `left-with-space`.
    pub currency_position: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last changed.
    pub updated_at: DateTime<Utc>,
}

impl CurrencyRecord {
    /// Builds a record from a currency, stamping both timestamps with `now`.
    #[must_use]
    pub fn from_currency(currency: &Currency, now: DateTime<Utc>) -> Self {
        Self {
            id: currency.id(),
            code: currency.code().to_string(),
            name: currency.name().to_string(),
            symbol: currency.symbol().to_string(),
            decimal: currency.decimal_places(),
            decimal_separator: currency.decimal_separator().to_string(),
            group_separator: currency.group_separator().to_string(),
            currency_position: currency.position().as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds a record from a configured currency.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` if the settings do not describe a valid currency.
    pub fn from_settings(settings: &CurrencySettings, now: DateTime<Utc>) -> StoreResult<Self> {
        let currency = Currency::try_from(settings)?;
        Ok(Self::from_currency(&currency, now))
    }

    /// Validates the row and builds the currency it describes.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for an unknown position, a blank code, or a scale
    /// the engine cannot hold.
    pub fn into_currency(self) -> StoreResult<Currency> {
        let position: SymbolPosition = self
            .currency_position
            .parse()
            .map_err(MoneyError::InvalidCurrency)?;

        Ok(Currency::new(NewCurrency {
            id: self.id,
            code: self.code,
            name: self.name,
            symbol: self.symbol,
            decimal_places: self.decimal,
            decimal_separator: self.decimal_separator,
            group_separator: self.group_separator,
            position,
        })?)
    }
}
