//! Application configuration management.

use serde::Deserialize;

use crate::types::{CurrencyId, RoundingMode, SymbolPosition};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Money handling defaults.
    #[serde(default)]
    pub money: MoneySettings,
    /// Currency definitions used to seed the currency store.
    #[serde(default)]
    pub currencies: Vec<CurrencySettings>,
}

/// Money handling defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneySettings {
    /// Rounding mode used when a caller asks for rounding without naming one.
    #[serde(default = "default_rounding")]
    pub default_rounding: RoundingMode,
}

impl Default for MoneySettings {
    fn default() -> Self {
        Self {
            default_rounding: default_rounding(),
        }
    }
}

fn default_rounding() -> RoundingMode {
    RoundingMode::HalfUp
}

/// A currency definition as written in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencySettings {
    /// Stable identifier.
    pub id: CurrencyId,
    /// Currency code, any case.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Display symbol.
    pub symbol: String,
    /// Canonical number of fractional digits.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Separator between integer and fractional digits.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// Separator between groups of three integer digits.
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
    /// Symbol placement.
    #[serde(default)]
    pub position: SymbolPosition,
}

fn default_decimal_places() -> u32 {
    2
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_group_separator() -> String {
    ",".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `SARRAF__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SARRAF").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid configuration.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
