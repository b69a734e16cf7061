//! Shared errors, enums, and configuration for Sarraf.
//!
//! This crate provides common types used across all other crates:
//! - Money error types
//! - Typed currency IDs
//! - Rounding modes and symbol positions
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CurrencySettings, MoneySettings};
pub use error::{MoneyError, MoneyResult};
pub use types::{CurrencyId, RoundingMode, SymbolPosition};
