//! Core money logic for Sarraf.
//!
//! This crate contains pure value types with ZERO storage or I/O dependencies.
//!
//! # Modules
//!
//! - `decimal` - Exact decimal amounts and rounding
//! - `currency` - Currency descriptors, formatting, exchange rates, allocation
//! - `money` - Money values bound to a shared currency

pub mod currency;
pub mod decimal;
pub mod money;

pub use currency::{Currency, ExchangeRate, NewCurrency};
pub use decimal::{Amount, IntoAmount};
pub use money::{Context, Money};
