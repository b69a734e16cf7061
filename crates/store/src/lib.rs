//! Currency storage for Sarraf.
//!
//! This crate provides:
//! - `CurrencyRecord`, the persisted row shape of a currency
//! - The `CurrencyStore` lookup abstraction
//! - `InMemoryCurrencyStore`, a concurrent map seeded from configuration

pub mod error;
pub mod memory;
pub mod record;

pub use error::{StoreError, StoreResult};
pub use memory::{CurrencyStore, InMemoryCurrencyStore};
pub use record::CurrencyRecord;
