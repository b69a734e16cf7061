//! Currency descriptors, formatting, exchange rates, and allocation.

pub mod allocation;
pub mod descriptor;
pub mod exchange;
pub mod format;

#[cfg(test)]
mod props;

pub use allocation::AllocationUtil;
pub use descriptor::{Currency, NewCurrency};
pub use exchange::ExchangeRate;
pub use format::{Formatter, place_symbol};
