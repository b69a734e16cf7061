//! Common types used across the workspace.

pub mod id;
pub mod position;
pub mod rounding;

pub use id::*;
pub use position::SymbolPosition;
pub use rounding::RoundingMode;
