//! Common utilities and types used throughout the circuit simulator.
//!
//! This module provides the building blocks shared by every other component. It includes:
//! 1. **Constants:** The storage-cell width and gate arities.
//! 2. **Bit Masks:** Field mask helpers that never overflow at the cell boundary.
//! 3. **Error Handling:** The crate-wide `SimError` and `Result` alias.

/// Storage width, gate arity, and mask helpers.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{STORAGE_BITS, field_mask, ones_of_width};
pub use error::{Result, SimError};
