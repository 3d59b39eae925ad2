//! Bit-packed storage.
//!
//! This module organizes the shared state every circuit is built on:
//! cells, the accessors that view sub-ranges of them, the bank that packs
//! accessors into cells, and the bridge that overlays several layouts on one cell.

/// Field accessors over storage cells.
pub mod accessor;

/// Growth-only lane allocator.
pub mod bank;

/// Multi-view bus split/join over one cell.
pub mod bridge;

/// Owning cells and non-owning cell references.
pub mod cell;

pub use accessor::FieldAccessor;
pub use bank::{Block, DataBank};
pub use bridge::build_bridge;
pub use cell::{CellRef, StorageCell};
