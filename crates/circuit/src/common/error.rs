//! Simulator error definitions.
//!
//! This module defines the single error type raised by every fallible operation
//! in the crate. It provides:
//! 1. **Storage Faults:** Out-of-range fields and references to released storage cells.
//! 2. **Allocation Faults:** Requests wider than one storage cell.
//! 3. **Compilation Faults:** Width mismatches, unresolved names, and circular
//!    sub-circuit references.
//! 4. **Configuration Faults:** Malformed JSON configuration.
//!
//! None of these are recovered internally; each aborts the operation that raised it.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while building or stepping a circuit.
#[derive(Debug, Error)]
pub enum SimError {
    /// A field accessor would extend past the end of its storage cell.
    #[error("accessor out of bounds: offset {offset} + width {width} exceeds storage width")]
    OutOfBounds {
        /// Requested bit offset.
        offset: usize,
        /// Requested field width.
        width: usize,
    },

    /// The storage cell behind an accessor no longer exists.
    #[error("dangling storage reference: backing cell has been released")]
    DanglingReference,

    /// A data bank was asked for a field wider than one storage cell.
    #[error("requested width {width} exceeds storage width")]
    WidthExceedsCapacity {
        /// Requested field width.
        width: usize,
    },

    /// A wire-bridge view does not fit into one storage cell.
    #[error("bridge view {view} needs {total} bits, more than one storage cell holds")]
    CapacityExceeded {
        /// Index of the offending view within its bridge.
        view: usize,
        /// Sum of the view's field widths.
        total: usize,
    },

    /// A socket was requested between two fields of different widths.
    #[error("socket size mismatch: {from} bits -> {to} bits")]
    SocketSizeMismatch {
        /// Width of the source field.
        from: usize,
        /// Width of the destination field.
        to: usize,
    },

    /// A connection, alias, or exposed port names a port that does not exist.
    #[error("port not found: {name}")]
    PortNotFound {
        /// The unresolved port name.
        name: String,
    },

    /// Adding a sub-circuit would make a schematic depend on itself.
    #[error("circular dependency: {child} already depends on {parent}")]
    CircularDependency {
        /// Schematic receiving the sub-circuit.
        parent: String,
        /// Schematic being referenced.
        child: String,
    },

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
