//! Schematics and their compiled circuit instances.
//!
//! This module organizes the declarative side of the simulator:
//! the `Schematic` builder, the compiler that turns a schematic tree into
//! wired storage, and the `Circuit` instances it produces.
//!
//! # Naming
//!
//! - AND/OR/XOR terminals: `<gate>_a`, `<gate>_b`, `<gate>_c`.
//! - NOT terminals: `<gate>_a`, `<gate>_b`.
//! - Bridge fields: `<view>_<index>`, zero-based.
//! - Child ports seen by the parent: `<instance>_<port>`.

/// Schematic builder and bridge views.
pub mod builder;

/// Compiled circuit instances.
pub mod circuit;

/// Two-pass schematic compilation.
mod compiler;

pub use builder::{Bridge, BridgeView, Schematic};
pub use circuit::Circuit;
