//! Bit-packed digital-logic circuit compiler and simulator.
//!
//! This crate compiles declarative schematics into wired, storage-backed circuits and
//! steps them in discrete time:
//! 1. **Storage:** 64-bit cells, bounds-checked field accessors, and a growth-only lane allocator.
//! 2. **Gates:** AND, NOT, OR, and XOR pools evaluated a whole storage block at a time.
//! 3. **Interconnect:** Directional sockets copying one field into another every step.
//! 4. **Schematics:** Gates, bridges, aliases, connections, and nested sub-circuits,
//!    compiled into a tree of `Circuit` instances.
//! 5. **Simulation:** The `Simulator` driver, configuration, and step statistics.
//!
//! ```
//! use gatebank_core::{Schematic, SimConfig, Simulator};
//!
//! let mut nand = Schematic::new("nand");
//! nand.add_and_gate("and1");
//! nand.add_not_gate("not1");
//! nand.add_connection("and1_c", "not1_a");
//! nand.add_exposed_port("and1_a");
//! nand.add_exposed_port("and1_b");
//! nand.add_exposed_port("not1_b");
//!
//! let mut sim = Simulator::new(SimConfig::default());
//! let circuit = nand.build(&mut sim).unwrap();
//! circuit.set("and1_a", 1).unwrap();
//! circuit.set("and1_b", 1).unwrap();
//! sim.settle().unwrap();
//! assert_eq!(circuit.get("not1_b").unwrap(), 0);
//! ```

/// Storage constants, mask helpers, and errors.
pub mod common;
/// Simulator configuration.
pub mod config;
/// Gate pools.
pub mod gates;
/// Sockets and the socket registry.
pub mod interconnect;
/// Schematic builder, compiler, and circuit instances.
pub mod schematic;
/// Simulation driver.
pub mod sim;
/// Step statistics.
pub mod stats;
/// Storage cells, accessors, data banks, and wire bridges.
pub mod storage;

/// Crate-wide error type.
pub use crate::common::SimError;
/// Root configuration; use `SimConfig::default()` or `SimConfig::from_json`.
pub use crate::config::SimConfig;
/// Declarative circuit description and its compiled instance.
pub use crate::schematic::{BridgeView, Circuit, Schematic};
/// Simulation driver; owns every pool and socket.
pub use crate::sim::Simulator;
/// Bit-range view into a storage cell.
pub use crate::storage::FieldAccessor;
