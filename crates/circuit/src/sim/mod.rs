//! Simulation driver.
//!
//! Aggregates the gate pools, the shared bus bank, and the socket registry,
//! and advances them together one discrete step at a time.

/// The `Simulator` driver.
pub mod simulator;

pub use simulator::Simulator;
