//! Simulation statistics collection and reporting.
//!
//! This module tracks work done by the simulation driver. It provides:
//! 1. **Steps:** Number of global ticks taken.
//! 2. **Gate evaluations:** Storage blocks recomputed across all gate pools.
//! 3. **Socket transfers:** Individual socket copies applied.

use std::fmt;

/// Counters updated by every `Simulator::tick`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total steps taken.
    pub steps: u64,
    /// Gate-pool blocks evaluated (one block covers up to 64 instances).
    pub gate_evaluations: u64,
    /// Socket copies applied.
    pub socket_transfers: u64,
}

impl SimStats {
    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Average socket copies per step, or 0 before the first step.
    pub fn transfers_per_step(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.socket_transfers as f64 / self.steps as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "steps              {}", self.steps)?;
        writeln!(f, "gate evaluations   {}", self.gate_evaluations)?;
        write!(f, "socket transfers   {}", self.socket_transfers)
    }
}
