//! Simulator: owns every gate pool, the bus bank, and the socket registry.
//!
//! One step evaluates the AND, NOT, OR, and XOR pools in that order, then applies
//! every socket once. There is no dependency scheduling and no convergence
//! detection; callers step until their outputs are stable, which takes as many
//! steps as the deepest socket chain.

use tracing::trace;

use crate::common::Result;
use crate::config::SimConfig;
use crate::gates::{AndGate, LogicGate, NotGate, OrGate, XorGate};
use crate::interconnect::SocketController;
use crate::stats::SimStats;
use crate::storage::DataBank;

/// Top-level simulation driver.
///
/// Fields are public so pre-built bridges can be wired directly through
/// `bus_bank` and `sockets` without going through a schematic.
#[derive(Debug, Default)]
pub struct Simulator {
    /// AND gate pool.
    pub and_gates: AndGate,
    /// NOT gate pool.
    pub not_gates: NotGate,
    /// OR gate pool.
    pub or_gates: OrGate,
    /// XOR gate pool.
    pub xor_gates: XorGate,
    /// Single-lane bank backing every wire bridge.
    pub bus_bank: DataBank<1>,
    /// Every socket registered so far.
    pub sockets: SocketController,
    /// Work counters.
    pub stats: SimStats,
    config: SimConfig,
}

impl Simulator {
    /// Creates an empty simulator.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this simulator was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Advances the whole system by one step.
    ///
    /// # Errors
    ///
    /// [`SimError::DanglingReference`](crate::common::SimError::DanglingReference) if a
    /// socket points into a released cell. The step is abandoned at that socket.
    pub fn tick(&mut self) -> Result<()> {
        let evaluated = self.and_gates.tick()
            + self.not_gates.tick()
            + self.or_gates.tick()
            + self.xor_gates.tick();
        let transferred = self.sockets.tick()?;

        self.stats.steps += 1;
        self.stats.gate_evaluations += evaluated as u64;
        self.stats.socket_transfers += transferred as u64;

        if self.config.general.trace_steps {
            trace!(
                step = self.stats.steps,
                blocks = evaluated,
                sockets = transferred,
                "step"
            );
        }
        Ok(())
    }

    /// Takes `steps` steps.
    ///
    /// # Errors
    ///
    /// The first error raised by [`Simulator::tick`].
    pub fn run(&mut self, steps: usize) -> Result<()> {
        for _ in 0..steps {
            self.tick()?;
        }
        Ok(())
    }

    /// Takes the configured `driver.settle_steps` steps.
    ///
    /// This is a fixed budget, not a fixed-point search.
    ///
    /// # Errors
    ///
    /// The first error raised by [`Simulator::tick`].
    pub fn settle(&mut self) -> Result<()> {
        self.run(self.config.driver.settle_steps)
    }

    /// Zeroes every cell in every bank; allocations and sockets are kept.
    pub fn clear(&self) {
        self.and_gates.clear();
        self.not_gates.clear();
        self.or_gates.clear();
        self.xor_gates.clear();
        self.bus_bank.clear_all();
    }
}
