//! Gate pools.
//!
//! Each boolean function has one pool that owns a private data bank with one lane
//! per terminal. A gate instance is just one bit at the same offset in every lane;
//! the pool keeps no per-gate records. Evaluation works a whole block at a time:
//! the output lane is recomputed from the input lanes across the full 64-bit word,
//! which is sound because the bank never places two instances in the same bit.
//!
//! # Pools
//!
//! - `AndGate`: `c = a & b`.
//! - `NotGate`: `b = !a`.
//! - `OrGate`: `c = a | b`.
//! - `XorGate`: `c = a ^ b`.

/// Two-input AND pool.
pub mod and;

/// Inverter pool.
pub mod not;

/// Two-input OR pool.
pub mod or;

/// Two-input XOR pool.
pub mod xor;

pub use and::AndGate;
pub use not::NotGate;
pub use or::OrGate;
pub use xor::XorGate;

use crate::common::constants::BINARY_GATE_ARITY;
use crate::storage::DataBank;

/// Trait implemented by every gate pool.
pub trait LogicGate {
    /// Short name used in diagnostics (e.g. `"AND"`).
    const NAME: &'static str;

    /// Number of terminals per instance, inputs first, output last.
    const ARITY: usize;

    /// Recomputes the output lane of every allocated block.
    ///
    /// Every block ever lent is evaluated; there is no liveness tracking.
    ///
    /// # Returns
    ///
    /// The number of blocks evaluated.
    fn tick(&self) -> usize;

    /// Number of gate instances lent so far.
    fn instance_count(&self) -> usize;

    /// Zeroes every terminal of every instance.
    fn clear(&self);
}

/// Applies `f` lane-wise to inputs `a`, `b` and stores the result in output `c`.
fn evaluate_binary(bank: &DataBank<BINARY_GATE_ARITY>, f: impl Fn(u64, u64) -> u64) -> usize {
    for block in bank.blocks() {
        let [a, b, c] = block.cells();
        c.store(f(a.load(), b.load()));
    }
    bank.block_count()
}

/// Each instance occupies one bit per lane, so the cursors count the instances.
fn instances_in<const LANES: usize>(bank: &DataBank<LANES>) -> usize {
    bank.blocks().iter().map(|block| block.cursor()).sum()
}
