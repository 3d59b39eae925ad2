//! NOT gate pool.
//!
//! The inverter writes `!a` across the whole word, so unused bits of the output
//! lane read as ones. Only the bit at each instance's offset is meaningful.

use super::{LogicGate, instances_in};
use crate::common::Result;
use crate::common::constants::UNARY_GATE_ARITY;
use crate::storage::{DataBank, FieldAccessor};

/// Pool of inverters.
#[derive(Debug, Default)]
pub struct NotGate {
    bank: DataBank<UNARY_GATE_ARITY>,
}

impl NotGate {
    /// Creates an empty pool.
    pub const fn new() -> Self {
        Self {
            bank: DataBank::new(),
        }
    }

    /// Lends one inverter.
    ///
    /// # Returns
    ///
    /// Single-bit accessors for terminals `[a, b]`, where `b = !a`.
    pub fn lend_gate(&mut self) -> Result<[FieldAccessor; UNARY_GATE_ARITY]> {
        self.bank.lend_fields(1)
    }

    /// The pool's private bank.
    pub fn bank(&self) -> &DataBank<UNARY_GATE_ARITY> {
        &self.bank
    }
}

impl LogicGate for NotGate {
    const NAME: &'static str = "NOT";
    const ARITY: usize = UNARY_GATE_ARITY;

    fn tick(&self) -> usize {
        for block in self.bank.blocks() {
            let [a, b] = block.cells();
            b.store(!a.load());
        }
        self.bank.block_count()
    }

    fn instance_count(&self) -> usize {
        instances_in(&self.bank)
    }

    fn clear(&self) {
        self.bank.clear_all();
    }
}
