//! OR gate pool.

use super::{LogicGate, evaluate_binary, instances_in};
use crate::common::Result;
use crate::common::constants::BINARY_GATE_ARITY;
use crate::storage::{DataBank, FieldAccessor};

/// Pool of two-input OR gates.
#[derive(Debug, Default)]
pub struct OrGate {
    bank: DataBank<BINARY_GATE_ARITY>,
}

impl OrGate {
    /// Creates an empty pool.
    pub const fn new() -> Self {
        Self {
            bank: DataBank::new(),
        }
    }

    /// Lends one gate instance.
    ///
    /// # Returns
    ///
    /// Single-bit accessors for terminals `[a, b, c]`, where `c = a | b`.
    pub fn lend_gate(&mut self) -> Result<[FieldAccessor; BINARY_GATE_ARITY]> {
        self.bank.lend_fields(1)
    }

    /// The pool's private bank.
    pub fn bank(&self) -> &DataBank<BINARY_GATE_ARITY> {
        &self.bank
    }
}

impl LogicGate for OrGate {
    const NAME: &'static str = "OR";
    const ARITY: usize = BINARY_GATE_ARITY;

    fn tick(&self) -> usize {
        evaluate_binary(&self.bank, |a, b| a | b)
    }

    fn instance_count(&self) -> usize {
        instances_in(&self.bank)
    }

    fn clear(&self) {
        self.bank.clear_all();
    }
}
