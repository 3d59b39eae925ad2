//! Storage cells and non-owning cell references.
//!
//! A storage cell is one 64-bit word of boolean state. Each cell is owned by exactly
//! one `StorageCell` (held inside a data bank block); every accessor reaches it through
//! a `CellRef`, which never keeps the cell alive and reports
//! [`SimError::DanglingReference`] once the owner is gone.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::common::{Result, SimError};

/// Owning handle to a single 64-bit storage cell.
#[derive(Debug, Default)]
pub struct StorageCell(Rc<Cell<u64>>);

impl StorageCell {
    /// Creates a cell holding `value`.
    pub fn new(value: u64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    /// Returns a non-owning reference to this cell.
    pub fn downgrade(&self) -> CellRef {
        CellRef(Rc::downgrade(&self.0))
    }

    /// Reads the whole cell.
    #[inline]
    pub fn load(&self) -> u64 {
        self.0.get()
    }

    /// Overwrites the whole cell.
    #[inline]
    pub fn store(&self, value: u64) {
        self.0.set(value);
    }
}

/// Non-owning, validity-checked reference to a storage cell.
///
/// The default value refers to no cell at all and behaves like a released one.
#[derive(Clone, Debug, Default)]
pub struct CellRef(Weak<Cell<u64>>);

impl CellRef {
    fn upgrade(&self) -> Result<Rc<Cell<u64>>> {
        self.0.upgrade().ok_or(SimError::DanglingReference)
    }

    /// Reads the whole cell.
    pub fn load(&self) -> Result<u64> {
        Ok(self.upgrade()?.get())
    }

    /// Overwrites the whole cell.
    pub fn store(&self, value: u64) -> Result<()> {
        self.upgrade()?.set(value);
        Ok(())
    }

    /// Replaces the cell content with `f(old)`.
    pub fn update(&self, f: impl FnOnce(u64) -> u64) -> Result<()> {
        let cell = self.upgrade()?;
        cell.set(f(cell.get()));
        Ok(())
    }

    /// Returns `true` while the owning bank still holds the cell.
    pub fn is_live(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Returns `true` if both references name the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}
