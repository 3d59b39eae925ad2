//! Field accessors: bit-range views into a shared storage cell.
//!
//! This module implements the view type every gate terminal, bus field, and port
//! name resolves to. It provides:
//! 1. **Construction:** Bounds-checked `(offset, width)` views over a `CellRef`.
//! 2. **Access:** Read, overwrite, clear, OR-merge, and AND-merge restricted to the field.
//! 3. **Aliasing:** Copies of an accessor address the same bits; overlapping views
//!    over one cell observe each other's writes immediately.
//!
//! Accessors are plain values. They never own the cell, so copying one is cheap and
//! every operation fails with [`SimError::DanglingReference`] once the cell is released.

use crate::common::constants::{shl, shr};
use crate::common::{Result, STORAGE_BITS, SimError, field_mask, ones_of_width};

use super::cell::CellRef;

/// A view over bits `[offset, offset + width)` of one storage cell.
///
/// The default accessor has width 0 and no backing cell.
#[derive(Clone, Debug, Default)]
pub struct FieldAccessor {
    offset: usize,
    width: usize,
    cell: CellRef,
}

impl FieldAccessor {
    /// Creates an accessor over `[offset, offset + width)` of `cell`.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfBounds`] if the range does not fit within one storage cell.
    pub fn new(offset: usize, width: usize, cell: &CellRef) -> Result<Self> {
        let fits = offset
            .checked_add(width)
            .is_some_and(|end| end <= STORAGE_BITS);
        if !fits || offset > STORAGE_BITS || width > STORAGE_BITS {
            return Err(SimError::OutOfBounds { offset, width });
        }
        Ok(Self::from_parts(offset, width, cell.clone()))
    }

    /// Builds an accessor whose range the caller has already validated.
    pub(crate) fn from_parts(offset: usize, width: usize, cell: CellRef) -> Self {
        debug_assert!(offset + width <= STORAGE_BITS);
        Self {
            offset,
            width,
            cell,
        }
    }

    /// Bit offset of the field inside its cell.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Width of the field in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mask selecting this field's bits within the cell.
    pub fn mask(&self) -> u64 {
        field_mask(self.offset, self.width)
    }

    /// Reference to the backing cell.
    pub fn cell(&self) -> &CellRef {
        &self.cell
    }

    /// Returns `true` while the backing cell still exists.
    pub fn is_live(&self) -> bool {
        self.cell.is_live()
    }

    /// Returns `true` if `other` is backed by the same storage cell.
    pub fn same_cell(&self, other: &Self) -> bool {
        self.cell.ptr_eq(&other.cell)
    }

    /// Truncates `value` to the field width and moves it into position.
    #[inline]
    fn place(&self, value: u64) -> u64 {
        shl(value & ones_of_width(self.width), self.offset)
    }

    /// Reads the field as an unsigned value of `width` bits.
    ///
    /// # Errors
    ///
    /// [`SimError::DanglingReference`] if the backing cell is gone.
    pub fn get(&self) -> Result<u64> {
        let raw = self.cell.load()?;
        Ok(shr(raw & self.mask(), self.offset))
    }

    /// Replaces the field with the low `width` bits of `value`; other bits are untouched.
    ///
    /// # Errors
    ///
    /// [`SimError::DanglingReference`] if the backing cell is gone.
    pub fn set(&self, value: u64) -> Result<()> {
        let mask = self.mask();
        let placed = self.place(value);
        self.cell.update(|raw| (raw & !mask) | placed)
    }

    /// Zeroes the field.
    ///
    /// # Errors
    ///
    /// [`SimError::DanglingReference`] if the backing cell is gone.
    pub fn clear(&self) -> Result<()> {
        let mask = self.mask();
        self.cell.update(|raw| raw & !mask)
    }

    /// ORs the low `width` bits of `value` into the field.
    ///
    /// # Errors
    ///
    /// [`SimError::DanglingReference`] if the backing cell is gone.
    pub fn add(&self, value: u64) -> Result<()> {
        let placed = self.place(value);
        self.cell.update(|raw| raw | placed)
    }

    /// ANDs the low `width` bits of `value` into the field.
    ///
    /// Bits outside the field are preserved.
    ///
    /// # Errors
    ///
    /// [`SimError::DanglingReference`] if the backing cell is gone.
    pub fn multiply(&self, value: u64) -> Result<()> {
        let mask = self.mask();
        let placed = self.place(value);
        self.cell.update(|raw| (raw & !mask) | (raw & mask & placed))
    }
}
