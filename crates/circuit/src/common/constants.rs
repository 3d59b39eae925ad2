//! Global Storage Constants and Bit-Field Helpers.
//!
//! This module defines the storage width shared by every component and the
//! mask arithmetic used to address sub-fields of a storage cell. It includes:
//! 1. **Storage Constants:** The width of one storage cell.
//! 2. **Mask Helpers:** Overflow-free mask construction for any field inside a cell.
//! 3. **Gate Arity:** Terminal counts for the built-in gate pools.

/// Width of one storage cell in bits.
pub const STORAGE_BITS: usize = 64;

/// Number of terminals (lanes) on a two-input gate: `a`, `b`, output `c`.
pub const BINARY_GATE_ARITY: usize = 3;

/// Number of terminals (lanes) on a NOT gate: input `a`, output `b`.
pub const UNARY_GATE_ARITY: usize = 2;

/// Returns a value with the low `width` bits set.
///
/// Widths of 64 and above saturate to all ones instead of overflowing the shift.
#[inline]
pub const fn ones_of_width(width: usize) -> u64 {
    if width >= STORAGE_BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Returns the mask with bit `i` set iff `offset <= i < offset + width`.
///
/// Bits that would fall past the top of the cell are dropped, so an offset of
/// 64 yields an empty mask.
#[inline]
pub const fn field_mask(offset: usize, width: usize) -> u64 {
    shl(ones_of_width(width), offset)
}

/// Shift left that yields 0 instead of overflowing when `amount >= 64`.
#[inline]
pub(crate) const fn shl(value: u64, amount: usize) -> u64 {
    if amount >= STORAGE_BITS { 0 } else { value << amount }
}

/// Shift right that yields 0 instead of overflowing when `amount >= 64`.
#[inline]
pub(crate) const fn shr(value: u64, amount: usize) -> u64 {
    if amount >= STORAGE_BITS { 0 } else { value >> amount }
}
