//! Data bank: growth-only bit-field allocator over shared storage cells.
//!
//! A bank is an ordered list of blocks. Each block holds `LANES` parallel storage
//! cells and one cursor marking the first free bit, shared by every lane. A request
//! for a `width`-bit field is served from the first block (in insertion order)
//! whose cursor leaves room, and returns one accessor per lane, all at the same
//! offset. When no block has room a new one is appended.
//!
//! Lane `i` of block `k` is therefore terminal `i` of every instance packed into
//! block `k`, which is what lets a gate pool evaluate whole blocks at a time.
//! Nothing is ever freed; dropping the bank releases every cell at once.

use std::array;

use tracing::debug;

use crate::common::{Result, STORAGE_BITS, SimError};

use super::accessor::FieldAccessor;
use super::cell::{CellRef, StorageCell};

/// `LANES` storage cells allocated together, with their shared free-bit cursor.
#[derive(Debug)]
pub struct Block<const LANES: usize> {
    cells: [StorageCell; LANES],
    /// First free bit, `0..=STORAGE_BITS`; equal for every lane.
    cursor: usize,
}

impl<const LANES: usize> Block<LANES> {
    fn with_cursor(cursor: usize) -> Self {
        Self {
            cells: array::from_fn(|_| StorageCell::default()),
            cursor,
        }
    }

    /// The lane cells of this block.
    pub fn cells(&self) -> &[StorageCell; LANES] {
        &self.cells
    }

    /// First free bit of every lane.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn has_room(&self, width: usize) -> bool {
        self.cursor + width <= STORAGE_BITS
    }
}

/// Bump allocator packing same-offset field groups into `LANES` parallel cells.
#[derive(Debug)]
pub struct DataBank<const LANES: usize> {
    blocks: Vec<Block<LANES>>,
}

impl<const LANES: usize> Default for DataBank<LANES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LANES: usize> DataBank<LANES> {
    /// Creates an empty bank.
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Lends one `width`-bit field per lane, all at the same offset of the same block.
    ///
    /// # Arguments
    ///
    /// * `width` - Field width in bits.
    ///
    /// # Returns
    ///
    /// One accessor per lane, in lane order.
    ///
    /// # Errors
    ///
    /// [`SimError::WidthExceedsCapacity`] if `width` is wider than a storage cell.
    pub fn lend_fields(&mut self, width: usize) -> Result<[FieldAccessor; LANES]> {
        if width > STORAGE_BITS {
            return Err(SimError::WidthExceedsCapacity { width });
        }

        let index = match self.blocks.iter().position(|b| b.has_room(width)) {
            Some(index) => index,
            None => {
                self.blocks.push(Block::with_cursor(0));
                debug!(lanes = LANES, blocks = self.blocks.len(), "data bank grew");
                self.blocks.len() - 1
            }
        };

        let block = &mut self.blocks[index];
        let offset = block.cursor;
        block.cursor += width;

        Ok(array::from_fn(|lane| {
            FieldAccessor::from_parts(offset, width, block.cells[lane].downgrade())
        }))
    }

    /// Appends a fully claimed block and returns a reference to each of its cells.
    ///
    /// The caller subdivides the cells itself; later `lend_fields` calls never
    /// touch this block.
    pub fn lend_whole_cells(&mut self) -> [CellRef; LANES] {
        let block = Block::with_cursor(STORAGE_BITS);
        let refs = array::from_fn(|lane| block.cells[lane].downgrade());
        self.blocks.push(block);
        refs
    }

    /// Zeroes every cell in every block without changing allocation state.
    pub fn clear_all(&self) {
        for block in &self.blocks {
            for cell in &block.cells {
                cell.store(0);
            }
        }
    }

    /// Non-owning references to every cell, grouped by block.
    pub fn storage(&self) -> Vec<[CellRef; LANES]> {
        self.blocks
            .iter()
            .map(|block| array::from_fn(|lane| block.cells[lane].downgrade()))
            .collect()
    }

    /// All allocated blocks, in insertion order.
    pub fn blocks(&self) -> &[Block<LANES>] {
        &self.blocks
    }

    /// Number of allocated blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if nothing has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
