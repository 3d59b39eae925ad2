//! Wire bridges: several named layouts over one storage cell.
//!
//! A bridge lends a single whole cell and lays each view's fields out contiguously
//! from bit 0. Views overlap by construction, so a 6-bit bus and its 2/2/2 or
//! 4/1/1 split are the same physical bits: writing through one view is visible
//! through every other without any socket or step in between.

use crate::common::{Result, STORAGE_BITS, SimError};

use super::accessor::FieldAccessor;
use super::bank::DataBank;

/// Builds one accessor per field for each view, all over one freshly lent cell.
///
/// # Arguments
///
/// * `bank` - Single-lane bank the cell is lent from.
/// * `views` - One list of field widths per view.
///
/// # Returns
///
/// Per view, the accessors of its fields in declaration order.
///
/// # Errors
///
/// [`SimError::CapacityExceeded`] if a view's widths sum past the storage width.
/// Views are validated before the cell is lent, so a rejected bridge allocates nothing.
pub fn build_bridge(
    bank: &mut DataBank<1>,
    views: &[Vec<usize>],
) -> Result<Vec<Vec<FieldAccessor>>> {
    for (view, widths) in views.iter().enumerate() {
        let total = widths
            .iter()
            .try_fold(0usize, |acc, w| acc.checked_add(*w))
            .unwrap_or(usize::MAX);
        if total > STORAGE_BITS {
            return Err(SimError::CapacityExceeded { view, total });
        }
    }

    let [cell] = bank.lend_whole_cells();

    Ok(views
        .iter()
        .map(|widths| {
            let mut offset = 0;
            widths
                .iter()
                .map(|&width| {
                    let field = FieldAccessor::from_parts(offset, width, cell.clone());
                    offset += width;
                    field
                })
                .collect()
        })
        .collect())
}
