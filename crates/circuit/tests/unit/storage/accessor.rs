//! # Field Accessor Tests
//!
//! Verifies bit-range reads and writes over a shared storage cell: placement at
//! every offset, isolation of neighbouring bits, the OR and AND merges, bounds
//! checking, and behaviour once the backing cell has been released.

use gatebank_core::SimError;
use gatebank_core::storage::{FieldAccessor, StorageCell};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Placement
// ══════════════════════════════════════════════════════════

#[test]
fn single_bit_set_at_every_offset() {
    for offset in 0..64 {
        let cell = StorageCell::default();
        let acc = FieldAccessor::new(offset, 1, &cell.downgrade()).unwrap();
        acc.set(1).unwrap();
        assert_eq!(cell.load(), 1 << offset, "offset {offset}");
        assert_eq!(acc.get().unwrap(), 1);
    }
}

#[rstest]
#[case(0)]
#[case(21)]
#[case(43)]
#[case(50)]
fn set_leaves_other_bits_untouched(#[case] offset: usize) {
    let cell = StorageCell::new(0xA5A5_A5A5_A5A5_A5A5);
    let acc = FieldAccessor::new(offset, 7, &cell.downgrade()).unwrap();
    let mask = acc.mask();

    acc.set(0b101_0011).unwrap();

    assert_eq!(cell.load() & !mask, 0xA5A5_A5A5_A5A5_A5A5 & !mask);
    assert_eq!(acc.get().unwrap(), 0b101_0011);
}

#[test]
fn set_truncates_to_width() {
    let cell = StorageCell::default();
    let acc = FieldAccessor::new(8, 4, &cell.downgrade()).unwrap();
    acc.set(0xFF).unwrap();
    assert_eq!(acc.get().unwrap(), 0xF);
    assert_eq!(cell.load(), 0xF00);
}

#[test]
fn full_width_field_covers_the_cell() {
    let cell = StorageCell::default();
    let acc = FieldAccessor::new(0, 64, &cell.downgrade()).unwrap();
    acc.set(u64::MAX).unwrap();
    assert_eq!(cell.load(), u64::MAX);
    assert_eq!(acc.get().unwrap(), u64::MAX);
}

#[test]
fn zero_width_field_reads_zero_and_writes_nothing() {
    let cell = StorageCell::new(0x1234);
    let acc = FieldAccessor::new(10, 0, &cell.downgrade()).unwrap();
    assert_eq!(acc.get().unwrap(), 0);
    acc.set(u64::MAX).unwrap();
    acc.add(u64::MAX).unwrap();
    acc.multiply(0).unwrap();
    assert_eq!(cell.load(), 0x1234);
}

// ══════════════════════════════════════════════════════════
// 2. Merges
// ══════════════════════════════════════════════════════════

#[test]
fn clear_zeroes_only_the_field() {
    let cell = StorageCell::new(u64::MAX);
    let acc = FieldAccessor::new(4, 8, &cell.downgrade()).unwrap();
    acc.clear().unwrap();
    assert_eq!(cell.load(), !0xFF0);
}

#[test]
fn add_ors_into_the_field() {
    let cell = StorageCell::default();
    let acc = FieldAccessor::new(3, 4, &cell.downgrade()).unwrap();
    acc.set(0b0101).unwrap();
    acc.add(0b0011).unwrap();
    assert_eq!(acc.get().unwrap(), 0b0111);

    acc.add(0b0011).unwrap();
    assert_eq!(acc.get().unwrap(), 0b0111, "add is idempotent");
}

#[test]
fn multiply_ands_into_the_field() {
    let cell = StorageCell::default();
    let acc = FieldAccessor::new(3, 4, &cell.downgrade()).unwrap();
    acc.set(0b1101).unwrap();
    acc.multiply(0b0110).unwrap();
    assert_eq!(acc.get().unwrap(), 0b0100);
}

#[test]
fn multiply_preserves_bits_outside_the_field() {
    let cell = StorageCell::new(u64::MAX);
    let acc = FieldAccessor::new(16, 8, &cell.downgrade()).unwrap();

    acc.multiply(0x0F).unwrap();

    assert_eq!(acc.get().unwrap(), 0x0F);
    assert_eq!(cell.load(), !0x00F0_0000);

    // `raw & (placed | !mask)` would be the same here; `raw & placed` would wipe the cell.
    let naive = u64::MAX & (0x0F << 16);
    assert_ne!(cell.load(), naive);
}

// ══════════════════════════════════════════════════════════
// 3. Bounds
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(64, 92)]
#[case(60, 5)]
#[case(0, 65)]
#[case(65, 0)]
fn out_of_range_fields_rejected(#[case] offset: usize, #[case] width: usize) {
    let cell = StorageCell::default();
    let err = FieldAccessor::new(offset, width, &cell.downgrade()).unwrap_err();
    assert!(
        matches!(err, SimError::OutOfBounds { offset: o, width: w } if o == offset && w == width),
        "{err}"
    );
}

#[rstest]
#[case(0, 64)]
#[case(63, 1)]
#[case(64, 0)]
fn boundary_fields_accepted(#[case] offset: usize, #[case] width: usize) {
    let cell = StorageCell::default();
    let acc = FieldAccessor::new(offset, width, &cell.downgrade()).unwrap();
    assert_eq!(acc.offset(), offset);
    assert_eq!(acc.width(), width);
}

// ══════════════════════════════════════════════════════════
// 4. Lifetime and aliasing
// ══════════════════════════════════════════════════════════

#[test]
fn operations_fail_after_cell_is_dropped() {
    let cell = StorageCell::default();
    let acc = FieldAccessor::new(0, 8, &cell.downgrade()).unwrap();
    assert!(acc.is_live());
    drop(cell);

    assert!(!acc.is_live());
    assert!(matches!(acc.get(), Err(SimError::DanglingReference)));
    assert!(matches!(acc.set(1), Err(SimError::DanglingReference)));
    assert!(matches!(acc.clear(), Err(SimError::DanglingReference)));
    assert!(matches!(acc.add(1), Err(SimError::DanglingReference)));
    assert!(matches!(acc.multiply(1), Err(SimError::DanglingReference)));
}

#[test]
fn default_accessor_is_dangling() {
    let acc = FieldAccessor::default();
    assert_eq!(acc.width(), 0);
    assert!(matches!(acc.get(), Err(SimError::DanglingReference)));
}

#[test]
fn copies_alias_the_same_bits() {
    let cell = StorageCell::default();
    let acc = FieldAccessor::new(5, 3, &cell.downgrade()).unwrap();
    let copy = acc.clone();

    copy.set(0b110).unwrap();
    assert_eq!(acc.get().unwrap(), 0b110);
    assert!(acc.same_cell(&copy));
}

#[test]
fn overlapping_views_observe_each_other() {
    let cell = StorageCell::default();
    let wide = FieldAccessor::new(0, 8, &cell.downgrade()).unwrap();
    let high = FieldAccessor::new(4, 4, &cell.downgrade()).unwrap();

    wide.set(0xAB).unwrap();
    assert_eq!(high.get().unwrap(), 0xA);

    high.set(0x3).unwrap();
    assert_eq!(wide.get().unwrap(), 0x3B);
}

// ══════════════════════════════════════════════════════════
// 5. Properties
// ══════════════════════════════════════════════════════════

fn field() -> impl Strategy<Value = (usize, usize)> {
    (0usize..=64).prop_flat_map(|offset| (Just(offset), 0..=64 - offset))
}

proptest! {
    #[test]
    fn set_then_get_returns_truncated_value((offset, width) in field(), seed: u64, value: u64) {
        let cell = StorageCell::new(seed);
        let acc = FieldAccessor::new(offset, width, &cell.downgrade()).unwrap();
        acc.set(value).unwrap();

        let expected = if width == 64 { value } else { value & ((1u64 << width) - 1) };
        prop_assert_eq!(acc.get().unwrap(), expected);
        prop_assert_eq!(cell.load() & !acc.mask(), seed & !acc.mask());
    }

    #[test]
    fn merges_never_touch_bits_outside_the_field(
        (offset, width) in field(),
        seed: u64,
        value: u64,
    ) {
        let cell = StorageCell::new(seed);
        let acc = FieldAccessor::new(offset, width, &cell.downgrade()).unwrap();
        let before = acc.get().unwrap();

        acc.add(value).unwrap();
        prop_assert_eq!(cell.load() & !acc.mask(), seed & !acc.mask());
        let merged = acc.get().unwrap();
        prop_assert_eq!(merged & before, before);

        acc.multiply(value).unwrap();
        prop_assert_eq!(cell.load() & !acc.mask(), seed & !acc.mask());
        prop_assert_eq!(acc.get().unwrap() & !merged, 0);
    }
}
