//! # Sub-Circuit Tests
//!
//! Verifies that nested schematics compile into a tree of instances, that child
//! ports surface in the parent as `<instance>_<port>`, and how many steps a value
//! needs to cross each level of nesting.

use std::sync::Arc;

use gatebank_core::gates::LogicGate;
use gatebank_core::{BridgeView, Schematic};
use pretty_assertions::assert_eq;

use crate::common::builder::schematics;
use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// 1. Instance tree
// ══════════════════════════════════════════════════════════

#[test]
fn passthrough_only_holds_child_ports() {
    let mut ctx = TestContext::new();
    let circuit = ctx.build(&schematics::xor_passthrough());

    let names: Vec<&str> = circuit.ports().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["xor_input_0", "xor_input_1", "xor_output_0"]);
    assert_eq!(circuit.exposed_ports().len(), 3);

    let child = circuit.child(0).unwrap();
    assert_eq!(child.ports().len(), 6);
    assert_eq!(child.exposed_ports().len(), 3);
    assert!(circuit.child(1).is_none());
}

#[test]
fn wrapper_holds_its_own_and_child_ports() {
    let mut ctx = TestContext::new();
    let circuit = ctx.build(&schematics::xor_wrapper());

    assert_eq!(circuit.ports().len(), 6);
    assert_eq!(circuit.exposed_ports().len(), 3);
    assert_eq!(circuit.children().len(), 1);
}

#[test]
fn child_ports_are_the_same_fields_in_the_parent() {
    let mut ctx = TestContext::new();
    let circuit = ctx.build(&schematics::xor_wrapper());
    let child = circuit.child(0).unwrap();

    let outer = circuit.port("xor_input_0").unwrap();
    let inner = child.port("input_0").unwrap();
    assert!(outer.same_cell(inner));
    assert_eq!(outer.offset(), inner.offset());

    circuit.set("xor_input_1", 1).unwrap();
    assert_eq!(child.get("input_1").unwrap(), 1);
}

#[test]
fn each_instance_gets_its_own_storage() {
    let mut ctx = TestContext::new();
    let circuit = ctx.build(&schematics::two_bit_adder());

    let low = circuit.child(0).unwrap();
    let high = circuit.child(1).unwrap();
    assert!(!low.port("input_0").unwrap().same_cell(high.port("input_0").unwrap()));
    assert_eq!(low.ports().len(), 20);
    assert_eq!(ctx.sim.xor_gates.instance_count(), 4);
}

#[test]
fn child_ports_surface_without_parent_exposure() {
    let mut s = Schematic::new("hidden");
    s.add_sub_circuit("inner", Arc::new(schematics::nand())).unwrap();
    let mut ctx = TestContext::new();
    let circuit = ctx.build(&s);

    let names: Vec<&str> = circuit.ports().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["inner_and1_a", "inner_and1_b", "inner_not1_b"]);
    assert!(circuit.exposed_ports().is_empty());
    let inner = circuit.child(0).unwrap();
    inner.set("and1_a", 1).unwrap();
    inner.set("and1_b", 1).unwrap();
    ctx.settle();
    assert_eq!(inner.get("not1_b").unwrap(), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Timing across levels
// ══════════════════════════════════════════════════════════

#[test]
fn wrapped_xor_takes_one_step_per_level() {
    let mut ctx = TestContext::new();
    let circuit = ctx.build(&schematics::xor_wrapper());
    let inner = circuit.child(0).unwrap();
    TestContext::drive(&circuit, &[("input_0", 1), ("input_1", 0)]);

    // Child sockets are registered first, so the parent's copy lands a step late.
    ctx.run(1);
    assert_eq!(inner.get("input_0").unwrap(), 1);
    assert_eq!(inner.get("xor1_a").unwrap(), 0);

    ctx.run(1);
    assert_eq!(inner.get("xor1_a").unwrap(), 1);
    assert_eq!(circuit.get("output_0").unwrap(), 0);

    ctx.run(1);
    assert_eq!(circuit.get("output_0").unwrap(), 1);
}

#[test]
fn three_levels_settle() {
    let mut s = Schematic::new("deep");
    s.add_sub_circuit("wrap", Arc::new(schematics::xor_wrapper())).unwrap();
    s.add_wire_bridge(vec![BridgeView::new("in", [1, 1])]);
    s.add_connection("in_0", "wrap_input_0");
    s.add_connection("in_1", "wrap_input_1");
    s.add_exposed_port("wrap_output_0");

    let mut ctx = TestContext::new();
    let circuit = ctx.build(&s);
    assert!(circuit.child(0).unwrap().child(0).is_some());

    for (a, b) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        TestContext::drive(&circuit, &[("in_0", a), ("in_1", b)]);
        ctx.settle();
        assert_eq!(circuit.get("wrap_output_0").unwrap(), a ^ b, "{a} ^ {b}");
    }
}

// ══════════════════════════════════════════════════════════
// 3. Two-bit adder
// ══════════════════════════════════════════════════════════

#[test]
fn two_bit_adder_shape() {
    let mut ctx = TestContext::new();
    let circuit = ctx.build(&schematics::two_bit_adder());

    assert_eq!(circuit.children().len(), 2);
    assert_eq!(circuit.exposed_ports().len(), 8);
    assert_eq!(circuit.ports().len(), 10);
}

#[test]
fn two_bit_adder_adds_every_input() {
    let mut ctx = TestContext::new();
    let adder = ctx.build(&schematics::two_bit_adder());

    for a in 0..4 {
        for b in 0..4 {
            for carry_in in 0..2 {
                TestContext::drive(
                    &adder,
                    &[
                        ("full_adder_0_input_0", a & 1),
                        ("full_adder_1_input_0", a >> 1),
                        ("full_adder_0_input_1", b & 1),
                        ("full_adder_1_input_1", b >> 1),
                        ("full_adder_0_carryIn_0", carry_in),
                    ],
                );
                ctx.run(50);

                let sum = adder.get("full_adder_0_sum_0").unwrap()
                    | (adder.get("full_adder_1_sum_0").unwrap() << 1)
                    | (adder.get("full_adder_1_carry_0").unwrap() << 2);
                assert_eq!(sum, a + b + carry_in, "{a} + {b} + {carry_in}");
            }
        }
    }
}

#[test]
fn bus_adder_splits_and_joins_through_bridges() {
    let mut ctx = TestContext::new();
    let adder = ctx.build(&schematics::bus_adder());

    assert_eq!(adder.exposed_ports().len(), 3);
    assert_eq!(adder.port("sum_0").unwrap().width(), 3);

    for a in 0..4 {
        for b in 0..4 {
            TestContext::drive(&adder, &[("a_0", a), ("b_0", b)]);
            ctx.run(50);
            assert_eq!(adder.get("sum_0").unwrap(), a + b, "{a} + {b}");
        }
    }
}

#[test]
fn bus_adder_bit_views_alias_the_bus() {
    let mut ctx = TestContext::new();
    let adder = ctx.build(&schematics::bus_adder());

    adder.set("a_0", 0b10).unwrap();
    assert_eq!(adder.get("a_bits_0").unwrap(), 0);
    assert_eq!(adder.get("a_bits_1").unwrap(), 1);
    assert_eq!(ctx.sim.stats.steps, 0);
}
