//! Schematic compilation.
//!
//! Building a schematic walks the whole sub-circuit tree in two passes:
//! 1. **Instantiation:** Breadth-first from the root, one empty instance per
//!    sub-circuit reference. Every instance lands after its parent in the order.
//! 2. **Population:** In reverse of that order, each instance allocates its gates
//!    and bridges, resolves aliases and connections, and publishes its exposed
//!    ports, both locally and into its parent's name map.
//!
//! Reverse order is what makes this work: a parent's connections name its
//! children's re-exposed ports, which only exist once every child has been populated.

use tracing::debug;

use crate::common::Result;
use crate::sim::Simulator;
use crate::storage::build_bridge;

use super::builder::Schematic;
use super::circuit::Circuit;

/// An instance awaiting population.
struct Pending<'a> {
    schematic: &'a Schematic,
    /// Name under which the parent sees this instance.
    name: &'a str,
    /// Index of the parent in the instantiation order; `None` for the root.
    parent: Option<usize>,
    circuit: Circuit,
}

impl Schematic {
    /// Allocates storage for the whole circuit tree and wires it into `sim`.
    ///
    /// # Arguments
    ///
    /// * `sim` - Simulator whose gate pools, bus bank, and sockets receive the circuit.
    ///
    /// # Returns
    ///
    /// The root instance, owning one child per sub-circuit reference.
    ///
    /// # Errors
    ///
    /// [`SimError::PortNotFound`](crate::common::SimError::PortNotFound) for an
    /// unresolved alias, connection, or exposed port;
    /// [`SimError::SocketSizeMismatch`](crate::common::SimError::SocketSizeMismatch)
    /// for a connection between unequal widths;
    /// [`SimError::CapacityExceeded`](crate::common::SimError::CapacityExceeded) for an
    /// oversized bridge view. Storage allocated before the failure stays allocated.
    pub fn build(&self, sim: &mut Simulator) -> Result<Circuit> {
        let mut order = vec![Pending {
            schematic: self,
            name: &self.name,
            parent: None,
            circuit: Circuit::default(),
        }];

        let mut next = 0;
        while next < order.len() {
            let schematic = order[next].schematic;
            for (name, child) in &schematic.sub_circuits {
                order.push(Pending {
                    schematic: child,
                    name,
                    parent: Some(next),
                    circuit: Circuit::default(),
                });
            }
            next += 1;
        }
        debug!(schematic = %self.name, instances = order.len(), "instantiated circuit tree");

        for index in (0..order.len()).rev() {
            let (head, tail) = order.split_at_mut(index);
            let node = &mut tail[0];
            let parent = match node.parent {
                Some(p) => Some(&mut head[p].circuit),
                None => None,
            };
            node.schematic
                .populate(&mut node.circuit, node.name, parent, sim)?;
        }

        // Children come off the end last-first; each list is reversed once its owner is popped.
        let mut root = Circuit::default();
        while let Some(node) = order.pop() {
            let mut circuit = node.circuit;
            circuit.children.reverse();
            match node.parent {
                Some(p) => order[p].circuit.children.push(circuit),
                None => root = circuit,
            }
        }
        Ok(root)
    }

    /// Fills one instance: gates, bridges, aliases, connections, exposed ports.
    fn populate(
        &self,
        circuit: &mut Circuit,
        name_in_parent: &str,
        mut parent: Option<&mut Circuit>,
        sim: &mut Simulator,
    ) -> Result<()> {
        for gate in &self.and_gates {
            let [a, b, c] = sim.and_gates.lend_gate()?;
            circuit.insert_port(format!("{gate}_a"), a);
            circuit.insert_port(format!("{gate}_b"), b);
            circuit.insert_port(format!("{gate}_c"), c);
        }
        for gate in &self.not_gates {
            let [a, b] = sim.not_gates.lend_gate()?;
            circuit.insert_port(format!("{gate}_a"), a);
            circuit.insert_port(format!("{gate}_b"), b);
        }
        for gate in &self.or_gates {
            let [a, b, c] = sim.or_gates.lend_gate()?;
            circuit.insert_port(format!("{gate}_a"), a);
            circuit.insert_port(format!("{gate}_b"), b);
            circuit.insert_port(format!("{gate}_c"), c);
        }
        for gate in &self.xor_gates {
            let [a, b, c] = sim.xor_gates.lend_gate()?;
            circuit.insert_port(format!("{gate}_a"), a);
            circuit.insert_port(format!("{gate}_b"), b);
            circuit.insert_port(format!("{gate}_c"), c);
        }

        for bridge in &self.wire_bridges {
            let widths: Vec<Vec<usize>> = bridge.iter().map(|v| v.port_sizes.clone()).collect();
            let fields = build_bridge(&mut sim.bus_bank, &widths)?;
            for (view, accessors) in bridge.iter().zip(fields) {
                for (i, field) in accessors.into_iter().enumerate() {
                    circuit.insert_port(format!("{}_{i}", view.name), field);
                }
            }
        }

        for (target, alias) in &self.aliases {
            let field = circuit.port(target)?.clone();
            circuit.insert_port(alias.clone(), field);
        }

        for (from, to) in &self.connections {
            let source = circuit.port(from)?.clone();
            let sink = circuit.port(to)?.clone();
            sim.sockets.add_socket(source, sink)?;
        }

        for port in &self.exposed_ports {
            let field = circuit.port(port)?.clone();
            if let Some(parent) = parent.as_deref_mut() {
                parent.insert_port(format!("{name_in_parent}_{port}"), field.clone());
            }
            circuit.expose(port.clone(), field);
        }

        debug!(
            instance = name_in_parent,
            ports = circuit.ports().len(),
            exposed = circuit.exposed_ports().len(),
            "populated circuit instance"
        );
        Ok(())
    }
}
