//! Declarative circuit descriptions.
//!
//! A `Schematic` records gates, wire bridges, sub-circuit references, connections,
//! exposed ports, and aliases. It owns no storage, so it can be cloned and shared
//! freely; nothing is allocated until [`Schematic::build`] runs against a simulator.
//!
//! Sub-circuits are referenced through shared `Arc<Schematic>` handles. A schematic
//! behind a shared handle is immutable, so references always form a tree of
//! snapshots. Each schematic also carries the names of every schematic it reaches
//! through its sub-circuits, which is how circular references are rejected by name.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::common::{Result, SimError};

/// One named layout over a wire bridge's cell.
///
/// Field `i` of the view is published as `"<name>_<i>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeView {
    /// View name; prefix of every field name.
    pub name: String,
    /// Field widths, laid out contiguously from bit 0.
    pub port_sizes: Vec<usize>,
}

impl BridgeView {
    /// Creates a view named `name` with the given field widths.
    pub fn new(name: impl Into<String>, port_sizes: impl Into<Vec<usize>>) -> Self {
        Self {
            name: name.into(),
            port_sizes: port_sizes.into(),
        }
    }
}

/// A wire bridge: every view shares one storage cell.
pub type Bridge = Vec<BridgeView>;

/// Uninstantiated description of a circuit.
#[derive(Clone, Debug, Default)]
pub struct Schematic {
    pub(super) name: String,
    pub(super) and_gates: Vec<String>,
    pub(super) not_gates: Vec<String>,
    pub(super) or_gates: Vec<String>,
    pub(super) xor_gates: Vec<String>,
    pub(super) wire_bridges: Vec<Bridge>,
    pub(super) sub_circuits: Vec<(String, Arc<Schematic>)>,
    pub(super) connections: Vec<(String, String)>,
    pub(super) exposed_ports: Vec<String>,
    pub(super) aliases: Vec<(String, String)>,
    dependencies: BTreeSet<String>,
}

impl Schematic {
    /// Creates an empty schematic.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Schematic name, used for dependency tracking.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of every schematic reachable through sub-circuit references.
    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    /// Returns `true` if `name` is reachable through sub-circuit references.
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.contains(name)
    }

    /// Declared sub-circuits as `(instance name, schematic)`, in declaration order.
    pub fn sub_circuits(&self) -> &[(String, Arc<Self>)] {
        &self.sub_circuits
    }

    /// Declares an AND gate with terminals `<name>_a`, `<name>_b`, `<name>_c`.
    pub fn add_and_gate(&mut self, name: impl Into<String>) {
        self.and_gates.push(name.into());
    }

    /// Declares a NOT gate with terminals `<name>_a`, `<name>_b`.
    pub fn add_not_gate(&mut self, name: impl Into<String>) {
        self.not_gates.push(name.into());
    }

    /// Declares an OR gate with terminals `<name>_a`, `<name>_b`, `<name>_c`.
    pub fn add_or_gate(&mut self, name: impl Into<String>) {
        self.or_gates.push(name.into());
    }

    /// Declares an XOR gate with terminals `<name>_a`, `<name>_b`, `<name>_c`.
    pub fn add_xor_gate(&mut self, name: impl Into<String>) {
        self.xor_gates.push(name.into());
    }

    /// Declares a wire bridge; every view overlays the same storage cell.
    pub fn add_wire_bridge(&mut self, bridge: impl Into<Bridge>) {
        self.wire_bridges.push(bridge.into());
    }

    /// Declares a socket copying port `from` into port `to` every step.
    pub fn add_connection(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.connections.push((from.into(), to.into()));
    }

    /// Publishes `port` to the caller and, for sub-circuits, to the parent
    /// as `"<instance name>_<port>"`.
    pub fn add_exposed_port(&mut self, port: impl Into<String>) {
        self.exposed_ports.push(port.into());
    }

    /// Binds `alias` to the exact field of `target` (same cell, same range).
    pub fn add_alias(&mut self, target: impl Into<String>, alias: impl Into<String>) {
        self.aliases.push((target.into(), alias.into()));
    }

    /// Instantiates `schematic` as a child named `name`.
    ///
    /// # Errors
    ///
    /// [`SimError::CircularDependency`] if `schematic` already depends on this
    /// schematic, directly or transitively. A child carrying this schematic's own
    /// name is rejected too, even with an empty dependency set. References are
    /// tracked by name only, so such a child is indistinguishable from a self-reference.
    pub fn add_sub_circuit(&mut self, name: impl Into<String>, schematic: Arc<Self>) -> Result<()> {
        if schematic.name == self.name || schematic.depends_on(&self.name) {
            return Err(SimError::CircularDependency {
                parent: self.name.clone(),
                child: schematic.name.clone(),
            });
        }

        let _ = self.dependencies.insert(schematic.name.clone());
        self.dependencies
            .extend(schematic.dependencies.iter().cloned());
        self.sub_circuits.push((name.into(), schematic));
        Ok(())
    }
}
