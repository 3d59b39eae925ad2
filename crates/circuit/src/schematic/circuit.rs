//! Compiled circuit instances.
//!
//! A `Circuit` is the storage-backed result of building a schematic: a name map
//! covering every gate terminal, bridge field, alias, and re-exposed child port,
//! the subset of that map it exposes, and its owned child instances.

use std::collections::BTreeMap;

use tracing::warn;

use crate::common::{Result, SimError};
use crate::storage::FieldAccessor;

/// One instantiated, wired circuit.
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    pub(super) children: Vec<Circuit>,
    ports: BTreeMap<String, FieldAccessor>,
    exposed: BTreeMap<String, FieldAccessor>,
}

impl Circuit {
    /// Child instances, one per sub-circuit reference, in declaration order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Child instance at `index`.
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }

    /// Every name resolvable inside this instance.
    pub fn ports(&self) -> &BTreeMap<String, FieldAccessor> {
        &self.ports
    }

    /// The names this instance publishes.
    pub fn exposed_ports(&self) -> &BTreeMap<String, FieldAccessor> {
        &self.exposed
    }

    /// Looks up `name` in the full name map.
    ///
    /// # Errors
    ///
    /// [`SimError::PortNotFound`] if the name is not declared.
    pub fn port(&self, name: &str) -> Result<&FieldAccessor> {
        self.ports.get(name).ok_or_else(|| SimError::PortNotFound {
            name: name.to_owned(),
        })
    }

    /// Looks up `name` among the exposed ports.
    ///
    /// # Errors
    ///
    /// [`SimError::PortNotFound`] if the name is not exposed.
    pub fn exposed_port(&self, name: &str) -> Result<&FieldAccessor> {
        self.exposed.get(name).ok_or_else(|| SimError::PortNotFound {
            name: name.to_owned(),
        })
    }

    /// Reads the field named `name`.
    ///
    /// # Errors
    ///
    /// [`SimError::PortNotFound`] or [`SimError::DanglingReference`].
    pub fn get(&self, name: &str) -> Result<u64> {
        self.port(name)?.get()
    }

    /// Writes `value` into the field named `name`.
    ///
    /// # Errors
    ///
    /// [`SimError::PortNotFound`] or [`SimError::DanglingReference`].
    pub fn set(&self, name: &str, value: u64) -> Result<()> {
        self.port(name)?.set(value)
    }

    pub(super) fn insert_port(&mut self, name: String, field: FieldAccessor) {
        if self.ports.contains_key(&name) {
            warn!(port = %name, "port declared twice; keeping the later declaration");
        }
        let _ = self.ports.insert(name, field);
    }

    pub(super) fn expose(&mut self, name: String, field: FieldAccessor) {
        let _ = self.exposed.insert(name, field);
    }
}
