//! Configuration system for the circuit simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! [`Simulator`](crate::sim::Simulator). It provides:
//! 1. **Defaults:** Baseline constants for stepping and diagnostics.
//! 2. **Structures:** Hierarchical config for general and driver settings.
//! 3. **Loading:** JSON deserialization with per-field defaults.
//!
//! Every field is optional in JSON; `SimConfig::default()` matches an empty object.

use serde::Deserialize;

use crate::common::Result;

/// Default configuration constants for the simulator.
mod defaults {
    /// Steps taken by `Simulator::settle`.
    ///
    /// Enough for the socket depth of a full adder with a wrapping bridge layer.
    /// Deeper circuits must step further themselves; nothing detects convergence.
    pub const SETTLE_STEPS: usize = 20;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use gatebank_core::config::SimConfig;
///
/// let json = r#"{
///     "general": { "trace_steps": true },
///     "driver": { "settle_steps": 64 }
/// }"#;
///
/// let config = SimConfig::from_json(json).unwrap();
/// assert!(config.general.trace_steps);
/// assert_eq!(config.driver.settle_steps, 64);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimConfig {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Stepping behaviour of the simulation driver
    #[serde(default)]
    pub driver: DriverConfig,
}

impl SimConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`](crate::common::SimError::Config) if the text is not
    /// valid configuration JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event for every step
    #[serde(default)]
    pub trace_steps: bool,
}

/// Simulation driver settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Number of steps `settle` takes
    #[serde(default = "DriverConfig::default_settle_steps")]
    pub settle_steps: usize,
}

impl DriverConfig {
    /// Returns the default settle step count.
    fn default_settle_steps() -> usize {
        defaults::SETTLE_STEPS
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            settle_steps: defaults::SETTLE_STEPS,
        }
    }
}
