//! Socket interconnect: directional point-to-point wires between fields.
//!
//! This module implements the wiring layer that carries values between gate
//! terminals and bus fields. It provides:
//! 1. **Registration:** Sockets are appended in order; both ends must have equal width.
//! 2. **Propagation:** Every tick copies each source field into its destination once.
//! 3. **Ordering:** Sockets run in insertion order with no dependency sorting, so a
//!    chain of N sockets needs N ticks to carry a change end to end.

use crate::common::{Result, SimError};
use crate::storage::FieldAccessor;

/// A directional wire copying `from` into `to` on every tick.
#[derive(Clone, Debug)]
pub struct Socket {
    from: FieldAccessor,
    to: FieldAccessor,
}

impl Socket {
    /// Source field.
    pub fn source(&self) -> &FieldAccessor {
        &self.from
    }

    /// Destination field.
    pub fn target(&self) -> &FieldAccessor {
        &self.to
    }

    /// Copies the source value into the destination.
    ///
    /// # Errors
    ///
    /// [`SimError::DanglingReference`] if either end's cell is gone.
    pub fn tick(&self) -> Result<()> {
        self.to.set(self.from.get()?)
    }
}

/// Registry of every socket in the simulation.
#[derive(Debug, Default)]
pub struct SocketController {
    sockets: Vec<Socket>,
}

impl SocketController {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            sockets: Vec::new(),
        }
    }

    /// Registers a wire from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`SimError::SocketSizeMismatch`] if the two fields differ in width.
    pub fn add_socket(&mut self, from: FieldAccessor, to: FieldAccessor) -> Result<()> {
        if from.width() != to.width() {
            return Err(SimError::SocketSizeMismatch {
                from: from.width(),
                to: to.width(),
            });
        }
        self.sockets.push(Socket { from, to });
        Ok(())
    }

    /// Applies every socket once, in insertion order.
    ///
    /// # Returns
    ///
    /// The number of sockets applied.
    ///
    /// # Errors
    ///
    /// The first [`SimError::DanglingReference`] encountered; later sockets are not applied.
    pub fn tick(&self) -> Result<usize> {
        for socket in &self.sockets {
            socket.tick()?;
        }
        Ok(self.sockets.len())
    }

    /// All registered sockets, in insertion order.
    pub fn sockets(&self) -> &[Socket] {
        &self.sockets
    }

    /// Number of registered sockets.
    pub fn len(&self) -> usize {
        self.sockets.len()
    }

    /// Returns `true` if no socket has been registered.
    pub fn is_empty(&self) -> bool {
        self.sockets.is_empty()
    }
}
