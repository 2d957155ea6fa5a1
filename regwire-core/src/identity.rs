//! Device identity
//!
//! The fixed facts a driver knows about its peripheral before touching
//! the bus: where it lives and how it identifies itself.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Address and identity of one bus device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceIdentity {
    /// Transport-level device address
    pub bus_address: u8,
    /// Register holding the identity byte
    pub identity_register: u8,
    /// Identity byte the device is expected to report
    pub expected_identity: u8,
}

impl DeviceIdentity {
    /// Create a device identity
    pub const fn new(bus_address: u8, identity_register: u8, expected_identity: u8) -> Self {
        Self {
            bus_address,
            identity_register,
            expected_identity,
        }
    }

    /// Check a byte read from the identity register
    pub const fn matches(&self, identity: u8) -> bool {
        self.expected_identity == identity
    }
}
