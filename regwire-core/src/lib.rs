//! Register-addressed access to two-wire bus devices
//!
//! This crate sequences register reads and writes against a
//! [`regwire_hal::BusTransport`] and confirms a device's identity:
//!
//! - Device identity (bus address, identity register, expected value)
//! - Register write/read primitives with a big-endian word read
//! - Presence check against the identity register
//! - Narrowing helpers for payloads stored wider than a byte
//!
//! Device-specific register maps belong in drivers built on [`BusDevice`].

#![no_std]
#![deny(unsafe_code)]

// Host-side tests use std collections in their mocks
#[cfg(test)]
extern crate std;

pub mod device;
pub mod error;
pub mod identity;
pub mod word;

pub use device::BusDevice;
pub use error::BusError;
pub use identity::DeviceIdentity;
pub use word::{assemble_be, LowByte};
