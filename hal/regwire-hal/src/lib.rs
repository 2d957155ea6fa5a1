//! Regwire Hardware Abstraction Layer
//!
//! This crate defines the byte-level bus transport that register-addressed
//! device access is sequenced against, plus adapters that provide that
//! transport on top of a transaction-level I2C master.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Device drivers (regwire-core, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │  BusTransport
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  WireTransport (staging buffers)        │
//! └─────────────────────────────────────────┘
//!                     │  I2cBus
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  EmbeddedHal<T> / chip-specific master  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`transport::BusTransport`] - Begin/write/end and request/available/read primitives
//! - [`i2c::I2cBus`] - Transaction-level I2C master operations

#![no_std]
#![deny(unsafe_code)]

// Host-side tests use std collections in their mocks
#[cfg(test)]
extern crate std;

pub mod i2c;
pub mod transport;
pub mod wire;

// Re-export key types at crate root for convenience
pub use i2c::{EmbeddedHal, I2cBus, I2cBusError};
pub use transport::{BusTransport, TransmitStatus};
pub use wire::{WireTransport, DEFAULT_BUFFER_LENGTH};
