//! I2C bus abstractions
//!
//! Provides the transaction-level master trait that [`crate::wire::WireTransport`]
//! sits on, and a bridge from `embedded-hal` I2C implementations.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};

use crate::transport::TransmitStatus;

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// Address byte not acknowledged
    AddressNack,
    /// Data byte not acknowledged
    DataNack,
    /// Timeout
    ///
    /// `embedded-hal` has no timeout kind, so only chip HALs that detect
    /// timeouts themselves report this.
    Timeout,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl I2cBusError {
    /// Status code a transport reports when closing on this error
    pub fn transmit_status(self) -> TransmitStatus {
        match self {
            I2cBusError::AddressNack => TransmitStatus::ADDRESS_NACK,
            I2cBusError::DataNack => TransmitStatus::DATA_NACK,
            I2cBusError::Timeout => TransmitStatus::TIMEOUT,
            I2cBusError::Bus
            | I2cBusError::ArbitrationLost
            | I2cBusError::Overrun
            | I2cBusError::Other => TransmitStatus::OTHER,
        }
    }
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            // An unknown NACK source is most often an absent device
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => I2cBusError::DataNack,
            ErrorKind::NoAcknowledge(_) => I2cBusError::AddressNack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// Adapter exposing an `embedded-hal` I2C master as an [`I2cBus`]
pub struct EmbeddedHal<T> {
    inner: T,
}

impl<T: I2c> EmbeddedHal<T> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Release the wrapped master
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T: I2c> I2cBus for EmbeddedHal<T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.inner
            .read(address, buf)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}
