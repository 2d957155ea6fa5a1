//! Register-addressed bus device
//!
//! Every operation is one or two bus transactions run to completion:
//!
//! ```text
//! write:  BEGIN(addr) REG DATA.. END -> status
//! read:   BEGIN(addr) REG END         (register select, status ignored)
//!         REQUEST(addr, n) -> available == n ? drain n : fail
//! ```
//!
//! Nothing is buffered, retried or cached between calls.

use regwire_hal::BusTransport;

use crate::error::BusError;
use crate::identity::DeviceIdentity;
use crate::word::{assemble_be, LowByte};

/// One peripheral on a two-wire bus
///
/// Generic over the transport handle. Pass the transport by value for a
/// single device, `&mut` to lend it, or `&RefCell` to share it between
/// several devices.
pub struct BusDevice<T> {
    transport: T,
    identity: DeviceIdentity,
}

impl<T: BusTransport> BusDevice<T> {
    /// Bind a device to a transport
    ///
    /// Performs no I/O.
    pub fn new(transport: T, identity: DeviceIdentity) -> Self {
        Self {
            transport,
            identity,
        }
    }

    /// Bind a device to a transport from its raw identity fields
    pub fn with_address(
        transport: T,
        bus_address: u8,
        identity_register: u8,
        expected_identity: u8,
    ) -> Self {
        Self::new(
            transport,
            DeviceIdentity::new(bus_address, identity_register, expected_identity),
        )
    }

    /// Get the device identity
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// Transport-level device address
    pub fn bus_address(&self) -> u8 {
        self.identity.bus_address
    }

    /// Register holding the identity byte
    pub fn identity_register(&self) -> u8 {
        self.identity.identity_register
    }

    /// Identity byte the device is expected to report
    pub fn expected_identity(&self) -> u8 {
        self.identity.expected_identity
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the transport mutably
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Write one byte to a register
    pub fn write_byte(&mut self, register: u8, value: u8) -> Result<(), BusError> {
        self.transmit(register, core::iter::once(value))
    }

    /// Write a block of bytes starting at a register
    ///
    /// An empty block sends only the register address.
    pub fn write_block(&mut self, register: u8, data: &[u8]) -> Result<(), BusError> {
        self.transmit(register, data.iter().copied())
    }

    /// Write wider-typed values, sending only the low byte of each
    ///
    /// Values are not split. A `u16` of `0x1234` goes on the wire as `0x34`.
    pub fn write_block_low_bytes<W: LowByte>(
        &mut self,
        register: u8,
        values: &[W],
    ) -> Result<(), BusError> {
        self.transmit(register, values.iter().map(|v| v.low_byte()))
    }

    /// Read one byte from a register
    pub fn read_byte(&mut self, register: u8) -> Result<u8, BusError> {
        self.request(register, 1)?;
        Ok(self.transport.read_byte())
    }

    /// Read `buf.len()` bytes starting at a register
    ///
    /// `buf` is left untouched on failure.
    pub fn read_block(&mut self, register: u8, buf: &mut [u8]) -> Result<(), BusError> {
        self.request(register, buf.len())?;
        for slot in buf.iter_mut() {
            *slot = self.transport.read_byte();
        }
        Ok(())
    }

    /// Read a 16-bit big-endian value starting at a register
    pub fn read_word(&mut self, register: u8) -> Result<u16, BusError> {
        self.request(register, 2)?;
        let high = self.transport.read_byte();
        let low = self.transport.read_byte();
        Ok(assemble_be(high, low))
    }

    /// Select a register and request `count` bytes from the device
    ///
    /// Succeeds only when exactly `count` bytes are staged. The status of
    /// the register-select close is not checked; the availability count is
    /// the only gate. Staged bytes are left for the caller to drain.
    pub fn request(&mut self, register: u8, count: usize) -> Result<(), BusError> {
        let address = self.identity.bus_address;

        self.transport.begin_transaction(address);
        self.transport.write_byte(register);
        let _ = self.transport.end_transaction();

        self.transport.request_from(address, count);

        let available = self.transport.available();
        if available != count {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "dev {=u8:#x} reg {=u8:#x}: requested {} bytes, {} available",
                address,
                register,
                count,
                available
            );
            return Err(BusError::LengthMismatch {
                requested: count,
                available,
            });
        }

        Ok(())
    }

    /// Check that the device is present and reports the expected identity
    ///
    /// A failed read and a wrong identity both report `false`.
    pub fn is_connected(&mut self) -> bool {
        match self.read_byte(self.identity.identity_register) {
            Ok(id) if self.identity.matches(id) => true,
            Ok(_id) => {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "dev {=u8:#x}: identity {=u8:#x}, expected {=u8:#x}",
                    self.identity.bus_address,
                    _id,
                    self.identity.expected_identity
                );
                false
            }
            Err(_) => false,
        }
    }

    /// Send a register address followed by a payload in one transaction
    fn transmit<I>(&mut self, register: u8, payload: I) -> Result<(), BusError>
    where
        I: IntoIterator<Item = u8>,
    {
        self.transport.begin_transaction(self.identity.bus_address);
        self.transport.write_byte(register);
        for byte in payload {
            self.transport.write_byte(byte);
        }

        let status = self.transport.end_transaction();
        if !status.is_success() {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "dev {=u8:#x} reg {=u8:#x}: write failed with status {}",
                self.identity.bus_address,
                register,
                status.code()
            );
            return Err(BusError::Transmit(status));
        }

        Ok(())
    }
}
