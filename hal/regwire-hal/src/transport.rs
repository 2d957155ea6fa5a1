//! Byte-level bus transport
//!
//! The transport stages outgoing bytes between `begin_transaction` and
//! `end_transaction`, and stages incoming bytes from `request_from` until
//! they are drained with `read_byte`. Register-addressed access is built
//! entirely out of these six primitives.

use core::cell::RefCell;

/// Status reported when a transaction is closed
///
/// Zero is success. Any other value is a transport-defined failure; the
/// named codes follow the conventional two-wire driver numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransmitStatus(pub u8);

impl TransmitStatus {
    /// Transaction completed
    pub const SUCCESS: Self = Self(0);
    /// Payload did not fit in the transmit buffer
    pub const DATA_TOO_LONG: Self = Self(1);
    /// Address byte was not acknowledged
    pub const ADDRESS_NACK: Self = Self(2);
    /// A data byte was not acknowledged
    pub const DATA_NACK: Self = Self(3);
    /// Any other bus error
    pub const OTHER: Self = Self(4);
    /// Bus timed out
    pub const TIMEOUT: Self = Self(5);

    /// Raw status code
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Check if the transaction completed without error
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for TransmitStatus {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

/// Platform bus driver primitives
///
/// All calls are blocking. `request_from` is expected to wait until the
/// read has either completed or failed, so `available` reflects the
/// outcome immediately afterwards.
pub trait BusTransport {
    /// Start an addressed write transaction
    fn begin_transaction(&mut self, address: u8);

    /// Queue one byte within the open transaction
    fn write_byte(&mut self, value: u8);

    /// Flush the open transaction and report its status
    fn end_transaction(&mut self) -> TransmitStatus;

    /// Read up to `count` bytes from `address` into the receive stage
    fn request_from(&mut self, address: u8, count: usize);

    /// Number of received bytes not yet drained
    fn available(&self) -> usize;

    /// Consume one received byte
    ///
    /// Returns `0xFF` (idle bus level) when nothing is staged.
    fn read_byte(&mut self) -> u8;
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    fn begin_transaction(&mut self, address: u8) {
        (**self).begin_transaction(address)
    }

    fn write_byte(&mut self, value: u8) {
        (**self).write_byte(value)
    }

    fn end_transaction(&mut self) -> TransmitStatus {
        (**self).end_transaction()
    }

    fn request_from(&mut self, address: u8, count: usize) {
        (**self).request_from(address, count)
    }

    fn available(&self) -> usize {
        (**self).available()
    }

    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }
}

/// Shared access for several devices on one bus
///
/// Each primitive borrows the transport only for its own duration, so a
/// nested borrow panics instead of interleaving two transactions.
impl<T: BusTransport> BusTransport for &RefCell<T> {
    fn begin_transaction(&mut self, address: u8) {
        self.borrow_mut().begin_transaction(address)
    }

    fn write_byte(&mut self, value: u8) {
        self.borrow_mut().write_byte(value)
    }

    fn end_transaction(&mut self) -> TransmitStatus {
        self.borrow_mut().end_transaction()
    }

    fn request_from(&mut self, address: u8, count: usize) {
        self.borrow_mut().request_from(address, count)
    }

    fn available(&self) -> usize {
        self.borrow().available()
    }

    fn read_byte(&mut self) -> u8 {
        self.borrow_mut().read_byte()
    }
}
