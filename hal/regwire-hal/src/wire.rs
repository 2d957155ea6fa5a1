//! Staging transport over an I2C master
//!
//! [`WireTransport`] turns the transaction-level [`I2cBus`] into the
//! byte-at-a-time [`BusTransport`] primitives. Outgoing bytes are collected
//! until `end_transaction`, which performs a single bus write. Incoming
//! bytes are fetched in one bus read by `request_from` and handed out one
//! at a time by `read_byte`.

use heapless::Vec;

use crate::i2c::{I2cBus, I2cBusError};
use crate::transport::{BusTransport, TransmitStatus};

/// Default staging buffer size in bytes
pub const DEFAULT_BUFFER_LENGTH: usize = 32;

/// Byte-level transport backed by an [`I2cBus`]
///
/// `N` is the capacity of each staging buffer. A transaction that queues
/// more than `N` bytes is not sent and closes with
/// [`TransmitStatus::DATA_TOO_LONG`]. A request for more than `N` bytes is
/// clamped to `N`.
pub struct WireTransport<B, const N: usize = DEFAULT_BUFFER_LENGTH> {
    bus: B,
    tx_address: u8,
    tx: Vec<u8, N>,
    tx_overflow: bool,
    rx: Vec<u8, N>,
    rx_pos: usize,
}

impl<B, const N: usize> WireTransport<B, N>
where
    B: I2cBus,
    B::Error: Into<I2cBusError>,
{
    /// Create a transport over the given bus master
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            tx_address: 0,
            tx: Vec::new(),
            tx_overflow: false,
            rx: Vec::new(),
            rx_pos: 0,
        }
    }

    /// Release the bus master
    pub fn release(self) -> B {
        self.bus
    }

    /// Get the bus master
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Get the bus master mutably
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

impl<B, const N: usize> BusTransport for WireTransport<B, N>
where
    B: I2cBus,
    B::Error: Into<I2cBusError>,
{
    fn begin_transaction(&mut self, address: u8) {
        self.tx_address = address;
        self.tx.clear();
        self.tx_overflow = false;
    }

    fn write_byte(&mut self, value: u8) {
        if self.tx.push(value).is_err() {
            self.tx_overflow = true;
        }
    }

    fn end_transaction(&mut self) -> TransmitStatus {
        if self.tx_overflow {
            self.tx.clear();
            self.tx_overflow = false;
            return TransmitStatus::DATA_TOO_LONG;
        }

        let status = match self.bus.write(self.tx_address, &self.tx) {
            Ok(()) => TransmitStatus::SUCCESS,
            Err(e) => {
                let err: I2cBusError = e.into();
                err.transmit_status()
            }
        };
        self.tx.clear();
        status
    }

    fn request_from(&mut self, address: u8, count: usize) {
        let count = count.min(N);
        self.rx.clear();
        self.rx_pos = 0;

        // Capacity is N and count <= N, so the resize cannot fail
        let _ = self.rx.resize(count, 0);
        if self.bus.read(address, &mut self.rx).is_err() {
            self.rx.clear();
        }
    }

    fn available(&self) -> usize {
        self.rx.len() - self.rx_pos
    }

    fn read_byte(&mut self) -> u8 {
        match self.rx.get(self.rx_pos) {
            Some(&byte) => {
                self.rx_pos += 1;
                byte
            }
            None => 0xFF,
        }
    }
}
