//! Bus access errors
//!
//! Callers that only care about success or failure can treat any `Err` as
//! failure. The variants say which gate failed for callers that want more.

use regwire_hal::TransmitStatus;

/// Errors from register access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Closing a write transaction reported a non-zero status
    Transmit(TransmitStatus),
    /// After a read request, the staged byte count was not the requested count
    LengthMismatch {
        /// Bytes requested
        requested: usize,
        /// Bytes the transport reported available
        available: usize,
    },
}

impl BusError {
    /// Transport status code, if this came from a failed close
    pub fn transmit_status(&self) -> Option<TransmitStatus> {
        match self {
            BusError::Transmit(status) => Some(*status),
            BusError::LengthMismatch { .. } => None,
        }
    }
}
