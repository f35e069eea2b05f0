//! Bus and clock errors
//!
//! `WouldBlock` is not an error here: it travels as `nb::Error::WouldBlock`
//! and only becomes [`BusError::Timeout`] once the retry budget is spent.

use thiserror_no_std::Error;

/// Failure of a register transfer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// Device did not acknowledge its address
    #[error("Device did not acknowledge")]
    Nack,

    /// Still busy after every retry
    #[error("Bus timed out after retries")]
    Timeout,

    /// Arbitration loss or other controller fault
    #[error("Bus fault")]
    Bus,
}

/// Failure to probe the real-time clock
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcError {
    /// Register read failed
    #[error("RTC bus error: {0}")]
    Bus(#[from] BusError),
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Nack => defmt::write!(fmt, "Nack"),
            Self::Timeout => defmt::write!(fmt, "Timeout"),
            Self::Bus => defmt::write!(fmt, "Bus fault"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RtcError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Bus(e) => defmt::write!(fmt, "RTC bus error: {}", e),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn bus_error_converts() {
        let err: RtcError = BusError::Nack.into();
        assert_eq!(err, RtcError::Bus(BusError::Nack));
        assert_eq!(err.to_string(), "RTC bus error: Device did not acknowledge");
    }
}
