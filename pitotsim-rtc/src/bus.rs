//! Register Bus Interface
//!
//! The minimum a clock probe needs from an I2C-style device handle: read a
//! run of registers, hold the bus while doing it, and a retry budget the
//! controller applies to transient failures.
//!
//! Reads are non-blocking in the `nb` sense. `WouldBlock` means the
//! controller is busy (another transfer in flight, clock stretching) and the
//! caller may try again. Anything else is a real failure.
//!
//! ```text
//! read_with_retries:
//!     attempt ──Ok──▶ done
//!        │
//!   WouldBlock ──(retries left)──▶ attempt
//!        │ (budget spent)
//!        ▼
//!     Timeout
//! ```

use crate::errors::BusError;

/// Device handle on a register bus, already bound to one device address
pub trait RegisterBus {
    /// Read `buf.len()` consecutive registers starting at `reg`
    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> nb::Result<(), BusError>;

    /// Retry budget the controller should apply to each transfer
    fn set_retries(&mut self, retries: u8);

    /// Run `f` with exclusive access to the bus
    fn with_lock<R, F>(&mut self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> R;
}

/// Read registers, retrying while the bus reports `WouldBlock`
///
/// Makes at most `retries + 1` attempts. Hard errors are returned as soon as
/// they occur.
pub fn read_with_retries<B: RegisterBus>(
    bus: &mut B,
    reg: u8,
    buf: &mut [u8],
    retries: u8,
) -> Result<(), BusError> {
    for _ in 0..=retries {
        match bus.read_registers(reg, buf) {
            Ok(()) => return Ok(()),
            Err(nb::Error::WouldBlock) => continue,
            Err(nb::Error::Other(e)) => return Err(e),
        }
    }
    log_warn!("register 0x{:02x}: busy after {} retries", reg, retries);
    Err(BusError::Timeout)
}
