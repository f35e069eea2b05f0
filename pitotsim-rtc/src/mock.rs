//! In-memory register bus for tests and harnesses

use crate::bus::RegisterBus;
use crate::errors::BusError;

/// A 256-byte register file behind a [`RegisterBus`]
///
/// Can be told to report `WouldBlock` for the next few attempts, or to fail
/// every transfer with a fixed error. Counts attempts and notes whether each
/// one happened while the bus lock was held.
#[derive(Debug, Clone)]
pub struct MockRegisterBus {
    registers: [u8; 256],
    would_block: u32,
    fault: Option<BusError>,
    retries: Option<u8>,
    locked: bool,
    attempts: u32,
    unlocked_attempts: u32,
}

impl Default for MockRegisterBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRegisterBus {
    /// All registers zero, no faults
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            would_block: 0,
            fault: None,
            retries: None,
            locked: false,
            attempts: 0,
            unlocked_attempts: 0,
        }
    }

    /// Preset one register
    pub fn with_register(mut self, reg: u8, value: u8) -> Self {
        self.registers[reg as usize] = value;
        self
    }

    /// Report `WouldBlock` for the next `count` attempts
    pub fn with_would_block(mut self, count: u32) -> Self {
        self.would_block = count;
        self
    }

    /// Fail every transfer with `error`
    pub fn with_fault(mut self, error: BusError) -> Self {
        self.fault = Some(error);
        self
    }

    /// Write a register after construction
    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.registers[reg as usize] = value;
    }

    /// Transfers attempted, including busy ones
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Transfers attempted without holding the lock
    pub fn unlocked_attempts(&self) -> u32 {
        self.unlocked_attempts
    }

    /// Last retry budget set by a driver
    pub fn retries(&self) -> Option<u8> {
        self.retries
    }
}

impl RegisterBus for MockRegisterBus {
    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> nb::Result<(), BusError> {
        self.attempts += 1;
        if !self.locked {
            self.unlocked_attempts += 1;
        }

        if self.would_block > 0 {
            self.would_block -= 1;
            return Err(nb::Error::WouldBlock);
        }
        if let Some(e) = self.fault {
            return Err(nb::Error::Other(e));
        }

        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.registers[reg.wrapping_add(offset as u8) as usize];
        }
        Ok(())
    }

    fn set_retries(&mut self, retries: u8) {
        self.retries = Some(retries);
    }

    fn with_lock<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.locked = true;
        let result = f(self);
        self.locked = false;
        result
    }
}
