//! DS3231 Real-Time Clock Probe
//!
//! Simulated autopilots keep real hardware clocks in the loop on some bench
//! rigs. Before trusting the wall-clock time from one, the harness checks two
//! things: that the chip on the bus really is a DS3231, and that its
//! oscillator has not stopped since the time was last set.
//!
//! ## Registers
//!
//! ```text
//! Reg   Name      Used for
//! -------------------------------------------------------------
//! 0x0e  Control   power-up value 0x1c (28) identifies the part
//! 0x0f  Status    bit 7 OSF: oscillator stopped, time is stale
//! ```
//!
//! Source: Maxim DS3231 datasheet, register map.
//!
//! A control register that reads anything other than the power-up value is
//! reported as [`RtcStatus::UnknownDevice`] without failing: some other RTC
//! or a DS3231 whose control register was reprogrammed. Only a bus failure
//! makes the probe fail.

use crate::bus::{read_with_retries, RegisterBus};
use crate::errors::RtcError;

/// 7-bit I2C address of the DS3231
pub const DS3231_ADDRESS: u8 = 0x68;

/// Control register
pub const REG_CONTROL: u8 = 0x0e;

/// Status register
pub const REG_STATUS: u8 = 0x0f;

/// Control register value after power-up
pub const CONTROL_POWER_UP: u8 = 28;

/// Oscillator-stop flag in the status register
pub const STATUS_OSF: u8 = 0x80;

/// Transient-failure retries per transfer
pub const DS3231_RETRIES: u8 = 5;

/// Outcome of a clock probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcStatus {
    /// DS3231 found, oscillator ran continuously
    ClockValid,
    /// DS3231 found, oscillator stopped at some point
    ClockLost,
    /// Something answered, but not with a DS3231 control value
    UnknownDevice {
        /// Control register as read
        control: u8,
    },
}

impl RtcStatus {
    /// Time read from this clock can be trusted
    pub fn is_valid(&self) -> bool {
        matches!(self, RtcStatus::ClockValid)
    }
}

/// DS3231 on a register bus
#[derive(Debug)]
pub struct Ds3231<B> {
    bus: B,
    status: Option<RtcStatus>,
}

impl<B: RegisterBus> Ds3231<B> {
    /// Wrap a device handle opened at [`DS3231_ADDRESS`]
    pub fn new(bus: B) -> Self {
        Self { bus, status: None }
    }

    /// Identify the chip and check its oscillator
    pub fn init(&mut self) -> Result<RtcStatus, RtcError> {
        self.bus.set_retries(DS3231_RETRIES);

        let status = self.bus.with_lock(|bus| -> Result<RtcStatus, RtcError> {
            let mut control = [0u8; 1];
            read_with_retries(bus, REG_CONTROL, &mut control, DS3231_RETRIES)?;
            if control[0] != CONTROL_POWER_UP {
                return Ok(RtcStatus::UnknownDevice { control: control[0] });
            }

            let mut status = [0u8; 1];
            read_with_retries(bus, REG_STATUS, &mut status, DS3231_RETRIES)?;
            if status[0] & STATUS_OSF == 0 {
                Ok(RtcStatus::ClockValid)
            } else {
                Ok(RtcStatus::ClockLost)
            }
        })?;

        log_debug!("ds3231 probe: {:?}", status);
        self.status = Some(status);
        Ok(status)
    }

    /// Result of the last successful probe
    pub fn status(&self) -> Option<RtcStatus> {
        self.status
    }

    /// Clock probed and found valid
    pub fn clock_valid(&self) -> bool {
        self.status.is_some_and(|s| s.is_valid())
    }

    /// Borrow the device handle
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Give back the device handle
    pub fn release(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BusError;
    use crate::mock::MockRegisterBus;

    fn ds3231(status: u8) -> MockRegisterBus {
        MockRegisterBus::new()
            .with_register(REG_CONTROL, CONTROL_POWER_UP)
            .with_register(REG_STATUS, status)
    }

    #[test]
    fn running_oscillator_is_valid() {
        let mut rtc = Ds3231::new(ds3231(0x00));
        assert_eq!(rtc.init(), Ok(RtcStatus::ClockValid));
        assert!(rtc.clock_valid());
    }

    #[test]
    fn stopped_oscillator_is_lost() {
        let mut rtc = Ds3231::new(ds3231(STATUS_OSF | 0x08));
        assert_eq!(rtc.init(), Ok(RtcStatus::ClockLost));
        assert!(!rtc.clock_valid());
    }

    #[test]
    fn other_status_bits_ignored() {
        let mut rtc = Ds3231::new(ds3231(0x7f));
        assert_eq!(rtc.init(), Ok(RtcStatus::ClockValid));
    }

    #[test]
    fn unknown_control_value_still_succeeds() {
        let bus = MockRegisterBus::new().with_register(REG_CONTROL, 0x04);
        let mut rtc = Ds3231::new(bus);
        assert_eq!(rtc.init(), Ok(RtcStatus::UnknownDevice { control: 0x04 }));
        assert!(!rtc.clock_valid());
        // status register never read
        assert_eq!(rtc.bus().attempts(), 1);
    }

    #[test]
    fn bus_failure_fails_probe() {
        let mut rtc = Ds3231::new(ds3231(0).with_fault(BusError::Nack));
        assert_eq!(rtc.init(), Err(RtcError::Bus(BusError::Nack)));
        assert_eq!(rtc.status(), None);
    }

    #[test]
    fn probe_sets_retries_and_holds_lock() {
        let mut rtc = Ds3231::new(ds3231(0).with_would_block(2));
        assert_eq!(rtc.init(), Ok(RtcStatus::ClockValid));

        let bus = rtc.release();
        assert_eq!(bus.retries(), Some(DS3231_RETRIES));
        assert_eq!(bus.attempts(), 4);
        assert_eq!(bus.unlocked_attempts(), 0);
    }

    #[test]
    fn busy_past_budget_times_out() {
        let mut rtc = Ds3231::new(ds3231(0).with_would_block(u32::from(DS3231_RETRIES) + 1));
        assert_eq!(rtc.init(), Err(RtcError::Bus(BusError::Timeout)));
    }
}
