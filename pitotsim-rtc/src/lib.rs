//! Real-time-clock probe for simulation harnesses
//!
//! A register-bus abstraction with retry handling, and a DS3231 driver that
//! decides whether the hardware clock's time can be trusted.
//!
//! ```rust
//! use pitotsim_rtc::{Ds3231, MockRegisterBus, RtcStatus};
//!
//! let bus = MockRegisterBus::new().with_register(0x0e, 28);
//! let mut rtc = Ds3231::new(bus);
//!
//! assert_eq!(rtc.init()?, RtcStatus::ClockValid);
//! # Ok::<(), pitotsim_rtc::RtcError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod bus;
pub mod ds3231;
pub mod errors;
pub mod mock;

pub use bus::{read_with_retries, RegisterBus};
pub use ds3231::{Ds3231, RtcStatus, DS3231_ADDRESS};
pub use errors::{BusError, RtcError};
pub use mock::MockRegisterBus;
