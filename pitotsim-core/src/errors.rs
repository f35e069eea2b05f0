//! Error Types for the Airspeed Simulator
//!
//! ## Design Philosophy
//!
//! The simulator models a physical sensor, and a physical pitot tube does not
//! report errors when the air does something odd. Numeric hazards (zero
//! pressure, a negative square-root operand, a degenerate calibration ratio)
//! are therefore clamped where they occur and never surface here.
//!
//! What remains are failures of the *caller*:
//!
//! - `InvalidInstance`: asked for a sensor slot that does not exist
//! - `InvalidConfig`: a configuration that cannot describe a real sensor,
//!   reported by explicit validation only
//!
//! Errors are `Copy` and carry only `&'static str` messages so they can be
//! returned from the read path without allocation.
//!
//! ```rust
//! use pitotsim_core::{AirspeedSim, SimError, SimState, ZeroNoise};
//!
//! let mut sim = AirspeedSim::new(ZeroNoise);
//! let state = SimState::default();
//!
//! match sim.get_differential_pressure(7, &state) {
//!     Ok(_) => unreachable!(),
//!     Err(SimError::InvalidInstance { instance, max }) => {
//!         assert_eq!((instance, max), (7, 2));
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for simulator operations
pub type SimResult<T> = Result<T, SimError>;

/// Simulator errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// Sensor slot index outside `[0, AIRSPEED_MAX_SENSORS)`
    #[error("Airspeed instance {instance} out of range (max {max})")]
    InvalidInstance {
        /// Requested slot
        instance: usize,
        /// Number of slots available
        max: usize,
    },

    /// Sensor configuration cannot describe a physical sensor
    #[error("Invalid sensor configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with it
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SimError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInstance { instance, max } =>
                defmt::write!(fmt, "Instance {} out of range (max {})", instance, max),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
        }
    }
}
