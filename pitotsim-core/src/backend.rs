//! Airspeed Backend Interface
//!
//! Flight code talks to airspeed sensors through one capability interface,
//! whatever the device behind it. A backend kind is chosen once at startup
//! from configuration and then polled uniformly:
//!
//! ```text
//! BackendKind (from parameter) ──▶ Box<dyn AirspeedBackend> per slot
//!                                        │
//!                    init ─▶ differential_pressure / temperature ...
//! ```
//!
//! Each backend declares the context it needs for a read. The simulated
//! backend needs the [`SimState`] snapshot, a hardware backend would need its
//! bus handle.
//!
//! ```rust
//! use pitotsim_core::{AirspeedBackend, SitlAirspeed, SimState, ZeroNoise};
//!
//! let state = SimState::default().with_airspeed(20.0);
//! let mut pitot = SitlAirspeed::new(0, ZeroNoise);
//!
//! pitot.init(&state)?;
//! let pressure = pitot.differential_pressure(&state)?;
//! assert!(pressure > 0.0);
//! # Ok::<(), pitotsim_core::SimError>(())
//! ```

use core::fmt;

use crate::config::SimState;
use crate::constants::sensors::AIRSPEED_MAX_SENSORS;
use crate::errors::{SimError, SimResult};
use crate::noise::NoiseSource;
use crate::simulator::AirspeedSim;

/// Common capability interface for airspeed sensor backends
pub trait AirspeedBackend {
    /// What a read needs from the outside world
    type Context;

    /// Prepare the device. Called once before the first read.
    fn init(&mut self, context: &Self::Context) -> SimResult<()>;

    /// Differential pressure (Pa)
    fn differential_pressure(&mut self, context: &Self::Context) -> SimResult<f32>;

    /// Sensor temperature (°C)
    fn temperature(&mut self, context: &Self::Context) -> SimResult<f32>;

    /// Slot this backend serves
    fn instance(&self) -> usize;
}

/// Backend kinds selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BackendKind {
    /// Slot disabled
    None = 0,
    /// Simulated pitot-static sensor
    Sitl = 100,
}

impl BackendKind {
    /// Kind for a raw parameter value; unknown values disable the slot
    pub const fn from_param(value: u8) -> Self {
        match value {
            100 => BackendKind::Sitl,
            _ => BackendKind::None,
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            BackendKind::None => "none",
            BackendKind::Sitl => "sitl",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Simulated airspeed sensor serving one slot
#[derive(Debug, Clone)]
pub struct SitlAirspeed<N> {
    instance: usize,
    sim: AirspeedSim<N>,
}

impl<N: NoiseSource> SitlAirspeed<N> {
    /// Backend for `instance` drawing noise from `noise`
    pub fn new(instance: usize, noise: N) -> Self {
        Self {
            instance,
            sim: AirspeedSim::new(noise),
        }
    }

    /// Underlying simulator
    pub fn simulator(&self) -> &AirspeedSim<N> {
        &self.sim
    }
}

impl<N: NoiseSource> AirspeedBackend for SitlAirspeed<N> {
    type Context = SimState;

    fn init(&mut self, _context: &SimState) -> SimResult<()> {
        if self.instance >= AIRSPEED_MAX_SENSORS {
            return Err(SimError::InvalidInstance {
                instance: self.instance,
                max: AIRSPEED_MAX_SENSORS,
            });
        }
        log_debug!("airspeed[{}]: sitl backend ready", self.instance);
        Ok(())
    }

    fn differential_pressure(&mut self, context: &SimState) -> SimResult<f32> {
        self.sim.get_differential_pressure(self.instance, context)
    }

    fn temperature(&mut self, context: &SimState) -> SimResult<f32> {
        self.sim.get_temperature(self.instance, context)
    }

    fn instance(&self) -> usize {
        self.instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SensorInstanceConfig;
    use crate::noise::ZeroNoise;

    #[test]
    fn param_values_map_to_kinds() {
        assert_eq!(BackendKind::from_param(100), BackendKind::Sitl);
        assert_eq!(BackendKind::from_param(0), BackendKind::None);
        assert_eq!(BackendKind::from_param(42), BackendKind::None);
        assert_eq!(BackendKind::Sitl as u8, 100);
    }

    #[test]
    fn init_rejects_missing_slot() {
        let mut pitot = SitlAirspeed::new(AIRSPEED_MAX_SENSORS, ZeroNoise);
        let state = SimState::default();
        assert!(pitot.init(&state).is_err());
        assert!(pitot.differential_pressure(&state).is_err());
        assert!(pitot.temperature(&state).is_err());
    }

    #[test]
    fn backend_reads_its_own_slot() {
        let state = SimState::default()
            .with_airspeed(18.0)
            .with_sensor(1, SensorInstanceConfig::default().with_signflip(true));

        let mut first = SitlAirspeed::new(0, ZeroNoise);
        let mut second = SitlAirspeed::new(1, ZeroNoise);
        let a = first.differential_pressure(&state).unwrap();
        let b = second.differential_pressure(&state).unwrap();
        assert!(a > 0.0);
        assert_eq!(b, -a);
        assert_eq!(second.instance(), 1);
    }
}
