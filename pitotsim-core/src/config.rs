//! Sensor and Simulation Configuration
//!
//! Two structs describe everything the simulator reads:
//!
//! - [`SensorInstanceConfig`]: calibration and fault injection for one sensor
//!   slot, the knobs a test harness turns to break a pitot tube on purpose
//! - [`SimState`]: the snapshot of the simulated world for the current cycle
//!
//! Both are owned by the simulation driver. The simulator only borrows them,
//! so a driver can change faults or altitude between any two reads.
//!
//! ## Fault Modes
//!
//! ```text
//! Field                 Active when     Models
//! --------------------------------------------------------------
//! fail                  > 0             sensor frozen at a fixed airspeed
//! fail_pressure         != 0            water in the line, trapped pressure
//! fail_pitot_pressure   with above      dynamic part of the trapped pressure
//! signflip              true            pitot and static ports swapped
//! ```
//!
//! ## Presets
//!
//! ```rust
//! use pitotsim_core::config::{SensorInstanceConfig, SimState};
//!
//! // Noisy sensor frozen at 15 m/s
//! let frozen = SensorInstanceConfig::default().with_noise(2.0).failed_at(15.0);
//! assert!(frozen.validate().is_ok());
//!
//! // World at 1500m with standard pressure
//! let state = SimState::at_altitude(1500.0).with_airspeed(25.0);
//! assert!(state.ambient_pressure_pa < 90_000.0);
//! ```

use crate::atmosphere::standard_pressure_pa;
use crate::constants::sensors::{AIRSPEED_MAX_SENSORS, DEFAULT_AIRSPEED_NOISE_PA, DEFAULT_AIRSPEED_RATIO};
use crate::errors::{SimError, SimResult};
use crate::extensions::FloatExt;

/// Calibration and fault settings for one airspeed sensor slot
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorInstanceConfig {
    /// Pressure-to-velocity-squared calibration factor, must be > 0
    pub ratio: f32,

    /// Peak noise on the differential pressure (Pa)
    pub noise: f32,

    /// Forced airspeed (m/s); positive values freeze the sensor there
    pub fail: f32,

    /// Trapped static pressure in a blocked tube (Pa); non-zero activates
    pub fail_pressure: f32,

    /// Trapped dynamic pressure contribution (Pa)
    pub fail_pitot_pressure: f32,

    /// Pitot and static connections swapped
    pub signflip: bool,
}

impl Default for SensorInstanceConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_AIRSPEED_RATIO,
            noise: DEFAULT_AIRSPEED_NOISE_PA,
            fail: 0.0,
            fail_pressure: 0.0,
            fail_pitot_pressure: 0.0,
            signflip: false,
        }
    }
}

impl SensorInstanceConfig {
    /// Healthy sensor with a specific calibration ratio
    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the noise magnitude (Pa)
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }

    /// Freeze the sensor at `airspeed` m/s
    pub fn failed_at(mut self, airspeed: f32) -> Self {
        self.fail = airspeed;
        self
    }

    /// Block the tube with `trapped_pa` of static pressure and
    /// `pitot_pa` of dynamic pressure
    pub fn blocked(mut self, trapped_pa: f32, pitot_pa: f32) -> Self {
        self.fail_pressure = trapped_pa;
        self.fail_pitot_pressure = pitot_pa;
        self
    }

    /// Swap pitot and static ports
    pub fn with_signflip(mut self, signflip: bool) -> Self {
        self.signflip = signflip;
        self
    }

    /// Frozen-reading fault active
    pub fn is_failed(&self) -> bool {
        self.fail.is_positive()
    }

    /// Blocked-tube fault active
    pub fn is_blocked(&self) -> bool {
        !self.fail_pressure.is_zero()
    }

    /// Check this configuration can describe a physical sensor
    pub fn validate(&self) -> SimResult<()> {
        if !self.ratio.is_finite() || !self.ratio.is_positive() {
            return Err(SimError::InvalidConfig {
                reason: "ratio must be positive and finite",
            });
        }
        if !self.noise.is_finite() {
            return Err(SimError::InvalidConfig {
                reason: "noise must be finite",
            });
        }
        if !self.fail.is_finite()
            || !self.fail_pressure.is_finite()
            || !self.fail_pitot_pressure.is_finite()
        {
            return Err(SimError::InvalidConfig {
                reason: "fault values must be finite",
            });
        }
        Ok(())
    }
}

/// Snapshot of the simulated world for one cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimState {
    /// Geometric altitude (m)
    pub altitude_m: f32,

    /// Barometric static pressure (Pa)
    pub ambient_pressure_pa: f32,

    /// Commanded true airspeed (m/s)
    pub airspeed_mps: f32,

    /// Per-slot sensor configuration
    pub sensors: [SensorInstanceConfig; AIRSPEED_MAX_SENSORS],
}

impl Default for SimState {
    fn default() -> Self {
        Self::at_altitude(0.0)
    }
}

impl SimState {
    /// Still air at `altitude_m` with standard-atmosphere static pressure
    pub fn at_altitude(altitude_m: f32) -> Self {
        Self {
            altitude_m,
            ambient_pressure_pa: standard_pressure_pa(altitude_m),
            airspeed_mps: 0.0,
            sensors: [SensorInstanceConfig::default(); AIRSPEED_MAX_SENSORS],
        }
    }

    /// Set the commanded true airspeed
    pub fn with_airspeed(mut self, airspeed_mps: f32) -> Self {
        self.airspeed_mps = airspeed_mps;
        self
    }

    /// Override the barometric pressure
    pub fn with_ambient_pressure(mut self, pressure_pa: f32) -> Self {
        self.ambient_pressure_pa = pressure_pa;
        self
    }

    /// Replace the configuration of one slot. Out-of-range slots are ignored.
    pub fn with_sensor(mut self, instance: usize, config: SensorInstanceConfig) -> Self {
        if let Some(slot) = self.sensors.get_mut(instance) {
            *slot = config;
        }
        self
    }

    /// Apply the same configuration to every slot
    pub fn with_all_sensors(mut self, config: SensorInstanceConfig) -> Self {
        self.sensors = [config; AIRSPEED_MAX_SENSORS];
        self
    }

    /// Configuration for one slot
    pub fn sensor(&self, instance: usize) -> SimResult<&SensorInstanceConfig> {
        self.sensors.get(instance).ok_or(SimError::InvalidInstance {
            instance,
            max: AIRSPEED_MAX_SENSORS,
        })
    }
}
