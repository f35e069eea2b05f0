//! Airspeed Sensor Specifications
//!
//! Slot count and calibration defaults for the simulated differential
//! pressure sensors.

/// Number of airspeed sensor slots the simulator maintains.
pub const AIRSPEED_MAX_SENSORS: usize = 2;

/// Default pressure-to-velocity-squared calibration factor.
///
/// `pressure = airspeed² / ratio`. An ideal pitot gives `2/ρ₀ ≈ 1.633`; real
/// tubes under-read, so the conventional SITL value is higher.
pub const DEFAULT_AIRSPEED_RATIO: f32 = 1.9936;

/// Default noise magnitude coefficient (Pa).
///
/// Zero keeps unconfigured instances deterministic.
pub const DEFAULT_AIRSPEED_NOISE_PA: f32 = 0.0;

/// Empirical sensor-board self-heating offset (°C).
///
/// Added to the ambient temperature to form the reported die temperature.
pub const SENSOR_BOARD_TEMP_OFFSET_C: f32 = 25.0;
