//! Constants for pitotsim Core
//!
//! Centralized numeric values used throughout the airspeed model. Every
//! number that appears in a formula is named here with its unit and source.
//!
//! ## Organization
//!
//! - **Physics**: Standard atmosphere and aerodynamic constants
//! - **Sensors**: Slot count and calibration defaults

/// Standard atmosphere and aerodynamic constants.
pub mod physics;

/// Sensor slot count and calibration defaults.
pub mod sensors;

// Re-export commonly used constants for convenience
pub use physics::{
    SSL_AIR_DENSITY_KG_M3, SSL_AIR_PRESSURE_PA, SSL_AIR_TEMPERATURE_K,
    SSL_SPEED_OF_SOUND_M_PER_S, KELVIN_OFFSET,
};

pub use sensors::{
    AIRSPEED_MAX_SENSORS, DEFAULT_AIRSPEED_RATIO, SENSOR_BOARD_TEMP_OFFSET_C,
};
