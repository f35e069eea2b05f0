//! Physical Constants for the Air Data Model
//!
//! Reference values of the International Standard Atmosphere and the
//! aerodynamic constants used by the airspeed conversions. All values are in
//! SI units unless the name says otherwise.

// ===== STANDARD SEA LEVEL =====

/// Standard sea-level air density (kg/m³).
///
/// Reference density for equivalent airspeed: EAS is the speed that would
/// produce the measured dynamic pressure at this density.
///
/// Source: International Standard Atmosphere (ISA)
pub const SSL_AIR_DENSITY_KG_M3: f32 = 1.225;

/// Standard sea-level static pressure (Pa).
///
/// Source: International Standard Atmosphere (ISA)
pub const SSL_AIR_PRESSURE_PA: f32 = 101_325.016;

/// Standard sea-level temperature (K).
///
/// 15°C, the base of the troposphere temperature profile.
///
/// Source: International Standard Atmosphere (ISA)
pub const SSL_AIR_TEMPERATURE_K: f32 = 288.15;

/// Speed of sound in standard sea-level air (m/s).
///
/// `a₀` in the calibrated airspeed formula.
///
/// Source: ICAO Doc 7488
pub const SSL_SPEED_OF_SOUND_M_PER_S: f32 = 340.294_09;

// ===== GAS PROPERTIES =====

/// Specific gas constant for dry air (J/(kg·K)).
///
/// Used with the ideal gas law `ρ = P / (R·T)`.
pub const ISA_GAS_CONSTANT_J_PER_KG_K: f32 = 287.26;

/// Troposphere temperature lapse rate (K/m).
///
/// Standard value: 6.5°C per 1000m.
pub const ISA_LAPSE_RATE_K_PER_M: f32 = 0.0065;

/// Offset between Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f32 = 273.15;

// ===== ATMOSPHERE MODEL =====

/// Mean radius of the Earth used for geopotential altitude (km).
pub const EARTH_RADIUS_KM: f32 = 6369.0;

/// Hydrostatic constant `g₀·M/R` (K/km).
///
/// Exponent numerator of the troposphere pressure ratio.
pub const GMR_K_PER_KM: f32 = 34.163_195;

/// Geopotential altitude of the tropopause (km).
pub const TROPOPAUSE_ALTITUDE_KM: f32 = 11.0;

/// Troposphere lapse rate in model units (K/km).
pub const TROPOSPHERE_LAPSE_K_PER_KM: f32 = 6.5;

/// Isothermal stratosphere temperature (K).
pub const STRATOSPHERE_TEMPERATURE_K: f32 = 216.65;

/// Pressure ratio at the tropopause.
///
/// Value of `delta` where the troposphere branch meets the stratosphere branch.
pub const TROPOPAUSE_PRESSURE_RATIO: f32 = 0.223_361_1;

/// Lowest altitude accepted by the atmosphere model (km).
///
/// The geopotential conversion is singular at minus one Earth radius. Inputs
/// below this floor are clamped to it.
pub const ATMOSPHERE_MIN_ALTITUDE_KM: f32 = -100.0;

// ===== AIRSPEED CONVERSION =====

/// Reference temperature used by the EAS/TAS conversion (°C).
///
/// Air temperature at zero altitude assumed by the simulated sensor.
pub const EAS2TAS_REFERENCE_TEMPERATURE_C: f32 = 25.0;

/// Exponent `(γ-1)/γ` for air in the impact pressure formula.
pub const IMPACT_PRESSURE_EXPONENT: f32 = 2.0 / 7.0;
