//! Airspeed Conversions
//!
//! ## Equivalent vs True Airspeed
//!
//! A pitot tube measures dynamic pressure `q = ½·ρ·V²`. The speed it "sees"
//! depends on the density of the air it sits in:
//!
//! ```text
//! EAS = V_true · sqrt(ρ / ρ₀)
//! TAS = EAS · sqrt(ρ₀ / ρ) = EAS · eas2tas
//! ```
//!
//! At altitude the air is thinner, so for the same true airspeed the sensor
//! reads a lower equivalent airspeed and `eas2tas > 1`.
//!
//! The simulated sensor derives density from the measured static pressure and
//! a linear temperature profile anchored at 25°C:
//!
//! ```text
//! T = 298.15 - 0.0065 · altitude
//! ρ = P / (R · T)
//! ```
//!
//! ## Calibrated Airspeed from Impact Pressure
//!
//! Used when a blocked tube traps pressure and the sensor reports whatever
//! that trapped pressure implies (compressible flow, subsonic):
//!
//! ```text
//! CAS = a₀ · sqrt(5 · ((q_c / P₀ + 1)^(2/7) - 1))
//! ```

use crate::constants::physics::{
    EAS2TAS_REFERENCE_TEMPERATURE_C, IMPACT_PRESSURE_EXPONENT, ISA_GAS_CONSTANT_J_PER_KG_K,
    ISA_LAPSE_RATE_K_PER_M, KELVIN_OFFSET, SSL_AIR_DENSITY_KG_M3, SSL_AIR_PRESSURE_PA,
    SSL_SPEED_OF_SOUND_M_PER_S,
};
use crate::extensions::FloatExt;

/// Ratio of true to equivalent airspeed at `altitude_m` given the measured
/// static pressure.
///
/// Returns `1.0` when the pressure is zero (uninitialised barometer) or when
/// the inputs drive the squared ratio non-positive or NaN.
pub fn eas2tas(altitude_m: f32, static_pressure_pa: f32) -> f32 {
    if static_pressure_pa.is_zero() {
        return 1.0;
    }

    let temp_k =
        EAS2TAS_REFERENCE_TEMPERATURE_C + KELVIN_OFFSET - ISA_LAPSE_RATE_K_PER_M * altitude_m;
    let density = static_pressure_pa / (ISA_GAS_CONSTANT_J_PER_KG_K * temp_k);
    let eas2tas_squared = SSL_AIR_DENSITY_KG_M3 / density;

    // NaN fails this comparison too
    if !(eas2tas_squared > 0.0) {
        return 1.0;
    }
    libm::sqrtf(eas2tas_squared)
}

/// Calibrated airspeed (m/s) that a pitot reading an impact pressure of
/// `impact_pressure_pa` would report.
pub fn calibrated_airspeed_from_impact_pressure(impact_pressure_pa: f32) -> f32 {
    let ratio = impact_pressure_pa / SSL_AIR_PRESSURE_PA + 1.0;
    let inner = 5.0 * (libm::powf(ratio, IMPACT_PRESSURE_EXPONENT) - 1.0);
    SSL_SPEED_OF_SOUND_M_PER_S * libm::sqrtf(inner.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::standard_pressure_pa;
    use approx::assert_relative_eq;

    #[test]
    fn zero_pressure_is_unity() {
        assert_eq!(eas2tas(0.0, 0.0), 1.0);
        assert_eq!(eas2tas(3000.0, 0.0), 1.0);
        assert_eq!(eas2tas(-400.0, 1e-9), 1.0);
    }

    #[test]
    fn negative_pressure_is_unity() {
        assert_eq!(eas2tas(100.0, -500.0), 1.0);
    }

    #[test]
    fn nan_pressure_is_unity() {
        assert_eq!(eas2tas(100.0, f32::NAN), 1.0);
    }

    #[test]
    fn sea_level_uses_warm_reference() {
        // 25°C air at standard pressure is slightly thinner than ISA
        let expected = libm::sqrtf(
            SSL_AIR_DENSITY_KG_M3 * ISA_GAS_CONSTANT_J_PER_KG_K * 298.15 / SSL_AIR_PRESSURE_PA,
        );
        assert_relative_eq!(eas2tas(0.0, SSL_AIR_PRESSURE_PA), expected, max_relative = 1e-6);
        assert!(expected > 1.0 && expected < 1.03);
    }

    #[test]
    fn grows_with_altitude() {
        let low = eas2tas(0.0, standard_pressure_pa(0.0));
        let high = eas2tas(10_000.0, standard_pressure_pa(10_000.0));
        // ~ sqrt(1/0.34) at 10 km
        assert!(high > 1.6 * low, "low={} high={}", low, high);
    }

    #[test]
    fn cas_zero_impact_pressure() {
        assert_eq!(calibrated_airspeed_from_impact_pressure(0.0), 0.0);
    }

    #[test]
    fn cas_matches_incompressible_at_low_speed() {
        // q = ½ρ₀V² for V = 20 m/s
        let q = 0.5 * SSL_AIR_DENSITY_KG_M3 * 400.0;
        assert_relative_eq!(calibrated_airspeed_from_impact_pressure(q), 20.0, max_relative = 0.01);
    }

    #[test]
    fn cas_never_nan_for_negative_pressure() {
        let v = calibrated_airspeed_from_impact_pressure(-200.0);
        assert_eq!(v, 0.0);
    }
}
