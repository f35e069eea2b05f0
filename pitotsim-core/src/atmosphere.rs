//! Standard Atmosphere Model
//!
//! ## Physics Background
//!
//! The 1976 US Standard Atmosphere describes the air as a stack of layers with
//! a fixed temperature profile. The two lowest layers cover every altitude an
//! airspeed sensor will see:
//!
//! ```text
//! Layer          Geopotential h   Temperature
//! ------------------------------------------------
//! Troposphere    0 - 11 km        288.15 - 6.5·h  K
//! Stratosphere   11 - 20 km       216.65 K (isothermal)
//! ```
//!
//! Everything is expressed as ratios to the sea-level reference:
//!
//! ```text
//! theta = T / T₀          (temperature ratio)
//! delta = P / P₀          (pressure ratio)
//! sigma = ρ / ρ₀ = delta / theta   (density ratio, ideal gas)
//! ```
//!
//! ### Geopotential Altitude
//!
//! Gravity weakens with height, so the layer boundaries are defined in
//! geopotential rather than geometric altitude:
//!
//! ```text
//! h = z · R / (z + R)      R = 6369 km
//! ```
//!
//! ### Pressure Ratio
//!
//! Integrating the hydrostatic equation over a linear temperature profile
//! gives a power law in the troposphere and an exponential in the isothermal
//! stratosphere:
//!
//! ```text
//! Troposphere:  delta = theta^(GMR / 6.5)
//! Stratosphere: delta = 0.2233611 · exp(-GMR · (h - 11) / 216.65)
//! ```
//!
//! ## Extrapolation
//!
//! The troposphere branch is used for negative altitudes too: temperature and
//! pressure keep rising below sea level, which is what callers flying over the
//! Dead Sea expect. The only singular input is minus one Earth radius, far
//! below anything physical, so altitudes under
//! [`ATMOSPHERE_MIN_ALTITUDE_KM`] are clamped.
//!
//! ```rust
//! use pitotsim_core::atmosphere::simple_atmosphere;
//!
//! let sea_level = simple_atmosphere(0.0);
//! assert_eq!(sea_level.theta, 1.0);
//! assert_eq!(sea_level.delta, 1.0);
//!
//! let cruise = simple_atmosphere(10.0);
//! assert!(cruise.sigma < 0.35);
//! ```

use crate::constants::physics::{
    ATMOSPHERE_MIN_ALTITUDE_KM, EARTH_RADIUS_KM, GMR_K_PER_KM, SSL_AIR_PRESSURE_PA,
    SSL_AIR_TEMPERATURE_K, STRATOSPHERE_TEMPERATURE_K, TROPOPAUSE_ALTITUDE_KM,
    TROPOPAUSE_PRESSURE_RATIO, TROPOSPHERE_LAPSE_K_PER_KM,
};

/// Atmosphere ratios at one altitude
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtmosphereSample {
    /// Density ratio ρ/ρ₀
    pub sigma: f32,
    /// Pressure ratio P/P₀
    pub delta: f32,
    /// Temperature ratio T/T₀
    pub theta: f32,
}

/// Standard atmosphere ratios at a geometric altitude in kilometres.
///
/// Total for every finite input.
pub fn simple_atmosphere(altitude_km: f32) -> AtmosphereSample {
    let altitude_km = altitude_km.max(ATMOSPHERE_MIN_ALTITUDE_KM);

    // Geometric to geopotential
    let h = altitude_km * EARTH_RADIUS_KM / (altitude_km + EARTH_RADIUS_KM);

    let (theta, delta) = if h < TROPOPAUSE_ALTITUDE_KM {
        let theta = (SSL_AIR_TEMPERATURE_K - TROPOSPHERE_LAPSE_K_PER_KM * h) / SSL_AIR_TEMPERATURE_K;
        (theta, libm::powf(theta, GMR_K_PER_KM / TROPOSPHERE_LAPSE_K_PER_KM))
    } else {
        let theta = STRATOSPHERE_TEMPERATURE_K / SSL_AIR_TEMPERATURE_K;
        let delta = TROPOPAUSE_PRESSURE_RATIO
            * libm::expf(-GMR_K_PER_KM * (h - TROPOPAUSE_ALTITUDE_KM) / STRATOSPHERE_TEMPERATURE_K);
        (theta, delta)
    };

    AtmosphereSample {
        sigma: delta / theta,
        delta,
        theta,
    }
}

/// Standard static pressure at a geometric altitude in metres (Pa)
pub fn standard_pressure_pa(altitude_m: f32) -> f32 {
    SSL_AIR_PRESSURE_PA * simple_atmosphere(altitude_m * 0.001).delta
}

/// Standard air temperature at a geometric altitude in metres (K)
pub fn standard_temperature_k(altitude_m: f32) -> f32 {
    SSL_AIR_TEMPERATURE_K * simple_atmosphere(altitude_m * 0.001).theta
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_is_reference() {
        let s = simple_atmosphere(0.0);
        assert_eq!(s.sigma, 1.0);
        assert_eq!(s.delta, 1.0);
        assert_eq!(s.theta, 1.0);
    }

    #[test]
    fn isa_reference_points() {
        // 5 km geometric: ~540.5 hPa, 255.7 K
        assert_relative_eq!(standard_pressure_pa(5000.0), 54_048.0, max_relative = 0.005);
        assert_relative_eq!(standard_temperature_k(5000.0), 255.68, epsilon = 0.2);

        // 11 km: tropopause
        assert_relative_eq!(standard_pressure_pa(11_000.0), 22_700.0, max_relative = 0.01);
    }

    #[test]
    fn stratosphere_is_isothermal() {
        let low = simple_atmosphere(12.0);
        let high = simple_atmosphere(19.0);
        assert_eq!(low.theta, high.theta);
        assert!(high.delta < low.delta);
    }

    #[test]
    fn branches_meet_at_tropopause() {
        // geometric altitude that maps to h = 11 km
        let z = TROPOPAUSE_ALTITUDE_KM * EARTH_RADIUS_KM / (EARTH_RADIUS_KM - TROPOPAUSE_ALTITUDE_KM);
        let below = simple_atmosphere(z - 1e-3);
        let above = simple_atmosphere(z + 1e-3);
        assert_relative_eq!(below.delta, above.delta, max_relative = 1e-3);
        assert_relative_eq!(below.theta, above.theta, max_relative = 1e-3);
    }

    #[test]
    fn below_sea_level_extrapolates() {
        let dead_sea = simple_atmosphere(-0.43);
        assert!(dead_sea.delta > 1.0);
        assert!(dead_sea.theta > 1.0);
        assert!(dead_sea.sigma > 1.0);
    }

    #[test]
    fn absurd_depth_stays_finite() {
        for alt in [-6369.0, -7000.0, -1.0e6, f32::MIN] {
            let s = simple_atmosphere(alt);
            assert!(s.sigma.is_finite() && s.delta.is_finite() && s.theta.is_finite(), "alt {}", alt);
        }
    }

    #[test]
    fn extreme_height_decays_to_zero() {
        let s = simple_atmosphere(1.0e6);
        assert!(s.delta >= 0.0 && s.delta < 1e-6);
        assert!(s.sigma.is_finite());
    }
}
