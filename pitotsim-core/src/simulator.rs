//! Per-Instance Differential Pressure Simulator
//!
//! ## Signal Chain
//!
//! Every read re-evaluates the whole chain from the current [`SimState`]; no
//! filter state survives between cycles.
//!
//! ```text
//!   TAS ──÷ eas2tas──▶ EAS ──²/ratio──▶ q ──+noise──▶ airspeed
//!                                                       │
//!                    fail > 0 ─────────────▶ override ──┤
//!                    fail_pressure ≠ 0 ────▶ CAS(tube) ─┤
//!                                                       ▼
//!                                   pressure = airspeed² / ratio
//!                                                       │
//!                                    signflip ──▶ negate ▼
//!                                               raw pressure slot
//! ```
//!
//! ### Noise
//!
//! Noise is applied to the *pressure* and then recovered as an airspeed:
//!
//! ```text
//! airspeed = sqrt(|ratio · (q + noise · r)|)     r ∈ [-1, 1]
//! ```
//!
//! A fixed pressure error is a large airspeed error near zero and a small one
//! at cruise, which is how real differential sensors behave. The absolute
//! value means a negative excursion at very low speed folds back to a small
//! positive airspeed instead of producing NaN. That fold is what the field
//! hardware exhibits, so it is kept.
//!
//! ### Faults
//!
//! The frozen-reading fault replaces the airspeed after noise. The
//! blocked-tube fault replaces it again: a tube with trapped air reports the
//! calibrated airspeed of `|trapped - ambient + pitot|`, so it drifts with
//! altitude and ignores the true airspeed entirely.
//!
//! Reversed plumbing flips the sign last, after all magnitudes are settled.
//!
//! ## Draw Accounting
//!
//! Exactly one noise sample is taken per instance per cycle, whichever fault
//! is active, so a seeded source yields the same sequence regardless of the
//! fault configuration.

use crate::airspeed::{calibrated_airspeed_from_impact_pressure, eas2tas};
use crate::atmosphere::simple_atmosphere;
use crate::config::{SensorInstanceConfig, SimState};
use crate::constants::physics::{KELVIN_OFFSET, SSL_AIR_TEMPERATURE_K};
use crate::constants::sensors::{AIRSPEED_MAX_SENSORS, SENSOR_BOARD_TEMP_OFFSET_C};
use crate::errors::{SimError, SimResult};
use crate::extensions::FloatExt;
use crate::noise::NoiseSource;

/// Latest reading of one sensor slot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorInstanceOutput {
    /// Raw differential pressure (Pa)
    pub airspeed_raw_pressure: f32,
}

/// Synthetic differential pressure sensors
///
/// Owns the output slots and the noise source. Everything else is read from
/// the [`SimState`] passed to each call.
#[derive(Debug, Clone)]
pub struct AirspeedSim<N> {
    noise: N,
    outputs: [SensorInstanceOutput; AIRSPEED_MAX_SENSORS],
}

impl<N: NoiseSource> AirspeedSim<N> {
    /// Simulator drawing from `noise`
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            outputs: [SensorInstanceOutput::default(); AIRSPEED_MAX_SENSORS],
        }
    }

    /// Recompute every slot for the state's commanded airspeed
    pub fn update(&mut self, state: &SimState) {
        self.update_airspeed(state.airspeed_mps, state);
    }

    /// Recompute every slot for an explicit true airspeed
    pub fn update_airspeed(&mut self, true_airspeed: f32, state: &SimState) {
        let eas2tas = eas2tas(state.altitude_m, state.ambient_pressure_pa);

        for (cfg, out) in state.sensors.iter().zip(self.outputs.iter_mut()) {
            // One draw per slot, even when a fault discards it
            let r = self.noise.sample();
            let pressure = simulate_pressure(cfg, true_airspeed / eas2tas, state.ambient_pressure_pa, r);

            log_trace!("simulated differential pressure {:.3} Pa", pressure);
            out.airspeed_raw_pressure = pressure;
        }
    }

    /// Fresh differential pressure for `instance` (Pa)
    ///
    /// Recomputes every slot first. Nothing is written when `instance` is out
    /// of range.
    pub fn get_differential_pressure(&mut self, instance: usize, state: &SimState) -> SimResult<f32> {
        check_instance(instance)?;
        self.update(state);
        Ok(self.outputs[instance].airspeed_raw_pressure)
    }

    /// Sensor board temperature for `instance` (°C)
    ///
    /// Ambient standard-atmosphere temperature at the current altitude plus
    /// the board self-heating offset. Does not touch the pressure slots or
    /// the noise source.
    pub fn get_temperature(&self, instance: usize, state: &SimState) -> SimResult<f32> {
        check_instance(instance)?;
        Ok(board_temperature_c(state.altitude_m))
    }

    /// Reading stored by the last update, without recomputing
    pub fn last_pressure(&self, instance: usize) -> SimResult<f32> {
        check_instance(instance)?;
        Ok(self.outputs[instance].airspeed_raw_pressure)
    }

    /// All output slots as of the last update
    pub fn outputs(&self) -> &[SensorInstanceOutput; AIRSPEED_MAX_SENSORS] {
        &self.outputs
    }

    /// Borrow the noise source
    pub fn noise(&self) -> &N {
        &self.noise
    }
}

fn check_instance(instance: usize) -> SimResult<()> {
    if instance >= AIRSPEED_MAX_SENSORS {
        return Err(SimError::InvalidInstance {
            instance,
            max: AIRSPEED_MAX_SENSORS,
        });
    }
    Ok(())
}

/// Differential pressure one sensor reports for an equivalent airspeed and
/// one noise draw `r`.
pub fn simulate_pressure(
    cfg: &SensorInstanceConfig,
    equivalent_airspeed: f32,
    ambient_pressure_pa: f32,
    r: f32,
) -> f32 {
    let ratio = cfg.ratio;
    if !ratio.is_positive() || !ratio.is_finite() {
        log_warn!("airspeed ratio {} is not positive, reporting 0 Pa", ratio);
        return 0.0;
    }

    let diff_pressure = equivalent_airspeed * equivalent_airspeed / ratio;
    let mut airspeed = libm::sqrtf(libm::fabsf(ratio * (diff_pressure + cfg.noise * r)));

    if cfg.is_failed() {
        airspeed = cfg.fail;
    }

    if cfg.is_blocked() {
        let tube_pressure =
            libm::fabsf(cfg.fail_pressure - ambient_pressure_pa + cfg.fail_pitot_pressure);
        airspeed = calibrated_airspeed_from_impact_pressure(tube_pressure);
    }

    let pressure = airspeed * airspeed / ratio;
    if cfg.signflip {
        -pressure
    } else {
        pressure
    }
}

/// Reported board temperature at `altitude_m` (°C)
pub fn board_temperature_c(altitude_m: f32) -> f32 {
    let theta = simple_atmosphere(altitude_m * 0.001).theta;
    SSL_AIR_TEMPERATURE_K * theta - KELVIN_OFFSET + SENSOR_BOARD_TEMP_OFFSET_C
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{SequenceNoise, ZeroNoise};
    use approx::assert_relative_eq;

    fn still_air() -> SimState {
        // eas2tas == 1 with no barometer reading
        SimState::default().with_ambient_pressure(0.0)
    }

    #[test]
    fn noise_free_pressure() {
        let mut sim = AirspeedSim::new(ZeroNoise);
        let state = still_air()
            .with_airspeed(20.0)
            .with_all_sensors(SensorInstanceConfig::default().with_ratio(2.0));

        let p = sim.get_differential_pressure(0, &state).unwrap();
        assert_relative_eq!(p, 200.0, max_relative = 1e-5);
    }

    #[test]
    fn pressure_uses_eas() {
        let mut sim = AirspeedSim::new(ZeroNoise);
        let state = SimState::at_altitude(2000.0)
            .with_airspeed(30.0)
            .with_all_sensors(SensorInstanceConfig::default().with_ratio(2.0));

        let ratio = eas2tas(state.altitude_m, state.ambient_pressure_pa);
        let expected = (30.0 / ratio) * (30.0 / ratio) / 2.0;
        let p = sim.get_differential_pressure(1, &state).unwrap();
        assert_relative_eq!(p, expected, max_relative = 1e-5);
    }

    #[test]
    fn noise_shifts_pressure_linearly() {
        let cfg = SensorInstanceConfig::default().with_ratio(2.0).with_noise(10.0);
        let mut sim = AirspeedSim::new(SequenceNoise::<2>::from_slice(&[0.5, -0.5]));
        let state = still_air().with_airspeed(20.0).with_all_sensors(cfg);

        sim.update(&state);
        assert_relative_eq!(sim.last_pressure(0).unwrap(), 205.0, max_relative = 1e-5);
        assert_relative_eq!(sim.last_pressure(1).unwrap(), 195.0, max_relative = 1e-5);
    }

    #[test]
    fn negative_excursion_folds_positive() {
        // q = 0 with -5 Pa noise: |-5| survives as 5 Pa
        let cfg = SensorInstanceConfig::default().with_ratio(2.0).with_noise(5.0);
        let mut sim = AirspeedSim::new(SequenceNoise::<1>::from_slice(&[-1.0]));
        let state = still_air().with_all_sensors(cfg);

        let p = sim.get_differential_pressure(0, &state).unwrap();
        assert!(p.is_finite());
        assert_relative_eq!(p, 5.0, max_relative = 1e-5);
    }

    #[test]
    fn fail_overrides_airspeed() {
        let cfg = SensorInstanceConfig::default().with_ratio(2.0).with_noise(30.0).failed_at(15.0);
        let mut sim = AirspeedSim::new(SequenceNoise::<1>::from_slice(&[0.7]));

        for tas in [0.0, 12.0, 80.0] {
            let state = SimState::at_altitude(500.0).with_airspeed(tas).with_all_sensors(cfg);
            let p = sim.get_differential_pressure(0, &state).unwrap();
            assert_relative_eq!(p, 112.5, max_relative = 1e-5);
        }
    }

    #[test]
    fn signflip_negates() {
        let base = SensorInstanceConfig::default().with_ratio(2.0);
        let state = SimState::at_altitude(300.0)
            .with_airspeed(25.0)
            .with_sensor(0, base)
            .with_sensor(1, base.with_signflip(true));

        let mut sim = AirspeedSim::new(ZeroNoise);
        sim.update(&state);
        let straight = sim.last_pressure(0).unwrap();
        let flipped = sim.last_pressure(1).unwrap();
        assert!(straight > 0.0);
        assert_eq!(flipped, -straight);
    }

    #[test]
    fn blocked_tube_ignores_airspeed() {
        let cfg = SensorInstanceConfig::default().with_noise(50.0).failed_at(15.0).blocked(95_000.0, 300.0);
        let mut sim = AirspeedSim::new(SequenceNoise::<3>::from_slice(&[1.0, -1.0, 0.2]));

        let slow = SimState::default().with_airspeed(5.0).with_all_sensors(cfg);
        let fast = slow.clone().with_airspeed(60.0);

        let a = sim.get_differential_pressure(0, &slow).unwrap();
        let b = sim.get_differential_pressure(0, &fast).unwrap();
        assert_eq!(a, b);

        let tube = libm::fabsf(95_000.0 - slow.ambient_pressure_pa + 300.0);
        let v = calibrated_airspeed_from_impact_pressure(tube);
        assert_relative_eq!(a, v * v / cfg.ratio, max_relative = 1e-5);
    }

    #[test]
    fn blocked_tube_follows_ambient_pressure() {
        let cfg = SensorInstanceConfig::default().blocked(101_325.0, 0.0);
        let mut sim = AirspeedSim::new(ZeroNoise);

        let ground = SimState::default().with_all_sensors(cfg);
        let climb = SimState::at_altitude(1000.0).with_all_sensors(cfg);

        let p_ground = sim.get_differential_pressure(0, &ground).unwrap();
        let p_climb = sim.get_differential_pressure(0, &climb).unwrap();
        // trapped sea-level air reads as rising airspeed during a climb
        assert!(p_ground < 1.0);
        assert!(p_climb > 1000.0);
    }

    #[test]
    fn degenerate_ratio_reports_zero() {
        let state = SimState::default()
            .with_airspeed(20.0)
            .with_all_sensors(SensorInstanceConfig::default().with_ratio(0.0));
        let mut sim = AirspeedSim::new(ZeroNoise);
        assert_eq!(sim.get_differential_pressure(0, &state), Ok(0.0));

        let state = state.with_all_sensors(SensorInstanceConfig::default().with_ratio(-2.0));
        assert_eq!(sim.get_differential_pressure(1, &state), Ok(0.0));
    }

    #[test]
    fn one_draw_per_instance() {
        let mut sim = AirspeedSim::new(SequenceNoise::<4>::from_slice(&[0.1]));
        let state = SimState::default().with_sensor(1, SensorInstanceConfig::default().failed_at(9.0));
        sim.update(&state);
        sim.update(&state);
        assert_eq!(sim.noise().draws(), 2 * AIRSPEED_MAX_SENSORS);
    }

    #[test]
    fn out_of_range_writes_nothing() {
        let mut sim = AirspeedSim::new(SequenceNoise::<1>::from_slice(&[0.3]));
        let state = SimState::default().with_airspeed(40.0);

        let err = sim.get_differential_pressure(AIRSPEED_MAX_SENSORS, &state);
        assert_eq!(
            err,
            Err(SimError::InvalidInstance { instance: AIRSPEED_MAX_SENSORS, max: AIRSPEED_MAX_SENSORS })
        );
        assert!(sim.outputs().iter().all(|o| o.airspeed_raw_pressure == 0.0));
        assert_eq!(sim.noise().draws(), 0);
    }

    #[test]
    fn temperature_at_sea_level() {
        let sim = AirspeedSim::new(ZeroNoise);
        let t = sim.get_temperature(0, &SimState::default()).unwrap();
        assert_relative_eq!(t, 40.0, epsilon = 1e-3);
    }

    #[test]
    fn temperature_drops_with_altitude() {
        let sim = AirspeedSim::new(ZeroNoise);
        let t = sim.get_temperature(1, &SimState::at_altitude(3000.0)).unwrap();
        // 15°C - 19.5°C + 25°C
        assert_relative_eq!(t, 20.5, epsilon = 0.1);
    }

    #[test]
    fn temperature_ignores_pressure_pipeline() {
        let mut sim = AirspeedSim::new(SequenceNoise::<1>::from_slice(&[0.4]));
        let state = SimState::default().with_airspeed(50.0);

        let before = sim.get_temperature(0, &state).unwrap();
        assert_eq!(sim.noise().draws(), 0);
        sim.update(&state);
        assert_eq!(sim.get_temperature(0, &state.clone().with_airspeed(0.0)).unwrap(), before);
        assert!(sim.get_temperature(AIRSPEED_MAX_SENSORS, &state).is_err());
    }
}
