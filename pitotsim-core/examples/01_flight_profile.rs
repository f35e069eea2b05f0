//! Flight Profile Example
//!
//! Flies a simple climb-cruise-descent profile and prints what two simulated
//! pitot-static sensors report along the way.
//!
//! ## What You'll Learn
//!
//! - Building a world snapshot with standard-atmosphere pressure
//! - Polling sensors at a fixed rate through the backend interface
//! - How equivalent airspeed drops below true airspeed with altitude
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_flight_profile
//! ```

use pitotsim_core::{
    eas2tas, AirspeedBackend, SensorInstanceConfig, SimError, SimState, SitlAirspeed,
    UniformNoise, AIRSPEED_MAX_SENSORS,
};

/// (time s, altitude m, true airspeed m/s)
const PROFILE: [(u32, f32, f32); 8] = [
    (0, 0.0, 0.0),
    (10, 0.0, 18.0),
    (30, 300.0, 22.0),
    (60, 1200.0, 24.0),
    (120, 2500.0, 26.0),
    (180, 2500.0, 26.0),
    (240, 800.0, 21.0),
    (300, 0.0, 12.0),
];

fn main() -> Result<(), SimError> {
    println!("Pitot-Static SITL Flight Profile");
    println!("================================\n");

    // Two sensors with typical calibration, a little noise on each
    let sensor = SensorInstanceConfig::default().with_noise(1.5);
    println!("Sensor configuration:");
    println!("  Ratio: {}", sensor.ratio);
    println!("  Noise: ±{} Pa", sensor.noise);
    println!();

    let mut backends = [
        SitlAirspeed::new(0, UniformNoise::seeded(1)),
        SitlAirspeed::new(1, UniformNoise::seeded(2)),
    ];

    let base = SimState::default().with_all_sensors(sensor);
    for backend in backends.iter_mut() {
        backend.init(&base)?;
    }

    println!(
        "{:>5} {:>7} {:>6} {:>8} {:>10} {:>10} {:>7}",
        "t(s)", "alt(m)", "TAS", "eas2tas", "dp0(Pa)", "dp1(Pa)", "T(°C)"
    );

    for (time, altitude, tas) in PROFILE {
        let mut state = SimState::at_altitude(altitude).with_airspeed(tas);
        state.sensors = base.sensors;

        let mut readings = [0.0f32; AIRSPEED_MAX_SENSORS];
        for (backend, reading) in backends.iter_mut().zip(readings.iter_mut()) {
            *reading = backend.differential_pressure(&state)?;
        }
        let temperature = backends[0].temperature(&state)?;

        println!(
            "{:>5} {:>7.0} {:>6.1} {:>8.4} {:>10.2} {:>10.2} {:>7.1}",
            time,
            altitude,
            tas,
            eas2tas(altitude, state.ambient_pressure_pa),
            readings[0],
            readings[1],
            temperature
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Same TAS at altitude produces less differential pressure");
    println!("- Noise matters most at low speed, where dp is small");
    println!("- Board temperature follows ambient plus a fixed offset");

    Ok(())
}
