//! Fault Injection Example
//!
//! Breaks one of two sensors in each of the ways a real pitot system fails
//! and shows the reading next to a healthy reference.
//!
//! ## Fault Modes
//!
//! 1. **Frozen** - sensor stuck at a fixed airspeed
//! 2. **Blocked tube** - water trapped in the line, reading follows altitude
//! 3. **Sign flip** - pitot and static ports swapped
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_fault_injection
//! ```

use pitotsim_core::{AirspeedSim, SensorInstanceConfig, SimError, SimState, ZeroNoise};

fn main() -> Result<(), SimError> {
    println!("Pitot-Static Fault Injection");
    println!("============================\n");

    let healthy = SensorInstanceConfig::default();
    let trapped_at_ground = SimState::default().ambient_pressure_pa;

    let faults = [
        ("Frozen at 15 m/s", healthy.failed_at(15.0)),
        ("Blocked tube (ground air)", healthy.blocked(trapped_at_ground, 0.0)),
        ("Sign flip", healthy.with_signflip(true)),
    ];

    let mut sim = AirspeedSim::new(ZeroNoise);

    for (name, fault) in faults {
        fault.validate()?;
        println!("{}", name);
        println!("  {:>7} {:>6} {:>12} {:>12}", "alt(m)", "TAS", "healthy(Pa)", "faulty(Pa)");

        for (altitude, tas) in [(0.0, 0.0), (0.0, 20.0), (1000.0, 20.0), (2000.0, 30.0)] {
            let state = SimState::at_altitude(altitude)
                .with_airspeed(tas)
                .with_sensor(0, healthy)
                .with_sensor(1, fault);

            let good = sim.get_differential_pressure(0, &state)?;
            let bad = sim.last_pressure(1)?;
            println!("  {:>7.0} {:>6.1} {:>12.2} {:>12.2}", altitude, tas, good, bad);
        }
        println!();
    }

    // Out-of-range slots are rejected, nothing is written
    match sim.get_differential_pressure(7, &SimState::default()) {
        Ok(_) => println!("unexpected reading from slot 7"),
        Err(e) => println!("Slot 7: {}", e),
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- A frozen sensor ignores airspeed completely");
    println!("- A blocked tube reads rising airspeed while climbing");
    println!("- A sign flip only changes the sign of the reading");

    Ok(())
}
