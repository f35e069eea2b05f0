//! Synthetic airspeed sensor model for software-in-the-loop simulation
//!
//! Turns a simulated true airspeed and altitude into what a pitot-static
//! differential pressure sensor would report: atmosphere scaling, measurement
//! noise, and the usual field failures (frozen reading, blocked tube,
//! reversed plumbing).
//!
//! Key constraints:
//! - `no_std` capable, no heap in the read path
//! - Stateless between cycles: every read re-evaluates the current snapshot
//! - Numerically total: no NaN escapes for any finite input
//!
//! ```no_run
//! use pitotsim_core::{AirspeedSim, SimState, UniformNoise};
//!
//! let mut sim = AirspeedSim::new(UniformNoise::seeded(42));
//! let state = SimState::at_altitude(1200.0).with_airspeed(22.0);
//!
//! match sim.get_differential_pressure(0, &state) {
//!     Ok(pressure) => {}, // feed the estimator
//!     Err(e) => {},       // no such sensor slot
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod airspeed;
pub mod atmosphere;
pub mod backend;
pub mod config;
pub mod constants;
pub mod errors;
pub mod extensions;
pub mod noise;
pub mod simulator;

// Public API
pub use airspeed::{calibrated_airspeed_from_impact_pressure, eas2tas};
pub use atmosphere::{simple_atmosphere, AtmosphereSample};
pub use backend::{AirspeedBackend, BackendKind, SitlAirspeed};
pub use config::{SensorInstanceConfig, SimState};
pub use constants::AIRSPEED_MAX_SENSORS;
pub use errors::{SimError, SimResult};
pub use noise::{GaussianNoise, NoiseSource, SequenceNoise, UniformNoise, ZeroNoise};
pub use simulator::{AirspeedSim, SensorInstanceOutput};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
