//! Measurement Noise Sources
//!
//! The simulator perturbs every reading with one random draw per instance per
//! cycle. The draw comes from a [`NoiseSource`] owned by the simulator rather
//! than a global generator, so tests can replay exact sequences and check the
//! noise-free formulas.
//!
//! ## Contract
//!
//! `sample()` returns a value in `[-1, 1]`. The simulator scales it by the
//! instance's `noise` coefficient, so the coefficient is the peak
//! differential-pressure error in pascals.
//!
//! ## Implementations
//!
//! - [`UniformNoise`]: uniform in `[-1, 1)`, the classic SITL behaviour
//! - [`GaussianNoise`]: zero-mean normal, clipped to `[-1, 1]`
//! - [`ZeroNoise`]: always zero
//! - [`SequenceNoise`]: replays a fixed list, for deterministic tests
//!
//! ```rust
//! use pitotsim_core::noise::{NoiseSource, SequenceNoise};
//!
//! let mut noise = SequenceNoise::<4>::from_slice(&[0.5, -0.5]);
//! assert_eq!(noise.sample(), 0.5);
//! assert_eq!(noise.sample(), -0.5);
//! assert_eq!(noise.sample(), 0.5);
//! ```

use heapless::Vec;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::extensions::FloatExt;

/// Source of symmetric random perturbations
pub trait NoiseSource {
    /// Next draw in `[-1, 1]`
    fn sample(&mut self) -> f32;
}

impl<T: NoiseSource + ?Sized> NoiseSource for &mut T {
    fn sample(&mut self) -> f32 {
        (**self).sample()
    }
}

/// Uniform noise in `[-1, 1)`
#[derive(Debug, Clone)]
pub struct UniformNoise<R> {
    rng: R,
}

impl<R: RngCore> UniformNoise<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformNoise<ChaCha8Rng> {
    /// Reproducible generator from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> NoiseSource for UniformNoise<R> {
    fn sample(&mut self) -> f32 {
        self.rng.random_range(-1.0f32..1.0)
    }
}

/// Zero-mean normal noise, clipped to `[-1, 1]`
#[derive(Debug, Clone)]
pub struct GaussianNoise<R> {
    rng: R,
    sigma: f32,
}

impl<R: RngCore> GaussianNoise<R> {
    /// Normal distribution with standard deviation `sigma`.
    ///
    /// A `sigma` of about 0.3 keeps nearly every draw inside the clip range.
    /// Non-finite or negative values fall back to that.
    pub fn new(rng: R, sigma: f32) -> Self {
        let sigma = if sigma.is_finite() && sigma >= 0.0 { sigma } else { 0.3 };
        Self { rng, sigma }
    }
}

impl GaussianNoise<ChaCha8Rng> {
    /// Reproducible generator from a seed
    pub fn seeded(seed: u64, sigma: f32) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), sigma)
    }
}

impl<R: RngCore> NoiseSource for GaussianNoise<R> {
    fn sample(&mut self) -> f32 {
        let z: f32 = StandardNormal.sample(&mut self.rng);
        (z * self.sigma).constrain(-1.0, 1.0)
    }
}

/// Noise source that never perturbs anything
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample(&mut self) -> f32 {
        0.0
    }
}

/// Replays a fixed sequence cyclically
///
/// Values are clamped into `[-1, 1]` on the way in. An empty sequence behaves
/// like [`ZeroNoise`].
#[derive(Debug, Clone, Default)]
pub struct SequenceNoise<const N: usize> {
    values: Vec<f32, N>,
    pos: usize,
}

impl<const N: usize> SequenceNoise<N> {
    /// Build from a slice; anything past capacity `N` is dropped
    pub fn from_slice(values: &[f32]) -> Self {
        let mut seq = Self { values: Vec::new(), pos: 0 };
        for &v in values.iter().take(N) {
            // capacity checked by take(N)
            let _ = seq.values.push(v.constrain(-1.0, 1.0));
        }
        seq
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl<const N: usize> NoiseSource for SequenceNoise<N> {
    fn sample(&mut self) -> f32 {
        if self.values.is_empty() {
            self.pos += 1;
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
