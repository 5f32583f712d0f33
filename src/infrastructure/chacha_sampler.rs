// ChaCha20-backed seeded sampler
use crate::application::seeded_sampler::SeededSampler;
use rand::distributions::Standard;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};
use std::f64::consts::TAU;

/// Seeded sampler with a fully specified algorithm.
///
/// - The ChaCha20 key is the SHA-256 digest of the UTF-8 seed string.
/// - Uniforms are standard `f64` draws in `[0, 1)`.
/// - Normals use Box-Muller on a pair of uniforms `(u1, u2)`:
///   `r = sqrt(-2 ln(1 - u1))`, `theta = 2 pi u2`. The first call returns
///   `r cos(theta)` and the next returns the cached `r sin(theta)`.
pub struct ChaChaSampler {
    rng: ChaCha20Rng,
    spare: Option<f64>,
}

impl ChaChaSampler {
    fn uniform(&mut self) -> f64 {
        self.rng.sample(Standard)
    }

    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        let u1 = self.uniform();
        let u2 = self.uniform();
        // 1 - u1 lies in (0, 1], keeping ln finite
        let radius = (-2.0 * (1.0 - u1).ln()).sqrt();
        let theta = TAU * u2;

        self.spare = Some(radius * theta.sin());
        radius * theta.cos()
    }
}

impl SeededSampler for ChaChaSampler {
    fn from_seed_str(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);

        Self {
            rng: ChaCha20Rng::from_seed(key),
            spare: None,
        }
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + self.standard_normal() * std_dev
    }
}
