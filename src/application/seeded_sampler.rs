// Capability for reproducible random draws

/// A pseudo-random source built from a seed string.
///
/// Two samplers created from the same seed must produce the same sequence of
/// draws. A sampler is owned by a single call and never shared.
pub trait SeededSampler {
    fn from_seed_str(seed: &str) -> Self
    where
        Self: Sized;

    /// Draw from a normal distribution.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;
}
