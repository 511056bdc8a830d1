//! Deterministic white-noise source.
//!
//! Every noise layer in a snap is drawn from a generator seeded from the
//! snap's own seed, so a given seed always reproduces the same waveform
//! bit for bit. The generator instance is owned by the caller and passed
//! into each fill; there is no process-wide random state.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Seeded uniform white noise in [-1.0, 1.0).
pub struct NoiseSource {
    rng: SmallRng,
}

impl NoiseSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Overwrite the buffer with fresh noise samples.
    pub fn fill(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.rng.random::<f32>() * 2.0 - 1.0;
        }
    }

    /// Allocate and fill a noise buffer of the given length.
    pub fn burst(&mut self, len: usize) -> Vec<f32> {
        let mut buffer = vec![0.0; len];
        self.fill(&mut buffer);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_samples() {
        let a = NoiseSource::seeded(42).burst(256);
        let b = NoiseSource::seeded(42).burst(256);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_decorrelate() {
        let a = NoiseSource::seeded(42).burst(256);
        let b = NoiseSource::seeded(99).burst(256);
        assert_ne!(a, b);
    }

    #[test]
    fn samples_stay_in_range() {
        let burst = NoiseSource::seeded(7).burst(4_096);
        assert!(burst.iter().all(|s| (-1.0..=1.0).contains(s)));
        // White noise should actually use the range, not hug zero
        let peak = burst.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        assert!(peak > 0.9, "expected near-full-scale noise, got {peak}");
    }
}
