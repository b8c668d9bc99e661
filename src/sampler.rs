//! Proposal sampler: Normal(θ, 1) draws with deterministic seeding.

use rand_distr::{Distribution, Normal};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::ConfigError;

/// Draws from the shifted proposal distribution Normal(θ, 1).
///
/// The generator is `Xoshiro256PlusPlus` seeded with `seed_from_u64`, so a
/// fixed seed reproduces the exact draw sequence across runs and
/// platforms. Normal variates come from `rand_distr`'s ziggurat sampler.
///
/// For parallel runs, [`ProposalSampler::stream`] derives worker-local
/// generators from a single seed by long-jumping the base state: each jump
/// advances the generator by 2¹⁹² steps, so worker streams cannot overlap
/// at any realistic draw count.
#[derive(Debug, Clone)]
pub struct ProposalSampler {
    rng: Xoshiro256PlusPlus,
    proposal: Normal<f64>,
}

impl ProposalSampler {
    /// Create a sampler for the proposal Normal(`threshold`, 1).
    ///
    /// Fails fast on a non-finite threshold rather than producing NaN
    /// draws downstream.
    pub fn new(threshold: f64, seed: u64) -> Result<Self, ConfigError> {
        Self::stream(threshold, seed, 0)
    }

    /// Create the sampler for worker `worker_index` of a partitioned run.
    ///
    /// Worker 0 is identical to [`ProposalSampler::new`]; worker k's
    /// generator is the seeded base state advanced by k long jumps.
    pub fn stream(threshold: f64, seed: u64, worker_index: usize) -> Result<Self, ConfigError> {
        // Normal::new only rejects bad standard deviations; a non-finite
        // mean would silently poison every draw.
        if !threshold.is_finite() {
            return Err(ConfigError::Threshold { got: threshold });
        }
        let proposal = Normal::new(threshold, 1.0)
            .map_err(|_| ConfigError::Threshold { got: threshold })?;

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        for _ in 0..worker_index {
            rng.long_jump();
        }

        Ok(Self { rng, proposal })
    }

    /// Draw one realization from the proposal distribution.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        self.proposal.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut a = ProposalSampler::new(8.0, 42).unwrap();
        let mut b = ProposalSampler::new(8.0, 42).unwrap();
        for _ in 0..1000 {
            assert_eq!(a.draw().to_bits(), b.draw().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = ProposalSampler::new(8.0, 1).unwrap();
        let mut b = ProposalSampler::new(8.0, 2).unwrap();
        let same = (0..100).filter(|_| a.draw().to_bits() == b.draw().to_bits()).count();
        assert!(same < 5, "seeds 1 and 2 produced {same}/100 identical draws");
    }

    #[test]
    fn test_draws_center_on_threshold() {
        let mut sampler = ProposalSampler::new(3.0, 7).unwrap();
        let n = 100_000;
        let mean = (0..n).map(|_| sampler.draw()).sum::<f64>() / n as f64;
        // Standard error of the mean is 1/sqrt(n) ≈ 0.003.
        assert!(
            (mean - 3.0).abs() < 0.02,
            "sample mean {mean} far from proposal mean 3.0"
        );
    }

    #[test]
    fn test_worker_streams_are_distinct() {
        let mut w0 = ProposalSampler::stream(8.0, 42, 0).unwrap();
        let mut w1 = ProposalSampler::stream(8.0, 42, 1).unwrap();
        let same = (0..100).filter(|_| w0.draw().to_bits() == w1.draw().to_bits()).count();
        assert!(same < 5, "long-jumped streams overlapped: {same}/100");
    }

    #[test]
    fn test_rejects_non_finite_threshold() {
        assert!(matches!(
            ProposalSampler::new(f64::NAN, 0),
            Err(ConfigError::Threshold { .. })
        ));
    }
}
