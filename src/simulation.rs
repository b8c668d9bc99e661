//! Main `TailSampler` entry point and builder.

use crate::accumulator::MomentAccumulator;
use crate::config::Config;
use crate::error::ConfigError;
use crate::estimator::{self, Estimate};
use crate::sampler::ProposalSampler;
use crate::weight::weight;

/// Main entry point for tail-probability estimation.
///
/// Use the builder pattern to configure and run the estimator.
///
/// # Example
///
/// ```
/// use tailprob::TailSampler;
///
/// let estimate = TailSampler::new()
///     .threshold(3.0)
///     .samples(100_000)
///     .seed(42)
///     .run()
///     .unwrap();
///
/// // P(X > 3) ≈ 1.35e-3 for a standard normal X.
/// assert!(estimate.ci_low <= estimate.mean && estimate.mean <= estimate.ci_high);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TailSampler {
    config: Config,
}

impl TailSampler {
    /// Create with the default (reference-run) configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the exceedance threshold θ.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config = self.config.threshold(threshold);
        self
    }

    /// Set the total number of proposal draws.
    pub fn samples(mut self, n: u64) -> Self {
        self.config = self.config.sample_count(n);
        self
    }

    /// Set the confidence level for the reported interval.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.config = self.config.confidence_level(level);
        self
    }

    /// Set a deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.seed(seed);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the estimation pass sequentially.
    ///
    /// Validates the configuration, then performs one linear pass over
    /// all n draws: sample from the proposal, convert to an importance
    /// weight, fold into the running moments, and finalize into an
    /// [`Estimate`]. With a fixed seed the result is bit-identical across
    /// runs.
    pub fn run(&self) -> Result<Estimate, ConfigError> {
        self.config.validate()?;
        let seed = self.resolve_seed();

        let threshold = self.config.threshold;
        let mut sampler = ProposalSampler::new(threshold, seed)?;
        let mut acc = MomentAccumulator::new();

        for _ in 0..self.config.sample_count {
            let x = sampler.draw();
            acc.observe(weight(x, threshold));
        }

        estimator::finalize(&acc, threshold, self.config.confidence_level)
    }

    /// Run the estimation pass across `workers` parallel workers.
    ///
    /// The draws are partitioned evenly (the last worker takes the
    /// remainder); worker k samples from its own long-jumped RNG stream
    /// and folds a local accumulator, and partials are merged in worker
    /// index order. A fixed seed and worker count give bit-identical
    /// results; changing the worker count changes the draw partitioning,
    /// so results across worker counts agree only statistically.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self, workers: usize) -> Result<Estimate, ConfigError> {
        use rayon::prelude::*;

        assert!(workers > 0, "workers must be > 0");
        self.config.validate()?;
        let seed = self.resolve_seed();

        let threshold = self.config.threshold;
        let n = self.config.sample_count;
        let per_worker = n / workers as u64;
        let remainder = n % workers as u64;

        let partials: Vec<MomentAccumulator> = (0..workers)
            .into_par_iter()
            .map(|k| -> Result<MomentAccumulator, ConfigError> {
                let mut sampler = ProposalSampler::stream(threshold, seed, k)?;
                let mut acc = MomentAccumulator::new();
                let draws = if k == workers - 1 {
                    per_worker + remainder
                } else {
                    per_worker
                };
                for _ in 0..draws {
                    let x = sampler.draw();
                    acc.observe(weight(x, threshold));
                }
                Ok(acc)
            })
            .collect::<Result<_, _>>()?;

        // Merge in index order so the summation order is fixed.
        let mut total = MomentAccumulator::new();
        for part in &partials {
            total.merge(part);
        }

        estimator::finalize(&total, threshold, self.config.confidence_level)
    }

    fn resolve_seed(&self) -> u64 {
        match self.config.seed {
            Some(seed) => seed,
            None => rand::random(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_reaches_config() {
        let sampler = TailSampler::new()
            .threshold(3.0)
            .samples(1_000)
            .confidence_level(0.99)
            .seed(7);

        let config = sampler.config();
        assert_eq!(config.threshold, 3.0);
        assert_eq!(config.sample_count, 1_000);
        assert_eq!(config.confidence_level, 0.99);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_invalid_config_rejected_before_sampling() {
        let config = Config {
            sample_count: 0,
            ..Config::default()
        };
        let err = TailSampler::with_config(config).run().unwrap_err();
        assert_eq!(err, ConfigError::SampleCount { got: 0 });

        let config = Config {
            confidence_level: 0.0,
            ..Config::default()
        };
        let err = TailSampler::with_config(config).run().unwrap_err();
        assert_eq!(err, ConfigError::ConfidenceLevel { got: 0.0 });
    }

    #[test]
    fn test_counts_every_draw() {
        let estimate = TailSampler::new()
            .threshold(8.0)
            .samples(10_000)
            .seed(1)
            .run()
            .unwrap();
        // Non-exceeding draws contribute zero but still count toward n.
        assert_eq!(estimate.samples, 10_000);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_deterministic() {
        let sampler = TailSampler::new().threshold(3.0).samples(40_000).seed(9);
        let a = sampler.run_parallel(4).unwrap();
        let b = sampler.run_parallel(4).unwrap();
        assert_eq!(a.mean.to_bits(), b.mean.to_bits());
        assert_eq!(a.variance.to_bits(), b.variance.to_bits());
        assert_eq!(a.samples, 40_000);
    }
}
