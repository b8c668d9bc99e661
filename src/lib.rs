//! # tailprob
//!
//! Estimate rare-event tail probabilities of the standard normal
//! distribution by importance sampling.
//!
//! Naive Monte Carlo cannot see an event like P(X > 8) ≈ 6.2×10⁻¹⁶: it
//! would need on the order of 10¹⁶ draws to observe a single exceedance.
//! This crate instead samples from a proposal distribution shifted to the
//! threshold, Normal(θ, 1), where roughly half the draws exceed, and
//! multiplies each exceeding draw by the analytically derived correction
//! weight exp(θ²/2 − θx). The weighted average is an unbiased estimate of
//! the true tail probability, reported with its variance and a Wald
//! confidence interval.
//!
//! ## Quick start
//!
//! ```
//! use tailprob::TailSampler;
//!
//! let estimate = TailSampler::new()
//!     .threshold(8.0)
//!     .samples(1_000_000)
//!     .seed(42)
//!     .run()
//!     .unwrap();
//!
//! // Within an order of magnitude of the true value 6.22e-16 after
//! // only a million draws.
//! assert!(estimate.mean > 1e-17 && estimate.mean < 1e-14);
//! println!("{}", tailprob::output::format_estimate(&estimate));
//! ```
//!
//! ## Determinism
//!
//! With a fixed seed (and, for [`TailSampler::run_parallel`], a fixed
//! worker count) two runs produce bit-identical results. Without a seed,
//! one is drawn from the thread-local entropy source per run.
//!
//! ## Features
//!
//! - `parallel`: enable `run_parallel`, which partitions the draws across
//!   rayon workers with independent long-jumped RNG streams.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod accumulator;
mod config;
mod error;
mod estimator;
mod math;
mod sampler;
mod simulation;
mod weight;

// Functional modules
pub mod output;

// Re-exports for public API
pub use accumulator::MomentAccumulator;
pub use config::Config;
pub use error::ConfigError;
pub use estimator::{finalize, Estimate};
pub use math::{normal_cdf, normal_quantile, z_score};
pub use sampler::ProposalSampler;
pub use simulation::TailSampler;
pub use weight::{log_weight, weight};
