//! Final estimate computation: point estimate, variance, confidence bounds.

use serde::{Deserialize, Serialize};

use crate::accumulator::MomentAccumulator;
use crate::error::ConfigError;
use crate::math;

/// Result bundle of a completed estimation run.
///
/// Computed once from the accumulated sums; read-only thereafter. The
/// struct is the programmatic surface of the estimator — everything the
/// human-readable report prints is derived from these fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// The exceedance threshold θ this estimate targets.
    pub threshold: f64,

    /// Point estimate of P(X > θ): S1 / n.
    pub mean: f64,

    /// Unbiased sample variance of the per-draw contribution:
    /// (S2 − S1²/n) / (n − 1).
    pub variance: f64,

    /// Standard error of the mean: √(variance / n).
    pub std_error: f64,

    /// Lower confidence bound: mean − z·std_error.
    pub ci_low: f64,

    /// Upper confidence bound: mean + z·std_error.
    pub ci_high: f64,

    /// Confidence level the interval was computed at.
    pub confidence_level: f64,

    /// Number of proposal draws behind the estimate.
    pub samples: u64,

    /// True if the raw variance came out negative and was clamped to zero.
    ///
    /// The single-pass formula S2 − S1²/n can cancel to a small negative
    /// number when the true variance is near zero; the clamp reports the
    /// precision loss instead of letting a NaN escape from the square
    /// root.
    pub variance_clamped: bool,
}

impl Estimate {
    /// Half-width of the confidence interval: z·std_error.
    pub fn ci_half_width(&self) -> f64 {
        (self.ci_high - self.ci_low) / 2.0
    }

    /// True if the interval contains `p`.
    pub fn covers(&self, p: f64) -> bool {
        self.ci_low <= p && p <= self.ci_high
    }
}

/// Convert accumulated sums into an [`Estimate`].
///
/// The arithmetic follows the reference algorithm: mean = S1/n, variance
/// via the single-pass sum-of-squares form, and a Wald interval at the
/// requested confidence level (z ≈ 1.96 for the default 95%).
///
/// Fails with [`ConfigError::SampleCount`] when fewer than two draws were
/// accumulated — the variance denominator is n − 1 — and with
/// [`ConfigError::ConfidenceLevel`] for a degenerate level. Both are
/// normally caught at configuration time; the re-check here keeps a
/// hand-built accumulator from producing NaN bounds.
pub fn finalize(
    acc: &MomentAccumulator,
    threshold: f64,
    confidence_level: f64,
) -> Result<Estimate, ConfigError> {
    let count = acc.count();
    if count < 2 {
        return Err(ConfigError::SampleCount { got: count });
    }
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(ConfigError::ConfidenceLevel {
            got: confidence_level,
        });
    }

    let n = count as f64;
    let s1 = acc.sum();
    let s2 = acc.sum_sq();

    let mean = s1 / n;

    let raw_variance = (s2 - s1 * s1 / n) / (n - 1.0);
    let variance_clamped = raw_variance < 0.0;
    let variance = if variance_clamped { 0.0 } else { raw_variance };

    let std_error = (variance / n).sqrt();
    let z = math::z_score(confidence_level);

    Ok(Estimate {
        threshold,
        mean,
        variance,
        std_error,
        ci_low: mean - z * std_error,
        ci_high: mean + z * std_error,
        confidence_level,
        samples: count,
        variance_clamped,
    })
}
