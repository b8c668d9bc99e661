//! Error types for estimator configuration.

/// Error returned when a configuration parameter is invalid.
///
/// Every variant names the offending parameter and carries the rejected
/// value, so a failure can be traced to its input without digging through
/// the arithmetic it would otherwise have corrupted. Validation happens
/// before any sampling begins; once a configuration passes, the estimation
/// pass itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `sample_count` is below 2.
    ///
    /// The sample-variance denominator is n − 1, so at least two draws are
    /// required for a defined variance (and a meaningful confidence
    /// interval).
    SampleCount {
        /// The rejected sample count.
        got: u64,
    },

    /// `confidence_level` is outside the open interval (0, 1).
    ///
    /// A level of exactly 0 or 1 makes the normal quantile degenerate
    /// (−∞ or +∞), so both endpoints are rejected along with NaN.
    ConfidenceLevel {
        /// The rejected confidence level.
        got: f64,
    },

    /// `threshold` is not a finite number.
    ///
    /// The importance weight contains an exp(θ²/2) term; a non-finite
    /// threshold would turn every weight into NaN or infinity.
    Threshold {
        /// The rejected threshold.
        got: f64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SampleCount { got } => write!(
                f,
                "sample_count must be at least 2 (variance divides by n - 1), got {got}"
            ),
            Self::ConfidenceLevel { got } => {
                write!(f, "confidence_level must be in (0, 1), got {got}")
            }
            Self::Threshold { got } => write!(f, "threshold must be finite, got {got}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let err = ConfigError::SampleCount { got: 1 };
        assert!(err.to_string().contains("sample_count"));

        let err = ConfigError::ConfidenceLevel { got: 1.0 };
        assert!(err.to_string().contains("confidence_level"));

        let err = ConfigError::Threshold { got: f64::NAN };
        assert!(err.to_string().contains("threshold"));
    }
}
