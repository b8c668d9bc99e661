//! Importance weight for the standard-normal / shifted-normal pair.
//!
//! The proposal Normal(θ, 1) is the target Normal(0, 1) translated to the
//! threshold, so the density ratio collapses to a single exponential:
//!
//! ```text
//! f_target(x) / f_proposal(x) = exp(θ²/2 − θx)
//! ```
//!
//! Restricted to the exceedance event {x > θ}, this is exactly the
//! correction that makes E_proposal[w·1{x>θ}] = P_target(X > θ). The
//! exponent is assembled before calling `exp`, never as a quotient of two
//! evaluated densities; both densities underflow to zero long before the
//! thresholds of interest (e.g. θ = 8), while their log difference stays
//! comfortably representable.

/// Log of the importance weight for a draw above the threshold.
///
/// Only meaningful on the exceedance event; callers branch on
/// `x > threshold` first (see [`weight`]).
#[inline]
pub fn log_weight(x: f64, threshold: f64) -> f64 {
    threshold * threshold / 2.0 - threshold * x
}

/// Per-draw contribution of a proposal draw `x` to the tail estimate.
///
/// Zero when `x` does not exceed the threshold, otherwise the
/// importance weight exp(θ²/2 − θx). For draws above a positive
/// threshold the exponent is below −θ²/2, so the weight is always in
/// (0, 1) and cannot overflow; negative thresholds can drive the
/// exponent positive and are subject to the f64 overflow limit near
/// exp(709), a design limit of the shifted-normal proposal.
#[inline]
pub fn weight(x: f64, threshold: f64) -> f64 {
    if x > threshold {
        log_weight(x, threshold).exp()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_at_or_below_threshold() {
        assert_eq!(weight(8.0, 8.0), 0.0);
        assert_eq!(weight(7.999, 8.0), 0.0);
        assert_eq!(weight(-100.0, 8.0), 0.0);
        assert_eq!(weight(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_non_negative_everywhere() {
        for threshold in [-2.0, 0.0, 1.0, 3.0, 8.0] {
            let mut x = -20.0;
            while x <= 20.0 {
                let w = weight(x, threshold);
                assert!(w >= 0.0, "weight({x}, {threshold}) = {w}");
                assert!(w.is_finite());
                x += 0.25;
            }
        }
    }

    #[test]
    fn test_matches_reference_formula() {
        // The original simulation computes exp(32 - 8x) for θ = 8.
        let x = 8.5;
        assert!((weight(x, 8.0) - (32.0 - 8.0 * x).exp()).abs() < 1e-300);
    }

    #[test]
    fn test_unshifted_proposal_has_unit_weight() {
        // θ = 0 means proposal = target: plain Monte Carlo, every
        // exceeding draw counts with weight exactly 1.
        assert_eq!(weight(0.5, 0.0), 1.0);
        assert_eq!(weight(17.0, 0.0), 1.0);
    }

    #[test]
    fn test_weight_bounded_above_positive_threshold() {
        // For θ > 0 and x > θ the exponent is below -θ²/2.
        for x in [3.0001, 3.5, 5.0, 30.0] {
            let w = weight(x, 3.0);
            assert!(w < (-4.5f64).exp() + 1e-12);
        }
    }

    #[test]
    fn test_log_weight_consistency() {
        let x = 9.25;
        let theta = 8.0;
        assert!((weight(x, theta).ln() - log_weight(x, theta)).abs() < 1e-12);
    }
}
