//! Running moment accumulation for per-draw contributions.

/// Running sums of the per-draw contribution and its square.
///
/// This is the only mutable state the estimation pass carries: S1 = Σw,
/// S2 = Σw², and the draw count. Every draw is folded in exactly once,
/// including non-exceeding draws (which contribute zero but still count
/// toward n).
///
/// The fold is commutative and associative: splitting the draws into
/// chunks, accumulating each chunk separately, and [`merge`](Self::merge)-ing
/// the partials yields the same totals as one sequential pass, up to
/// floating-point summation order. That contract is what lets a parallel
/// run combine worker-local accumulators by plain addition.
///
/// Both sums are Kahan-compensated. At the reference draw count of
/// 1.55×10⁸ a naive running sum loses low-order bits to floating-point
/// drift; compensated summation keeps the accumulated error near one ulp
/// of the total.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MomentAccumulator {
    count: u64,
    sum: f64,
    sum_err: f64,
    sum_sq: f64,
    sum_sq_err: f64,
}

impl MomentAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruct an accumulator from previously accumulated totals.
    ///
    /// Intended for merging partials that crossed a process or wire
    /// boundary, where only (count, S1, S2) survive.
    pub fn from_parts(count: u64, sum: f64, sum_sq: f64) -> Self {
        Self {
            count,
            sum,
            sum_err: 0.0,
            sum_sq,
            sum_sq_err: 0.0,
        }
    }

    /// Fold one per-draw contribution into the running sums.
    ///
    /// Adds `w` to S1 and `w²` to S2. Weights are non-negative, so both
    /// sums are monotonically non-decreasing.
    #[inline]
    pub fn observe(&mut self, w: f64) {
        self.count += 1;
        kahan_add(&mut self.sum, &mut self.sum_err, w);
        kahan_add(&mut self.sum_sq, &mut self.sum_sq_err, w * w);
    }

    /// Fold another accumulator's totals into this one.
    ///
    /// Commutative up to floating-point summation order; merging chunk
    /// partials in any order gives the same estimate to within rounding.
    pub fn merge(&mut self, other: &MomentAccumulator) {
        self.count += other.count;
        kahan_add(&mut self.sum, &mut self.sum_err, other.sum);
        kahan_add(&mut self.sum_sq, &mut self.sum_sq_err, other.sum_sq);
    }

    /// Number of contributions folded in so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// S1: the running sum of contributions.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// S2: the running sum of squared contributions.
    pub fn sum_sq(&self) -> f64 {
        self.sum_sq
    }
}

/// One step of Kahan compensated summation.
#[inline]
fn kahan_add(sum: &mut f64, err: &mut f64, x: f64) {
    let y = x - *err;
    let t = *sum + y;
    *err = (t - *sum) - y;
    *sum = t;
}
