use crate::estimator::ParetoDensityEstimator;
use crate::radius::ParetoRadius;
use pareto_histogram::{BinCountRule, KeatingScottRule, Pretty, DEFAULT_H};

/// Builder for configuring and creating density estimators.
///
/// ```rust
/// use pareto_density::DensityEstimatorBuilder;
/// use pareto_histogram::ScottsRule;
///
/// let estimator = DensityEstimatorBuilder::new()
///     .min_kernels(200)
///     .bin_rule(ScottsRule)
///     .build();
/// assert_eq!(estimator.min_kernels(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct DensityEstimatorBuilder<B = KeatingScottRule> {
    radius: ParetoRadius,
    bin_rule: B,
    pretty_bias: f64,
    min_kernels: usize,
    max_kernels: usize,
}

impl Default for DensityEstimatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DensityEstimatorBuilder {
    /// Creates a builder with the default radius, Keating/Scott bin counts,
    /// at least 100 and at most 10000 kernels.
    pub fn new() -> Self {
        Self {
            radius: ParetoRadius::default(),
            bin_rule: KeatingScottRule::default(),
            pretty_bias: DEFAULT_H,
            min_kernels: 100,
            max_kernels: 10_000,
        }
    }
}

impl<B: BinCountRule> DensityEstimatorBuilder<B> {
    /// Sets the radius estimator used when no radius is supplied.
    pub fn radius(mut self, radius: ParetoRadius) -> Self {
        self.radius = radius;
        self
    }

    /// Replaces the bin count rule that sizes the kernel grid.
    pub fn bin_rule<R: BinCountRule>(self, bin_rule: R) -> DensityEstimatorBuilder<R> {
        DensityEstimatorBuilder {
            radius: self.radius,
            bin_rule,
            pretty_bias: self.pretty_bias,
            min_kernels: self.min_kernels,
            max_kernels: self.max_kernels,
        }
    }

    /// Sets the lower bound on the number of grid cells (at least 1).
    pub fn min_kernels(mut self, min_kernels: usize) -> Self {
        self.min_kernels = min_kernels.max(1);
        self
    }

    /// Sets the cap on the number of grid cells (at least 1).
    ///
    /// Larger requests are capped with a `TooManyKernels` warning.
    pub fn max_kernels(mut self, max_kernels: usize) -> Self {
        self.max_kernels = max_kernels.max(1);
        self
    }

    /// Sets the bias of the breakpoint generator towards larger units (>= 0).
    pub fn pretty_bias(mut self, h: f64) -> Self {
        self.pretty_bias = if h.is_finite() { h.max(0.0) } else { DEFAULT_H };
        self
    }

    pub fn build(self) -> ParetoDensityEstimator<B> {
        ParetoDensityEstimator {
            radius: self.radius,
            bin_rule: self.bin_rule,
            pretty: Pretty::new(self.pretty_bias),
            min_kernels: self.min_kernels,
            max_kernels: self.max_kernels,
        }
    }
}
