//! Sample quantiles with parameterized plotting positions
//!
//! Quantiles are interpolated between order statistics following the
//! (α, β) plotting-position family: with `m = α + p(1 − α − β)` and
//! `h = n·p + m`, the estimate interpolates linearly between the order
//! statistics at positions `⌊h⌋` and `⌊h⌋ + 1`, with `h` clamped to
//! `[1, n − 1]`.
//!
//! Order statistics are read through [`OrderStatistics`], so a quantile can
//! be taken of a sequence that is never materialized (see the pairwise
//! distance distribution in `pareto-density`).

use crate::error::{Error, Result};

/// Read access to the order statistics of a distribution
pub trait OrderStatistics {
    /// Number of observations
    fn count(&self) -> usize;

    /// The `k`-th smallest observation (0-based)
    fn order_statistic(&self, k: usize) -> f64;
}

/// A sorted slice is its own order-statistic table
impl OrderStatistics for [f64] {
    fn count(&self) -> usize {
        self.len()
    }

    fn order_statistic(&self, k: usize) -> f64 {
        self[k]
    }
}

impl OrderStatistics for Vec<f64> {
    fn count(&self) -> usize {
        self.len()
    }

    fn order_statistic(&self, k: usize) -> f64 {
        self[k]
    }
}

/// Trait for quantile estimation from order statistics
pub trait QuantileEstimator {
    /// Estimate a single quantile from pre-sorted data
    fn quantile_sorted<S>(&self, sorted: &S, p: f64) -> Result<f64>
    where
        S: OrderStatistics + ?Sized;

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted<S>(&self, sorted: &S, ps: &[f64]) -> Result<Vec<f64>>
    where
        S: OrderStatistics + ?Sized,
    {
        ps.iter().map(|&p| self.quantile_sorted(sorted, p)).collect()
    }

    /// Estimate a quantile of unsorted data, ignoring NaN values
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        let sorted = sorted_without_nan(data);
        self.quantile_sorted(sorted.as_slice(), p)
    }

    /// Estimate several quantiles of unsorted data, ignoring NaN values
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        let sorted = sorted_without_nan(data);
        self.quantiles_sorted(sorted.as_slice(), ps)
    }
}

/// Plotting-position parameters (α, β)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottingPosition {
    pub alpha: f64,
    pub beta: f64,
}

impl PlottingPosition {
    /// (1, 1): linear interpolation between order statistics (R type 7)
    pub const LINEAR: Self = Self::new(1.0, 1.0);

    /// (1/3, 1/3): approximately median-unbiased (R type 8)
    pub const MEDIAN_UNBIASED: Self = Self::new(1.0 / 3.0, 1.0 / 3.0);

    /// (1/2, 1/2): Hazen's piecewise linear rule (R type 5)
    pub const HAZEN: Self = Self::new(0.5, 0.5);

    pub const fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }
}

impl QuantileEstimator for PlottingPosition {
    fn quantile_sorted<S>(&self, sorted: &S, p: f64) -> Result<f64>
    where
        S: OrderStatistics + ?Sized,
    {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_quantile(p));
        }
        let n = sorted.count();
        match n {
            0 => Err(Error::empty_input("quantile")),
            1 => Ok(sorted.order_statistic(0)),
            _ => {
                let n_f = n as f64;
                let m = self.alpha + p * (1.0 - self.alpha - self.beta);
                let aleph = n_f * p + m;
                let k = aleph.clamp(1.0, n_f - 1.0).floor();
                let gamma = (aleph - k).clamp(0.0, 1.0);
                let k = k as usize;
                let lower = sorted.order_statistic(k - 1);
                let upper = sorted.order_statistic(k);
                Ok((1.0 - gamma) * lower + gamma * upper)
            }
        }
    }
}

/// Percentile probabilities `from/100 ..= to/100`
pub fn percentiles(from: u32, to: u32) -> Vec<f64> {
    (from..=to).map(|i| f64::from(i) / 100.0).collect()
}

fn sorted_without_nan(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}
