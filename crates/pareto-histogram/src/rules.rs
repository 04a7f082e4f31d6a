//! Bin count rules
//!
//! [`KeatingScottRule`] is the rule the density estimator uses to size its
//! kernel grid. [`ScottsRule`] and [`FreedmanDiaconisRule`] are the classic
//! alternatives and can be swapped in through the density builder.

use crate::traits::BinCountRule;
use pareto_core::{utils, PlottingPosition, QuantileEstimator};

/// Normal-consistency factor of the interquartile range
const IQR_TO_SIGMA: f64 = 1.349;

fn finite_values(sample: &[f64]) -> Vec<f64> {
    sample.iter().copied().filter(|x| x.is_finite()).collect()
}

fn interquartile_range(sorted: &[f64], estimator: PlottingPosition) -> f64 {
    estimator
        .quantiles_sorted(sorted, &[0.25, 0.75])
        .map(|q| q[1] - q[0])
        .unwrap_or(f64::NAN)
}

fn bins_for_width(range: f64, width: f64) -> Option<usize> {
    let bins = (range / width).ceil();
    (bins.is_finite() && bins >= 0.0).then_some(bins as usize)
}

/// Keating/Scott rule on a robust spread
///
/// `σ* = min(sd, IQR / 1.349)`, bin width `3.49 σ* / n^(1/3)`, with the
/// interquartile range taken at the (1/3, 1/3) plotting position. The
/// count is never below `min_bins` (10 by default); a non-positive or
/// undefined width also yields `min_bins`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeatingScottRule {
    min_bins: usize,
}

impl Default for KeatingScottRule {
    fn default() -> Self {
        Self { min_bins: 10 }
    }
}

impl KeatingScottRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound on the bin count
    pub fn with_min_bins(mut self, min_bins: usize) -> Self {
        self.min_bins = min_bins.max(1);
        self
    }

    /// Robust spread `min(sd, IQR / 1.349)` of finite, sorted data
    fn robust_sigma(sorted: &[f64]) -> f64 {
        let sigma = utils::std_dev(sorted);
        let iqr = interquartile_range(sorted, PlottingPosition::MEDIAN_UNBIASED);
        sigma.min(iqr / IQR_TO_SIGMA)
    }
}

impl BinCountRule for KeatingScottRule {
    fn name(&self) -> &str {
        "keating-scott"
    }

    fn bin_count(&self, sample: &[f64]) -> usize {
        let sorted = utils::sorted(&finite_values(sample));
        let n = sorted.len();
        if n == 0 {
            return 0;
        }
        let sigma = Self::robust_sigma(&sorted);
        let width = 3.49 * sigma / (n as f64).cbrt();

        if width > 0.0 {
            let range = sorted[n - 1] - sorted[0];
            bins_for_width(range, width)
                .unwrap_or(self.min_bins)
                .max(self.min_bins)
        } else {
            self.min_bins
        }
    }
}

/// Scott's rule for optimal bin width
///
/// Uses the formula: h = 3.5 * σ * n^(-1/3)
/// where σ is the (population) standard deviation and n is the sample size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScottsRule;

impl BinCountRule for ScottsRule {
    fn name(&self) -> &str {
        "scott"
    }

    fn bin_count(&self, sample: &[f64]) -> usize {
        let data = finite_values(sample);
        let n = data.len();
        if n == 0 {
            return 0;
        }
        let n_f = n as f64;
        let mean = utils::mean(&data);
        let variance = data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n_f;
        let bin_width = 3.5 * variance.sqrt() * n_f.powf(-1.0 / 3.0);

        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if bin_width > 1e-10 {
            bins_for_width(max - min, bin_width).unwrap_or(1).max(1)
        } else {
            1
        }
    }
}

/// Freedman-Diaconis rule for optimal bin width
///
/// Uses the formula: h = 2 * IQR * n^(-1/3)
/// where IQR is the interquartile range (linear plotting position).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreedmanDiaconisRule;

impl BinCountRule for FreedmanDiaconisRule {
    fn name(&self) -> &str {
        "freedman-diaconis"
    }

    fn bin_count(&self, sample: &[f64]) -> usize {
        let sorted = utils::sorted(&finite_values(sample));
        let n = sorted.len();
        if n == 0 {
            return 0;
        }
        let iqr = interquartile_range(&sorted, PlottingPosition::LINEAR);
        let bin_width = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);

        if bin_width > 1e-10 {
            bins_for_width(sorted[n - 1] - sorted[0], bin_width)
                .unwrap_or(1)
                .max(1)
        } else {
            1
        }
    }
}

/// Optimal histogram bin count by the Keating/Scott rule
///
/// Returns at least 10 for any sample with a finite value and 0 for an
/// empty sample.
///
/// ```rust
/// use pareto_histogram::optimal_bin_count;
///
/// assert_eq!(optimal_bin_count(&[]), 0);
/// assert_eq!(optimal_bin_count(&[1.0, 1.0, 1.0]), 10);
/// ```
pub fn optimal_bin_count(sample: &[f64]) -> usize {
    KeatingScottRule::default().bin_count(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    #[test]
    fn test_empty_and_degenerate() {
        assert_eq!(optimal_bin_count(&[]), 0);
        assert_eq!(optimal_bin_count(&[f64::NAN, f64::INFINITY]), 0);
        assert_eq!(optimal_bin_count(&[3.0]), 10);
        assert_eq!(optimal_bin_count(&[2.0, 2.0, 2.0, 2.0]), 10);
    }

    #[test]
    fn test_small_uniform_grid_hits_floor() {
        let data: Vec<f64> = (0..20).map(f64::from).collect();
        assert_eq!(optimal_bin_count(&data), 10);
    }

    #[test]
    fn test_large_normal_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        let normal = Normal::new(0.0, 1.0).unwrap();
        let data: Vec<f64> = (0..10_000).map(|_| normal.sample(&mut rng)).collect();

        let bins = optimal_bin_count(&data);
        // width ≈ 3.49 / 21.5 ≈ 0.16, range ≈ 7.5
        assert!((30..=70).contains(&bins), "bins = {bins}");
    }

    #[test]
    fn test_outliers_do_not_inflate_spread() {
        let mut data: Vec<f64> = (0..200).map(|i| f64::from(i) / 200.0).collect();
        data.push(1_000.0);
        let bins = optimal_bin_count(&data);
        // IQR-based spread stays small, so the huge range needs many bins
        assert!(bins > 1_000, "bins = {bins}");
    }

    #[test]
    fn test_min_bins_override() {
        let rule = KeatingScottRule::new().with_min_bins(25);
        assert_eq!(rule.bin_count(&[1.0, 2.0, 3.0]), 25);
    }

    #[test]
    fn test_alternative_rules() {
        let data: Vec<f64> = (0..1000).map(|i| f64::from(i) / 10.0).collect();
        assert!(ScottsRule.bin_count(&data) >= 1);
        assert!(FreedmanDiaconisRule.bin_count(&data) >= 1);
        assert_eq!(ScottsRule.bin_count(&[]), 0);
        assert_eq!(FreedmanDiaconisRule.bin_count(&[5.0, 5.0]), 1);
        assert_eq!(ScottsRule.name(), "scott");
    }
}
