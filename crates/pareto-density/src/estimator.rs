//! Pareto density estimation
//!
//! The density at a kernel is the number of sample points within ± radius
//! of it, after mirroring the points near each edge across that edge,
//! normalized to unit trapezoidal area.

use crate::dirac;
use crate::radius::ParetoRadius;
use crate::types::{ColumnDensity, DensityEstimate};
use pareto_core::{
    execution, utils, Column, Diagnostics, Error, PrecisionWarning, Result, Sample, Table,
};
use pareto_histogram::{midpoints, BinCountRule, KeatingScottRule, Pretty};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, warn};

/// Samples below this size get a [`PrecisionWarning::FewSamples`]
pub const RECOMMENDED_SAMPLES: usize = 10;

/// Samples with fewer distinct values get a [`PrecisionWarning::FewUniqueValues`]
pub const MIN_UNIQUE_VALUES: usize = 5;

/// Kernel counts above this are inflated to `3n + 1`
const INFLATION_THRESHOLD: usize = 100;

/// Areas below this are treated as zero
const MIN_AREA: f64 = 1e-10;

/// Pareto density estimator
///
/// Built through [`DensityEstimatorBuilder`](crate::DensityEstimatorBuilder);
/// the bin count rule `B` sizes the kernel grid when no kernels are given.
#[derive(Debug, Clone)]
pub struct ParetoDensityEstimator<B = KeatingScottRule> {
    pub(crate) radius: ParetoRadius,
    pub(crate) bin_rule: B,
    pub(crate) pretty: Pretty,
    pub(crate) min_kernels: usize,
    pub(crate) max_kernels: usize,
}

impl Default for ParetoDensityEstimator {
    fn default() -> Self {
        Self {
            radius: ParetoRadius::default(),
            bin_rule: KeatingScottRule::default(),
            pretty: Pretty::default(),
            min_kernels: 100,
            max_kernels: 10_000,
        }
    }
}

impl ParetoDensityEstimator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: BinCountRule> ParetoDensityEstimator<B> {
    pub fn radius_estimator(&self) -> &ParetoRadius {
        &self.radius
    }

    pub fn bin_rule(&self) -> &B {
        &self.bin_rule
    }

    pub fn min_kernels(&self) -> usize {
        self.min_kernels
    }

    pub fn max_kernels(&self) -> usize {
        self.max_kernels
    }

    /// Estimate the density with a computed radius and kernel grid
    pub fn estimate<R: Rng + ?Sized>(&self, data: &[f64], rng: &mut R) -> Result<DensityEstimate> {
        self.estimate_with(data, None, None, rng)
    }

    /// Estimate the density with an optional radius and kernel locations
    ///
    /// A radius that is `None`, NaN, infinite or zero is recomputed. Empty
    /// or absent kernels are generated from the bin count rule; given
    /// kernels are sorted and deduplicated. Non-finite data is dropped.
    #[instrument(skip_all, fields(n = data.len()))]
    pub fn estimate_with<R: Rng + ?Sized>(
        &self,
        data: &[f64],
        radius: Option<f64>,
        kernels: Option<&[f64]>,
        rng: &mut R,
    ) -> Result<DensityEstimate> {
        let sample = Sample::from_values(data.iter().copied());
        let mut diagnostics = Diagnostics::new();
        if sample.removed() > 0 {
            diagnostics.warn(PrecisionWarning::NonFiniteRemoved {
                removed: sample.removed(),
            });
        }
        if sample.is_empty() {
            debug!("no finite values left for density estimation");
            return Err(Error::empty_input("pareto density"));
        }
        if sample.len() < RECOMMENDED_SAMPLES {
            diagnostics.warn(PrecisionWarning::FewSamples {
                actual: sample.len(),
                recommended: RECOMMENDED_SAMPLES,
            });
        }

        let unique = sample.unique();
        if unique.len() < MIN_UNIQUE_VALUES {
            diagnostics.warn(PrecisionWarning::FewUniqueValues {
                unique: unique.len(),
            });
        }
        if unique.len() <= 2 {
            debug!(unique = unique.len(), "Dirac-delta approximation");
            let (kernels, density) = dirac::spikes(&unique);
            return Ok(DensityEstimate {
                kernels,
                density,
                radius: 0.0,
                diagnostics,
            });
        }

        let radius = match radius {
            Some(r) if r.is_finite() && r < 0.0 => {
                return Err(Error::InvalidParameter(format!(
                    "radius must be non-negative, got {r}"
                )))
            }
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => {
                let estimate = self.radius.estimate(sample.values(), rng)?;
                diagnostics.merge(estimate.diagnostics);
                estimate.radius
            }
        };

        let sorted = sample.sorted();
        let (min, max) = (sorted[0], sorted[sorted.len() - 1]);

        let mut grid = match kernels.map(normalize_kernels) {
            Some(k) if !k.is_empty() => k,
            _ => self.kernel_grid(&sorted, min, max, &mut diagnostics)?,
        };
        cover_extremes(&mut grid, min, max, radius);

        let extended = mirror(&sorted, min, max, radius);
        let counts: Vec<f64> = grid
            .iter()
            .map(|&k| count_within(&extended, k - radius, k + radius) as f64)
            .collect();

        let area = utils::trapezoid(&counts, &grid);
        let density = if area.is_nan() || area < MIN_AREA {
            diagnostics.warn(PrecisionWarning::ZeroArea { area });
            vec![0.0; counts.len()]
        } else {
            counts.into_iter().map(|c| c / area).collect()
        };

        debug!(radius, kernels = grid.len(), "density estimated");
        Ok(DensityEstimate {
            kernels: grid,
            density,
            radius,
            diagnostics,
        })
    }

    /// Estimate the density of a table column
    ///
    /// Text columns are rejected with a type mismatch.
    pub fn estimate_column<R: Rng + ?Sized>(
        &self,
        column: &Column,
        rng: &mut R,
    ) -> Result<DensityEstimate> {
        let sample = Sample::try_from(column)?;
        self.estimate(sample.values(), rng)
    }

    /// Kernel locations from the bin count rule
    fn kernel_grid(
        &self,
        sorted: &[f64],
        min: f64,
        max: f64,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<f64>> {
        let mut bins = self.bin_rule.bin_count(sorted).max(self.min_kernels);
        if bins > INFLATION_THRESHOLD {
            if bins > self.max_kernels {
                diagnostics.warn(PrecisionWarning::TooManyKernels {
                    requested: bins,
                    capped: self.max_kernels,
                });
                bins = self.max_kernels;
            } else {
                bins = bins * 3 + 1;
            }
        }
        debug!(bins, rule = self.bin_rule.name(), "kernel grid size");
        let breaks = self.pretty.breaks(min, max, bins)?;
        Ok(midpoints(&breaks))
    }
}

impl<B: BinCountRule + Sync + Send> ParetoDensityEstimator<B> {
    /// Estimate the density of every numeric column of a table
    ///
    /// Column `i` draws from its own ChaCha8 stream `i` of `seed`, so the
    /// results do not depend on the order columns are processed in. Text
    /// columns are skipped. A column that cannot be estimated (e.g. no
    /// finite values) carries its own error and does not affect the others.
    #[instrument(skip_all, fields(columns = table.len()))]
    pub fn estimate_table(&self, table: &Table, seed: u64) -> Vec<ColumnDensity> {
        let jobs: Vec<(usize, &str, &[f64])> = table
            .columns()
            .enumerate()
            .filter_map(|(i, (name, column))| column.as_numeric().map(|values| (i, name, values)))
            .collect();

        execution::execute_batch(jobs.len(), |j| {
            let (index, name, values) = jobs[j];
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(index as u64);
            let estimate = self.estimate(values, &mut rng);
            if let Err(err) = &estimate {
                warn!(column = name, %err, "density estimation failed for column");
            }
            ColumnDensity {
                name: name.to_string(),
                estimate,
            }
        })
    }
}

/// Finite kernels, ascending, without duplicates
fn normalize_kernels(kernels: &[f64]) -> Vec<f64> {
    let mut grid: Vec<f64> = kernels.iter().copied().filter(|k| k.is_finite()).collect();
    grid.sort_unstable_by(f64::total_cmp);
    grid.dedup();
    grid
}

/// Add the sample extremes when the grid does not reach them within `radius`
///
/// An empty grid becomes `[min, max]`.
fn cover_extremes(grid: &mut Vec<f64>, min: f64, max: f64, radius: f64) {
    let (Some(&first), Some(&last)) = (grid.first(), grid.last()) else {
        *grid = normalize_kernels(&[min, max]);
        return;
    };
    let mut extended = false;
    if first - radius > min {
        grid.push(min);
        extended = true;
    }
    if last + radius < max {
        grid.push(max);
        extended = true;
    }
    if extended {
        *grid = normalize_kernels(grid);
    }
}

/// Sorted sample extended by its reflections across both edges
///
/// Points closer than `radius` to the minimum are reflected as
/// `2·min − x`, points closer than `radius` to the maximum as `2·max − x`.
pub(crate) fn mirror(sorted: &[f64], min: f64, max: f64, radius: f64) -> Vec<f64> {
    let low = sorted
        .iter()
        .take_while(|&&x| x < min + radius)
        .map(|&x| 2.0 * min - x);
    let high = sorted
        .iter()
        .rev()
        .take_while(|&&x| x > max - radius)
        .map(|&x| 2.0 * max - x);

    let mut extended: Vec<f64> = sorted.iter().copied().chain(low).chain(high).collect();
    extended.sort_unstable_by(f64::total_cmp);
    extended
}

/// Number of sorted values in `[lower, upper]`
pub(crate) fn count_within(sorted: &[f64], lower: f64, upper: f64) -> usize {
    let start = sorted.partition_point(|&x| x < lower);
    let end = sorted.partition_point(|&x| x <= upper);
    end.saturating_sub(start)
}
