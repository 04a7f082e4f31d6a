//! Pareto radius estimation
//!
//! The Pareto radius is the 18th percentile of the pairwise distances
//! between sample rows, taken with the (1/3, 1/3) plotting position. Inputs
//! larger than `max_samples` cells are row-subsampled first, and inputs of
//! more than 1024 cells get the fixed correction factor `4 / n^0.2`.

use crate::distances::Distances;
use crate::estimator::RECOMMENDED_SAMPLES;
use pareto_core::{
    percentiles, Diagnostics, Error, OrderStatistics, PlottingPosition, PrecisionWarning,
    QuantileEstimator, Result,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default cap on the number of cells entering the distance computation
pub const DEFAULT_MAX_SAMPLES: usize = 10_000;

/// Default percentile of the distance distribution
pub const DEFAULT_PERCENTILE: u32 = 18;

/// Inputs above this many cells get the large-sample correction
const CORRECTION_THRESHOLD: usize = 1024;

const DISTANCE_QUANTILES: PlottingPosition = PlottingPosition::MEDIAN_UNBIASED;

/// Outcome of a radius estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusEstimate {
    /// Radius after the large-sample correction
    pub radius: f64,
    /// Distance percentile before the correction
    pub uncorrected: f64,
    /// Rows that entered the distance computation
    pub rows_used: usize,
    /// Finite cells in the input
    pub total_cells: usize,
    pub diagnostics: Diagnostics,
}

/// Percentiles 1..=100 of the pairwise distance distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistancePercentiles {
    /// Distance at percentile `i + 1` for `i` in `0..100`
    pub distances: Vec<f64>,
    /// Percentile (1-based) whose distance is the uncorrected radius
    pub selected: usize,
    /// The uncorrected radius
    pub radius: f64,
}

/// Pareto radius estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParetoRadius {
    max_samples: usize,
    percentile: u32,
    large_sample_correction: bool,
}

impl Default for ParetoRadius {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            percentile: DEFAULT_PERCENTILE,
            large_sample_correction: true,
        }
    }
}

/// Rows selected for the distance computation
struct Selection {
    distances: Distances,
    rows_used: usize,
    total_cells: usize,
    diagnostics: Diagnostics,
}

impl ParetoRadius {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ParetoRadiusBuilder {
        ParetoRadiusBuilder::new()
    }

    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    pub fn percentile(&self) -> u32 {
        self.percentile
    }

    pub fn large_sample_correction(&self) -> bool {
        self.large_sample_correction
    }

    /// Radius of a one-dimensional sample
    ///
    /// Non-finite values are dropped. The random source is only drawn from
    /// when the sample exceeds `max_samples`.
    pub fn estimate<R: Rng + ?Sized>(&self, sample: &[f64], rng: &mut R) -> Result<RadiusEstimate> {
        self.estimate_rows(sample, 1, rng)
    }

    /// Radius of a row-major matrix with `ncols` columns
    ///
    /// Rows containing a non-finite cell are dropped with a
    /// [`PrecisionWarning::NonFiniteRemoved`] diagnostic.
    #[instrument(skip_all, fields(cells = cells.len(), ncols = ncols))]
    pub fn estimate_rows<R: Rng + ?Sized>(
        &self,
        cells: &[f64],
        ncols: usize,
        rng: &mut R,
    ) -> Result<RadiusEstimate> {
        let Selection {
            distances,
            rows_used,
            total_cells,
            diagnostics,
        } = self.select(cells, ncols, rng)?;

        let uncorrected = self.radius_from(&distances)?;
        let radius = if self.large_sample_correction && total_cells > CORRECTION_THRESHOLD {
            let factor = 4.0 / (total_cells as f64).powf(0.2);
            debug!(factor, "large-sample radius correction");
            uncorrected * factor
        } else {
            uncorrected
        };

        Ok(RadiusEstimate {
            radius,
            uncorrected,
            rows_used,
            total_cells,
            diagnostics,
        })
    }

    /// Percentiles 1..=100 of the distance distribution of a one-dimensional
    /// sample, with the percentile the radius was taken from
    pub fn distance_percentiles<R: Rng + ?Sized>(
        &self,
        sample: &[f64],
        rng: &mut R,
    ) -> Result<DistancePercentiles> {
        let selection = self.select(sample, 1, rng)?;
        let radius = self.radius_from(&selection.distances)?;
        let distances = DISTANCE_QUANTILES.quantiles_sorted(&selection.distances, &percentiles(1, 100))?;
        let selected = distances
            .iter()
            .position(|&d| d == radius)
            .map_or(self.percentile as usize, |i| i + 1);

        Ok(DistancePercentiles {
            distances,
            selected,
            radius,
        })
    }

    fn select<R: Rng + ?Sized>(&self, cells: &[f64], ncols: usize, rng: &mut R) -> Result<Selection> {
        if ncols == 0 || cells.len() % ncols != 0 {
            return Err(Error::InvalidInput(format!(
                "{} cells cannot be split into rows of {} columns",
                cells.len(),
                ncols
            )));
        }

        let mut diagnostics = Diagnostics::new();
        let rows: Vec<&[f64]> = cells
            .chunks_exact(ncols)
            .filter(|row| row.iter().all(|x| x.is_finite()))
            .collect();
        let dropped = cells.len() / ncols - rows.len();
        if dropped > 0 {
            diagnostics.warn(PrecisionWarning::NonFiniteRemoved { removed: dropped });
        }
        if rows.len() < 2 {
            return Err(Error::DegenerateInput(format!(
                "at least two complete rows are needed for pairwise distances, got {}",
                rows.len()
            )));
        }
        if rows.len() < RECOMMENDED_SAMPLES {
            diagnostics.warn(PrecisionWarning::FewSamples {
                actual: rows.len(),
                recommended: RECOMMENDED_SAMPLES,
            });
        }

        let total_cells = rows.len() * ncols;
        let selected: Vec<&[f64]> = if total_cells > self.max_samples {
            let amount = (self.max_samples / ncols).clamp(2, rows.len());
            let mut index = rand::seq::index::sample(rng, rows.len(), amount).into_vec();
            index.sort_unstable();
            debug!(from = rows.len(), to = amount, "subsampling rows for radius");
            index.into_iter().map(|i| rows[i]).collect()
        } else {
            rows
        };

        let flat: Vec<f64> = selected.iter().flat_map(|row| row.iter().copied()).collect();
        Ok(Selection {
            distances: Distances::from_rows(&flat, ncols),
            rows_used: selected.len(),
            total_cells,
            diagnostics,
        })
    }

    /// Distance percentile, or the smallest positive percentile when it is zero
    fn radius_from<S: OrderStatistics + ?Sized>(&self, distances: &S) -> Result<f64> {
        let p = f64::from(self.percentile) / 100.0;
        let mut radius = DISTANCE_QUANTILES.quantile_sorted(distances, p)?;

        if radius == 0.0 {
            debug!(percentile = self.percentile, "zero radius, searching positive percentile");
            radius = f64::NAN;
            for p in percentiles(1, 100) {
                let candidate = DISTANCE_QUANTILES.quantile_sorted(distances, p)?;
                if candidate > 0.0 {
                    radius = candidate;
                    break;
                }
            }
        }

        if radius.is_finite() {
            Ok(radius)
        } else {
            Err(Error::DegenerateInput(
                "Pareto radius could not be calculated (no positive finite distance)".to_string(),
            ))
        }
    }
}

/// Builder for [`ParetoRadius`]
#[derive(Debug, Clone)]
pub struct ParetoRadiusBuilder {
    max_samples: usize,
    percentile: u32,
    large_sample_correction: bool,
}

impl Default for ParetoRadiusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParetoRadiusBuilder {
    pub fn new() -> Self {
        let defaults = ParetoRadius::default();
        Self {
            max_samples: defaults.max_samples,
            percentile: defaults.percentile,
            large_sample_correction: defaults.large_sample_correction,
        }
    }

    /// Maximum number of cells used for pairwise distances (at least 2)
    pub fn max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples.max(2);
        self
    }

    /// Percentile of the distance distribution (1-100)
    pub fn percentile(mut self, percentile: u32) -> Self {
        self.percentile = percentile.clamp(1, 100);
        self
    }

    /// Enable or disable the `4 / n^0.2` factor for inputs above 1024 cells
    pub fn large_sample_correction(mut self, enabled: bool) -> Self {
        self.large_sample_correction = enabled;
        self
    }

    pub fn build(self) -> ParetoRadius {
        ParetoRadius {
            max_samples: self.max_samples,
            percentile: self.percentile,
            large_sample_correction: self.large_sample_correction,
        }
    }
}

/// Pareto radius of a one-dimensional sample with default settings
pub fn pareto_radius<R: Rng + ?Sized>(sample: &[f64], rng: &mut R) -> Result<f64> {
    ParetoRadius::default().estimate(sample, rng).map(|r| r.radius)
}
