//! Robust quantile normalization
//!
//! Values are rescaled by their 1st and 99th percentiles,
//! `y = (x − q01) / (q99 − q01)`, optionally centered on the median of the
//! result and capped. The [`NormalizationState`] returned with the data
//! holds everything needed to apply the same transform to new data or to
//! invert it.

use pareto_core::{Column, PlottingPosition, QuantileEstimator, Result, Table};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lower normalization quantile
pub const LOW_QUANTILE: f64 = 0.01;

/// Upper normalization quantile
pub const HIGH_QUANTILE: f64 = 0.99;

const QUANTILES: PlottingPosition = PlottingPosition::LINEAR;

/// Options controlling the normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Subtract the median of the rescaled data
    pub centered: bool,
    /// Clamp the result; to [−1, 1] when centered, otherwise to the
    /// 1st/99th percentile of the rescaled data
    pub capped: bool,
    /// Treat ±∞ as missing
    pub remove_inf: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            centered: false,
            capped: false,
            remove_inf: true,
        }
    }
}

impl NormalizeOptions {
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn capped(mut self, capped: bool) -> Self {
        self.capped = capped;
        self
    }

    pub fn remove_inf(mut self, remove_inf: bool) -> Self {
        self.remove_inf = remove_inf;
        self
    }
}

/// Parameters of one normalization, sufficient to repeat or invert it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationState {
    /// 1st percentile of the input
    pub min_x: f64,
    /// 99th percentile of the input
    pub max_x: f64,
    /// `max_x − min_x`, or 1 when that is zero
    pub denom: f64,
    /// Median subtracted after rescaling (0 when not centered)
    pub center: f64,
    pub centered: bool,
    pub capped: bool,
    /// Clamp bounds of the uncentered capped variant, in rescaled units
    pub cap_bounds: Option<(f64, f64)>,
}

impl NormalizationState {
    /// Apply this normalization to a single value
    pub fn apply_value(&self, x: f64) -> f64 {
        let y = (x - self.min_x) / self.denom - self.center;
        match (self.capped, self.centered, self.cap_bounds) {
            (true, true, _) => cap(y, -1.0, 1.0),
            (true, false, Some((lo, hi))) => cap(y, lo, hi),
            _ => y,
        }
    }

    /// Apply this normalization to new data
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&x| self.apply_value(x)).collect()
    }

    /// Map a normalized value back to the original scale
    ///
    /// Exact (up to rounding) for values that were not capped.
    pub fn invert_value(&self, y: f64) -> f64 {
        (y + self.center) * self.denom + self.min_x
    }

    pub fn invert(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&y| self.invert_value(y)).collect()
    }
}

/// Normalized data with its state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    pub values: Vec<f64>,
    pub state: NormalizationState,
}

/// Normalized numeric columns of a table with one state per column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableNormalization {
    /// Normalized numeric columns; text columns are dropped
    pub table: Table,
    pub states: Vec<(String, NormalizationState)>,
}

impl TableNormalization {
    pub fn state(&self, name: &str) -> Option<&NormalizationState> {
        self.states.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Map every normalized column back to its original scale
    pub fn invert(&self) -> Table {
        let mut table = Table::new();
        for (name, values) in self.table.numeric_columns() {
            match self.state(name) {
                Some(state) => table.insert(name, state.invert(values)),
                None => table.insert(name, values.to_vec()),
            }
        }
        table
    }
}

/// Quantile-based normalizer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RobustNormalizer {
    options: NormalizeOptions,
}

impl RobustNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize a series
    ///
    /// NaN (and ±∞ with `remove_inf`) are ignored by the quantiles and come
    /// out as NaN. A series without usable values gives NaN parameters.
    pub fn normalize(&self, series: &[f64]) -> Normalized {
        let NormalizeOptions {
            centered,
            capped,
            remove_inf,
        } = self.options;

        let data: Vec<f64> = if remove_inf {
            series
                .iter()
                .map(|&x| if x.is_infinite() { f64::NAN } else { x })
                .collect()
        } else {
            series.to_vec()
        };

        let (min_x, max_x) = quantile_pair(&data);
        let denom = if max_x - min_x == 0.0 { 1.0 } else { max_x - min_x };
        let mut values: Vec<f64> = data.iter().map(|&x| (x - min_x) / denom).collect();

        let mut center = 0.0;
        let mut cap_bounds = None;
        if centered {
            center = QUANTILES.quantile(&values, 0.5).unwrap_or(f64::NAN);
            for v in &mut values {
                *v -= center;
                if capped {
                    *v = cap(*v, -1.0, 1.0);
                }
            }
        } else if capped {
            let (lo, hi) = quantile_pair(&values);
            for v in &mut values {
                *v = cap(*v, lo, hi);
            }
            cap_bounds = Some((lo, hi));
        }

        debug!(min_x, max_x, center, "robust normalization");
        Normalized {
            values,
            state: NormalizationState {
                min_x,
                max_x,
                denom,
                center,
                centered,
                capped,
                cap_bounds,
            },
        }
    }

    /// Normalize a numeric column; text columns are a type mismatch
    pub fn normalize_column(&self, column: &Column) -> Result<Normalized> {
        match column.as_numeric() {
            Some(values) => Ok(self.normalize(values)),
            None => Err(pareto_core::Error::type_mismatch(
                "numeric column",
                column.type_name(),
            )),
        }
    }

    /// Normalize every numeric column independently, skipping text columns
    pub fn normalize_table(&self, table: &Table) -> TableNormalization {
        let mut out = Table::new();
        let mut states = Vec::new();
        for (name, values) in table.numeric_columns() {
            let Normalized { values, state } = self.normalize(values);
            out.insert(name, values);
            states.push((name.to_string(), state));
        }
        TableNormalization { table: out, states }
    }
}

/// Normalize a series with the given options
pub fn robust_normalize(series: &[f64], options: NormalizeOptions) -> Normalized {
    RobustNormalizer::new(options).normalize(series)
}

/// 1st and 99th percentile, NaN when nothing is left after dropping NaN
fn quantile_pair(values: &[f64]) -> (f64, f64) {
    match QUANTILES.quantiles(values, &[LOW_QUANTILE, HIGH_QUANTILE]) {
        Ok(q) => (q[0], q[1]),
        Err(_) => (f64::NAN, f64::NAN),
    }
}

/// Clamp that passes NaN (value or bounds) through unchanged
fn cap(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}
