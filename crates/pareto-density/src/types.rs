//! Result types for density estimation

use pareto_core::{utils, Diagnostics, Result};
use serde::{Deserialize, Serialize};

/// A density curve evaluated at kernel locations
///
/// `kernels` is ascending and `density` has one non-negative entry per
/// kernel. A radius of 0 marks the Dirac-delta approximation used for
/// samples with at most two distinct values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityEstimate {
    pub kernels: Vec<f64>,
    pub density: Vec<f64>,
    pub radius: f64,
    pub diagnostics: Diagnostics,
}

impl DensityEstimate {
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    /// Whether this is the Dirac-delta approximation
    pub fn is_dirac(&self) -> bool {
        self.radius == 0.0
    }

    /// Trapezoidal area under the curve
    pub fn area(&self) -> f64 {
        utils::trapezoid(&self.density, &self.kernels)
    }

    /// Largest density value, 0 for an empty curve
    pub fn max_density(&self) -> f64 {
        self.density.iter().copied().fold(0.0, f64::max)
    }

    /// Density divided by its maximum; all zeros stay zero
    pub fn scaled(&self) -> Vec<f64> {
        let max = self.max_density();
        if max > 0.0 {
            self.density.iter().map(|d| d / max).collect()
        } else {
            vec![0.0; self.density.len()]
        }
    }

    /// Iterate over `(kernel, density)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.kernels.iter().copied().zip(self.density.iter().copied())
    }
}

/// Density estimate of one table column, or why it could not be computed
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDensity {
    pub name: String,
    pub estimate: Result<DensityEstimate>,
}

impl ColumnDensity {
    pub fn ok(&self) -> Option<&DensityEstimate> {
        self.estimate.as_ref().ok()
    }
}
