//! Core types for shape classification

use pareto_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Curvature summary of a function sampled at `x`
///
/// Derivatives are aligned with the sample points; both start with the
/// zero padding of the finite differences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvatureProfile {
    /// Smoothed finite-difference first derivative
    pub first_derivative: Vec<f64>,
    /// Smoothed finite-difference second derivative
    pub second_derivative: Vec<f64>,
    /// Longest convex run as a percentage of the points
    pub pro_convex: f64,
    /// Longest concave run as a percentage of the points
    pub pro_concave: f64,
    /// `100 · (pro_convex − pro_concave) / n`
    pub curvature: f64,
    /// Points that continue a convex run
    pub convex_run: Vec<bool>,
    /// Points that continue a concave run
    pub concave_run: Vec<bool>,
}

impl CurvatureProfile {
    /// Number of sample points
    pub fn len(&self) -> usize {
        self.second_derivative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.second_derivative.is_empty()
    }

    /// The shorter of the two longest runs
    pub fn min_run(&self) -> f64 {
        self.pro_convex.min(self.pro_concave)
    }
}

/// Outcome of bimodality classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BimodalityResult {
    /// Probability-like bimodality score in [0, 1]
    pub score: f64,
    pub pro_convex: f64,
    pub pro_concave: f64,
    /// Curvature of the quantile function against normal quantiles
    pub profile: CurvatureProfile,
}

impl BimodalityResult {
    /// Whether the score reaches `threshold`
    pub fn is_bimodal(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

impl fmt::Display for BimodalityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bimodality(score={:.3}, convex={:.2}%, concave={:.2}%)",
            self.score, self.pro_convex, self.pro_concave
        )
    }
}

/// Classification of one table column, or why it could not be computed
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBimodality {
    pub name: String,
    pub result: Result<BimodalityResult>,
}

impl ColumnBimodality {
    pub fn score(&self) -> Option<f64> {
        self.result.as_ref().ok().map(|r| r.score)
    }
}
