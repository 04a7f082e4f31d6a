//! Convex and concave runs of a sampled function
//!
//! The second derivative of `f` is approximated by two rounds of finite
//! differences, each followed by a causal boxcar filter. Points whose
//! smoothed second derivative exceeds `+threshold` are convex, points
//! below `−threshold` concave. A point continues a run when the next point
//! has the same classification (the last point is compared with itself);
//! the longest run of each kind is reported as a percentage of the points.

use crate::types::CurvatureProfile;
use pareto_core::{utils, Error, Result};

/// Default curvature threshold
pub const DEFAULT_THRESHOLD: f64 = 1.5;

/// Default boxcar length for the first derivative
pub const DEFAULT_FIRST_WINDOW: usize = 13;

/// Default boxcar length for the second derivative
pub const DEFAULT_SECOND_WINDOW: usize = 15;

/// Sign class of a smoothed second derivative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bend {
    Convex,
    Concave,
    Flat,
}

/// Curvature analysis with configurable threshold and filter lengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureAnalyzer {
    threshold: f64,
    first_window: usize,
    second_window: usize,
}

impl Default for CurvatureAnalyzer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            first_window: DEFAULT_FIRST_WINDOW,
            second_window: DEFAULT_SECOND_WINDOW,
        }
    }
}

impl CurvatureAnalyzer {
    pub fn new(threshold: f64, first_window: usize, second_window: usize) -> Self {
        Self {
            threshold: threshold.max(0.0),
            first_window: first_window.max(1),
            second_window: second_window.max(1),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn windows(&self) -> (usize, usize) {
        (self.first_window, self.second_window)
    }

    /// Curvature profile of `fx` sampled at `x`
    pub fn analyze(&self, x: &[f64], fx: &[f64]) -> Result<CurvatureProfile> {
        if x.len() != fx.len() {
            return Err(Error::InvalidInput(format!(
                "x and f(x) differ in length ({} vs {})",
                x.len(),
                fx.len()
            )));
        }
        if x.is_empty() {
            return Err(Error::empty_input("curvature analysis"));
        }
        let n = x.len();

        let first = utils::moving_average(&padded_slope(fx, x), self.first_window);
        let second = utils::moving_average(&padded_slope(&first, x), self.second_window);

        let bends: Vec<Bend> = second.iter().map(|&s| self.bend(s)).collect();
        let continues: Vec<bool> = (0..n).map(|i| bends[i] == bends[(i + 1).min(n - 1)]).collect();
        let convex_run: Vec<bool> = (0..n)
            .map(|i| continues[i] && bends[i] == Bend::Convex)
            .collect();
        let concave_run: Vec<bool> = (0..n)
            .map(|i| continues[i] && bends[i] == Bend::Concave)
            .collect();

        let n_f = n as f64;
        let pro_convex = 100.0 * longest_run(&convex_run) as f64 / n_f;
        let pro_concave = 100.0 * longest_run(&concave_run) as f64 / n_f;

        Ok(CurvatureProfile {
            first_derivative: first,
            second_derivative: second,
            pro_convex,
            pro_concave,
            curvature: 100.0 * (pro_convex - pro_concave) / n_f,
            convex_run,
            concave_run,
        })
    }

    fn bend(&self, second: f64) -> Bend {
        if second > self.threshold {
            Bend::Convex
        } else if second < -self.threshold {
            Bend::Concave
        } else {
            Bend::Flat
        }
    }
}

/// `[0, Δy₁/Δx₁, Δy₂/Δx₂, …]`
fn padded_slope(y: &[f64], x: &[f64]) -> Vec<f64> {
    std::iter::once(0.0)
        .chain(
            utils::diff(y)
                .into_iter()
                .zip(utils::diff(x))
                .map(|(dy, dx)| dy / dx),
        )
        .collect()
}

fn longest_run(mask: &[bool]) -> usize {
    mask.iter()
        .scan(0usize, |run, &on| {
            *run = if on { *run + 1 } else { 0 };
            Some(*run)
        })
        .max()
        .unwrap_or(0)
}

/// Curvature profile of `fx` sampled at `x` with the default settings
pub fn convex_concave(x: &[f64], fx: &[f64]) -> Result<CurvatureProfile> {
    CurvatureAnalyzer::default().analyze(x, fx)
}
