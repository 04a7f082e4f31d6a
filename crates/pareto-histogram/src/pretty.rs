//! Human-round breakpoints
//!
//! Computes about `n + 1` equally spaced "round" values covering a range.
//! The spacing is 1, 2, 5 or 10 times a power of ten; the bias parameters
//! `h` and `h5` shift the choice towards larger units.

use pareto_core::{utils, Error, Result};

/// Default bias towards larger units
pub const DEFAULT_H: f64 = 1.5;

/// Breakpoint generator with configurable unit bias
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pretty {
    h: f64,
    h5: f64,
}

impl Default for Pretty {
    fn default() -> Self {
        Self::new(DEFAULT_H)
    }
}

impl Pretty {
    /// Create a generator with bias `h` and the matching default `h5 = 0.5 + 1.5h`
    pub fn new(h: f64) -> Self {
        Self {
            h,
            h5: 0.5 + 1.5 * h,
        }
    }

    /// Override the multiplier favoring factor 5 over 2
    pub fn with_h5(mut self, h5: f64) -> Self {
        self.h5 = h5;
        self
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn h5(&self) -> f64 {
        self.h5
    }

    /// Round step size for a raw cell width `x > 0`
    ///
    /// With `x = f · 10^e`, `1 <= f < 10`, the multiplier is the first of
    /// 1, 2, 5 whose threshold lies strictly above `f`, and 10 otherwise;
    /// a fraction equal to a threshold takes the larger multiplier.
    pub fn nice_step(&self, x: f64) -> f64 {
        let (h, h5) = (self.h, self.h5);
        let exponent = x.log10().floor();
        let unit = 10f64.powf(exponent);
        let fraction = x / unit;

        let multiplier = if fraction < (2.0 + h) / (1.0 + h) {
            1.0
        } else if fraction < (5.0 + 2.0 * h5) / (1.0 + h5) {
            2.0
        } else if fraction < (10.0 + 5.0 * h) / (1.0 + h) {
            5.0
        } else {
            10.0
        };
        multiplier * unit
    }

    /// Round breakpoints covering `[low, high]` with about `n` cells
    ///
    /// The first breakpoint is `floor(low / d) · d`, the last is
    /// `ceil(high / d) · d`, where `d` is the nice step of `(high − low) / n`.
    pub fn breaks(&self, low: f64, high: f64, n: usize) -> Result<Vec<f64>> {
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::non_finite("breakpoint range"));
        }
        if low >= high {
            return Err(Error::InvalidParameter(format!(
                "breakpoint range [{low}, {high}] must have low < high"
            )));
        }
        if n == 0 {
            return Err(Error::InvalidParameter(
                "number of breakpoint cells must be positive".to_string(),
            ));
        }

        let step = self.nice_step((high - low) / n as f64);
        let first = (low / step).floor() * step;
        let last = (high / step).ceil() * step;
        let breaks = utils::arange(first, last + 0.5 * step, step);
        tracing::trace!(step, cells = breaks.len().saturating_sub(1), "pretty breakpoints");
        Ok(breaks)
    }
}

/// Round breakpoints covering `[low, high]` with the default bias
///
/// ```rust
/// use pareto_histogram::pretty;
///
/// let breaks = pretty(0.0, 10.0, 5).unwrap();
/// assert_eq!(breaks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
pub fn pretty(low: f64, high: f64, n: usize) -> Result<Vec<f64>> {
    Pretty::default().breaks(low, high, n)
}

/// Round step size with the default bias
pub fn nice_step(x: f64) -> f64 {
    Pretty::default().nice_step(x)
}

/// Centers of consecutive breakpoints
pub fn midpoints(breaks: &[f64]) -> Vec<f64> {
    breaks.windows(2).map(|w| 0.5 * (w[1] + w[0])).collect()
}
