//! Utility functions for working with data slices

use ordered_float::OrderedFloat;
use std::collections::BTreeSet;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use pareto_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation (n − 1 denominator)
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// ```rust
/// use pareto_core::utils::std_dev;
///
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}

/// Number of distinct non-NaN values
pub fn unique_count(data: &[f64]) -> usize {
    data.iter()
        .filter(|x| !x.is_nan())
        .map(|&x| OrderedFloat(x))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Area under `y(x)` by the trapezoidal rule
///
/// Returns 0.0 when fewer than two points are given.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len());
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum()
}

/// First differences `data[i + 1] - data[i]`
pub fn diff(data: &[f64]) -> Vec<f64> {
    data.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Causal boxcar filter of length `window`
///
/// Output `i` is the sum of the last `window` inputs up to `i`, each
/// weighted `1 / window`; inputs before the start count as zero.
pub fn moving_average(data: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return vec![0.0; data.len()];
    }
    let weight = 1.0 / window as f64;
    (0..data.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            data[start..=i].iter().map(|&v| weight * v).sum()
        })
        .collect()
}

/// Evenly spaced values in `[start, stop)` with the given step
///
/// The length is `ceil((stop - start) / step)`, element `i` is
/// `start + i * step`.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let span = (stop - start) / step;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let len = span.ceil() as usize;
    (0..len).map(|i| start + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);
        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_sorted_with_infinity() {
        let data = vec![3.0, f64::INFINITY, 1.0, f64::NEG_INFINITY, 2.0];
        assert_eq!(
            sorted(&data),
            vec![f64::NEG_INFINITY, 1.0, 2.0, 3.0, f64::INFINITY]
        );
    }

    #[test]
    fn test_mean_and_std_dev() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(std_dev(&[42.0]), 0.0);
        assert_eq!(std_dev(&[5.0, 5.0, 5.0]), 0.0);
        assert_relative_eq!(std_dev(&[1.0, 3.0]), std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_unique_count() {
        assert_eq!(unique_count(&[]), 0);
        assert_eq!(unique_count(&[1.0, 1.0, 2.0, f64::NAN, 2.0, 3.0]), 3);
        assert_eq!(unique_count(&[0.0, 0.0]), 1);
    }

    #[test]
    fn test_trapezoid() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0, 0.0];
        assert_relative_eq!(trapezoid(&y, &x), 1.0);
        assert_eq!(trapezoid(&[1.0], &[0.0]), 0.0);
        let x = [0.0, 0.5, 2.0];
        let y = [2.0, 2.0, 2.0];
        assert_relative_eq!(trapezoid(&y, &x), 4.0);
    }

    #[test]
    fn test_diff() {
        assert_eq!(diff(&[1.0, 4.0, 9.0]), vec![3.0, 5.0]);
        assert!(diff(&[1.0]).is_empty());
    }

    #[test]
    fn test_moving_average_is_causal() {
        let data = [3.0, 3.0, 3.0, 3.0];
        let smoothed = moving_average(&data, 3);
        assert_relative_eq!(smoothed[0], 1.0);
        assert_relative_eq!(smoothed[1], 2.0);
        assert_relative_eq!(smoothed[2], 3.0);
        assert_relative_eq!(smoothed[3], 3.0);
    }

    #[test]
    fn test_arange() {
        let values = arange(0.0, 1.05, 0.1);
        assert_eq!(values.len(), 11);
        assert_relative_eq!(values[10], 1.0, epsilon = 1e-12);
        assert!(arange(1.0, 0.0, 0.1).is_empty());
        assert_eq!(arange(0.0, 3.0, 1.0), vec![0.0, 1.0, 2.0]);
    }
}
