//! Dirac-delta approximation for samples with one or two distinct values

/// Grid points on each side of the spike
const HALF_POINTS: usize = 1000;

/// Relative half-width of the local grid
const RELATIVE_HALF_WIDTH: f64 = 0.1;

/// Local grid around `value` with a unit spike at `value`
///
/// The grid spans `value ± 10%` (`± 0.1` around zero) with spacing
/// `0.0001 · |value|`, so the spike sits exactly on the middle point.
pub fn spike(value: f64) -> (Vec<f64>, Vec<f64>) {
    let half = if value == 0.0 {
        RELATIVE_HALF_WIDTH
    } else {
        RELATIVE_HALF_WIDTH * value.abs()
    };
    let step = half / HALF_POINTS as f64;

    let kernels: Vec<f64> = (0..=2 * HALF_POINTS)
        .map(|i| value + (i as f64 - HALF_POINTS as f64) * step)
        .collect();
    let mut density = vec![0.0; kernels.len()];
    density[HALF_POINTS] = 1.0;
    (kernels, density)
}

/// Spikes for ascending distinct `values` (one or two of them)
///
/// With two values closer than their grids are wide, each grid is cut at
/// the midpoint between them so the kernels stay ascending. The outer half
/// of each grid, spike included, is always kept, even when the midpoint
/// rounds onto one of the values.
pub fn spikes(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    match values {
        [a, b] => {
            let mid = 0.5 * (a + b);
            let (lk, ld) = spike(*a);
            let (uk, ud) = spike(*b);

            let mut kernels = Vec::with_capacity(lk.len() + uk.len());
            let mut density = Vec::with_capacity(ld.len() + ud.len());
            for (i, (k, d)) in lk.into_iter().zip(ld).enumerate() {
                if i <= HALF_POINTS || k < mid {
                    kernels.push(k);
                    density.push(d);
                }
            }
            let last = kernels.last().copied().unwrap_or(*a);
            for (i, (k, d)) in uk.into_iter().zip(ud).enumerate() {
                if i >= HALF_POINTS || (k >= mid && k > last) {
                    kernels.push(k);
                    density.push(d);
                }
            }
            (kernels, density)
        }
        [v, ..] => spike(*v),
        [] => (Vec::new(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_spike() {
        let (kernels, density) = spike(5.0);
        assert_eq!(kernels.len(), 2001);
        assert_eq!(kernels[1000], 5.0);
        assert_relative_eq!(kernels[0], 4.5, epsilon = 1e-12);
        assert_relative_eq!(kernels[2000], 5.5, epsilon = 1e-12);
        assert_relative_eq!(kernels[1] - kernels[0], 0.0005, epsilon = 1e-12);
        assert_eq!(density.iter().filter(|&&d| d == 1.0).count(), 1);
        assert_eq!(density.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_zero_and_negative_values() {
        let (kernels, _) = spike(0.0);
        assert_relative_eq!(kernels[0], -0.1, epsilon = 1e-12);
        assert_relative_eq!(kernels[2000], 0.1, epsilon = 1e-12);

        let (kernels, _) = spike(-2.0);
        assert!(kernels.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(kernels[0], -2.2, epsilon = 1e-12);
    }

    #[test]
    fn test_overlapping_spikes_stay_ascending() {
        let (kernels, density) = spikes(&[10.0, 10.5]);
        assert!(kernels.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(kernels.len(), density.len());
        assert_eq!(density.iter().filter(|&&d| d == 1.0).count(), 2);
    }

    #[test]
    fn test_adjacent_values_keep_both_spikes() {
        let a = 1.0f64;
        let b = f64::from_bits(a.to_bits() + 1);
        let (kernels, density) = spikes(&[a, b]);

        assert!(kernels.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(kernels.len(), density.len());
        let peaks: Vec<f64> = kernels
            .iter()
            .zip(&density)
            .filter(|(_, &d)| d == 1.0)
            .map(|(&k, _)| k)
            .collect();
        assert_eq!(peaks, vec![a, b]);
    }
}
