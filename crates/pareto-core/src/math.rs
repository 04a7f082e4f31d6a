//! Mathematical utilities shared by the estimators
//!
//! Normal-distribution functions used by the bimodality classifier: the
//! probability axis of the empirical quantile function and the calibration
//! of curvature run lengths.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        use statrs::function::erf::{erfc, erfc_inv};
        use std::f64::consts::SQRT_2;

        /// Cumulative distribution function of the standard normal distribution
        pub fn cdf(x: f64) -> f64 {
            cdf_with(x, 0.0, 1.0)
        }

        /// Cumulative distribution function of `N(mean, sd²)`
        ///
        /// `sd` must be positive; the callers in this workspace only pass
        /// fixed calibration constants.
        pub fn cdf_with(x: f64, mean: f64, sd: f64) -> f64 {
            0.5 * erfc(-(x - mean) / (sd * SQRT_2))
        }

        /// Inverse cumulative distribution function (quantile function)
        /// of the standard normal distribution
        pub fn ppf(p: f64) -> f64 {
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            -SQRT_2 * erfc_inv(2.0 * p)
        }

        /// Alias for ppf (percent point function) that matches common naming
        #[inline]
        pub fn quantile(p: f64) -> f64 {
            ppf(p)
        }

    }
}
