//! Bimodality classification from quantile-function curvature
//!
//! This crate decides whether a sample looks unimodal or bimodal without
//! estimating a density. The empirical quantile function is compared
//! against normal quantiles, differentiated twice and scanned for long
//! convex and concave stretches:
//!
//! 1. Quantiles at percentiles 1..99 (Hazen plotting position)
//! 2. Finite-difference derivatives, each smoothed by a causal boxcar
//! 3. Longest runs above `+1.5` (convex) and below `−1.5` (concave)
//! 4. Score = Φ((min(convex, concave) − 7) / 3)
//!
//! [`convex_concave`] exposes step 2-3 for arbitrary sampled functions.
//!
//! # Example
//!
//! ```rust
//! use pareto_modality::{bimodal, ShapeClassifier, BimodalityClassifierBuilder};
//!
//! // Two well separated groups
//! let mut data: Vec<f64> = (0..200).map(|i| -3.0 + (i as f64 / 200.0)).collect();
//! data.extend((0..200).map(|i| 3.0 + (i as f64 / 200.0)));
//!
//! let result = bimodal(&data).unwrap();
//! println!("{result}");
//! assert!(result.score > 0.5);
//!
//! let strict = BimodalityClassifierBuilder::new().threshold(3.0).build();
//! let _ = strict.classify(&data).unwrap();
//! ```

pub mod builder;
pub mod classifier;
pub mod curvature;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_data;

pub use builder::{classifier_with_params, BimodalityClassifierBuilder};
pub use classifier::{bimodal, BimodalityClassifier, DEFAULT_LOCATION, DEFAULT_SCALE};
pub use curvature::{
    convex_concave, CurvatureAnalyzer, DEFAULT_FIRST_WINDOW, DEFAULT_SECOND_WINDOW,
    DEFAULT_THRESHOLD,
};
pub use traits::ShapeClassifier;
pub use types::{BimodalityResult, ColumnBimodality, CurvatureProfile};
