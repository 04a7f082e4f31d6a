//! Pareto density estimation
//!
//! Umbrella crate over the pareto-stats workspace:
//!
//! - [`core`]: errors, diagnostics, samples and quantiles
//! - [`histogram`]: pretty breakpoints and bin count rules
//! - [`density`]: Pareto radius and Pareto density estimation
//! - [`modality`]: bimodality screening from quantile curvature
//! - [`transform`]: robust normalization and signed logarithms
//!
//! # Example
//!
//! ```rust
//! use pareto_stats::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let data: Vec<f64> = (0..500).map(|i| ((i * 37) % 101) as f64).collect();
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//!
//! let density = ParetoDensityEstimator::default().estimate(&data, &mut rng).unwrap();
//! assert!((density.area() - 1.0).abs() < 1e-6);
//!
//! let shape = BimodalityClassifier::default().classify(&data).unwrap();
//! assert!((0.0..=1.0).contains(&shape.score));
//! ```

pub use pareto_core as core;
pub use pareto_density as density;
pub use pareto_histogram as histogram;
pub use pareto_modality as modality;
pub use pareto_transform as transform;

pub mod prelude {
    pub use pareto_core::{Column, Diagnostics, Error, PrecisionWarning, Result, Sample, Table};
    pub use pareto_density::{
        pareto_density, pareto_radius, DensityEstimate, DensityEstimatorBuilder,
        ParetoDensityEstimator, ParetoRadius,
    };
    pub use pareto_histogram::{optimal_bin_count, pretty, BinCountRule, KeatingScottRule};
    pub use pareto_modality::{bimodal, BimodalityClassifier, BimodalityResult, ShapeClassifier};
    pub use pareto_transform::{
        robust_normalize, signed_log, LogBase, NormalizeOptions, RobustNormalizer,
    };
}
