//! Core types for Pareto density estimation
//!
//! This crate provides the foundation shared by the estimators of the
//! pareto-stats workspace:
//!
//! - [`Error`]/[`Result`]: one error taxonomy for every crate
//! - [`Diagnostics`]/[`PrecisionWarning`]: non-fatal advisories returned
//!   next to results and mirrored to `tracing`
//! - [`Sample`], [`Column`], [`Table`]: explicit containers with NaN/Inf
//!   cleaning as a construction step
//! - [`PlottingPosition`]: (α, β) sample quantiles over any
//!   [`OrderStatistics`] source
//! - [`math`] and [`utils`]: normal distribution, trapezoid, filters
//! - [`execution`]: per-column batches, parallel with the `parallel` feature
//!
//! # Example
//!
//! ```rust
//! use pareto_core::{PlottingPosition, QuantileEstimator, Sample};
//!
//! let sample = Sample::from(vec![4.0, f64::NAN, 1.0, 3.0, 2.0]);
//! assert_eq!(sample.len(), 4);
//!
//! let median = PlottingPosition::LINEAR
//!     .quantile(sample.values(), 0.5)
//!     .unwrap();
//! assert_eq!(median, 2.5);
//! ```

pub mod diagnostics;
pub mod error;
pub mod execution;
pub mod math;
pub mod quantile;
pub mod sample;
pub mod utils;

pub use diagnostics::{Diagnostics, PrecisionWarning};
pub use error::{Error, Result};
pub use quantile::{percentiles, OrderStatistics, PlottingPosition, QuantileEstimator};
pub use sample::{Column, Sample, Table};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
