//! Kernel grid construction
//!
//! This crate decides where density kernels go:
//!
//! - [`pretty`]: R-style "round" breakpoints covering a range
//! - [`optimal_bin_count`]: Keating/Scott bin count on a robust spread
//! - [`BinCountRule`]: pluggable bin count selection, with
//!   [`KeatingScottRule`], [`ScottsRule`] and [`FreedmanDiaconisRule`]
//!
//! # Example
//!
//! ```rust
//! use pareto_histogram::{midpoints, optimal_bin_count, pretty};
//!
//! let data: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
//! let bins = optimal_bin_count(&data);
//! assert!(bins >= 10);
//!
//! let breaks = pretty(0.0, 9.9, bins).unwrap();
//! let kernels = midpoints(&breaks);
//! assert_eq!(kernels.len(), breaks.len() - 1);
//! ```

pub mod pretty;
pub mod rules;
pub mod traits;

pub use pretty::{midpoints, nice_step, pretty, Pretty, DEFAULT_H};
pub use rules::{optimal_bin_count, FreedmanDiaconisRule, KeatingScottRule, ScottsRule};
pub use traits::BinCountRule;
