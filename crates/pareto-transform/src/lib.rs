//! Preprocessing transforms for density estimation
//!
//! - [`RobustNormalizer`]: rescale by the 1st/99th percentiles, optionally
//!   centered and capped, with a [`NormalizationState`] to repeat or invert
//! - [`signed_log`]: sign-preserving logarithm for heavy-tailed data
//!
//! # Example
//!
//! ```rust
//! use pareto_transform::{robust_normalize, signed_log, LogBase, NormalizeOptions};
//!
//! let data: Vec<f64> = (0..=100).map(f64::from).collect();
//! let normalized = robust_normalize(&data, NormalizeOptions::default());
//! assert_eq!(normalized.state.min_x, 1.0);
//! assert_eq!(normalized.state.max_x, 99.0);
//!
//! let restored = normalized.state.invert(&normalized.values);
//! assert!((restored[42] - 42.0).abs() < 1e-12);
//!
//! let logged = signed_log(&[-999.0, 0.0, 99.0], LogBase::Ten);
//! assert!((logged[0] + 3.0).abs() < 1e-12);
//! ```

pub mod normalize;
pub mod signed_log;

pub use normalize::{
    robust_normalize, NormalizationState, NormalizeOptions, Normalized, RobustNormalizer,
    TableNormalization, HIGH_QUANTILE, LOW_QUANTILE,
};
pub use signed_log::{
    sign, signed_log, signed_log_column, signed_log_named, signed_log_table, LogBase,
};
