//! Non-fatal precision diagnostics
//!
//! Conditions that reduce the reliability of a result without making it
//! invalid. They are collected next to the result and mirrored to the
//! `tracing` warn channel, but never abort a computation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An advisory condition raised during estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrecisionWarning {
    /// Fewer points than needed for a statistically meaningful radius
    FewSamples { actual: usize, recommended: usize },
    /// The kernel grid would have exceeded the configured maximum and was capped
    TooManyKernels { requested: usize, capped: usize },
    /// Very few distinct values in the sample
    FewUniqueValues { unique: usize },
    /// Non-finite values (NaN, ±Inf) were dropped before processing
    NonFiniteRemoved { removed: usize },
    /// The raw density had (near) zero area and was zeroed out
    ZeroArea { area: f64 },
}

impl fmt::Display for PrecisionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FewSamples {
                actual,
                recommended,
            } => write!(
                f,
                "less than {recommended} data points given ({actual}), Pareto radius may be unreliable"
            ),
            Self::TooManyKernels { requested, capped } => write!(
                f,
                "too many kernels estimated ({requested}), capped at {capped}; try to transform or sample the data"
            ),
            Self::FewUniqueValues { unique } => {
                write!(f, "only {unique} unique values in data")
            }
            Self::NonFiniteRemoved { removed } => {
                write!(f, "{removed} NaN or infinite values removed")
            }
            Self::ZeroArea { area } => {
                write!(f, "density area {area:e} too small to normalize, density set to zero")
            }
        }
    }
}

/// Ordered collection of warnings raised by one operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    warnings: Vec<PrecisionWarning>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and emit it on the `tracing` warn channel
    pub fn warn(&mut self, warning: PrecisionWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Append all warnings of another collection (already emitted)
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }

    /// Append the warnings of another collection whose kind is not yet
    /// recorded here (already emitted)
    pub fn merge(&mut self, other: Diagnostics) {
        for warning in other.warnings {
            if !self.contains_kind(&warning) {
                self.warnings.push(warning);
            }
        }
    }

    pub fn warnings(&self) -> &[PrecisionWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Check whether a warning of the same kind was recorded
    pub fn contains_kind(&self, probe: &PrecisionWarning) -> bool {
        self.warnings
            .iter()
            .any(|w| std::mem::discriminant(w) == std::mem::discriminant(probe))
    }
}
