//! Core traits for shape classification

use crate::types::BimodalityResult;
use pareto_core::{Column, Result, Sample};

/// Trait for classifiers that score the bimodality of a sample
pub trait ShapeClassifier {
    /// Classify a sample; non-finite values are ignored
    fn classify(&self, sample: &[f64]) -> Result<BimodalityResult>;

    /// Classify a table column, rejecting text columns
    fn classify_column(&self, column: &Column) -> Result<BimodalityResult> {
        let sample = Sample::try_from(column)?;
        self.classify(sample.values())
    }
}
