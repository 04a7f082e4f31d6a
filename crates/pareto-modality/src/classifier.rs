//! Bimodality classification
//!
//! The empirical quantile function of the sample (percentiles 1 to 99,
//! Hazen plotting position) is plotted against the standard normal
//! quantiles at the same probabilities. A normal sample gives a straight
//! line; two separated clusters give a long convex stretch followed by a
//! long concave one. The shorter of the two longest runs is mapped to a
//! score through a normal CDF with mean 7 and standard deviation 3.

use crate::curvature::CurvatureAnalyzer;
use crate::traits::ShapeClassifier;
use crate::types::{BimodalityResult, ColumnBimodality};
use pareto_core::math::distributions::normal;
use pareto_core::{
    execution, percentiles, Error, PlottingPosition, QuantileEstimator, Result, Sample, Table,
};
use tracing::{debug, instrument, warn};

/// Default location of the score calibration
pub const DEFAULT_LOCATION: f64 = 7.0;

/// Default scale of the score calibration
pub const DEFAULT_SCALE: f64 = 3.0;

/// Classifier scoring how bimodal a sample looks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BimodalityClassifier {
    pub(crate) analyzer: CurvatureAnalyzer,
    pub(crate) location: f64,
    pub(crate) scale: f64,
}

impl Default for BimodalityClassifier {
    fn default() -> Self {
        Self {
            analyzer: CurvatureAnalyzer::default(),
            location: DEFAULT_LOCATION,
            scale: DEFAULT_SCALE,
        }
    }
}

impl BimodalityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyzer(&self) -> &CurvatureAnalyzer {
        &self.analyzer
    }

    /// Calibration `(location, scale)` of the score
    pub fn calibration(&self) -> (f64, f64) {
        (self.location, self.scale)
    }

    /// Score for a shorter-longest-run percentage
    pub fn score(&self, min_run: f64) -> f64 {
        normal::cdf_with(min_run, self.location, self.scale)
    }

    /// Classify every numeric column of a table; text columns are skipped
    ///
    /// A column without finite values carries its own error.
    #[instrument(skip_all, fields(columns = table.len()))]
    pub fn classify_table(&self, table: &Table) -> Vec<ColumnBimodality> {
        let jobs: Vec<(&str, &[f64])> = table.numeric_columns().collect();
        execution::execute_batch(jobs.len(), |i| {
            let (name, values) = jobs[i];
            let result = self.classify(values);
            if let Err(err) = &result {
                warn!(column = name, %err, "bimodality failed for column");
            }
            ColumnBimodality {
                name: name.to_string(),
                result,
            }
        })
    }
}

impl ShapeClassifier for BimodalityClassifier {
    #[instrument(skip_all, fields(n = sample.len()))]
    fn classify(&self, sample: &[f64]) -> Result<BimodalityResult> {
        let sample = Sample::from_values(sample.iter().copied());
        if sample.is_empty() {
            debug!("no finite values left for bimodality");
            return Err(Error::empty_input("bimodality"));
        }

        let sorted = sample.sorted();
        let fx = PlottingPosition::HAZEN.quantiles_sorted(&sorted, &percentiles(1, 99))?;
        let x: Vec<f64> = (0..99)
            .map(|i| normal::ppf(0.01 + i as f64 * 0.01))
            .collect();

        let profile = self.analyzer.analyze(&x, &fx)?;
        let score = self.score(profile.min_run());
        debug!(
            score,
            pro_convex = profile.pro_convex,
            pro_concave = profile.pro_concave,
            "bimodality"
        );

        Ok(BimodalityResult {
            score,
            pro_convex: profile.pro_convex,
            pro_concave: profile.pro_concave,
            profile,
        })
    }
}

/// Bimodality of a sample with the default classifier
pub fn bimodal(sample: &[f64]) -> Result<BimodalityResult> {
    BimodalityClassifier::default().classify(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pareto_core::Column;

    #[test]
    fn test_identical_values_have_no_runs() {
        let result = bimodal(&[4.2; 40]).unwrap();
        assert_eq!(result.pro_convex, 0.0);
        assert_eq!(result.pro_concave, 0.0);
        // Φ((0 − 7) / 3)
        assert_relative_eq!(result.score, 0.009815328628645, epsilon = 1e-9);
        assert_eq!(result.profile.len(), 99);
    }

    #[test]
    fn test_single_value() {
        let result = bimodal(&[1.0]).unwrap();
        assert_eq!(result.pro_convex, 0.0);
    }

    #[test]
    fn test_empty_and_non_finite() {
        assert!(matches!(
            bimodal(&[]).unwrap_err(),
            Error::InsufficientData { .. }
        ));
        assert!(bimodal(&[f64::NAN, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_text_column_is_type_mismatch() {
        let column = Column::from(vec!["1".to_string(), "x".to_string()]);
        let err = BimodalityClassifier::new().classify_column(&column).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_score_calibration() {
        let classifier = BimodalityClassifier::default();
        assert_relative_eq!(classifier.score(7.0), 0.5, epsilon = 1e-12);
        assert!(classifier.score(20.0) > 0.999);
        assert!(classifier.score(0.0) < 0.01);
    }

    #[test]
    fn test_two_point_clusters() {
        let mut data = vec![-1.0; 50];
        data.extend(vec![1.0; 50]);
        let result = bimodal(&data).unwrap();
        assert!(result.score >= 0.0 && result.score <= 1.0);
        assert!(result.pro_convex <= 100.0 && result.pro_concave <= 100.0);
    }
}
