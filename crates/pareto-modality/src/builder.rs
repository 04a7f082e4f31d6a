use crate::classifier::{BimodalityClassifier, DEFAULT_LOCATION, DEFAULT_SCALE};
use crate::curvature::{
    CurvatureAnalyzer, DEFAULT_FIRST_WINDOW, DEFAULT_SECOND_WINDOW, DEFAULT_THRESHOLD,
};

/// Builder for configuring and creating bimodality classifiers.
///
/// The defaults reproduce the published calibration; changing them gives
/// scores that are no longer comparable with it.
#[derive(Debug, Clone)]
pub struct BimodalityClassifierBuilder {
    threshold: f64,
    first_window: usize,
    second_window: usize,
    location: f64,
    scale: f64,
}

impl Default for BimodalityClassifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BimodalityClassifierBuilder {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            first_window: DEFAULT_FIRST_WINDOW,
            second_window: DEFAULT_SECOND_WINDOW,
            location: DEFAULT_LOCATION,
            scale: DEFAULT_SCALE,
        }
    }

    /// Sets the curvature threshold (>= 0).
    ///
    /// Second derivatives above `+threshold` count as convex, below
    /// `−threshold` as concave.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.max(0.0);
        self
    }

    /// Sets the boxcar lengths for the first and second derivative (>= 1).
    pub fn windows(mut self, first: usize, second: usize) -> Self {
        self.first_window = first.max(1);
        self.second_window = second.max(1);
        self
    }

    /// Sets the normal CDF mapping run percentages to scores.
    ///
    /// The scale is clamped to a small positive value.
    pub fn calibration(mut self, location: f64, scale: f64) -> Self {
        self.location = location;
        self.scale = scale.max(1e-6);
        self
    }

    pub fn build(self) -> BimodalityClassifier {
        BimodalityClassifier {
            analyzer: CurvatureAnalyzer::new(self.threshold, self.first_window, self.second_window),
            location: self.location,
            scale: self.scale,
        }
    }
}

/// Convenience function for creating a classifier with custom threshold and calibration.
pub fn classifier_with_params(threshold: f64, location: f64, scale: f64) -> BimodalityClassifier {
    BimodalityClassifierBuilder::new()
        .threshold(threshold)
        .calibration(location, scale)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::TestDistributions;
    use crate::traits::ShapeClassifier;

    #[test]
    fn test_builder_defaults() {
        assert_eq!(BimodalityClassifierBuilder::new().build(), BimodalityClassifier::default());
    }

    #[test]
    fn test_parameter_clamping() {
        let classifier = BimodalityClassifierBuilder::new()
            .threshold(-2.0)
            .windows(0, 0)
            .calibration(7.0, -1.0)
            .build();
        assert_eq!(classifier.analyzer().threshold(), 0.0);
        assert_eq!(classifier.analyzer().windows(), (1, 1));
        assert!(classifier.calibration().1 > 0.0);

        let result = classifier.classify(&TestDistributions::unimodal_normal());
        assert!(result.is_ok());
    }

    #[test]
    fn test_stricter_threshold_lowers_runs() {
        let data = TestDistributions::bimodal_symmetric();
        let default = BimodalityClassifier::default().classify(&data).unwrap();
        let strict = classifier_with_params(1e6, 7.0, 3.0).classify(&data).unwrap();
        assert_eq!(strict.pro_convex, 0.0);
        assert_eq!(strict.pro_concave, 0.0);
        assert!(default.score > strict.score);
    }
}
