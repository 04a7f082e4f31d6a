//! Test data generators for bimodality testing
//!
//! Seeded distributions shared by the unit tests, integration tests and
//! examples so results are reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};

/// Standard test distributions for bimodality classification
pub struct TestDistributions;

impl TestDistributions {
    /// Returns 1000 samples from N(0, 1)
    pub fn unimodal_normal() -> Vec<f64> {
        Self::normal(0.0, 1.0, 1000, 42)
    }

    /// Returns 1000 samples: 500 from N(-3, 1) and 500 from N(3, 1)
    pub fn bimodal_symmetric() -> Vec<f64> {
        mixture_normal(&[(-3.0, 1.0, 500), (3.0, 1.0, 500)], 42)
    }

    /// Returns 1000 samples: 700 from N(-2, 1) and 300 from N(3, 0.5)
    pub fn bimodal_asymmetric() -> Vec<f64> {
        mixture_normal(&[(-2.0, 1.0, 700), (3.0, 0.5, 300)], 42)
    }

    /// Returns 2000 samples from U(-5, 5)
    pub fn uniform() -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(42);
        let uniform = Uniform::new(-5.0, 5.0);
        (0..2000).map(|_| uniform.sample(&mut rng)).collect()
    }

    /// Returns 1000 samples from a log-normal distribution (right skewed)
    pub fn skewed() -> Vec<f64> {
        Self::normal(0.0, 0.75, 1000, 42)
            .into_iter()
            .map(f64::exp)
            .collect()
    }

    /// `n` samples from N(mean, sd) with the given seed
    pub fn normal(mean: f64, sd: f64, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let normal = Normal::new(mean, sd).unwrap();
        (0..n).map(|_| normal.sample(&mut rng)).collect()
    }
}

/// Concatenated normal components `(mean, sd, count)` from one seeded stream
pub fn mixture_normal(components: &[(f64, f64, usize)], seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(components.iter().map(|c| c.2).sum());
    for &(mean, sd, count) in components {
        let normal = Normal::new(mean, sd).unwrap();
        data.extend((0..count).map(|_| normal.sample(&mut rng)));
    }
    data
}
