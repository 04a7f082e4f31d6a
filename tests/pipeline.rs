//! End-to-end: normalize, estimate and screen a table of columns

use anyhow::Result;
use approx::assert_relative_eq;
use pareto_stats::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mixture(rng: &mut ChaCha8Rng) -> Vec<f64> {
    let left = Normal::new(-3.0, 1.0).unwrap();
    let right = Normal::new(3.0, 1.0).unwrap();
    (0..2000)
        .map(|i| {
            if i % 2 == 0 {
                left.sample(rng)
            } else {
                right.sample(rng)
            }
        })
        .collect()
}

#[test]
fn table_pipeline() -> Result<()> {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let normal = Normal::new(0.0, 1.0)?;
    let unimodal: Vec<f64> = (0..2000).map(|_| normal.sample(&mut rng)).collect();
    let bimodal_data = mixture(&mut rng);

    let table = Table::new()
        .with_column("unimodal", unimodal)
        .with_column("group", Column::from(vec!["g".to_string(); 2000]))
        .with_column("bimodal", bimodal_data);

    let normalized = RobustNormalizer::default().normalize_table(&table);
    assert_eq!(normalized.table.names(), vec!["unimodal", "bimodal"]);

    let densities = ParetoDensityEstimator::default().estimate_table(&normalized.table, 7);
    assert_eq!(densities.len(), 2);
    for column in densities {
        let estimate = column.estimate?;
        assert_relative_eq!(estimate.area(), 1.0, epsilon = 1e-6);
        assert!(estimate.radius > 0.0);
    }

    let shapes = BimodalityClassifier::default().classify_table(&table);
    let score = |name: &str| {
        shapes
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.score())
            .unwrap()
    };
    assert!(score("bimodal") > score("unimodal"));
    Ok(())
}

#[test]
fn heavy_tails_after_signed_log() -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let normal = Normal::<f64>::new(0.0, 4.0)?;
    let data: Vec<f64> = (0..1000).map(|_| normal.sample(&mut rng).exp()).collect();

    let logged = signed_log(&data, LogBase::Ten);
    let density = pareto_density(&logged, &mut rng)?;
    assert!(density.diagnostics.is_empty());
    assert_relative_eq!(density.area(), 1.0, epsilon = 1e-6);
    Ok(())
}
