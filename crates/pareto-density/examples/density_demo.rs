//! Pareto density of a two-component mixture, with the radius diagnostics

use anyhow::Result;
use pareto_density::{DensityEstimatorBuilder, ParetoRadius};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let left = Normal::new(-2.0, 0.6)?;
    let right = Normal::new(2.5, 1.0)?;
    let data: Vec<f64> = (0..3_000)
        .map(|i| {
            if i % 3 == 0 {
                left.sample(&mut rng)
            } else {
                right.sample(&mut rng)
            }
        })
        .collect();

    let radius = ParetoRadius::default();
    let report = radius.distance_percentiles(&data, &mut rng)?;
    println!("=== Distance percentiles ===");
    for p in [1, 10, 18, 25, 50, 75, 100] {
        println!("p{:<3} {:8.4}", p, report.distances[p - 1]);
    }
    println!("radius taken at percentile {}", report.selected);

    let estimator = DensityEstimatorBuilder::new().radius(radius).build();
    let estimate = estimator.estimate(&data, &mut rng)?;
    println!("\n=== Density ===");
    println!("radius  {:.4}", estimate.radius);
    println!("kernels {}", estimate.len());
    println!("area    {:.6}", estimate.area());

    // Coarse text rendering of the curve
    let scaled = estimate.scaled();
    let stride = (estimate.len() / 40).max(1);
    for (i, (k, _)) in estimate.points().enumerate().step_by(stride) {
        let bar = "#".repeat((scaled[i] * 50.0).round() as usize);
        println!("{k:7.2} {bar}");
    }

    for warning in estimate.diagnostics.warnings() {
        println!("warning: {warning}");
    }
    Ok(())
}
