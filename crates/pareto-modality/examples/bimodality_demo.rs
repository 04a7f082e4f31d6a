//! Bimodality scores of a few reference distributions

use anyhow::Result;
use pareto_modality::test_data::{mixture_normal, TestDistributions};
use pareto_modality::{bimodal, convex_concave};

fn main() -> Result<()> {
    let cases = [
        ("normal", TestDistributions::unimodal_normal()),
        ("skewed", TestDistributions::skewed()),
        ("uniform", TestDistributions::uniform()),
        ("bimodal", TestDistributions::bimodal_symmetric()),
        ("asymmetric", TestDistributions::bimodal_asymmetric()),
        (
            "trimodal",
            mixture_normal(&[(-4.0, 0.6, 400), (0.0, 0.6, 400), (4.0, 0.6, 400)], 42),
        ),
    ];

    println!("{:12} {:>8} {:>8} {:>8}", "data", "score", "convex", "concave");
    for (name, data) in &cases {
        let result = bimodal(data)?;
        println!(
            "{:12} {:8.3} {:8.2} {:8.2}",
            name, result.score, result.pro_convex, result.pro_concave
        );
    }

    // Curvature of an arbitrary function: a cubic turns from concave to convex
    let x: Vec<f64> = (0..200).map(|i| -2.0 + i as f64 * 0.02).collect();
    let fx: Vec<f64> = x.iter().map(|v| v * v * v).collect();
    let profile = convex_concave(&x, &fx)?;
    println!(
        "\ncubic: convex {:.1}%, concave {:.1}%, curvature {:.3}",
        profile.pro_convex, profile.pro_concave, profile.curvature
    );
    Ok(())
}
