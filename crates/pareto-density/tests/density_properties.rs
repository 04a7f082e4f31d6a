use pareto_core::{Column, Error, PrecisionWarning, Table};
use pareto_density::{DensityEstimatorBuilder, ParetoDensityEstimator, ParetoRadius};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn density_is_normalized(data in prop::collection::vec(-1.0e3f64..1.0e3, 10..150)) {
        let mut distinct = data.clone();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        prop_assume!(distinct.len() >= 10);

        let est = ParetoDensityEstimator::new()
            .estimate(&data, &mut StdRng::seed_from_u64(0))
            .unwrap();

        prop_assert_eq!(est.kernels.len(), est.density.len());
        prop_assert!(est.kernels.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(est.density.iter().all(|&d| d >= 0.0));
        if !est.diagnostics.contains_kind(&PrecisionWarning::ZeroArea { area: 0.0 }) {
            prop_assert!((est.area() - 1.0).abs() < 1e-6);
        }
    }
}

#[test]
fn single_value_is_a_dirac_spike() {
    let est = ParetoDensityEstimator::new()
        .estimate(&[5.0, 5.0, 5.0], &mut StdRng::seed_from_u64(0))
        .unwrap();

    assert!(est.is_dirac());
    assert_eq!(est.radius, 0.0);
    let spikes: Vec<usize> = (0..est.len()).filter(|&i| est.density[i] != 0.0).collect();
    assert_eq!(spikes.len(), 1);
    let at = spikes[0];
    assert_eq!(est.density[at], 1.0);

    let nearest = est
        .kernels
        .iter()
        .enumerate()
        .min_by(|a, b| (a.1 - 5.0).abs().total_cmp(&(b.1 - 5.0).abs()))
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(at, nearest);
    assert!(est
        .diagnostics
        .contains_kind(&PrecisionWarning::FewSamples { actual: 0, recommended: 0 }));
}

#[test]
fn two_values_give_two_disjoint_spikes() {
    let est = ParetoDensityEstimator::new()
        .estimate(&[0.0, 0.0, 1.0, 1.0], &mut StdRng::seed_from_u64(0))
        .unwrap();

    assert_eq!(est.radius, 0.0);
    assert!(est.kernels.windows(2).all(|w| w[0] < w[1]));

    let spikes: Vec<f64> = est
        .points()
        .filter(|&(_, d)| d != 0.0)
        .map(|(k, d)| {
            assert_eq!(d, 1.0);
            k
        })
        .collect();
    assert_eq!(spikes, vec![0.0, 1.0]);

    // Lower grid ends well before the upper one starts
    let gap = est
        .kernels
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(0.0, f64::max);
    assert!(gap > 0.7);
}

#[test]
fn normal_density_peaks_near_center() {
    let data = normal_sample(3_000, 11);
    let est = ParetoDensityEstimator::new()
        .estimate(&data, &mut StdRng::seed_from_u64(3))
        .unwrap();

    let (peak, _) = est
        .points()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert!(peak.abs() < 0.75, "peak at {peak}");
    // Standard normal density at 0 is 0.399
    assert!((est.max_density() - 0.399).abs() < 0.08);
    assert!((est.area() - 1.0).abs() < 1e-9);
}

#[test]
fn seeded_subsampling_is_bitwise_reproducible() {
    let data = normal_sample(12_000, 5);
    let estimator = ParetoDensityEstimator::new();

    let a = estimator.estimate(&data, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = estimator.estimate(&data, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(a.radius.to_bits(), b.radius.to_bits());
    assert_eq!(a.kernels, b.kernels);
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a.density), bits(&b.density));
}

#[test]
fn many_rows_of_one_cell_use_max_samples() {
    let data = normal_sample(12_000, 8);
    let radius = ParetoRadius::default()
        .estimate(&data, &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(radius.rows_used, 10_000);
    assert!(radius.radius < radius.uncorrected);
}

#[test]
fn table_columns_use_independent_streams() {
    let table = Table::new()
        .with_column("a", normal_sample(400, 1))
        .with_column("label", Column::from(vec!["x".to_string(); 400]))
        .with_column("b", normal_sample(400, 2));

    let estimator = DensityEstimatorBuilder::new().build();
    let results = estimator.estimate_table(&table, 7);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "a");
    assert_eq!(results[1].name, "b");

    // Column "b" sits at index 2 and draws from stream 2
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    rng.set_stream(2);
    let direct = estimator
        .estimate(table.sample("b").unwrap().values(), &mut rng)
        .unwrap();
    assert_eq!(results[1].estimate, Ok(direct));
}

#[test]
fn failing_column_keeps_the_others() {
    let table = Table::new()
        .with_column("a", vec![1.0, 2.0, 3.0, 4.0])
        .with_column("b", vec![f64::NAN]);

    let results = ParetoDensityEstimator::default().estimate_table(&table, 3);
    assert_eq!(results.len(), 2);
    let a = results[0].ok().expect("column a is estimable");
    assert!((a.area() - 1.0).abs() < 1e-9);
    assert_eq!(results[1].name, "b");
    assert!(matches!(
        results[1].estimate,
        Err(Error::InsufficientData { .. })
    ));
}
