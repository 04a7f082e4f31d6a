use pareto_core::{PlottingPosition, QuantileEstimator};
use proptest::prelude::*;

/// Hyndman-Fan type 7 straight from its definition
fn type7(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let j = h.floor() as usize;
    if j + 1 >= sorted.len() {
        return sorted[sorted.len() - 1];
    }
    sorted[j] + (h - j as f64) * (sorted[j + 1] - sorted[j])
}

fn sorted_vec(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, min_len..120).prop_map(|mut v| {
        v.sort_by(f64::total_cmp);
        v
    })
}

proptest! {
    #[test]
    fn linear_matches_type7(data in sorted_vec(2), p in 0.0f64..=1.0) {
        let got = PlottingPosition::LINEAR.quantile_sorted(&data, p).unwrap();
        let want = type7(&data, p);
        prop_assert!((got - want).abs() <= 1e-9 * (1.0 + want.abs()), "{} vs {}", got, want);
    }

    #[test]
    fn quantiles_are_monotone_and_bounded(
        data in sorted_vec(1),
        alpha in 0.0f64..=1.0,
        beta in 0.0f64..=1.0,
    ) {
        let q = PlottingPosition::new(alpha, beta);
        let ps: Vec<f64> = (0..=50).map(|i| f64::from(i) / 50.0).collect();
        let values = q.quantiles_sorted(&data, &ps).unwrap();
        let (lo, hi) = (data[0], data[data.len() - 1]);
        let tol = 1e-9 * (1.0 + lo.abs().max(hi.abs()));
        for w in values.windows(2) {
            prop_assert!(w[0] <= w[1] + tol);
        }
        prop_assert!(values.iter().all(|&v| v >= lo - tol && v <= hi + tol));
    }

    #[test]
    fn unsorted_input_matches_sorted(mut data in prop::collection::vec(-1.0e3f64..1.0e3, 1..60)) {
        let q = PlottingPosition::HAZEN;
        let unsorted = q.quantile(&data, 0.3).unwrap();
        data.sort_by(f64::total_cmp);
        prop_assert_eq!(unsorted, q.quantile_sorted(&data, 0.3).unwrap());
    }
}
