use pareto_histogram::{optimal_bin_count, pretty};
use proptest::prelude::*;

fn is_nice(step: f64) -> bool {
    let unit = 10f64.powf(step.log10().floor());
    let fraction = step / unit;
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .any(|m| (fraction - m).abs() < 1e-6)
}

proptest! {
    #[test]
    fn breaks_cover_range_with_round_steps(
        low in -1.0e3f64..1.0e3,
        width in 1.0e-2f64..1.0e4,
        n in 1usize..200,
    ) {
        let high = low + width;
        let breaks = pretty(low, high, n).unwrap();
        prop_assert!(breaks.len() >= 2);

        let step = breaks[1] - breaks[0];
        prop_assert!(step > 0.0);
        prop_assert!(is_nice(step), "step {} is not round", step);

        for w in breaks.windows(2) {
            prop_assert!(w[1] > w[0]);
            prop_assert!(((w[1] - w[0]) - step).abs() <= 1e-6 * step.max(1.0));
        }

        let tol = 1e-9 * (step + low.abs() + high.abs());
        prop_assert!(breaks[0] <= low + tol);
        prop_assert!(*breaks.last().unwrap() >= high - tol);
    }

    #[test]
    fn bin_count_has_floor(data in prop::collection::vec(-1.0e6f64..1.0e6, 1..300)) {
        prop_assert!(optimal_bin_count(&data) >= 10);
    }
}

#[test]
fn bin_count_zero_only_when_empty() {
    assert_eq!(optimal_bin_count(&[]), 0);
    assert_eq!(optimal_bin_count(&[f64::NAN]), 0);
    assert!(optimal_bin_count(&[0.0]) > 0);
}
