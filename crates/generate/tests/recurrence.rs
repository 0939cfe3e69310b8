use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tsforge_generate::{
    GenerateError, draw_noise, generate_ar, generate_arima, generate_arma, generate_ma,
    generate_sarimax,
};

#[test]
fn ar1_recurrence_holds_after_warm_up() {
    let phi = 0.7;
    let eps = draw_noise(500, 1.0, &mut StdRng::seed_from_u64(100)).unwrap();
    let series = generate_ar(500, &[phi], 1.0, &mut StdRng::seed_from_u64(100)).unwrap();

    assert_eq!(series[0], eps[0]);
    for t in 1..500 {
        assert_abs_diff_eq!(series[t], phi * series[t - 1] + eps[t], epsilon = 1e-12);
    }
}

#[test]
fn generators_are_deterministic_under_seed() {
    let a = generate_arma(300, &[0.4, 0.2], &[0.3], 1.0, &mut StdRng::seed_from_u64(5)).unwrap();
    let b = generate_arma(300, &[0.4, 0.2], &[0.3], 1.0, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);

    let c = generate_arma(300, &[0.4, 0.2], &[0.3], 1.0, &mut StdRng::seed_from_u64(6)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn consecutive_calls_draw_fresh_noise() {
    let mut rng = StdRng::seed_from_u64(9);
    let first = generate_ma(50, &[0.5], 1.0, &mut rng).unwrap();
    let second = generate_ma(50, &[0.5], 1.0, &mut rng).unwrap();
    assert_ne!(first, second);
}

#[test]
fn stationary_ar_stays_bounded() {
    let series = generate_ar(5_000, &[0.5, -0.3], 1.0, &mut StdRng::seed_from_u64(7)).unwrap();
    let max_abs = series.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    assert!(max_abs < 10.0, "max |x| = {max_abs}");
}

#[test]
fn arima_with_drift_free_core_wanders() {
    // A random walk spreads much further than its white-noise increments.
    let series = generate_arima(2_000, &[], 1, &[], 1.0, &mut StdRng::seed_from_u64(8)).unwrap();
    let range = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        - series.iter().cloned().fold(f64::INFINITY, f64::min);
    assert!(range > 10.0, "range = {range}");
}

#[test]
fn sarimax_shape_errors() {
    let mut rng = StdRng::seed_from_u64(10);
    for bad in [&[][..], &[1][..], &[1, 0][..], &[1, 0, 1][..]] {
        let err = generate_sarimax(40, &[], 0, &[], bad, 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidArgument { .. }));
    }
}

#[test]
fn invalid_noise_std_everywhere() {
    let mut rng = StdRng::seed_from_u64(11);
    assert!(generate_ar(10, &[0.1], -1.0, &mut rng).is_err());
    assert!(generate_ma(10, &[0.1], f64::INFINITY, &mut rng).is_err());
    assert!(generate_arma(10, &[0.1], &[0.1], -2.0, &mut rng).is_err());
    assert!(generate_arima(10, &[0.1], 1, &[0.1], f64::NAN, &mut rng).is_err());
    assert!(generate_sarimax(10, &[], 0, &[], &[0, 0, 0, 4], -1.0, &mut rng).is_err());
}
