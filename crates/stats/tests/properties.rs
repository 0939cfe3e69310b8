use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tsforge_generate::{generate_ar, generate_arima};
use tsforge_stats::{
    Metrics, autocorrelation, cumulative_sum, difference, mean_squared_error, r2_score,
    stationarity_test, undifference,
};

#[test]
fn difference_then_seeded_cumsum_reconstructs() {
    let x = generate_arima(250, &[0.4], 1, &[], 1.0, &mut StdRng::seed_from_u64(1)).unwrap();

    let mut seeded = vec![x[0]];
    seeded.extend(difference(&x, 1));
    let rebuilt = cumulative_sum(&seeded);
    for (a, b) in rebuilt.iter().zip(&x) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }

    let rebuilt = undifference(x[0], &difference(&x, 1));
    for (a, b) in rebuilt.iter().zip(&x) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }
}

#[test]
fn acf_lag_zero_is_one() {
    let x = generate_ar(100, &[0.6], 1.0, &mut StdRng::seed_from_u64(2)).unwrap();
    let acf = autocorrelation(&x, 10);
    assert_eq!(acf.len(), 11);
    assert_abs_diff_eq!(acf[0], 1.0, epsilon = 1e-12);
    assert!(acf.iter().all(|r| r.abs() <= 1.0 + 1e-12));
}

#[test]
fn ar1_acf_decays_geometrically() {
    let x = generate_ar(20_000, &[0.6], 1.0, &mut StdRng::seed_from_u64(3)).unwrap();
    let acf = autocorrelation(&x, 3);
    assert_abs_diff_eq!(acf[1], 0.6, epsilon = 0.03);
    assert_abs_diff_eq!(acf[2], 0.36, epsilon = 0.04);
}

#[test]
fn self_prediction_is_perfect() {
    let x = generate_ar(50, &[0.2], 1.0, &mut StdRng::seed_from_u64(4)).unwrap();
    assert_eq!(mean_squared_error(&x, &x), 0.0);
    assert_eq!(r2_score(&x, &x), 1.0);

    let m = Metrics::compute(&x, &x);
    assert_eq!(m.rmse, 0.0);
    assert_eq!(m.mae, 0.0);
}

#[test]
fn white_noise_is_stationary() {
    let x = generate_ar(500, &[], 1.0, &mut StdRng::seed_from_u64(5)).unwrap();
    let result = stationarity_test(&x).unwrap();
    assert!(result.is_stationary(), "{result:?}");
    assert!(result.p_value < 0.01);
}

#[test]
fn drifting_random_walk_is_not_stationary() {
    let steps = generate_ar(400, &[], 1.0, &mut StdRng::seed_from_u64(6)).unwrap();
    let drift: Vec<f64> = steps.iter().map(|e| e + 0.5).collect();
    let walk = cumulative_sum(&drift);
    let result = stationarity_test(&walk).unwrap();
    assert!(!result.is_stationary(), "{result:?}");

    // one difference removes the unit root
    let result = stationarity_test(&difference(&walk, 1)).unwrap();
    assert!(result.is_stationary(), "{result:?}");
}

#[test]
fn report_serializes_critical_value_levels() {
    let x = generate_ar(120, &[0.5], 1.0, &mut StdRng::seed_from_u64(7)).unwrap();
    let json = serde_json::to_string(&stationarity_test(&x).unwrap()).unwrap();
    assert!(json.contains("\"1%\""));
    assert!(json.contains("\"5%\""));
    assert!(json.contains("\"10%\""));
    assert!(json.contains("\"p_value\""));
}
