//! Round-trip integration tests for tsforge-arma.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tsforge_arma::{ArmaSpec, InformationCriterion, select_best};
use tsforge_generate::{generate_ar, generate_arma, generate_ma, generate_sarimax};

#[test]
fn ar1_recovery() {
    let data = generate_ar(2000, &[0.7], 1.0, &mut StdRng::seed_from_u64(100)).unwrap();
    let fit = ArmaSpec::new(1, 0).fit(&data).unwrap();
    assert!((fit.ar()[0] - 0.7).abs() < 0.1, "phi = {}", fit.ar()[0]);
    assert!(fit.sigma2() > 0.85 && fit.sigma2() < 1.15);
}

#[test]
fn ma1_recovery() {
    let data = generate_ma(2000, &[0.5], 1.0, &mut StdRng::seed_from_u64(200)).unwrap();
    let fit = ArmaSpec::new(0, 1).fit(&data).unwrap();
    assert!((fit.ma()[0] - 0.5).abs() < 0.1, "theta = {}", fit.ma()[0]);
}

#[test]
fn arma11_recovery() {
    let data = generate_arma(2000, &[0.5], &[0.3], 1.0, &mut StdRng::seed_from_u64(300)).unwrap();
    let fit = ArmaSpec::new(1, 1).fit(&data).unwrap();
    assert!((fit.ar()[0] - 0.5).abs() < 0.15, "phi = {}", fit.ar()[0]);
    assert!((fit.ma()[0] - 0.3).abs() < 0.15, "theta = {}", fit.ma()[0]);
}

#[test]
fn ma2_fit_is_invertible() {
    let data = generate_ma(1000, &[0.4, 0.3], 1.0, &mut StdRng::seed_from_u64(310)).unwrap();
    let fit = ArmaSpec::new(0, 2).fit(&data).unwrap();
    let (t1, t2) = (fit.ma()[0], fit.ma()[1]);
    assert!(t2.abs() < 1.0 && t1 + t2 > -1.0 && t2 - t1 > -1.0);
    assert!((t1 - 0.4).abs() < 0.15, "theta1 = {t1}");
}

#[test]
fn seasonal_ar_recovery() {
    // x[t] = 0.6·x[t-4] + e[t]
    let s = 4;
    let eps = generate_ar(800, &[], 1.0, &mut StdRng::seed_from_u64(320)).unwrap();
    let mut data = vec![0.0; 800];
    for t in 0..800 {
        data[t] = eps[t] + if t >= s { 0.6 * data[t - s] } else { 0.0 };
    }
    let fit = ArmaSpec::seasonal(0, 0, 1, 0, s).fit(&data).unwrap();
    assert!(
        (fit.seasonal_ar()[0] - 0.6).abs() < 0.1,
        "Phi = {}",
        fit.seasonal_ar()[0]
    );
}

#[test]
fn sarimax_output_fits() {
    let data =
        generate_sarimax(200, &[0.3], 0, &[], &[0, 0, 0, 4], 1.0, &mut StdRng::seed_from_u64(330))
            .unwrap();
    let fit = ArmaSpec::seasonal(1, 0, 0, 1, 4).fit(&data).unwrap();
    assert!(fit.log_likelihood().is_finite());
    assert_eq!(fit.residuals().len(), 200);
}

#[test]
fn forecast_converges_to_mean() {
    let data = generate_ar(500, &[0.5], 1.0, &mut StdRng::seed_from_u64(340)).unwrap();
    let shifted: Vec<f64> = data.iter().map(|x| x + 20.0).collect();
    let fit = ArmaSpec::new(1, 0).fit(&shifted).unwrap();
    let f = fit.forecast(60);
    assert!((f[59] - fit.mean()).abs() < 1e-6);
    assert!((fit.mean() - 20.0).abs() < 0.3);
}

#[test]
fn bic_selects_ar2() {
    let data =
        generate_ar(1000, &[0.5, -0.3], 1.0, &mut StdRng::seed_from_u64(400)).unwrap();
    let candidates: Vec<ArmaSpec> = (0..=3)
        .flat_map(|p| (0..=2).map(move |q| ArmaSpec::new(p, q)))
        .collect();
    let selection = select_best(&data, &candidates, InformationCriterion::Bic).unwrap();
    assert_eq!(selection.best().order(), (2, 0));
    assert_eq!(selection.scores().len(), candidates.len());
}

#[test]
fn selection_is_deterministic() {
    let data = generate_arma(300, &[0.4], &[0.2], 1.0, &mut StdRng::seed_from_u64(500)).unwrap();
    let candidates = [ArmaSpec::new(1, 0), ArmaSpec::new(0, 1), ArmaSpec::new(1, 1)];
    let a = select_best(&data, &candidates, InformationCriterion::Aic).unwrap();
    let b = select_best(&data, &candidates, InformationCriterion::Aic).unwrap();
    assert_eq!(a.best().spec(), b.best().spec());
    assert_eq!(a.scores(), b.scores());
}
