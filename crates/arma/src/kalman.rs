//! Kalman filter for ARMA likelihood evaluation.
//!
//! Runs a univariate filter on the companion form from
//! [`crate::state_space`], initialised with the stationary state covariance,
//! and evaluates the exact Gaussian log-likelihood via the prediction error
//! decomposition. The innovation variance is concentrated out:
//!
//! ```text
//! σ̂² = (1/n) Σ vₜ² / Fₜ
//! ℓ  = -n/2 · (ln 2π + ln σ̂² + 1) - ½ Σ ln Fₜ
//! ```
//!
//! **Not part of the public API.**

use ndarray::Array2;

use crate::error::ArmaError;
use crate::state_space::StateSpace;

/// Largest covariance change treated as converged to the steady state.
const STEADY_STATE_TOLERANCE: f64 = 1e-12;

/// Everything a final filter pass produces.
#[derive(Clone, Debug)]
pub(crate) struct KalmanOutput {
    pub(crate) sigma2: f64,
    /// One-step prediction errors `vₜ = yₜ - ŷₜ|ₜ₋₁`.
    pub(crate) residuals: Vec<f64>,
    pub(crate) log_likelihood: f64,
    /// Predicted state for the first step after the data.
    pub(crate) state: Vec<f64>,
}

struct Pass {
    sum_sq: f64,
    sum_log_f: f64,
    residuals: Vec<f64>,
    state: Vec<f64>,
}

/// Concentrated log-likelihood of centred `data`; used as the optimizer
/// objective.
pub(crate) fn kalman_concentrated_loglik(ss: &StateSpace, data: &[f64]) -> Result<f64, ArmaError> {
    let pass = filter(ss, data, false)?;
    Ok(concentrate(&pass, data.len()).1)
}

/// Full filter pass returning variance, residuals, likelihood and state.
pub(crate) fn kalman_full(ss: &StateSpace, data: &[f64]) -> Result<KalmanOutput, ArmaError> {
    let pass = filter(ss, data, true)?;
    let (sigma2, log_likelihood) = concentrate(&pass, data.len());
    Ok(KalmanOutput {
        sigma2,
        residuals: pass.residuals,
        log_likelihood,
        state: pass.state,
    })
}

fn concentrate(pass: &Pass, n: usize) -> (f64, f64) {
    let n = n as f64;
    let sigma2 = pass.sum_sq / n;
    let log_likelihood =
        -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + sigma2.ln() + 1.0) - 0.5 * pass.sum_log_f;
    (sigma2, log_likelihood)
}

fn filter(ss: &StateSpace, data: &[f64], keep_residuals: bool) -> Result<Pass, ArmaError> {
    let r = ss.r();
    let mut p = ss.stationary_covariance()?;
    let mut a = vec![0.0; r];
    let mut steady = false;

    let mut sum_sq = 0.0;
    let mut sum_log_f = 0.0;
    let mut residuals = Vec::with_capacity(if keep_residuals { data.len() } else { 0 });

    for (t, &y) in data.iter().enumerate() {
        let f = p[[0, 0]];
        if !f.is_finite() || f <= 0.0 {
            return Err(ArmaError::SingularInnovation { t });
        }

        let v = y - a[0];
        sum_sq += v * v / f;
        sum_log_f += f.ln();
        if keep_residuals {
            residuals.push(v);
        }

        let k = ss.gain_column(&p);
        a = ss.advance(&a);
        for (ai, ki) in a.iter_mut().zip(&k) {
            *ai += ki * v / f;
        }

        if !steady {
            let next = update_covariance(ss, &p, &k, f);
            steady = next
                .iter()
                .zip(p.iter())
                .all(|(x, y)| (x - y).abs() <= STEADY_STATE_TOLERANCE);
            p = next;
        }
    }

    Ok(Pass {
        sum_sq,
        sum_log_f,
        residuals,
        state: a,
    })
}

/// `T·P·Tᵀ + R·Rᵀ - k·kᵀ/F`.
fn update_covariance(ss: &StateSpace, p: &Array2<f64>, k: &[f64], f: f64) -> Array2<f64> {
    let mut next = ss.propagate(p) + ss.rrt();
    for ((i, j), value) in next.indexed_iter_mut() {
        *value -= k[i] * k[j] / f;
    }
    next
}
