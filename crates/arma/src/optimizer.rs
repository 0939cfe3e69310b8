//! Nelder-Mead optimizer for ARMA maximum-likelihood estimation.
//!
//! Wraps the `argmin` crate to minimize the negative concentrated
//! log-likelihood over unconstrained PACF parameters laid out as
//! `[p | q | P | Q]`.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use tracing::debug;

use crate::error::ArmaError;
use crate::fit::{ArmaFit, FitParts};
use crate::kalman;
use crate::params::Coefficients;
use crate::spec::ArmaSpec;
use crate::state_space::StateSpace;

/// Offset of the non-origin simplex vertices.
const SIMPLEX_STEP: f64 = 0.5;

/// Nelder-Mead termination threshold on the simplex cost spread.
const SD_TOLERANCE: f64 = 1e-8;

/// Iteration cap per fit.
const MAX_ITERS: u64 = 1000;

/// Fits `spec` to `data` via exact MLE.
///
/// This is the full pipeline:
/// 1. Validate data
/// 2. Center (subtract mean)
/// 3. Optimize concentrated log-likelihood via Nelder-Mead
/// 4. Extract final parameters via full Kalman pass
pub(crate) fn fit_arma(spec: ArmaSpec, data: &[f64]) -> Result<ArmaFit, ArmaError> {
    validate(&spec, data)?;

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let centered: Vec<f64> = data.iter().map(|x| x - mean).collect();

    let dim = spec.n_params() - 1;
    let params = if dim == 0 {
        Vec::new()
    } else {
        optimize(&spec, &centered, dim)?
    };

    let coeffs = Coefficients::decode(&spec, &params);
    let (ar, ma) = coeffs.expand(spec.season_length());
    let ss = StateSpace::new(&ar, &ma);
    let output = kalman::kalman_full(&ss, &centered)?;

    debug!(
        %spec,
        log_likelihood = output.log_likelihood,
        sigma2 = output.sigma2,
        "fitted"
    );

    Ok(ArmaFit::new(
        spec,
        FitParts {
            ar: coeffs.ar,
            ma: coeffs.ma,
            seasonal_ar: coeffs.seasonal_ar,
            seasonal_ma: coeffs.seasonal_ma,
            sigma2: output.sigma2,
            residuals: output.residuals,
            log_likelihood: output.log_likelihood,
            mean,
            state: output.state,
        },
    ))
}

fn validate(spec: &ArmaSpec, data: &[f64]) -> Result<(), ArmaError> {
    if data.is_empty() {
        return Err(ArmaError::EmptyData);
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(ArmaError::NonFiniteData);
    }
    let min_len = spec.min_observations();
    if data.len() < min_len {
        return Err(ArmaError::InsufficientData {
            n: data.len(),
            min: min_len,
        });
    }
    let min_val = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_val = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (max_val - min_val).abs() < f64::EPSILON {
        return Err(ArmaError::ConstantData);
    }
    Ok(())
}

fn optimize(spec: &ArmaSpec, centered: &[f64], dim: usize) -> Result<Vec<f64>, ArmaError> {
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(vec![0.0; dim]);
    for i in 0..dim {
        let mut vertex = vec![0.0; dim];
        vertex[i] = SIMPLEX_STEP;
        simplex.push(vertex);
    }

    let cost = ArmaCost {
        data: centered,
        spec: *spec,
    };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(SD_TOLERANCE)
        .map_err(|_| ArmaError::OptimizationFailed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(MAX_ITERS))
        .run()
        .map_err(|_| ArmaError::OptimizationFailed)?;

    let state = result.state();
    if !state.best_cost.is_finite() || state.best_cost >= f64::MAX {
        return Err(ArmaError::OptimizationFailed);
    }
    state
        .best_param
        .clone()
        .ok_or(ArmaError::OptimizationFailed)
}

/// Cost function for argmin: negative concentrated log-likelihood.
struct ArmaCost<'a> {
    data: &'a [f64],
    spec: ArmaSpec,
}

impl CostFunction for ArmaCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let coeffs = Coefficients::decode(&self.spec, params);
        let (ar, ma) = coeffs.expand(self.spec.season_length());
        let ss = StateSpace::new(&ar, &ma);

        match kalman::kalman_concentrated_loglik(&ss, self.data) {
            Ok(loglik) if loglik.is_finite() => Ok(-loglik),
            _ => Ok(f64::MAX),
        }
    }
}
