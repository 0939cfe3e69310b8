//! ARMA state-space representation.
//!
//! Converts expanded ARMA coefficients into companion form:
//!
//! ```text
//! x[t+1] = T * x[t] + R * e[t]     (state transition)
//! y[t]   = x[t][0]                 (observation)
//! ```
//!
//! with `T[i][0] = φᵢ`, ones on the super-diagonal, `R = [1, θ₁, …]` and
//! `e[t] ~ N(0, 1)`. The unit variance is concentrated out of the
//! likelihood afterwards.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2, Axis};

use crate::error::ArmaError;

/// Maximum number of doubling steps for the stationary covariance.
const MAX_DOUBLINGS: usize = 64;

/// Convergence threshold on the doubling increment.
const DOUBLING_TOLERANCE: f64 = 1e-10;

/// State-space representation of an ARMA model.
#[derive(Clone, Debug)]
pub(crate) struct StateSpace {
    r: usize,
    phi: Vec<f64>,
    rrt: Array2<f64>,
}

impl StateSpace {
    /// Builds the companion form from (expanded) AR and MA coefficients.
    pub(crate) fn new(ar: &[f64], ma: &[f64]) -> Self {
        let r = ar.len().max(ma.len() + 1).max(1);

        let mut phi = vec![0.0; r];
        phi[..ar.len()].copy_from_slice(ar);

        let mut r_vec: Array1<f64> = Array1::zeros(r);
        r_vec[0] = 1.0;
        for (j, theta) in ma.iter().enumerate() {
            r_vec[j + 1] = *theta;
        }

        let r_col = r_vec.view().insert_axis(Axis(1));
        let r_row = r_vec.view().insert_axis(Axis(0));
        let rrt = r_col.dot(&r_row);

        Self { r, phi, rrt }
    }

    /// State dimension `r = max(p, q+1)`, minimum 1.
    pub(crate) fn r(&self) -> usize {
        self.r
    }

    /// `R·Rᵀ`.
    pub(crate) fn rrt(&self) -> &Array2<f64> {
        &self.rrt
    }

    /// Dense transition matrix `T`.
    pub(crate) fn transition(&self) -> Array2<f64> {
        let mut t = Array2::zeros((self.r, self.r));
        for (i, phi) in self.phi.iter().enumerate() {
            t[[i, 0]] = *phi;
        }
        for i in 0..self.r.saturating_sub(1) {
            t[[i, i + 1]] = 1.0;
        }
        t
    }

    /// `T·a` using the companion structure.
    pub(crate) fn advance(&self, a: &[f64]) -> Vec<f64> {
        (0..self.r)
            .map(|i| self.phi[i] * a[0] + a.get(i + 1).copied().unwrap_or(0.0))
            .collect()
    }

    /// First column of `T·P`, i.e. `T·P[:, 0]`.
    pub(crate) fn gain_column(&self, p: &Array2<f64>) -> Vec<f64> {
        (0..self.r)
            .map(|i| {
                let below = if i + 1 < self.r { p[[i + 1, 0]] } else { 0.0 };
                self.phi[i] * p[[0, 0]] + below
            })
            .collect()
    }

    /// `T·P·Tᵀ` in `O(r²)`.
    pub(crate) fn propagate(&self, p: &Array2<f64>) -> Array2<f64> {
        let r = self.r;
        // M = T·P
        let m = Array2::from_shape_fn((r, r), |(i, j)| {
            let below = if i + 1 < r { p[[i + 1, j]] } else { 0.0 };
            self.phi[i] * p[[0, j]] + below
        });
        // M·Tᵀ
        Array2::from_shape_fn((r, r), |(i, j)| {
            let right = if j + 1 < r { m[[i, j + 1]] } else { 0.0 };
            m[[i, 0]] * self.phi[j] + right
        })
    }

    /// Unconditional state covariance solving `P = T·P·Tᵀ + R·Rᵀ`.
    ///
    /// Uses the doubling iteration `P ← P + A·P·Aᵀ`, `A ← A²`, which
    /// converges quadratically for a stationary `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmaError::NonStationary`] if the iteration diverges or does
    /// not settle within the step limit.
    pub(crate) fn stationary_covariance(&self) -> Result<Array2<f64>, ArmaError> {
        let mut a = self.transition();
        let mut p = self.rrt.clone();

        for _ in 0..MAX_DOUBLINGS {
            let increment = a.dot(&p).dot(&a.t());
            let size = increment.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
            p += &increment;
            if !size.is_finite() || p.iter().any(|v| !v.is_finite()) {
                return Err(ArmaError::NonStationary);
            }
            if size <= DOUBLING_TOLERANCE * p[[0, 0]].abs().max(1.0) {
                return Ok(p);
            }
            a = a.dot(&a);
        }
        Err(ArmaError::NonStationary)
    }
}
