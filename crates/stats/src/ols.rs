//! Ordinary least squares for the unit-root regressions.

use ndarray::{Array1, Array2};

use crate::error::StatsError;

/// Relative pivot size below which `XᵀX` is treated as singular.
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Result of an OLS regression `y = X·β + e`.
#[derive(Debug, Clone)]
pub(crate) struct OlsFit {
    pub(crate) params: Array1<f64>,
    pub(crate) std_errors: Array1<f64>,
    pub(crate) ssr: f64,
    pub(crate) nobs: usize,
}

impl OlsFit {
    /// t-statistic of coefficient `i`.
    ///
    /// A zero standard error (perfect fit) yields `0.0`.
    pub(crate) fn t_value(&self, i: usize) -> f64 {
        let se = self.std_errors[i];
        if se > 0.0 { self.params[i] / se } else { 0.0 }
    }

    /// Gaussian log-likelihood at the least-squares estimate.
    pub(crate) fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        let ssr = self.ssr.max(f64::MIN_POSITIVE);
        -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + (ssr / n).ln() + 1.0)
    }

    /// `-2·LL + 2k` with `k` the number of regressors.
    pub(crate) fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood() + 2.0 * self.params.len() as f64
    }
}

/// Fits `y` on the columns of `x`.
///
/// # Errors
///
/// Returns [`StatsError::SingularRegression`] when there are no more rows
/// than columns or `XᵀX` cannot be inverted.
pub(crate) fn ols(x: &Array2<f64>, y: &Array1<f64>) -> Result<OlsFit, StatsError> {
    let (rows, cols) = x.dim();
    let singular = StatsError::SingularRegression { rows, cols };
    if rows <= cols || cols == 0 {
        return Err(singular);
    }

    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);
    let xtx_inv = invert(&xtx).ok_or(singular)?;

    let params = xtx_inv.dot(&xty);
    let resid = y - &x.dot(&params);
    let mut ssr = resid.dot(&resid);
    if ssr <= f64::EPSILON * y.dot(y) {
        ssr = 0.0;
    }
    let sigma2 = ssr / (rows - cols) as f64;
    let std_errors = Array1::from_shape_fn(cols, |i| (sigma2 * xtx_inv[[i, i]]).max(0.0).sqrt());

    Ok(OlsFit {
        params,
        std_errors,
        ssr,
        nobs: rows,
    })
}

/// Gauss-Jordan inverse with partial pivoting; `None` if singular.
fn invert(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return None;
    }

    let mut m = a.clone();
    let mut inv = Array2::eye(n);

    for col in 0..n {
        let pivot_row = (col..n).max_by(|&i, &j| m[[i, col]].abs().total_cmp(&m[[j, col]].abs()))?;
        let pivot = m[[pivot_row, col]];
        if pivot.abs() <= PIVOT_TOLERANCE * scale {
            return None;
        }
        if pivot_row != col {
            for k in 0..n {
                m.swap([pivot_row, k], [col, k]);
                inv.swap([pivot_row, k], [col, k]);
            }
        }

        for k in 0..n {
            m[[col, k]] /= pivot;
            inv[[col, k]] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = m[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for k in 0..n {
                m[[row, k]] -= factor * m[[col, k]];
                inv[[row, k]] -= factor * inv[[col, k]];
            }
        }
    }
    Some(inv)
}
