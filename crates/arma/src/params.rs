//! Unconstrained parametrisation of the ARMA polynomials.
//!
//! The optimizer searches over `ℝᵏ`; every point maps to a stationary AR
//! and an invertible MA polynomial, seasonal blocks included.

use crate::polynomial;
use crate::spec::ArmaSpec;

/// Maps unconstrained parameters to stationary AR coefficients via the
/// PACF parametrisation (Jones 1980, Monahan 1984).
///
/// Step 1: `r_k = tanh(alpha_k)` maps each parameter to (-1, 1).
/// Step 2: Levinson-Durbin recursion turns the partial autocorrelations
///         into `φ` with `1 - φ₁B - … - φₚBᵖ` having all roots outside the
///         unit circle.
pub(crate) fn unconstrained_to_coeffs(alpha: &[f64]) -> Vec<f64> {
    let p = alpha.len();
    if p == 0 {
        return Vec::new();
    }

    let r: Vec<f64> = alpha.iter().map(|a| a.tanh()).collect();

    let mut phi = vec![0.0; p];
    let mut prev = vec![0.0; p];
    phi[0] = r[0];

    for k in 1..p {
        prev.copy_from_slice(&phi);
        phi[k] = r[k];
        for j in 0..k {
            phi[j] = prev[j] - r[k] * prev[k - 1 - j];
        }
    }

    phi
}

/// MA counterpart of [`unconstrained_to_coeffs`].
///
/// Negating stationary AR coefficients makes `1 + θ₁B + … + θ_qB^q`
/// invertible.
pub(crate) fn unconstrained_to_ma(beta: &[f64]) -> Vec<f64> {
    unconstrained_to_coeffs(beta)
        .into_iter()
        .map(|c| -c)
        .collect()
}

/// Coefficient blocks decoded from one optimizer point.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Coefficients {
    pub(crate) ar: Vec<f64>,
    pub(crate) ma: Vec<f64>,
    pub(crate) seasonal_ar: Vec<f64>,
    pub(crate) seasonal_ma: Vec<f64>,
}

impl Coefficients {
    /// Splits `params` into `[p | q | P | Q]` blocks and transforms each.
    pub(crate) fn decode(spec: &ArmaSpec, params: &[f64]) -> Self {
        let (ar, rest) = params.split_at(spec.p());
        let (ma, rest) = rest.split_at(spec.q());
        let (seasonal_ar, seasonal_ma) = rest.split_at(spec.seasonal_p());
        Self {
            ar: unconstrained_to_coeffs(ar),
            ma: unconstrained_to_ma(ma),
            seasonal_ar: unconstrained_to_coeffs(seasonal_ar),
            seasonal_ma: unconstrained_to_ma(seasonal_ma),
        }
    }

    /// Multiplicatively expanded `(ar, ma)` lag polynomials.
    pub(crate) fn expand(&self, season_length: usize) -> (Vec<f64>, Vec<f64>) {
        (
            polynomial::expand_ar(&self.ar, &self.seasonal_ar, season_length),
            polynomial::expand_ma(&self.ma, &self.seasonal_ma, season_length),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_input() {
        assert!(unconstrained_to_coeffs(&[]).is_empty());
        assert!(unconstrained_to_ma(&[]).is_empty());
    }

    #[test]
    fn single_saturates() {
        assert_abs_diff_eq!(unconstrained_to_coeffs(&[10.0])[0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(unconstrained_to_coeffs(&[-10.0])[0], -1.0, epsilon = 1e-6);
        assert_eq!(unconstrained_to_coeffs(&[0.0]), vec![0.0]);
    }

    #[test]
    fn two_coefficients() {
        let result = unconstrained_to_coeffs(&[0.5, 0.3]);
        // phi[0] = r0 - r1 * r0, phi[1] = r1
        let r0 = 0.5_f64.tanh();
        let r1 = 0.3_f64.tanh();
        assert_abs_diff_eq!(result[0], r0 - r1 * r0, epsilon = 1e-12);
        assert_abs_diff_eq!(result[1], r1, epsilon = 1e-12);
    }

    #[test]
    fn ar2_stationarity_triangle() {
        let cases: &[[f64; 2]] = &[[1.0, 0.5], [-3.0, 2.0], [0.1, 0.2], [4.0, -4.0]];
        for alpha in cases {
            let phi = unconstrained_to_coeffs(alpha);
            assert!(phi[1].abs() < 1.0, "alpha={alpha:?}");
            assert!(phi[1] + phi[0] < 1.0, "alpha={alpha:?}");
            assert!(phi[1] - phi[0] < 1.0, "alpha={alpha:?}");
        }
    }

    #[test]
    fn ma2_invertibility_triangle() {
        // 1 + θ₁B + θ₂B² invertible ⇔ |θ₂| < 1, θ₂ - θ₁ > -1, θ₂ + θ₁ > -1
        let cases: &[[f64; 2]] = &[[1.0, 0.5], [-3.0, 2.0], [2.5, -1.5], [0.0, 3.0]];
        for beta in cases {
            let theta = unconstrained_to_ma(beta);
            assert!(theta[1].abs() < 1.0, "beta={beta:?}");
            assert!(theta[1] - theta[0] > -1.0, "beta={beta:?}");
            assert!(theta[1] + theta[0] > -1.0, "beta={beta:?}");
        }
    }

    #[test]
    fn negation_symmetry() {
        for a in [0.0, 0.5, 1.0, 2.0, 10.0] {
            let pos = unconstrained_to_coeffs(&[a]);
            let neg = unconstrained_to_coeffs(&[-a]);
            assert_abs_diff_eq!(neg[0], -pos[0], epsilon = 1e-15);
        }
    }

    #[test]
    fn decode_splits_blocks() {
        let spec = ArmaSpec::seasonal(1, 1, 1, 1, 4);
        let c = Coefficients::decode(&spec, &[0.2, 0.3, 0.4, 0.5]);
        assert_abs_diff_eq!(c.ar[0], 0.2_f64.tanh(), epsilon = 1e-12);
        assert_abs_diff_eq!(c.ma[0], -(0.3_f64.tanh()), epsilon = 1e-12);
        assert_abs_diff_eq!(c.seasonal_ar[0], 0.4_f64.tanh(), epsilon = 1e-12);
        assert_abs_diff_eq!(c.seasonal_ma[0], -(0.5_f64.tanh()), epsilon = 1e-12);

        let (ar, ma) = c.expand(4);
        assert_eq!(ar.len(), 5);
        assert_eq!(ma.len(), 5);
    }
}
