//! The differencing operator `(1 - B)^d (1 - B^s)^D` and its inverse.

use std::iter;

use tsforge_stats::difference;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Differencing {
    d: usize,
    seasonal_d: usize,
    season_length: usize,
}

impl Differencing {
    pub(crate) fn new(d: usize, seasonal_d: usize, season_length: usize) -> Self {
        Self {
            d,
            seasonal_d,
            season_length,
        }
    }

    /// Observations consumed at the front of the series.
    pub(crate) fn degree(&self) -> usize {
        self.d + self.seasonal_d * self.season_length
    }

    pub(crate) fn apply(&self, series: &[f64]) -> Vec<f64> {
        self.lags().fold(series.to_vec(), |acc, lag| difference(&acc, lag))
    }

    /// Turns forecasts of the differenced series back into levels.
    ///
    /// `history` is the undifferenced series the forecasts continue. Each
    /// level solves `delta(B) y[t] = w[t]` for `y[t]` using the levels before
    /// it, so forecasts feed later steps.
    pub(crate) fn integrate(&self, history: &[f64], forecasts: &[f64]) -> Vec<f64> {
        let poly = self.polynomial();
        let mut levels = history.to_vec();

        for &w in forecasts {
            let t = levels.len();
            let carried: f64 = poly
                .iter()
                .enumerate()
                .skip(1)
                .filter_map(|(k, c)| t.checked_sub(k).map(|i| c * levels[i]))
                .sum();
            levels.push(w - carried);
        }

        levels.split_off(history.len())
    }

    /// Coefficients of `delta(B)`, constant term first.
    fn polynomial(&self) -> Vec<f64> {
        self.lags().fold(vec![1.0], |poly, lag| {
            let mut next = vec![0.0; poly.len() + lag];
            for (i, &c) in poly.iter().enumerate() {
                next[i] += c;
                next[i + lag] -= c;
            }
            next
        })
    }

    fn lags(&self) -> impl Iterator<Item = usize> {
        iter::repeat_n(1, self.d).chain(iter::repeat_n(self.season_length, self.seasonal_d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_when_no_differencing() {
        let diff = Differencing::default();
        let x = [1.0, 4.0, 2.0];
        assert_eq!(diff.apply(&x), x.to_vec());
        assert_eq!(diff.integrate(&x, &[5.0, 6.0]), vec![5.0, 6.0]);
        assert_eq!(diff.degree(), 0);
    }

    #[test]
    fn polynomial_expansion() {
        assert_eq!(Differencing::new(2, 0, 0).polynomial(), vec![1.0, -2.0, 1.0]);
        assert_eq!(
            Differencing::new(1, 1, 3).polynomial(),
            vec![1.0, -1.0, 0.0, -1.0, 1.0]
        );
        assert_eq!(Differencing::new(1, 1, 3).degree(), 4);
    }

    #[test]
    fn apply_shortens_by_degree() {
        let x: Vec<f64> = (0..20).map(|i| (i as f64).powi(2)).collect();
        let diff = Differencing::new(1, 1, 4);
        assert_eq!(diff.apply(&x).len(), 20 - diff.degree());
        // second difference of i² is 2 everywhere
        let w = Differencing::new(2, 0, 0).apply(&x);
        assert!(w.iter().all(|v| (v - 2.0).abs() < 1e-12));
    }

    #[test]
    fn integrate_inverts_apply() {
        let x: Vec<f64> = (0..30)
            .map(|i| 0.3 * i as f64 + ((i % 4) as f64) * 1.5 + ((i * 7 % 5) as f64) * 0.1)
            .collect();
        let diff = Differencing::new(1, 1, 4);
        let w = diff.apply(&x);
        let (history, _) = x.split_at(20);
        let future_w = &w[w.len() - 10..];
        let levels = diff.integrate(history, future_w);
        for (got, want) in levels.iter().zip(&x[20..]) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn integrate_continues_linear_trend() {
        let history = [1.0, 2.0, 3.0];
        let levels = Differencing::new(1, 0, 0).integrate(&history, &[1.0, 1.0]);
        assert_eq!(levels, vec![4.0, 5.0]);
    }
}
