//! Multiplicative expansion of seasonal lag polynomials.

/// Expands `(1 - φ(B))(1 - Φ(Bˢ))` and returns `c` with the product equal
/// to `1 - c₁B - … - c_kBᵏ`, `k = p + s·P`.
pub(crate) fn expand_ar(ar: &[f64], seasonal_ar: &[f64], s: usize) -> Vec<f64> {
    if seasonal_ar.is_empty() {
        return ar.to_vec();
    }
    let mut c = vec![0.0; ar.len() + s * seasonal_ar.len()];
    for (i, phi) in ar.iter().enumerate() {
        c[i] += phi;
    }
    for (j, big_phi) in seasonal_ar.iter().enumerate() {
        let lag = s * (j + 1);
        c[lag - 1] += big_phi;
        for (i, phi) in ar.iter().enumerate() {
            c[lag + i] -= phi * big_phi;
        }
    }
    c
}

/// Expands `(1 + θ(B))(1 + Θ(Bˢ))` and returns `c` with the product equal
/// to `1 + c₁B + … + c_kBᵏ`, `k = q + s·Q`.
pub(crate) fn expand_ma(ma: &[f64], seasonal_ma: &[f64], s: usize) -> Vec<f64> {
    if seasonal_ma.is_empty() {
        return ma.to_vec();
    }
    let mut c = vec![0.0; ma.len() + s * seasonal_ma.len()];
    for (i, theta) in ma.iter().enumerate() {
        c[i] += theta;
    }
    for (j, big_theta) in seasonal_ma.iter().enumerate() {
        let lag = s * (j + 1);
        c[lag - 1] += big_theta;
        for (i, theta) in ma.iter().enumerate() {
            c[lag + i] += theta * big_theta;
        }
    }
    c
}
