//! Differencing and integration.

/// Lagged difference: `out[i] = x[i + lag] - x[i]`, length `n - lag`.
///
/// Returns an empty vector when `n <= lag`. A `lag` of zero yields all zeros.
pub fn difference(series: &[f64], lag: usize) -> Vec<f64> {
    if series.len() <= lag {
        return Vec::new();
    }
    series
        .iter()
        .zip(&series[lag..])
        .map(|(earlier, later)| later - earlier)
        .collect()
}

/// Running total of `series`, same length.
pub fn cumulative_sum(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Inverse of `difference(·, 1)` seeded with the original first value.
///
/// `undifference(x[0], &difference(x, 1))` reconstructs `x`.
pub fn undifference(first: f64, diffs: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(diffs.len() + 1);
    out.push(first);
    let mut level = first;
    for d in diffs {
        level += d;
        out.push(level);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_difference() {
        assert_eq!(difference(&[1.0, 4.0, 9.0, 16.0], 1), vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn seasonal_difference() {
        let x = [1.0, 2.0, 3.0, 4.0, 11.0, 12.0, 13.0, 14.0];
        assert_eq!(difference(&x, 4), vec![10.0; 4]);
    }

    #[test]
    fn difference_short_input() {
        assert!(difference(&[1.0, 2.0], 2).is_empty());
        assert!(difference(&[1.0], 1).is_empty());
        assert!(difference(&[], 1).is_empty());
    }

    #[test]
    fn cumulative_sum_basic() {
        assert_eq!(cumulative_sum(&[1.0, -2.0, 3.5]), vec![1.0, -1.0, 2.5]);
        assert!(cumulative_sum(&[]).is_empty());
    }

    #[test]
    fn undifference_round_trip() {
        let x = [3.0, 1.5, 4.25, -2.0, 0.0, 7.5];
        let rebuilt = undifference(x[0], &difference(&x, 1));
        assert_eq!(rebuilt.len(), x.len());
        for (a, b) in rebuilt.iter().zip(x) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn seeded_cumulative_sum_reconstructs() {
        let x = [2.0, 5.0, 4.0, 8.0];
        let mut seeded = vec![x[0]];
        seeded.extend(difference(&x, 1));
        assert_eq!(cumulative_sum(&seeded), x.to_vec());
    }
}
