//! Statistical helper functions for riverflow discharge analyses.

mod error;
mod mann_kendall;
mod regression;

pub use error::StatsError;
pub use mann_kendall::{MannKendall, TrendDirection, mann_kendall};
pub use regression::{LinearFit, linear_regression};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator (matching R's `sd()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Sample standard deviation, or `None` when it is undefined (fewer than 2
/// elements).
pub fn sample_sd(data: &[f64]) -> Option<f64> {
    (data.len() >= 2).then(|| sd(data))
}

/// R's default quantile algorithm (type=7), the same linear interpolation
/// pandas uses by default.
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Type-7 quantile of unsorted data. Returns `None` if `data` is empty.
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(quantile_type7(&sorted, p))
}

/// Lengths of the maximal runs of `true` and of `false` in `mask`, in order
/// of appearance: `(true_runs, false_runs)`.
pub fn spell_lengths(mask: &[bool]) -> (Vec<usize>, Vec<usize>) {
    let mut true_runs = Vec::new();
    let mut false_runs = Vec::new();
    for run in mask.chunk_by(|a, b| a == b) {
        if run[0] {
            true_runs.push(run.len());
        } else {
            false_runs.push(run.len());
        }
    }
    (true_runs, false_runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_sample_sd_undefined_below_two() {
        assert_eq!(sample_sd(&[]), None);
        assert_eq!(sample_sd(&[5.0]), None);
        assert_relative_eq!(sample_sd(&[10.0, 20.0, 30.0]).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.25), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quantile_type7_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        // p=0.1 → h=0.4, lo=0, hi=1 → 1 + 0.4*(2-1) = 1.4
        assert_relative_eq!(quantile_type7(&sorted, 0.1), 1.4, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7_r_crossvalidation() {
        // R: quantile(1:10, 0.9, type=7) = 9.1
        let sorted: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert_relative_eq!(quantile_type7(&sorted, 0.9), 9.1, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_unsorted() {
        assert_relative_eq!(
            quantile(&[30.0, 10.0, 20.0], 0.9).unwrap(),
            28.0,
            epsilon = 1e-10
        );
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    #[should_panic(expected = "quantile_type7: input must not be empty")]
    fn test_quantile_type7_empty_panics() {
        quantile_type7(&[], 0.5);
    }

    #[test]
    fn test_spell_lengths() {
        // Pattern: true(2), false(3), true(1)
        let mask = [true, true, false, false, false, true];
        let (t, f) = spell_lengths(&mask);
        assert_eq!(t, vec![2, 1]);
        assert_eq!(f, vec![3]);
    }

    #[test]
    fn test_spell_lengths_empty() {
        let (t, f) = spell_lengths(&[]);
        assert!(t.is_empty());
        assert!(f.is_empty());
    }
}
