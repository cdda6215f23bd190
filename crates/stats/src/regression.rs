//! Ordinary least-squares line fit.

use crate::error::StatsError;

/// Result of fitting `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Change in `y` per unit of `x`.
    pub slope: f64,
    /// Value of the fitted line at `x = 0`.
    pub intercept: f64,
    /// Pearson correlation between `x` and `y` (0 when `y` is constant).
    pub r_value: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least-squares regression of `y` on `x`.
///
/// # Errors
///
/// - [`StatsError::LengthMismatch`] if `x` and `y` differ in length.
/// - [`StatsError::InsufficientData`] for fewer than two points.
/// - [`StatsError::Degenerate`] if every `x` is identical.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(StatsError::InsufficientData { needed: 2, got: n });
    }

    let mx = crate::mean(x);
    let my = crate::mean(y);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return Err(StatsError::Degenerate {
            reason: "fewer than 2 distinct x values".to_string(),
        });
    }

    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    let r_value = if syy == 0.0 {
        0.0
    } else {
        sxy / (sxx * syy).sqrt()
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = linear_regression(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_value, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-12);
    }

    #[test]
    fn noisy_line() {
        // scipy.stats.linregress([1,2,3,4,5], [2,4,5,4,5]) -> slope 0.6, intercept 2.2
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        let fit = linear_regression(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 0.6, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 2.2, epsilon = 1e-12);
        assert_relative_eq!(fit.r_value, 0.774_596_669, epsilon = 1e-6);
    }

    #[test]
    fn constant_y_has_zero_slope() {
        let fit = linear_regression(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 4.0);
        assert_eq!(fit.r_value, 0.0);
    }

    #[test]
    fn single_distinct_x_is_degenerate() {
        let err = linear_regression(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, StatsError::Degenerate { .. }));
    }

    #[test]
    fn too_few_points() {
        let err = linear_regression(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(err, StatsError::InsufficientData { needed: 2, got: 1 });
    }

    #[test]
    fn mismatched_lengths() {
        let err = linear_regression(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, StatsError::LengthMismatch { x: 2, y: 1 });
    }
}
