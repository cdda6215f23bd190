//! Mann–Kendall test for a monotonic trend.
//!
//! The classical (original) test: no correction for serial correlation,
//! variance adjusted for tied groups, continuity-corrected Z and a two-sided
//! p-value from the standard normal distribution.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::StatsError;

/// Direction reported by the test at the chosen significance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    NoTrend,
}

/// Outcome of [`mann_kendall`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannKendall {
    /// Trend direction; `NoTrend` unless the null hypothesis is rejected.
    pub trend: TrendDirection,
    /// `true` when the null hypothesis of no trend is rejected.
    pub h: bool,
    /// Two-sided p-value.
    pub p: f64,
    /// Normalised test statistic.
    pub z: f64,
    /// Kendall's tau.
    pub tau: f64,
    /// Mann–Kendall score S.
    pub s: f64,
    /// Variance of S after tie correction.
    pub var_s: f64,
}

/// Runs the Mann–Kendall test on a time-ordered series.
///
/// # Errors
///
/// - [`StatsError::InvalidParameter`] if `alpha` is not in (0, 1).
/// - [`StatsError::InsufficientData`] for fewer than two values.
/// - [`StatsError::Distribution`] if the normal distribution cannot be built.
pub fn mann_kendall(series: &[f64], alpha: f64) -> Result<MannKendall, StatsError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatsError::InvalidParameter {
            name: "alpha",
            reason: format!("must be in (0, 1), got {alpha}"),
        });
    }
    let n = series.len();
    if n < 2 {
        return Err(StatsError::InsufficientData { needed: 2, got: n });
    }

    let s = mk_score(series);
    let var_s = score_variance(series);
    let nf = n as f64;
    let tau = s / (0.5 * nf * (nf - 1.0));

    let z = if var_s <= 0.0 || s == 0.0 {
        0.0
    } else if s > 0.0 {
        (s - 1.0) / var_s.sqrt()
    } else {
        (s + 1.0) / var_s.sqrt()
    };

    let normal = Normal::new(0.0, 1.0).map_err(|e| StatsError::Distribution {
        reason: e.to_string(),
    })?;
    let p = 2.0 * (1.0 - normal.cdf(z.abs()));
    let h = z.abs() > normal.inverse_cdf(1.0 - alpha / 2.0);

    let trend = if h && z > 0.0 {
        TrendDirection::Increasing
    } else if h && z < 0.0 {
        TrendDirection::Decreasing
    } else {
        TrendDirection::NoTrend
    };

    Ok(MannKendall {
        trend,
        h,
        p,
        z,
        tau,
        s,
        var_s,
    })
}

/// S = sum over i < j of sign(x_j - x_i).
fn mk_score(x: &[f64]) -> f64 {
    let mut s: i64 = 0;
    for (i, &xi) in x.iter().enumerate() {
        for &xj in &x[i + 1..] {
            if xj > xi {
                s += 1;
            } else if xj < xi {
                s -= 1;
            }
        }
    }
    s as f64
}

/// Var(S) = [n(n-1)(2n+5) - sum t(t-1)(2t+5)] / 18 over tied groups.
fn score_variance(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mut sorted = x.to_vec();
    sorted.sort_by(f64::total_cmp);

    let ties: f64 = sorted
        .chunk_by(|a, b| a == b)
        .map(|group| group.len() as f64)
        .filter(|&t| t > 1.0)
        .map(|t| t * (t - 1.0) * (2.0 * t + 5.0))
        .sum();

    (n * (n - 1.0) * (2.0 * n + 5.0) - ties) / 18.0
}
