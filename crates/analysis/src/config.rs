//! Analysis configuration.

use crate::error::AnalysisError;

/// Tunable parameters shared by all analysis kinds.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    flood_quantile: f64,
    dry_fraction: f64,
    mann_kendall_alpha: f64,
    mann_kendall_min_points: usize,
    parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            flood_quantile: 0.9,
            dry_fraction: 0.2,
            mann_kendall_alpha: 0.05,
            mann_kendall_min_points: 4,
            parallel: false,
        }
    }
}

impl AnalysisConfig {
    /// Set the flow quantile used as the flood threshold.
    pub fn with_flood_quantile(mut self, q: f64) -> Self {
        self.flood_quantile = q;
        self
    }

    /// Set the fraction of mean flow below which a day counts as dry.
    pub fn with_dry_fraction(mut self, fraction: f64) -> Self {
        self.dry_fraction = fraction;
        self
    }

    /// Set the Mann–Kendall significance level.
    pub fn with_mann_kendall_alpha(mut self, alpha: f64) -> Self {
        self.mann_kendall_alpha = alpha;
        self
    }

    /// Set the minimum number of non-null flows the Mann–Kendall test needs.
    pub fn with_mann_kendall_min_points(mut self, n: usize) -> Self {
        self.mann_kendall_min_points = n;
        self
    }

    /// Spread per-station work over the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn flood_quantile(&self) -> f64 {
        self.flood_quantile
    }

    pub fn dry_fraction(&self) -> f64 {
        self.dry_fraction
    }

    pub fn mann_kendall_alpha(&self) -> f64 {
        self.mann_kendall_alpha
    }

    pub fn mann_kendall_min_points(&self) -> usize {
        self.mann_kendall_min_points
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Check every parameter and report all violations at once.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] listing each bad value.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let mut errors = Vec::new();

        if !(self.flood_quantile > 0.0 && self.flood_quantile < 1.0) {
            errors.push(format!(
                "flood_quantile must be in (0, 1), got {}",
                self.flood_quantile
            ));
        }
        if !(self.dry_fraction > 0.0 && self.dry_fraction.is_finite()) {
            errors.push(format!(
                "dry_fraction must be positive, got {}",
                self.dry_fraction
            ));
        }
        if !(self.mann_kendall_alpha > 0.0 && self.mann_kendall_alpha < 1.0) {
            errors.push(format!(
                "mann_kendall_alpha must be in (0, 1), got {}",
                self.mann_kendall_alpha
            ));
        }
        if self.mann_kendall_min_points < 3 {
            errors.push(format!(
                "mann_kendall_min_points must be at least 3, got {}",
                self.mann_kendall_min_points
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AnalysisError::InvalidConfig {
                count: errors.len(),
                details: errors.join("; "),
            })
        }
    }
}
