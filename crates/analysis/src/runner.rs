//! Run the whole analysis catalog in one pass.

use riverflow_io::Observation;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::engine::{AnalysisOutput, compute_with_progress};
use crate::error::AnalysisError;
use crate::kind::AnalysisKind;
use crate::progress::Progress;

/// Outputs of every kind that succeeded plus the failures of those that
/// did not.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// In catalog order.
    pub outputs: Vec<AnalysisOutput>,
    pub failures: Vec<(AnalysisKind, AnalysisError)>,
}

impl BatchOutcome {
    pub fn output(&self, kind: AnalysisKind) -> Option<&AnalysisOutput> {
        self.outputs.iter().find(|o| o.kind == kind)
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every [`AnalysisKind`] in [`AnalysisKind::ALL`] order. A failing
/// kind is logged and recorded; the rest still run.
pub fn run_all(
    observations: &[Observation],
    stations: &[String],
    config: &AnalysisConfig,
    progress: &dyn Progress,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for kind in AnalysisKind::ALL {
        match compute_with_progress(kind, observations, stations, config, progress) {
            Ok(out) => outcome.outputs.push(out),
            Err(e) => {
                warn!(kind = %kind, error = %e, "analysis failed");
                outcome.failures.push((kind, e));
            }
        }
    }

    info!(
        succeeded = outcome.outputs.len(),
        failed = outcome.failures.len(),
        "batch complete"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::test_support::daily;
    use crate::progress::NoProgress;

    #[test]
    fn every_kind_in_order() {
        let obs = daily("A", &[Some(1.0), Some(2.0), Some(3.0), Some(5.0), Some(4.0)]);
        let outcome = run_all(&obs, &["A".to_string()], &AnalysisConfig::default(), &NoProgress);

        assert!(outcome.is_complete());
        let kinds: Vec<AnalysisKind> = outcome.outputs.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, AnalysisKind::ALL);
        assert!(outcome.output(AnalysisKind::Trend).unwrap().table.is_empty());
    }

    #[test]
    fn failures_are_collected() {
        let outcome = run_all(&[], &[], &AnalysisConfig::default(), &NoProgress);
        assert!(outcome.outputs.is_empty());
        assert_eq!(outcome.failures.len(), AnalysisKind::ALL.len());
        assert!(
            outcome
                .failures
                .iter()
                .all(|(_, e)| *e == AnalysisError::NoStationSelected)
        );
    }
}
