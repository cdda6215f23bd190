//! Progress reporting for long-running analyses.

use crate::kind::AnalysisKind;

/// Observer notified after each station is processed.
///
/// Must be `Sync` because the parallel path reports from worker threads.
pub trait Progress: Sync {
    /// `done` of `total` stations finished for `kind`.
    fn advance(&self, kind: AnalysisKind, done: usize, total: usize);
}

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&self, _kind: AnalysisKind, _done: usize, _total: usize) {}
}
