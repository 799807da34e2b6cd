use std::time::Duration;

use serde::Serialize;

/// Tally of one batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Articles returned by the backlog query.
    pub fetched: usize,
    /// Articles dispatched to the pipeline.
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Subset of `successful` that were already persisted by an earlier run.
    pub already_analyzed: usize,
    /// The duration budget ran out before the backlog did.
    pub stopped_early: bool,
    pub duration: Duration,
}

impl BatchReport {
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.successful as f64 / self.total as f64 * 100.0
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Batch Run Complete ===")?;
        writeln!(f, "Articles fetched:   {}", self.fetched)?;
        writeln!(f, "Articles processed: {}", self.total)?;
        writeln!(
            f,
            "Successful:         {} ({:.0}%)",
            self.successful,
            self.success_rate()
        )?;
        if self.already_analyzed > 0 {
            writeln!(f, "  Already analyzed: {}", self.already_analyzed)?;
        }
        writeln!(f, "Failed:             {}", self.failed)?;
        writeln!(f, "Duration:           {:.1}s", self.duration.as_secs_f64())?;
        if self.stopped_early {
            writeln!(f, "\nStopped early: duration budget exhausted")?;
        }
        Ok(())
    }
}
