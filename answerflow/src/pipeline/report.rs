//! Run and stage reports.

use crate::state::PipelineState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a single stage execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// Stage completed successfully.
    Completed,
    /// Stage failed.
    Failed,
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Timing and outcome of one stage within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    /// Stage name.
    pub name: String,
    /// Stage status.
    pub status: StageStatus,
    /// When the stage started.
    pub started_at: DateTime<Utc>,
    /// When the stage ended.
    pub ended_at: DateTime<Utc>,
    /// Error message if the stage failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageReport {
    /// Creates a completed stage report, ending now.
    #[must_use]
    pub fn completed(name: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            status: StageStatus::Completed,
            started_at,
            ended_at: Utc::now(),
            error: None,
        }
    }

    /// Creates a failed stage report, ending now.
    #[must_use]
    pub fn failed(
        name: impl Into<String>,
        started_at: DateTime<Utc>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: StageStatus::Failed,
            started_at,
            ended_at: Utc::now(),
            error: Some(error.into()),
        }
    }

    /// Returns the stage duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        (self.ended_at - self.started_at).num_milliseconds() as f64
    }

    /// Returns true if the stage completed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, StageStatus::Completed)
    }
}

/// The full result of a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique id of this run.
    pub run_id: Uuid,
    /// Name of the pipeline that produced the run.
    pub pipeline: String,
    /// Per-stage reports, in execution order.
    pub stages: Vec<StageReport>,
    /// The final state after the last stage.
    pub state: PipelineState,
    /// Total run duration in milliseconds.
    pub duration_ms: f64,
}

impl RunReport {
    /// Returns the answer from the final state, if one was produced.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        self.state.answer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_report() {
        let report = StageReport::completed("research", Utc::now());

        assert_eq!(report.name, "research");
        assert!(report.is_success());
        assert!(report.error.is_none());
        assert!(report.duration_ms() >= 0.0);
    }

    #[test]
    fn test_failed_report() {
        let report = StageReport::failed("writer", Utc::now(), "agent unavailable");

        assert!(!report.is_success());
        assert_eq!(report.error, Some("agent unavailable".to_string()));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StageStatus::Completed.to_string(), "completed");
        assert_eq!(StageStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_run_report_serialization() {
        let report = RunReport {
            run_id: Uuid::new_v4(),
            pipeline: "research-pipeline".to_string(),
            stages: vec![StageReport::completed("research", Utc::now())],
            state: PipelineState::new("q"),
            duration_ms: 1.5,
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();

        assert_eq!(back.run_id, report.run_id);
        assert_eq!(back.stages.len(), 1);
        assert_eq!(back.answer(), None);
    }
}
