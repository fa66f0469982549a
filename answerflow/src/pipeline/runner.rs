//! Sequential pipeline execution.

use super::{RunReport, StageReport};
use crate::config::PipelineConfig;
use crate::errors::AnswerflowError;
use crate::events::EventSink;
use crate::stages::Stage;
use crate::state::PipelineState;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// A two-stage research/writer pipeline.
///
/// Execution is strictly sequential: the writer stage cannot start before the
/// research stage completes. Each run owns its own state, created from the
/// query and discarded once the answer is extracted, so concurrent callers
/// never share mutable data.
pub struct Pipeline {
    config: PipelineConfig,
    stages: Vec<Arc<dyn Stage>>,
    sink: Arc<dyn EventSink>,
}

impl Pipeline {
    pub(crate) fn new(
        config: PipelineConfig,
        stages: Vec<Arc<dyn Stage>>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            stages,
            sink,
        }
    }

    /// Returns the pipeline configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Returns the stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs the pipeline for a query and returns the full run report.
    ///
    /// # Errors
    ///
    /// Propagates the first stage error unmodified: a missing-key error from
    /// a stage boundary check, or whatever an agent capability failed with.
    /// No retry and no recovery happen here.
    pub async fn run(&self, query: impl Into<String>) -> Result<RunReport, AnswerflowError> {
        let run_id = Uuid::new_v4();
        let start = Instant::now();
        let mut state = PipelineState::new(query);

        debug!(%run_id, pipeline = %self.config.name, initial = ?state, "starting run");
        self.sink
            .emit(
                "pipeline.started",
                Some(serde_json::json!({
                    "pipeline": self.config.name,
                    "run_id": run_id,
                    "keys": state.keys(),
                })),
            )
            .await;

        let mut reports = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let stage_started = Utc::now();
            self.sink
                .emit(
                    "stage.started",
                    Some(serde_json::json!({ "stage": stage.name(), "run_id": run_id })),
                )
                .await;

            state = match stage.run(state).await {
                Ok(next) => {
                    let report = StageReport::completed(stage.name(), stage_started);
                    self.sink
                        .emit(
                            "stage.completed",
                            Some(serde_json::json!({
                                "stage": stage.name(),
                                "run_id": run_id,
                                "duration_ms": report.duration_ms(),
                                "keys": next.keys(),
                            })),
                        )
                        .await;
                    reports.push(report);
                    next
                }
                Err(err) => {
                    let report = StageReport::failed(stage.name(), stage_started, err.to_string());
                    self.sink
                        .emit(
                            "stage.failed",
                            Some(serde_json::json!({
                                "stage": stage.name(),
                                "run_id": run_id,
                                "duration_ms": report.duration_ms(),
                                "error": report.error,
                            })),
                        )
                        .await;
                    return Err(err);
                }
            };
        }

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(%run_id, final_state = ?state, "run finished");
        self.sink
            .emit(
                "pipeline.completed",
                Some(serde_json::json!({
                    "pipeline": self.config.name,
                    "run_id": run_id,
                    "duration_ms": duration_ms,
                    "keys": state.keys(),
                })),
            )
            .await;

        Ok(RunReport {
            run_id,
            pipeline: self.config.name.clone(),
            stages: reports,
            state,
            duration_ms,
        })
    }

    /// Runs the pipeline and returns the final answer.
    ///
    /// This is the driver entry point: it returns the `answer` produced by
    /// the writer stage, or the configured fallback string if the run
    /// completed without setting one.
    ///
    /// # Errors
    ///
    /// Propagates stage and agent errors to the caller; errors are never
    /// converted into the fallback string.
    pub async fn answer(&self, query: impl Into<String>) -> Result<String, AnswerflowError> {
        let report = self.run(query).await?;
        Ok(report
            .answer()
            .map_or_else(|| self.config.fallback_answer.clone(), ToString::to_string))
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("stages", &self.stage_names())
            .finish_non_exhaustive()
    }
}
