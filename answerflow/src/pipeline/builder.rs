//! Pipeline builder with validation.

use super::Pipeline;
use crate::agents::{ResearchAgent, WriterAgent};
use crate::config::PipelineConfig;
use crate::errors::PipelineBuildError;
use crate::events::{EventSink, NoOpEventSink};
use crate::stages::{ResearchStage, Stage, WriterStage};
use std::sync::Arc;

/// Builder for assembling a [`Pipeline`].
///
/// The pipeline is an explicit value: it is built here from its two agents
/// and passed around by the caller. There is no process-global pipeline
/// object.
#[derive(Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
    research: Option<Arc<dyn ResearchAgent>>,
    writer: Option<Arc<dyn WriterAgent>>,
    sink: Option<Arc<dyn EventSink>>,
}

impl PipelineBuilder {
    /// Creates a new builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pipeline configuration.
    #[must_use]
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the research agent.
    #[must_use]
    pub fn research_agent(mut self, agent: Arc<dyn ResearchAgent>) -> Self {
        self.research = Some(agent);
        self
    }

    /// Sets the writer agent.
    #[must_use]
    pub fn writer_agent(mut self, agent: Arc<dyn WriterAgent>) -> Self {
        self.writer = Some(agent);
        self
    }

    /// Sets the event sink. Defaults to [`NoOpEventSink`].
    #[must_use]
    pub fn event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds the pipeline: research stage followed by writer stage.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineBuildError`] if either agent is missing.
    pub fn build(self) -> Result<Pipeline, PipelineBuildError> {
        let research = self
            .research
            .ok_or_else(|| PipelineBuildError::new("a research agent is required"))?;
        let writer = self
            .writer
            .ok_or_else(|| PipelineBuildError::new("a writer agent is required"))?;

        let stages: Vec<Arc<dyn Stage>> = vec![
            Arc::new(ResearchStage::new(research)),
            Arc::new(WriterStage::new(writer)),
        ];
        let sink = self.sink.unwrap_or_else(|| Arc::new(NoOpEventSink));

        Ok(Pipeline::new(self.config, stages, sink))
    }
}

impl std::fmt::Debug for PipelineBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineBuilder")
            .field("config", &self.config)
            .field("has_research", &self.research.is_some())
            .field("has_writer", &self.writer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{ScriptedResearchAgent, ScriptedWriterAgent};

    #[test]
    fn test_build_requires_research_agent() {
        let err = PipelineBuilder::new()
            .writer_agent(Arc::new(ScriptedWriterAgent::new("a")))
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("research agent"));
    }

    #[test]
    fn test_build_requires_writer_agent() {
        let err = PipelineBuilder::new()
            .research_agent(Arc::new(ScriptedResearchAgent::new(serde_json::json!(1))))
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("writer agent"));
    }

    #[test]
    fn test_build_assembles_research_then_writer() {
        let pipeline = PipelineBuilder::new()
            .research_agent(Arc::new(ScriptedResearchAgent::new(serde_json::json!(1))))
            .writer_agent(Arc::new(ScriptedWriterAgent::new("a")))
            .build()
            .unwrap();

        assert_eq!(pipeline.stage_names(), vec!["research", "writer"]);
    }
}
