//! The research stage.

use super::Stage;
use crate::agents::ResearchAgent;
use crate::errors::{AnswerflowError, MissingKeyError};
use crate::state::PipelineState;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Name of the research stage.
pub const RESEARCH_STAGE: &str = "research";

/// Stage that invokes the research agent with the query and adds the
/// resulting `context` to the state.
pub struct ResearchStage {
    agent: Arc<dyn ResearchAgent>,
}

impl ResearchStage {
    /// Creates a new research stage backed by the given agent.
    #[must_use]
    pub fn new(agent: Arc<dyn ResearchAgent>) -> Self {
        Self { agent }
    }
}

impl std::fmt::Debug for ResearchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchStage").finish_non_exhaustive()
    }
}

#[async_trait]
impl Stage for ResearchStage {
    fn name(&self) -> &str {
        RESEARCH_STAGE
    }

    async fn run(&self, mut state: PipelineState) -> Result<PipelineState, AnswerflowError> {
        debug!(stage = RESEARCH_STAGE, keys = ?state.keys(), "stage received state");

        // Boundary check happens before the agent is invoked.
        if state.query().trim().is_empty() {
            return Err(MissingKeyError::new(RESEARCH_STAGE, "query").into());
        }

        let context = self.agent.invoke(state.query()).await?;
        state.set_context(context)?;

        debug!(stage = RESEARCH_STAGE, keys = ?state.keys(), "stage returning state");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{FailingResearchAgent, ScriptedResearchAgent};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_research_stage_adds_context() {
        let agent = Arc::new(ScriptedResearchAgent::new(serde_json::json!("findings")));
        let stage = ResearchStage::new(agent.clone());

        let state = stage.run(PipelineState::new("What is Rust?")).await.unwrap();

        assert_eq!(state.query(), "What is Rust?");
        assert_eq!(state.context(), Some(&serde_json::json!("findings")));
        assert_eq!(agent.queries(), vec!["What is Rust?"]);
    }

    #[tokio::test]
    async fn test_blank_query_fails_before_agent_is_invoked() {
        let agent = Arc::new(ScriptedResearchAgent::new(serde_json::json!("findings")));
        let stage = ResearchStage::new(agent.clone());

        let err = stage.run(PipelineState::new("   ")).await.unwrap_err();

        match err {
            AnswerflowError::MissingKey(e) => {
                assert_eq!(e.stage, RESEARCH_STAGE);
                assert_eq!(e.key, "query");
            }
            other => panic!("expected missing key error, got {other:?}"),
        }
        assert_eq!(agent.call_count(), 0);
    }

    #[tokio::test]
    async fn test_agent_failure_propagates() {
        let stage = ResearchStage::new(Arc::new(FailingResearchAgent::new("rate limited")));

        let err = stage.run(PipelineState::new("q")).await.unwrap_err();

        assert!(matches!(err, AnswerflowError::Agent(_)));
        assert!(err.to_string().contains("rate limited"));
    }
}
