//! The writer stage.

use super::Stage;
use crate::agents::{WriterAgent, WriterRequest};
use crate::errors::{AnswerflowError, MissingKeyError};
use crate::state::PipelineState;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Name of the writer stage.
pub const WRITER_STAGE: &str = "writer";

/// Stage that invokes the writer agent with the query and research context
/// and adds the resulting `answer` to the state.
pub struct WriterStage {
    agent: Arc<dyn WriterAgent>,
}

impl WriterStage {
    /// Creates a new writer stage backed by the given agent.
    #[must_use]
    pub fn new(agent: Arc<dyn WriterAgent>) -> Self {
        Self { agent }
    }
}

impl std::fmt::Debug for WriterStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterStage").finish_non_exhaustive()
    }
}

#[async_trait]
impl Stage for WriterStage {
    fn name(&self) -> &str {
        WRITER_STAGE
    }

    async fn run(&self, mut state: PipelineState) -> Result<PipelineState, AnswerflowError> {
        debug!(stage = WRITER_STAGE, keys = ?state.keys(), "stage received state");

        if state.query().trim().is_empty() {
            return Err(MissingKeyError::new(WRITER_STAGE, "query").into());
        }
        let Some(context) = state.context() else {
            return Err(MissingKeyError::new(WRITER_STAGE, "context").into());
        };

        let request = WriterRequest::new(state.query(), context.clone());
        let answer = self.agent.invoke(request).await?;
        state.set_answer(answer)?;

        debug!(stage = WRITER_STAGE, keys = ?state.keys(), "stage returning state");
        Ok(state)
    }
}
