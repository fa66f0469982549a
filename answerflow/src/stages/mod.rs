//! Stage trait and the two pipeline stages.
//!
//! Stages are the units of work in an answerflow pipeline. Each stage checks
//! that its required state keys are present, invokes its agent capability,
//! and returns the input state plus the single key it owns.

mod research;
mod writer;

pub use research::ResearchStage;
pub use writer::WriterStage;

use crate::errors::AnswerflowError;
use crate::state::PipelineState;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait for pipeline stages.
#[async_trait]
pub trait Stage: Send + Sync + Debug {
    /// Returns the name of the stage.
    fn name(&self) -> &str;

    /// Executes the stage, consuming the incoming state and returning it
    /// with the stage's output key added.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing from the state or the
    /// stage's agent capability fails.
    async fn run(&self, state: PipelineState) -> Result<PipelineState, AnswerflowError>;
}
