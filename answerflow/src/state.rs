//! The typed pipeline state threaded through stages.
//!
//! The state starts as just a query and accumulates keys monotonically as it
//! passes through the pipeline: the research stage adds `context`, the writer
//! stage adds `answer`. Once a key is set it is never removed or overwritten;
//! the setters enforce this.

use crate::errors::StateConflictError;
use serde::{Deserialize, Serialize};

/// State carried through a single pipeline run.
///
/// Created fresh per run from the raw query and discarded after the final
/// answer is extracted. The `context` value is opaque to the pipeline; its
/// shape is whatever the research agent produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineState {
    /// The user's query. Present from the start, never mutated.
    query: String,
    /// Research output, set by the research stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<serde_json::Value>,
    /// Final answer, set by the writer stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
}

impl PipelineState {
    /// Creates a fresh state holding only the query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: None,
            answer: None,
        }
    }

    /// Returns the query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the research context, if set.
    #[must_use]
    pub fn context(&self) -> Option<&serde_json::Value> {
        self.context.as_ref()
    }

    /// Returns the answer, if set.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// Sets the research context.
    ///
    /// # Errors
    ///
    /// Returns a [`StateConflictError`] if `context` is already set.
    pub fn set_context(&mut self, context: serde_json::Value) -> Result<(), StateConflictError> {
        if self.context.is_some() {
            return Err(StateConflictError::new("context"));
        }
        self.context = Some(context);
        Ok(())
    }

    /// Sets the final answer.
    ///
    /// # Errors
    ///
    /// Returns a [`StateConflictError`] if `answer` is already set.
    pub fn set_answer(&mut self, answer: impl Into<String>) -> Result<(), StateConflictError> {
        if self.answer.is_some() {
            return Err(StateConflictError::new("answer"));
        }
        self.answer = Some(answer.into());
        Ok(())
    }

    /// Returns the names of the keys currently set, for event payloads.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec!["query"];
        if self.context.is_some() {
            keys.push("context");
        }
        if self.answer.is_some() {
            keys.push("answer");
        }
        keys
    }
}
