//! Agent capability traits.
//!
//! The pipeline delegates all real work to two external capabilities: a
//! research agent that turns a query into context material, and a writer
//! agent that turns query plus context into a final answer. Both are opaque
//! collaborators; the pipeline imposes no retry policy and no expectations on
//! the shape of what they return.

mod mocks;

pub use mocks::{
    FailingResearchAgent, FailingWriterAgent, ScriptedResearchAgent, ScriptedWriterAgent,
    SequenceLog,
};

use crate::errors::AgentError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The input handed to the writer agent: the unmodified query together with
/// the exact context value the research agent produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WriterRequest {
    /// The user's query.
    pub query: String,
    /// The research agent's output.
    pub context: serde_json::Value,
}

impl WriterRequest {
    /// Creates a new writer request.
    #[must_use]
    pub fn new(query: impl Into<String>, context: serde_json::Value) -> Self {
        Self {
            query: query.into(),
            context,
        }
    }
}

/// An external capability that researches a query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResearchAgent: Send + Sync {
    /// Invokes the agent with the raw query, producing a context value.
    ///
    /// # Errors
    ///
    /// Returns an [`AgentError`] if the capability fails. The pipeline
    /// propagates it to the caller unmodified.
    async fn invoke(&self, query: &str) -> Result<serde_json::Value, AgentError>;
}

/// An external capability that writes the final answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WriterAgent: Send + Sync {
    /// Invokes the agent with the query and research context, producing the
    /// answer string.
    ///
    /// # Errors
    ///
    /// Returns an [`AgentError`] if the capability fails. The pipeline
    /// propagates it to the caller unmodified.
    async fn invoke(&self, request: WriterRequest) -> Result<String, AgentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_request_serialization() {
        let request = WriterRequest::new("q", serde_json::json!(["fact"]));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "query": "q", "context": ["fact"] })
        );
    }

    #[tokio::test]
    async fn test_automocked_research_agent() {
        let mut agent = MockResearchAgent::new();
        agent
            .expect_invoke()
            .withf(|query| query == "q")
            .times(1)
            .returning(|_| Ok(serde_json::json!("ctx")));

        let context = agent.invoke("q").await.unwrap();
        assert_eq!(context, serde_json::json!("ctx"));
    }
}
