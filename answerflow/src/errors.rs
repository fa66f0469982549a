//! Error types for the answerflow pipeline.
//!
//! The in-pipeline taxonomy is deliberately small: a stage can fail because a
//! required state key is absent, a stage can trip the monotonic-state guard,
//! or an external agent can fail. Agent failures are carried opaquely and are
//! never retried or rewrapped by the pipeline.

use thiserror::Error;

/// The main error type for answerflow operations.
#[derive(Debug, Error)]
pub enum AnswerflowError {
    /// A required state key was absent at a stage boundary.
    #[error("{0}")]
    MissingKey(#[from] MissingKeyError),

    /// A stage attempted to overwrite a key that was already set.
    #[error("{0}")]
    StateConflict(#[from] StateConflictError),

    /// An external agent capability failed.
    #[error("{0}")]
    Agent(#[from] AgentError),

    /// The pipeline was assembled without a required component.
    #[error("{0}")]
    Build(#[from] PipelineBuildError),
}

/// Error raised when a stage's required input key is missing from the state.
#[derive(Debug, Clone, Error)]
#[error("Stage '{stage}' requires key '{key}' which is missing from the state")]
pub struct MissingKeyError {
    /// The stage that performed the check.
    pub stage: String,
    /// The missing key.
    pub key: String,
}

impl MissingKeyError {
    /// Creates a new missing key error.
    #[must_use]
    pub fn new(stage: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            key: key.into(),
        }
    }
}

/// Error raised when setting a state key that already holds a value.
///
/// State keys accumulate monotonically: once set, a key is never removed or
/// overwritten.
#[derive(Debug, Clone, Error)]
#[error("State conflict: key '{key}' already exists")]
pub struct StateConflictError {
    /// The conflicting key.
    pub key: String,
}

impl StateConflictError {
    /// Creates a new state conflict error.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Error raised by an external agent capability.
///
/// Agents are black boxes to the pipeline; their failures pass through the
/// driver to the caller without modification. The optional source preserves
/// the underlying cause for callers that want to inspect it.
#[derive(Debug, Error)]
#[error("Agent '{agent}' failed: {message}")]
pub struct AgentError {
    /// The agent that failed.
    pub agent: String,
    /// Description of the failure.
    pub message: String,
    /// The underlying cause, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AgentError {
    /// Creates a new agent error.
    #[must_use]
    pub fn new(agent: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }
}

/// Error raised when building a pipeline without its required agents.
#[derive(Debug, Clone, Error)]
#[error("Pipeline build failed: {message}")]
pub struct PipelineBuildError {
    /// The error message.
    pub message: String,
}

impl PipelineBuildError {
    /// Creates a new pipeline build error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_error_display() {
        let err = MissingKeyError::new("writer", "context");
        assert_eq!(
            err.to_string(),
            "Stage 'writer' requires key 'context' which is missing from the state"
        );
    }

    #[test]
    fn test_state_conflict_error_display() {
        let err = StateConflictError::new("answer");
        assert_eq!(err.to_string(), "State conflict: key 'answer' already exists");
    }

    #[test]
    fn test_agent_error_with_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "connect timeout");
        let err = AgentError::new("research", "request failed").with_source(Box::new(cause));

        assert_eq!(err.to_string(), "Agent 'research' failed: request failed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_key_converts_into_answerflow_error() {
        let err: AnswerflowError = MissingKeyError::new("research", "query").into();
        assert!(matches!(err, AnswerflowError::MissingKey(_)));
    }
}
