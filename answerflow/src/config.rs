//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Fallback string returned when a run completes without producing an answer.
pub const DEFAULT_FALLBACK_ANSWER: &str = "No answer found";

/// Configuration for a pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// The pipeline name, used in events and spans.
    pub name: String,
    /// String returned by the driver when no answer was produced.
    pub fallback_answer: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            name: "research-pipeline".to_string(),
            fallback_answer: DEFAULT_FALLBACK_ANSWER.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pipeline name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the fallback answer.
    #[must_use]
    pub fn with_fallback_answer(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_answer = fallback.into();
        self
    }
}
