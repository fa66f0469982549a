//! Mock agents for testing.
//!
//! Scripted agents return a canned value and record every invocation;
//! failing agents always return an error. Both variants can share a sequence
//! log so tests can assert cross-agent call ordering.

use super::{ResearchAgent, WriterAgent, WriterRequest};
use crate::errors::AgentError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A shared log of agent invocations, in order.
pub type SequenceLog = Arc<Mutex<Vec<String>>>;

/// Mock research agent that returns a fixed context value.
#[derive(Debug)]
pub struct ScriptedResearchAgent {
    context: serde_json::Value,
    queries: Mutex<Vec<String>>,
    call_count: AtomicUsize,
    sequence: Option<SequenceLog>,
}

impl ScriptedResearchAgent {
    /// Creates a mock that always returns the given context.
    #[must_use]
    pub fn new(context: serde_json::Value) -> Self {
        Self {
            context,
            queries: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            sequence: None,
        }
    }

    /// Attaches a shared sequence log.
    #[must_use]
    pub fn with_sequence_log(mut self, log: SequenceLog) -> Self {
        self.sequence = Some(log);
        self
    }

    /// Returns the number of invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Returns the queries received so far.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ResearchAgent for ScriptedResearchAgent {
    async fn invoke(&self, query: &str) -> Result<serde_json::Value, AgentError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        if let Some(log) = &self.sequence {
            if let Ok(mut log) = log.lock() {
                log.push("research".to_string());
            }
        }
        Ok(self.context.clone())
    }
}

/// Mock writer agent that returns a fixed answer.
#[derive(Debug)]
pub struct ScriptedWriterAgent {
    answer: String,
    requests: Mutex<Vec<WriterRequest>>,
    call_count: AtomicUsize,
    sequence: Option<SequenceLog>,
}

impl ScriptedWriterAgent {
    /// Creates a mock that always returns the given answer.
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            sequence: None,
        }
    }

    /// Attaches a shared sequence log.
    #[must_use]
    pub fn with_sequence_log(mut self, log: SequenceLog) -> Self {
        self.sequence = Some(log);
        self
    }

    /// Returns the number of invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Returns the requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<WriterRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl WriterAgent for ScriptedWriterAgent {
    async fn invoke(&self, request: WriterRequest) -> Result<String, AgentError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.sequence {
            if let Ok(mut log) = log.lock() {
                log.push("writer".to_string());
            }
        }
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        Ok(self.answer.clone())
    }
}

/// Mock research agent that always fails.
#[derive(Debug)]
pub struct FailingResearchAgent {
    message: String,
}

impl FailingResearchAgent {
    /// Creates a mock that fails with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ResearchAgent for FailingResearchAgent {
    async fn invoke(&self, _query: &str) -> Result<serde_json::Value, AgentError> {
        Err(AgentError::new("research", self.message.clone()))
    }
}

/// Mock writer agent that always fails.
#[derive(Debug)]
pub struct FailingWriterAgent {
    message: String,
}

impl FailingWriterAgent {
    /// Creates a mock that fails with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl WriterAgent for FailingWriterAgent {
    async fn invoke(&self, _request: WriterRequest) -> Result<String, AgentError> {
        Err(AgentError::new("writer", self.message.clone()))
    }
}
