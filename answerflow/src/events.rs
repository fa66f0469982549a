//! Event sink trait and implementations.
//!
//! The pipeline emits lifecycle events (`pipeline.started`, `stage.started`,
//! `stage.completed`, `stage.failed`, `pipeline.completed`) through a sink.
//! The logging sink is the structured replacement for per-node state
//! printing.

use async_trait::async_trait;
use tracing::{debug, info, Level};

/// Trait for event sinks that can receive pipeline lifecycle events.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Emits an event asynchronously.
    ///
    /// # Arguments
    ///
    /// * `event_type` - The type of event (e.g., "stage.started")
    /// * `data` - Optional event payload
    async fn emit(&self, event_type: &str, data: Option<serde_json::Value>);

    /// Emits an event without blocking.
    ///
    /// This method must never panic; sinks log and suppress their own
    /// failures.
    fn try_emit(&self, event_type: &str, data: Option<serde_json::Value>);
}

/// An event sink that discards all events.
///
/// Used as the default when no sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event_type: &str, _data: Option<serde_json::Value>) {}

    fn try_emit(&self, _event_type: &str, _data: Option<serde_json::Value>) {}
}

/// An event sink that logs events through the tracing framework.
#[derive(Debug, Clone)]
pub struct LoggingEventSink {
    level: Level,
}

impl Default for LoggingEventSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingEventSink {
    /// Creates a new logging event sink with the specified level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level logging sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    /// Creates an info-level logging sink.
    #[must_use]
    pub fn info() -> Self {
        Self::new(Level::INFO)
    }

    fn log_event(&self, event_type: &str, data: &Option<serde_json::Value>) {
        let payload = data
            .as_ref()
            .map(std::string::ToString::to_string)
            .unwrap_or_default();

        if self.level == Level::DEBUG {
            debug!(event = event_type, %payload, "pipeline event");
        } else {
            info!(event = event_type, %payload, "pipeline event");
        }
    }
}

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.log_event(event_type, &data);
    }

    fn try_emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.log_event(event_type, &data);
    }
}

/// An event sink that records events in memory, for tests.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: std::sync::Mutex<Vec<(String, Option<serde_json::Value>)>>,
}

impl RecordingEventSink {
    /// Creates a new recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the event types recorded so far, in order.
    #[must_use]
    pub fn event_types(&self) -> Vec<String> {
        self.events
            .lock()
            .map(|e| e.iter().map(|(t, _)| t.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns the payload of the first event of the given type, if any.
    #[must_use]
    pub fn payload_of(&self, event_type: &str) -> Option<serde_json::Value> {
        self.events.lock().ok().and_then(|events| {
            events
                .iter()
                .find(|(t, _)| t == event_type)
                .and_then(|(_, data)| data.clone())
        })
    }
}

#[async_trait]
impl EventSink for RecordingEventSink {
    async fn emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.try_emit(event_type, data);
    }

    fn try_emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        if let Ok(mut events) = self.events.lock() {
            events.push((event_type.to_string(), data));
        }
    }
}
