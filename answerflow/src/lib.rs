//! # Answerflow
//!
//! A two-stage research/writer answer pipeline.
//!
//! Answerflow threads a typed state (`query`, then `context`, then `answer`)
//! through two stages in strict sequence:
//!
//! - **Research stage**: invokes an external research agent with the query
//!   and adds the resulting context to the state.
//! - **Writer stage**: invokes an external writer agent with the query and
//!   context and adds the final answer.
//!
//! The agents are opaque collaborators behind the [`agents::ResearchAgent`]
//! and [`agents::WriterAgent`] traits; the pipeline applies no retries and no
//! output validation, and propagates their failures unmodified.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use answerflow::prelude::*;
//! use std::sync::Arc;
//!
//! let pipeline = PipelineBuilder::new()
//!     .research_agent(Arc::new(MyResearchAgent::new()))
//!     .writer_agent(Arc::new(MyWriterAgent::new()))
//!     .build()?;
//!
//! let answer = pipeline.answer("What is the capital of France?").await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod agents;
pub mod config;
pub mod errors;
pub mod events;
pub mod observability;
pub mod pipeline;
pub mod stages;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::agents::{ResearchAgent, WriterAgent, WriterRequest};
    pub use crate::config::{PipelineConfig, DEFAULT_FALLBACK_ANSWER};
    pub use crate::errors::{
        AgentError, AnswerflowError, MissingKeyError, PipelineBuildError, StateConflictError,
    };
    pub use crate::events::{EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::pipeline::{Pipeline, PipelineBuilder, RunReport, StageReport, StageStatus};
    pub use crate::stages::{ResearchStage, Stage, WriterStage};
    pub use crate::state::PipelineState;
}
