//! Pipeline assembly and the driver entry point.
//!
//! This module provides:
//! - A validating builder for the research → writer pipeline
//! - The sequential runner and driver (`Pipeline::answer`)
//! - Run and stage reports

mod builder;
mod report;
mod runner;

pub use builder::PipelineBuilder;
pub use report::{RunReport, StageReport, StageStatus};
pub use runner::Pipeline;
