#![deny(unsafe_code)]

pub mod pipeline;

pub use pipeline::{PipelineError, ReportPipeline};
