//! Job orchestration: configuration, the single-item pipeline, the batch coordinator and
//! async offload.

mod batch;
mod config;
mod offload;
mod process;

pub use batch::{BatchError, ItemFailure};
pub use config::{DEFAULT_CORNER_RADIUS, DEFAULT_VIRTUAL_EDGE, PipelineConfig};
pub use process::{ImagePipeline, Source, Transformed};
