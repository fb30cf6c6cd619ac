//! imgactions turns a declarative [`ActionSet`] into an encoded image.
//!
//! One job decodes a raster image, renders a document page or generates a flat placeholder,
//! then resolves the output size, clips to a shape, composites the source under a fit mode,
//! optionally draws centred text and re-encodes. The API is pipeline-oriented:
//!
//! - Build an [`ImagePipeline`] from an immutable [`PipelineConfig`]
//! - Call [`ImagePipeline::process`] for one job, or [`ImagePipeline::process_batch`] to run
//!   many on the worker pool with results in input order
//! - From async code, use [`ImagePipeline::process_async`] to keep pixel work off the executor
//!
//! Paginated sources go through a [`DocumentBackend`] supplied by the host and wrapped in a
//! [`DocumentRasterizer`].
#![forbid(unsafe_code)]

mod foundation;

/// Action Set model and builder.
pub mod actions;
/// Source decoding, color resolution and placeholders.
pub mod assets;
/// Document backend contract and page rasterization.
pub mod document;
/// Output formats and the encoder.
pub mod encode;
/// Size resolution, masks, orientation and placement.
pub mod geometry;
/// Single-item pipeline, batch coordinator and config.
pub mod pipeline;
/// CPU canvas and compositor.
pub mod render;
/// Initials, fonts and text overlay.
pub mod text;

pub use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Size};
pub use crate::foundation::error::{DocumentError, PipelineError, PipelineResult};

pub use crate::actions::{ActionSet, ActionSetBuilder, FitMode, Shape};
pub use crate::assets::{SourceImage, decode_image};
pub use crate::document::{DocumentBackend, DocumentRasterizer, PageRasterizer, RasterizedPage};
pub use crate::encode::{OutputFormat, QualityTable, encode_canvas};
pub use crate::geometry::{Rotation, resolve_dimensions};
pub use crate::pipeline::{
    BatchError, ImagePipeline, ItemFailure, PipelineConfig, Source, Transformed,
};
pub use crate::text::{FontAsset, initials};
