use crate::{
    actions::ActionSet,
    assets::{SourceImage, color},
    foundation::{
        core::{Rgba8, Size},
        error::PipelineResult,
    },
    geometry::Rotation,
};

/// Flat placeholder source in the resolved virtual color.
///
/// The result has no native format, so output falls back to PNG unless one is requested.
pub fn virtual_source(actions: &ActionSet, size: Size) -> PipelineResult<SourceImage> {
    let fill = color::virtual_color(actions);
    tracing::debug!(?fill, width = size.width, height = size.height, "virtual source");
    solid_source(size, fill)
}

fn solid_source(size: Size, fill: Rgba8) -> PipelineResult<SourceImage> {
    let img = image::RgbaImage::from_pixel(
        size.width,
        size.height,
        image::Rgba([fill.r, fill.g, fill.b, fill.a]),
    );
    SourceImage::from_rgba(img, None, Rotation::None)
}
