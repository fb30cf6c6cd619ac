use std::io::Cursor;

use anyhow::Context;
use image::ImageDecoder;

use crate::{
    encode::OutputFormat,
    foundation::{
        core::{Size, premultiply_rgba8_in_place},
        error::{PipelineError, PipelineResult},
    },
    geometry::Rotation,
    render::image_paint_from_premul,
};

/// A decoded source ready to be composited.
#[derive(Clone)]
pub struct SourceImage {
    /// Natural pixel size (before orientation correction).
    pub size: Size,
    /// Codec format the bytes arrived in, when the encoder can write it back.
    pub format: Option<OutputFormat>,
    /// Rotation implied by embedded orientation metadata.
    pub rotation: Rotation,
    pub(crate) paint: vello_cpu::Image,
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("size", &self.size)
            .field("format", &self.format)
            .field("rotation", &self.rotation)
            .finish_non_exhaustive()
    }
}

impl SourceImage {
    /// Wrap an already-decoded straight-alpha image.
    pub fn from_rgba(
        rgba: image::RgbaImage,
        format: Option<OutputFormat>,
        rotation: Rotation,
    ) -> PipelineResult<Self> {
        let (width, height) = rgba.dimensions();
        let size = Size::new(width, height);
        if size.is_empty() {
            return Err(PipelineError::unsupported_source("decoded image has no pixels"));
        }
        let mut rgba8_premul = rgba.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        let paint = image_paint_from_premul(&rgba8_premul, size)?;
        Ok(Self {
            size,
            format,
            rotation,
            paint,
        })
    }
}

/// Decode raster bytes, keeping the native format and orientation metadata.
pub fn decode_image(bytes: &[u8]) -> PipelineResult<SourceImage> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("sniff image format")?;
    let Some(native) = reader.format() else {
        return Err(PipelineError::unsupported_source(
            "bytes are not a recognized image format",
        ));
    };

    let mut decoder = reader
        .into_decoder()
        .map_err(|e| PipelineError::unsupported_source(format!("{native:?} decoder: {e}")))?;
    let orientation = decoder
        .orientation()
        .unwrap_or(image::metadata::Orientation::NoTransforms);
    let dyn_img = image::DynamicImage::from_decoder(decoder)
        .map_err(|e| PipelineError::unsupported_source(format!("decode {native:?}: {e}")))?;

    let format = OutputFormat::from_image_format(native);
    if format.is_none() {
        tracing::debug!(?native, "source format is decode-only");
    }
    SourceImage::from_rgba(dyn_img.to_rgba8(), format, Rotation::from_exif(orientation))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
