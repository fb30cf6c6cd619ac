//! Final-canvas serialization.
//!
//! The encoder takes a straight-alpha RGBA canvas and writes it through the `image` codecs.
//! Lossy formats read their quality from a [`QualityTable`]; every other format encodes at
//! maximum quality.

mod format;

use std::collections::BTreeMap;
use std::io::Cursor;

use anyhow::Context;
use image::ImageEncoder;

use crate::foundation::error::{PipelineError, PipelineResult};

pub use format::OutputFormat;

/// Quality used for any format absent from a [`QualityTable`].
pub const MAX_QUALITY: u8 = 100;

/// Mapping from output format to encode quality (1..=100).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct QualityTable(BTreeMap<OutputFormat, u8>);

impl Default for QualityTable {
    fn default() -> Self {
        Self(BTreeMap::from([
            (OutputFormat::Jpeg, 90),
            (OutputFormat::Gif, 90),
        ]))
    }
}

impl QualityTable {
    /// A table with no overrides; every format encodes at [`MAX_QUALITY`].
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Return a copy with `format` set to `quality`.
    pub fn with(mut self, format: OutputFormat, quality: u8) -> Self {
        self.0.insert(format, quality);
        self
    }

    pub fn quality_for(&self, format: OutputFormat) -> u8 {
        self.0.get(&format).copied().unwrap_or(MAX_QUALITY)
    }

    /// Formats with a configured quality their encoder has no knob for.
    pub fn ignored_formats(&self) -> Vec<OutputFormat> {
        self.0.keys().copied().filter(|f| !f.is_lossy()).collect()
    }

    pub(crate) fn validate(&self) -> PipelineResult<()> {
        for (format, q) in &self.0 {
            if !(1..=100).contains(q) {
                return Err(PipelineError::invalid_input(format!(
                    "quality for {format} must be within 1..=100 (got {q})"
                )));
            }
        }
        for format in self.ignored_formats() {
            tracing::warn!(%format, "quality is configured for a lossless format and is ignored");
        }
        Ok(())
    }
}

/// Map a 1..=100 quality onto the GIF quantizer speed (1 = best, 30 = fastest).
pub(crate) fn gif_speed_for_quality(quality: u8) -> i32 {
    let q = i32::from(quality.clamp(1, 100));
    1 + (100 - q) * 29 / 100
}

/// Encode a straight-alpha RGBA canvas.
#[tracing::instrument(
    level = "debug",
    skip(canvas),
    fields(width = canvas.width(), height = canvas.height())
)]
pub fn encode_canvas(
    canvas: &image::RgbaImage,
    format: OutputFormat,
    quality: u8,
) -> PipelineResult<Vec<u8>> {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return Err(PipelineError::encoding(format!(
            "cannot encode an empty {width}x{height} canvas as {format}"
        )));
    }

    let mut out = Vec::new();
    let result = match format {
        OutputFormat::Jpeg => {
            let rgb = flatten_over_black(canvas);
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
                .write_image(rgb.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        }
        OutputFormat::Gif => {
            let mut encoder = image::codecs::gif::GifEncoder::new_with_speed(
                &mut out,
                gif_speed_for_quality(quality),
            );
            let res = encoder.encode(
                canvas.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgba8,
            );
            drop(encoder);
            res
        }
        other => image::DynamicImage::ImageRgba8(canvas.clone())
            .write_to(&mut Cursor::new(&mut out), other.to_image_format()),
    };

    result
        .with_context(|| format!("{format} codec rejected {width}x{height} canvas"))
        .map_err(|e| PipelineError::encoding(format!("{e:#}")))?;
    Ok(out)
}

fn flatten_over_black(canvas: &image::RgbaImage) -> image::RgbImage {
    let (width, height) = canvas.dimensions();
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for px in canvas.pixels() {
        let [r, g, b, a] = px.0;
        let a = u16::from(a);
        for c in [r, g, b] {
            rgb.push(((u16::from(c) * a + 127) / 255) as u8);
        }
    }
    image::RgbImage::from_raw(width, height, rgb)
        .unwrap_or_else(|| image::RgbImage::new(width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/mod.rs"]
mod tests;
