use std::fmt;
use std::str::FromStr;

use crate::foundation::error::PipelineError;

/// Target encoding for the finished canvas.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Portable Network Graphics.
    Png,
    /// JPEG (lossy, no alpha).
    Jpeg,
    /// GIF (palette quantized).
    Gif,
    /// Windows bitmap.
    Bmp,
    /// Windows icon (max 256x256).
    Ico,
    /// WebP (lossless).
    #[serde(rename = "webp")]
    WebP,
    /// TIFF.
    Tiff,
    /// Truevision TGA.
    Tga,
    /// Quite OK Image format.
    Qoi,
}

impl OutputFormat {
    /// Every format the encoder can write.
    pub const ALL: [OutputFormat; 9] = [
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::Gif,
        OutputFormat::Bmp,
        OutputFormat::Ico,
        OutputFormat::WebP,
        OutputFormat::Tiff,
        OutputFormat::Tga,
        OutputFormat::Qoi,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Gif => "gif",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Ico => "ico",
            OutputFormat::WebP => "webp",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Tga => "tga",
            OutputFormat::Qoi => "qoi",
        }
    }

    /// Preferred file extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            other => other.as_str(),
        }
    }

    /// MIME type suitable for a `Content-Type` header.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Gif => "image/gif",
            OutputFormat::Bmp => "image/bmp",
            OutputFormat::Ico => "image/x-icon",
            OutputFormat::WebP => "image/webp",
            OutputFormat::Tiff => "image/tiff",
            OutputFormat::Tga => "image/x-tga",
            OutputFormat::Qoi => "image/qoi",
        }
    }

    /// Whether the format carries a lossy quality knob.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg | OutputFormat::Gif)
    }

    pub(crate) fn to_image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Gif => image::ImageFormat::Gif,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
            OutputFormat::Ico => image::ImageFormat::Ico,
            OutputFormat::WebP => image::ImageFormat::WebP,
            OutputFormat::Tiff => image::ImageFormat::Tiff,
            OutputFormat::Tga => image::ImageFormat::Tga,
            OutputFormat::Qoi => image::ImageFormat::Qoi,
        }
    }

    /// Map a decoder-reported format onto an encodable one.
    pub(crate) fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        Some(match format {
            image::ImageFormat::Png => OutputFormat::Png,
            image::ImageFormat::Jpeg => OutputFormat::Jpeg,
            image::ImageFormat::Gif => OutputFormat::Gif,
            image::ImageFormat::Bmp => OutputFormat::Bmp,
            image::ImageFormat::Ico => OutputFormat::Ico,
            image::ImageFormat::WebP => OutputFormat::WebP,
            image::ImageFormat::Tiff => OutputFormat::Tiff,
            image::ImageFormat::Tga => OutputFormat::Tga,
            image::ImageFormat::Qoi => OutputFormat::Qoi,
            _ => return None,
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PipelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            "bmp" => Ok(OutputFormat::Bmp),
            "ico" => Ok(OutputFormat::Ico),
            "webp" => Ok(OutputFormat::WebP),
            "tiff" | "tif" => Ok(OutputFormat::Tiff),
            "tga" => Ok(OutputFormat::Tga),
            "qoi" => Ok(OutputFormat::Qoi),
            other => Err(PipelineError::invalid_input(format!(
                "unsupported output format '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/format.rs"]
mod tests;
