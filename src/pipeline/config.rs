use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    encode::QualityTable,
    foundation::{
        core::Size,
        error::{PipelineError, PipelineResult},
    },
};

/// Default rounded-rectangle corner radius in pixels.
pub const DEFAULT_CORNER_RADIUS: u32 = 10;
/// Default edge length of a generated placeholder canvas.
pub const DEFAULT_VIRTUAL_EDGE: u32 = 100;

/// Process-wide settings, fixed when an [`ImagePipeline`](crate::ImagePipeline) is built.
///
/// Every field has a default, so a config file only needs the values it overrides:
///
/// ```json
/// { "quality": { "jpeg": 80 }, "corner_radius": 16, "threads": 4 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Encode quality per lossy format; formats not listed encode at 100.
    pub quality: QualityTable,
    /// Radius used when a rounded rectangle is requested without one.
    pub corner_radius: u32,
    /// Size of the generated placeholder before dimensions are resolved.
    pub virtual_size: Size,
    /// Font for text overlays. Discovered from the environment when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// Batch worker count; rayon picks one per core when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quality: QualityTable::default(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            virtual_size: Size::new(DEFAULT_VIRTUAL_EDGE, DEFAULT_VIRTUAL_EDGE),
            font_path: None,
            threads: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> PipelineResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PipelineError::invalid_input(format!("parse pipeline config JSON: {e}")))
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> PipelineResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PipelineError::invalid_input(format!("parse pipeline config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PipelineError::invalid_input(format!(
                "open pipeline config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> PipelineResult<()> {
        self.quality.validate()?;
        if self.virtual_size.is_empty() {
            return Err(PipelineError::invalid_input(format!(
                "virtual_size must be at least 1x1 (got {}x{})",
                self.virtual_size.width, self.virtual_size.height
            )));
        }
        if self.threads == Some(0) {
            return Err(PipelineError::invalid_input(
                "'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
