use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::foundation::error::{PipelineError, PipelineResult};

/// Environment override for the overlay font file.
pub const FONT_PATH_ENV: &str = "IMGACTIONS_FONT_PATH";

/// Common system locations probed when nothing is configured.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Font file loaded once and shared read-only by every job.
#[derive(Clone)]
pub struct FontAsset {
    path: PathBuf,
    layout_blob: parley::fontique::Blob<u8>,
    raster_font: vello_cpu::peniko::FontData,
    len: usize,
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset")
            .field("path", &self.path)
            .field("len", &self.len)
            .finish()
    }
}

impl FontAsset {
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> PipelineResult<Self> {
        if bytes.is_empty() {
            return Err(PipelineError::invalid_input("font file is empty"));
        }
        let len = bytes.len();
        Ok(Self {
            path: path.into(),
            layout_blob: parley::fontique::Blob::from(bytes.clone()),
            raster_font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
            len,
        })
    }

    pub fn load(path: &Path) -> PipelineResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            PipelineError::invalid_input(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(path, bytes)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn layout_blob(&self) -> parley::fontique::Blob<u8> {
        self.layout_blob.clone()
    }

    pub(crate) fn raster_font(&self) -> &vello_cpu::peniko::FontData {
        &self.raster_font
    }
}

/// Locate the overlay font: explicit path, then [`FONT_PATH_ENV`], then system candidates.
///
/// An explicit or environment path that cannot be read is an error; missing candidates are
/// skipped. `Ok(None)` means no font is available.
pub fn discover_font(explicit: Option<&Path>) -> PipelineResult<Option<FontAsset>> {
    discover_font_from(
        explicit,
        std::env::var_os(FONT_PATH_ENV),
        SYSTEM_FONT_CANDIDATES,
    )
}

pub(crate) fn discover_font_from(
    explicit: Option<&Path>,
    env_path: Option<OsString>,
    candidates: &[&str],
) -> PipelineResult<Option<FontAsset>> {
    // 1. Configured path
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading overlay font from config");
        return FontAsset::load(path).map(Some);
    }

    // 2. Environment override
    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        debug!(path = %path.display(), "loading overlay font from IMGACTIONS_FONT_PATH");
        return FontAsset::load(&path).map(Some);
    }

    // 3. Well-known system locations
    for candidate in candidates {
        let path = Path::new(candidate);
        if !path.is_file() {
            continue;
        }
        match FontAsset::load(path) {
            Ok(font) => {
                debug!(path = %path.display(), "loaded overlay font from system candidate");
                return Ok(Some(font));
            }
            Err(e) => debug!(path = %path.display(), error = %e, "skipping font candidate"),
        }
    }

    debug!("no overlay font available");
    Ok(None)
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
