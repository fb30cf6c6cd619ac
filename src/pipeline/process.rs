use std::sync::Arc;

use tracing::debug;

use crate::{
    actions::ActionSet,
    assets::{self, SourceImage, color},
    document::PageRasterizer,
    encode::{self, OutputFormat},
    foundation::error::{PipelineError, PipelineResult},
    geometry,
    pipeline::PipelineConfig,
    render::{self, Canvas},
    text::{self, FontAsset},
};

const DOCUMENT_MAGIC: &[u8] = b"%PDF-";

/// Input for one transform job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Encoded raster bytes (PNG, JPEG, WebP, ...).
    Image(Vec<u8>),
    /// Paginated document bytes, rendered through the configured [`PageRasterizer`].
    Document(Vec<u8>),
    /// No bytes; a flat placeholder is generated from the actions.
    Virtual,
}

impl Source {
    /// Classify `bytes` by their leading signature.
    pub fn detect(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        if bytes.starts_with(DOCUMENT_MAGIC) {
            Self::Document(bytes)
        } else {
            Self::Image(bytes)
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Document(_) => "document",
            Self::Virtual => "virtual",
        }
    }
}

/// Successful job output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transformed {
    /// Encoded output.
    pub bytes: Vec<u8>,
    /// The request with `width`, `height` and `format` filled in.
    pub resolved: ActionSet,
}

impl Transformed {
    pub fn format(&self) -> OutputFormat {
        self.resolved.format.unwrap_or(OutputFormat::Png)
    }

    /// MIME type of [`Transformed::bytes`].
    pub fn content_type(&self) -> &'static str {
        self.format().mime_type()
    }
}

/// The transform pipeline: decode, resolve, clip, composite, overlay text, encode.
///
/// Built once from an immutable [`PipelineConfig`]; jobs share it read-only, so one
/// instance can serve many threads.
pub struct ImagePipeline {
    config: PipelineConfig,
    font: Option<FontAsset>,
    documents: Option<Arc<dyn PageRasterizer>>,
    pub(crate) pool: rayon::ThreadPool,
}

impl std::fmt::Debug for ImagePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePipeline")
            .field("config", &self.config)
            .field("font", &self.font.as_ref().map(FontAsset::path))
            .field("documents", &self.documents.is_some())
            .field("threads", &self.pool.current_num_threads())
            .finish()
    }
}

impl ImagePipeline {
    /// Validate `config`, build the batch worker pool and look up an overlay font.
    pub fn new(config: PipelineConfig) -> PipelineResult<Self> {
        config.validate()?;
        let pool = build_thread_pool(config.threads)?;
        let font = text::discover_font(config.font_path.as_deref())?;
        if font.is_none() {
            debug!("no overlay font found; text actions will be rejected");
        }
        Ok(Self {
            config,
            font,
            documents: None,
            pool,
        })
    }

    /// Route [`Source::Document`] inputs through `rasterizer`.
    pub fn with_documents(mut self, rasterizer: Arc<dyn PageRasterizer>) -> Self {
        self.documents = Some(rasterizer);
        self
    }

    /// Use `font` for text overlays instead of the discovered one.
    pub fn with_font(mut self, font: FontAsset) -> Self {
        self.font = Some(font);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn font(&self) -> Option<&FontAsset> {
        self.font.as_ref()
    }

    /// Run one job to completion on the calling thread.
    #[tracing::instrument(level = "debug", skip(self, source, actions), fields(source = source.kind()))]
    pub fn process(&self, source: &Source, actions: &ActionSet) -> PipelineResult<Transformed> {
        actions.validate()?;
        let decoded = self.load_source(source, actions)?;

        let size = geometry::resolve_dimensions(decoded.size, actions)?;
        let mut canvas = Canvas::new(size)?;

        let radius = actions.corner_radius.unwrap_or(self.config.corner_radius);
        if let Some(mask) = geometry::build_mask(size, actions.effective_shape(), radius) {
            canvas.clip_to(&mask)?;
        }

        render::composite(&mut canvas, &decoded, actions.effective_fit_mode())?;

        if let Some(raw) = actions.overlay_text() {
            let font = self.font.as_ref().ok_or_else(|| {
                PipelineError::invalid_input("text overlay requested but no font is available")
            })?;
            let shown = if actions.wants_initials() {
                text::initials(raw)
            } else {
                raw.to_owned()
            };
            if !shown.is_empty() {
                text::draw_text(&mut canvas, font, &shown, color::text_color(actions))?;
            }
        }

        let format = match (actions.format, decoded.format) {
            (Some(explicit), _) => explicit,
            (None, Some(native)) => {
                debug!(%native, "inheriting source format");
                native
            }
            (None, None) => OutputFormat::Png,
        };
        let quality = self.config.quality.quality_for(format);
        let bytes = encode::encode_canvas(&canvas.finish()?, format, quality)?;

        debug!(
            width = size.width,
            height = size.height,
            %format,
            len = bytes.len(),
            "job finished"
        );
        let mut resolved = actions.clone();
        resolved.width = Some(size.width);
        resolved.height = Some(size.height);
        resolved.format = Some(format);
        Ok(Transformed { bytes, resolved })
    }

    fn load_source(&self, source: &Source, actions: &ActionSet) -> PipelineResult<SourceImage> {
        if matches!(source, Source::Virtual) || actions.wants_virtual_image() {
            return assets::virtual_source(actions, self.config.virtual_size);
        }
        match source {
            Source::Image(bytes) => assets::decode_image(bytes),
            Source::Document(bytes) => {
                let rasterizer = self.documents.as_ref().ok_or_else(|| {
                    PipelineError::unsupported_source("no document renderer is configured")
                })?;
                rasterizer
                    .rasterize(bytes, actions.page, actions.document_password.as_deref())?
                    .to_source()
            }
            Source::Virtual => assets::virtual_source(actions, self.config.virtual_size),
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> PipelineResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PipelineError::invalid_input(
            "'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("imgactions-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PipelineError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/process.rs"]
mod tests;
