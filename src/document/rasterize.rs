use tracing::debug;

use crate::{
    assets::SourceImage,
    document::{
        DocumentBackend, encode_bitmap_container,
        guard::{BitmapGuard, DocumentGuard, PageGuard},
    },
    foundation::{
        core::Size,
        error::{DocumentError, PipelineError, PipelineResult},
    },
    geometry::Rotation,
};

/// One rasterized document page, wrapped in a bitmap container.
#[derive(Clone, Debug)]
pub struct RasterizedPage {
    /// Bitmap container bytes (header + bottom-up rows).
    pub container: Vec<u8>,
    /// Rendered pixel size.
    pub size: Size,
    /// Zero-based page that was rendered.
    pub page_index: usize,
    pub page_count: usize,
}

impl RasterizedPage {
    /// Decode the container into a compositing source. Pages carry no native output format.
    pub fn to_source(&self) -> PipelineResult<SourceImage> {
        let decoded = image::load_from_memory_with_format(&self.container, image::ImageFormat::Bmp)
            .map_err(|e| DocumentError::Render(format!("page bitmap did not decode: {e}")))?;
        SourceImage::from_rgba(decoded.to_rgba8(), None, Rotation::None)
    }
}

/// Object-safe entry point the pipeline uses for paginated sources.
pub trait PageRasterizer: Send + Sync {
    /// Render the 1-based `page` (first page when absent or out of range).
    fn rasterize(
        &self,
        bytes: &[u8],
        page: Option<u32>,
        password: Option<&str>,
    ) -> PipelineResult<RasterizedPage>;
}

/// Map a 1-based request onto a zero-based index, falling back to the first page.
pub fn select_page(requested: Option<u32>, page_count: usize) -> usize {
    match requested {
        Some(p) if p >= 1 && (p as usize) <= page_count => p as usize - 1,
        _ => 0,
    }
}

/// [`PageRasterizer`] over any [`DocumentBackend`], with scoped handle release.
pub struct DocumentRasterizer<B> {
    backend: B,
}

impl<B: DocumentBackend> DocumentRasterizer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: DocumentBackend> PageRasterizer for DocumentRasterizer<B> {
    #[tracing::instrument(level = "debug", skip(self, bytes, password), fields(len = bytes.len()))]
    fn rasterize(
        &self,
        bytes: &[u8],
        page: Option<u32>,
        password: Option<&str>,
    ) -> PipelineResult<RasterizedPage> {
        let backend = &self.backend;
        let document = DocumentGuard::new(backend, backend.load_document(bytes, password)?);

        let page_count = backend.page_count(document.handle());
        if page_count == 0 {
            return Err(DocumentError::NoPages.into());
        }
        let page_index = select_page(page, page_count);
        if page.is_some_and(|p| p as usize != page_index + 1) {
            debug!(requested = ?page, page_count, "page out of range, using first page");
        }

        let loaded = backend
            .load_page(document.handle(), page_index)
            .map_err(|e| match e {
                DocumentError::PageLoad { .. } => e,
                _ => DocumentError::PageLoad { index: page_index },
            })?;
        let page_handle = PageGuard::new(backend, loaded);

        let (page_w, page_h) = backend.page_size(page_handle.handle());
        let size = page_pixel_size(page_w, page_h)?;

        let bitmap = BitmapGuard::new(
            backend,
            backend.render_page(page_handle.handle(), size.width, size.height)?,
        );
        let (pixels, stride) = bitmap.pixels();
        let container = encode_bitmap_container(pixels, stride, size.width, size.height)?;

        debug!(page_index, page_count, width = size.width, height = size.height, "page rasterized");
        Ok(RasterizedPage {
            container,
            size,
            page_index,
            page_count,
        })
    }
}

/// One pixel per page unit, truncated.
fn page_pixel_size(width: f32, height: f32) -> PipelineResult<Size> {
    let to_px = |v: f32| -> Option<u32> {
        (v.is_finite() && v >= 1.0 && v <= u32::MAX as f32).then_some(v as u32)
    };
    match (to_px(width), to_px(height)) {
        (Some(w), Some(h)) => Ok(Size::new(w, h)),
        _ => Err(PipelineError::from(DocumentError::Render(format!(
            "page size {width}x{height} is not renderable"
        )))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/rasterize.rs"]
mod tests;
