use crate::foundation::error::DocumentError;

/// Narrow contract over an external document-rendering library.
///
/// Handles are owned by the caller between acquisition and release. Every `release_*`
/// call receives the handle it must free; the adapter guarantees exactly one release per
/// successful acquisition, on success and failure paths alike.
pub trait DocumentBackend: Send + Sync {
    /// Open document handle.
    type Document;
    /// Loaded page handle.
    type Page;
    /// Native pixel buffer handle.
    type Bitmap;

    /// Open a document from memory. A wrong password or unreadable bytes is [`DocumentError::Load`].
    fn load_document(
        &self,
        bytes: &[u8],
        password: Option<&str>,
    ) -> Result<Self::Document, DocumentError>;

    fn page_count(&self, document: &Self::Document) -> usize;

    /// Load the zero-based page `index`.
    fn load_page(&self, document: &Self::Document, index: usize)
    -> Result<Self::Page, DocumentError>;

    /// Page width and height in page units.
    fn page_size(&self, page: &Self::Page) -> (f32, f32);

    /// Render `page` into a `width` x `height` native buffer.
    fn render_page(
        &self,
        page: &Self::Page,
        width: u32,
        height: u32,
    ) -> Result<Self::Bitmap, DocumentError>;

    /// Borrow the rendered pixels: 4 bytes per pixel (B, G, R, A), rows top to bottom,
    /// `stride` bytes apart.
    fn bitmap_pixels<'a>(&self, bitmap: &'a Self::Bitmap) -> (&'a [u8], usize);

    fn release_bitmap(&self, bitmap: &mut Self::Bitmap);

    fn release_page(&self, page: &mut Self::Page);

    fn release_document(&self, document: &mut Self::Document);
}
