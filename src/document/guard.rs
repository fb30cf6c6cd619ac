use crate::document::DocumentBackend;

/// Releases the document handle when dropped.
pub(crate) struct DocumentGuard<'b, B: DocumentBackend> {
    backend: &'b B,
    handle: B::Document,
}

impl<'b, B: DocumentBackend> DocumentGuard<'b, B> {
    pub(crate) fn new(backend: &'b B, handle: B::Document) -> Self {
        Self { backend, handle }
    }

    pub(crate) fn handle(&self) -> &B::Document {
        &self.handle
    }
}

impl<B: DocumentBackend> Drop for DocumentGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.release_document(&mut self.handle);
    }
}

/// Releases the page handle when dropped.
pub(crate) struct PageGuard<'b, B: DocumentBackend> {
    backend: &'b B,
    handle: B::Page,
}

impl<'b, B: DocumentBackend> PageGuard<'b, B> {
    pub(crate) fn new(backend: &'b B, handle: B::Page) -> Self {
        Self { backend, handle }
    }

    pub(crate) fn handle(&self) -> &B::Page {
        &self.handle
    }
}

impl<B: DocumentBackend> Drop for PageGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.release_page(&mut self.handle);
    }
}

/// Releases the native bitmap when dropped.
pub(crate) struct BitmapGuard<'b, B: DocumentBackend> {
    backend: &'b B,
    handle: B::Bitmap,
}

impl<'b, B: DocumentBackend> BitmapGuard<'b, B> {
    pub(crate) fn new(backend: &'b B, handle: B::Bitmap) -> Self {
        Self { backend, handle }
    }

    pub(crate) fn pixels(&self) -> (&[u8], usize) {
        self.backend.bitmap_pixels(&self.handle)
    }
}

impl<B: DocumentBackend> Drop for BitmapGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.release_bitmap(&mut self.handle);
    }
}
