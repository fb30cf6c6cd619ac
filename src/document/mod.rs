//! Paginated sources: the document-rendering contract, scoped handle release, the bitmap
//! container handed to the raster codec, and the page rasterizer the pipeline calls.

mod backend;
mod bitmap;
mod guard;
mod rasterize;

pub use backend::DocumentBackend;
pub use bitmap::{HEADER_LEN as BITMAP_HEADER_LEN, encode_bitmap_container};
pub use rasterize::{DocumentRasterizer, PageRasterizer, RasterizedPage, select_page};
