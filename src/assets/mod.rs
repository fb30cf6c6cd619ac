//! Source preparation: raster decode, color parsing and generated placeholders.

pub mod color;
mod decode;
mod virtual_image;

pub use decode::{SourceImage, decode_image};
pub use virtual_image::virtual_source;
