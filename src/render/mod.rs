//! CPU canvas and the compositor that places sources onto it.

mod canvas;
mod composite;

pub use canvas::Canvas;
pub(crate) use canvas::image_paint_from_premul;
pub use composite::composite;

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
