//! Output geometry: canvas size resolution, clip masks, orientation and source placement.

mod mask;
mod orientation;
mod placement;
mod resolve;

pub use mask::build_mask;
pub use orientation::Rotation;
pub use placement::{Placement, draw_frame, place};
pub use resolve::resolve_dimensions;
