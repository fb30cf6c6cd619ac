use kurbo::Shape as _;

use crate::{
    actions::Shape,
    foundation::core::{BezPath, Rect, Size},
};

const MASK_TOLERANCE: f64 = 0.1;

/// Build the clip outline for `shape` on a canvas of `size`, or `None` when nothing is clipped.
///
/// Circle centre and radius use integer halves of the canvas size.
pub fn build_mask(size: Size, shape: Shape, corner_radius: u32) -> Option<BezPath> {
    let w = f64::from(size.width);
    let h = f64::from(size.height);
    match shape {
        Shape::None => None,
        Shape::Circle => {
            let radius = f64::from(size.width.min(size.height) / 2);
            let center = kurbo::Point::new(f64::from(size.width / 2), f64::from(size.height / 2));
            Some(kurbo::Circle::new(center, radius).to_path(MASK_TOLERANCE))
        }
        Shape::Ellipse => {
            Some(kurbo::Ellipse::from_rect(Rect::new(0.0, 0.0, w, h)).to_path(MASK_TOLERANCE))
        }
        Shape::RoundedRectangle => Some(
            kurbo::RoundedRect::new(0.0, 0.0, w, h, f64::from(corner_radius))
                .to_path(MASK_TOLERANCE),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mask.rs"]
mod tests;
