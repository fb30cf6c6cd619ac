use image::metadata::Orientation;

use crate::foundation::core::{Affine, Point, Size};

/// Canvas rotation derived from embedded orientation metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Upright.
    #[default]
    None,
    /// Quarter turn clockwise.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three quarter turns clockwise.
    Deg270,
}

impl Rotation {
    /// Collapse EXIF orientation onto four rotations; mirroring is never applied.
    ///
    /// Transposed variants rotate like their plain quarter turns. A lone horizontal mirror
    /// (tag 2) rotates a half turn and a lone vertical mirror (tag 4) is left upright.
    pub fn from_exif(orientation: Orientation) -> Self {
        match orientation {
            Orientation::NoTransforms | Orientation::FlipVertical => Self::None,
            Orientation::FlipHorizontal | Orientation::Rotate180 => Self::Deg180,
            Orientation::Rotate90 | Orientation::Rotate90FlipH => Self::Deg90,
            Orientation::Rotate270 | Orientation::Rotate270FlipH => Self::Deg270,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// 90 and 270 swap the draw axes.
    pub fn is_odd(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Clockwise rotation about the (integer) canvas centre.
    pub fn about_center(self, canvas: Size) -> Affine {
        if self == Self::None {
            return Affine::IDENTITY;
        }
        let center = Point::new(f64::from(canvas.width / 2), f64::from(canvas.height / 2));
        Affine::rotate_about(f64::from(self.degrees()).to_radians(), center)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/orientation.rs"]
mod tests;
