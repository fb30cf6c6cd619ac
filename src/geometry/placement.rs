use crate::{
    actions::FitMode,
    foundation::{
        core::Size,
        error::{PipelineError, PipelineResult},
    },
    geometry::Rotation,
};

/// Where the source lands, in the (possibly rotated) draw frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Left edge; negative under zoom crops.
    pub x: i64,
    /// Top edge; negative under zoom crops.
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// The rectangle that covers the output canvas once `rotation` is applied.
///
/// Odd rotations draw into a `height x width` box offset by `(height - width) / 2` on one
/// axis and its negation on the other, so the rotated box lands on the canvas.
pub fn draw_frame(canvas: Size, rotation: Rotation) -> Placement {
    if rotation.is_odd() {
        let offset_y = (i64::from(canvas.height) - i64::from(canvas.width)) / 2;
        Placement {
            x: -offset_y,
            y: offset_y,
            width: canvas.height,
            height: canvas.width,
        }
    } else {
        Placement {
            x: 0,
            y: 0,
            width: canvas.width,
            height: canvas.height,
        }
    }
}

/// Place a `source`-sized image into `canvas` according to `mode`.
pub fn place(
    source: Size,
    canvas: Size,
    mode: FitMode,
    rotation: Rotation,
) -> PipelineResult<Placement> {
    if source.is_empty() {
        return Err(PipelineError::geometry("cannot place an empty source"));
    }
    let frame = draw_frame(canvas, rotation);

    let scale_x = f64::from(frame.width) / f64::from(source.width);
    let scale_y = f64::from(frame.height) / f64::from(source.height);
    let scale = match mode {
        FitMode::Stretch | FitMode::Max => return Ok(frame),
        FitMode::Fit => scale_x.min(scale_y),
        FitMode::Zoom => scale_x.max(scale_y),
    };

    let width = scaled(source.width, scale)?;
    let height = scaled(source.height, scale)?;
    Ok(Placement {
        x: frame.x + (i64::from(frame.width) - i64::from(width)) / 2,
        y: frame.y + (i64::from(frame.height) - i64::from(height)) / 2,
        width,
        height,
    })
}

fn scaled(dim: u32, scale: f64) -> PipelineResult<u32> {
    let v = f64::from(dim) * scale;
    if !v.is_finite() || v > f64::from(u32::MAX) {
        return Err(PipelineError::geometry(format!(
            "scaled dimension {v} overflows"
        )));
    }
    // Exact multiples must not truncate one short under float noise.
    Ok(((v + 1e-6) as u32).max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/placement.rs"]
mod tests;
