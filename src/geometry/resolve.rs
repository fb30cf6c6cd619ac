use crate::{
    actions::{ActionSet, FitMode},
    foundation::{
        core::Size,
        error::{PipelineError, PipelineResult},
    },
};

/// Resolve the output canvas size for `source` under `actions`.
///
/// A single requested dimension derives the other from the source aspect ratio, no request
/// keeps the source size, and [`FitMode::Max`] then shrinks whichever side would overflow
/// the requested box. Derived sides truncate toward zero and are clamped to at least 1.
pub fn resolve_dimensions(source: Size, actions: &ActionSet) -> PipelineResult<Size> {
    if source.is_empty() {
        return Err(PipelineError::geometry(format!(
            "source has no pixels ({}x{})",
            source.width, source.height
        )));
    }
    actions.validate()?;

    let sw = f64::from(source.width);
    let sh = f64::from(source.height);

    let (mut width, mut height) = match (actions.width, actions.height) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => (w, to_dimension(f64::from(w) * (sh / sw), "height")?),
        (None, Some(h)) => (to_dimension(f64::from(h) * (sw / sh), "width")?, h),
        (None, None) => (source.width, source.height),
    };

    if actions.effective_fit_mode() == FitMode::Max {
        let ratio = sw / sh;
        let w = f64::from(width);
        let h = f64::from(height);
        if w / ratio <= h {
            height = to_dimension(w / ratio, "height")?;
        } else {
            width = to_dimension(h * ratio, "width")?;
        }
    }

    let resolved = Size::new(width, height);
    tracing::debug!(
        source_width = source.width,
        source_height = source.height,
        width,
        height,
        "resolved output dimensions"
    );
    Ok(resolved)
}

fn to_dimension(value: f64, axis: &str) -> PipelineResult<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(PipelineError::geometry(format!(
            "derived {axis} {value} is not a representable pixel count"
        )));
    }
    Ok((value as u32).max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolve.rs"]
mod tests;
