use crate::{
    foundation::{
        core::{Point, Rgba8, Size},
        error::PipelineResult,
    },
    render::Canvas,
    text::{FontAsset, TextLayoutEngine},
};

/// Starting font size as a fraction of canvas height.
pub const INITIAL_SIZE_RATIO: f64 = 0.85;
/// Widest the text may be as a fraction of canvas width.
pub const MAX_WIDTH_RATIO: f64 = 0.75;

/// Single-pass autofit: start at 85% of the canvas height and, if the measured width
/// exceeds 75% of the canvas width, scale once by `max_width / measured`.
///
/// Sizes are truncated to whole pixels and never drop below 1. The result is not re-measured.
pub fn autofit_font_size(
    canvas: Size,
    mut measure: impl FnMut(f32) -> PipelineResult<f32>,
) -> PipelineResult<f32> {
    let initial = ((f64::from(canvas.height) * INITIAL_SIZE_RATIO) as u32).max(1);
    let measured = f64::from(measure(initial as f32)?);
    let max_width = f64::from(canvas.width) * MAX_WIDTH_RATIO;

    let size = if measured > max_width {
        (((max_width / measured) * f64::from(initial)) as u32).max(1)
    } else {
        initial
    };
    Ok(size as f32)
}

/// Draw `text` centred on `canvas` at an autofit size.
pub fn draw_text(
    canvas: &mut Canvas,
    font: &FontAsset,
    text: &str,
    color: Rgba8,
) -> PipelineResult<()> {
    let size = canvas.size();
    let mut engine = TextLayoutEngine::new(font)?;
    let font_size = autofit_font_size(size, |px| engine.measure_width(text, px))?;
    let layout = engine.layout_line(text, font_size, color)?;

    let origin = Point::new(
        (f64::from(size.width) - f64::from(layout.width())) / 2.0,
        (f64::from(size.height) - f64::from(layout.height())) / 2.0,
    );
    tracing::debug!(font_size, x = origin.x, y = origin.y, "drawing overlay text");

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            canvas.fill_glyphs(
                font.raster_font(),
                run.run().font_size(),
                run.style().brush,
                origin,
                glyphs,
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/overlay.rs"]
mod tests;
