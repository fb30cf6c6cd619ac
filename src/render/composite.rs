use crate::{
    actions::FitMode,
    assets::SourceImage,
    foundation::error::PipelineResult,
    geometry::{self, Placement},
    render::Canvas,
};

/// Draw `source` onto `canvas` under `mode`, honouring the source's orientation.
///
/// Placement is computed in the rotated draw frame; the frame is then turned about the
/// canvas centre, so odd rotations land with swapped axes.
pub fn composite(
    canvas: &mut Canvas,
    source: &SourceImage,
    mode: FitMode,
) -> PipelineResult<Placement> {
    let placement = geometry::place(source.size, canvas.size(), mode, source.rotation)?;
    let frame = source.rotation.about_center(canvas.size());
    tracing::debug!(
        ?mode,
        rotation = source.rotation.degrees(),
        x = placement.x,
        y = placement.y,
        width = placement.width,
        height = placement.height,
        "compositing source"
    );
    canvas.draw_image(&source.paint, source.size, placement, frame);
    Ok(placement)
}
