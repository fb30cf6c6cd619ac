use std::sync::Arc;

use crate::{
    foundation::{
        core::{Affine, BezPath, Point, Rect, Rgba8, Size, unpremultiply_rgba8_in_place},
        error::{PipelineError, PipelineResult},
    },
    geometry::Placement,
};

/// Single-use drawing surface for one transform job.
///
/// Draw calls are recorded into a `vello_cpu` render context and rasterized once in
/// [`Canvas::finish`]. An optional clip layer stays open until then, so every later draw is
/// confined to it.
pub struct Canvas {
    ctx: vello_cpu::RenderContext,
    size: Size,
    clip_open: bool,
}

impl Canvas {
    pub fn new(size: Size) -> PipelineResult<Self> {
        if size.is_empty() {
            return Err(PipelineError::geometry(format!(
                "canvas must be at least 1x1 (got {}x{})",
                size.width, size.height
            )));
        }
        let (w, h) = size.to_u16()?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            size,
            clip_open: false,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Restrict all subsequent draws to `mask` (canvas space). Only one clip may be active.
    pub fn clip_to(&mut self, mask: &BezPath) -> PipelineResult<()> {
        if self.clip_open {
            return Err(PipelineError::geometry("canvas already has a clip layer"));
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.push_clip_layer(&bezpath_to_cpu(mask));
        self.clip_open = true;
        Ok(())
    }

    /// Fill the whole canvas with a flat color.
    pub fn fill(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.size.width),
            f64::from(self.size.height),
        ));
    }

    /// Draw `paint` stretched into `placement`, then mapped through `frame` (canvas space).
    pub(crate) fn draw_image(
        &mut self,
        paint: &vello_cpu::Image,
        natural: Size,
        placement: Placement,
        frame: Affine,
    ) {
        let sx = f64::from(placement.width) / f64::from(natural.width);
        let sy = f64::from(placement.height) / f64::from(natural.height);
        let transform = frame
            * Affine::translate((placement.x as f64, placement.y as f64))
            * Affine::scale_non_uniform(sx, sy);

        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint.clone());
        self.ctx.fill_rect(&rect_to_cpu(Rect::new(
            0.0,
            0.0,
            f64::from(natural.width),
            f64::from(natural.height),
        )));
    }

    /// Fill a positioned glyph run. Glyph coordinates are relative to `origin`.
    pub(crate) fn fill_glyphs(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        font_size: f32,
        color: Rgba8,
        origin: Point,
        glyphs: impl Iterator<Item = vello_cpu::Glyph>,
    ) {
        self.ctx
            .set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx
            .glyph_run(font)
            .font_size(font_size)
            .fill_glyphs(glyphs);
    }

    /// Rasterize everything recorded so far into a straight-alpha RGBA image.
    pub fn finish(mut self) -> PipelineResult<image::RgbaImage> {
        if self.clip_open {
            self.ctx.pop_layer();
        }
        let (w, h) = self.size.to_u16()?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut rgba = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba);
        image::RgbaImage::from_raw(self.size.width, self.size.height, rgba)
            .ok_or_else(|| PipelineError::geometry("rendered pixmap length mismatch"))
    }
}

/// Wrap premultiplied RGBA8 bytes as an image paint.
pub(crate) fn image_paint_from_premul(
    rgba8_premul: &[u8],
    size: Size,
) -> PipelineResult<vello_cpu::Image> {
    let (w, h) = size.to_u16()?;
    if rgba8_premul.len() != size.pixel_count() * 4 {
        return Err(PipelineError::geometry("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(size.pixel_count());
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);

    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
