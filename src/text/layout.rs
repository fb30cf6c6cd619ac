use crate::{
    foundation::{
        core::Rgba8,
        error::{PipelineError, PipelineResult},
    },
    text::FontAsset,
};

/// Stateful helper for building single-line Parley layouts in one registered font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font` in a fresh font context.
    pub fn new(font: &FontAsset) -> PipelineResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(font.layout_blob(), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PipelineError::invalid_input(format!(
                "no font families registered from '{}'",
                font.path().display()
            ))
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PipelineError::invalid_input("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `text` on a single unbroken line.
    pub fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: Rgba8,
    ) -> PipelineResult<parley::Layout<Rgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PipelineError::invalid_input(
                "font size must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Advance width of `text` at `size_px`.
    pub fn measure_width(&mut self, text: &str, size_px: f32) -> PipelineResult<f32> {
        Ok(self.layout_line(text, size_px, Rgba8::WHITE)?.width())
    }
}
