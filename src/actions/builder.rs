use crate::{
    actions::{ActionSet, FitMode, Shape},
    encode::OutputFormat,
    foundation::error::PipelineResult,
};

/// Consuming builder for [`ActionSet`].
///
/// Each call takes the builder by value and returns a new one, so two builders never alias
/// the same set.
#[derive(Clone, Debug, Default)]
pub struct ActionSetBuilder {
    actions: ActionSet,
}

impl ActionSetBuilder {
    /// Start from an existing set (e.g. host defaults).
    pub fn from_actions(actions: ActionSet) -> Self {
        Self { actions }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.actions.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.actions.height = Some(height);
        self
    }

    pub fn size(self, width: u32, height: u32) -> Self {
        self.width(width).height(height)
    }

    pub fn page(mut self, page: u32) -> Self {
        self.actions.page = Some(page);
        self
    }

    pub fn document_password(mut self, password: impl Into<String>) -> Self {
        self.actions.document_password = Some(password.into());
        self
    }

    pub fn fit_mode(mut self, mode: FitMode) -> Self {
        self.actions.fit_mode = Some(mode);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.actions.shape = Some(shape);
        self
    }

    pub fn corner_radius(mut self, radius: u32) -> Self {
        self.actions.corner_radius = Some(radius);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.actions.text = Some(text.into());
        self
    }

    pub fn as_initials(mut self, yes: bool) -> Self {
        self.actions.as_initials = Some(yes);
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.actions.text_color = Some(color.into());
        self
    }

    pub fn image_color(mut self, color: impl Into<String>) -> Self {
        self.actions.image_color = Some(color.into());
        self
    }

    pub fn color_from_text_hash(mut self, yes: bool) -> Self {
        self.actions.color_from_text_hash = Some(yes);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.actions.format = Some(format);
        self
    }

    pub fn build(self) -> PipelineResult<ActionSet> {
        self.actions.validate()?;
        Ok(self.actions)
    }
}
