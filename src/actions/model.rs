use std::fmt;
use std::str::FromStr;

use crate::encode::OutputFormat;
use crate::foundation::error::{PipelineError, PipelineResult};

/// Policy for reconciling the source aspect ratio with a requested canvas size.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Fill the canvas exactly, distorting if needed.
    #[default]
    Stretch,
    /// Treat width/height as a bounding box and shrink the canvas to the source ratio.
    Max,
    /// Scale to fit inside the canvas, leaving transparent bars.
    Fit,
    /// Scale to cover the canvas, cropping the overflow.
    Zoom,
}

impl FromStr for FitMode {
    type Err = PipelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stretch" => Ok(Self::Stretch),
            "max" => Ok(Self::Max),
            "fit" => Ok(Self::Fit),
            "zoom" => Ok(Self::Zoom),
            other => Err(PipelineError::invalid_input(format!(
                "unknown fit mode '{other}'"
            ))),
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stretch => "stretch",
            Self::Max => "max",
            Self::Fit => "fit",
            Self::Zoom => "zoom",
        })
    }
}

/// Clip region applied to the output canvas.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// No clipping.
    #[default]
    None,
    /// Circle centred on the canvas, radius `min(w, h) / 2`.
    Circle,
    /// Ellipse inscribed in the canvas.
    Ellipse,
    /// Canvas rectangle with rounded corners.
    #[serde(rename = "roundedrectangle", alias = "rounded_rectangle")]
    RoundedRectangle,
}

impl FromStr for Shape {
    type Err = PipelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "none" => Ok(Self::None),
            "circle" => Ok(Self::Circle),
            "ellipse" => Ok(Self::Ellipse),
            "roundedrectangle" | "roundedrect" => Ok(Self::RoundedRectangle),
            _ => Err(PipelineError::invalid_input(format!(
                "unknown shape '{}'",
                value.trim()
            ))),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::RoundedRectangle => "roundedrectangle",
        })
    }
}

/// Declarative transform request.
///
/// Every field is optional; an unset field means "use the source or configured default".
/// After a successful run the pipeline returns a copy with `width`, `height` and `format`
/// filled in.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ActionSet {
    /// Output width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Output height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// 1-based page for paginated sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Credential handed opaquely to the document backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_password: Option<String>,
    /// Aspect-ratio policy; unset behaves as [`FitMode::Stretch`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_mode: Option<FitMode>,
    /// Clip shape; a set `corner_radius` implies [`Shape::RoundedRectangle`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    /// Rounded-rectangle corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
    /// Text drawn centred over the canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Reduce `text` to at most two initials before drawing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_initials: Option<bool>,
    /// Named or hex text color; white when absent or unparseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Fill color for a generated placeholder canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_color: Option<String>,
    /// Pick the placeholder color from a hash of `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_from_text_hash: Option<bool>,
    /// Output encoding; inherited from the source when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl ActionSet {
    /// Start an immutable [`ActionSetBuilder`](crate::ActionSetBuilder).
    pub fn builder() -> crate::actions::ActionSetBuilder {
        crate::actions::ActionSetBuilder::default()
    }

    /// False for a request that would only echo the source; hosts may skip the pipeline then.
    pub fn has_any_actions(&self) -> bool {
        self.width.is_some()
            || self.height.is_some()
            || self.format.is_some()
            || self.page.is_some()
            || self.shape.is_some()
            || self.fit_mode.is_some()
            || self.color_from_text_hash.is_some()
            || self.corner_radius.is_some()
            || self.image_color.as_deref().is_some_and(|c| !c.is_empty())
            || self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Fill every unset field from `defaults`; fields set on `self` win.
    pub fn with_defaults(&self, defaults: &ActionSet) -> ActionSet {
        let d = defaults.clone();
        let s = self.clone();
        ActionSet {
            width: s.width.or(d.width),
            height: s.height.or(d.height),
            page: s.page.or(d.page),
            document_password: s.document_password.or(d.document_password),
            fit_mode: s.fit_mode.or(d.fit_mode),
            shape: s.shape.or(d.shape),
            corner_radius: s.corner_radius.or(d.corner_radius),
            text: s.text.or(d.text),
            as_initials: s.as_initials.or(d.as_initials),
            text_color: s.text_color.or(d.text_color),
            image_color: s.image_color.or(d.image_color),
            color_from_text_hash: s.color_from_text_hash.or(d.color_from_text_hash),
            format: s.format.or(d.format),
        }
    }

    pub fn effective_fit_mode(&self) -> FitMode {
        self.fit_mode.unwrap_or_default()
    }

    /// Shape after applying the "corner radius implies rounded rectangle" rule.
    pub fn effective_shape(&self) -> Shape {
        match (self.shape, self.corner_radius) {
            (Some(shape), _) => shape,
            (None, Some(_)) => Shape::RoundedRectangle,
            (None, None) => Shape::None,
        }
    }

    /// Non-empty overlay text, if any.
    pub fn overlay_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    pub fn wants_initials(&self) -> bool {
        self.as_initials.unwrap_or(false)
    }

    pub fn wants_text_hash_color(&self) -> bool {
        self.color_from_text_hash.unwrap_or(false)
    }

    /// Whether this request should render a generated placeholder instead of decoding bytes.
    pub fn wants_virtual_image(&self) -> bool {
        self.image_color.as_deref().is_some_and(|c| !c.is_empty()) || self.wants_text_hash_color()
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if self.width == Some(0) {
            return Err(PipelineError::invalid_input("width must be > 0 when set"));
        }
        if self.height == Some(0) {
            return Err(PipelineError::invalid_input("height must be > 0 when set"));
        }
        Ok(())
    }
}
