/// Convenience result type used across the pipeline.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Top-level error taxonomy for a single transform job.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Missing or malformed caller input (actions, config, sources).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Source bytes are neither a decodable image nor a usable document.
    #[error("unsupported source: {0}")]
    UnsupportedSource(String),

    /// Failures reported by the document rendering boundary.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Output dimensions could not be resolved into a drawable canvas.
    #[error("geometry failure: {0}")]
    Geometry(String),

    /// The codec rejected the final canvas/format combination.
    #[error("encoding failure: {0}")]
    Encoding(String),

    /// Wrapped lower-level error from dependencies or workers.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PipelineError {
    /// Build a [`PipelineError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`PipelineError::UnsupportedSource`] value.
    pub fn unsupported_source(msg: impl Into<String>) -> Self {
        Self::UnsupportedSource(msg.into())
    }

    /// Build a [`PipelineError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`PipelineError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// True when the document could not be opened at all (bad bytes, wrong password, no pages).
    pub fn is_document_load_failure(&self) -> bool {
        matches!(
            self,
            Self::Document(DocumentError::Load(_) | DocumentError::NoPages)
        )
    }
}

/// Distinguishable failures of the document rendering boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Document bytes unreadable, corrupt, or the password was wrong.
    #[error("failed to load document: {0}")]
    Load(String),

    /// The document opened but reports zero pages.
    #[error("document has no pages")]
    NoPages,

    /// The selected page index could not be loaded.
    #[error("failed to load page {index}")]
    PageLoad {
        /// Zero-based page index that failed.
        index: usize,
    },

    /// The page loaded but could not be rendered into a pixel buffer.
    #[error("failed to render page: {0}")]
    Render(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
