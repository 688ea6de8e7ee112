/// Errors produced while decoding or rendering a Delta.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to decode operations: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid operation at index {index}: {reason}")]
    InvalidOperation { index: usize, reason: String },

    #[error("Operation at index {index} has no formatter for its kind {kind:?}")]
    MissingFormatter {
        index: usize,
        kind: String,
        /// HTML rendered before the failing operation.
        partial: String,
    },
}

impl RenderError {
    /// The HTML rendered before the failure. Decoding errors happen before
    /// rendering starts, so they have none.
    pub fn partial_html(&self) -> &str {
        match self {
            RenderError::MissingFormatter { partial, .. } => partial,
            RenderError::Decode(_) | RenderError::InvalidOperation { .. } => "",
        }
    }

    /// Index of the offending record, when the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            RenderError::Decode(_) => None,
            RenderError::InvalidOperation { index, .. }
            | RenderError::MissingFormatter { index, .. } => Some(*index),
        }
    }
}
