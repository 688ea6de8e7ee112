use serde::{Deserialize, Serialize};

/// What to do with inline content left over when the last operation does not
/// end on a block boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedTail {
    /// Render it as a final implicit paragraph.
    #[default]
    Flush,
    /// Discard it.
    Drop,
}

/// Knobs that change rendered output without changing the formatter catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub unterminated_tail: UnterminatedTail,
    /// HTML-escape text payloads. When false, payloads are copied verbatim.
    pub escape_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unterminated_tail: UnterminatedTail::Flush,
            escape_text: true,
        }
    }
}
