//! # delta-html engine
//!
//! Renders a Quill Delta (a JSON array of `insert` operations) into lean HTML.
//!
//! ## Pipeline
//!
//! 1. **Decoding** (`ops`): the input bytes become a list of [`Operation`]s.
//!    Malformed input fails here, before anything is rendered.
//! 2. **Resolution** (`formats`): each operation's kind and attributes are
//!    looked up in the [`Registry`], host overrides first, then the built-in
//!    table.
//! 3. **Rendering** (`render`): inline formats are diffed against the tags
//!    still open from the previous operation, and block formats wait for the
//!    `"\n"` that terminates their block.
//!
//! ## Usage
//!
//! ```rust
//! let html = delta_html_engine::render(br#"[{"insert":"Hello "},{"insert":"world","attributes":{"bold":true}},{"insert":"\n"}]"#).unwrap();
//! assert_eq!(html, "<p>Hello <strong>world</strong></p>");
//! ```

pub mod error;
pub mod formats;
pub mod ops;
pub mod options;
pub mod render;

pub use error::RenderError;
pub use formats::{
    Container, Format, FormatOverride, FormatWrapper, FormatWriter, Formatter, Keyword, Placement,
    Registry,
};
pub use ops::{Operation, decode_operations};
pub use options::{RenderOptions, UnterminatedTail};
pub use render::render_operations;

/// Renders Delta JSON with the built-in formatters and default options.
///
/// If rendering fails part way, the HTML produced so far is available through
/// [`RenderError::partial_html`].
pub fn render(ops: &[u8]) -> Result<String, RenderError> {
    render_with(ops, None, &RenderOptions::default())
}

/// Renders Delta JSON, asking `host` for a formatter before each built-in lookup.
pub fn render_extended(ops: &[u8], host: &dyn FormatOverride) -> Result<String, RenderError> {
    render_with(ops, Some(host), &RenderOptions::default())
}

/// Renders Delta JSON with an optional host override and explicit options.
pub fn render_with(
    ops: &[u8],
    host: Option<&dyn FormatOverride>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let ops = decode_operations(ops)?;
    let registry = match host {
        Some(host) => Registry::with_override(host),
        None => Registry::builtin(),
    };
    render_operations(&ops, &registry, options)
}
