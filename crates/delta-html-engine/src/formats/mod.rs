//! # Formats
//!
//! Formatters turn an operation's kind or one of its attributes into a
//! [`Format`]: the string to write and where it goes.
//!
//! ## Capabilities
//!
//! Every [`Formatter`] reports a format and whether an operation carries it.
//! Two optional capabilities are discovered through queries rather than
//! separate types:
//!
//! - [`FormatWriter`]: writes the operation's whole body itself (embeds).
//! - [`FormatWrapper`]: keeps a container element open around consecutive
//!   blocks (lists).
//!
//! ## Modules
//!
//! - **`keyword`**: the closed set of built-in keywords and their precedence
//! - **`builtin`**: the built-in formatters
//! - **`registry`**: keyword resolution with host overrides

pub mod builtin;
pub mod keyword;
pub mod registry;

use crate::ops::Operation;

pub use keyword::Keyword;
pub use registry::{FormatOverride, Registry, Resolved};

/// Where a format's value lands in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// An element name, e.g. `strong`.
    Tag,
    /// A CSS class name.
    Class,
    /// A CSS declaration, e.g. `color:red;`.
    Style,
}

/// A rendered format: the value and where it goes.
///
/// Inline `Class` and `Style` formats render as a `span` carrying the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub value: String,
    pub placement: Placement,
    /// Block formats are written only once the block's closing `"\n"` is seen.
    pub block: bool,
    /// Extra markup attributes for `Tag` formats, e.g. a link's `href`.
    pub attrs: Vec<(String, String)>,
}

impl Format {
    fn new(value: impl Into<String>, placement: Placement) -> Self {
        Self {
            value: value.into(),
            placement,
            block: false,
            attrs: Vec::new(),
        }
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(name, Placement::Tag)
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, Placement::Class)
    }

    pub fn style(declaration: impl Into<String>) -> Self {
        Self::new(declaration, Placement::Style)
    }

    /// Marks the format as block level.
    pub fn block(mut self) -> Self {
        self.block = true;
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }
}

/// A container element held open across consecutive blocks, e.g. a `ul`
/// around list items. `level` distinguishes nested containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub tag: String,
    pub level: u8,
}

/// Maps an operation's kind or attribute to markup.
///
/// Formatters are built per operation and hold no state across operations.
pub trait Formatter {
    /// The format to apply. `None` for writers that only emit a body.
    fn format(&self) -> Option<Format>;

    /// Whether `op` carries this same format. Decides whether an open tag
    /// survives into the next operation.
    fn has_format(&self, op: &Operation) -> bool;

    fn as_writer(&self) -> Option<&dyn FormatWriter> {
        None
    }

    fn as_wrapper(&self) -> Option<&dyn FormatWrapper> {
        None
    }
}

/// Writes an operation's entire body in place of its payload.
pub trait FormatWriter {
    fn write(&self, out: &mut String);
}

/// Wraps blocks in a container element.
///
/// The container opens before the first block that needs it and closes at the
/// first block whose operation no longer [`has_format`](Formatter::has_format)
/// it, or at the end of the document.
pub trait FormatWrapper {
    fn container(&self) -> Container;

    /// Markup opening the container, given the containers already open.
    fn pre_wrap(&self, open: &[Container]) -> String;

    /// Markup closing the container. `closing` is the operation whose block no
    /// longer continues it, `None` at the end of the document.
    fn post_wrap(&self, open: &[Container], closing: Option<&Operation>) -> String;
}
