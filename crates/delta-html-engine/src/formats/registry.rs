use std::fmt;
use std::rc::Rc;

use super::{Format, Formatter, Keyword, builtin};
use crate::ops::Operation;

/// A host-supplied source of formatters, consulted before the built-in table.
///
/// Called once with the operation's kind and once per attribute name.
/// Returning `None` falls through to the built-in formatter, if any.
pub trait FormatOverride {
    fn formatter(&self, keyword: &str, op: &Operation) -> Option<Box<dyn Formatter>>;
}

impl<F> FormatOverride for F
where
    F: Fn(&str, &Operation) -> Option<Box<dyn Formatter>>,
{
    fn formatter(&self, keyword: &str, op: &Operation) -> Option<Box<dyn Formatter>> {
        self(keyword, op)
    }
}

/// A formatter resolved for one operation, with its format computed once.
#[derive(Clone)]
pub struct Resolved {
    pub keyword: String,
    pub formatter: Rc<dyn Formatter>,
    pub format: Option<Format>,
}

impl Resolved {
    fn new(keyword: &str, formatter: Rc<dyn Formatter>) -> Self {
        Self {
            keyword: keyword.to_string(),
            format: formatter.format(),
            formatter,
        }
    }

    pub fn is_block(&self) -> bool {
        self.format.as_ref().is_some_and(|f| f.block)
    }

    pub fn is_inline(&self) -> bool {
        self.format.as_ref().is_some_and(|f| !f.block)
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("keyword", &self.keyword)
            .field("format", &self.format)
            .field("writer", &self.formatter.as_writer().is_some())
            .field("wrapper", &self.formatter.as_wrapper().is_some())
            .finish()
    }
}

/// Resolves keywords to formatters. The built-in table is static; a registry
/// only adds the optional host override, so it is cheap to build per render.
#[derive(Clone, Copy)]
pub struct Registry<'h> {
    host: Option<&'h dyn FormatOverride>,
}

impl Registry<'static> {
    pub fn builtin() -> Self {
        Self { host: None }
    }
}

impl<'h> Registry<'h> {
    pub fn with_override(host: &'h dyn FormatOverride) -> Self {
        Self { host: Some(host) }
    }

    /// Looks up one keyword: host override first, then the built-in table.
    pub fn resolve(&self, keyword: &str, op: &Operation) -> Option<Rc<dyn Formatter>> {
        if let Some(host) = self.host
            && let Some(custom) = host.formatter(keyword, op)
        {
            return Some(Rc::from(custom));
        }
        let keyword = keyword.parse::<Keyword>().ok()?;
        builtin::constructor(keyword)(op)
    }

    /// Resolves every formatter for `op`: its kind first, then its attributes
    /// in keyword precedence (unknown names last, alphabetically).
    ///
    /// Returns `None` when the kind itself has no formatter. Attributes
    /// without one are skipped.
    pub fn resolve_operation(&self, op: &Operation) -> Option<Vec<Resolved>> {
        let kind = self.resolve(&op.kind, op)?;
        let mut resolved = Vec::with_capacity(op.attributes.len() + 1);
        resolved.push(Resolved::new(&op.kind, kind));

        let mut names: Vec<&str> = op.attributes.keys().map(String::as_str).collect();
        // Stable sort keeps the map's alphabetical order within a rank.
        names.sort_by_key(|name| Keyword::rank(name));

        for name in names {
            match self.resolve(name, op) {
                Some(formatter) => resolved.push(Resolved::new(name, formatter)),
                None => log::debug!("skipping attribute {name:?} with no formatter"),
            }
        }
        Some(resolved)
    }
}

impl fmt::Debug for Registry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("host", &self.host.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keywords(resolved: &[Resolved]) -> Vec<&str> {
        resolved.iter().map(|r| r.keyword.as_str()).collect()
    }

    #[test]
    fn kind_resolves_before_attributes_in_precedence_order() {
        let op = Operation::text("x")
            .with_flag("bold")
            .with_flag("italic")
            .with_attr("link", "https://example.com")
            .with_attr("align", "center");

        let resolved = Registry::builtin().resolve_operation(&op).unwrap();
        assert_eq!(
            keywords(&resolved),
            vec!["text", "align", "link", "italic", "bold"]
        );
    }

    #[test]
    fn unknown_attributes_are_dropped() {
        let op = Operation::text("x").with_attr("font", "serif").with_flag("bold");
        let resolved = Registry::builtin().resolve_operation(&op).unwrap();
        assert_eq!(keywords(&resolved), vec!["text", "bold"]);
    }

    #[test]
    fn unknown_kind_fails_resolution() {
        let op = Operation::new("video", "clip.mp4");
        assert!(Registry::builtin().resolve_operation(&op).is_none());
    }

    struct Strong;

    impl Formatter for Strong {
        fn format(&self) -> Option<Format> {
            Some(Format::tag("b"))
        }

        fn has_format(&self, op: &Operation) -> bool {
            op.has_attr("bold")
        }
    }

    #[test]
    fn host_override_wins_and_falls_through() {
        let host = |keyword: &str, _op: &Operation| -> Option<Box<dyn Formatter>> {
            (keyword == "bold").then(|| Box::new(Strong) as Box<dyn Formatter>)
        };
        let registry = Registry::with_override(&host);
        let op = Operation::text("x").with_flag("bold").with_flag("italic");

        let resolved = registry.resolve_operation(&op).unwrap();
        let formats: Vec<_> = resolved.iter().filter_map(|r| r.format.clone()).collect();
        assert_eq!(
            formats,
            vec![Format::tag("p").block(), Format::tag("em"), Format::tag("b")]
        );
    }

    #[test]
    fn host_only_keywords_sort_after_builtins() {
        let host = |keyword: &str, _op: &Operation| -> Option<Box<dyn Formatter>> {
            (keyword == "aside").then(|| Box::new(Strong) as Box<dyn Formatter>)
        };
        let registry = Registry::with_override(&host);
        let op = Operation::text("x").with_flag("aside").with_flag("bold");

        let resolved = registry.resolve_operation(&op).unwrap();
        assert_eq!(keywords(&resolved), vec!["text", "bold", "aside"]);
    }
}
