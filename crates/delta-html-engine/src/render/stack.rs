use std::rc::Rc;

use super::markup;
use crate::formats::{Format, Formatter, Resolved};
use crate::ops::Operation;

/// An inline format currently open in the output.
struct OpenFormat {
    keyword: String,
    format: Format,
    formatter: Rc<dyn Formatter>,
}

impl OpenFormat {
    fn same_as(&self, keyword: &str, format: &Format) -> bool {
        self.keyword == keyword && &self.format == format
    }
}

/// Inline tags open in the output, outermost first.
///
/// Tags close in reverse order of opening, and a format is never open twice.
#[derive(Default)]
pub struct TagStack {
    open: Vec<OpenFormat>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// The open formats, outermost first.
    pub fn formats(&self) -> impl Iterator<Item = &Format> {
        self.open.iter().map(|o| &o.format)
    }

    /// Brings the open tags in line with the inline formats `op` demands,
    /// writing the fewest closes and opens.
    ///
    /// The longest run of open formats, counted from the outermost, that `op`
    /// still carries stays open. Everything above it closes innermost first,
    /// then each demanded format not already open opens in resolution order.
    pub fn reconcile(&mut self, op: &Operation, demanded: &[Resolved], out: &mut String) {
        let keep = self
            .open
            .iter()
            .take_while(|o| {
                o.formatter.has_format(op)
                    && demanded
                        .iter()
                        .any(|d| d.format.as_ref().is_some_and(|f| o.same_as(&d.keyword, f)))
            })
            .count();
        self.close_to(keep, out);

        for d in demanded {
            let Some(format) = d.format.as_ref().filter(|f| !f.block) else {
                continue;
            };
            if self.open.iter().any(|o| o.same_as(&d.keyword, format)) {
                continue;
            }
            log::trace!("open {}", format.value);
            markup::open_inline(out, format);
            self.open.push(OpenFormat {
                keyword: d.keyword.clone(),
                format: format.clone(),
                formatter: Rc::clone(&d.formatter),
            });
        }
    }

    /// Closes every open tag, innermost first.
    pub fn close_all(&mut self, out: &mut String) {
        self.close_to(0, out);
    }

    fn close_to(&mut self, len: usize, out: &mut String) {
        while self.open.len() > len {
            if let Some(top) = self.open.pop() {
                log::trace!("close {}", top.format.value);
                markup::close_inline(out, &top.format);
            }
        }
    }
}
