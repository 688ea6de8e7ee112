use std::rc::Rc;

use super::markup;
use crate::formats::{Container, Format, Formatter, Placement, Resolved};
use crate::ops::Operation;

/// The single element a block renders as, merged from all its block formats.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BlockWrapper {
    /// Set by the last tag format seen.
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub style: String,
}

impl BlockWrapper {
    pub fn merge<'f>(formats: impl IntoIterator<Item = &'f Format>) -> Self {
        let mut wrap = BlockWrapper::default();
        for f in formats.into_iter().filter(|f| f.block) {
            match f.placement {
                Placement::Tag => {
                    if !f.value.is_empty() {
                        wrap.tag.clone_from(&f.value);
                        wrap.attrs.clone_from(&f.attrs);
                    }
                }
                Placement::Class => wrap.classes.push(f.value.clone()),
                Placement::Style => wrap.style.push_str(&f.value),
            }
        }
        wrap
    }

    fn write_open(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            markup::write_attr(out, name, value);
        }
        if !self.classes.is_empty() {
            markup::write_attr(out, "class", &self.classes.join(" "));
        }
        if !self.style.is_empty() {
            markup::write_attr(out, "style", &self.style);
        }
        out.push('>');
    }
}

/// Writes finished blocks and tracks the containers (lists) open around them.
#[derive(Default)]
pub struct BlockAssembler {
    open: Vec<Container>,
    owners: Vec<Rc<dyn Formatter>>,
}

impl BlockAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Containers currently open, outermost first.
    pub fn containers(&self) -> &[Container] {
        &self.open
    }

    /// Writes one block terminated by `op`, wrapping `body` in the element
    /// merged from the block formats in `resolved`.
    ///
    /// Containers `op` no longer continues close first, then the containers
    /// its wrappers need open. A block without any block format is void and
    /// its body is written bare.
    pub fn flush(&mut self, op: &Operation, resolved: &[Resolved], body: &str, out: &mut String) {
        let keep = self
            .owners
            .iter()
            .take_while(|owner| owner.has_format(op))
            .count();
        self.close_to(keep, Some(op), out);

        for r in resolved {
            let Some(wrapper) = r.formatter.as_wrapper() else {
                continue;
            };
            let container = wrapper.container();
            if self.open.contains(&container) {
                continue;
            }
            out.push_str(&wrapper.pre_wrap(&self.open));
            self.open.push(container);
            self.owners.push(Rc::clone(&r.formatter));
        }

        let wrap = BlockWrapper::merge(resolved.iter().filter_map(|r| r.format.as_ref()));
        if wrap.tag.is_empty() {
            log::debug!("void block, writing {} bytes bare", body.len());
            out.push_str(body);
            return;
        }

        log::debug!("block <{}> with {} bytes", wrap.tag, body.len());
        wrap.write_open(out);
        out.push_str(body);
        markup::close_tag(out, &wrap.tag);
    }

    /// Closes every container still open at the end of the document.
    pub fn finish(&mut self, out: &mut String) {
        self.close_to(0, None, out);
    }

    fn close_to(&mut self, len: usize, closing: Option<&Operation>, out: &mut String) {
        while self.owners.len() > len {
            if let Some(owner) = self.owners.pop()
                && let Some(wrapper) = owner.as_wrapper()
            {
                out.push_str(&wrapper.post_wrap(&self.open, closing));
            }
            self.open.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::Registry;
    use pretty_assertions::assert_eq;

    fn flush(assembler: &mut BlockAssembler, op: &Operation, body: &str) -> String {
        let resolved = Registry::builtin().resolve_operation(op).unwrap();
        let mut out = String::new();
        assembler.flush(op, &resolved, body, &mut out);
        out
    }

    #[test]
    fn merge_lets_later_tags_win_and_collects_classes_and_styles() {
        let formats = [
            Format::tag("p").block(),
            Format::class("align-center").block(),
            Format::tag("h2").block(),
            Format::style("margin:0;").block(),
            Format::class("wide").block(),
            Format::style("color:red;").block(),
            Format::tag("strong"),
        ];
        let wrap = BlockWrapper::merge(&formats);
        assert_eq!(wrap.tag, "h2");
        assert_eq!(wrap.classes, vec!["align-center", "wide"]);
        assert_eq!(wrap.style, "margin:0;color:red;");

        let mut out = String::new();
        wrap.write_open(&mut out);
        assert_eq!(
            out,
            r#"<h2 class="align-center wide" style="margin:0;color:red;">"#
        );
    }

    #[test]
    fn paragraph_with_alignment() {
        let mut blocks = BlockAssembler::new();
        let op = Operation::text("\n").with_attr("align", "right");
        assert_eq!(
            flush(&mut blocks, &op, "hi"),
            r#"<p class="align-right">hi</p>"#
        );
    }

    #[test]
    fn consecutive_list_items_share_a_container() {
        let mut blocks = BlockAssembler::new();
        let item = Operation::text("\n").with_attr("list", "bullet");

        assert_eq!(flush(&mut blocks, &item, "a"), "<ul><li>a</li>");
        assert_eq!(flush(&mut blocks, &item, "b"), "<li>b</li>");
        assert_eq!(blocks.containers().len(), 1);
        assert_eq!(
            flush(&mut blocks, &Operation::text("\n"), "c"),
            "</ul><p>c</p>"
        );
        assert!(blocks.containers().is_empty());
    }

    #[test]
    fn indented_items_nest_and_unwind() {
        let mut blocks = BlockAssembler::new();
        let top = Operation::text("\n").with_attr("list", "ordered");
        let nested = top.clone().with_attr("indent", "1");

        let mut out = flush(&mut blocks, &top, "1");
        out += &flush(&mut blocks, &nested, "1.1");
        out += &flush(&mut blocks, &top, "2");
        blocks.finish(&mut out);
        assert_eq!(out, "<ol><li>1</li><ol><li>1.1</li></ol><li>2</li></ol>");
    }

    #[test]
    fn switching_list_style_closes_the_old_list() {
        let mut blocks = BlockAssembler::new();
        let mut out = flush(
            &mut blocks,
            &Operation::text("\n").with_attr("list", "bullet"),
            "a",
        );
        out += &flush(
            &mut blocks,
            &Operation::text("\n").with_attr("list", "ordered"),
            "b",
        );
        blocks.finish(&mut out);
        assert_eq!(out, "<ul><li>a</li></ul><ol><li>b</li></ol>");
    }

    #[test]
    fn finish_closes_open_containers() {
        let mut blocks = BlockAssembler::new();
        let mut out = flush(
            &mut blocks,
            &Operation::text("\n").with_attr("list", "bullet"),
            "a",
        );
        blocks.finish(&mut out);
        assert_eq!(out, "<ul><li>a</li></ul>");
    }
}
