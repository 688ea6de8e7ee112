use std::rc::Rc;

use super::{Container, Format, FormatWrapper, FormatWriter, Formatter, Keyword};
use crate::ops::Operation;
use crate::render::markup;

/// Builds the formatter for one keyword, given the operation it applies to.
/// `None` means the operation's value is not one this formatter renders.
pub type Constructor = fn(&Operation) -> Option<Rc<dyn Formatter>>;

/// The built-in table.
pub fn constructor(keyword: Keyword) -> Constructor {
    match keyword {
        Keyword::Text => |_| Some(Rc::new(TextFormat)),
        Keyword::Image => |op| {
            Some(Rc::new(ImageFormat {
                src: op.payload.clone(),
            }))
        },
        Keyword::Blockquote => |_| Some(Rc::new(BlockquoteFormat)),
        Keyword::Header => |op| {
            let level = op.attr("header")?.parse::<u8>().ok()?;
            (1..=6)
                .contains(&level)
                .then(|| Rc::new(HeaderFormat { level }) as Rc<dyn Formatter>)
        },
        Keyword::List => |op| {
            Some(Rc::new(ListFormat {
                style: ListStyle::of(op)?,
                indent: indent_of(op),
            }))
        },
        Keyword::Align => |op| {
            Some(Rc::new(AlignFormat {
                align: op.attr("align")?.to_string(),
            }))
        },
        Keyword::Link => |op| {
            Some(Rc::new(LinkFormat {
                href: op.attr("link")?.to_string(),
            }))
        },
        Keyword::Color => |op| {
            Some(Rc::new(ColorFormat {
                color: op.attr("color")?.to_string(),
            }))
        },
        Keyword::Underline => |_| Some(Rc::new(InlineTag::UNDERLINE)),
        Keyword::Italic => |_| Some(Rc::new(InlineTag::ITALIC)),
        Keyword::Bold => |_| Some(Rc::new(InlineTag::BOLD)),
    }
}

/// Default block for text: a paragraph.
pub struct TextFormat;

impl Formatter for TextFormat {
    fn format(&self) -> Option<Format> {
        Some(Format::tag("p").block())
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.is_text()
    }
}

/// Image embed, written as a complete `img` element.
pub struct ImageFormat {
    src: String,
}

impl Formatter for ImageFormat {
    fn format(&self) -> Option<Format> {
        None
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.kind == Keyword::Image.as_str()
    }

    fn as_writer(&self) -> Option<&dyn FormatWriter> {
        Some(self)
    }
}

impl FormatWriter for ImageFormat {
    fn write(&self, out: &mut String) {
        out.push_str("<img");
        markup::write_attr(out, "src", &self.src);
        out.push('>');
    }
}

pub struct BlockquoteFormat;

impl Formatter for BlockquoteFormat {
    fn format(&self) -> Option<Format> {
        Some(Format::tag("blockquote").block())
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.has_attr("blockquote")
    }
}

pub struct HeaderFormat {
    level: u8,
}

impl Formatter for HeaderFormat {
    fn format(&self) -> Option<Format> {
        Some(Format::tag(format!("h{}", self.level)).block())
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.attr("header")
            .and_then(|h| h.parse::<u8>().ok())
            .is_some_and(|h| h == self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListStyle {
    Bullet,
    Ordered,
}

impl ListStyle {
    fn of(op: &Operation) -> Option<Self> {
        match op.attr("list")? {
            "bullet" => Some(ListStyle::Bullet),
            _ => Some(ListStyle::Ordered),
        }
    }

    fn tag(self) -> &'static str {
        match self {
            ListStyle::Bullet => "ul",
            ListStyle::Ordered => "ol",
        }
    }
}

fn indent_of(op: &Operation) -> u8 {
    op.attr("indent")
        .and_then(|i| i.parse::<u8>().ok())
        .unwrap_or(0)
}

/// A list item. The `ul`/`ol` around consecutive items is its container;
/// a deeper `indent` nests a new container inside the current one.
pub struct ListFormat {
    style: ListStyle,
    indent: u8,
}

impl Formatter for ListFormat {
    fn format(&self) -> Option<Format> {
        Some(Format::tag("li").block())
    }

    /// An item continues this list when it is nested deeper, or sits at the
    /// same depth with the same list style.
    fn has_format(&self, op: &Operation) -> bool {
        let Some(style) = ListStyle::of(op) else {
            return false;
        };
        let indent = indent_of(op);
        indent > self.indent || (indent == self.indent && style == self.style)
    }

    fn as_wrapper(&self) -> Option<&dyn FormatWrapper> {
        Some(self)
    }
}

impl FormatWrapper for ListFormat {
    fn container(&self) -> Container {
        Container {
            tag: self.style.tag().to_string(),
            level: self.indent,
        }
    }

    fn pre_wrap(&self, _open: &[Container]) -> String {
        format!("<{}>", self.style.tag())
    }

    fn post_wrap(&self, _open: &[Container], _closing: Option<&Operation>) -> String {
        format!("</{}>", self.style.tag())
    }
}

pub struct AlignFormat {
    align: String,
}

impl Formatter for AlignFormat {
    fn format(&self) -> Option<Format> {
        Some(Format::class(format!("align-{}", self.align)).block())
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.attr("align") == Some(self.align.as_str())
    }
}

pub struct LinkFormat {
    href: String,
}

impl Formatter for LinkFormat {
    fn format(&self) -> Option<Format> {
        Some(Format::tag("a").with_attr("href", self.href.as_str()))
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.attr("link") == Some(self.href.as_str())
    }
}

pub struct ColorFormat {
    color: String,
}

impl Formatter for ColorFormat {
    fn format(&self) -> Option<Format> {
        Some(Format::style(format!("color:{};", self.color)))
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.attr("color") == Some(self.color.as_str())
    }
}

/// Boolean inline attributes that map straight onto an element.
pub struct InlineTag {
    attr: &'static str,
    tag: &'static str,
}

impl InlineTag {
    const BOLD: InlineTag = InlineTag {
        attr: "bold",
        tag: "strong",
    };
    const ITALIC: InlineTag = InlineTag {
        attr: "italic",
        tag: "em",
    };
    const UNDERLINE: InlineTag = InlineTag {
        attr: "underline",
        tag: "u",
    };
}

impl Formatter for InlineTag {
    fn format(&self) -> Option<Format> {
        Some(Format::tag(self.tag))
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.has_attr(self.attr)
    }
}
