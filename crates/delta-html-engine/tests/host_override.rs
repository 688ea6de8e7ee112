mod support;

use delta_html_engine::{
    Container, Format, FormatWrapper, FormatWriter, Formatter, Operation, render_extended,
};
use pretty_assertions::assert_eq;
use support::assert_well_formed;

/// A `video` embed written as an iframe.
struct Video {
    src: String,
}

impl Formatter for Video {
    fn format(&self) -> Option<Format> {
        None
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.kind == "video"
    }

    fn as_writer(&self) -> Option<&dyn FormatWriter> {
        Some(self)
    }
}

impl FormatWriter for Video {
    fn write(&self, out: &mut String) {
        out.push_str(&format!(r#"<iframe src="{}"></iframe>"#, self.src));
    }
}

/// Bold rendered as `b` instead of `strong`.
struct B;

impl Formatter for B {
    fn format(&self) -> Option<Format> {
        Some(Format::tag("b"))
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.has_attr("bold")
    }
}

/// Block-level padding from an `indent` attribute outside of lists.
struct Indent(String);

impl Formatter for Indent {
    fn format(&self) -> Option<Format> {
        Some(Format::style(format!("padding-left:{}em;", self.0)).block())
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.attr("indent") == Some(self.0.as_str())
    }
}

/// Groups consecutive `note` blocks in an `aside`.
struct Note;

impl Formatter for Note {
    fn format(&self) -> Option<Format> {
        Some(Format::class("note").block())
    }

    fn has_format(&self, op: &Operation) -> bool {
        op.has_attr("note")
    }

    fn as_wrapper(&self) -> Option<&dyn FormatWrapper> {
        Some(self)
    }
}

impl FormatWrapper for Note {
    fn container(&self) -> Container {
        Container {
            tag: "aside".to_string(),
            level: 0,
        }
    }

    fn pre_wrap(&self, _open: &[Container]) -> String {
        "<aside>".to_string()
    }

    fn post_wrap(&self, _open: &[Container], _closing: Option<&Operation>) -> String {
        "</aside>".to_string()
    }
}

fn host(keyword: &str, op: &Operation) -> Option<Box<dyn Formatter>> {
    match keyword {
        "video" => Some(Box::new(Video {
            src: op.payload.clone(),
        })),
        "bold" => Some(Box::new(B)),
        "indent" if !op.has_attr("list") => Some(Box::new(Indent(op.attr("indent")?.to_string()))),
        "note" => Some(Box::new(Note)),
        _ => None,
    }
}

#[test]
fn custom_embed_kind() {
    let html = render_extended(
        br#"[{"insert":{"video":"https://example.com/v"}},{"insert":"\n"}]"#,
        &host,
    )
    .unwrap();
    assert_eq!(html, r#"<p><iframe src="https://example.com/v"></iframe></p>"#);
}

#[test]
fn override_replaces_builtin_and_others_fall_through() {
    let html = render_extended(
        br#"[{"insert":"x","attributes":{"bold":true,"italic":true}},{"insert":"\n"}]"#,
        &host,
    )
    .unwrap();
    assert_eq!(html, "<p><em><b>x</b></em></p>");
}

#[test]
fn block_style_and_classes_merge() {
    let html = render_extended(
        br#"[{"insert":"x"},{"insert":"\n","attributes":{"indent":2,"align":"center"}}]"#,
        &host,
    )
    .unwrap();
    assert_eq!(
        html,
        r#"<p class="align-center" style="padding-left:2em;">x</p>"#
    );
}

#[test]
fn host_wrapper_groups_blocks() {
    let html = render_extended(
        br#"[
            {"insert":"one"},{"insert":"\n","attributes":{"note":true}},
            {"insert":"two"},{"insert":"\n","attributes":{"note":true}},
            {"insert":"after\n"}
        ]"#,
        &host,
    )
    .unwrap();
    assert_eq!(
        html,
        r#"<aside><p class="note">one</p><p class="note">two</p></aside><p>after</p>"#
    );
    assert_well_formed(&html);
}

#[test]
fn host_is_consulted_for_kind_and_each_attribute() {
    let seen = std::cell::RefCell::new(Vec::new());
    let recorder = |keyword: &str, _op: &Operation| -> Option<Box<dyn Formatter>> {
        seen.borrow_mut().push(keyword.to_string());
        None
    };
    render_extended(
        br#"[{"insert":"x","attributes":{"bold":true,"font":"serif"}},{"insert":"\n"}]"#,
        &recorder,
    )
    .unwrap();
    assert_eq!(
        seen.into_inner(),
        vec!["text", "bold", "font", "text"]
    );
}
