//! Low-level writers for tags and attributes.

use crate::formats::{Format, Placement};

/// Writes ` name="value"` with the value escaped for a double-quoted attribute.
pub fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    html_escape::encode_double_quoted_attribute_to_string(value, out);
    out.push('"');
}

/// Opens an inline format. Class and style formats render as a `span`.
pub fn open_inline(out: &mut String, format: &Format) {
    match format.placement {
        Placement::Tag => {
            out.push('<');
            out.push_str(&format.value);
            for (name, value) in &format.attrs {
                write_attr(out, name, value);
            }
            out.push('>');
        }
        Placement::Class => {
            out.push_str("<span");
            write_attr(out, "class", &format.value);
            out.push('>');
        }
        Placement::Style => {
            out.push_str("<span");
            write_attr(out, "style", &format.value);
            out.push('>');
        }
    }
}

pub fn close_inline(out: &mut String, format: &Format) {
    match format.placement {
        Placement::Tag => close_tag(out, &format.value),
        Placement::Class | Placement::Style => close_tag(out, "span"),
    }
}

pub fn close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Appends payload text, escaped unless the caller asked for raw output.
pub fn write_text(out: &mut String, text: &str, escape: bool) {
    if escape {
        html_escape::encode_text_to_string(text, out);
    } else {
        out.push_str(text);
    }
}
