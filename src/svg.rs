//! SVG text assembly.
//!
//! Pure string construction. The rendered fragments are embedded verbatim
//! into externally consumed metadata, so the exact spelling — single
//! quotes, no padding, the leading space on attribute strings — is part of
//! the wire contract.

use crate::color::Color;

/// Color-valued SVG attributes this engine can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorAttribute {
    Fill,
    Stroke,
    Stop,
}

impl ColorAttribute {
    /// Map a numeric kind: 0 fill, 1 stroke, 2 stop-color.
    ///
    /// Any other kind is a contract-integrity violation and aborts.
    pub fn from_kind(kind: u8) -> Self {
        match kind {
            0 => ColorAttribute::Fill,
            1 => ColorAttribute::Stroke,
            2 => ColorAttribute::Stop,
            _ => panic!("invalid color attribute kind {kind}"),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            ColorAttribute::Fill => "fill",
            ColorAttribute::Stroke => "stroke",
            ColorAttribute::Stop => "stop-color",
        }
    }
}

/// Render ` name='value'`, with the leading space expected by
/// [`create_element`] attribute strings.
pub fn color_attribute(attribute: ColorAttribute, value: &str) -> String {
    format!(" {}='{}'", attribute.name(), value)
}

/// Render the `rgb(r,g,b)` attribute value for a color. Alpha is not part
/// of the wire format.
pub fn rgb_value(color: Color) -> String {
    format!("rgb({},{},{})", color.red, color.green, color.blue)
}

/// Render the `url(#id)` attribute value referencing a definition.
pub fn url_value(id: &str) -> String {
    format!("url(#{id})")
}

/// Build an element from its tag, attribute string (leading space
/// included) and contents; self-closes when the contents are empty.
pub fn create_element(name: &str, attributes: &str, contents: &str) -> String {
    if contents.is_empty() {
        format!("<{name}{attributes}/>")
    } else {
        format!("<{name}{attributes}>{contents}</{name}>")
    }
}

/// Root `<svg>` attribute string for the given view box size, leading
/// space included.
pub fn svg_attributes(width: u32, height: u32) -> String {
    format!(" viewBox='0 0 {width} {height}' xmlns='http://www.w3.org/2000/svg'")
}
