//! Metadata templating and `data:` URI assembly.
//!
//! Construction only: fragments are opaque text concatenated into the
//! final JSON document, and no schema is enforced until the caller
//! assembles and encodes it. Keys and values are emitted verbatim, so
//! escaping is the caller's concern. Every join has fixed arity and every
//! encoder is linear in its input, keeping the cost of each call bounded.

use crate::base64;

/// Prefix for a base64-encoded on-chain metadata document.
pub const METADATA_URI_PREFIX: &str = "data:application/json;base64,";

/// Prefix for a base64-encoded on-chain SVG image.
pub const SVG_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Join a fixed number of parts with commas, preserving empty segments,
/// with no leading or trailing comma.
pub fn comma_separated<const N: usize>(parts: [&str; N]) -> String {
    parts.join(",")
}

/// Prefix contents with a comma, even when empty.
pub fn continues_with(contents: &str) -> String {
    format!(",{contents}")
}

/// Wrap contents in a JSON dictionary.
pub fn dictionary(contents: &str) -> String {
    format!("{{{contents}}}")
}

/// `"key":"value"` pair.
pub fn key_value_string(key: &str, value: &str) -> String {
    format!("\"{key}\":\"{value}\"")
}

/// `"key":[value]` pair.
pub fn key_value_array(key: &str, value: &str) -> String {
    format!("\"{key}\":[{value}]")
}

/// One `{"trait_type":…,"value":…}` entry for a metadata attributes array.
pub fn trait_attribute(name: &str, value: &str) -> String {
    dictionary(&comma_separated([
        &key_value_string("trait_type", name),
        &key_value_string("value", value),
    ]))
}

/// `data:` URI embedding `bytes` under `mime` as base64.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", base64::encode(bytes))
}

/// Encode an SVG document as an image URI.
pub fn svg_image_uri(svg: &str) -> String {
    format!("{SVG_URI_PREFIX}{}", base64::encode(svg.as_bytes()))
}

/// Encode a metadata document as a token URI.
pub fn token_uri(metadata: &str) -> String {
    format!("{METADATA_URI_PREFIX}{}", base64::encode(metadata.as_bytes()))
}
