//! SVG to data URI encoders

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Characters left literal by a URI component encoder. Everything else,
/// including `'`, `"`, `<`, `>` and `#`, is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

const SVG_MEDIA_TYPE: &str = "data:image/svg+xml";

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Collapse every run of whitespace into a single space
pub fn collapse_whitespace(svg: &str) -> String {
    whitespace_re().replace_all(svg, " ").into_owned()
}

/// Encode SVG markup as a percent-encoded `data:` URI
///
/// The result fits on one line and never contains a quote, so it can be
/// embedded in a quoted CSS `url()`.
pub fn svg_to_data_uri(svg: &str) -> String {
    let collapsed = collapse_whitespace(svg);
    format!(
        "{},{}",
        SVG_MEDIA_TYPE,
        utf8_percent_encode(&collapsed, URI_COMPONENT)
    )
}

/// Encode SVG markup as a base64 `data:` URI
pub fn svg_to_base64_uri(svg: &str) -> String {
    format!("{};base64,{}", SVG_MEDIA_TYPE, STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_characters_are_encoded() {
        let uri = svg_to_data_uri(r##"<svg a='1' b="2" fill="#000"></svg>"##);
        let payload = uri.strip_prefix("data:image/svg+xml,").unwrap();
        for literal in ['\'', '"', '<', '>', '#', ' '] {
            assert!(!payload.contains(literal), "{literal} left literal");
        }
        assert!(payload.contains("%27"));
        assert!(payload.contains("%22"));
        assert!(payload.contains("%3C"));
        assert!(payload.contains("%3E"));
        assert!(payload.contains("%23"));
    }

    #[test]
    fn test_unreserved_characters_stay_literal() {
        let uri = svg_to_data_uri("a-b_c.d!e~f*g(h)");
        assert_eq!(uri, "data:image/svg+xml,a-b_c.d!e~f*g(h)");
    }

    #[test]
    fn test_whitespace_runs_collapse_to_one_space() {
        let uri = svg_to_data_uri("<svg>\n\t  <path/>\n</svg>");
        assert_eq!(
            uri,
            "data:image/svg+xml,%3Csvg%3E%20%3Cpath%2F%3E%20%3C%2Fsvg%3E"
        );
    }

    #[test]
    fn test_base64_uri() {
        assert_eq!(
            svg_to_base64_uri("<svg/>"),
            "data:image/svg+xml;base64,PHN2Zy8+"
        );
    }
}
