//! Pattern-based icon splice for the link element
//!
//! The link is located with a regular expression rather than a parser: the
//! input is a single rendered button with a known shape, and the first
//! `<a ...>...</a>` pair is taken as the link.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| build_pattern("a").expect("valid regex"))
}

fn build_pattern(tag: &str) -> Result<Regex, regex::Error> {
    let tag = regex::escape(tag);
    Regex::new(&format!(r"(?is)(<{tag}(?:\s[^>]*)?>)(.*?)(</{tag}\s*>)"))
}

fn pattern_for(tag: &str) -> Option<Cow<'static, Regex>> {
    if tag.eq_ignore_ascii_case("a") {
        return Some(Cow::Borrowed(anchor_re()));
    }
    build_pattern(tag).ok().map(Cow::Owned)
}

/// Insert `wrapper` inside the first `tag` element of `fragment`
///
/// With `left` the wrapper goes right after the opening tag, otherwise right
/// before the closing tag. Returns `None` when no such element exists.
pub fn splice(fragment: &str, tag: &str, wrapper: &str, left: bool) -> Option<String> {
    let re = pattern_for(tag)?;
    let caps = re.captures(fragment)?;
    let at = if left {
        caps.get(1)?.end()
    } else {
        caps.get(3)?.start()
    };

    let mut out = String::with_capacity(fragment.len() + wrapper.len());
    out.push_str(&fragment[..at]);
    out.push_str(wrapper);
    out.push_str(&fragment[at..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BUTTON: &str = r#"<div class="b"><a class="l" href="/x">Click</a></div>"#;

    #[test]
    fn test_splice_right() {
        assert_eq!(
            splice(BUTTON, "a", "<i/>", false).unwrap(),
            r#"<div class="b"><a class="l" href="/x">Click<i/></a></div>"#
        );
    }

    #[test]
    fn test_splice_left() {
        assert_eq!(
            splice(BUTTON, "a", "<i/>", true).unwrap(),
            r#"<div class="b"><a class="l" href="/x"><i/>Click</a></div>"#
        );
    }

    #[test]
    fn test_does_not_match_other_tags_starting_with_a() {
        let fragment = "<div><abbr>x</abbr><a>y</a></div>";
        assert_eq!(
            splice(fragment, "a", "|", false).unwrap(),
            "<div><abbr>x</abbr><a>y|</a></div>"
        );
    }

    #[test]
    fn test_multiline_text() {
        let fragment = "<A href=\"#\">one\ntwo</A>";
        assert_eq!(
            splice(fragment, "a", "|", false).unwrap(),
            "<A href=\"#\">one\ntwo|</A>"
        );
    }

    #[test]
    fn test_only_first_link() {
        let fragment = "<a>1</a><a>2</a>";
        assert_eq!(splice(fragment, "a", "|", true).unwrap(), "<a>|1</a><a>2</a>");
    }

    #[test]
    fn test_custom_tag() {
        let fragment = r#"<div><button type="submit">Go</button></div>"#;
        assert_eq!(
            splice(fragment, "button", "|", true).unwrap(),
            r#"<div><button type="submit">|Go</button></div>"#
        );
    }

    #[test]
    fn test_missing_link() {
        assert_eq!(splice("<div>Click</div>", "a", "|", false), None);
    }
}
