//! Integration tests for icon style generation

use button_icons::style::{
    append_selectors, svg_to_data_uri, try_generate_icon_style, StyleConfig,
};
use button_icons::{catalog, generate_icon_style, IconError};

#[test]
fn test_selector_list_gets_suffix_per_entry() {
    let selectors = [".a", ".b .c", " #d", "div > .e"];
    let joined = selectors.join(",");
    let out = append_selectors(&joined, "::after");
    let entries: Vec<_> = out.split(',').collect();
    assert_eq!(entries.len(), selectors.len());
    for (entry, sub) in entries.iter().zip(selectors) {
        assert_eq!(*entry, format!("{} ::after", sub));
    }
}

#[test]
fn test_nothing_to_render() {
    assert_eq!(generate_icon_style(".btn", None, None, None), "");
    assert_eq!(
        generate_icon_style(".btn", None, Some("nonexistent-name"), None),
        ""
    );
}

#[test]
fn test_unresolved_name_error_value() {
    let err = try_generate_icon_style(
        ".btn",
        Some("<svg/>"),
        Some("nonexistent-name"),
        None,
        &StyleConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, IconError::unresolved("nonexistent-name"));
}

#[test]
fn test_mask_declarations_match() {
    let css = generate_icon_style(".btn", Some("<svg>...</svg>"), None, None);
    let payloads: Vec<_> = css
        .lines()
        .filter_map(|l| {
            let l = l.trim();
            l.strip_prefix("mask-image: ")
                .or_else(|| l.strip_prefix("-webkit-mask-image: "))
        })
        .collect();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0], payloads[1]);
}

#[test]
fn test_color() {
    let css = generate_icon_style(".btn", Some("<svg/>"), None, Some("#ff0000"));
    assert!(css.contains("color: #ff0000;"));
    let css = generate_icon_style(".btn", Some("<svg/>"), None, None);
    assert!(!css.contains("color"));
}

#[test]
fn test_every_catalog_icon_generates_a_rule() {
    for icon in catalog::flatten() {
        let css = generate_icon_style(".btn", None, Some(icon.name), None);
        assert!(
            css.contains(&svg_to_data_uri(icon.markup)),
            "{} has no rule",
            icon.name
        );
    }
}

#[test]
fn test_rule_snapshot() {
    let config = StyleConfig::new().with_suffix("i");
    let css = try_generate_icon_style(".a,.b", Some("<svg/>"), None, Some("red"), &config)
        .expect("Should generate");
    insta::assert_snapshot!(css, @r#"
    .a i,.b i {
        mask-image: url("data:image/svg+xml,%3Csvg%2F%3E");
        -webkit-mask-image: url("data:image/svg+xml,%3Csvg%2F%3E");
        color: red;
    }
    "#);
}
