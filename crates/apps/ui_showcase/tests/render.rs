//! Server-rendered showcase page.
//!
//! Run with `cargo test -p bootstrap_showcase --no-default-features --features ssr`.

#![cfg(feature = "ssr")]

use bootstrap_showcase::{DropdownConfig, ShowcaseApp, ShowcaseConfig};
use bootstrap_ui::{BackgroundStyle, ItemsAlignment};
use leptos::*;
use pretty_assertions::assert_eq;

fn render(config: Option<ShowcaseConfig>) -> String {
    leptos::ssr::render_to_string(move || match config {
        Some(config) => view! { <ShowcaseApp config=config /> }.into_view(),
        None => view! { <ShowcaseApp /> }.into_view(),
    })
    .to_string()
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {html}"))
}

fn opening_tag<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = position(html, needle);
    let from = html[..=at].rfind('<').expect("tag start");
    let to = html[at..].find('>').expect("unterminated tag") + at;
    &html[from..=to]
}

fn classes<'a>(html: &'a str, needle: &str) -> Vec<&'a str> {
    let tag = opening_tag(html, needle);
    let start = tag
        .find("class=\"")
        .unwrap_or_else(|| panic!("no class attribute on {tag}"))
        + "class=\"".len();
    let len = tag[start..].find('"').expect("unterminated class attribute");
    tag[start..start + len].split_whitespace().collect()
}

#[test]
fn embedded_config_renders_navbar_and_every_section() {
    let html = render(None);

    assert_eq!(
        classes(&html, "<nav"),
        vec!["navbar", "navbar-expand-lg", "bg-light", "sticky-top"]
    );
    assert!(opening_tag(&html, "<nav").contains("data-bs-theme=\"light\""));
    assert!(position(&html, "navbar-brand") < position(&html, "Bootstrap UI"));
    assert!(opening_tag(&html, "<img").contains("width: 30px"));

    let home = position(&html, "Home");
    assert!(home < position(&html, "Components"));
    assert!(position(&html, "Components") < position(&html, "About"));
    assert!(position(&html, "About") < position(&html, "nav-item dropdown"));
    assert!(position(&html, "Changelog") < position(&html, "License"));
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert!(position(&html, "aria-current=\"page\"") < home);

    assert_eq!(classes(&html, "id=\"showcase-search\""), vec!["form-control", "me-2"]);
    assert!(classes(&html, "id=\"showcase-sign-in\"").contains(&"btn-outline-success"));

    let variants = position(&html, "Variants");
    let sizes = position(&html, "Sizes and types");
    let states = position(&html, "States");
    let badges = position(&html, "Badges");
    assert!(variants < sizes && sizes < states && states < badges);
    assert!(html.contains("Nothing clicked yet"));
}

#[test]
fn variant_gallery_renders_every_button_color() {
    let html = render(None);
    let variants = position(&html, "Variants");
    let sizes = position(&html, "Sizes and types");
    let gallery = &html[variants..sizes];

    assert_eq!(gallery.matches("<button").count(), 17);
    for class in ["btn-primary", "btn-link", "btn-outline-dark"] {
        assert!(gallery.contains(class), "{class} missing from {gallery}");
    }
}

#[test]
fn states_section_shows_idle_save_and_busy_spinner() {
    let html = render(None);
    let states = &html[position(&html, "States")..position(&html, "Badges")];

    assert!(states.contains("Save"));
    assert!(!states.contains("Saving..."));

    let disabled_at = position(states, "Disabled");
    let button_at = states[..disabled_at].rfind("<button").expect("button start");
    assert!(opening_tag(&states[button_at..], "<button").contains(" disabled"));

    assert_eq!(states.matches("spinner-border spinner-border-sm").count(), 1);
    assert!(states.contains("visually-hidden"));
    assert!(classes(states, "text-bg-danger").contains(&"rounded-pill"));
}

#[test]
fn custom_config_drives_theme_alignment_and_entries() {
    let config = ShowcaseConfig {
        background_style: BackgroundStyle::Dark,
        items_alignment: ItemsAlignment::End,
        sticky_top: false,
        pages: vec!["Docs".to_string()],
        dropdown: Some(DropdownConfig {
            placeholder: "Extras".to_string(),
            entries: vec!["Blog".to_string()],
        }),
        search_placeholder: None,
        ..ShowcaseConfig::default()
    };
    let html = render(Some(config));

    assert_eq!(classes(&html, "<nav"), vec!["navbar", "navbar-expand-lg", "bg-dark"]);
    assert!(opening_tag(&html, "<nav").contains("data-bs-theme=\"dark\""));
    assert_eq!(classes(&html, "<ul"), vec!["navbar-nav", "ms-auto"]);
    assert!(position(&html, "Docs") < position(&html, "Extras"));
    assert!(html.contains("Blog"));
    assert!(!html.contains("<input"));
    assert!(!html.contains("Components"));
}
