//! Bootstrap class vocabulary and the component families built on it.

use std::fmt;

use leptos::ev::KeyboardEvent;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::id::resolve_id;

mod controls;
mod data_display;
mod navigation;

pub use controls::{Button, TextInput};
pub use data_display::{Badge, BadgeSpec};
pub use navigation::{
    DropdownItem, NavBar, NavBarBrand, NavBarButton, NavBarInputField, NavDropdown, NavItem,
    NavLink,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Bootstrap button color variants.
pub enum ButtonVariant {
    /// `btn-primary`.
    Primary,
    /// `btn-secondary`.
    Secondary,
    /// `btn-success`.
    Success,
    /// `btn-danger`.
    Danger,
    /// `btn-warning`.
    Warning,
    /// `btn-info`.
    Info,
    /// `btn-light`.
    Light,
    /// `btn-dark`.
    Dark,
    /// `btn-link`.
    Link,
    /// `btn-outline-primary`.
    PrimaryOutline,
    /// `btn-outline-secondary`.
    SecondaryOutline,
    /// `btn-outline-success`.
    SuccessOutline,
    /// `btn-outline-danger`.
    DangerOutline,
    /// `btn-outline-warning`.
    WarningOutline,
    /// `btn-outline-info`.
    InfoOutline,
    /// `btn-outline-light`.
    LightOutline,
    /// `btn-outline-dark`.
    DarkOutline,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    /// Every variant, solid ones first.
    pub const ALL: [Self; 17] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Warning,
        Self::Info,
        Self::Light,
        Self::Dark,
        Self::Link,
        Self::PrimaryOutline,
        Self::SecondaryOutline,
        Self::SuccessOutline,
        Self::DangerOutline,
        Self::WarningOutline,
        Self::InfoOutline,
        Self::LightOutline,
        Self::DarkOutline,
    ];

    /// Class set applied to a button of this variant.
    pub fn classes(self) -> [&'static str; 2] {
        ["btn", self.token()]
    }

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Success => "btn-success",
            Self::Danger => "btn-danger",
            Self::Warning => "btn-warning",
            Self::Info => "btn-info",
            Self::Light => "btn-light",
            Self::Dark => "btn-dark",
            Self::Link => "btn-link",
            Self::PrimaryOutline => "btn-outline-primary",
            Self::SecondaryOutline => "btn-outline-secondary",
            Self::SuccessOutline => "btn-outline-success",
            Self::DangerOutline => "btn-outline-danger",
            Self::WarningOutline => "btn-outline-warning",
            Self::InfoOutline => "btn-outline-info",
            Self::LightOutline => "btn-outline-light",
            Self::DarkOutline => "btn-outline-dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// HTML `type` of a button element.
pub enum ButtonType {
    /// Plain button.
    Button,
    /// Submits the enclosing form.
    Submit,
    /// Resets the enclosing form.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    /// Attribute value for the `type` attribute.
    pub fn value(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Bootstrap button sizes.
pub enum ButtonSize {
    /// Regular button, no size class.
    Default,
    /// `btn-sm`.
    Small,
    /// `btn-lg`.
    Large,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonSize {
    /// Size class, if the size needs one.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Small => Some("btn-sm"),
            Self::Large => Some("btn-lg"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Contextual badge colors, rendered through the `text-bg-*` helpers.
pub enum BadgeVariant {
    /// Primary color.
    Primary,
    /// Secondary color.
    Secondary,
    /// Success color.
    Success,
    /// Danger color.
    Danger,
    /// Warning color.
    Warning,
    /// Info color.
    Info,
    /// Light color.
    Light,
    /// Dark color.
    Dark,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl BadgeVariant {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Primary => "text-bg-primary",
            Self::Secondary => "text-bg-secondary",
            Self::Success => "text-bg-success",
            Self::Danger => "text-bg-danger",
            Self::Warning => "text-bg-warning",
            Self::Info => "text-bg-info",
            Self::Light => "text-bg-light",
            Self::Dark => "text-bg-dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Badge corner shape.
pub enum BadgeStyle {
    /// Standard rounded corners.
    Default,
    /// Fully rounded pill.
    RoundedPill,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self::Default
    }
}

impl BadgeStyle {
    pub(crate) fn class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::RoundedPill => Some("rounded-pill"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Navbar background color.
pub enum BackgroundStyle {
    /// `bg-light`.
    Light,
    /// `bg-dark`.
    Dark,
    /// `bg-primary`.
    Primary,
    /// `bg-secondary`.
    Secondary,
    /// `bg-success`.
    Success,
    /// `bg-danger`.
    Danger,
    /// `bg-warning`.
    Warning,
    /// `bg-info`.
    Info,
    /// `bg-body-tertiary`.
    Body,
    /// `bg-transparent`.
    Transparent,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self::Light
    }
}

impl BackgroundStyle {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Light => "bg-light",
            Self::Dark => "bg-dark",
            Self::Primary => "bg-primary",
            Self::Secondary => "bg-secondary",
            Self::Success => "bg-success",
            Self::Danger => "bg-danger",
            Self::Warning => "bg-warning",
            Self::Info => "bg-info",
            Self::Body => "bg-body-tertiary",
            Self::Transparent => "bg-transparent",
        }
    }

    /// Value of `data-bs-theme` for content drawn on this background.
    pub fn theme(self) -> &'static str {
        match self {
            Self::Light | Self::Info | Self::Warning => "light",
            _ => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Breakpoint from which the navbar stops collapsing.
pub enum NavBarExpand {
    /// Expanded from `sm` up.
    Sm,
    /// Expanded from `md` up.
    Md,
    /// Expanded from `lg` up.
    Lg,
    /// Expanded from `xl` up.
    Xl,
    /// Expanded from `xxl` up.
    Xxl,
    /// Never collapses.
    Always,
}

impl Default for NavBarExpand {
    fn default() -> Self {
        Self::Lg
    }
}

impl NavBarExpand {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Sm => "navbar-expand-sm",
            Self::Md => "navbar-expand-md",
            Self::Lg => "navbar-expand-lg",
            Self::Xl => "navbar-expand-xl",
            Self::Xxl => "navbar-expand-xxl",
            Self::Always => "navbar-expand",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Horizontal placement of the navbar item list.
pub enum ItemsAlignment {
    /// Items hug the brand.
    Start,
    /// Items are centered.
    Center,
    /// Items are pushed to the trailing edge.
    End,
}

impl Default for ItemsAlignment {
    fn default() -> Self {
        Self::Start
    }
}

impl ItemsAlignment {
    /// Margin utility that realizes the alignment.
    pub fn class(self) -> &'static str {
        match self {
            Self::Start => "me-auto",
            Self::End => "ms-auto",
            Self::Center => "mx-auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// A CSS length.
pub enum CssLength {
    /// Pixels.
    Px(f32),
    /// Root em.
    Rem(f32),
    /// Em.
    Em(f32),
    /// Percent of the containing block.
    Percent(f32),
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{value}px"),
            Self::Rem(value) => write!(f, "{value}rem"),
            Self::Em(value) => write!(f, "{value}em"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

pub(crate) fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn merge_layout_class(base: &str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_is_light_only_on_pale_backgrounds() {
        for style in [BackgroundStyle::Light, BackgroundStyle::Info, BackgroundStyle::Warning] {
            assert_eq!(style.theme(), "light", "{style:?}");
        }
        for style in [
            BackgroundStyle::Dark,
            BackgroundStyle::Primary,
            BackgroundStyle::Secondary,
            BackgroundStyle::Success,
            BackgroundStyle::Danger,
            BackgroundStyle::Body,
            BackgroundStyle::Transparent,
        ] {
            assert_eq!(style.theme(), "dark", "{style:?}");
        }
    }

    #[test]
    fn alignment_maps_to_exactly_one_margin_utility() {
        assert_eq!(ItemsAlignment::Start.class(), "me-auto");
        assert_eq!(ItemsAlignment::End.class(), "ms-auto");
        assert_eq!(ItemsAlignment::Center.class(), "mx-auto");
    }

    #[test]
    fn every_variant_is_a_btn() {
        for variant in ButtonVariant::ALL {
            let [base, token] = variant.classes();
            assert_eq!(base, "btn");
            assert!(token.starts_with("btn-"), "{variant:?}");
        }
        assert_eq!(ButtonVariant::DangerOutline.classes(), ["btn", "btn-outline-danger"]);
    }

    #[test]
    fn css_length_renders_with_unit() {
        assert_eq!(CssLength::Px(8.0).to_string(), "8px");
        assert_eq!(CssLength::Rem(1.5).to_string(), "1.5rem");
        assert_eq!(CssLength::Percent(50.0).to_string(), "50%");
    }

    #[test]
    fn vocabulary_reads_kebab_case_names() {
        let variant: ButtonVariant = serde_json::from_str("\"primary-outline\"").expect("variant");
        assert_eq!(variant, ButtonVariant::PrimaryOutline);
        let expand: NavBarExpand = serde_json::from_str("\"xxl\"").expect("expand");
        assert_eq!(expand.class(), "navbar-expand-xxl");
        let length: CssLength = serde_json::from_str("{\"px\":16.0}").expect("length");
        assert_eq!(length, CssLength::Px(16.0));
    }

    #[test]
    fn join_classes_skips_empty_entries() {
        assert_eq!(join_classes(["btn", "", "d-flex"]), "btn d-flex");
        assert_eq!(merge_layout_class("form-control", Some("")), "form-control");
        assert_eq!(merge_layout_class("form-control", Some("me-2")), "form-control me-2");
    }
}
