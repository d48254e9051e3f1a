//! Navbar configuration for the showcase, read from JSON.

use bootstrap_ui::{BackgroundStyle, CssLength, ItemsAlignment, NavBarBrand, NavBarExpand};
use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration compiled into the showcase.
pub const EMBEDDED_CONFIG: &str = include_str!("../config/showcase.json");

const BOOTSTRAP_LOGO: &str = "https://getbootstrap.com/docs/5.3/assets/brand/bootstrap-logo.svg";

#[derive(Debug, Error)]
/// Reasons a showcase configuration is rejected.
pub enum ShowcaseConfigError {
    /// The document is not valid JSON for [`ShowcaseConfig`].
    #[error("showcase config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// Neither pages nor dropdown entries were declared.
    #[error("showcase config declares no navigation entries")]
    EmptyNavigation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Dropdown appended after the page links.
pub struct DropdownConfig {
    /// Toggle text.
    pub placeholder: String,
    /// Entry titles.
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Everything the showcase navbar is built from. Missing keys keep their defaults.
pub struct ShowcaseConfig {
    /// Brand block.
    pub brand: NavBarBrand,
    /// Navbar background.
    pub background_style: BackgroundStyle,
    /// Collapse breakpoint.
    pub expand: NavBarExpand,
    /// Item list placement.
    pub items_alignment: ItemsAlignment,
    /// Pins the navbar to the top of the viewport.
    pub sticky_top: bool,
    /// Container padding on both sides.
    pub horizontal_padding: CssLength,
    /// Page link titles, in order.
    pub pages: Vec<String>,
    /// Optional trailing dropdown.
    pub dropdown: Option<DropdownConfig>,
    /// Search field placeholder; no search field when absent.
    pub search_placeholder: Option<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            brand: NavBarBrand::new("Bootstrap UI").with_image(BOOTSTRAP_LOGO, CssLength::Px(30.0)),
            background_style: BackgroundStyle::Light,
            expand: NavBarExpand::Lg,
            items_alignment: ItemsAlignment::Start,
            sticky_top: true,
            horizontal_padding: CssLength::Px(16.0),
            pages: vec!["Home".to_string(), "Components".to_string(), "About".to_string()],
            dropdown: Some(DropdownConfig {
                placeholder: "More".to_string(),
                entries: vec!["Changelog".to_string(), "License".to_string()],
            }),
            search_placeholder: Some("Search".to_string()),
        }
    }
}

impl ShowcaseConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ShowcaseConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        let has_entries = config
            .dropdown
            .as_ref()
            .is_some_and(|dropdown| !dropdown.entries.is_empty());
        if config.pages.is_empty() && !has_entries {
            return Err(ShowcaseConfigError::EmptyNavigation);
        }
        Ok(config)
    }

    /// Like [`ShowcaseConfig::from_json`], falling back to the defaults on error.
    pub fn load(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("showcase config load failed: {err}");
                Self::default()
            }
        }
    }
}
