use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Decorative badge attached to another component.
pub struct BadgeSpec {
    /// Badge label.
    pub text: String,
    /// Corner shape.
    #[serde(default)]
    pub style: BadgeStyle,
    /// Color.
    #[serde(default)]
    pub variant: BadgeVariant,
}

impl BadgeSpec {
    /// Primary badge with standard corners.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Replaces the corner shape.
    pub fn with_style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the color.
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

pub(crate) fn badge_classes(
    variant: BadgeVariant,
    badge_style: BadgeStyle,
    layout_class: Option<&'static str>,
) -> String {
    let base = join_classes(["badge", variant.class(), badge_style.class().unwrap_or_default()]);
    merge_layout_class(&base, layout_class)
}

#[component]
/// Small count or status label.
pub fn Badge(
    #[prop(into)] text: String,
    #[prop(default = BadgeVariant::Primary)] variant: BadgeVariant,
    #[prop(default = BadgeStyle::Default)] badge_style: BadgeStyle,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span class=badge_classes(variant, badge_style, layout_class)>{text}</span>
    }
}
