use super::*;

const BADGE_ANCHOR: &str = "position-absolute top-0 start-100 translate-middle";

pub(crate) fn button_classes(variant: ButtonVariant, size: ButtonSize, has_badge: bool) -> String {
    let [base, color] = variant.classes();
    join_classes([
        base,
        color,
        size.class().unwrap_or_default(),
        "d-flex",
        "align-items-center",
        if has_badge { "position-relative" } else { "" },
    ])
}

/// A loading button must not be clickable; the native attribute does the suppression.
pub(crate) fn button_disabled(disabled: bool, loading: bool) -> bool {
    disabled || loading
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ButtonContent {
    Label(String),
    LoadingText(String),
    LoadingHidden,
}

impl ButtonContent {
    pub(crate) fn resolve(text: String, loading: bool, loading_text: Option<String>) -> Self {
        match (loading, loading_text) {
            (false, _) => Self::Label(text),
            (true, Some(loading_text)) => Self::LoadingText(loading_text),
            (true, None) => Self::LoadingHidden,
        }
    }

    fn render(self) -> View {
        match self {
            Self::Label(text) => view! { <span>{text}</span> }.into_view(),
            Self::LoadingText(text) => view! {
                <span
                    class="spinner-border spinner-border-sm"
                    style="margin-right: 6px"
                    role="status"
                    aria-hidden="true"
                ></span>
                {text}
            }
            .into_view(),
            Self::LoadingHidden => view! {
                <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                <span class="visually-hidden">"Loading..."</span>
            }
            .into_view(),
        }
    }
}

#[component]
/// Bootstrap button with loading and badge states.
///
/// The id is resolved once per mounted instance, so a generated id stays
/// stable for as long as the button lives. State props are signals: toggling
/// `loading` or `disabled` updates the attribute and content in place instead
/// of remounting the button. Clicks always reach `on_click`; while `loading`
/// the button carries `disabled`, which keeps the browser from dispatching
/// them at all.
pub fn Button(
    #[prop(optional_no_strip, into)] id: Option<String>,
    #[prop(into)] text: String,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] loading_text: MaybeSignal<Option<String>>,
    #[prop(optional_no_strip)] badge: Option<BadgeSpec>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let id = resolve_id(id, "button");
    let class = button_classes(variant, size, badge.is_some());

    view! {
        <button
            id=id
            type=button_type.value()
            class=class
            disabled=move || button_disabled(disabled.get(), loading.get())
            on:click=move |_| on_click.call(())
        >
            {badge.map(|badge| view! {
                <Badge
                    text=badge.text
                    variant=badge.variant
                    badge_style=badge.style
                    layout_class=BADGE_ANCHOR
                />
            })}
            {move || ButtonContent::resolve(text.clone(), loading.get(), loading_text.get()).render()}
        </button>
    }
}

#[component]
/// Bootstrap text input reporting edits and Enter presses.
pub fn TextInput(
    #[prop(optional_no_strip, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional)] on_enter_click: Option<Callback<()>>,
) -> impl IntoView {
    let id = resolve_id(id, "input");
    let initial_value = value.get_untracked();

    view! {
        <input
            type="text"
            id=id
            class=merge_layout_class("form-control", layout_class)
            placeholder=placeholder
            value=initial_value
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(on_value_change) = on_value_change.as_ref() {
                    on_value_change.call(event_target_value(&ev));
                }
            }
            on:keyup=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    if let Some(on_enter_click) = on_enter_click.as_ref() {
                        on_enter_click.call(());
                    }
                }
            }
        />
    }
}
