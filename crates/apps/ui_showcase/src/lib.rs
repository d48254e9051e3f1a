//! Showcase app for the Bootstrap component set.
//!
//! Renders every component family through `bootstrap_ui` with a navbar
//! built from [`ShowcaseConfig`], so class and attribute output can be
//! reviewed against Bootstrap's stylesheet in one page.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;

use bootstrap_ui::prelude::*;
use leptos::*;

pub use config::{DropdownConfig, ShowcaseConfig, ShowcaseConfigError, EMBEDDED_CONFIG};

/// Mounts the showcase with the embedded configuration.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}

fn variant_label(variant: ButtonVariant) -> String {
    format!("{variant:?}")
}

/// Page links first, then the optional dropdown, so a page's position in
/// `config.pages` equals its index in the navbar.
fn nav_items(
    config: &ShowcaseConfig,
    active_page: usize,
    on_page: Callback<usize>,
    on_entry: Callback<usize>,
) -> Vec<NavItem> {
    let mut items: Vec<NavItem> = config
        .pages
        .iter()
        .enumerate()
        .map(|(index, title)| NavLink::new(title.clone(), on_page).active(index == active_page).into())
        .collect();

    if let Some(dropdown) = config.dropdown.as_ref() {
        let entries = dropdown
            .entries
            .iter()
            .map(|title| DropdownItem::new(title.clone(), on_entry))
            .collect();
        items.push(NavDropdown::new(dropdown.placeholder.clone(), entries).into());
    }

    items
}

#[component]
/// Showcase page contents.
pub fn ShowcaseApp(
    /// Navbar configuration. The embedded configuration is used when absent.
    #[prop(optional)]
    config: Option<ShowcaseConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_else(|| ShowcaseConfig::load(EMBEDDED_CONFIG));

    let active_page = create_rw_signal(0_usize);
    let last_action = create_rw_signal("Nothing clicked yet".to_string());
    let search = create_rw_signal(String::new());
    let saving = create_rw_signal(false);

    let pages = config.pages.clone();
    let on_page = Callback::new(move |index: usize| {
        active_page.set(index);
        let title = pages.get(index).cloned().unwrap_or_default();
        last_action.set(format!("Opened {title}"));
    });
    let entries = config
        .dropdown
        .as_ref()
        .map(|dropdown| dropdown.entries.clone())
        .unwrap_or_default();
    let on_entry = Callback::new(move |index: usize| {
        let title = entries.get(index).cloned().unwrap_or_default();
        last_action.set(format!("Picked {title}"));
    });
    let on_search = Callback::new(move |value: String| search.set(value));
    let on_search_enter = Callback::new(move |_: ()| {
        last_action.set(format!("Searched for {:?}", search.get_untracked()));
    });
    let on_sign_in = Callback::new(move |_: ()| last_action.set("Signed in".to_string()));

    let navbar = move || {
        let input_field = config.search_placeholder.clone().map(|placeholder| {
            NavBarInputField::new(placeholder, on_search, on_search_enter)
                .with_id("showcase-search")
                .with_value(Signal::derive(move || search.get()))
        });
        let button = NavBarButton::new("Sign in", on_sign_in)
            .with_id("showcase-sign-in")
            .with_variant(ButtonVariant::SuccessOutline);

        view! {
            <NavBar
                sticky_top=config.sticky_top
                brand=Some(config.brand.clone())
                items=nav_items(&config, active_page.get(), on_page, on_entry)
                items_alignment=config.items_alignment
                input_field=input_field
                button=Some(button)
                expand=config.expand
                horizontal_padding=config.horizontal_padding
                background_style=config.background_style
            />
        }
    };

    let record = move |label: String| Callback::new(move |_: ()| last_action.set(format!("Clicked {label}")));

    view! {
        {navbar}
        <main class="container py-4">
            <section class="mb-4">
                <h2 class="h5">"Variants"</h2>
                <div class="d-flex flex-wrap gap-2">
                    {ButtonVariant::ALL
                        .into_iter()
                        .map(|variant| {
                            let label = variant_label(variant);
                            view! { <Button text=label.clone() variant=variant on_click=record(label) /> }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mb-4">
                <h2 class="h5">"Sizes and types"</h2>
                <div class="d-flex flex-wrap align-items-center gap-2">
                    <Button text="Small" size=ButtonSize::Small on_click=record("Small".to_string()) />
                    <Button text="Default" on_click=record("Default".to_string()) />
                    <Button text="Large" size=ButtonSize::Large on_click=record("Large".to_string()) />
                    <Button
                        text="Reset"
                        button_type=ButtonType::Reset
                        variant=ButtonVariant::Secondary
                        on_click=record("Reset".to_string())
                    />
                </div>
            </section>

            <section class="mb-4">
                <h2 class="h5">"States"</h2>
                <div class="d-flex flex-wrap align-items-center gap-2">
                    <Button text="Disabled" disabled=true on_click=record("Disabled".to_string()) />
                    <Button
                        text="Save"
                        loading=saving
                        loading_text=Some("Saving...".to_string())
                        on_click=Callback::new(move |_: ()| saving.set(true))
                    />
                    <Button
                        text="Stop saving"
                        variant=ButtonVariant::Link
                        on_click=Callback::new(move |_: ()| saving.set(false))
                    />
                    <Button
                        text="Busy"
                        variant=ButtonVariant::Secondary
                        loading=true
                        on_click=record("Busy".to_string())
                    />
                    <Button
                        text="Inbox"
                        variant=ButtonVariant::Light
                        badge=Some(
                            BadgeSpec::new("99+")
                                .with_style(BadgeStyle::RoundedPill)
                                .with_variant(BadgeVariant::Danger),
                        )
                        on_click=record("Inbox".to_string())
                    />
                </div>
            </section>

            <section class="mb-4">
                <h2 class="h5">"Badges"</h2>
                <div class="d-flex flex-wrap gap-2">
                    <Badge text="Primary" />
                    <Badge text="Success" variant=BadgeVariant::Success />
                    <Badge text="Warning" variant=BadgeVariant::Warning badge_style=BadgeStyle::RoundedPill />
                    <Badge text="Dark" variant=BadgeVariant::Dark />
                </div>
            </section>

            <p class="text-body-secondary" role="status">{move || last_action.get()}</p>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(items: &[NavItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                NavItem::Link(link) => link.title.clone(),
                NavItem::Dropdown(dropdown) => format!("{}▾", dropdown.placeholder),
            })
            .collect()
    }

    #[test]
    fn pages_precede_dropdown_and_keep_order() {
        let _ = leptos::create_runtime();
        let config = ShowcaseConfig::default();
        let items = nav_items(
            &config,
            1,
            Callback::new(|_: usize| {}),
            Callback::new(|_: usize| {}),
        );
        assert_eq!(titles(&items), vec!["Home", "Components", "About", "More▾"]);
    }

    #[test]
    fn only_the_active_page_is_marked() {
        let _ = leptos::create_runtime();
        let config = ShowcaseConfig::default();
        let items = nav_items(
            &config,
            1,
            Callback::new(|_: usize| {}),
            Callback::new(|_: usize| {}),
        );
        let active: Vec<bool> = items
            .iter()
            .filter_map(|item| match item {
                NavItem::Link(link) => Some(link.active),
                NavItem::Dropdown(_) => None,
            })
            .collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn dropdown_entries_share_the_entry_handler() {
        let _ = leptos::create_runtime();
        let picked = create_rw_signal(Vec::<usize>::new());
        let config = ShowcaseConfig::default();
        let items = nav_items(
            &config,
            0,
            Callback::new(|_: usize| {}),
            Callback::new(move |index: usize| picked.update(|seen| seen.push(index))),
        );
        let Some(NavItem::Dropdown(dropdown)) = items.last() else {
            panic!("expected trailing dropdown");
        };
        for (index, entry) in dropdown.items.iter().enumerate() {
            entry.on_click.call(index);
        }
        assert_eq!(picked.get_untracked(), vec![0, 1]);
    }

    #[test]
    fn config_without_dropdown_yields_links_only() {
        let _ = leptos::create_runtime();
        let config = ShowcaseConfig {
            dropdown: None,
            ..ShowcaseConfig::default()
        };
        let items = nav_items(
            &config,
            0,
            Callback::new(|_: usize| {}),
            Callback::new(|_: usize| {}),
        );
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| matches!(item, NavItem::Link(_))));
    }

    #[test]
    fn variant_labels_are_distinct() {
        let mut labels: Vec<String> = ButtonVariant::ALL.into_iter().map(variant_label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ButtonVariant::ALL.len());
    }
}
