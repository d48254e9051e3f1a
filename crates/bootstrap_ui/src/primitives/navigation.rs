use super::*;

const COLLAPSE_TARGET: &str = "navbarSupportedContent";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Brand block shown at the leading edge of a navbar.
pub struct NavBarBrand {
    /// Brand title.
    pub title: String,
    /// Link target of the brand.
    #[serde(default = "default_brand_href")]
    pub href: String,
    /// Optional logo URL, drawn before the title.
    #[serde(default)]
    pub image: Option<String>,
    /// Logo width.
    #[serde(default = "default_brand_image_width")]
    pub image_width: CssLength,
}

fn default_brand_href() -> String {
    "#".to_string()
}

fn default_brand_image_width() -> CssLength {
    CssLength::Px(40.0)
}

impl NavBarBrand {
    /// Text-only brand linking to `#`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: default_brand_href(),
            image: None,
            image_width: default_brand_image_width(),
        }
    }

    /// Sets the brand link target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    /// Adds a logo of the given width.
    pub fn with_image(mut self, image: impl Into<String>, width: CssLength) -> Self {
        self.image = Some(image.into());
        self.image_width = width;
        self
    }
}

#[derive(Clone)]
/// Plain navigation link. `on_click` receives the link's position in the navbar item list.
pub struct NavLink {
    /// Element id of the list item.
    pub id: String,
    /// Link text.
    pub title: String,
    /// Marks the current page.
    pub active: bool,
    /// Greys the link out.
    pub disabled: bool,
    /// Click handler.
    pub on_click: Callback<usize>,
}

impl NavLink {
    /// Inactive, enabled link with a generated id.
    pub fn new(title: impl Into<String>, on_click: impl Into<Callback<usize>>) -> Self {
        Self {
            id: resolve_id(None, "nav-link"),
            title: title.into(),
            active: false,
            disabled: false,
            on_click: on_click.into(),
        }
    }

    /// Replaces the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = resolve_id(Some(id.into()), "nav-link");
        self
    }

    /// Sets the active flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Clone)]
/// Entry of a [`NavDropdown`]. `on_click` receives the entry's position within its dropdown.
pub struct DropdownItem {
    /// Element id of the list item.
    pub id: String,
    /// Entry text.
    pub title: String,
    /// Click handler.
    pub on_click: Callback<usize>,
}

impl DropdownItem {
    /// Entry with a generated id.
    pub fn new(title: impl Into<String>, on_click: impl Into<Callback<usize>>) -> Self {
        Self {
            id: resolve_id(None, "dropdown-item"),
            title: title.into(),
            on_click: on_click.into(),
        }
    }

    /// Replaces the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = resolve_id(Some(id.into()), "dropdown-item");
        self
    }
}

#[derive(Clone)]
/// Dropdown menu within the navbar item list.
pub struct NavDropdown {
    /// Toggle text.
    pub placeholder: String,
    /// Menu entries, in display order.
    pub items: Vec<DropdownItem>,
}

impl NavDropdown {
    /// Dropdown with the given toggle text and entries.
    pub fn new(placeholder: impl Into<String>, items: Vec<DropdownItem>) -> Self {
        Self {
            placeholder: placeholder.into(),
            items,
        }
    }
}

#[derive(Clone)]
/// One entry of the navbar item list.
pub enum NavItem {
    /// Plain link.
    Link(NavLink),
    /// Dropdown menu.
    Dropdown(NavDropdown),
}

impl From<NavLink> for NavItem {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<NavDropdown> for NavItem {
    fn from(dropdown: NavDropdown) -> Self {
        Self::Dropdown(dropdown)
    }
}

#[derive(Clone)]
/// Search field rendered in the navbar's trailing form.
pub struct NavBarInputField {
    /// Element id.
    pub id: String,
    /// Placeholder text.
    pub placeholder: String,
    /// Current value.
    pub value: MaybeSignal<String>,
    /// Receives every edit.
    pub on_value_change: Callback<String>,
    /// Fired on Enter.
    pub on_enter_click: Callback<()>,
}

impl NavBarInputField {
    /// Empty field with a generated id.
    pub fn new(
        placeholder: impl Into<String>,
        on_value_change: impl Into<Callback<String>>,
        on_enter_click: impl Into<Callback<()>>,
    ) -> Self {
        Self {
            id: resolve_id(None, "input"),
            placeholder: placeholder.into(),
            value: MaybeSignal::default(),
            on_value_change: on_value_change.into(),
            on_enter_click: on_enter_click.into(),
        }
    }

    /// Replaces the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = resolve_id(Some(id.into()), "input");
        self
    }

    /// Binds the displayed value.
    pub fn with_value(mut self, value: impl Into<MaybeSignal<String>>) -> Self {
        self.value = value.into();
        self
    }
}

#[derive(Clone)]
/// Button rendered at the end of the navbar's trailing form.
pub struct NavBarButton {
    /// Explicit element id; generated by the button when absent.
    pub id: Option<String>,
    /// Label.
    pub text: String,
    /// Color variant.
    pub variant: ButtonVariant,
    /// Disables the button.
    pub disabled: MaybeSignal<bool>,
    /// Shows the spinner and disables the button.
    pub loading: MaybeSignal<bool>,
    /// Text next to the spinner while loading.
    pub loading_text: MaybeSignal<Option<String>>,
    /// Badge drawn over the button's corner.
    pub badge: Option<BadgeSpec>,
    /// Click handler.
    pub on_click: Callback<()>,
}

impl NavBarButton {
    /// Enabled primary button.
    pub fn new(text: impl Into<String>, on_click: impl Into<Callback<()>>) -> Self {
        Self {
            id: None,
            text: text.into(),
            variant: ButtonVariant::Primary,
            disabled: MaybeSignal::default(),
            loading: MaybeSignal::default(),
            loading_text: MaybeSignal::default(),
            badge: None,
            on_click: on_click.into(),
        }
    }

    /// Sets the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the color variant.
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: impl Into<MaybeSignal<bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    /// Sets the loading flag and optional loading text.
    pub fn loading(
        mut self,
        loading: impl Into<MaybeSignal<bool>>,
        loading_text: impl Into<MaybeSignal<Option<String>>>,
    ) -> Self {
        self.loading = loading.into();
        self.loading_text = loading_text.into();
        self
    }

    /// Attaches a badge.
    pub fn with_badge(mut self, badge: BadgeSpec) -> Self {
        self.badge = Some(badge);
        self
    }
}

pub(crate) fn navbar_classes(
    expand: NavBarExpand,
    background_style: BackgroundStyle,
    sticky_top: bool,
) -> String {
    join_classes([
        "navbar",
        expand.class(),
        background_style.class(),
        if sticky_top { "sticky-top" } else { "" },
    ])
}

pub(crate) fn nav_link_classes(active: bool, disabled: bool) -> String {
    join_classes([
        "nav-link",
        if active { "active" } else { "" },
        if disabled { "disabled" } else { "" },
    ])
}

fn brand_view(brand: NavBarBrand) -> impl IntoView {
    let NavBarBrand {
        title,
        href,
        image,
        image_width,
    } = brand;

    view! {
        <a class="navbar-brand" href=href>
            <span class="d-inline-flex align-items-center">
                {image.map(|src| view! {
                    <img
                        src=src
                        alt="logo"
                        class="d-inline-block align-text-top"
                        style=format!("width: {image_width}; margin-right: 8px")
                    />
                })}
                <span>{title}</span>
            </span>
        </a>
    }
}

/// Navbar entry with its click handlers bound to their indices.
pub(crate) enum BoundNavItem {
    Link(NavLink, Callback<()>),
    Dropdown(NavDropdown, Vec<Callback<()>>),
}

/// Feeds `index` to `on_click` whenever the returned handler fires.
pub(crate) fn indexed_click(on_click: Callback<usize>, index: usize) -> Callback<()> {
    Callback::new(move |_: ()| on_click.call(index))
}

/// Links get their position in `items`, dropdown entries their position
/// within their own dropdown. Active and disabled flags do not unwire a link.
pub(crate) fn bind_items(items: Vec<NavItem>) -> Vec<BoundNavItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            NavItem::Link(link) => {
                let click = indexed_click(link.on_click, index);
                BoundNavItem::Link(link, click)
            }
            NavItem::Dropdown(dropdown) => {
                let clicks = dropdown
                    .items
                    .iter()
                    .enumerate()
                    .map(|(entry, item)| indexed_click(item.on_click, entry))
                    .collect();
                BoundNavItem::Dropdown(dropdown, clicks)
            }
        })
        .collect()
}

fn nav_link_view(link: NavLink, click: Callback<()>) -> impl IntoView {
    let NavLink {
        id,
        title,
        active,
        disabled,
        ..
    } = link;

    view! {
        <li id=id class="nav-item" on:click=move |_| click.call(())>
            <a
                class=nav_link_classes(active, disabled)
                style="cursor: pointer"
                aria-current=active.then_some("page")
            >
                {title}
            </a>
        </li>
    }
}

fn nav_dropdown_view(dropdown: NavDropdown, clicks: Vec<Callback<()>>) -> impl IntoView {
    let NavDropdown { placeholder, items } = dropdown;
    if items.is_empty() {
        logging::debug_warn!("navbar dropdown {placeholder:?} has no items");
    }

    let entries = items
        .into_iter()
        .zip(clicks)
        .map(|(item, click)| {
            let DropdownItem { id, title, .. } = item;
            view! {
                <li id=id on:click=move |_| click.call(())>
                    <a class="dropdown-item" style="cursor: pointer">{title}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <li class="nav-item dropdown">
            <a
                class="nav-link dropdown-toggle"
                role="button"
                data-bs-toggle="dropdown"
                aria-expanded=bool_token(false)
            >
                {placeholder}
            </a>
            <ul class="dropdown-menu">{entries}</ul>
        </li>
    }
}

#[component]
/// Responsive Bootstrap navbar.
///
/// Collapsing and dropdown toggling are left to Bootstrap's own script,
/// which finds the toggler and menus through their `data-bs-*` attributes.
/// Item click handlers receive the item's index in `items`; dropdown entries
/// receive their index within the dropdown.
pub fn NavBar(
    #[prop(optional)] sticky_top: bool,
    #[prop(optional_no_strip)] brand: Option<NavBarBrand>,
    items: Vec<NavItem>,
    #[prop(default = ItemsAlignment::Start)] items_alignment: ItemsAlignment,
    #[prop(optional_no_strip)] input_field: Option<NavBarInputField>,
    #[prop(optional_no_strip)] button: Option<NavBarButton>,
    #[prop(default = NavBarExpand::Lg)] expand: NavBarExpand,
    #[prop(default = CssLength::Px(8.0))] horizontal_padding: CssLength,
    #[prop(default = BackgroundStyle::Light)] background_style: BackgroundStyle,
) -> impl IntoView {
    let input_margin = if button.is_some() { "me-2" } else { "" };

    let items = bind_items(items)
        .into_iter()
        .map(|item| match item {
            BoundNavItem::Link(link, click) => nav_link_view(link, click).into_view(),
            BoundNavItem::Dropdown(dropdown, clicks) => {
                nav_dropdown_view(dropdown, clicks).into_view()
            }
        })
        .collect_view();

    view! {
        <nav
            class=navbar_classes(expand, background_style, sticky_top)
            data-bs-theme=background_style.theme()
        >
            <div
                class="container-fluid"
                style=format!(
                    "padding-left: {horizontal_padding}; padding-right: {horizontal_padding}"
                )
            >
                {brand.map(brand_view)}
                <button
                    class="navbar-toggler"
                    type="button"
                    data-bs-toggle="collapse"
                    data-bs-target=format!("#{COLLAPSE_TARGET}")
                    aria-controls=COLLAPSE_TARGET
                    aria-expanded=bool_token(false)
                    aria-label="Toggle Navigation"
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div id=COLLAPSE_TARGET class="collapse navbar-collapse">
                    <ul class=join_classes(["navbar-nav", items_alignment.class()])>{items}</ul>
                    <form class="d-flex" role="search">
                        {input_field.map(|input| view! {
                            <TextInput
                                id=input.id
                                placeholder=input.placeholder
                                value=input.value
                                layout_class=input_margin
                                on_value_change=input.on_value_change
                                on_enter_click=input.on_enter_click
                            />
                        })}
                        {button.map(|button| view! {
                            <Button
                                id=button.id
                                text=button.text
                                variant=button.variant
                                disabled=button.disabled
                                loading=button.loading
                                loading_text=button.loading_text
                                badge=button.badge
                                on_click=button.on_click
                            />
                        })}
                    </form>
                </div>
            </div>
        </nav>
    }
}
