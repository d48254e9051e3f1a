//! Bootstrap 5 components for Leptos.
//!
//! Each component maps typed parameters (variant, size, state flags) to
//! Bootstrap markup and utility classes. Styling, responsiveness, and the
//! collapse/dropdown interactions stay with Bootstrap's own CSS and script,
//! which pick the elements up through their class names and `data-bs-*`
//! attributes, so those names are emitted exactly as Bootstrap expects them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod id;
mod primitives;

pub use id::generate_unique_id;
pub use primitives::{
    BackgroundStyle, Badge, BadgeSpec, BadgeStyle, BadgeVariant, Button, ButtonSize, ButtonType,
    ButtonVariant, CssLength, DropdownItem, ItemsAlignment, NavBar, NavBarBrand, NavBarButton,
    NavBarExpand, NavBarInputField, NavDropdown, NavItem, NavLink, TextInput,
};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        BackgroundStyle, Badge, BadgeSpec, BadgeStyle, BadgeVariant, Button, ButtonSize,
        ButtonType, ButtonVariant, CssLength, DropdownItem, ItemsAlignment, NavBar, NavBarBrand,
        NavBarButton, NavBarExpand, NavBarInputField, NavDropdown, NavItem, NavLink, TextInput,
    };
}
