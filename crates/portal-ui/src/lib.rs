//! Portal UI Components
//!
//! Dioxus form components for the portal client: a [`Button`] primitive and
//! a polymorphic [`Input`] that dispatches on its [`InputKind`] to one of
//! five concrete editors.
//!
//! Every field is controlled. The caller owns the value, passes it back in
//! through `value`, and receives edits through `on_change`. The only state a
//! component keeps for itself is presentational (password visibility, the
//! phone country picker).

pub mod components;

pub use components::*;
pub use portal_core::{
    CountryInfo, DropdownOption, DropdownOptions, InputChange, InputKind, InputSize,
};
