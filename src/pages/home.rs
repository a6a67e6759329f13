//! Home - the signed-in landing page.

use dioxus::prelude::*;
use portal_core::{CurrencyFormat, DropdownOption, DropdownOptions, InputChange, InputKind, Page};
use portal_ui::{Button, ButtonVariant, Input};

use crate::components::LazyPage;
use crate::context::{sign_out, use_auth};

#[component]
pub fn Home() -> Element {
    rsx! {
        LazyPage { page: Page::Home, HomePanel {} }
    }
}

fn categories() -> DropdownOptions {
    DropdownOptions::new(vec![
        DropdownOption::new("General", "general"),
        DropdownOption::new("Travel", "travel"),
        DropdownOption::new("Groceries", "groceries"),
        DropdownOption::new("Utilities", "utilities"),
    ])
    .with_default("general")
}

#[component]
fn HomePanel() -> Element {
    let auth = use_auth();
    let mut budget = use_signal(String::new);
    let mut category = use_signal(String::new);

    let name = auth
        .read()
        .user
        .as_ref()
        .map(|user| user.display_name.clone())
        .unwrap_or_default();
    let shown_budget = CurrencyFormat::INR.format_value(&budget());
    let shown_category = if category().is_empty() {
        "general".to_string()
    } else {
        category()
    };

    rsx! {
        section { class: "home-panel",
            p { class: "home-greeting", "Hello, {name}" }
            Input {
                kind: InputKind::Price,
                name: "budget".to_string(),
                label: "Monthly budget".to_string(),
                show_label: true,
                full_width: true,
                placeholder: "\u{20B9}0".to_string(),
                value: budget(),
                on_change: move |change: InputChange| budget.set(change.value_or_default()),
            }
            Input {
                kind: InputKind::Dropdown,
                name: "category".to_string(),
                label: "Category".to_string(),
                show_label: true,
                full_width: true,
                value: category(),
                dropdown_options: categories(),
                on_change: move |change: InputChange| category.set(change.value_or_default()),
            }
            if !budget().is_empty() {
                p { class: "home-summary", "{shown_budget} set aside for {shown_category}" }
            }
            Button {
                variant: ButtonVariant::Outlined,
                full_width: true,
                onclick: move |_| sign_out(auth),
                "Sign out"
            }
        }
    }
}
