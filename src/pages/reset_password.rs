//! New password page, reached from a reset link.

use dioxus::prelude::*;
use portal_core::{validate, InputChange, InputKind, Page};
use portal_ui::{Button, ButtonType, Input};

use crate::app::Route;
use crate::components::LazyPage;
use crate::pages::FormErrors;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn ResetPassword() -> Element {
    rsx! {
        LazyPage { page: Page::ResetPassword, ResetPasswordForm {} }
    }
}

#[component]
fn ResetPasswordForm() -> Element {
    let navigator = use_navigator();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut done = use_signal(|| false);

    let submit = move |_| {
        let mut found = FormErrors::default();
        found
            .check(
                "password",
                validate::min_length(&password(), MIN_PASSWORD_LEN, "Password"),
            )
            .check("confirm", validate::matching(&password(), &confirm()));
        done.set(found.is_empty());
        errors.set(found);
    };

    if done() {
        return rsx! {
            div { class: "auth-form",
                p { class: "auth-notice", role: "status", "Your password has been updated." }
                Button {
                    full_width: true,
                    onclick: move |_| {
                        navigator.replace(Route::Login {});
                    },
                    "Sign in"
                }
            }
        };
    }

    rsx! {
        div { class: "auth-form",
            Input {
                kind: InputKind::Password,
                name: "password".to_string(),
                label: "New password".to_string(),
                show_label: true,
                mandatory: true,
                full_width: true,
                value: password(),
                error: errors.read().get("password"),
                on_change: move |change: InputChange| password.set(change.value_or_default()),
            }
            Input {
                kind: InputKind::Password,
                name: "confirm".to_string(),
                label: "Confirm password".to_string(),
                show_label: true,
                mandatory: true,
                full_width: true,
                value: confirm(),
                error: errors.read().get("confirm"),
                on_change: move |change: InputChange| confirm.set(change.value_or_default()),
            }
            Button {
                button_type: ButtonType::Submit,
                full_width: true,
                onclick: submit,
                "Update password"
            }
        }
    }
}
