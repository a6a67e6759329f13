//! Password reset request page.

use dioxus::prelude::*;
use portal_core::{validate, InputChange, InputKind, Page};
use portal_ui::{Button, ButtonType, ButtonVariant, IconOptions, Input, MailIcon};

use crate::app::Route;
use crate::components::LazyPage;

#[component]
pub fn ForgotPassword() -> Element {
    rsx! {
        LazyPage { page: Page::ForgotPassword, ForgotPasswordForm {} }
    }
}

#[component]
fn ForgotPasswordForm() -> Element {
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut sent_to: Signal<Option<String>> = use_signal(|| None);

    let submit = move |_| {
        let problem = validate::email(&email());
        if problem.is_none() {
            sent_to.set(Some(email().trim().to_string()));
        }
        error.set(problem);
    };

    if let Some(address) = sent_to() {
        return rsx! {
            div { class: "auth-form",
                p { class: "auth-notice", role: "status",
                    "If an account exists for {address}, a reset link is on its way."
                }
                Button {
                    variant: ButtonVariant::Outlined,
                    full_width: true,
                    onclick: move |_| {
                        navigator.push(Route::Login {});
                    },
                    "Back to sign in"
                }
            }
        };
    }

    rsx! {
        div { class: "auth-form",
            Input {
                kind: InputKind::Email,
                name: "email".to_string(),
                label: "Email".to_string(),
                show_label: true,
                mandatory: true,
                full_width: true,
                placeholder: "you@example.com".to_string(),
                value: email(),
                error: error(),
                icon_options: IconOptions::start(rsx! { MailIcon {} }),
                on_change: move |change: InputChange| email.set(change.value_or_default()),
            }
            Button {
                button_type: ButtonType::Submit,
                full_width: true,
                onclick: submit,
                "Send reset link"
            }
            p { class: "auth-alt",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
