//! Sign-in page.

use dioxus::prelude::*;
use portal_core::{validate, InputChange, InputKind, Page, Session};
use portal_ui::{Button, ButtonType, IconOptions, Input, LockIcon, MailIcon};

use crate::app::Route;
use crate::components::LazyPage;
use crate::context::{sign_in, use_auth};
use crate::pages::FormErrors;

#[component]
pub fn Login() -> Element {
    rsx! {
        LazyPage { page: Page::Login, LoginForm {} }
    }
}

#[component]
fn LoginForm() -> Element {
    let navigator = use_navigator();
    let auth = use_auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);

    let submit = move |_| {
        let mut found = FormErrors::default();
        found
            .check("email", validate::email(&email()))
            .check("password", validate::required(&password(), "Password"));

        if found.is_empty() {
            sign_in(auth, Session::new(email().trim()));
            navigator.replace(Route::Home {});
        }
        errors.set(found);
    };

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
                error: errors.read().get("email"),
                icon_options: IconOptions::start(rsx! { MailIcon {} }),
                on_change: move |change: InputChange| email.set(change.value_or_default()),
            }
            Input {
                kind: InputKind::Password,
                name: "password".to_string(),
                label: "Password".to_string(),
                show_label: true,
                mandatory: true,
                full_width: true,
                value: password(),
                error: errors.read().get("password"),
                on_change: move |change: InputChange| password.set(change.value_or_default()),
            }
            div { class: "auth-links",
                Link { to: Route::ForgotPassword {}, "Forgot password?" }
            }
            Button {
                button_type: ButtonType::Submit,
                full_width: true,
                onclick: submit,
                LockIcon {}
                " Sign in"
            }
            p { class: "auth-alt",
                "New here? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
