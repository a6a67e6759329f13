//! Account registration page.

use dioxus::prelude::*;
use portal_core::{validate, CountryInfo, InputChange, InputKind, Page, Session};
use portal_ui::{Button, ButtonType, Input};

use crate::app::Route;
use crate::components::LazyPage;
use crate::context::{sign_in, use_auth};
use crate::pages::FormErrors;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn Register() -> Element {
    rsx! {
        LazyPage { page: Page::Register, RegisterForm {} }
    }
}

#[component]
fn RegisterForm() -> Element {
    let navigator = use_navigator();
    let auth = use_auth();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut mobile_country: Signal<Option<CountryInfo>> = use_signal(|| None);
    let mut mobile_valid = use_signal(|| false);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);

    let submit = move |_| {
        let mut found = FormErrors::default();
        found
            .check("name", validate::required(&name(), "Name"))
            .check("email", validate::email(&email()))
            .check(
                "mobile",
                (!mobile_valid()).then(|| "Enter a valid mobile number".to_string()),
            )
            .check(
                "password",
                validate::min_length(&password(), MIN_PASSWORD_LEN, "Password"),
            );

        if found.is_empty() {
            if let Some(country) = mobile_country.read().as_ref() {
                tracing::debug!("Registering with a {} number", country.name);
            }
            sign_in(auth, Session::new(email().trim()).with_name(name().trim()));
            navigator.replace(Route::Home {});
        }
        errors.set(found);
    };

    rsx! {
        div { class: "auth-form",
            Input {
                name: "name".to_string(),
                label: "Full name".to_string(),
                show_label: true,
                mandatory: true,
                full_width: true,
                value: name(),
                error: errors.read().get("name"),
                on_change: move |change: InputChange| name.set(change.value_or_default()),
            }
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
                on_change: move |change: InputChange| email.set(change.value_or_default()),
            }
            Input {
                kind: InputKind::Mobile,
                name: "mobile".to_string(),
                label: "Mobile".to_string(),
                show_label: true,
                mandatory: true,
                full_width: true,
                value: mobile(),
                error: errors.read().get("mobile"),
                is_number_valid: move |valid: bool| mobile_valid.set(valid),
                on_change: move |change: InputChange| {
                    mobile.set(change.value_or_default());
                    mobile_country.set(change.country);
                },
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
            Button {
                button_type: ButtonType::Submit,
                full_width: true,
                onclick: submit,
                "Create account"
            }
            p { class: "auth-alt",
                "Already registered? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
