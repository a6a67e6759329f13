//! Inline SVG icons

use dioxus::prelude::*;

const EYE_PATH: &str = "M12 5C6.5 5 2.7 9.1 1.5 12c1.2 2.9 5 7 10.5 7s9.3-4.1 10.5-7C21.3 9.1 17.5 5 12 5zm0 11.5a4.5 4.5 0 1 1 0-9 4.5 4.5 0 0 1 0 9zm0-7a2.5 2.5 0 1 0 0 5 2.5 2.5 0 0 0 0-5z";
const SLASH_PATH: &str = "M3.4 2 2 3.4 20.6 22l1.4-1.4z";
const MAIL_PATH: &str = "M3 5h18a1 1 0 0 1 1 1v12a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1zm9 7.2L4.4 7H4v.6l8 5.5 8-5.5V7h-.4z";
const LOCK_PATH: &str = "M7 10V7a5 5 0 0 1 10 0v3h1a1 1 0 0 1 1 1v9a1 1 0 0 1-1 1H6a1 1 0 0 1-1-1v-9a1 1 0 0 1 1-1zm2 0h6V7a3 3 0 0 0-6 0z";

/// Shown while a password is revealed
#[component]
pub fn EyeIcon() -> Element {
    rsx! {
        svg { class: "icon", width: "1em", height: "1em", view_box: "0 0 24 24", fill: "currentColor",
            path { d: EYE_PATH }
        }
    }
}

/// Shown while a password is masked
#[component]
pub fn EyeInvisibleIcon() -> Element {
    rsx! {
        svg { class: "icon", width: "1em", height: "1em", view_box: "0 0 24 24", fill: "currentColor",
            path { d: EYE_PATH }
            path { d: SLASH_PATH }
        }
    }
}

#[component]
pub fn MailIcon() -> Element {
    rsx! {
        svg { class: "icon", width: "1em", height: "1em", view_box: "0 0 24 24", fill: "currentColor",
            path { d: MAIL_PATH }
        }
    }
}

#[component]
pub fn LockIcon() -> Element {
    rsx! {
        svg { class: "icon", width: "1em", height: "1em", view_box: "0 0 24 24", fill: "currentColor",
            path { d: LOCK_PATH }
        }
    }
}
