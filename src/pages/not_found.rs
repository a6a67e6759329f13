use dioxus::prelude::*;

use crate::app::fallback_for;
use crate::context::use_auth;

/// Catch-all route: replaces the unmatched path with `/`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let auth = use_auth();
    let path = format!("/{}", segments.join("/"));

    use_effect(move || {
        let target = fallback_for(&path, &auth.peek());
        tracing::debug!("No route for {}, redirecting to {}", path, target);
        navigator.replace(target);
    });

    rsx! {}
}
