//! Scroll reset layout.

use dioxus::prelude::*;

use crate::app::Route;

/// Wraps every route and scrolls the window to the top on each path change.
#[component]
pub fn ScrollToTop() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();

    use_effect(use_reactive((&path,), |(path,)| {
        tracing::debug!("Navigated to {}", path);
        let _ = document::eval("window.scrollTo(0, 0);");
    }));

    rsx! {
        Outlet::<Route> {}
    }
}
