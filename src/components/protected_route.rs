//! Auth guard layout for protected routes.

use dioxus::prelude::*;
use portal_core::routes::{self, Resolution};

use crate::app::{redirect_for, Route};
use crate::components::PageLoading;
use crate::context::use_auth;

/// Renders the nested route when signed in, redirects to `/login` otherwise.
///
/// While the session is still being restored it shows the loading frame
/// instead of bouncing the user.
#[component]
pub fn ProtectedRoute() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let path = use_route::<Route>().to_string();

    use_effect(use_reactive((&path,), move |(path,)| {
        if let Some(target) = redirect_for(&path, &auth.read()) {
            tracing::debug!("No session for {}, redirecting to {}", path, target);
            navigator.replace(target);
        }
    }));

    let resolution = routes::resolve(&path, &auth.read());
    match resolution {
        Resolution::Render(_) => rsx! { Outlet::<Route> {} },
        Resolution::Pending => rsx! { PageLoading {} },
        Resolution::Redirect(_) => rsx! {},
    }
}
