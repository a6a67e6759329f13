use std::str::FromStr;

use dioxus::prelude::*;
use portal_core::routes::{self, Resolution};
use portal_core::{AuthState, Page, PageCache, Session};

use crate::components::{ProtectedRoute, ScrollToTop};
use crate::context::get_config;
use crate::pages::{ForgotPassword, Home, Login, NotFound, Register, ResetPassword};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/login`, `/register`, `/forgot-password`, `/reset-password` - public pages
/// - `/` - Home, behind the auth guard
/// - anything else - redirected to `/`
///
/// Every route sits inside [`ScrollToTop`], so each path change starts at
/// the top of the page.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ScrollToTop)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/forgot-password")]
        ForgotPassword {},
        #[route("/reset-password")]
        ResetPassword {},
        #[layout(ProtectedRoute)]
            #[route("/")]
            Home {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Route::Login {},
            Page::Register => Route::Register {},
            Page::ForgotPassword => Route::ForgotPassword {},
            Page::ResetPassword => Route::ResetPassword {},
            Page::Home => Route::Home {},
        }
    }
}

impl Route {
    /// The page this route renders, `None` for the catch-all
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Login {} => Some(Page::Login),
            Route::Register {} => Some(Page::Register),
            Route::ForgotPassword {} => Some(Page::ForgotPassword),
            Route::ResetPassword {} => Some(Page::ResetPassword),
            Route::Home {} => Some(Page::Home),
            Route::NotFound { .. } => None,
        }
    }
}

/// Where the guard sends `path`, if it does not render in place
pub fn redirect_for(path: &str, auth: &AuthState) -> Option<Route> {
    match routes::resolve(path, auth) {
        Resolution::Redirect(to) => Route::from_str(to).ok(),
        Resolution::Render(_) | Resolution::Pending => None,
    }
}

/// Replacement for a path that reached the catch-all
pub fn fallback_for(path: &str, auth: &AuthState) -> Route {
    match routes::resolve(path, auth) {
        Resolution::Render(page) => Route::from(page),
        Resolution::Redirect(to) => Route::from_str(to).unwrap_or(Route::Home {}),
        Resolution::Pending => Route::Home {},
    }
}

/// Root application component.
///
/// Provides global styles, auth state, the page cache, and routing.
#[component]
pub fn App() -> Element {
    let config = get_config();

    // Loading until the startup session (if any) is restored
    let mut auth: Signal<AuthState> = use_signal(AuthState::loading);
    use_context_provider(|| auth);
    use_context_provider(|| PageCache::new(config.page_source()));

    // Restore session on mount
    use_effect(move || {
        let restored = get_config().signed_in_as.map(Session::new);
        match &restored {
            Some(session) => tracing::info!("Restored session for {}", session.email),
            None => tracing::debug!("No session to restore"),
        }
        auth.set(AuthState {
            user: restored,
            loading: false,
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
