//! Shared context for the portal client.
//!
//! Provides the auth state and the lazy page cache to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| auth);
//! use_context_provider(|| PageCache::new(config.page_source()));
//!
//! // In child components
//! let auth = use_auth();
//! let cache = use_page_cache();
//! ```

use dioxus::prelude::*;
use portal_core::{AuthState, ClientConfig, PageCache, Session};

/// Get the client configuration.
/// Uses the global config set from the command line and config file.
pub fn get_config() -> ClientConfig {
    crate::get_config()
}

/// Hook to access the auth state from context.
///
/// The route guard reads this; sign-in and sign-out write it.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Hook to access the lazy page cache.
pub fn use_page_cache() -> PageCache {
    use_context::<PageCache>()
}

/// Store a session and end any pending restore.
pub fn sign_in(mut auth: Signal<AuthState>, session: Session) {
    tracing::info!("Signed in as {}", session.email);
    auth.set(AuthState::signed_in(session));
}

pub fn sign_out(mut auth: Signal<AuthState>) {
    tracing::info!("Signed out");
    auth.set(AuthState::signed_out());
}
