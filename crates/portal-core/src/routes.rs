//! Static route table and navigation outcomes.
//!
//! | Path | Page | Guarded |
//! |---|---|---|
//! | `/login` | Login | no |
//! | `/register` | Register | no |
//! | `/forgot-password` | ForgotPassword | no |
//! | `/reset-password` | ResetPassword | no |
//! | `/` | Home | yes |
//! | anything else | redirect to `/` | |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::{AuthState, Guard};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// A routable page
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Home,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Login,
        Page::Register,
        Page::ForgotPassword,
        Page::ResetPassword,
        Page::Home,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => LOGIN_PATH,
            Page::Register => "/register",
            Page::ForgotPassword => "/forgot-password",
            Page::ResetPassword => "/reset-password",
            Page::Home => ROOT_PATH,
        }
    }

    /// Short name used for bundle files and logs
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::ForgotPassword => "forgot-password",
            Page::ResetPassword => "reset-password",
            Page::Home => "home",
        }
    }

    /// Whether the page sits behind the auth guard
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Home)
    }

    /// Exact match against the table. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Page::ALL.into_iter().find(|page| page.path() == trimmed)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Outcome of navigating to a path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    /// Guarded page while the session is still loading
    Pending,
    Redirect(&'static str),
}

/// Resolve a path against the table for the given auth state
pub fn resolve(path: &str, auth: &AuthState) -> Resolution {
    let Some(page) = Page::from_path(path) else {
        return Resolution::Redirect(ROOT_PATH);
    };
    if !page.is_protected() {
        return Resolution::Render(page);
    }
    match auth.guard() {
        Guard::Allow => Resolution::Render(page),
        Guard::Pending => Resolution::Pending,
        Guard::Redirect => Resolution::Redirect(LOGIN_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;

    #[test]
    fn public_pages_render_without_auth() {
        let auth = AuthState::signed_out();
        for page in [Page::Login, Page::Register, Page::ForgotPassword, Page::ResetPassword] {
            assert_eq!(resolve(page.path(), &auth), Resolution::Render(page));
        }
    }

    #[test]
    fn unmatched_paths_redirect_to_root() {
        let auth = AuthState::signed_out();
        for path in ["/nope", "/login/extra", "/Home", "", "/register-now"] {
            assert_eq!(resolve(path, &auth), Resolution::Redirect(ROOT_PATH), "{path}");
        }
    }

    #[test]
    fn protected_root_redirects_to_login_when_signed_out() {
        assert_eq!(resolve("/", &AuthState::signed_out()), Resolution::Redirect(LOGIN_PATH));
    }

    #[test]
    fn protected_root_renders_home_when_signed_in() {
        let auth = AuthState::signed_in(Session::new("ada@example.com"));
        assert_eq!(resolve("/", &auth), Resolution::Render(Page::Home));
    }

    #[test]
    fn protected_root_waits_while_loading() {
        assert_eq!(resolve("/", &AuthState::loading()), Resolution::Pending);
    }

    #[test]
    fn from_path_ignores_trailing_slash_and_query() {
        assert_eq!(Page::from_path("/login/"), Some(Page::Login));
        assert_eq!(Page::from_path("/reset-password?token=abc"), Some(Page::ResetPassword));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
    }

    #[test]
    fn only_home_is_protected() {
        let protected: Vec<_> = Page::ALL.into_iter().filter(Page::is_protected).collect();
        assert_eq!(protected, [Page::Home]);
    }
}
