//! Auth-session state consumed by the route guard.
//!
//! This crate does not authenticate anyone. It only holds whatever session
//! the host reports and turns it into a [`Guard`] decision.

use serde::{Deserialize, Serialize};

/// A signed-in user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        let display_name = email.split('@').next().unwrap_or_default().to_string();
        Self {
            email,
            display_name,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }
}

/// Authentication state tracking the current user and loading status
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
}

/// What a protected route should do right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Render the nested routes
    Allow,
    /// Session still being restored; show a placeholder
    Pending,
    /// Send the user to the login page
    Redirect,
}

impl AuthState {
    /// State at startup, before the session has been restored
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            user: Some(session),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn guard(&self) -> Guard {
        match (&self.user, self.loading) {
            (Some(_), _) => Guard::Allow,
            (None, true) => Guard::Pending,
            (None, false) => Guard::Redirect,
        }
    }
}
