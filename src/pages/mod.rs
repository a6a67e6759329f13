//! Page components for the portal client.
//!
//! Each page is a thin [`LazyPage`](crate::components::LazyPage) wrapper
//! around its form, so the page bundle loads on first visit.

mod forgot_password;
mod home;
mod login;
mod not_found;
mod register;
mod reset_password;

use std::collections::BTreeMap;

pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
pub use reset_password::ResetPassword;

/// Per-field error messages computed on submit
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    /// Record the outcome of one field's check
    pub fn check(&mut self, field: &'static str, message: Option<String>) -> &mut Self {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(field);
            }
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_records_and_clears() {
        let mut errors = FormErrors::default();
        errors
            .check("email", Some("Email is required".to_string()))
            .check("password", None);
        assert_eq!(errors.get("email").as_deref(), Some("Email is required"));
        assert!(errors.get("password").is_none());
        assert!(!errors.is_empty());

        errors.check("email", None);
        assert!(errors.is_empty());
    }
}
