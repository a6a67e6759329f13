//! Portal Client Core Library
//!
//! Framework-free logic behind the portal web client.
//!
//! ## Overview
//!
//! The UI crate renders; this crate decides. Everything here is plain data
//! and pure functions so it can be tested without a renderer:
//!
//! - **Routing**: the static path table and the auth guard decision
//! - **Inputs**: the kind discriminant and its dispatch to a concrete editor
//! - **Widgets**: currency cleaning/formatting and phone-number validity
//! - **Pages**: the one-shot lazy page cache
//!
//! ## Quick Start
//!
//! ```ignore
//! use portal_core::{AuthState, InputKind, Resolution};
//!
//! let editor = InputKind::Password.editor()?;
//! let outcome = portal_core::routes::resolve("/", &AuthState::signed_out());
//! assert_eq!(outcome, Resolution::Redirect("/login"));
//! ```

pub mod auth;
pub mod config;
pub mod currency;
pub mod error;
pub mod input;
pub mod pages;
pub mod phone;
pub mod routes;
pub mod validate;

// Re-exports
pub use auth::{AuthState, Guard, Session};
pub use config::ClientConfig;
pub use currency::CurrencyFormat;
pub use error::{ClientError, ConfigError, PageLoadError};
pub use input::{
    DropdownEntry, DropdownOption, DropdownOptions, Editor, InputChange, InputKind, InputSize,
    Visibility,
};
pub use pages::{PageBundle, PageCache, PageSource};
pub use phone::{Country, CountryInfo};
pub use routes::{Page, Resolution};
