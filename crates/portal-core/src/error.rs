//! Error types for the portal client

use thiserror::Error;

use crate::input::InputKind;
use crate::routes::Page;

/// Main error type for portal client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// The kind is declared but has no renderer
    #[error("Input kind `{0}` is not implemented")]
    UnimplementedInput(InputKind),

    /// A kind tag that is not one of the declared kinds
    #[error("Unknown input kind: {0}")]
    UnknownInputKind(String),

    /// Lazy page load failed
    #[error(transparent)]
    PageLoad(#[from] PageLoadError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A page bundle could not be loaded.
///
/// Cloneable so a failed load can be held by a resource and re-raised
/// into an error boundary on every render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to load {page} page: {reason}")]
pub struct PageLoadError {
    pub page: Page,
    pub reason: String,
}

/// Error while reading the client configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for portal client operations
pub type Result<T> = std::result::Result<T, ClientError>;
