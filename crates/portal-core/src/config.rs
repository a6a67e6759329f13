//! Client configuration.
//!
//! Read from an optional JSON file; every field has a default so an empty
//! object (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pages::PageSource;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Window title
    pub title: String,
    pub window_width: f64,
    pub window_height: f64,
    /// Directory of page bundle overrides
    pub pages_dir: Option<PathBuf>,
    /// Start with a signed-in session (development only)
    pub signed_in_as: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: "Portal".to_string(),
            window_width: 480.0,
            window_height: 820.0,
            pages_dir: None,
            signed_in_as: None,
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn page_source(&self) -> PageSource {
        match &self.pages_dir {
            Some(dir) => PageSource::Directory(dir.clone()),
            None => PageSource::Builtin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"title": "Staging", "pages_dir": "/tmp/pages"}"#).unwrap();
        assert_eq!(config.title, "Staging");
        assert_eq!(config.window_width, 480.0);
        assert_eq!(
            config.page_source(),
            PageSource::Directory(PathBuf::from("/tmp/pages"))
        );
    }

    #[test]
    fn default_source_is_builtin() {
        assert_eq!(ClientConfig::default().page_source(), PageSource::Builtin);
    }
}
