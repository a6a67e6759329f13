//! Input kinds and the per-kind editor dispatch.
//!
//! An [`InputKind`] is the tag a form field is declared with. Every tag maps
//! to exactly one [`Editor`] through [`InputKind::editor`], or to an
//! explicit [`ClientError::UnimplementedInput`]. Both matches are
//! exhaustive, so a new kind cannot be added without deciding what renders it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::phone::CountryInfo;

/// Label of the placeholder entry shown when a dropdown has no default.
pub const DROPDOWN_PLACEHOLDER: &str = "Select ..";

/// The discriminant selecting which renderer backs a field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Price,
    Mobile,
    /// Declared, no renderer yet
    Telephone,
    Dropdown,
    /// Declared, no renderer yet
    SearchableDropdown,
}

impl InputKind {
    pub const ALL: [InputKind; 8] = [
        InputKind::Text,
        InputKind::Email,
        InputKind::Password,
        InputKind::Price,
        InputKind::Mobile,
        InputKind::Telephone,
        InputKind::Dropdown,
        InputKind::SearchableDropdown,
    ];

    /// The tag this kind is declared with
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Price => "price",
            InputKind::Mobile => "mobile",
            InputKind::Telephone => "telephone",
            InputKind::Dropdown => "dropdown",
            InputKind::SearchableDropdown => "searchableDropdown",
        }
    }

    /// Resolve the concrete editor for this kind.
    ///
    /// Kinds without a renderer fail instead of resolving to nothing.
    pub fn editor(self) -> Result<Editor, ClientError> {
        match self {
            InputKind::Text | InputKind::Email => Ok(Editor::Text),
            InputKind::Password => Ok(Editor::Password),
            InputKind::Price => Ok(Editor::Price),
            InputKind::Mobile => Ok(Editor::Mobile),
            InputKind::Dropdown => Ok(Editor::Dropdown),
            InputKind::Telephone | InputKind::SearchableDropdown => {
                Err(ClientError::UnimplementedInput(self))
            }
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ClientError::UnknownInputKind(s.to_string()))
    }
}

/// A concrete renderer. One variant per editor the UI knows how to draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Editor {
    Text,
    Password,
    Price,
    Mobile,
    Dropdown,
}

/// Field size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSize::Small => "small",
            InputSize::Medium => "medium",
            InputSize::Large => "large",
        }
    }
}

/// Password field visibility. Local to the field, never part of its value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }

    pub fn is_masked(self) -> bool {
        self == Visibility::Masked
    }

    /// The `type` attribute for the underlying input element
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Masked => "password",
            Visibility::Revealed => "text",
        }
    }
}

/// One selectable option: `key` is displayed, `value` is emitted.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DropdownOption {
    pub key: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Option list backing the dropdown renderer
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct DropdownOptions {
    #[serde(default)]
    pub options: Vec<DropdownOption>,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// A rendered `<option>` row
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DropdownEntry {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

impl DropdownOptions {
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self {
            options,
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Resolve the rows to render for the current controlled value.
    ///
    /// The placeholder row leads only when no default is configured. An
    /// empty `current` falls back to the default for selection.
    pub fn entries(&self, current: &str) -> Vec<DropdownEntry> {
        let selected = if current.is_empty() {
            self.default_value.as_deref().unwrap_or("")
        } else {
            current
        };

        let placeholder = (!self.has_default()).then(|| DropdownEntry {
            label: DROPDOWN_PLACEHOLDER.to_string(),
            value: String::new(),
            selected: selected.is_empty(),
        });

        placeholder
            .into_iter()
            .chain(self.options.iter().map(|option| DropdownEntry {
                label: option.key.clone(),
                value: option.value.clone(),
                selected: option.value == selected,
            }))
            .collect()
    }

    /// An empty default counts as no default
    pub fn has_default(&self) -> bool {
        self.default_value.as_deref().is_some_and(|value| !value.is_empty())
    }

    /// Values that appear more than once. Option values double as render keys.
    pub fn duplicate_values(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes = Vec::new();
        for option in &self.options {
            if !seen.insert(option.value.as_str()) && !dupes.contains(&option.value.as_str()) {
                dupes.push(option.value.as_str());
            }
        }
        dupes
    }
}

/// Payload of a field's change notification.
///
/// `value` is `None` only when a price field is cleared. `country` is set by
/// the mobile renderer alone.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct InputChange {
    pub value: Option<String>,
    pub country: Option<CountryInfo>,
}

impl InputChange {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            country: None,
        }
    }

    pub fn with_country(value: impl Into<String>, country: CountryInfo) -> Self {
        Self {
            value: Some(value.into()),
            country: Some(country),
        }
    }

    /// The new value, empty when cleared
    pub fn value_or_default(&self) -> String {
        self.value.clone().unwrap_or_default()
    }
}
