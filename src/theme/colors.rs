//! Color constants shared with inline styles.
//!
//! Keep in sync with the custom properties in `styles.rs`.

pub const TEXT_PRIMARY: &str = "#1f2430";
pub const DANGER: &str = "#d92d20";
