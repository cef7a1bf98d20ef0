//! `[[site.nav]]` configuration.
//!
//! Top navigation bar entries. Declaration order is rendering order.
//!
//! # Example
//!
//! ```toml
//! [[site.nav]]
//! text = "Guide"
//! link = "/guide"
//! ```

use serde::{Deserialize, Serialize};

/// A top navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the navigation bar.
    pub text: String,

    /// Target path or URL.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Built-in navigation entries for the Chroma docs.
pub fn default_nav() -> Vec<NavItem> {
    vec![NavItem::new("Guide", "/guide"), NavItem::new("API", "/api")]
}
