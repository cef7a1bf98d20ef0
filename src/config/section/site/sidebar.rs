//! `[[site.sidebar]]` configuration.
//!
//! Sidebar sections with optional nested children. Declaration order is
//! rendering order at every level.
//!
//! # Example
//!
//! ```toml
//! [[site.sidebar]]
//! text = "Guide"
//! link = "/guide"
//! children = [
//!     { text = "Installation", link = "/guide/install" },
//!     { text = "Color Scales", link = "/guide/scales" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// A sidebar entry, possibly with nested children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Label shown in the sidebar.
    pub text: String,

    /// Target path or URL.
    pub link: String,

    /// Nested entries rendered under this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarItem>,
}

impl SidebarItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SidebarItem>) -> Self {
        self.children = children;
        self
    }
}

/// Built-in sidebar tree for the Chroma docs.
pub fn default_sidebar() -> Vec<SidebarItem> {
    vec![
        SidebarItem::new("Guide", "/guide").with_children(vec![
            SidebarItem::new("Installation", "/guide/install"),
            SidebarItem::new("Color Conversions", "/guide/conversions"),
            SidebarItem::new("Color Scales", "/guide/scales"),
        ]),
        SidebarItem::new("API", "/api").with_children(vec![
            SidebarItem::new("chroma", "/api/chroma"),
            SidebarItem::new("color", "/api/color"),
            SidebarItem::new("scale", "/api/scale"),
            SidebarItem::new("cubehelix", "/api/cubehelix"),
        ]),
    ]
}
