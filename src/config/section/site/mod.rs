//! `[site]` section configuration.
//!
//! Everything the static-site renderer consumes: metadata, navigation,
//! sidebar tree, and social links.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Chroma.js"
//! description = "Color conversions and color scales"
//!
//! [[site.nav]]
//! text = "Guide"
//! link = "/guide"
//!
//! [[site.sidebar]]
//! text = "API"
//! link = "/api"
//! children = [{ text = "chroma", link = "/api/chroma" }]
//!
//! [[site.social]]
//! icon = "github"
//! link = "https://github.com/gka/chroma.js"
//! ```

mod info;
mod nav;
mod sidebar;
mod social;

pub use info::SiteInfoConfig;
pub use nav::NavItem;
pub use sidebar::SidebarItem;
pub use social::SocialLink;

use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Site configuration consumed by the docs renderer at startup.
///
/// `nav` and `sidebar` preserve declaration order exactly; the renderer
/// draws entries in the order they appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site metadata (title, description, url, language).
    pub info: SiteInfoConfig,

    /// Top navigation entries, in rendering order.
    pub nav: Vec<NavItem>,

    /// Sidebar sections, in rendering order.
    pub sidebar: Vec<SidebarItem>,

    /// Social links rendered in the header.
    pub social: Vec<SocialLink>,
}

/// Field path accessors for diagnostics.
pub struct SiteConfigFields {
    pub nav: FieldPath,
    pub sidebar: FieldPath,
    pub social: FieldPath,
}

impl SiteConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: SiteConfigFields = SiteConfigFields {
        nav: FieldPath::new("site.nav"),
        sidebar: FieldPath::new("site.sidebar"),
        social: FieldPath::new("site.social"),
    };
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            info: SiteInfoConfig::default(),
            nav: nav::default_nav(),
            sidebar: sidebar::default_sidebar(),
            social: social::default_social(),
        }
    }
}

impl SiteConfig {
    /// Validate the site configuration.
    ///
    /// # Checks
    /// - metadata fields (see `SiteInfoConfig::validate`)
    /// - every nav/sidebar `link` is non-empty and starts with `/` or is a URL
    /// - no `link` appears twice with conflicting `text`
    /// - social icons are registered and social links are full URLs
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(diag);

        for (i, item) in self.nav.iter().enumerate() {
            check_entry(Self::FIELDS.nav, &format!("nav[{i}]"), &item.text, &item.link, diag);
        }
        for (i, item) in self.sidebar.iter().enumerate() {
            check_sidebar_item(&format!("sidebar[{i}]"), item, diag);
        }
        for link in &self.social {
            link.validate(Self::FIELDS.social, diag);
        }

        self.check_duplicate_links(diag);
    }

    /// Reject the same `link` carrying different `text` across nav and
    /// sidebar. Repeating a link with identical text is fine.
    fn check_duplicate_links(&self, diag: &mut ConfigDiagnostics) {
        let mut seen: FxHashMap<&str, &str> = FxHashMap::default();

        for item in &self.nav {
            record_link(&mut seen, &item.text, &item.link, Self::FIELDS.nav, diag);
        }
        for item in &self.sidebar {
            record_sidebar_links(&mut seen, item, diag);
        }
    }
}

fn record_sidebar_links<'a>(
    seen: &mut FxHashMap<&'a str, &'a str>,
    item: &'a SidebarItem,
    diag: &mut ConfigDiagnostics,
) {
    record_link(seen, &item.text, &item.link, SiteConfig::FIELDS.sidebar, diag);
    for child in &item.children {
        record_sidebar_links(seen, child, diag);
    }
}

fn record_link<'a>(
    seen: &mut FxHashMap<&'a str, &'a str>,
    text: &'a str,
    link: &'a str,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    match seen.get(link) {
        Some(existing) if *existing != text => diag.error_with_hint(
            field,
            format!("link `{link}` declared twice with conflicting text: `{existing}` vs `{text}`"),
            "use the same text for both entries or point them at different links",
        ),
        Some(_) => {}
        None => {
            seen.insert(link, text);
        }
    }
}

fn check_sidebar_item(label: &str, item: &SidebarItem, diag: &mut ConfigDiagnostics) {
    check_entry(SiteConfig::FIELDS.sidebar, label, &item.text, &item.link, diag);
    for (i, child) in item.children.iter().enumerate() {
        check_sidebar_item(&format!("{label}.children[{i}]"), child, diag);
    }
}

/// A link is a non-empty site path (`/...`) or a string that parses as a
/// URL with a scheme.
fn check_entry(
    field: FieldPath,
    label: &str,
    text: &str,
    link: &str,
    diag: &mut ConfigDiagnostics,
) {
    if text.trim().is_empty() {
        diag.error(field, format!("{label}: text is empty"));
    }

    if link.is_empty() {
        diag.error_with_hint(
            field,
            format!("{label}: link is empty"),
            "use a site path like \"/guide\" or a full URL",
        );
        return;
    }
    if link.starts_with('/') {
        return;
    }
    if url::Url::parse(link).is_err() {
        diag.error_with_hint(
            field,
            format!("{label}: link `{link}` is neither a site path nor a URL"),
            "site paths must start with `/`",
        );
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_config() {
        let site = SiteConfig::default();
        assert_eq!(site.info.title, "Chroma.js");
        assert_eq!(
            site.nav,
            vec![NavItem::new("Guide", "/guide"), NavItem::new("API", "/api")]
        );
        assert_eq!(site.social.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty(), "default config must validate: {diag:?}");
    }

    #[test]
    fn test_nav_order_preserved() {
        let site = SiteConfig {
            nav: vec![
                NavItem::new("C", "/c"),
                NavItem::new("A", "/a"),
                NavItem::new("B", "/b"),
            ],
            ..Default::default()
        };
        let texts: Vec<_> = site.nav.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_link_rejected() {
        let site = SiteConfig {
            nav: vec![NavItem::new("Guide", "")],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_relative_link_rejected() {
        let site = SiteConfig {
            nav: vec![NavItem::new("Guide", "guide")],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_external_url_link_allowed() {
        let site = SiteConfig {
            nav: vec![NavItem::new("Source", "https://github.com/gka/chroma.js")],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_conflicting_duplicate_link_rejected() {
        let site = SiteConfig {
            nav: vec![NavItem::new("Guide", "/guide"), NavItem::new("Handbook", "/guide")],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_consistent_duplicate_link_allowed() {
        // Nav and sidebar may both point at /guide with the same label
        let site = SiteConfig {
            nav: vec![NavItem::new("Guide", "/guide")],
            sidebar: vec![SidebarItem::new("Guide", "/guide")],
            social: Vec::new(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_nested_sidebar_links_checked() {
        let site = SiteConfig {
            sidebar: vec![
                SidebarItem::new("API", "/api")
                    .with_children(vec![SidebarItem::new("chroma", "broken")]),
            ],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
