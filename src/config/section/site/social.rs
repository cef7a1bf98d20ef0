//! `[[site.social]]` configuration.
//!
//! Social links rendered in the site header. The `icon` must be one the
//! renderer ships a glyph for.

use crate::config::registry;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A social link entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g., "github").
    pub icon: String,

    /// Full URL of the profile or repository.
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }

    /// Validate a single social link.
    ///
    /// # Checks
    /// - `icon` must be registered with the renderer
    /// - `link` must be a valid http(s) URL
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if !registry::is_known_icon(&self.icon) {
            diag.unknown_identifier(
                field,
                "social icon",
                &self.icon,
                format!("registered icons include {}", example_icons()),
            );
        }

        match url::Url::parse(&self.link) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => diag.error_with_hint(
                field,
                format!("scheme '{}' not supported for social links", parsed.scheme()),
                "use a full https:// URL",
            ),
            Err(e) => diag.error_with_hint(
                field,
                format!("invalid URL `{}`: {}", self.link, e),
                "use a full https:// URL",
            ),
        }
    }
}

fn example_icons() -> String {
    registry::KNOWN_ICONS[..3].join(", ")
}

/// Built-in social links for the Chroma docs.
pub fn default_social() -> Vec<SocialLink> {
    vec![SocialLink::new("github", "https://github.com/gka/chroma.js")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_social_valid() {
        let mut diag = ConfigDiagnostics::new();
        for link in default_social() {
            link.validate(FieldPath::new("site.social"), &mut diag);
        }
        assert!(diag.is_empty());
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let link = SocialLink::new("geocities", "https://example.com");
        let mut diag = ConfigDiagnostics::new();
        link.validate(FieldPath::new("site.social"), &mut diag);
        assert!(diag.has_unknown_identifier());
    }

    #[test]
    fn test_relative_link_rejected() {
        let link = SocialLink::new("github", "/not-a-url");
        let mut diag = ConfigDiagnostics::new();
        link.validate(FieldPath::new("site.social"), &mut diag);
        assert_eq!(diag.len(), 1);
    }
}
