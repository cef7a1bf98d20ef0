//! `[site.info]` configuration.
//!
//! Basic site metadata rendered into the documentation shell: title,
//! description, deployment URL, language.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Site metadata consumed by the docs renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title displayed in the header and browser tab.
    pub title: String,

    /// Site description for the landing page and meta tags.
    pub description: String,

    /// Deployment URL (e.g., "https://gka.github.io/chroma.js/").
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,

    /// Custom fields passed through to the renderer unchanged.
    #[serde(default)]
    pub extra: FxHashMap<String, toml::Value>,
}

/// Field path accessors for diagnostics.
pub struct SiteInfoConfigFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub url: FieldPath,
    pub language: FieldPath,
}

impl SiteInfoConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: SiteInfoConfigFields = SiteInfoConfigFields {
        title: FieldPath::new("site.info.title"),
        description: FieldPath::new("site.info.description"),
        url: FieldPath::new("site.info.url"),
        language: FieldPath::new("site.info.language"),
    };
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Chroma.js".into(),
            description:
                "A small-ish zero-dependency JavaScript library for all kinds of color conversions and color scales."
                    .into(),
            url: Some("https://gka.github.io/chroma.js/".into()),
            language: "en".into(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` and `description` must be non-empty
    /// - `url`, when set, must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "required field is empty");
        }
        if self.description.trim().is_empty() {
            diag.error(Self::FIELDS.description, "required field is empty");
        }
        if self.language.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.language,
                "required field is empty",
                "use a language code like \"en\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}
