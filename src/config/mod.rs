//! Toolchain configuration management for `chromadoc.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] (static site renderer)
//! │   ├── lint       # [lint] (lint runner)
//! │   └── style      # [style] (CSS utility generator)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── registry       # Identifiers registered with consuming tools
//! └── mod.rs         # DocsConfig + per-tool builders (this file)
//! ```
//!
//! Each tool's configuration is a plain value: built once at startup,
//! validated all-or-nothing, then handed to its consumer and never
//! mutated. The per-tool builders (`build_site_config` and friends) are
//! pure: every value is a literal at definition time and no I/O happens.
//! Reading an optional `chromadoc.toml` overlay is the CLI layer's job
//! and stays in `DocsConfig::load`.

mod registry;
pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    EnvMode, LintConfig, NavItem, Severity, SidebarItem, SiteConfig, SiteInfoConfig, SocialLink,
    StyleConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, DiagnosticKind, FieldPath};

use crate::cli::Cli;
use crate::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// per-tool builders
// ============================================================================

/// Build the validated site configuration from built-in literals.
///
/// Deterministic and side-effect free: repeated calls return structurally
/// equal values.
pub fn build_site_config() -> Result<SiteConfig, ConfigError> {
    let site = SiteConfig::default();
    let mut diag = ConfigDiagnostics::new();
    site.validate(&mut diag);
    diag.into_result().map_err(ConfigDiagnostics::into_error)?;
    Ok(site)
}

/// Build the validated linter configuration from built-in literals.
pub fn build_lint_config() -> Result<LintConfig, ConfigError> {
    let lint = LintConfig::default();
    let mut diag = ConfigDiagnostics::new();
    lint.validate(&mut diag);
    diag.into_result().map_err(ConfigDiagnostics::into_error)?;
    Ok(lint)
}

/// Build the validated CSS generator configuration from built-in literals.
pub fn build_style_config() -> Result<StyleConfig, ConfigError> {
    let style = StyleConfig::default();
    let mut diag = ConfigDiagnostics::new();
    style.validate(&mut diag);
    diag.into_result().map_err(ConfigDiagnostics::into_error)?;
    Ok(style)
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing chromadoc.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site renderer configuration
    pub site: SiteConfig,

    /// Lint runner configuration
    pub lint: LintConfig,

    /// CSS generator configuration
    pub style: StyleConfig,
}

impl DocsConfig {
    /// Assemble the built-in configuration from the per-tool builders.
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self {
            config_path: PathBuf::new(),
            site: build_site_config()?,
            lint: build_lint_config()?,
            style: build_style_config()?,
        })
    }

    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. When the default
    /// name is not found anywhere, the built-in literals are the
    /// configuration. An explicit `-C` path that resolves to nothing is
    /// a hard error: the user named a file and it was never read. A
    /// present file overlays the defaults and must validate
    /// all-or-nothing.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config.validate()?;
                Ok(config)
            }
            None if cli.uses_default_config() => {
                debug!("config"; "no {} found, using built-in defaults", cli.config.display());
                Self::builtin()
            }
            None => Err(ConfigError::Io(
                cli.config.clone(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            )),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        // Unknown keys are a configuration error, not a warning: the
        // consuming tools would silently skip them otherwise.
        if !ignored.is_empty() {
            return Err(ConfigError::Validation(format!(
                "unknown fields in {}: {}",
                path.display(),
                ignored.join(", ")
            )));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate configuration for all consuming tools.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.lint.validate(&mut diag);
        self.style.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result().map_err(ConfigDiagnostics::into_error)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> DocsConfig {
    let (parsed, ignored) = DocsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_are_deterministic() {
        assert_eq!(build_site_config().unwrap(), build_site_config().unwrap());
        assert_eq!(build_lint_config().unwrap(), build_lint_config().unwrap());
        assert_eq!(build_style_config().unwrap(), build_style_config().unwrap());
    }

    #[test]
    fn test_builtin_scenario_values() {
        let site = build_site_config().unwrap();
        assert_eq!(site.info.title, "Chroma.js");
        assert_eq!(
            site.nav,
            vec![NavItem::new("Guide", "/guide"), NavItem::new("API", "/api")]
        );
    }

    #[test]
    fn test_unknown_lint_rule_fails_as_unknown_identifier() {
        let config = test_parse_config(
            "[lint.rules]\n\"made-up/rule\" = \"error\"\n",
        );
        match config.validate() {
            Err(ConfigError::UnknownIdentifier { kind, name }) => {
                assert_eq!(kind, "lint rule");
                assert_eq!(name, "made-up/rule");
            }
            other => panic!("expected UnknownIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = DocsConfig::from_str("[site\ntitle = \"Chroma.js\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = DocsConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.info.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = DocsConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_overlay_replaces_section_values() {
        let config = test_parse_config(
            "[style]\nmode = \"build\"\npresets = [\"uno\", \"typography\"]\n",
        );
        assert_eq!(config.style.mode, EnvMode::Build);
        assert_eq!(config.style.presets, vec!["uno", "typography"]);
        // Untouched sections keep their built-in literals
        assert_eq!(config.site.info.title, "Chroma.js");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_missing_config_path_is_an_error() {
        use clap::Parser;
        let cli = Cli::try_parse_from([
            "chromadoc",
            "-C",
            "/nonexistent/deeply/nested/typo.toml",
            "check",
        ])
        .unwrap();

        match DocsConfig::load(&cli) {
            Err(ConfigError::Io(path, err)) => {
                assert!(path.ends_with("typo.toml"));
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error for missing -C path, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_config_path_is_loaded() {
        use clap::Parser;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[style]\nmode = \"build\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "chromadoc",
            "-C",
            path.to_str().unwrap(),
            "check",
        ])
        .unwrap();

        let config = DocsConfig::load(&cli).unwrap();
        assert_eq!(config.style.mode, EnvMode::Build);
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn test_unknown_file_fields_fail_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chromadoc.toml");
        fs::write(&path, "[site.info]\ntitle = \"Test\"\ntagline = \"nope\"\n").unwrap();

        match DocsConfig::from_path(&path) {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("tagline")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
