//! `[lint]` section configuration.
//!
//! File selectors plus per-rule severity overrides handed to the linter.
//! Rule ids must be registered with the linter; an unknown id fails
//! validation instead of being silently ignored.
//!
//! # Example
//!
//! ```toml
//! [lint]
//! files = ["*.md"]
//!
//! [lint.rules]
//! "unused-imports/no-unused-vars" = "off"
//! ```

use crate::config::registry;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity override for a single lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disable the rule entirely.
    Off,
    /// Report violations without failing the run.
    Warn,
    /// Report violations and fail the run.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Linter configuration consumed by the lint runner at startup.
///
/// Overrides apply only to files matching `files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Glob patterns selecting the files the overrides apply to.
    pub files: Vec<String>,

    /// Per-rule severity overrides, keyed by rule id.
    pub rules: FxHashMap<String, Severity>,
}

/// Field path accessors for diagnostics.
pub struct LintConfigFields {
    pub files: FieldPath,
    pub rules: FieldPath,
}

impl LintConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: LintConfigFields = LintConfigFields {
        files: FieldPath::new("lint.files"),
        rules: FieldPath::new("lint.rules"),
    };
}

impl Default for LintConfig {
    fn default() -> Self {
        let mut rules = FxHashMap::default();
        rules.insert("unused-imports/no-unused-vars".to_string(), Severity::Off);
        Self {
            files: vec!["*.md".to_string()],
            rules,
        }
    }
}

impl LintConfig {
    /// Validate the linter configuration.
    ///
    /// # Checks
    /// - `files` patterns must be non-empty strings
    /// - every rule id in `rules` must be registered with the linter
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.files.is_empty() {
            diag.warn(
                Self::FIELDS.files,
                "no file selectors, rule overrides will never apply",
            );
        }
        for (i, pattern) in self.files.iter().enumerate() {
            if pattern.trim().is_empty() {
                diag.error(Self::FIELDS.files, format!("files[{i}]: pattern is empty"));
            }
        }

        // Sort rule ids so repeated runs report errors in a stable order
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        for name in names {
            if !registry::is_known_rule(name) {
                let hint = match registry::rule_in_same_namespace(name) {
                    Some(similar) => format!("did you mean a rule like `{similar}`?"),
                    None => "check the rule id against the linter's documented rule set".into(),
                };
                diag.unknown_identifier(Self::FIELDS.rules, "lint rule", name, hint);
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
