//! `[style]` section configuration.
//!
//! Ordered presets and transformers handed to the CSS utility generator.
//! The generator applies presets in order to establish base utility
//! classes, then transformers in order to post-process matched syntax.
//! When two entries emit output for the same selector, the later entry
//! wins.
//!
//! # Example
//!
//! ```toml
//! [style]
//! mode = "dev"
//! presets = ["uno", "attributify", "icons", "web-fonts"]
//! transformers = ["directives", "variant-group"]
//! ```

use crate::config::registry;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment mode for the CSS generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    /// Development mode (unminified output, source annotations).
    #[default]
    Dev,

    /// Production build mode.
    Build,
}

impl fmt::Display for EnvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvMode::Dev => write!(f, "dev"),
            EnvMode::Build => write!(f, "build"),
        }
    }
}

/// CSS generator configuration consumed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Environment mode.
    pub mode: EnvMode,

    /// Presets, applied in declaration order.
    pub presets: Vec<String>,

    /// Transformers, applied in declaration order after presets.
    pub transformers: Vec<String>,
}

/// Field path accessors for diagnostics.
pub struct StyleConfigFields {
    pub mode: FieldPath,
    pub presets: FieldPath,
    pub transformers: FieldPath,
}

impl StyleConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: StyleConfigFields = StyleConfigFields {
        mode: FieldPath::new("style.mode"),
        presets: FieldPath::new("style.presets"),
        transformers: FieldPath::new("style.transformers"),
    };
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            mode: EnvMode::Dev,
            presets: vec![
                "uno".to_string(),
                "attributify".to_string(),
                "icons".to_string(),
                "web-fonts".to_string(),
            ],
            transformers: vec!["directives".to_string(), "variant-group".to_string()],
        }
    }
}

impl StyleConfig {
    /// Validate the style configuration.
    ///
    /// # Checks
    /// - every preset must be registered with the generator
    /// - every transformer must be registered with the generator
    /// - duplicate entries are legal (later wins) but reported as warnings
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for name in &self.presets {
            if !registry::is_known_preset(name) {
                diag.unknown_identifier(
                    Self::FIELDS.presets,
                    "preset",
                    name,
                    format!("registered presets: {}", registry::KNOWN_PRESETS.join(", ")),
                );
            }
        }
        for name in &self.transformers {
            if !registry::is_known_transformer(name) {
                diag.unknown_identifier(
                    Self::FIELDS.transformers,
                    "transformer",
                    name,
                    format!(
                        "registered transformers: {}",
                        registry::KNOWN_TRANSFORMERS.join(", ")
                    ),
                );
            }
        }

        for name in duplicates(&self.presets) {
            diag.warn(
                Self::FIELDS.presets,
                format!("preset `{name}` listed more than once, the later entry wins"),
            );
        }
        for name in duplicates(&self.transformers) {
            diag.warn(
                Self::FIELDS.transformers,
                format!("transformer `{name}` listed more than once, the later entry wins"),
            );
        }
    }

    /// Presets in application order with duplicates collapsed to their
    /// last occurrence. The surviving position is the one whose output
    /// wins for a contested selector.
    pub fn effective_presets(&self) -> Vec<&str> {
        collapse_to_last(&self.presets)
    }

    /// Transformers in application order with duplicates collapsed to
    /// their last occurrence.
    pub fn effective_transformers(&self) -> Vec<&str> {
        collapse_to_last(&self.transformers)
    }

    /// Index of the entry that takes effect for `name` (its last
    /// occurrence), or `None` if the preset is not listed.
    pub fn preset_precedence(&self, name: &str) -> Option<usize> {
        self.presets.iter().rposition(|p| p == name)
    }
}

/// Keep only the last occurrence of each entry, preserving order.
fn collapse_to_last(entries: &[String]) -> Vec<&str> {
    entries
        .iter()
        .enumerate()
        .filter(|(i, name)| {
            entries
                .iter()
                .rposition(|other| other == *name)
                .is_some_and(|last| last == *i)
        })
        .map(|(_, name)| name.as_str())
        .collect()
}

/// Entries appearing more than once, each reported once.
fn duplicates(entries: &[String]) -> Vec<&str> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut dups = Vec::new();
    for name in entries {
        if !seen.insert(name.as_str()) && !dups.contains(&name.as_str()) {
            dups.push(name.as_str());
        }
    }
    dups
}

// ============================================================================
// tests
// ============================================================================
