//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),

    #[error("unknown {kind} `{name}`")]
    UnknownIdentifier { kind: &'static str, name: String },

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// Classification of a single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Missing or malformed field.
    Validation,
    /// Reference to an identifier the consuming tool does not register.
    UnknownIdentifier { kind: &'static str, name: String },
}

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "lint.rules")
    pub field: FieldPath,
    /// Diagnostic classification
    pub kind: DiagnosticKind,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: DiagnosticKind::Validation,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_kind(mut self, kind: DiagnosticKind) -> Self {
        self.kind = kind;
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (kept valid, but worth the user's attention).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add an unknown-identifier error for a reference the consuming tool
    /// does not register.
    pub fn unknown_identifier(
        &mut self,
        field: FieldPath,
        kind: &'static str,
        name: impl Into<String>,
        hint: impl Into<String>,
    ) {
        let name = name.into();
        let diag = ConfigDiagnostic::new(field, format!("unknown {kind} `{name}`"))
            .with_kind(DiagnosticKind::UnknownIdentifier { kind, name })
            .with_hint(hint);
        self.errors.push(diag);
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    ///
    /// Call this after validation to display all warnings at once.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "configuration warnings:");
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// True if any collected error refers to an unregistered identifier.
    pub fn has_unknown_identifier(&self) -> bool {
        self.errors
            .iter()
            .any(|d| matches!(d.kind, DiagnosticKind::UnknownIdentifier { .. }))
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Collapse into the most specific `ConfigError`.
    ///
    /// A single unknown-identifier diagnostic surfaces as
    /// `ConfigError::UnknownIdentifier`; anything else keeps the full
    /// diagnostic list.
    pub fn into_error(mut self) -> ConfigError {
        if self.errors.len() == 1
            && let Some(diag) = self.errors.pop()
        {
            if let DiagnosticKind::UnknownIdentifier { kind, name } = diag.kind {
                return ConfigError::UnknownIdentifier { kind, name };
            }
            self.errors.push(diag);
        }
        ConfigError::Diagnostics(self)
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("chromadoc.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("chromadoc.toml"));

        let validation_err = ConfigError::Validation("Test validation error".to_string());
        let display = format!("{validation_err}");
        assert!(display.contains("Test validation error"));

        let unknown_err = ConfigError::UnknownIdentifier {
            kind: "lint rule",
            name: "made-up/rule".into(),
        };
        let display = format!("{unknown_err}");
        assert!(display.contains("unknown lint rule"));
        assert!(display.contains("made-up/rule"));
    }

    #[test]
    fn test_single_unknown_identifier_collapses() {
        let mut diag = ConfigDiagnostics::new();
        diag.unknown_identifier(
            FieldPath::new("lint.rules"),
            "lint rule",
            "made-up/rule",
            "check the linter's documented rule set",
        );
        match diag.into_error() {
            ConfigError::UnknownIdentifier { kind, name } => {
                assert_eq!(kind, "lint rule");
                assert_eq!(name, "made-up/rule");
            }
            other => panic!("expected UnknownIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_errors_stay_aggregated() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.info.title"), "required");
        diag.unknown_identifier(
            FieldPath::new("style.presets"),
            "preset",
            "nope",
            "see the preset registry",
        );
        assert!(diag.has_unknown_identifier());
        assert_eq!(diag.len(), 2);
        assert!(matches!(diag.into_error(), ConfigError::Diagnostics(_)));
    }
}
