//! Identifier registries for the consuming tools.
//!
//! The aggregator hands each config to an external tool (linter, CSS
//! generator, site renderer). Those tools only accept identifiers they
//! register, so a reference to anything outside these lists is rejected
//! at startup instead of being silently ignored downstream.

/// Rule ids registered with the linter.
pub const KNOWN_RULES: &[&str] = &[
    "no-console",
    "no-debugger",
    "no-unused-vars",
    "import/order",
    "import/no-duplicates",
    "unused-imports/no-unused-imports",
    "unused-imports/no-unused-vars",
    "style/indent",
    "style/quotes",
    "style/semi",
    "jsonc/sort-keys",
    "markdown/fenced-code-language",
    "markdown/no-missing-label-refs",
    "yaml/indent",
];

/// Preset names registered with the CSS generator.
pub const KNOWN_PRESETS: &[&str] = &[
    "uno",
    "attributify",
    "icons",
    "web-fonts",
    "typography",
    "tagify",
    "wind",
];

/// Transformer names registered with the CSS generator.
pub const KNOWN_TRANSFORMERS: &[&str] = &[
    "directives",
    "variant-group",
    "compile-class",
    "attributify-jsx",
];

/// Social icon names the site renderer ships glyphs for.
pub const KNOWN_ICONS: &[&str] = &[
    "github",
    "gitlab",
    "twitter",
    "x",
    "discord",
    "mastodon",
    "bluesky",
    "linkedin",
    "facebook",
    "instagram",
    "slack",
    "youtube",
    "npm",
    "rss",
];

pub fn is_known_rule(name: &str) -> bool {
    KNOWN_RULES.contains(&name)
}

pub fn is_known_preset(name: &str) -> bool {
    KNOWN_PRESETS.contains(&name)
}

pub fn is_known_transformer(name: &str) -> bool {
    KNOWN_TRANSFORMERS.contains(&name)
}

pub fn is_known_icon(name: &str) -> bool {
    KNOWN_ICONS.contains(&name)
}

/// Find a registered rule sharing the namespace of `name` (the part before
/// `/`), for use in diagnostic hints.
pub fn rule_in_same_namespace(name: &str) -> Option<&'static str> {
    let namespace = name.split_once('/')?.0;
    KNOWN_RULES
        .iter()
        .find(|rule| rule.split_once('/').is_some_and(|(ns, _)| ns == namespace))
        .copied()
}

// ============================================================================
// tests
// ============================================================================
