//! Configuration check command.

use anyhow::Result;

use crate::config::DocsConfig;
use crate::log;

/// Print a per-tool summary of the validated configuration.
///
/// Validation itself runs during `DocsConfig::load`; reaching this point
/// means every section passed, so the summary reports what each consumer
/// will receive.
pub fn run_check(config: &DocsConfig) -> Result<()> {
    if config.config_path.as_os_str().is_empty() {
        log!("check"; "no config file, using built-in defaults");
    } else {
        log!("check"; "checked {}", config.config_path.display());
    }

    log!(
        "site"; "`{}`: {} nav entries, {} sidebar sections, {} social links",
        config.site.info.title,
        config.site.nav.len(),
        config.site.sidebar.len(),
        config.site.social.len()
    );
    log!(
        "lint"; "{} file selectors, {} rule overrides",
        config.lint.files.len(),
        config.lint.rules.len()
    );
    log!(
        "style"; "mode `{}`: {} presets, {} transformers",
        config.style.mode,
        config.style.effective_presets().len(),
        config.style.effective_transformers().len()
    );

    log!("check"; "configuration ok");
    Ok(())
}
