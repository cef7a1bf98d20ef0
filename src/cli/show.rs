//! Show command implementation.
//!
//! Prints one tool's resolved configuration as TOML (default) or JSON,
//! to stdout or a file.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::{ShowArgs, Tool};
use crate::config::DocsConfig;
use crate::log;

/// Execute show command
pub fn run_show(args: &ShowArgs, config: &DocsConfig) -> Result<()> {
    let formatted = match args.tool {
        Tool::Site => render(&config.site, args)?,
        Tool::Lint => render(&config.lint, args)?,
        Tool::Style => render(&config.style, args)?,
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted.trim_end())?;
        log!("show"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted.trim_end());
    }

    Ok(())
}

/// Serialize a config section in the requested format.
fn render<T: Serialize>(section: &T, args: &ShowArgs) -> Result<String> {
    let out = if args.json {
        if args.pretty {
            serde_json::to_string_pretty(section)?
        } else {
            serde_json::to_string(section)?
        }
    } else {
        toml::to_string_pretty(section)?
    };
    Ok(out)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn show_args(tool: Tool) -> ShowArgs {
        ShowArgs {
            tool,
            json: false,
            pretty: false,
            output: None,
        }
    }

    #[test]
    fn test_render_site_toml() {
        let config = DocsConfig::builtin().unwrap();
        let out = render(&config.site, &show_args(Tool::Site)).unwrap();
        assert!(out.contains("Chroma.js"));
        assert!(out.contains("[[nav]]"));
    }

    #[test]
    fn test_render_style_json() {
        let config = DocsConfig::builtin().unwrap();
        let mut args = show_args(Tool::Style);
        args.json = true;
        let out = render(&config.style, &args).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["mode"], "dev");
        assert_eq!(parsed["presets"][0], "uno");
    }

    #[test]
    fn test_write_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        let config = DocsConfig::builtin().unwrap();

        let mut args = show_args(Tool::Style);
        args.output = Some(path.clone());
        run_show(&args, &config).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("mode = \"dev\""));
        assert!(written.contains("variant-group"));
    }
}
