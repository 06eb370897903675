//! duotone - print light/dark CSS variables for a theme configuration.
//!
//! ```text
//! duotone theme.yaml                 # declaration blocks
//! duotone theme.yaml --theme-json    # the rewritten theme
//! duotone theme.json --selector media --prefix app-
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use duotone::{Options, Preset};
use log::debug;

/// Generate light/dark CSS custom properties from a color theme.
#[derive(Parser, Debug)]
#[command(name = "duotone")]
#[command(version)]
#[command(about = "Generate light/dark CSS custom properties from a color theme")]
struct Cli {
    /// Configuration file (.yaml, .yml or .json)
    config: PathBuf,

    /// Print the rewritten theme as JSON instead of CSS
    #[arg(long)]
    theme_json: bool,

    /// Dark-mode class, or "media" for prefers-color-scheme queries
    #[arg(long)]
    selector: Option<String>,

    /// CSS variable prefix (default "un-")
    #[arg(long)]
    prefix: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Result<Options> {
        let mut options = Options::from_file(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?;

        if let Some(selector) = &self.selector {
            options = options.with_selector(selector.as_str());
        }
        if let Some(prefix) = &self.prefix {
            options = options.with_variable_prefix(prefix.as_str());
        }
        Ok(options)
    }
}

fn run(cli: &Cli) -> Result<String> {
    let options = cli.options()?;
    debug!(
        "selector '{}', prefix '{}'",
        options.selector_str(),
        options.variable_prefix()
    );

    let preset = Preset::new(options);
    if cli.theme_json {
        serde_json::to_string_pretty(preset.theme()).context("serializing theme")
    } else {
        Ok(preset.css())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "duotone",
            "theme.yaml",
            "--theme-json",
            "--selector",
            "media",
            "--prefix",
            "app-",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("theme.yaml"));
        assert!(cli.theme_json);
        assert_eq!(cli.selector.as_deref(), Some("media"));
        assert_eq!(cli.prefix.as_deref(), Some("app-"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_is_required() {
        assert!(Cli::try_parse_from(["duotone"]).is_err());
    }

    #[test]
    fn test_run_prints_css() {
        let file = config_file("theme:\n  colors:\n    primary: red\n");
        let cli = Cli::try_parse_from(["duotone", file.path().to_str().unwrap()]).unwrap();

        assert_eq!(
            run(&cli).unwrap(),
            ":root{--un-colors-primary:255 0 0;}\n:root.dark{--un-colors-primary:255 0 0;}"
        );
    }

    #[test]
    fn test_flags_override_config() {
        let file = config_file("selector: night\ntheme:\n  colors:\n    primary: red\n");
        let path = file.path().to_str().unwrap();
        let cli =
            Cli::try_parse_from(["duotone", path, "--selector", "media", "--prefix", "x-"]).unwrap();

        let css = run(&cli).unwrap();
        assert!(css.starts_with("@media (prefers-color-scheme: light){--x-colors-primary:255 0 0;}"));
    }

    #[test]
    fn test_theme_json_output() {
        let file = config_file("theme:\n  colors:\n    primary: red\n");
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["duotone", path, "--theme-json"]).unwrap();

        let json: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "colors": { "primary": "rgb(var(--un-colors-primary))" } })
        );
    }

    #[test]
    fn test_missing_file_has_context() {
        let cli = Cli::try_parse_from(["duotone", "/nonexistent/theme.yaml"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("loading /nonexistent/theme.yaml"));
    }
}
