//! Generator options.
//!
//! [`Options`] holds the three inputs of theme generation: the theme tree,
//! the dark-mode selector and the CSS variable prefix. Options can be built
//! in code or loaded from YAML/JSON:
//!
//! ```yaml
//! selector: dark
//! variablePrefix: un-
//! theme:
//!   light:
//!     colors:
//!       primary: "#3B82F6"
//!   dark:
//!     colors:
//!       primary: "#60A5FA"
//! ```
//!
//! Unset fields fall back to defaults when read: selector `dark`, prefix
//! `un-`, and an empty theme.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::prefix::DEFAULT_PREFIX;
use crate::theme::ColorNode;

/// Selector used when none is configured.
pub const DEFAULT_SELECTOR: &str = "dark";

/// The selector value that switches to `prefers-color-scheme` media queries.
pub const MEDIA_SELECTOR: &str = "media";

/// Supported configuration file extensions, in priority order.
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Light or dark color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the dark variables are scoped in the generated CSS.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Dark mode is a class on the root element: `:root.{class}`.
    Class(String),
    /// Both modes follow the OS preference via `prefers-color-scheme`.
    Media,
}

impl Selector {
    pub fn parse(selector: &str) -> Self {
        if selector == MEDIA_SELECTOR {
            Selector::Media
        } else {
            Selector::Class(selector.to_string())
        }
    }

    /// The block prelude for one mode.
    ///
    /// ```rust
    /// use duotone::{ColorMode, Selector};
    ///
    /// let class = Selector::parse("dark");
    /// assert_eq!(class.root(ColorMode::Light), ":root");
    /// assert_eq!(class.root(ColorMode::Dark), ":root.dark");
    ///
    /// let media = Selector::parse("media");
    /// assert_eq!(media.root(ColorMode::Dark), "@media (prefers-color-scheme: dark)");
    /// ```
    pub fn root(&self, mode: ColorMode) -> String {
        match (self, mode) {
            (Selector::Media, mode) => format!("@media (prefers-color-scheme: {})", mode),
            (Selector::Class(_), ColorMode::Light) => ":root".to_string(),
            (Selector::Class(class), ColorMode::Dark) => format!(":root.{}", class),
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::Class(DEFAULT_SELECTOR.to_string())
    }
}

/// Theme generation options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<ColorNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variable_prefix: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the theme, either a single tree or a `{light, dark}` pair.
    pub fn with_theme(mut self, theme: impl Into<ColorNode>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Sets the dark-mode class, or `"media"` for media queries.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Sets the CSS variable prefix (default `un-`).
    pub fn with_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = Some(prefix.into());
        self
    }

    pub fn theme(&self) -> Option<&ColorNode> {
        self.theme.as_ref()
    }

    /// The selector text as configured, or `dark`.
    pub fn selector_str(&self) -> &str {
        self.selector.as_deref().unwrap_or(DEFAULT_SELECTOR)
    }

    pub fn selector(&self) -> Selector {
        Selector::parse(self.selector_str())
    }

    pub fn variable_prefix(&self) -> &str {
        self.variable_prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Returns a copy with every default filled in.
    pub fn resolved(&self) -> Self {
        Self {
            theme: self.theme.clone(),
            selector: Some(self.selector_str().to_string()),
            variable_prefix: Some(self.variable_prefix().to_string()),
        }
    }

    /// Loads options from YAML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the content is not valid YAML or has
    /// unexpected fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use duotone::Options;
    ///
    /// let options = Options::from_yaml(r##"
    /// selector: media
    /// theme:
    ///   colors:
    ///     primary: "#fff"
    /// "##).unwrap();
    ///
    /// assert_eq!(options.selector_str(), "media");
    /// assert_eq!(options.variable_prefix(), "un-");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml(yaml, None)
    }

    /// Loads options from JSON content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the content is not valid JSON or has
    /// unexpected fields.
    pub fn from_json(json: &str) -> Result<Self> {
        parse_json(json, None)
    }

    /// Loads options from a `.yaml`, `.yml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for other extensions,
    /// [`ConfigError::Load`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::for_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            Format::Yaml => parse_yaml(&content, Some(path)),
            Format::Json => parse_json(&content, Some(path)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn for_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        let ext = CONFIG_EXTENSIONS.iter().find(|ext| name.ends_with(*ext))?;
        match *ext {
            ".json" => Some(Format::Json),
            _ => Some(Format::Yaml),
        }
    }
}

fn parse_yaml(content: &str, path: Option<&Path>) -> Result<Options> {
    // An empty document means "all defaults".
    if content.trim().is_empty() {
        return Ok(Options::default());
    }
    serde_yaml::from_str(content).map_err(|e| ConfigError::parse(path, e))
}

fn parse_json(content: &str, path: Option<&Path>) -> Result<Options> {
    serde_json::from_str(content).map_err(|e| ConfigError::parse(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // =========================================================================
    // Defaults and builders
    // =========================================================================

    #[test]
    fn test_defaults() {
        let options = Options::new();
        assert_eq!(options.theme(), None);
        assert_eq!(options.selector_str(), "dark");
        assert_eq!(options.selector(), Selector::Class("dark".into()));
        assert_eq!(options.variable_prefix(), "un-");
    }

    #[test]
    fn test_builders() {
        let options = Options::new()
            .with_theme(ColorNode::from(json!({"colors": {"primary": "#fff"}})))
            .with_selector("night")
            .with_variable_prefix("app-");

        assert!(options.theme().is_some());
        assert_eq!(options.selector(), Selector::Class("night".into()));
        assert_eq!(options.variable_prefix(), "app-");
    }

    #[test]
    fn test_resolved_fills_defaults() {
        let resolved = Options::new().resolved();
        assert_eq!(
            serde_json::to_value(&resolved).unwrap(),
            json!({"selector": "dark", "variablePrefix": "un-"})
        );
    }

    #[test]
    fn test_media_selector() {
        assert_eq!(Selector::parse("media"), Selector::Media);
        assert_eq!(
            Selector::Media.root(ColorMode::Light),
            "@media (prefers-color-scheme: light)"
        );
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn test_from_yaml_camel_case_fields() {
        let options = Options::from_yaml(
            r##"
variablePrefix: custom-
theme:
  colors:
    primary: "#fff"
"##,
        )
        .unwrap();

        assert_eq!(options.variable_prefix(), "custom-");
        assert_eq!(options.selector_str(), "dark");
        assert_eq!(
            options
                .theme()
                .and_then(|t| t.get_path(&["colors", "primary"]))
                .and_then(ColorNode::as_leaf),
            Some("#fff")
        );
    }

    #[test]
    fn test_from_yaml_empty_is_default() {
        assert_eq!(Options::from_yaml("").unwrap(), Options::default());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        let err = Options::from_yaml("prefix: app-\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_from_json() {
        let options =
            Options::from_json(r##"{"selector":"media","theme":{"colors":{"a":"red"}}}"##)
                .unwrap();
        assert_eq!(options.selector(), Selector::Media);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Options::from_json("{"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_from_file_yaml_and_json() {
        let yaml = temp_config(".yml", "selector: night\n");
        assert_eq!(
            Options::from_file(yaml.path()).unwrap().selector_str(),
            "night"
        );

        let json = temp_config(".json", r#"{"variablePrefix": "x-"}"#);
        assert_eq!(Options::from_file(json.path()).unwrap().variable_prefix(), "x-");
    }

    #[test]
    fn test_from_file_parse_error_carries_path() {
        let file = temp_config(".yaml", "theme: [unclosed\n");
        match Options::from_file(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path.as_deref(), Some(file.path())),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Options::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Load { .. }));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let file = temp_config(".toml", "selector = 'dark'\n");
        let err = Options::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }
}
