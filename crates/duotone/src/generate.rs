//! Light/dark theme generation.
//!
//! A configured theme is either a single tree, used for both modes, or a
//! mapping with `light` and `dark` keys holding one tree per mode:
//!
//! ```yaml
//! light:
//!   colors:
//!     surface: "#ffffff"
//! dark:
//!   colors:
//!     surface: "#111827"
//! ```
//!
//! [`generate_theme`] flattens each variant into its own map of variables
//! and normalizes every collected color to an `"r g b"` channel string.
//! Both variants produce the same variable names, so the rewritten light
//! tree is the theme utilities use, and only the declarations differ between
//! modes.
//!
//! ```rust
//! use duotone::{generate_theme, Options};
//! use serde_json::json;
//!
//! let options = Options::new().with_theme(json!({
//!     "light": { "colors": { "surface": "#fff" } },
//!     "dark": { "colors": { "surface": "#111827" } },
//! }));
//!
//! let generated = generate_theme(&options);
//! assert_eq!(generated.light.get("--un-colors-surface"), Some("255 255 255"));
//! assert_eq!(generated.dark.get("--un-colors-surface"), Some("17 24 39"));
//! ```

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Serialize;

use crate::color::convert_to_rgb;
use crate::config::{ColorMode, Options};
use crate::flatten::{flatten_theme, RawValueMap, VariableName};
use crate::theme::ColorNode;

/// The light and dark trees of a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeVariants {
    light: ColorNode,
    dark: ColorNode,
}

impl ThemeVariants {
    pub fn new(light: ColorNode, dark: ColorNode) -> Self {
        Self { light, dark }
    }

    /// Splits a configured theme into its variants.
    ///
    /// - no theme: both variants are empty;
    /// - a mapping with both `light` and `dark` keys: those two subtrees;
    /// - anything else: the same tree for both modes.
    pub fn split(theme: Option<&ColorNode>) -> Self {
        let Some(theme) = theme else {
            return Self::new(ColorNode::empty(), ColorNode::empty());
        };

        match (theme.get("light"), theme.get("dark")) {
            (Some(light), Some(dark)) => Self::new(light.clone(), dark.clone()),
            (light, dark) => {
                if light.is_some() || dark.is_some() {
                    warn!(
                        "theme has a '{}' key but no '{}' key; using the whole theme for both modes",
                        if light.is_some() { "light" } else { "dark" },
                        if light.is_some() { "dark" } else { "light" },
                    );
                }
                Self::new(theme.clone(), theme.clone())
            }
        }
    }

    pub fn light(&self) -> &ColorNode {
        &self.light
    }

    pub fn dark(&self) -> &ColorNode {
        &self.dark
    }

    pub fn get(&self, mode: ColorMode) -> &ColorNode {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Splits a configured theme into its variants. See [`ThemeVariants::split`].
pub fn split_variants(theme: Option<&ColorNode>) -> ThemeVariants {
    ThemeVariants::split(theme)
}

// ─── CssVars ────────────────────────────────────────────────────────────────

/// Variable name to normalized `"r g b"` channels, in theme order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CssVars(IndexMap<VariableName, String>);

impl CssVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: VariableName, channels: impl Into<String>) {
        self.0.insert(name, channels.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, VariableName, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CssVars {
    type Item = (&'a VariableName, &'a String);
    type IntoIter = indexmap::map::Iter<'a, VariableName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(VariableName, String)> for CssVars {
    fn from_iter<I: IntoIterator<Item = (VariableName, String)>>(iter: I) -> Self {
        CssVars(iter.into_iter().collect())
    }
}

/// Normalizes raw colors to channel strings.
///
/// Entries whose text is not a color (including empty strings) are left out.
pub fn normalize_values(base: &RawValueMap) -> CssVars {
    base.iter()
        .filter_map(|(name, raw)| match convert_to_rgb(Some(raw.as_str())) {
            Some(color) => Some((name.clone(), color.channels())),
            None => {
                debug!("dropping {}: {:?} is not a color", name, raw);
                None
            }
        })
        .collect()
}

// ─── Generation ─────────────────────────────────────────────────────────────

/// The result of theme generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedTheme {
    /// The light tree with every color replaced by `rgb(var(--...))`.
    pub theme: ColorNode,
    /// Declarations for light mode.
    pub light: CssVars,
    /// Declarations for dark mode.
    pub dark: CssVars,
}

impl GeneratedTheme {
    pub fn vars(&self, mode: ColorMode) -> &CssVars {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Generates the rewritten theme and both sets of declarations.
///
/// Each variant is flattened into its own [`RawValueMap`]. The dark tree is
/// only walked for its values; its rewritten form matches the light one
/// wherever the two share keys.
pub fn generate_theme(options: &Options) -> GeneratedTheme {
    let variants = ThemeVariants::split(options.theme());
    let prefix = options.variable_prefix();

    let mut light_base = RawValueMap::new();
    let mut dark_base = RawValueMap::new();

    let theme = flatten_theme(variants.light(), prefix, &mut light_base);
    flatten_theme(variants.dark(), prefix, &mut dark_base);

    let light = normalize_values(&light_base);
    let dark = normalize_values(&dark_base);

    debug!(
        "generated {} light and {} dark variables ({} and {} found)",
        light.len(),
        dark.len(),
        light_base.len(),
        dark_base.len()
    );

    GeneratedTheme { theme, light, dark }
}
