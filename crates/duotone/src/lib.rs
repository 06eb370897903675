//! # Duotone - Light/Dark CSS Variable Themes
//!
//! `duotone` turns a nested color theme into CSS custom properties that
//! switch between a light and a dark palette. It is meant to sit in front of
//! a utility-CSS generator: utilities reference `rgb(var(--un-...))`, and the
//! generated declarations decide which color that resolves to.
//!
//! ## Core Concepts
//!
//! - [`ColorNode`]: A theme tree, leaves are color strings
//! - [`flatten_theme`]: Replaces every leaf with a variable reference and records the color
//! - [`convert_to_rgb`] / [`convert_to_hsl`]: Color normalization (hex, rgb, hsl, names)
//! - [`generate_theme`]: Both variants flattened and normalized
//! - [`theme_css`]: The `:root` / dark-selector declaration blocks
//! - [`Preset`]: Everything above bundled for a build tool
//!
//! ## Quick Start
//!
//! ```rust
//! use duotone::{Options, Preset};
//!
//! let options = Options::from_yaml(r##"
//! selector: dark
//! theme:
//!   light:
//!     colors:
//!       primary: "#3B82F6"
//!       surface: white
//!   dark:
//!     colors:
//!       primary: "#60A5FA"
//!       surface: "hsl(220, 39%, 11%)"
//! "##).unwrap();
//!
//! let preset = Preset::new(options);
//!
//! assert_eq!(
//!     preset.theme().get_path(&["colors", "primary"]).and_then(|n| n.as_leaf()),
//!     Some("rgb(var(--un-colors-primary))"),
//! );
//! assert_eq!(
//!     preset.css(),
//!     ":root{--un-colors-primary:59 130 246;--un-colors-surface:255 255 255;}\n\
//!      :root.dark{--un-colors-primary:96 165 250;--un-colors-surface:17 24 39;}",
//! );
//! ```
//!
//! ## Single-Variant Themes
//!
//! A theme without both `light` and `dark` keys is used for both modes. This
//! still routes every color through a variable, which is useful when a
//! custom [`Options::with_variable_prefix`] is needed.
//!
//! ## Custom Prefixes
//!
//! Variables default to the `un-` prefix. With another prefix, theme
//! references and declarations use it directly, and
//! [`Preset::postprocess_entries`] rewrites `--un-` in utility output so the
//! two stay consistent.

pub mod color;
mod config;
pub mod css;
mod error;
pub mod flatten;
pub mod generate;
pub mod prefix;
pub mod prelude;
mod preset;
mod theme;

// Error type
pub use error::{ConfigError, Result};

// Color normalization
pub use color::{convert_to_hsl, convert_to_rgb, parse_color, ColorKind, ParsedColor};

// Theme tree and flattening
pub use flatten::{
    flatten_theme, flatten_theme_fresh, wrap_rgb, wrap_var, RawValueMap, VariableName,
};
pub use theme::ColorNode;

// Generation and CSS
pub use css::{entries_to_css, theme_css};
pub use generate::{
    generate_theme, normalize_values, split_variants, CssVars, GeneratedTheme, ThemeVariants,
};

// Configuration
pub use config::{
    ColorMode, Options, Selector, CONFIG_EXTENSIONS, DEFAULT_SELECTOR, MEDIA_SELECTOR,
};
pub use prefix::{rewrite_css_prefix, CssEntry, PrefixRewriter, DEFAULT_PREFIX};

// Preset
pub use preset::{Layer, Preflight, Preset, PRESET_NAME};
