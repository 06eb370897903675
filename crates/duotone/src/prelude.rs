//! Convenience imports.
//!
//! ```rust
//! use duotone::prelude::*;
//!
//! let preset = Preset::new(Options::new().with_selector("media"));
//! assert_eq!(preset.options().selector(), Selector::Media);
//! ```

pub use crate::{
    convert_to_rgb, flatten_theme, generate_theme, theme_css, ColorMode, ColorNode, CssVars,
    Options, Preset, RawValueMap, Selector, VariableName,
};
