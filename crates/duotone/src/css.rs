//! Declaration block assembly.
//!
//! Turns the two sets of variables into the CSS that defines them: the light
//! values on the document root, the dark values under the configured
//! selector.
//!
//! ```rust
//! use duotone::{generate_theme, theme_css, Options};
//! use serde_json::json;
//!
//! let options = Options::new().with_theme(json!({
//!     "light": { "colors": { "bg": "white" } },
//!     "dark": { "colors": { "bg": "black" } },
//! }));
//! let generated = generate_theme(&options);
//!
//! assert_eq!(
//!     theme_css(&options, &generated.light, &generated.dark),
//!     ":root{--un-colors-bg:255 255 255;}\n:root.dark{--un-colors-bg:0 0 0;}",
//! );
//! ```

use crate::config::{ColorMode, Options};
use crate::generate::CssVars;
use crate::prefix::rewrite_css_prefix;

/// Serializes variables as `name:value;` pairs, in order.
pub fn entries_to_css(vars: &CssVars) -> String {
    vars.iter()
        .map(|(name, value)| format!("{}:{};", name, value))
        .collect()
}

/// One `{root}{{declarations}}` block.
pub fn block(root: &str, vars: &CssVars, prefix: &str) -> String {
    let declarations = entries_to_css(vars);
    format!("{}{{{}}}", root, rewrite_css_prefix(&declarations, prefix))
}

/// Builds the light block and the dark block, separated by a newline.
///
/// With the `media` selector both blocks are `prefers-color-scheme` media
/// queries; otherwise light goes on `:root` and dark on `:root.{selector}`.
/// Declarations are emitted even when a block is empty.
pub fn theme_css(options: &Options, light: &CssVars, dark: &CssVars) -> String {
    let selector = options.selector();
    let prefix = options.variable_prefix();

    [
        block(&selector.root(ColorMode::Light), light, prefix),
        block(&selector.root(ColorMode::Dark), dark, prefix),
    ]
    .join("\n")
}
