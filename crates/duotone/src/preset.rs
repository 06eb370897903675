//! The assembled preset.
//!
//! A [`Preset`] is everything a utility-CSS build tool needs from a theme
//! configuration: the rewritten theme to resolve utility colors against,
//! the preflight CSS that declares the variables, layer ordering, and an
//! optional rewriter for generated entries when a custom prefix is used.
//!
//! ```rust
//! use duotone::{Layer, Options, Preset};
//! use serde_json::json;
//!
//! let preset = Preset::new(
//!     Options::new()
//!         .with_selector("media")
//!         .with_theme(json!({ "colors": { "brand": "#ff6b35" } })),
//! );
//!
//! assert_eq!(preset.name(), "duotone-dark-mode-theme");
//! assert_eq!(preset.preflights()[0].layer, Layer::Theme);
//! assert!(preset.css().starts_with("@media (prefers-color-scheme: light){--un-colors-brand:255 107 53;}"));
//! assert!(preset.postprocess().is_none());
//! ```

use std::fmt;

use log::debug;

use crate::config::Options;
use crate::css::theme_css;
use crate::generate::{generate_theme, CssVars, GeneratedTheme};
use crate::prefix::{CssEntry, PrefixRewriter};
use crate::theme::ColorNode;

/// Name the preset registers under.
pub const PRESET_NAME: &str = "duotone-dark-mode-theme";

/// Output layers, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Variable declarations.
    Theme = 0,
    /// Utilities.
    Default = 1,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Theme, Layer::Default];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Theme => "theme",
            Layer::Default => "default",
        }
    }

    pub fn order(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// CSS emitted ahead of utilities in a given layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    pub layer: Layer,
    pub css: String,
}

/// A fully generated theme preset.
#[derive(Debug, Clone)]
pub struct Preset {
    options: Options,
    generated: GeneratedTheme,
    preflights: Vec<Preflight>,
    postprocess: Option<PrefixRewriter>,
}

impl Preset {
    /// Generates the preset. Unset options take their defaults here, once.
    pub fn new(options: Options) -> Self {
        let options = options.resolved();
        let generated = generate_theme(&options);
        let preflights = vec![Preflight {
            layer: Layer::Theme,
            css: theme_css(&options, &generated.light, &generated.dark),
        }];
        let postprocess = PrefixRewriter::for_prefix(options.variable_prefix());

        debug!(
            "preset ready: selector '{}', prefix '{}'",
            options.selector_str(),
            options.variable_prefix()
        );

        Self {
            options,
            generated,
            preflights,
            postprocess,
        }
    }

    pub fn name(&self) -> &'static str {
        PRESET_NAME
    }

    pub fn layers(&self) -> &'static [Layer] {
        &Layer::ALL
    }

    /// The options with defaults filled in.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The theme with every color replaced by a variable reference.
    pub fn theme(&self) -> &ColorNode {
        &self.generated.theme
    }

    pub fn light_vars(&self) -> &CssVars {
        &self.generated.light
    }

    pub fn dark_vars(&self) -> &CssVars {
        &self.generated.dark
    }

    pub fn preflights(&self) -> &[Preflight] {
        &self.preflights
    }

    /// The rewriter for generated entries, present only for a custom prefix.
    pub fn postprocess(&self) -> Option<&PrefixRewriter> {
        self.postprocess.as_ref()
    }

    /// Applies [`postprocess`](Self::postprocess) to a rule's entries.
    pub fn postprocess_entries(&self, entries: &mut [CssEntry]) {
        if let Some(rewriter) = &self.postprocess {
            rewriter.rewrite_entries(entries);
        }
    }

    /// All preflight CSS, joined by newlines.
    pub fn css(&self) -> String {
        self.preflights
            .iter()
            .map(|p| p.css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_generated(self) -> GeneratedTheme {
        self.generated
    }
}

impl From<Options> for Preset {
    fn from(options: Options) -> Self {
        Preset::new(options)
    }
}
