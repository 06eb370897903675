//! Color normalization.
//!
//! Any color a theme may contain (hex, `rgb()`/`rgba()`, `hsl()`/`hsla()` or
//! a CSS keyword) is parsed once into an unrounded [`Rgba`], then rendered
//! into a [`ParsedColor`]: the canonical three-component form used for CSS
//! custom-property values.
//!
//! ```rust
//! use duotone::color::{convert_to_hsl, convert_to_rgb, ColorKind};
//!
//! let rgb = convert_to_rgb(Some("hsl(0, 100%, 50%)")).unwrap();
//! assert_eq!(rgb.kind, ColorKind::Rgb);
//! assert_eq!(rgb.channels(), "255 0 0");
//!
//! let hsl = convert_to_hsl(Some("rgba(0, 255, 255, 0.5)")).unwrap();
//! assert_eq!(hsl.kind, ColorKind::Hsla);
//! assert_eq!(hsl.components, ["180", "100%", "50%"]);
//! assert_eq!(hsl.alpha.as_deref(), Some("0.5"));
//!
//! assert!(convert_to_rgb(Some("not-a-color")).is_none());
//! ```

mod named;
mod parse;
mod space;

pub use parse::parse_color;
pub use space::{Hsla, Rgba};

use std::fmt;

use space::round_to;

/// The notation a [`ParsedColor`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl ColorKind {
    /// The CSS function name for this notation.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorKind::Rgb => "rgb",
            ColorKind::Rgba => "rgba",
            ColorKind::Hsl => "hsl",
            ColorKind::Hsla => "hsla",
        }
    }

    /// Whether this notation carries an alpha component.
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorKind::Rgba | ColorKind::Hsla)
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color rendered into canonical components.
///
/// `components` always holds three strings: integer channels for the RGB
/// kinds, or `["h", "s%", "l%"]` for the HSL kinds. `alpha` is present
/// exactly when the kind has alpha, i.e. when the rounded alpha is below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedColor {
    pub kind: ColorKind,
    pub components: [String; 3],
    pub alpha: Option<String>,
}

impl ParsedColor {
    /// Renders a color in RGB notation.
    pub fn rgb(color: Rgba) -> Self {
        let channel = |c: f64| (c.round() as u8).to_string();
        let (kind, alpha) = split_alpha(color.a, ColorKind::Rgb, ColorKind::Rgba);
        Self {
            kind,
            components: [channel(color.r), channel(color.g), channel(color.b)],
            alpha,
        }
    }

    /// Renders a color in HSL notation.
    pub fn hsl(color: Hsla) -> Self {
        let percent = |v: f64| format!("{}%", v.round() as u8);
        let (kind, alpha) = split_alpha(color.a, ColorKind::Hsl, ColorKind::Hsla);
        Self {
            kind,
            components: [
                (color.h.round() as u16 % 360).to_string(),
                percent(color.s),
                percent(color.l),
            ],
            alpha,
        }
    }

    /// The components joined by single spaces, e.g. `"255 0 0"`.
    ///
    /// This is the form used as a custom-property value, so that
    /// `rgb(var(--name))` resolves to a valid color.
    pub fn channels(&self) -> String {
        self.components.join(" ")
    }

    /// The color as a CSS function, e.g. `rgba(0, 255, 255, 0.5)`.
    pub fn to_css(&self) -> String {
        let [a, b, c] = &self.components;
        match &self.alpha {
            Some(alpha) => format!("{}({}, {}, {}, {})", self.kind, a, b, c, alpha),
            None => format!("{}({}, {}, {})", self.kind, a, b, c),
        }
    }
}

impl fmt::Display for ParsedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Picks the opaque or translucent kind, formatting alpha at 3 decimals.
fn split_alpha(alpha: f64, opaque: ColorKind, translucent: ColorKind) -> (ColorKind, Option<String>) {
    let alpha = round_to(alpha, 3);
    if alpha < 1.0 {
        (translucent, Some(alpha.to_string()))
    } else {
        (opaque, None)
    }
}

/// Normalizes a color to RGB components.
///
/// Returns `None` when `color` is missing, empty or not a recognizable color.
pub fn convert_to_rgb(color: Option<&str>) -> Option<ParsedColor> {
    color.and_then(parse_color).map(ParsedColor::rgb)
}

/// Normalizes a color to HSL components.
///
/// Returns `None` when `color` is missing, empty or not a recognizable color.
pub fn convert_to_hsl(color: Option<&str>) -> Option<ParsedColor> {
    color
        .and_then(parse_color)
        .map(|rgba| ParsedColor::hsl(rgba.to_hsla()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_of(text: &str) -> ParsedColor {
        convert_to_rgb(Some(text)).unwrap_or_else(|| panic!("{:?} did not parse", text))
    }

    fn hsl_of(text: &str) -> ParsedColor {
        convert_to_hsl(Some(text)).unwrap_or_else(|| panic!("{:?} did not parse", text))
    }

    // =========================================================================
    // convert_to_rgb
    // =========================================================================

    #[test]
    fn test_rgb_from_hex() {
        let c = rgb_of("#fff");
        assert_eq!(c.kind, ColorKind::Rgb);
        assert_eq!(c.components, ["255", "255", "255"]);
        assert_eq!(c.alpha, None);

        assert_eq!(rgb_of("#f0f0f0").components, ["240", "240", "240"]);
        assert_eq!(rgb_of("#000000").components, ["0", "0", "0"]);
    }

    #[test]
    fn test_rgb_from_rgb_function() {
        let c = rgb_of("rgb(128, 128, 128)");
        assert_eq!(c.kind, ColorKind::Rgb);
        assert_eq!(c.components, ["128", "128", "128"]);
    }

    #[test]
    fn test_rgb_keeps_alpha() {
        let c = rgb_of("rgba(0, 255, 255, 0.5)");
        assert_eq!(c.kind, ColorKind::Rgba);
        assert_eq!(c.components, ["0", "255", "255"]);
        assert_eq!(c.alpha.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_rgb_from_hsl() {
        let c = rgb_of("hsl(0, 100%, 50%)");
        assert_eq!(c.kind, ColorKind::Rgb);
        assert_eq!(c.components, ["255", "0", "0"]);

        let c = rgb_of("hsla(180, 100%, 50%, 0.5)");
        assert_eq!(c.kind, ColorKind::Rgba);
        assert_eq!(c.components, ["0", "255", "255"]);
        assert_eq!(c.alpha.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_rgb_from_named() {
        assert_eq!(rgb_of("red").components, ["255", "0", "0"]);
        assert_eq!(rgb_of("blue").components, ["0", "0", "255"]);
    }

    #[test]
    fn test_rgb_hex_alpha_rounds_to_two_digits() {
        let c = rgb_of("#0000ff80");
        assert_eq!(c.kind, ColorKind::Rgba);
        assert_eq!(c.alpha.as_deref(), Some("0.5"));

        assert_eq!(rgb_of("#f008").alpha.as_deref(), Some("0.53"));
    }

    #[test]
    fn test_explicit_opaque_alpha() {
        let rgb = rgb_of("rgba(10, 20, 30, 1)");
        assert_eq!(rgb.kind, ColorKind::Rgb);
        assert_eq!(rgb.alpha, None);
        assert_eq!(rgb.channels(), "10 20 30");

        let hsl = hsl_of("hsla(0, 0%, 0%, 1.0)");
        assert_eq!(hsl.kind, ColorKind::Hsl);
        assert_eq!(hsl.alpha, None);
    }

    #[test]
    fn test_rgb_alpha_that_rounds_to_one_is_opaque() {
        let c = rgb_of("rgba(1, 2, 3, 0.9999)");
        assert_eq!(c.kind, ColorKind::Rgb);
        assert_eq!(c.alpha, None);
    }

    #[test]
    fn test_rgb_transparent() {
        let c = rgb_of("transparent");
        assert_eq!(c.kind, ColorKind::Rgba);
        assert_eq!(c.components, ["0", "0", "0"]);
        assert_eq!(c.alpha.as_deref(), Some("0"));
    }

    #[test]
    fn test_rgb_invalid_inputs() {
        assert_eq!(convert_to_rgb(None), None);
        assert_eq!(convert_to_rgb(Some("")), None);
        assert_eq!(convert_to_rgb(Some("not-a-color")), None);
        assert_eq!(convert_to_rgb(Some("rgb(var(--un-colors-primary))")), None);
    }

    // =========================================================================
    // convert_to_hsl
    // =========================================================================

    #[test]
    fn test_hsl_from_hex() {
        let c = hsl_of("#fff");
        assert_eq!(c.kind, ColorKind::Hsl);
        assert_eq!(c.components, ["0", "0%", "100%"]);

        assert_eq!(hsl_of("#f0f0f0").components, ["0", "0%", "94%"]);
        assert_eq!(hsl_of("#000000").components, ["0", "0%", "0%"]);
    }

    #[test]
    fn test_hsl_from_rgb() {
        assert_eq!(hsl_of("rgb(128, 128, 128)").components, ["0", "0%", "50%"]);

        let c = hsl_of("rgba(0, 255, 255, 0.5)");
        assert_eq!(c.kind, ColorKind::Hsla);
        assert_eq!(c.components, ["180", "100%", "50%"]);
        assert_eq!(c.alpha.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_hsl_preserves_hsl_input() {
        let c = hsl_of("hsl(120, 100%, 50%)");
        assert_eq!(c.kind, ColorKind::Hsl);
        assert_eq!(c.components, ["120", "100%", "50%"]);

        let c = hsl_of("hsla(240, 100%, 50%, 0.5)");
        assert_eq!(c.kind, ColorKind::Hsla);
        assert_eq!(c.components, ["240", "100%", "50%"]);
        assert_eq!(c.alpha.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_hsl_from_named() {
        assert_eq!(hsl_of("red").components, ["0", "100%", "50%"]);
        assert_eq!(hsl_of("blue").components, ["240", "100%", "50%"]);
    }

    #[test]
    fn test_hsl_hue_never_renders_360() {
        let c = ParsedColor::hsl(Hsla::new(359.7, 100.0, 50.0, 1.0));
        assert_eq!(c.components[0], "0");
    }

    #[test]
    fn test_hsl_invalid_inputs() {
        assert_eq!(convert_to_hsl(None), None);
        assert_eq!(convert_to_hsl(Some("")), None);
        assert_eq!(convert_to_hsl(Some("not-a-color")), None);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn test_channels_are_space_joined() {
        assert_eq!(rgb_of("#ff6b35").channels(), "255 107 53");
        assert_eq!(hsl_of("red").channels(), "0 100% 50%");
    }

    #[test]
    fn test_to_css() {
        assert_eq!(rgb_of("#f00").to_css(), "rgb(255, 0, 0)");
        assert_eq!(
            rgb_of("rgba(0, 255, 255, 0.5)").to_css(),
            "rgba(0, 255, 255, 0.5)"
        );
        assert_eq!(
            hsl_of("hsla(240, 100%, 50%, 0.25)").to_string(),
            "hsla(240, 100%, 50%, 0.25)"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ColorKind::Rgba.as_str(), "rgba");
        assert!(ColorKind::Hsla.has_alpha());
        assert!(!ColorKind::Rgb.has_alpha());
    }
}
