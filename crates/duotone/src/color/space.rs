//! RGB and HSL color spaces at full precision.
//!
//! Parsed colors are carried as [`Rgba`] with `f64` channels in `0.0..=255.0`
//! and an alpha in `0.0..=1.0`. Nothing in this module rounds: rounding to the
//! integer/percentage form happens exactly once, when a
//! [`ParsedColor`](super::ParsedColor) is built. Converting HSL input to RGB
//! and back therefore does not accumulate error.
//!
//! # Example
//!
//! ```rust
//! use duotone::color::{Hsla, Rgba};
//!
//! let red = Hsla::new(0.0, 100.0, 50.0, 1.0).to_rgba();
//! assert_eq!(red, Rgba::new(255.0, 0.0, 0.0, 1.0));
//!
//! let back = red.to_hsla();
//! assert_eq!(back.h, 0.0);
//! assert_eq!(back.s, 100.0);
//! assert_eq!(back.l, 50.0);
//! ```

// ─── Rgba ───────────────────────────────────────────────────────────────────

/// An sRGB color with unrounded channels.
///
/// Channels are clamped to `0.0..=255.0` and alpha to `0.0..=1.0` on
/// construction, so out-of-range function arguments such as `rgb(300, 0, 0)`
/// saturate instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel (0.0–255.0).
    pub r: f64,
    /// Green channel (0.0–255.0).
    pub g: f64,
    /// Blue channel (0.0–255.0).
    pub b: f64,
    /// Alpha (0.0–1.0).
    pub a: f64,
}

impl Rgba {
    /// Creates a color, clamping every component into range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_finite(r, 255.0),
            g: clamp_finite(g, 255.0),
            b: clamp_finite(b, 255.0),
            a: clamp_finite(a, 1.0),
        }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64, 1.0)
    }

    /// Converts to HSL.
    ///
    /// Achromatic colors (all channels equal) get hue `0` and saturation `0`.
    pub fn to_hsla(self) -> Hsla {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsla::new(0.0, 0.0, l * 100.0, self.a);
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if max == r {
            ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        Hsla::new(h * 360.0, s * 100.0, l * 100.0, self.a)
    }
}

// ─── Hsla ───────────────────────────────────────────────────────────────────

/// An HSL color with unrounded components.
///
/// Hue is in degrees, wrapped into `0.0..360.0`. Saturation and lightness are
/// percentages clamped to `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees (0.0–360.0, exclusive).
    pub h: f64,
    /// Saturation percentage (0.0–100.0).
    pub s: f64,
    /// Lightness percentage (0.0–100.0).
    pub l: f64,
    /// Alpha (0.0–1.0).
    pub a: f64,
}

impl Hsla {
    /// Creates an HSL color, wrapping the hue and clamping the rest.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_finite(s, 100.0),
            l: clamp_finite(l, 100.0),
            a: clamp_finite(a, 1.0),
        }
    }

    /// Converts to RGB.
    pub fn to_rgba(self) -> Rgba {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            let v = l * 255.0;
            return Rgba::new(v, v, v, self.a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgba::new(
            hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, h) * 255.0,
            hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
            self.a,
        )
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Wraps a hue in degrees into `0.0..360.0`. Non-finite hues become `0.0`.
pub(crate) fn normalize_hue(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Clamps into `0.0..=max`, mapping NaN to `0.0`.
fn clamp_finite(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Rounds to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let base = 10f64.powi(digits);
    (value * base).round() / base
}
