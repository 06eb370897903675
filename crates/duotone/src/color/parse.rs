//! Color text parsing.
//!
//! Supported notations:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (alpha to two decimals)
//! - `rgb()` / `rgba()`: numbers or percentages, comma syntax
//!   (`rgb(0, 255, 255, 0.5)`) or space syntax (`rgb(0 255 255 / 50%)`)
//! - `hsl()` / `hsla()`: hue as a number or `deg`/`grad`/`rad`/`turn`,
//!   saturation and lightness as percentages, same separators as `rgb()`
//! - Named colors (`red`, `rebeccapurple`, ...) and `transparent`
//!
//! Tokenizing is done by `cssparser`, so comments, escapes and whitespace
//! follow CSS rules. Anything the grammar does not accept yields `None`.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::named;
use super::space::{round_to, Hsla, Rgba};

type ColorParseError<'i> = ParseError<'i, ()>;

/// Parses a color in any supported notation.
///
/// Returns `None` for empty, unknown or malformed input. Trailing tokens
/// after a valid color (`"red blue"`) are rejected.
///
/// # Example
///
/// ```rust
/// use duotone::color::{parse_color, Rgba};
///
/// assert_eq!(parse_color("#f80"), Some(Rgba::opaque(255, 136, 0)));
/// assert_eq!(parse_color("rgba(0, 255, 255, 0.5)"), Some(Rgba::new(0.0, 255.0, 255.0, 0.5)));
/// assert_eq!(parse_color("not-a-color"), None);
/// ```
pub fn parse_color(text: &str) -> Option<Rgba> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(parse_color_value).ok()
}

fn parse_color_value<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Rgba, ColorParseError<'i>> {
    let token = input.next()?.clone();
    match token {
        Token::Hash(ref value) | Token::IDHash(ref value) => {
            parse_hex(value).ok_or_else(|| input.new_custom_error::<(), ()>(()))
        }
        Token::Ident(ref name) => {
            parse_keyword(name).ok_or_else(|| input.new_custom_error::<(), ()>(()))
        }
        Token::Function(ref name) => match name.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => input.parse_nested_block(parse_rgb_arguments),
            "hsl" | "hsla" => input.parse_nested_block(parse_hsl_arguments),
            _ => Err(input.new_custom_error::<(), ()>(())),
        },
        _ => Err(input.new_custom_error::<(), ()>(())),
    }
}

/// Parses hex digits (without the `#`).
fn parse_hex(digits: &str) -> Option<Rgba> {
    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;

    let (r, g, b, a) = match nibbles.len() {
        // #rgb / #rgba: each digit is doubled
        3 => (nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17, 255),
        4 => (
            nibbles[0] * 17,
            nibbles[1] * 17,
            nibbles[2] * 17,
            nibbles[3] * 17,
        ),
        // #rrggbb / #rrggbbaa
        6 => (
            nibbles[0] * 16 + nibbles[1],
            nibbles[2] * 16 + nibbles[3],
            nibbles[4] * 16 + nibbles[5],
            255,
        ),
        8 => (
            nibbles[0] * 16 + nibbles[1],
            nibbles[2] * 16 + nibbles[3],
            nibbles[4] * 16 + nibbles[5],
            nibbles[6] * 16 + nibbles[7],
        ),
        _ => return None,
    };

    Some(Rgba::new(r as f64, g as f64, b as f64, round_to(a as f64 / 255.0, 2)))
}

fn parse_keyword(name: &str) -> Option<Rgba> {
    let name = name.to_ascii_lowercase();
    if name == "transparent" {
        return Some(Rgba::new(0.0, 0.0, 0.0, 0.0));
    }
    named::lookup(&name).map(|(r, g, b)| Rgba::opaque(r, g, b))
}

// ─── Function arguments ─────────────────────────────────────────────────────

fn parse_rgb_arguments<'i, 't>(args: &mut Parser<'i, 't>) -> Result<Rgba, ColorParseError<'i>> {
    let red = parse_rgb_channel(args)?;
    let comma_syntax = args.try_parse(|p| p.expect_comma()).is_ok();
    let green = parse_rgb_channel(args)?;
    if comma_syntax {
        args.expect_comma()?;
    }
    let blue = parse_rgb_channel(args)?;
    let alpha = parse_optional_alpha(args, comma_syntax)?;
    args.expect_exhausted()?;

    Ok(Rgba::new(red, green, blue, alpha))
}

fn parse_hsl_arguments<'i, 't>(args: &mut Parser<'i, 't>) -> Result<Rgba, ColorParseError<'i>> {
    let hue = parse_hue(args)?;
    let comma_syntax = args.try_parse(|p| p.expect_comma()).is_ok();
    let saturation = parse_percentage(args)?;
    if comma_syntax {
        args.expect_comma()?;
    }
    let lightness = parse_percentage(args)?;
    let alpha = parse_optional_alpha(args, comma_syntax)?;
    args.expect_exhausted()?;

    Ok(Hsla::new(hue, saturation, lightness, alpha).to_rgba())
}

/// A channel is a number in `0..=255` or a percentage of 255.
fn parse_rgb_channel<'i, 't>(args: &mut Parser<'i, 't>) -> Result<f64, ColorParseError<'i>> {
    let token = args.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(f64::from(value)),
        Token::Percentage { unit_value, .. } => Ok(f64::from(unit_value) * 255.0),
        _ => Err(args.new_custom_error::<(), ()>(())),
    }
}

/// Hue in degrees; unitless numbers are degrees.
fn parse_hue<'i, 't>(args: &mut Parser<'i, 't>) -> Result<f64, ColorParseError<'i>> {
    let token = args.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(f64::from(value)),
        Token::Dimension {
            value, ref unit, ..
        } => {
            let value = f64::from(value);
            match unit.to_ascii_lowercase().as_str() {
                "deg" => Ok(value),
                "grad" => Ok(value * 0.9),
                "rad" => Ok(value.to_degrees()),
                "turn" => Ok(value * 360.0),
                _ => Err(args.new_custom_error::<(), ()>(())),
            }
        }
        _ => Err(args.new_custom_error::<(), ()>(())),
    }
}

/// Saturation and lightness must carry a `%`; returned as 0–100.
fn parse_percentage<'i, 't>(args: &mut Parser<'i, 't>) -> Result<f64, ColorParseError<'i>> {
    let token = args.next()?.clone();
    match token {
        Token::Percentage { unit_value, .. } => Ok(f64::from(unit_value) * 100.0),
        _ => Err(args.new_custom_error::<(), ()>(())),
    }
}

/// Alpha follows a comma (comma syntax) or a `/` (space syntax).
fn parse_optional_alpha<'i, 't>(
    args: &mut Parser<'i, 't>,
    comma_syntax: bool,
) -> Result<f64, ColorParseError<'i>> {
    let separated = if comma_syntax {
        args.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        args.try_parse(|p| p.expect_delim('/')).is_ok()
    };
    if !separated {
        return Ok(1.0);
    }

    let token = args.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(f64::from(value)),
        Token::Percentage { unit_value, .. } => Ok(f64::from(unit_value)),
        _ => Err(args.new_custom_error::<(), ()>(())),
    }
}
