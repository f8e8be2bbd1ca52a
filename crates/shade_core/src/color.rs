//! Color string parsing and manipulation
//!
//! Theme values travel as strings (`"#1989fa"`, `"rgba(0,0,0,0.4)"`); this
//! module decodes them into an [`Rgba`] value when a caller needs to touch
//! the channels, e.g. to derive a translucent variant with [`with_alpha`].

use std::fmt;

use thiserror::Error;

/// Error decoding a color string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string is not `#hex`, `rgb()` or `rgba()`.
    #[error("unsupported color syntax: {0:?}")]
    UnsupportedSyntax(String),
    /// The syntax was recognized but a channel failed to parse.
    #[error("invalid color component in {0:?}")]
    InvalidComponent(String),
}

/// An 8-bit RGBA color decoded from a color string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    /// Opaque color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from channel values and alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the alpha channel replaced.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

impl fmt::Display for Rgba {
    /// Opaque colors print as `#rrggbb`, translucent ones as `rgba(...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Decodes `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.
pub fn parse_color(input: &str) -> Result<Rgba, ColorParseError> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex, input);
    }
    if let Some(body) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        return parse_components(body, true, input);
    }
    if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        return parse_components(body, false, input);
    }
    Err(ColorParseError::UnsupportedSyntax(input.to_owned()))
}

/// Re-emits `color` with its alpha channel replaced.
///
/// The input may use any syntax [`parse_color`] accepts; `alpha` is
/// clamped to `0.0..=1.0`.
pub fn with_alpha(color: &str, alpha: f32) -> Result<String, ColorParseError> {
    let parsed = parse_color(color)?;
    Ok(parsed.with_alpha(alpha.clamp(0.0, 1.0)).to_string())
}

fn parse_hex(hex: &str, input: &str) -> Result<Rgba, ColorParseError> {
    let invalid = || ColorParseError::InvalidComponent(input.to_owned());
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let nibble = |range: &str| u8::from_str_radix(range, 16).map_err(|_| invalid());

    match hex.len() {
        // #f3f
        3 => {
            let mut channels = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = nibble(&c.to_string())?;
                channels[i] = v << 4 | v;
            }
            Ok(Rgba::rgb(channels[0], channels[1], channels[2]))
        }
        // #ff0055
        6 => Ok(Rgba::rgb(
            nibble(&hex[0..2])?,
            nibble(&hex[2..4])?,
            nibble(&hex[4..6])?,
        )),
        // #ff990035
        8 => Ok(Rgba::rgba(
            nibble(&hex[0..2])?,
            nibble(&hex[2..4])?,
            nibble(&hex[4..6])?,
            f32::from(nibble(&hex[6..8])?) / 255.0,
        )),
        _ => Err(invalid()),
    }
}

fn parse_components(body: &str, has_alpha: bool, input: &str) -> Result<Rgba, ColorParseError> {
    let invalid = || ColorParseError::InvalidComponent(input.to_owned());
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != if has_alpha { 4 } else { 3 } {
        return Err(invalid());
    }

    let channel = |i: usize| parts[i].parse::<u8>().map_err(|_| invalid());
    let alpha = if has_alpha {
        parts[3].parse::<f32>().map_err(|_| invalid())?
    } else {
        1.0
    };
    Ok(Rgba::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_hex() {
        assert_eq!(parse_color("#f3f").unwrap(), Rgba::rgb(0xff, 0x33, 0xff));
    }

    #[test]
    fn parses_long_hex() {
        assert_eq!(
            parse_color("#1989fa").unwrap(),
            Rgba::rgb(0x19, 0x89, 0xfa)
        );
    }

    #[test]
    fn parses_hex_with_alpha() {
        let color = parse_color("#ff990080").unwrap();
        assert_eq!((color.r, color.g, color.b), (0xff, 0x99, 0x00));
        assert!((color.a - 0.5).abs() < 0.01);
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!(
            parse_color("rgb(255,0,64)").unwrap(),
            Rgba::rgb(255, 0, 64)
        );
        assert_eq!(
            parse_color("rgba(0, 0, 0, 0.4)").unwrap(),
            Rgba::rgba(0, 0, 0, 0.4)
        );
    }

    #[test]
    fn rejects_unknown_syntax() {
        assert_eq!(
            parse_color("tomato"),
            Err(ColorParseError::UnsupportedSyntax("tomato".into()))
        );
        assert!(matches!(
            parse_color("#12345"),
            Err(ColorParseError::InvalidComponent(_))
        ));
        assert!(matches!(
            parse_color("rgb(1,2)"),
            Err(ColorParseError::InvalidComponent(_))
        ));
    }

    #[test]
    fn display_round_trips_opaque_colors() {
        assert_eq!(parse_color("#1989fa").unwrap().to_string(), "#1989fa");
    }

    #[test]
    fn with_alpha_rewrites_any_syntax() {
        assert_eq!(with_alpha("#1989fa", 0.5).unwrap(), "rgba(25,137,250,0.5)");
        assert_eq!(
            with_alpha("rgb(10,20,30)", 0.25).unwrap(),
            "rgba(10,20,30,0.25)"
        );
        // Alpha is clamped, and 1.0 collapses back to hex
        assert_eq!(with_alpha("rgba(10,20,30,0.5)", 2.0).unwrap(), "#0a141e");
    }
}
