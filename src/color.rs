//! Color literal parsing.
//!
//! This module provides the common intermediate representation
//! ([`ColorSample`]) and one parser per supported CSS notation:
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Functional rgb: `rgb(...)` / `rgba(...)`
//! - Functional hsl: `hsl(...)` / `hsla(...)`
//! - Functional oklch: `oklch(...)`
//!
//! # Examples
//!
//! ```
//! use recolor::color::{ColorNotation, ColorSample};
//!
//! let notation = ColorNotation::detect("#6750a4").unwrap();
//! assert_eq!(notation, ColorNotation::Hex);
//!
//! let sample = notation.parse("#6750a4").unwrap();
//! assert_eq!(sample, ColorSample::new(103.0, 80.0, 164.0));
//! ```
//!
//! Parsers expect the token already lowercased and trimmed (the
//! pipeline normalizes before dispatch) and fail definitively: a
//! malformed token yields a [`ColorParseError`], never a partial
//! sample.

use regex::{Captures, Regex};
use smallvec::SmallVec;
use std::fmt;
use std::sync::LazyLock;

use crate::convert;

/// The common intermediate representation for every notation.
///
/// Channels are conceptually in `[0, 255]` but may transiently exceed
/// that range after parsing; the pipeline clamps before formatting.
/// An absent alpha means fully opaque and is omitted from output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorSample {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: Option<f64>,
}

impl ColorSample {
    /// Create an opaque sample from RGB channel values.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Create a sample carrying an explicit alpha value.
    #[must_use]
    pub const fn with_alpha(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(alpha),
        }
    }

    /// Returns true if this sample renders without transparency.
    ///
    /// An alpha of exactly 1 counts as opaque; formatters must not emit
    /// an alpha component for it.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        match self.alpha {
            None => true,
            Some(alpha) => alpha >= 1.0,
        }
    }

    /// Clamp the RGB channels into `[0, 255]`.
    ///
    /// Alpha is passed through as parsed; only the color channels are
    /// gamut clamped.
    #[must_use]
    pub fn clamp(self) -> Self {
        Self {
            red: self.red.clamp(0.0, 255.0),
            green: self.green.clamp(0.0, 255.0),
            blue: self.blue.clamp(0.0, 255.0),
            alpha: self.alpha,
        }
    }
}

impl From<(u8, u8, u8)> for ColorSample {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(f64::from(red), f64::from(green), f64::from(blue))
    }
}

/// The closed set of supported color notations.
///
/// Each variant knows how to parse its own textual form into a
/// [`ColorSample`]; formatting lives in [`crate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorNotation {
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    Hex,
    /// `rgb(...)` or `rgba(...)`.
    Rgb,
    /// `hsl(...)` or `hsla(...)`.
    Hsl,
    /// `oklch(...)`.
    Oklch,
}

impl ColorNotation {
    /// Sniff the notation of a lowercased token by its leading
    /// characters.
    #[must_use]
    pub fn detect(token: &str) -> Option<Self> {
        if token.starts_with('#') {
            Some(Self::Hex)
        } else if token.starts_with("rgb") {
            Some(Self::Rgb)
        } else if token.starts_with("hsl") {
            Some(Self::Hsl)
        } else if token.starts_with("oklch") {
            Some(Self::Oklch)
        } else {
            None
        }
    }

    /// Parse a lowercased, trimmed token in this notation.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] when the token does not match the
    /// notation's grammar (wrong hex length, unparseable numeric
    /// group, malformed argument list).
    pub fn parse(self, token: &str) -> Result<ColorSample, ColorParseError> {
        match self {
            Self::Hex => parse_hex(token),
            Self::Rgb => parse_rgb(token),
            Self::Hsl => parse_hsl(token),
            Self::Oklch => parse_oklch(token),
        }
    }

    /// Get the name of this notation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        }
    }
}

/// Error type for color literal parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex digits did not expand to 6 or 8 characters.
    InvalidHex(String),
    /// `rgb()`/`rgba()` argument list did not match.
    InvalidRgb(String),
    /// `hsl()`/`hsla()` argument list did not match.
    InvalidHsl(String),
    /// `oklch()` argument list did not match.
    InvalidOklch(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex(s) => write!(f, "invalid hex color: {s}"),
            Self::InvalidRgb(s) => write!(f, "invalid rgb color: {s}"),
            Self::InvalidHsl(s) => write!(f, "invalid hsl color: {s}"),
            Self::InvalidOklch(s) => write!(f, "invalid oklch color: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

fn parse_hex(token: &str) -> Result<ColorSample, ColorParseError> {
    let digits = token.strip_prefix('#').unwrap_or(token);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(token.to_string()));
    }

    // Expand #rgb / #rgba shorthand by duplicating each nibble.
    let expanded: String = if digits.len() == 3 || digits.len() == 4 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    if expanded.len() != 6 && expanded.len() != 8 {
        return Err(ColorParseError::InvalidHex(token.to_string()));
    }

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16)
            .map(f64::from)
            .map_err(|_| ColorParseError::InvalidHex(token.to_string()))
    };

    let red = byte(0..2)?;
    let green = byte(2..4)?;
    let blue = byte(4..6)?;

    if expanded.len() == 8 {
        let alpha = byte(6..8)? / 255.0;
        Ok(ColorSample::with_alpha(red, green, blue, alpha))
    } else {
        Ok(ColorSample::new(red, green, blue))
    }
}

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(-?\d+)\s*[,\s]\s*(-?\d+)\s*[,\s]\s*(-?\d+)\s*(?:[,/]\s*([\d.]+%?)\s*)?\)$",
    )
    .expect("valid regex")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*(\d+)(?:deg)?\s*[,\s]\s*([\d.]+)%?\s*[,\s]\s*([\d.]+)%?\s*(?:[,/]\s*([\d.]+%?)\s*)?\)$",
    )
    .expect("valid regex")
});

static OKLCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^oklch\(\s*([\d.]+)%?\s+([\d.]+)\s+([\d.]+)(?:deg)?\s*(?:/\s*([\d.]+%?)\s*)?\)$",
    )
    .expect("valid regex")
});

/// Parse the three leading numeric capture groups.
fn leading_components(caps: &Captures<'_>) -> Option<SmallVec<[f64; 3]>> {
    (1..=3)
        .map(|i| caps.get(i).and_then(|m| m.as_str().parse().ok()))
        .collect()
}

fn parse_rgb(token: &str) -> Result<ColorSample, ColorParseError> {
    let caps = RGB_RE
        .captures(token)
        .ok_or_else(|| ColorParseError::InvalidRgb(token.to_string()))?;
    let channels = leading_components(&caps)
        .ok_or_else(|| ColorParseError::InvalidRgb(token.to_string()))?;

    match caps.get(4) {
        // A `%`-suffixed alpha is a percentage; a bare number is used
        // as-is. Alpha is never clamped at parse time.
        Some(group) => {
            let raw = group.as_str();
            let alpha = if let Some(percent) = raw.strip_suffix('%') {
                percent
                    .parse::<f64>()
                    .map(|v| v / 100.0)
                    .map_err(|_| ColorParseError::InvalidRgb(token.to_string()))?
            } else {
                raw.parse()
                    .map_err(|_| ColorParseError::InvalidRgb(token.to_string()))?
            };
            Ok(ColorSample::with_alpha(
                channels[0],
                channels[1],
                channels[2],
                alpha,
            ))
        }
        None => Ok(ColorSample::new(channels[0], channels[1], channels[2])),
    }
}

fn parse_hsl(token: &str) -> Result<ColorSample, ColorParseError> {
    let caps = HSL_RE
        .captures(token)
        .ok_or_else(|| ColorParseError::InvalidHsl(token.to_string()))?;
    let components = leading_components(&caps)
        .ok_or_else(|| ColorParseError::InvalidHsl(token.to_string()))?;

    let hue = components[0];
    let saturation = components[1] / 100.0;
    let lightness = components[2] / 100.0;
    let (red, green, blue) = convert::hsl_to_srgb(hue, saturation, lightness);

    match caps.get(4) {
        Some(group) => {
            let raw = group.as_str();
            let alpha = if let Some(percent) = raw.strip_suffix('%') {
                percent
                    .parse::<f64>()
                    .map(|v| v / 100.0)
                    .map_err(|_| ColorParseError::InvalidHsl(token.to_string()))?
            } else {
                raw.parse()
                    .map_err(|_| ColorParseError::InvalidHsl(token.to_string()))?
            };
            Ok(ColorSample::with_alpha(red, green, blue, alpha))
        }
        None => Ok(ColorSample::new(red, green, blue)),
    }
}

fn parse_oklch(token: &str) -> Result<ColorSample, ColorParseError> {
    let caps = OKLCH_RE
        .captures(token)
        .ok_or_else(|| ColorParseError::InvalidOklch(token.to_string()))?;
    let components = leading_components(&caps)
        .ok_or_else(|| ColorParseError::InvalidOklch(token.to_string()))?;

    // Lightness is always a percentage in this notation, with or
    // without the `%` sign.
    let lightness = components[0] / 100.0;
    let chroma = components[1];
    let hue = components[2];
    let (red, green, blue) = convert::oklch_to_srgb(lightness, chroma, hue);

    match caps.get(4) {
        Some(group) => {
            let raw = group.as_str();
            let alpha = if let Some(percent) = raw.strip_suffix('%') {
                percent
                    .parse::<f64>()
                    .map(|v| v / 100.0)
                    .map_err(|_| ColorParseError::InvalidOklch(token.to_string()))?
            } else {
                raw.parse()
                    .map_err(|_| ColorParseError::InvalidOklch(token.to_string()))?
            };
            Ok(ColorSample::with_alpha(red, green, blue, alpha))
        }
        None => Ok(ColorSample::new(red, green, blue)),
    }
}
