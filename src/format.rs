//! Formatters from a clamped [`ColorSample`] into each output
//! notation.
//!
//! The numeric trimming rules here are part of the crate's contract:
//! the goal is textual stability against the reference tool, not just
//! numeric equivalence. Rounding is half away from zero (JavaScript
//! `toFixed` semantics), and each notation has its own trimming rules:
//! rgb/hsl alpha drops trailing zeros wholesale, hsl percentages strip
//! only an exact `.0`, oklch lightness and hue strip only an exact
//! `.00`, and the oklch alpha additionally collapses a leading `0.` to
//! a bare `.`.

use std::fmt::Write;

use crate::color::ColorSample;
use crate::convert;

/// Fixed-point formatting with half-away-from-zero rounding.
fn to_fixed(value: f64, places: usize) -> String {
    let scale = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.places$}")
}

/// Strip an exact suffix such as `.00`; partial trailing zeros stay.
fn strip_exact(value: String, suffix: &str) -> String {
    match value.strip_suffix(suffix) {
        Some(stripped) => stripped.to_string(),
        None => value,
    }
}

/// Drop all trailing fractional zeros and a dangling decimal point.
fn trim_zeros(value: String) -> String {
    if !value.contains('.') {
        return value;
    }
    value.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Alpha as emitted by the rgb and hsl notations: two decimals with
/// the numeric value's natural representation (`0.5`, not `0.50`).
fn legacy_alpha(alpha: f64) -> String {
    trim_zeros(to_fixed(alpha, 2))
}

/// Alpha as emitted by the oklch notation: like [`legacy_alpha`] but
/// with a leading `0.` collapsed to `.` (`0.50` becomes `.5`).
fn oklch_alpha(alpha: f64) -> String {
    let trimmed = trim_zeros(to_fixed(alpha, 2));
    if let Some(rest) = trimmed.strip_prefix("0.") {
        format!(".{rest}")
    } else {
        trimmed
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byte(value: f64) -> u8 {
    value.round() as u8
}

/// Format as lowercase hex digits.
///
/// The alpha pair is appended only when alpha is present and strictly
/// less than 1; the `#` prefix is emitted only under CSS function
/// syntax.
#[must_use]
pub fn hex(sample: &ColorSample, css_function_syntax: bool) -> String {
    let mut out = String::with_capacity(9);
    if css_function_syntax {
        out.push('#');
    }
    let _ = write!(
        out,
        "{:02x}{:02x}{:02x}",
        byte(sample.red),
        byte(sample.green),
        byte(sample.blue)
    );
    if let Some(alpha) = sample.alpha
        && alpha < 1.0
    {
        let _ = write!(out, "{:02x}", byte(alpha * 255.0));
    }
    out
}

/// Format as `rgb(...)`/`rgba(...)` or the bare `r g b [/ a]` list.
#[must_use]
pub fn rgb(sample: &ColorSample, css_function_syntax: bool) -> String {
    let r = byte(sample.red);
    let g = byte(sample.green);
    let b = byte(sample.blue);

    match sample.alpha {
        Some(alpha) if alpha < 1.0 => {
            let a = legacy_alpha(alpha);
            if css_function_syntax {
                format!("rgba({r}, {g}, {b}, {a})")
            } else {
                format!("{r} {g} {b} / {a}")
            }
        }
        _ => {
            if css_function_syntax {
                format!("rgb({r}, {g}, {b})")
            } else {
                format!("{r} {g} {b}")
            }
        }
    }
}

/// Format as `hsl(...)`/`hsla(...)` or the bare `h s l [/ a]` list.
#[must_use]
pub fn hsl(sample: &ColorSample, css_function_syntax: bool) -> String {
    let (hue, saturation, lightness) = convert::srgb_to_hsl(sample);
    let h = to_fixed(hue, 0);
    let s = strip_exact(to_fixed(saturation * 100.0, 1), ".0");
    let l = strip_exact(to_fixed(lightness * 100.0, 1), ".0");

    match sample.alpha {
        Some(alpha) if alpha < 1.0 => {
            let a = legacy_alpha(alpha);
            if css_function_syntax {
                format!("hsla({h}, {s}%, {l}%, {a})")
            } else {
                format!("{h} {s} {l} / {a}")
            }
        }
        _ => {
            if css_function_syntax {
                format!("hsl({h}, {s}%, {l}%)")
            } else {
                format!("{h} {s} {l}")
            }
        }
    }
}

/// Format as `oklch(...)` or the bare `L C h [/ a]` list.
#[must_use]
pub fn oklch(sample: &ColorSample, css_function_syntax: bool) -> String {
    let polar = convert::srgb_to_oklch(sample);
    let l = strip_exact(to_fixed(polar.lightness * 100.0, 2), ".00");
    let c = trim_zeros(to_fixed(polar.chroma, 4));
    let h = strip_exact(to_fixed(polar.hue, 2), ".00");

    let alpha_suffix = match sample.alpha {
        Some(alpha) if alpha < 1.0 => format!(" / {}", oklch_alpha(alpha)),
        _ => String::new(),
    };

    if css_function_syntax {
        format!("oklch({l}% {c} {h}{alpha_suffix})")
    } else {
        format!("{l} {c} {h}{alpha_suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.135, 2), "0.14");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_strip_exact_only_full_suffix() {
        assert_eq!(strip_exact("49.00".to_string(), ".00"), "49");
        // `.20` is not `.00`; it stays
        assert_eq!(strip_exact("49.20".to_string(), ".00"), "49.20");
        assert_eq!(strip_exact("100.0".to_string(), ".0"), "100");
    }

    #[test]
    fn test_trim_zeros() {
        assert_eq!(trim_zeros("0.1300".to_string()), "0.13");
        assert_eq!(trim_zeros("0.5000".to_string()), "0.5");
        assert_eq!(trim_zeros("1.0000".to_string()), "1");
        assert_eq!(trim_zeros("120".to_string()), "120");
    }

    #[test]
    fn test_oklch_alpha_collapses_leading_zero() {
        assert_eq!(oklch_alpha(0.5), ".5");
        assert_eq!(oklch_alpha(0.25), ".25");
        assert_eq!(oklch_alpha(0.0), "0");
    }

    #[test]
    fn test_hex_lowercase_and_prefix() {
        let sample = ColorSample::new(103.0, 80.0, 164.0);
        assert_eq!(hex(&sample, true), "#6750a4");
        assert_eq!(hex(&sample, false), "6750a4");
    }

    #[test]
    fn test_hex_alpha_pair_only_when_translucent() {
        let translucent = ColorSample::with_alpha(255.0, 0.0, 0.0, 0.5);
        assert_eq!(hex(&translucent, true), "#ff000080");

        let opaque = ColorSample::with_alpha(255.0, 0.0, 0.0, 1.0);
        assert_eq!(hex(&opaque, true), "#ff0000");
    }

    #[test]
    fn test_rgb_wrapped_and_bare() {
        let sample = ColorSample::new(103.0, 80.0, 164.0);
        assert_eq!(rgb(&sample, true), "rgb(103, 80, 164)");
        assert_eq!(rgb(&sample, false), "103 80 164");
    }

    #[test]
    fn test_rgb_alpha_value_not_padded() {
        let sample = ColorSample::with_alpha(10.0, 20.0, 30.0, 0.5);
        assert_eq!(rgb(&sample, true), "rgba(10, 20, 30, 0.5)");
        assert_eq!(rgb(&sample, false), "10 20 30 / 0.5");

        let quarter = ColorSample::with_alpha(10.0, 20.0, 30.0, 0.25);
        assert_eq!(rgb(&quarter, true), "rgba(10, 20, 30, 0.25)");
    }

    #[test]
    fn test_hsl_wrapped() {
        let sample = ColorSample::new(103.0, 80.0, 164.0);
        assert_eq!(hsl(&sample, true), "hsl(256, 34.4%, 47.8%)");
    }

    #[test]
    fn test_hsl_strips_exact_point_zero() {
        let red = ColorSample::new(255.0, 0.0, 0.0);
        assert_eq!(hsl(&red, true), "hsl(0, 100%, 50%)");
        assert_eq!(hsl(&red, false), "0 100 50");
    }

    #[test]
    fn test_hsl_alpha() {
        let sample = ColorSample::with_alpha(255.0, 0.0, 0.0, 0.3);
        assert_eq!(hsl(&sample, true), "hsla(0, 100%, 50%, 0.3)");
        assert_eq!(hsl(&sample, false), "0 100 50 / 0.3");
    }

    #[test]
    fn test_oklch_wrapped_known_value() {
        let sample = ColorSample::new(103.0, 80.0, 164.0);
        assert_eq!(oklch(&sample, true), "oklch(49.55% 0.1305 293.71)");
        assert_eq!(oklch(&sample, false), "49.55 0.1305 293.71");
    }

    #[test]
    fn test_oklch_partial_trailing_zero_kept() {
        // Lightness 62.80 keeps its final zero; only an exact .00 is
        // stripped.
        let red = ColorSample::new(255.0, 0.0, 0.0);
        assert_eq!(oklch(&red, true), "oklch(62.80% 0.2577 29.23)");
    }

    #[test]
    fn test_oklch_black_and_white_collapse_cleanly() {
        let black = ColorSample::new(0.0, 0.0, 0.0);
        assert_eq!(oklch(&black, true), "oklch(0% 0 0)");

        // White's a/b axes are cancellation residue near 1e-16, so the
        // hue digits are not asserted.
        let white = ColorSample::new(255.0, 255.0, 255.0);
        assert!(oklch(&white, true).starts_with("oklch(100% 0 "));
    }

    #[test]
    fn test_oklch_alpha_suffix() {
        let sample = ColorSample::with_alpha(103.0, 80.0, 164.0, 0.5);
        assert_eq!(oklch(&sample, true), "oklch(49.55% 0.1305 293.71 / .5)");
        assert_eq!(oklch(&sample, false), "49.55 0.1305 293.71 / .5");
    }

    #[test]
    fn test_opaque_alpha_never_emitted() {
        let sample = ColorSample::with_alpha(1.0, 2.0, 3.0, 1.0);
        assert_eq!(rgb(&sample, true), "rgb(1, 2, 3)");
        assert!(!oklch(&sample, true).contains('/'));
        assert!(!hsl(&sample, true).contains('/'));
        assert_eq!(hex(&sample, false).len(), 6);
    }
}
