//! Colorimetric conversions between sRGB, HSL and Oklab/Oklch.
//!
//! The Oklab matrices follow the CSS Color 4 reference values. The
//! forward chain (sRGB to Oklch) runs gamma linearization, sRGB to
//! CIE-XYZ (D65), XYZ to LMS, a cube root, LMS to Oklab and finally a
//! polar form. The inverse chain (Oklch to sRGB) uses the compact
//! Oklab-to-LMS and LMS-to-linear-sRGB matrices with the two-segment
//! gamma curve applied last.

#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

use crate::color::ColorSample;

/// Rectangular form of the Oklab perceptual space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
    /// Carried through unchanged from the originating sample.
    pub alpha: Option<f64>,
}

/// Cylindrical polar form over the same space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Nominally in `[0, 1]`.
    pub lightness: f64,
    pub chroma: f64,
    /// Degrees, normalized into `[0, 360)`.
    pub hue: f64,
    pub alpha: Option<f64>,
}

impl Oklab {
    /// Convert to the polar form.
    ///
    /// A negative `atan2` angle is normalized by adding 360 degrees.
    #[must_use]
    pub fn to_oklch(&self) -> Oklch {
        let chroma = self.a.hypot(self.b);
        let mut hue = self.b.atan2(self.a).to_degrees();
        if hue < 0.0 {
            hue += 360.0;
        }
        Oklch {
            lightness: self.lightness,
            chroma,
            hue,
            alpha: self.alpha,
        }
    }
}

/// Inverse gamma: one sRGB byte value to linear light in `[0, 1]`.
fn srgb_to_linear(byte_value: f64) -> f64 {
    let v = byte_value / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Forward gamma: linear light to a rounded sRGB byte value.
///
/// The clamp applies to the linear `[0, 1]` value before the curve,
/// not to the final byte.
fn linear_to_srgb(linear: f64) -> f64 {
    let v = linear.clamp(0.0, 1.0);
    let encoded = if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (encoded * 255.0).round()
}

/// Convert a gamma-encoded sRGB sample to Oklab.
#[must_use]
pub fn srgb_to_oklab(sample: &ColorSample) -> Oklab {
    let r = srgb_to_linear(sample.red);
    let g = srgb_to_linear(sample.green);
    let b = srgb_to_linear(sample.blue);

    // Linear sRGB to CIE-XYZ, D65 white point.
    let x = 0.4123907992659595 * r + 0.35758433938387796 * g + 0.1804807884018343 * b;
    let y = 0.21263900587151036 * r + 0.7151686787677559 * g + 0.07219231536073371 * b;
    let z = 0.01933081871559185 * r + 0.11919477979462599 * g + 0.9505321522496606 * b;

    // XYZ to LMS, then the non-linearity.
    let l = (0.8190224432164319 * x + 0.3619062562801221 * y - 0.12887378261216414 * z).cbrt();
    let m = (0.0329836671980271 * x + 0.9292868468965546 * y + 0.03614466816999844 * z).cbrt();
    let s = (0.048177199566046255 * x + 0.26423952494422764 * y + 0.6335478258136937 * z).cbrt();

    Oklab {
        lightness: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
        alpha: sample.alpha,
    }
}

/// Convert a gamma-encoded sRGB sample to the Oklch polar form.
#[must_use]
pub fn srgb_to_oklch(sample: &ColorSample) -> Oklch {
    srgb_to_oklab(sample).to_oklch()
}

/// Convert Oklch coordinates to rounded sRGB byte values.
#[must_use]
pub fn oklch_to_srgb(lightness: f64, chroma: f64, hue: f64) -> (f64, f64, f64) {
    let hue_radians = hue.to_radians();
    let a = chroma * hue_radians.cos();
    let b = chroma * hue_radians.sin();

    // Oklab to non-linear LMS.
    let l = lightness + 0.3963377774 * a + 0.2158037573 * b;
    let m = lightness - 0.1055613458 * a - 0.0638541728 * b;
    let s = lightness - 0.0894841775 * a - 1.2914855480 * b;

    // Cube to linear LMS.
    let l = l * l * l;
    let m = m * m * m;
    let s = s * s * s;

    // Linear LMS to linear sRGB.
    let red = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
    let green = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
    let blue = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

    (
        linear_to_srgb(red),
        linear_to_srgb(green),
        linear_to_srgb(blue),
    )
}

/// Convert HSL coordinates to rounded sRGB byte values.
///
/// Saturation and lightness are fractions in `[0, 1]`; hue is in
/// degrees. Uses the standard hue-chroma-midpoint construction; a hue
/// of exactly 360 falls into the final sextant and produces the same
/// bytes as hue 0.
#[must_use]
pub fn hsl_to_srgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let mid = lightness - chroma / 2.0;

    let (r, g, b) = if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    (
        ((r + mid) * 255.0).round(),
        ((g + mid) * 255.0).round(),
        ((b + mid) * 255.0).round(),
    )
}

/// Convert an sRGB sample to HSL coordinates.
///
/// Returns hue in degrees and saturation/lightness as fractions in
/// `[0, 1]`. Achromatic samples report hue 0 and saturation 0.
#[must_use]
pub fn srgb_to_hsl(sample: &ColorSample) -> (f64, f64, f64) {
    let r = sample.red / 255.0;
    let g = sample.green / 255.0;
    let b = sample.blue / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = f64::midpoint(max, min);

    let delta = max - min;
    if delta.abs() < f64::EPSILON {
        return (0.0, 0.0, lightness);
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

    let hue = if (max - r).abs() < f64::EPSILON {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (hue * 60.0, saturation, lightness)
}
