//! The conversion pipeline: scan, parse, convert, format, substitute.
//!
//! [`convert_text`] is a pure text-to-text function. Per token the
//! policy is fail-safe, not fail-fast: a token that superficially
//! scans but fails its notation parse is substituted back unchanged,
//! and a failure on one token never aborts processing of the rest of
//! the document. No error ever escapes the call boundary.
//!
//! # Examples
//!
//! ```
//! use recolor::pipeline::{ConversionConfig, OutputFormat, convert_text};
//!
//! let config = ConversionConfig::new(OutputFormat::Oklch, true);
//! assert_eq!(
//!     convert_text("rgb(103, 80, 164)", &config),
//!     "oklch(49.55% 0.1305 293.71)"
//! );
//! ```

use log::{debug, trace};
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::{LazyLock, Mutex};

use crate::color::ColorNotation;
use crate::format;
use crate::tokenizer::tokens;

/// The closed set of target notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `oklch(L% C h)`
    Oklch,
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl OutputFormat {
    /// Get the name of this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Oklch => "oklch",
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

/// Error type for parsing an [`OutputFormat`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatParseError(pub String);

impl fmt::Display for FormatParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format: {}", self.0)
    }
}

impl std::error::Error for FormatParseError {}

impl FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oklch" => Ok(Self::Oklch),
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

/// Immutable per-call configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionConfig {
    /// The notation every recognized token is rewritten into.
    pub output_format: OutputFormat,
    /// When true, wrap output in function syntax (`rgb(...)`, `#...`);
    /// when false, emit bare space-separated component lists as used
    /// inside CSS custom-property shorthand contexts.
    pub css_function_syntax: bool,
}

impl ConversionConfig {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(output_format: OutputFormat, css_function_syntax: bool) -> Self {
        Self {
            output_format,
            css_function_syntax,
        }
    }
}

/// Rewrite every recognized color literal in `text` into the target
/// notation, leaving all other bytes unchanged.
///
/// Empty input returns empty output. Substitution is a single pass
/// over the original string; replacement lengths never shift the scan.
#[must_use]
pub fn convert_text(text: &str, config: &ConversionConfig) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;

    for token in tokens(text) {
        output.push_str(&text[last_end..token.start]);
        output.push_str(&convert_token(token.text, config));
        last_end = token.end;
    }
    output.push_str(&text[last_end..]);

    output
}

/// Convert a single matched token (cached).
///
/// Returns the replacement text, or the token itself when it fails its
/// notation parse.
#[must_use]
pub fn convert_token(token: &str, config: &ConversionConfig) -> String {
    static CACHE: LazyLock<Mutex<LruCache<(String, ConversionConfig), String>>> =
        LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

    let key = (token.to_string(), *config);

    if let Ok(mut cache) = CACHE.lock()
        && let Some(hit) = cache.get(&key)
    {
        trace!("cache hit for token {token:?}");
        return hit.clone();
    }

    let replacement = convert_token_uncached(token, config);

    if let Ok(mut cache) = CACHE.lock() {
        cache.put(key, replacement.clone());
    }

    replacement
}

fn convert_token_uncached(token: &str, config: &ConversionConfig) -> String {
    let normalized = token.trim().to_lowercase();

    let Some(notation) = ColorNotation::detect(&normalized) else {
        debug!("unrecognized token left unchanged: {token:?}");
        return token.to_string();
    };

    match notation.parse(&normalized) {
        Ok(sample) => {
            let sample = sample.clamp();
            match config.output_format {
                OutputFormat::Oklch => format::oklch(&sample, config.css_function_syntax),
                OutputFormat::Hex => format::hex(&sample, config.css_function_syntax),
                OutputFormat::Rgb => format::rgb(&sample, config.css_function_syntax),
                OutputFormat::Hsl => format::hsl(&sample, config.css_function_syntax),
            }
        }
        Err(err) => {
            debug!("token left unchanged: {err}");
            token.to_string()
        }
    }
}
