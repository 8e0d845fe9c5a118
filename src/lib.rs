//! # recolor
//!
//! Rewrite CSS color literals into a single target notation.
//!
//! This library scans free-form text (typically CSS source) for color
//! literals in four notations (hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`
//! and `oklch()`), converts each one into the configured target
//! notation, and reassembles the text with all non-color content
//! unchanged.
//!
//! ## Quick Start
//!
//! ```
//! use recolor::prelude::*;
//!
//! let config = ConversionConfig::new(OutputFormat::Rgb, true);
//! let css = ".card { color: #6750a4; }";
//! assert_eq!(
//!     convert_text(css, &config),
//!     ".card { color: rgb(103, 80, 164); }"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Tokenizer**: a pure, deterministic scanner yielding ordered,
//!   non-overlapping color-literal matches
//! - **ColorSample**: the common `(red, green, blue, alpha?)`
//!   intermediate every notation parses into
//! - **Pipeline**: parse → convert → format per token, with malformed
//!   tokens passed through unchanged (fail-safe, not fail-fast)

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod convert;
pub mod format;
pub mod pipeline;
pub mod tokenizer;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{ColorNotation, ColorParseError, ColorSample};
    pub use crate::convert::{Oklab, Oklch};
    pub use crate::pipeline::{ConversionConfig, FormatParseError, OutputFormat, convert_text};
    pub use crate::tokenizer::{ColorToken, tokens};
}

// Re-export key types at crate root
pub use color::{ColorNotation, ColorParseError, ColorSample};
pub use pipeline::{ConversionConfig, OutputFormat, convert_text};
pub use tokenizer::{ColorToken, tokens};
