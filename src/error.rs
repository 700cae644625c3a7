//! Error type for the strict constructors.
//!
//! The default constructors never fail; malformed input produces a
//! deterministic but meaningless color. The `try_*` constructors and
//! `str::parse::<Color>()` validate first and report [`InvalidColorInput`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidColorInput {
    /// Hex string digit count (after stripping `#`) is not 3, 4, 6 or 8
    #[error("invalid hex color length {len} (expected 3, 4, 6 or 8 digits)")]
    HexLength { len: usize },

    /// Non-hexadecimal character in a hex string
    #[error("invalid hex digit {digit:?} at position {position}")]
    HexDigit { digit: char, position: usize },

    /// Numeric channel outside its domain
    #[error("{channel} channel {value} is outside {min}..{max}")]
    OutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite channel
    #[error("{channel} channel is not a finite number")]
    NotANumber { channel: &'static str },
}
