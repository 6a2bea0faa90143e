//! Color parsing errors

use thiserror::Error;

/// Errors produced while parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Nothing left after stripping `#` and whitespace
    #[error("hex color is empty")]
    Empty,

    /// Fewer than six hex digits
    #[error("hex color {hex:?} has {len} digits, expected 6")]
    TooShort { hex: String, len: usize },

    /// A character in the first six positions is not a hex digit
    #[error("invalid hex digit {digit:?} in color {hex:?}")]
    InvalidDigit { hex: String, digit: char },
}
