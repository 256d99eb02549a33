//! Error types for strict polyline decoding.

use std::fmt;

/// Error returned by [`decode_line_checked`](crate::decode_line_checked)
///
/// The lenient APIs ([`decode_line`](crate::decode_line) and
/// [`StepDecoder::step`](crate::StepDecoder::step)) never produce
/// errors; they report progress through counts and step results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte outside the polyline digit alphabet (`?`..`~`)
    InvalidByte { byte: u8, offset: usize },
    /// Input ended in the middle of a point
    TruncatedInput,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidByte { byte, offset } => {
                write!(f, "byte 0x{byte:02X} at offset {offset} is not a polyline digit")
            }
            Self::TruncatedInput => write!(f, "input ended in the middle of a point"),
        }
    }
}

impl std::error::Error for DecodeError {}
