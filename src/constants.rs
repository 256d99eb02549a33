//! Internal constants for the polyline wire format.

/// Fixed-point scale: coordinates are stored as `round(value * 1e5)`.
pub(crate) const PRECISION: f64 = 100_000.0;

/// Bits per output digit.
pub(crate) const CHUNK_SIZE: u32 = 5;

/// Added to every digit to land in printable ASCII (`?`..`~`).
pub(crate) const ASCII_OFFSET: i32 = 63;

/// Low five bits of a digit: the payload.
pub(crate) const MASK_5_BIT: i32 = 0x1F;

/// Bit 5 of a digit: "more digits follow for this axis".
pub(crate) const CONTINUATION_BIT: i32 = 0x20;

/// Lowest byte value a valid digit can take (`?`).
pub(crate) const MIN_DIGIT: u8 = ASCII_OFFSET as u8;

/// Highest byte value a valid digit can take (`~`).
pub(crate) const MAX_DIGIT: u8 = (ASCII_OFFSET + MASK_5_BIT + CONTINUATION_BIT) as u8;

/// Hard cap on the encoded length of one point (both axes).
///
/// A 32-bit zig-zagged value needs at most 7 digits, but coordinates
/// within ±180° never exceed 6 per axis. Exceeding this bound is
/// reported as a zero-length encoding, never as a truncated one.
pub(crate) const POINT_MAX_LEN: usize = 12;
