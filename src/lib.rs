//! `polystep` - Google polyline codec with an incremental decoder
//!
//! A compact printable-ASCII encoding for sequences of (latitude,
//! longitude) pairs, compatible with [Google's polyline algorithm].
//! Coordinates are quantized to 5 decimal digits (~1.1 m at the
//! equator), delta-chained, and packed into offset-63 base-32 digits,
//! giving roughly 5-6 bytes per point for typical GPS tracks.
//!
//! [Google's polyline algorithm]: https://developers.google.com/maps/documentation/utilities/polylinealgorithm
//!
//! # Features
//! - **Incremental decoding**: [`StepDecoder`] consumes one byte at a
//!   time and never needs the whole input in memory
//! - **Bounded encoding**: [`encode_line`] truncates at a caller-set
//!   output length, appending whole points only
//! - **No surprises on bad input**: malformed polylines decode short,
//!   never panic; [`decode_line_checked`] reports them instead
//!
//! # Lossy vs Lossless
//!
//! The codec is **lossless on the 1e-5 grid**: coordinates that are
//! exact multiples of 1e-5 degrees come back on exactly the same grid
//! cell. Anything finer is rounded, and because each point is encoded
//! as the rounded delta from its predecessor, rounding error can drift
//! by up to 0.5e-5 per point across a long line. Bit-exact f64
//! equality additionally requires the decoder's delta sums to be
//! exactly representable, which holds for the short fixtures in the
//! tests but not for arbitrary grid-aligned input.
//!
//! # Example
//! ```
//! use polystep::{decode_line, encode_line, Point};
//!
//! let track = [
//!     Point::new(38.5, -120.2),
//!     Point::new(40.7, -120.95),
//!     Point::new(43.252, -126.453),
//! ];
//!
//! let mut coords = String::new();
//! let encoded = encode_line(&track, &mut coords, 64);
//! assert_eq!(encoded, track.len());
//! assert_eq!(coords, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//!
//! let decoded = decode_line(&coords, 16);
//! assert_eq!(decoded, track);
//! ```
//!
//! # Wire Format
//!
//! Each axis value becomes 1-6 digits:
//!
//! | Step | Operation |
//! |------|-----------|
//! | 1 | Scale by 1e5, round half away from zero, to i32 |
//! | 2 | Shift left by one bit |
//! | 3 | If the value was negative, invert all bits (one's complement) |
//! | 4 | Split into 5-bit chunks, least significant first |
//! | 5 | OR 0x20 into every chunk except the last |
//! | 6 | Add 63 to each chunk; emit as ASCII |
//!
//! Note step 3 is one's complement, not the usual two's-complement
//! zig-zag; the difference is observable at the bit level and this
//! crate reproduces the original scheme exactly.
//!
//! A point is its latitude digits immediately followed by its
//! longitude digits; a line is its points concatenated with no
//! separator. The first point is a delta from `(0, 0)`, every later
//! point a delta from its predecessor. All digits land in `?`..`~`
//! (bytes 63-126), so a polyline is always printable ASCII.
//!
//! # Supported Ranges
//! - Coordinates: any finite f64; values within ±180° always fit the
//!   per-point digit budget
//! - Precision: fixed at 5 decimal digits
//! - Line length: bounded only by the caller's output budget

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod constants;
mod decoder;
mod encoder;
mod error;
mod point;


// Re-export public API
pub use decoder::{decode_line, decode_line_checked, Step, StepDecoder};
pub use encoder::{encode_line, encode_point, PointCode};
pub use error::DecodeError;
pub use point::Point;
