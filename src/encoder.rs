//! Encoder for the polyline text format.

use crate::constants::{ASCII_OFFSET, CHUNK_SIZE, CONTINUATION_BIT, MASK_5_BIT, POINT_MAX_LEN, PRECISION};
use crate::point::Point;

/// Fixed-capacity buffer holding the encoding of a single point
///
/// Both axes of one point fit in at most [`PointCode::CAPACITY`] bytes
/// for any coordinate within ±180°. An empty code after
/// [`encode_point`] means the defensive length bound was exceeded and
/// the point could not be encoded.
#[derive(Debug, Clone, Copy)]
pub struct PointCode {
    buf: [u8; POINT_MAX_LEN],
    len: u8,
}

impl PointCode {
    /// Maximum number of digits one encoded point can occupy.
    pub const CAPACITY: usize = POINT_MAX_LEN;

    #[inline]
    const fn empty() -> Self {
        Self { buf: [0; POINT_MAX_LEN], len: 0 }
    }

    /// Append one digit, failing when the point budget is spent
    #[inline]
    fn push(&mut self, digit: u8) -> bool {
        let len = self.len as usize;
        if len == POINT_MAX_LEN {
            return false;
        }
        self.buf[len] = digit;
        self.len += 1;
        true
    }

    /// The encoded digits as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// The encoded digits as a string slice
    ///
    /// Always valid: the encoder only emits printable ASCII.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Digits are offset-63 ASCII, never above 0x7E.
        std::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Number of digits in this code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True when no digits were produced (encoding failure)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Encode one axis value into 1-6 polyline digits
///
/// The value is quantized to 1e-5, zig-zagged (left shift, then one's
/// complement for negatives) and split into 5-bit chunks, low chunk
/// first, each flagged with bit 5 while more non-zero bits remain.
///
/// Returns false if the shared per-point budget ran out.
fn encode_axis(value: f64, code: &mut PointCode) -> bool {
    // Saturating cast matches the bounded i32 the wire format assumes;
    // wrapping shift keeps absurd magnitudes from trapping in debug.
    let mut e = (value * PRECISION).round() as i32;
    e = e.wrapping_shl(1);
    if value < 0.0 {
        e = !e;
    }

    loop {
        let next = e >> CHUNK_SIZE;
        let has_next = next > 0;

        let mut digit = e & MASK_5_BIT;
        if has_next {
            digit |= CONTINUATION_BIT;
        }
        if !code.push((digit + ASCII_OFFSET) as u8) {
            return false;
        }

        e = next;
        if !has_next {
            return true;
        }
    }
}

/// Encode a single (delta) point
///
/// Latitude digits come first, immediately followed by longitude
/// digits. The result is empty when either axis overflowed the
/// 12-digit safety bound, which cannot happen for coordinates within
/// ±180° but is checked so corrupt input can never emit a torn point.
#[must_use]
pub fn encode_point(point: Point) -> PointCode {
    let mut code = PointCode::empty();
    if encode_axis(point.lat, &mut code) && encode_axis(point.lon, &mut code) {
        code
    } else {
        PointCode::empty()
    }
}

/// Encode a sequence of points into a bounded output string
///
/// Each point is encoded as the delta from the previous one, the first
/// relative to `(0, 0)`. `out` is cleared first, then whole points are
/// appended until appending the next one would push `out` past
/// `max_len` bytes. Points are never partially appended.
///
/// Returns the number of points actually encoded; compare against
/// `points.len()` to detect truncation. The output is always a valid
/// (possibly truncated) polyline.
pub fn encode_line(points: &[Point], out: &mut String, max_len: usize) -> usize {
    out.clear();

    let mut prev = Point::ORIGIN;
    let mut encoded = 0usize;

    for &point in points {
        let delta = Point::new(point.lat - prev.lat, point.lon - prev.lon);
        let code = encode_point(delta);

        if !code.is_empty() {
            if out.len() + code.len() > max_len {
                return encoded;
            }
            out.push_str(code.as_str());
            encoded += 1;
        }
        // The delta reference advances even past a failed point.
        prev = point;
    }

    encoded
}
