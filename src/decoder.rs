//! Decoding for the polyline text format.
//!
//! The heart of this module is [`StepDecoder`], a state machine that
//! consumes one input byte per call and reports when a full point is
//! ready. It holds no reference to the input, so it can be driven from
//! an in-memory string, a file reader, or a network stream alike.
//! [`decode_line`] is the in-memory driving loop built on top of it.

use serde::{Deserialize, Serialize};

use crate::constants::{ASCII_OFFSET, CHUNK_SIZE, CONTINUATION_BIT, MASK_5_BIT, MAX_DIGIT, MIN_DIGIT, PRECISION};
use crate::error::DecodeError;
use crate::point::Point;

/// Where the decoder is within the digit stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum State {
    /// Fresh session; previous point not yet zeroed
    AwaitingFirstPoint,
    /// Next byte starts a new latitude digit run
    AwaitingLatDigit,
    /// Mid-latitude, accumulating digits
    DecodingLatitude,
    /// Next byte starts a new longitude digit run
    AwaitingLonDigit,
    /// Mid-longitude, accumulating digits
    DecodingLongitude,
}

/// Result of feeding one byte to [`StepDecoder::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More bytes are needed before anything completes
    Incomplete,
    /// The latitude of the current point just completed
    LatitudeReady,
    /// Both axes completed; the output point is fully decoded
    PointComplete,
}

/// Incremental polyline decoder
///
/// Decodes one byte at a time. Create (or [`start`](Self::start)) a
/// decoder per polyline, feed every byte in order to
/// [`step`](Self::step), and collect the output point whenever it
/// returns [`Step::PointComplete`].
///
/// Input that ends mid-point simply leaves the decoder incomplete; no
/// error is raised here. Callers that must detect truncation check
/// [`in_progress`](Self::in_progress) after the last byte, or use
/// [`decode_line_checked`].
///
/// The decoder is plain data and serializable, so a long-running
/// session can be suspended and resumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDecoder {
    state: State,
    /// Accumulated 5-bit chunks of the current axis
    partial: i32,
    /// Bit position the next chunk lands at
    shift: u32,
    /// Last fully decoded point; delta reference for the next one
    prev: Point,
}

impl StepDecoder {
    /// Create a decoder, ready for the first byte of a polyline
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::AwaitingFirstPoint,
            partial: 0,
            shift: 0,
            prev: Point::ORIGIN,
        }
    }

    /// Reset the state machine
    ///
    /// Must be called before reusing a decoder on a new polyline;
    /// also resets the running previous point to the origin.
    #[inline]
    pub fn start(&mut self) {
        self.state = State::AwaitingFirstPoint;
    }

    /// True while the decoder is mid-point
    ///
    /// If this is still true once the input is exhausted, the polyline
    /// was truncated: some digits of a point arrived but the point
    /// never completed.
    #[inline]
    #[must_use]
    pub fn in_progress(&self) -> bool {
        !matches!(self.state, State::AwaitingFirstPoint | State::AwaitingLatDigit)
    }

    /// Feed one input byte
    ///
    /// `point` is written axis-by-axis: its latitude is set when
    /// [`Step::LatitudeReady`] is returned and its longitude when
    /// [`Step::PointComplete`] is; only at `PointComplete` does it hold
    /// a fully decoded point.
    ///
    /// Bytes outside the polyline alphabet are not detected here; they
    /// corrupt the current axis but never panic (arithmetic wraps).
    pub fn step(&mut self, byte: u8, point: &mut Point) -> Step {
        if self.state == State::AwaitingFirstPoint {
            // Consumes no input: fall straight through to the lat digits.
            self.prev = Point::ORIGIN;
            self.state = State::AwaitingLatDigit;
        }
        match self.state {
            State::AwaitingLatDigit => {
                self.partial = 0;
                self.shift = 0;
                self.state = State::DecodingLatitude;
            }
            State::AwaitingLonDigit => {
                self.partial = 0;
                self.shift = 0;
                self.state = State::DecodingLongitude;
            }
            _ => {}
        }

        let chunk = i32::from(byte) - ASCII_OFFSET;
        self.partial |= (chunk & MASK_5_BIT).wrapping_shl(self.shift);
        self.shift = self.shift.wrapping_add(CHUNK_SIZE);

        if chunk >= CONTINUATION_BIT {
            // More digits follow for this axis.
            return Step::Incomplete;
        }

        // Final digit of the axis: undo the zig-zag and rescale.
        let mut value = self.partial;
        if value & 1 != 0 {
            value = !value;
        }
        value >>= 1;
        let delta = f64::from(value) / PRECISION;

        match self.state {
            State::DecodingLatitude => {
                point.lat = self.prev.lat + delta;
                self.state = State::AwaitingLonDigit;
                Step::LatitudeReady
            }
            State::DecodingLongitude => {
                point.lon = self.prev.lon + delta;
                self.state = State::AwaitingLatDigit;
                self.prev = *point;
                Step::PointComplete
            }
            // Unreachable: the entry match above always lands in a
            // Decoding* state before digits are consumed.
            _ => Step::Incomplete,
        }
    }
}

impl Default for StepDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a polyline into at most `max_points` points
///
/// Feeds `coords` byte-by-byte into a fresh [`StepDecoder`], stopping
/// when the input is exhausted or `max_points` points have been
/// collected. No byte beyond the prefix that produced the returned
/// points is examined.
///
/// A result of exactly `max_points` points is ambiguous: the input may
/// have held exactly that many points, or decoding may have stopped
/// early with input remaining. Callers that need to tell these apart
/// should pass a cap above the largest expected line, or use
/// [`decode_line_checked`].
///
/// Trailing digits that never complete a point are silently dropped,
/// as is any malformed tail.
#[must_use]
pub fn decode_line(coords: &str, max_points: usize) -> Vec<Point> {
    let mut decoder = StepDecoder::new();
    decoder.start();

    let mut points = Vec::new();
    let mut current = Point::ORIGIN;

    for &byte in coords.as_bytes() {
        if points.len() >= max_points {
            break;
        }
        if decoder.step(byte, &mut current) == Step::PointComplete {
            points.push(current);
        }
    }

    points
}

/// Decode a polyline, rejecting malformed input
///
/// Unlike [`decode_line`] this has no point cap and surfaces the two
/// ways a polyline can be broken: a byte outside the digit alphabet
/// (`?`..`~`) and input that ends in the middle of a point.
///
/// # Errors
/// [`DecodeError::InvalidByte`] on the first out-of-alphabet byte,
/// [`DecodeError::TruncatedInput`] when the input ends mid-point.
pub fn decode_line_checked(coords: &str) -> Result<Vec<Point>, DecodeError> {
    let mut decoder = StepDecoder::new();
    decoder.start();

    let mut points = Vec::new();
    let mut current = Point::ORIGIN;

    for (offset, &byte) in coords.as_bytes().iter().enumerate() {
        if !(MIN_DIGIT..=MAX_DIGIT).contains(&byte) {
            return Err(DecodeError::InvalidByte { byte, offset });
        }
        if decoder.step(byte, &mut current) == Step::PointComplete {
            points.push(current);
        }
    }

    if decoder.in_progress() {
        return Err(DecodeError::TruncatedInput);
    }

    Ok(points)
}
