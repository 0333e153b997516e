//! Geohash encoding and decoding
//!
//! A geohash identifies a rectangular cell of the earth's surface by
//! interleaving the bits of its fixed-point latitude and longitude along a
//! Morton (Z-order) curve. It comes in two flavors:
//!
//! - As an integer of up to 64 bits, where each extra bit halves the cell
//!   along one axis, alternating between longitude and latitude.
//! - As a base-32 string, where each character encodes 5 of those bits.
//!
//! Longer hashes describe smaller cells, and every prefix of a hash describes
//! a cell that contains the cell of the full hash.
//!
//! String geohashes of up to 12 characters are computed through a 64-bit
//! integer. Longer ones, up to 20 characters, go through a slower bisection
//! algorithm instead (see the `_high_precision` functions).
//!
//! Out-of-range precisions are clamped to the supported range rather than
//! rejected. Coordinates are not checked either: latitudes outside of
//! [-90, 90] and longitudes outside of [-180, 180] produce meaningless hashes.

pub mod base32;
pub mod bisect;
pub mod bits;
mod error;
pub mod morton;
pub mod range;

pub use crate::{
    base32::ALPHABET,
    bisect::Bounds,
    error::{Error, Result},
};

use crate::{
    base32::{BITS_PER_CHAR, CHARS_PER_INT},
    range::{LAT_MAX, LNG_MAX},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Integer type suitable for counting number of bits
///
/// Although 32-bit is very much overkill for this purpose, I am using this type
/// for interface compatibility with standard Rust integer methods.
///
pub type NumBits = u32;

/// Integer form of a geohash
pub type HashInt = u64;

/// Fixed-point representation of a latitude or longitude
pub type AxisIdx = u32;

/// Fixed-point [ latitude, longitude ] pair
pub type AxisPair = [AxisIdx; 2];

/// Smallest character precision of a string geohash
pub const PRECISION_MIN: usize = 1;

/// Largest character precision of the integer-backed string codec
pub const PRECISION_MAX: usize = CHARS_PER_INT;

/// Largest character precision of the bisection-based string codec
pub const PRECISION_HIGH: usize = 20;

/// Smallest bit precision of an integer geohash
pub const BITS_MIN: NumBits = 1;

/// Largest bit precision of an integer geohash
pub const BITS_MAX: NumBits = bits::num_bits::<HashInt>();

/// A point on the earth's surface, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lng)
    }
}

/// Geohash of a coordinate at the maximal precision of 12 characters
pub fn encode(lat: f64, lng: f64) -> String {
    encode_chars(lat, lng, PRECISION_MAX)
}

/// Geohash of a coordinate with `precision` characters
///
/// `precision` is clamped to [`PRECISION_MIN`, `PRECISION_MAX`].
///
pub fn encode_with_precision(lat: f64, lng: f64, precision: usize) -> String {
    let precision = clamp(precision, PRECISION_MIN, PRECISION_MAX);
    encode_chars(lat, lng, precision)
}

/// Geohash of a coordinate with up to 20 characters of precision
///
/// `precision` is clamped to [`PRECISION_MIN`, `PRECISION_HIGH`]. This uses a
/// slower algorithm than `encode_with_precision()`, but yields the same
/// geohash for precisions that both functions support.
///
pub fn encode_high_precision(lat: f64, lng: f64, precision: usize) -> String {
    let precision = clamp(precision, PRECISION_MIN, PRECISION_HIGH);
    bisect::encode(Coordinate { lat, lng }, precision)
}

/// Integer geohash of a coordinate at the maximal precision of 64 bits
pub fn encode_int(lat: f64, lng: f64) -> HashInt {
    encode_bits(lat, lng, BITS_MAX)
}

/// Integer geohash of a coordinate with `bits` bits of precision
///
/// `bits` is clamped to [`BITS_MIN`, `BITS_MAX`]. The result is
/// right-justified: only its `bits` low-order bits may be set. Use a multiple
/// of 5 if the hash is meant to be converted to a string with `int_to_text()`.
///
pub fn encode_int_with_precision(lat: f64, lng: f64, bits: NumBits) -> HashInt {
    let bits = clamp(bits, BITS_MIN, BITS_MAX);
    encode_bits(lat, lng, bits)
}

/// Convert an integer geohash into a string geohash of `precision` characters
///
/// This assumes that `hash` was computed with `5 * precision` bits of
/// precision, which is not checked: other hashes produce a valid-looking but
/// meaningless string. A full 64-bit hash should be shifted right by 4 bits to
/// get its 12-character counterpart. `precision` is clamped to
/// [`PRECISION_MIN`, `PRECISION_MAX`].
///
pub fn int_to_text(hash: HashInt, precision: usize) -> String {
    let precision = clamp(precision, PRECISION_MIN, PRECISION_MAX);
    base32::encode_u64(hash, precision)
}

/// Convert a string geohash into a right-justified integer geohash
///
/// The result has `5 * hash.len()` bits of precision. Only the first 12
/// characters are considered, as longer hashes do not fit in a `HashInt`.
///
pub fn text_to_int(hash: &str) -> Result<HashInt> {
    base32::decode_str(truncate(hash, PRECISION_MAX))
}

/// Coordinate of a string geohash, using at most its first 12 characters
///
/// The result is the south-west corner of the geohash's cell, which lies
/// within one cell size of the coordinate that was originally encoded.
///
pub fn decode(hash: &str) -> Result<Coordinate> {
    let hash = truncate(hash, PRECISION_MAX);
    let code = base32::decode_str(hash)?;
    let bits = hash.len() as NumBits * BITS_PER_CHAR;
    Ok(decode_bits(code, bits))
}

/// Coordinate of a string geohash, using at most its first 20 characters
///
/// The result is the center of the geohash's cell. This uses a slower
/// algorithm than `decode()`, which supports longer geohashes.
///
pub fn decode_high_precision(hash: &str) -> Result<Coordinate> {
    decode_bounds(hash).map(|bounds| bounds.center())
}

/// Cell of a string geohash, using at most its first 20 characters
pub fn decode_bounds(hash: &str) -> Result<Bounds> {
    bisect::decode_bounds(truncate(hash, PRECISION_HIGH))
}

/// Coordinate of a 64-bit integer geohash
pub fn decode_int(hash: HashInt) -> Coordinate {
    decode_bits(hash, BITS_MAX)
}

/// Coordinate of a right-justified integer geohash with `bits` bits of precision
///
/// `bits` is clamped to [`BITS_MIN`, `BITS_MAX`]. As with `decode()`, the
/// result is the south-west corner of the geohash's cell.
///
pub fn decode_int_with_precision(hash: HashInt, bits: NumBits) -> Coordinate {
    let bits = clamp(bits, BITS_MIN, BITS_MAX);
    decode_bits(hash, bits)
}

// Integer-backed string encoding, `chars` must not exceed `PRECISION_MAX`
fn encode_chars(lat: f64, lng: f64, chars: usize) -> String {
    let hash = encode_bits(lat, lng, chars as NumBits * BITS_PER_CHAR);
    base32::encode_u64(hash, chars)
}

// Integer encoding, `bits` must be in [BITS_MIN, BITS_MAX]
fn encode_bits(lat: f64, lng: f64, bits: NumBits) -> HashInt {
    let hash = morton::encode_2d(
        range::normalize(lat, LAT_MAX),
        range::normalize(lng, LNG_MAX),
    );
    hash >> (BITS_MAX - bits)
}

// Integer decoding, a zero-bit hash decodes to the south-west domain corner
fn decode_bits(hash: HashInt, bits: NumBits) -> Coordinate {
    let [lat, lng] = morton::decode_2d(bits::left_justify(hash, bits));
    Coordinate {
        lat: range::denormalize(lat, LAT_MAX),
        lng: range::denormalize(lng, LNG_MAX),
    }
}

/// Clamp a requested precision to the supported range
fn clamp<T: Ord + Copy + core::fmt::Debug>(requested: T, min: T, max: T) -> T {
    let clamped = requested.clamp(min, max);
    if clamped != requested {
        trace!(?requested, ?clamped, "clamping out-of-range precision");
    }
    clamped
}

/// Keep at most the first `max` characters of a geohash
fn truncate(hash: &str, max: usize) -> &str {
    match hash.char_indices().nth(max) {
        Some((end, _)) => {
            trace!(len = hash.chars().count(), max, "truncating geohash");
            &hash[..end]
        }
        None => hash,
    }
}
