//! Geohash flavor of base-32 text encoding
//!
//! Each character carries 5 bits of the hash, most significant character
//! first. The alphabet is made of the digits and the lowercase letters
//! without "a", "i", "l" and "o".

use crate::{bits, Error, HashInt, NumBits, Result};
use tracing::debug;

/// Symbols of the geohash alphabet, indexed by their 5-bit value
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of hash bits encoded by one character
pub const BITS_PER_CHAR: NumBits = 5;

/// Number of characters that a `HashInt` can fully back
///
/// 12 characters use 60 bits; the 4 remaining high-order bits of the integer
/// cannot be expressed in text and are ignored.
///
pub const CHARS_PER_INT: usize = (bits::num_bits::<HashInt>() / BITS_PER_CHAR) as usize;

/// Mask selecting the low-order character of a `HashInt`
const CHAR_MASK: HashInt = bits::low_order_mask(BITS_PER_CHAR);

/// Marker for bytes of `DECODE_TABLE` that are not in the alphabet
const INVALID: u8 = u8::MAX;

/// Reverse lookup table from ASCII byte to 5-bit value
static DECODE_TABLE: [u8; 128] = decode_table();

const fn decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut value = 0;
    while value < ALPHABET.len() {
        table[ALPHABET[value] as usize] = value as u8;
        value += 1;
    }
    table
}

/// 5-bit value of a geohash character, if it belongs to the alphabet
#[inline]
pub fn char_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Like `char_value()`, but reports the character's position on failure
pub(crate) fn parse_char(c: char, position: usize) -> Result<u8> {
    char_value(c).ok_or_else(|| {
        debug!(character = ?c, position, "invalid geohash character");
        Error::InvalidCharacter {
            character: c,
            position,
        }
    })
}

/// Write down the low-order `chars` characters of a `HashInt`
///
/// The integer is read 5 bits at a time from its low-order end, so a code
/// that was produced at `5 * chars` bits of precision maps to exactly the
/// `chars`-character geohash of the same cell. Codes with fewer meaningful
/// bits come out left-padded with zeros.
///
pub fn encode_u64(mut code: HashInt, chars: usize) -> String {
    debug_assert!(chars <= CHARS_PER_INT);
    let mut buf = [0u8; CHARS_PER_INT];
    for byte in buf.iter_mut().rev() {
        *byte = ALPHABET[(code & CHAR_MASK) as usize];
        code >>= BITS_PER_CHAR;
    }
    buf[CHARS_PER_INT - chars..]
        .iter()
        .map(|&byte| char::from(byte))
        .collect()
}

/// Read a geohash string as a right-justified `HashInt`
///
/// Inputs longer than `CHARS_PER_INT` characters lose their leading bits, so
/// callers are expected to truncate them first.
///
pub fn decode_str(hash: &str) -> Result<HashInt> {
    hash.chars()
        .enumerate()
        .try_fold(0, |code: HashInt, (position, c)| -> Result<HashInt> {
            let value = parse_char(c, position)?;
            Ok((code << BITS_PER_CHAR) | HashInt::from(value))
        })
}
