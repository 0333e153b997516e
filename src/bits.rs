//! Binary arithmetic utilities used for geohash computations

use crate::{HashInt, NumBits};

/// Count the number of bits of an integer
#[inline(always)]
pub const fn num_bits<T>() -> NumBits {
    (core::mem::size_of::<T>() * 8) as _
}

/// Generate a mask that selects a certain number of low-order bits: 0000...0011
#[inline(always)]
pub const fn low_order_mask(length: NumBits) -> HashInt {
    if length < num_bits::<HashInt>() {
        (1 << length) - 1
    } else {
        HashInt::MAX
    }
}

/// Generate a mask with an alternating "striped" bit pattern: 00110011...0011
///
/// These are the masks that the Morton interleaver applies after each of its
/// shift steps, with `stripe_length` equal to the shift stride.
///
#[inline(always)]
pub const fn striped_mask(stripe_length: NumBits) -> HashInt {
    // Generate the stripes
    let mut stripes = low_order_mask(stripe_length);
    let mut curr_length = 2 * stripe_length;
    while curr_length < num_bits::<HashInt>() {
        // Iteration 0: 00...00000000000000011
        // Iteration 1: 00...00000000000110011
        // Iteration 2: 00...00011001100110011
        stripes |= stripes << curr_length;
        curr_length *= 2;
    }
    stripes
}

/// Shift a right-justified `bits`-bit code so that its first bit becomes the
/// most significant bit of a `HashInt`
///
/// A zero-bit code carries no information and maps to zero.
///
#[inline]
pub const fn left_justify(code: HashInt, bits: NumBits) -> HashInt {
    if bits == 0 {
        0
    } else {
        code << (num_bits::<HashInt>() - bits)
    }
}
