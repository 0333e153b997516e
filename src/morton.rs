//! The Morton (Z-order) curve behind geohash integers

use crate::{bits, AxisIdx, AxisPair, HashInt, NumBits};

/// Shift strides and masks of the bit-spreading steps, in spreading order
///
/// Each mask alternates `stride` one bits with `stride` zero bits, which is
/// what `bits::striped_mask(stride)` generates. The values are spelled out
/// because they are part of the geohash interchange format.
///
const SPREAD_STEPS: [(NumBits, HashInt); 5] = [
    (16, 0x0000FFFF0000FFFF),
    (8, 0x00FF00FF00FF00FF),
    (4, 0x0F0F0F0F0F0F0F0F),
    (2, 0x3333333333333333),
    (1, 0x5555555555555555),
];

/// Mask selecting the low-order half of a `HashInt`, i.e. one axis
const AXIS_MASK: HashInt = bits::low_order_mask(bits::num_bits::<AxisIdx>());

/// Spread the bits of an axis index into the even bits of a `HashInt`
///
/// Given an axis index with bits [ a1 a2 ... a32 ], this produces the bit
/// pattern [ 0 a1 0 a2 ... 0 a32 ].
///
#[inline]
const fn spread(axis: AxisIdx) -> HashInt {
    let mut x = axis as HashInt;
    let mut step = 0;
    while step < SPREAD_STEPS.len() {
        // Move the upper half of every group of 2*stride bits up by stride,
        // then clear the copies that were left behind:
        // Step 0: [ 0...0 a1...a16 0...0 a17...a32 ]
        // Step 1: [ 0...0 a1...a8 0...0 a9...a16 ... 0...0 a25...a32 ]
        let (stride, mask) = SPREAD_STEPS[step];
        x = (x | (x << stride)) & mask;
        step += 1;
    }
    x
}

/// Inverse of `spread()`, ignoring whatever is stored in the odd bits
#[inline]
const fn compact(code: HashInt) -> AxisIdx {
    // Zero out the junk in the odd bits:
    // [ XX a1 XX a2 ... XX a32 ] -> [ 0 a1 0 a2 ... 0 a32 ]
    let mut x = code & SPREAD_STEPS[SPREAD_STEPS.len() - 1].1;

    // Then group bits in pairs, groups of 4, and so on, running the spreading
    // steps backwards. After shifting by `stride`, the surviving groups are
    // 2*stride bits wide, which is the mask of the previous spreading step.
    let mut step = SPREAD_STEPS.len();
    while step > 0 {
        step -= 1;
        let stride = SPREAD_STEPS[step].0;
        let mask = if step > 0 {
            SPREAD_STEPS[step - 1].1
        } else {
            AXIS_MASK
        };
        x = (x | (x >> stride)) & mask;
    }
    x as AxisIdx
}

/// Interleave a normalized latitude and longitude into a 64-bit geohash
///
/// Latitude bits [ y1 y2 ... y32 ] and longitude bits [ x1 x2 ... x32 ] are
/// combined into the Morton code [ x1 y1 x2 y2 ... x32 y32 ]. Longitude thus
/// comes first when reading the hash from the most significant bit, and
/// latitude owns the even bit positions 0, 2, 4, ...
///
#[inline]
pub const fn encode_2d(lat: AxisIdx, lng: AxisIdx) -> HashInt {
    spread(lat) | (spread(lng) << 1)
}

/// Split a 64-bit geohash back into its normalized [ latitude, longitude ]
#[inline]
pub const fn decode_2d(code: HashInt) -> AxisPair {
    [compact(code), compact(code >> 1)]
}
