//! Fixed-point mapping between a bounded coordinate axis and an `AxisIdx`

use crate::AxisIdx;

/// Half-width of the latitude domain [-90, 90]
pub const LAT_MAX: f64 = 90.0;

/// Half-width of the longitude domain [-180, 180]
pub const LNG_MAX: f64 = 180.0;

/// Number of distinct `AxisIdx` values, i.e. 2^32
const AXIS_SCALE: f64 = (AxisIdx::MAX as f64) + 1.0;

/// Map `x` from [-bound, bound] onto the full `AxisIdx` range
///
/// Values outside of the domain are not rejected. They saturate to the nearest
/// end of the `AxisIdx` range, and NaN maps to zero. The upper domain edge
/// itself saturates to `AxisIdx::MAX`, so it belongs to the topmost cell.
///
/// The result is the index of the cell whose lower edge is the largest one
/// not above `x`, exactly as successive bisection would find it.
///
#[inline]
pub fn normalize(x: f64, bound: f64) -> AxisIdx {
    // The floating-point estimate rounds twice and can land one cell off for
    // points right next to a cell edge. Edges are dyadic fractions of the
    // domain with at most 37 significant bits, so `denormalize()` computes
    // them exactly and can be used to correct the estimate.
    let mut idx = (AXIS_SCALE * (x + bound) / (bound * 2.0)).floor() as AxisIdx;
    while idx > 0 && x < denormalize(idx, bound) {
        idx -= 1;
    }
    while idx < AxisIdx::MAX && x >= denormalize(idx + 1, bound) {
        idx += 1;
    }
    idx
}

/// Map an `AxisIdx` back to [-bound, bound]
///
/// This is lossy: the result is the lower edge of the cell that `normalize()`
/// would send to `idx`, not the value that was originally normalized.
///
#[inline]
pub fn denormalize(idx: AxisIdx, bound: f64) -> f64 {
    let p = idx as f64 / AXIS_SCALE;
    2.0 * bound * p - bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn normalize() {
        assert_eq!(super::normalize(-LAT_MAX, LAT_MAX), 0);
        assert_eq!(super::normalize(0.0, LAT_MAX), 1 << 31);
        assert_eq!(super::normalize(LAT_MAX, LAT_MAX), AxisIdx::MAX);
        assert_eq!(super::normalize(-LNG_MAX, LNG_MAX), 0);
        assert_eq!(super::normalize(90.0, LNG_MAX), 3 << 30);
        assert_eq!(super::normalize(38.05339909138269, LAT_MAX), 0xb61ed1dd);
        assert_eq!(super::normalize(-84.70121386485815, LNG_MAX), 0x43c49d54);
    }

    #[test]
    fn normalize_out_of_domain() {
        assert_eq!(super::normalize(-91.0, LAT_MAX), 0);
        assert_eq!(super::normalize(1000.0, LAT_MAX), AxisIdx::MAX);
        assert_eq!(super::normalize(f64::NAN, LNG_MAX), 0);
    }

    #[test]
    fn normalize_next_to_cell_edge() {
        assert_eq!(super::normalize(-1e-20, LAT_MAX), (1 << 31) - 1);
        assert_eq!(super::normalize(-1e-300, LNG_MAX), (1 << 31) - 1);
        assert_eq!(super::normalize(1e-300, LNG_MAX), 1 << 31);
        let below_edge = 90.0 - f64::EPSILON * 64.0;
        assert!(below_edge < 90.0);
        assert_eq!(super::normalize(below_edge, LNG_MAX), (3 << 30) - 1);
    }

    #[test]
    fn denormalize() {
        assert_eq!(super::denormalize(0, LAT_MAX), -LAT_MAX);
        assert_eq!(super::denormalize(1 << 31, LAT_MAX), 0.0);
        assert_eq!(super::denormalize(3 << 30, LNG_MAX), 90.0);
    }

    quickcheck! {
        fn denormalize_inverts_normalize(idx: AxisIdx) -> bool {
            super::normalize(super::denormalize(idx, LNG_MAX), LNG_MAX) == idx
        }

        fn denormalize_is_lower_cell_edge(idx: AxisIdx) -> bool {
            let lower = super::denormalize(idx, LAT_MAX);
            let cell = 2.0 * LAT_MAX / AXIS_SCALE;
            (super::denormalize(idx.saturating_add(1), LAT_MAX) - lower) <= cell
                && lower >= -LAT_MAX
        }

        fn normalize_finds_enclosing_cell(lat: f64) -> bool {
            let lat = if lat.is_finite() { lat % LAT_MAX } else { 0.0 };
            let idx = super::normalize(lat, LAT_MAX);
            super::denormalize(idx, LAT_MAX) <= lat
                && (idx == AxisIdx::MAX || lat < super::denormalize(idx + 1, LAT_MAX))
        }
    }
}
