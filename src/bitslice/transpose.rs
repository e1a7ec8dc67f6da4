//! Row-major `u32` lanes to column-major `u64` bit-planes and back.
//!
//! Both directions swap the lane and bit-position axes of a 64×32 boolean
//! matrix; nothing is lost or reordered.

use crate::bitslice::planes::BitPlaneVector;
use crate::bitslice::{check_lane_count, check_supplied};
use crate::error::Result;
use crate::{LANES, PLANES};

/// Pivots the first `count` values into bit-planes.
///
/// Bit `i` of plane `n` is bit `n` of `values[i]`. Lanes `count..64` stay zero
/// so the carry chain never sees stale bits.
///
/// # Errors
///
/// Fails when `count` exceeds [`LANES`](crate::LANES) or `values.len()`.
pub fn transpose_in(values: &[u32], count: usize) -> Result<BitPlaneVector> {
    check_lane_count(count)?;
    check_supplied(values, count)?;

    Ok(pivot_in(&values[..count]))
}

/// Pivots a chunk of at most [`LANES`] values; lanes past the chunk stay zero.
pub(crate) fn pivot_in(chunk: &[u32]) -> BitPlaneVector {
    debug_assert!(chunk.len() <= LANES);

    let mut vector = BitPlaneVector::zeroed();
    let planes = vector.planes_mut();

    for (lane, &value) in chunk.iter().enumerate() {
        let mut bits = value;
        for plane in planes.iter_mut() {
            *plane |= ((bits & 1) as u64) << lane;
            bits >>= 1;
        }
    }

    vector
}

/// Pivots bit-planes back into `count` row-major values.
///
/// # Errors
///
/// Fails when `count` exceeds [`LANES`](crate::LANES).
pub fn transpose_out(planes: &BitPlaneVector, count: usize) -> Result<Vec<u32>> {
    check_lane_count(count)?;

    Ok(pivot_out(planes, count))
}

/// Reads back the first `lanes` lanes; `lanes` is at most [`LANES`].
pub(crate) fn pivot_out(planes: &BitPlaneVector, lanes: usize) -> Vec<u32> {
    debug_assert!(lanes <= LANES);

    let planes = planes.planes();
    (0..lanes)
        .map(|lane| {
            // most significant plane first
            (0..PLANES).rev().fold(0u32, |value, n| {
                value | ((((planes[n] >> lane) & 1) as u32) << n)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_in_single_lane() {
        let v = transpose_in(&[0b1011], 1).unwrap();
        assert_eq!(v.plane(0), Some(1));
        assert_eq!(v.plane(1), Some(1));
        assert_eq!(v.plane(2), Some(0));
        assert_eq!(v.plane(3), Some(1));
        assert!(v.planes()[4..].iter().all(|&p| p == 0));
    }

    #[test]
    fn test_transpose_in_high_lane() {
        let mut values = vec![0u32; LANES];
        values[63] = 1 << 31;
        let v = transpose_in(&values, LANES).unwrap();
        assert_eq!(v.plane(31), Some(1 << 63));
        assert_eq!(v.occupied_lanes(), 1 << 63);
    }

    #[test]
    fn test_transpose_in_zero_count() {
        let v = transpose_in(&[u32::MAX, 7], 0).unwrap();
        assert_eq!(v, BitPlaneVector::zeroed());
    }

    #[test]
    fn test_transpose_out_zero_count() {
        let v = BitPlaneVector::from_planes([u64::MAX; PLANES]);
        assert!(transpose_out(&v, 0).unwrap().is_empty());
    }

    #[test]
    fn test_transpose_out_rejects_wide_count() {
        assert!(transpose_out(&BitPlaneVector::zeroed(), LANES + 1).is_err());
    }

    #[test]
    fn test_round_trip_partial_batch() {
        let values = [0, 1, 0xDEAD_BEEF, u32::MAX, 0x8000_0000];
        let v = transpose_in(&values, values.len()).unwrap();
        assert_eq!(transpose_out(&v, values.len()).unwrap(), values);
    }

    #[test]
    fn test_chunk_pivots_match_checked_transposes() {
        let values: Vec<u32> = (0..LANES as u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();

        for len in 0..=LANES {
            let chunk = &values[..len];
            let planes = pivot_in(chunk);

            assert_eq!(planes, transpose_in(chunk, len).unwrap(), "len {len}");
            assert_eq!(pivot_out(&planes, len), chunk, "len {len}");
        }
    }
}
