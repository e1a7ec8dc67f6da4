use crate::bitslice::planes::BitPlaneVector;

/// Adds one to every lane of `planes` at once.
///
/// The carry register starts as all ones, so plane 0 flips in every lane;
/// each later plane flips where the carry is still set. The carry out of the
/// last plane is dropped, wrapping each lane at 2^32.
#[inline(always)]
pub fn increment_parallel(mut planes: BitPlaneVector) -> BitPlaneVector {
    planes.increment_in_place();
    planes
}

impl BitPlaneVector {
    /// In-place form of [`increment_parallel`].
    #[inline(always)]
    pub fn increment_in_place(&mut self) {
        let mut carry = u64::MAX;

        // least significant plane first
        for plane in self.planes_mut().iter_mut() {
            let bits = *plane;
            *plane = bits ^ carry;
            carry &= bits;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PLANES;

    #[test]
    fn test_increment_zero_planes() {
        let out = increment_parallel(BitPlaneVector::zeroed());
        let mut expected = [0u64; PLANES];
        expected[0] = u64::MAX;
        assert_eq!(out.into_planes(), expected);
    }

    #[test]
    fn test_increment_all_ones_wraps() {
        let out = increment_parallel(BitPlaneVector::from_planes([u64::MAX; PLANES]));
        assert_eq!(out, BitPlaneVector::zeroed());
    }

    #[test]
    fn test_increment_carries_only_in_set_lanes() {
        // lane 0 holds 1, lane 1 holds 0
        let mut planes = [0u64; PLANES];
        planes[0] = 0b01;
        let out = increment_parallel(BitPlaneVector::from_planes(planes));

        assert_eq!(out.lane(0), Some(2));
        assert_eq!(out.lane(1), Some(1));
    }

    #[test]
    fn test_in_place_matches_by_value() {
        let mut planes = [0u64; PLANES];
        for (n, plane) in planes.iter_mut().enumerate() {
            *plane = 0x9E37_79B9_7F4A_7C15u64.rotate_left(n as u32);
        }
        let original = BitPlaneVector::from_planes(planes);

        let mut in_place = original;
        in_place.increment_in_place();

        assert_eq!(in_place, increment_parallel(original));
    }
}
