use std::fmt;

use crate::{LANES, PLANES};

/// 32 bit-planes of 64 lanes each.
///
/// Plane `n` holds bit `n` of every lane; lane `i` is bit `i` of each plane.
/// Lanes that carry no value are kept at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitPlaneVector {
    planes: [u64; PLANES],
}

impl BitPlaneVector {
    /// All planes zero.
    #[inline(always)]
    pub const fn zeroed() -> Self {
        Self {
            planes: [0; PLANES],
        }
    }

    #[inline(always)]
    pub const fn from_planes(planes: [u64; PLANES]) -> Self {
        Self { planes }
    }

    #[inline(always)]
    pub const fn planes(&self) -> &[u64; PLANES] {
        &self.planes
    }

    #[inline(always)]
    pub fn planes_mut(&mut self) -> &mut [u64; PLANES] {
        &mut self.planes
    }

    #[inline(always)]
    pub const fn into_planes(self) -> [u64; PLANES] {
        self.planes
    }

    /// Returns plane `n`, or `None` past the most significant plane.
    #[inline(always)]
    pub fn plane(&self, n: usize) -> Option<u64> {
        self.planes.get(n).copied()
    }

    /// Reassembles the value held in lane `i`, or `None` past the last lane.
    pub fn lane(&self, i: usize) -> Option<u32> {
        if i >= LANES {
            return None;
        }

        Some(
            self.planes
                .iter()
                .enumerate()
                .fold(0u32, |acc, (n, &plane)| acc | ((((plane >> i) & 1) as u32) << n)),
        )
    }

    /// Mask of lanes holding at least one set bit.
    #[inline(always)]
    pub fn occupied_lanes(&self) -> u64 {
        self.planes.iter().fold(0, |acc, &plane| acc | plane)
    }
}

impl From<[u64; PLANES]> for BitPlaneVector {
    fn from(planes: [u64; PLANES]) -> Self {
        Self::from_planes(planes)
    }
}

impl From<BitPlaneVector> for [u64; PLANES] {
    fn from(vector: BitPlaneVector) -> Self {
        vector.planes
    }
}

/// One line per plane, least significant plane first, lane 63 leftmost.
impl fmt::Display for BitPlaneVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, plane) in self.planes.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            write!(f, "nums[{n:2}] {plane:064b}")?;
        }
        Ok(())
    }
}
