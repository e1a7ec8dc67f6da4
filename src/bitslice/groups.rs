//! Inputs longer than one bit-plane vector.
//!
//! Values are chunked into groups of [`LANES`] consecutive values, each
//! pivoted into its own [`BitPlaneVector`]. Groups share nothing, so they can
//! be incremented on the rayon pool without synchronization.

use log::debug;
use rayon::prelude::*;

use crate::bitslice::planes::BitPlaneVector;
use crate::bitslice::transpose::{pivot_in, pivot_out};
use crate::LANES;

/// An array of bit-plane vectors covering an input of any length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaneGroups {
    groups: Vec<BitPlaneVector>,
    len: usize,
}

impl PlaneGroups {
    /// Pivots `values` into `ceil(len / 64)` groups; the last group is
    /// zero-padded.
    pub fn from_values(values: &[u32]) -> Self {
        let groups = values
            .chunks(LANES)
            .map(pivot_in)
            .collect::<Vec<_>>();

        debug!(
            "pivoted {} values into {} plane groups",
            values.len(),
            groups.len()
        );

        Self {
            groups,
            len: values.len(),
        }
    }

    /// Number of values held.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[inline(always)]
    pub fn groups(&self) -> &[BitPlaneVector] {
        &self.groups
    }

    /// Number of lanes in use within group `g`.
    #[inline(always)]
    pub fn lanes_in_group(&self, g: usize) -> usize {
        self.len.saturating_sub(g * LANES).min(LANES)
    }

    /// Increments every group in order.
    pub fn increment(&mut self) {
        self.groups
            .iter_mut()
            .for_each(BitPlaneVector::increment_in_place);
    }

    /// Increments the groups on the rayon global pool.
    pub fn par_increment(&mut self) {
        self.groups
            .par_iter_mut()
            .for_each(BitPlaneVector::increment_in_place);
    }

    /// Pivots every group back, dropping padding lanes.
    pub fn to_values(&self) -> Vec<u32> {
        let mut values = Vec::with_capacity(self.len);

        for (g, group) in self.groups.iter().enumerate() {
            let lanes = self.lanes_in_group(g);
            values.extend(pivot_out(group, lanes));
        }

        values
    }
}

/// Adds one to every value, wrapping at `u32::MAX`, for inputs of any length.
pub fn increment_many(values: &[u32]) -> Vec<u32> {
    let mut groups = PlaneGroups::from_values(values);
    groups.increment();
    groups.to_values()
}

/// Parallel form of [`increment_many`].
pub fn par_increment_many(values: &[u32]) -> Vec<u32> {
    let mut groups: Vec<(BitPlaneVector, usize)> = values
        .par_chunks(LANES)
        .map(|chunk| (pivot_in(chunk), chunk.len()))
        .collect();

    groups
        .par_iter_mut()
        .for_each(|(group, _)| group.increment_in_place());

    groups
        .par_iter()
        .flat_map_iter(|(group, lanes)| pivot_out(group, *lanes))
        .collect()
}
