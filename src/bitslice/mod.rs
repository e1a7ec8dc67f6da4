//! Transpose-compute-transpose pipeline over 64-lane bit-planes.
//!
//! A batch of up to [`LANES`] values is pivoted into a [`planes::BitPlaneVector`]
//! ([`transpose::transpose_in`]), incremented across all lanes in one pass
//! ([`increment::increment_parallel`]) and pivoted back
//! ([`transpose::transpose_out`]). Longer inputs are split into
//! [`groups::PlaneGroups`].
//!
//! # Usage Example
//!
//! ```rust
//! use bitsliced::increment_batch;
//!
//! let out = increment_batch(&[5, u32::MAX, 100], 3).unwrap();
//! assert_eq!(out, vec![6, 0, 101]);
//! ```

pub mod groups;
pub mod increment;
pub mod planes;
pub mod transpose;

use crate::error::{out_of_range, validation_error, Result};
use crate::LANES;

/// Adds one to each of the first `count` values, wrapping at `u32::MAX`.
///
/// # Errors
///
/// Returns [`OutOfRange`](crate::BitslicedError::OutOfRange) when `count`
/// exceeds [`LANES`] and a validation error when `count` exceeds
/// `values.len()`.
pub fn increment_batch(values: &[u32], count: usize) -> Result<Vec<u32>> {
    let planes = transpose::transpose_in(values, count)?;
    let planes = increment::increment_parallel(planes);
    transpose::transpose_out(&planes, count)
}

/// Checks that `count` lanes fit a single bit-plane vector.
#[inline(always)]
pub(crate) fn check_lane_count(count: usize) -> Result<()> {
    if count > LANES {
        return Err(out_of_range(count, LANES));
    }
    Ok(())
}

/// Checks that `count` lanes can be read from `values`.
#[inline(always)]
pub(crate) fn check_supplied(values: &[u32], count: usize) -> Result<()> {
    if count > values.len() {
        return Err(validation_error(format!(
            "count {} exceeds the {} values supplied",
            count,
            values.len()
        )));
    }
    Ok(())
}
