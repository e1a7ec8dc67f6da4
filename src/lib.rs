//! Bit-sliced parallel increment of up to 64 `u32` values per pass.
//!
//! Values are pivoted into 32 bit-planes of 64 lanes each, a half-adder chain
//! adds one to every lane at once, and the planes are pivoted back.

pub mod bitslice;
pub mod config;
pub mod console;
pub mod error;
pub mod traits;

pub use bitslice::groups::{increment_many, par_increment_many, PlaneGroups};
pub use bitslice::increment::increment_parallel;
pub use bitslice::increment_batch;
pub use bitslice::planes::BitPlaneVector;
pub use bitslice::transpose::{transpose_in, transpose_out};
pub use config::{OverflowPolicy, RunConfig};
pub use error::{BitslicedError, Result};
pub use traits::BitslicedIncrement;

/// Number of lanes in one bit-plane word.
pub const LANES: usize = u64::BITS as usize;

/// Number of bit-planes, one per bit of a lane value.
pub const PLANES: usize = u32::BITS as usize;

/// Values accepted from the console before the overflow policy applies.
pub const DEFAULT_CAPACITY: usize = LANES;
