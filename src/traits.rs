use crate::bitslice::groups::{increment_many, par_increment_many};

/// Increment-by-one over a slice of `u32`, in scalar, bit-sliced and
/// parallel bit-sliced flavours. All three agree on every input.
pub trait BitslicedIncrement {
    type Output;

    fn scalar_increment(self) -> Self::Output;
    fn bitsliced_increment(self) -> Self::Output;
    fn par_bitsliced_increment(self) -> Self::Output;
}

impl BitslicedIncrement for &[u32] {
    type Output = Vec<u32>;

    #[inline(always)]
    fn scalar_increment(self) -> Self::Output {
        self.iter().map(|v| v.wrapping_add(1)).collect()
    }

    #[inline(always)]
    fn bitsliced_increment(self) -> Self::Output {
        increment_many(self)
    }

    #[inline(always)]
    fn par_bitsliced_increment(self) -> Self::Output {
        par_increment_many(self)
    }
}

impl BitslicedIncrement for &Vec<u32> {
    type Output = Vec<u32>;

    #[inline(always)]
    fn scalar_increment(self) -> Self::Output {
        self.as_slice().scalar_increment()
    }

    #[inline(always)]
    fn bitsliced_increment(self) -> Self::Output {
        self.as_slice().bitsliced_increment()
    }

    #[inline(always)]
    fn par_bitsliced_increment(self) -> Self::Output {
        self.as_slice().par_bitsliced_increment()
    }
}

impl BitslicedIncrement for Vec<u32> {
    type Output = Vec<u32>;

    #[inline(always)]
    fn scalar_increment(self) -> Self::Output {
        self.as_slice().scalar_increment()
    }

    #[inline(always)]
    fn bitsliced_increment(self) -> Self::Output {
        self.as_slice().bitsliced_increment()
    }

    #[inline(always)]
    fn par_bitsliced_increment(self) -> Self::Output {
        self.as_slice().par_bitsliced_increment()
    }
}
