use std::ops::Mul;

mod chunks;
mod scale;

pub use chunks::Chunks;
pub use scale::Scale;

/// Adaptors shared by the generator and the analyzer.
pub trait Iter: Iterator + Sized {
    /// Groups items into vectors of exactly `size`, dropping a short tail.
    /// A `size` of zero yields nothing.
    fn whole_chunks(self, size: usize) -> Chunks<Self> {
        Chunks::new(self, size)
    }

    /// Multiplies every item by `scalar`.
    fn scale<S>(self, scalar: S) -> Scale<Self, S>
    where
        S: Copy,
        Self::Item: Mul<S, Output = Self::Item>,
    {
        Scale::new(self, scalar)
    }
}

impl<I: Iterator> Iter for I {}
