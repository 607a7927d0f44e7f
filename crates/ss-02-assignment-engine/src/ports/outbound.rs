//! Outbound ports (SPI) for the Assignment Engine

/// Source of uniformly distributed indices.
///
/// Implementations may be seeded for reproducible draws.
pub trait RandomSource {
    /// Uniform index in `0..upper`. Returns 0 when `upper <= 1`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}
