use rand::RngCore;

use crate::NoiseError;

/// Supplies seeds to noise constructors that were not given one explicitly.
///
/// Every [`RngCore`] is a seed source, so production code passes
/// [`rand::rngs::OsRng`] (see the `from_entropy` constructors) while tests can
/// pass a seeded generator and stay reproducible.
pub trait SeedSource {
    fn next_seed(&mut self) -> Result<i32, NoiseError>;
}

impl<R: RngCore + ?Sized> SeedSource for R {
    fn next_seed(&mut self) -> Result<i32, NoiseError> {
        let mut bytes = [0u8; 4];
        self.try_fill_bytes(&mut bytes)?;
        Ok(i32::from_le_bytes(bytes))
    }
}
