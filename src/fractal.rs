use rand::rngs::OsRng;

use crate::{LatticeNoise, NoiseError, SeedSource};

/// Octave count used when the caller has no preference.
pub const DEFAULT_OCTAVES: usize = 6;

/// Multi-octave fractal noise. Octave `i` is a [`LatticeNoise`] seeded with
/// `seed + i`, sampled at half the spread and amplitude of octave `i - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractalCombiner {
    octaves: Vec<LatticeNoise>,
}

impl FractalCombiner {
    pub fn new(octaves: usize, seed: i32) -> Result<Self, NoiseError> {
        check_octaves(octaves)?;
        tracing::trace!(octaves, seed, "building fractal combiner");
        Ok(Self::build(octaves, seed))
    }

    pub fn with_default_octaves(seed: i32) -> Self {
        Self::build(DEFAULT_OCTAVES, seed)
    }

    fn build(octaves: usize, seed: i32) -> Self {
        let octaves = (0..octaves)
            .map(|index| LatticeNoise::new(seed.wrapping_add(index as i32)))
            .collect();
        Self { octaves }
    }

    /// Create a combiner whose base seed is drawn from `source`.
    pub fn from_source<S: SeedSource + ?Sized>(
        octaves: usize,
        source: &mut S,
    ) -> Result<Self, NoiseError> {
        check_octaves(octaves)?;
        let seed = source.next_seed()?;
        tracing::debug!(seed, "drew fractal combiner seed");
        Self::new(octaves, seed)
    }

    /// Create a combiner whose base seed is drawn from the operating system.
    pub fn from_entropy(octaves: usize) -> Result<Self, NoiseError> {
        Self::from_source(octaves, &mut OsRng)
    }

    /// The base seed, which is also the seed of the first octave.
    pub fn seed(&self) -> i32 {
        self.octaves[0].seed()
    }

    pub fn octaves(&self) -> usize {
        self.octaves.len()
    }

    pub fn octave_seeds(&self) -> impl Iterator<Item = i32> + '_ {
        self.octaves.iter().map(LatticeNoise::seed)
    }

    /// Sum of the octaves at `(x, y)`.
    ///
    /// The first octave is sampled at `spread` with half of `amp`; each
    /// following octave halves both again. Octaves are skipped once the
    /// spread drops below 1.
    ///
    /// # Panics
    ///
    /// `spread` must be at least 1. A spread of zero panics on division.
    pub fn value(&self, x: i32, y: i32, spread: i32, amp: f32) -> f32 {
        let mut spread = spread;
        let mut amp = amp / 2.0;
        let mut total = 0.0;

        for octave in &self.octaves {
            total += octave.interpolated(x, y, spread, amp);
            spread /= 2;
            amp /= 2.0;
            if spread < 1 {
                break;
            }
        }

        total
    }
}

fn check_octaves(octaves: usize) -> Result<(), NoiseError> {
    if octaves == 0 {
        tracing::warn!("rejected fractal combiner without octaves");
        return Err(NoiseError::InvalidOctaves);
    }
    Ok(())
}
