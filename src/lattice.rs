use rand::rngs::OsRng;

use crate::{
    internal_util::{cubic_interp, floor_cell, lattice_axis, lattice_seed, unit_from_seed},
    NoiseError, SeedSource,
};

/// Single-octave coherent noise over a hashed pseudorandom lattice.
///
/// The seed is fixed at construction. Every lattice value is derived from
/// `(x, y, seed)` alone, so instances hold no mutable state and can be shared
/// across threads freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LatticeNoise {
    seed: i32,
}

impl LatticeNoise {
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }

    /// Create a noise with a seed drawn from `source`.
    pub fn from_source<S: SeedSource + ?Sized>(source: &mut S) -> Result<Self, NoiseError> {
        let seed = source.next_seed()?;
        tracing::debug!(seed, "drew lattice noise seed");
        Ok(Self::new(seed))
    }

    /// Create a noise with a seed drawn from the operating system.
    pub fn from_entropy() -> Result<Self, NoiseError> {
        Self::from_source(&mut OsRng)
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Pseudorandom value in \[-amp, amp) at the lattice point `(x, y)`.
    pub fn value(&self, x: i32, y: i32, amp: f32) -> f32 {
        let unit = unit_from_seed(lattice_seed(x, y, self.seed));
        (unit * 2.0 - 1.0) * amp
    }

    /// Bicubic interpolation of the 4x4 lattice neighbourhood around `(x, y)`,
    /// with lattice points `spread` apart.
    ///
    /// The result is not clamped and may slightly exceed `amp`. When `x` and
    /// `y` are both multiples of `spread` the result is exactly
    /// [`value`](Self::value) at that point.
    ///
    /// # Panics
    ///
    /// `spread` must be at least 1. A spread of zero panics on division.
    pub fn interpolated(&self, x: i32, y: i32, spread: i32, amp: f32) -> f32 {
        debug_assert!(spread >= 1, "spread must be at least 1, got {}", spread);

        let (cell_x, fraction_x) = floor_cell(x, spread);
        let (cell_y, fraction_y) = floor_cell(y, spread);
        let xs = lattice_axis(cell_x, spread);
        let ys = lattice_axis(cell_y, spread);

        let rows = ys.map(|yi| {
            let [a, b, c, d] = xs.map(|xi| self.value(xi, yi, amp));
            cubic_interp(a, b, c, d, fraction_x)
        });

        let [a, b, c, d] = rows;
        cubic_interp(a, b, c, d, fraction_y)
    }
}
