//! Seed-reproducible 2D coherent noise.
//!
//! [`LatticeNoise`] bicubically interpolates pseudorandom values hashed from
//! integer lattice points, and [`FractalCombiner`] sums several of them at
//! halving spread and amplitude. Both are pure functions of their seed; no
//! lattice values are stored.
//!
//! ```
//! use lattice_noise::{FractalCombiner, LatticeNoise};
//!
//! let noise = LatticeNoise::new(42);
//! assert_eq!(noise.interpolated(32, 48, 16, 1.0), noise.value(32, 48, 1.0));
//!
//! let terrain = FractalCombiner::new(3, 42).unwrap();
//! let height = terrain.value(10, 10, 16, 2.0);
//! assert_eq!(height, FractalCombiner::new(3, 42).unwrap().value(10, 10, 16, 2.0));
//! ```

mod error;
mod field;
mod fractal;
mod internal_util;
mod lattice;
#[cfg(feature = "serialize")]
mod rw;
mod seed;

pub use error::NoiseError;
pub use field::NoiseField;
pub use fractal::{FractalCombiner, DEFAULT_OCTAVES};
pub use lattice::LatticeNoise;
pub use seed::SeedSource;
