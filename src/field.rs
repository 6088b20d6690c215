use crate::{FractalCombiner, LatticeNoise};

/// A coherent scalar field sampled at integer coordinates.
pub trait NoiseField {
    fn sample(&self, x: i32, y: i32, spread: i32, amp: f32) -> f32;

    /// Sample a `width` x `height` block starting at `origin`, one row per `y`.
    /// Coordinates wrap past `i32::MAX`.
    ///
    /// # Panics
    ///
    /// If `width` or `height` does not fit in an `i32`.
    fn rasterise(
        &self,
        origin: (i32, i32),
        width: usize,
        height: usize,
        spread: i32,
        amp: f32,
    ) -> Vec<Vec<f32>> {
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "raster of {}x{} exceeds the i32 coordinate range",
            width,
            height
        );
        let mut raster = vec![vec![0.0; width]; height];

        let ys = (0..height as i32).map(|iy| origin.1.wrapping_add(iy));
        for (y, row) in ys.zip(&mut raster) {
            let xs = (0..width as i32).map(|ix| origin.0.wrapping_add(ix));
            for (x, item) in xs.zip(row) {
                *item = self.sample(x, y, spread, amp);
            }
        }

        raster
    }
}

impl NoiseField for LatticeNoise {
    fn sample(&self, x: i32, y: i32, spread: i32, amp: f32) -> f32 {
        self.interpolated(x, y, spread, amp)
    }
}

impl NoiseField for FractalCombiner {
    fn sample(&self, x: i32, y: i32, spread: i32, amp: f32) -> f32 {
        self.value(x, y, spread, amp)
    }
}
