const LCG_MULTIPLIER: i64 = 0x5DEECE66D;
const LCG_ADDEND: i64 = 0xB;
const LCG_MASK: i64 = (1 << 48) - 1;

/// Cantor-style pairing of two lattice coordinates in wrapping 32-bit arithmetic.
pub fn pair(x: i32, y: i32) -> i32 {
    let sum = x.wrapping_add(y);
    (sum.wrapping_mul(sum.wrapping_add(1)) >> 1).wrapping_add(y)
}

/// Pairs an already paired coordinate key with the instance seed, widened to 64 bits.
pub fn pair_with_seed(key: i32, seed: i32) -> i64 {
    let seed = i64::from(seed);
    let sum = i64::from(key).wrapping_add(seed);
    (sum.wrapping_mul(sum.wrapping_add(1)) >> 1).wrapping_add(seed)
}

pub fn lattice_seed(x: i32, y: i32, seed: i32) -> i64 {
    pair_with_seed(pair(x, y), seed)
}

/// One step of a 48-bit LCG started from `seed`, returning the top 24 bits in \[0.0,1.0).
pub fn unit_from_seed(seed: i64) -> f32 {
    let scrambled = (seed ^ LCG_MULTIPLIER) & LCG_MASK;
    let next = scrambled
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_ADDEND)
        & LCG_MASK;
    let bits = (next >> 24) as i32;
    bits as f32 / (1 << 24) as f32
}

/// Cubic through `b` (t = 0) and `c` (t = 1), using `a` and `d` for the slopes.
/// Not clamped.
pub fn cubic_interp(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let p = (d - c) - (a - b);
    let q = a - b - p;
    let r = c - a;
    let s = b;

    let t64 = f64::from(t);
    let t2 = (t64 * t64) as f32;
    let t3 = (t64 * t64 * t64) as f32;

    p * t3 + q * t2 + r * t + s
}

/// Cell index of `v` and the fractional offset inside that cell, flooring toward negative infinity.
pub fn floor_cell(v: i32, spread: i32) -> (i32, f32) {
    let cell = v.div_euclid(spread);
    let fraction = v.rem_euclid(spread) as f32 / spread as f32;
    (cell, fraction)
}

/// Lattice coordinates of the four knots around `cell`, one beyond each side.
pub fn lattice_axis(cell: i32, spread: i32) -> [i32; 4] {
    [
        cell.wrapping_sub(1).wrapping_mul(spread),
        cell.wrapping_mul(spread),
        cell.wrapping_add(1).wrapping_mul(spread),
        cell.wrapping_add(2).wrapping_mul(spread),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pair() {
        assert_eq!(pair(0, 0), 0);
        assert_eq!(pair(1, 0), 1);
        assert_eq!(pair(0, 1), 2);
        assert_eq!(pair(2, 0), 3);
        assert_eq!(pair(1, 1), 4);
        assert_eq!(pair(0, 2), 5);

        // wraps instead of overflowing
        let _ = pair(i32::MAX, i32::MAX);
        let _ = pair_with_seed(i32::MIN, i32::MIN);
    }

    #[test]
    fn test_unit_from_seed_range() {
        for seed in -5000..5000 {
            let v = unit_from_seed(seed * 7919);
            assert!((0.0..1.0).contains(&v));
        }
        assert_eq!(unit_from_seed(i64::MAX).to_bits(), 0x3e89b2d8);
        assert_eq!(unit_from_seed(-1).to_bits(), 0x3e89b2d8);
        assert_eq!(unit_from_seed(0), 0.73096776);
    }

    #[test]
    fn test_unit_from_seed_spread() {
        let n = 100000;
        let mean = (0..n)
            .map(|i| unit_from_seed(lattice_seed(i % 317, i / 317, 42)) as f64)
            .sum::<f64>()
            / n as f64;
        assert!((mean - 0.5).abs() < 1e-2);
    }

    #[test]
    fn test_cubic_interp_knots() {
        let samples = [
            (0.3, -0.7, 0.25, 0.9),
            (-1.0, 1.0, -1.0, 1.0),
            (12.5, 3.25, -8.0, 0.0),
        ];
        for (a, b, c, d) in samples {
            assert_eq!(cubic_interp(a, b, c, d, 0.0), b);
            assert!((cubic_interp(a, b, c, d, 1.0) - c).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cubic_interp_constant() {
        for i in 0..16 {
            let t = i as f32 / 16.0;
            assert_eq!(cubic_interp(0.5, 0.5, 0.5, 0.5, t), 0.5);
        }
    }

    #[test]
    fn test_floor_cell() {
        assert_eq!(floor_cell(10, 16), (0, 0.625));
        assert_eq!(floor_cell(32, 16), (2, 0.0));
        assert_eq!(floor_cell(-1, 4), (-1, 0.75));
        assert_eq!(floor_cell(-4, 4), (-1, 0.0));
        assert_eq!(floor_cell(-5, 4), (-2, 0.75));
    }

    #[test]
    fn test_lattice_axis() {
        assert_eq!(lattice_axis(0, 16), [-16, 0, 16, 32]);
        assert_eq!(lattice_axis(-1, 4), [-8, -4, 0, 4]);
    }
}
