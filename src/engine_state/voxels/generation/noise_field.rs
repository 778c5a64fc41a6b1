//! # Noise Field Module
//!
//! A small, fully deterministic 2D gradient noise. The permutation table is
//! shuffled once from the seed with a fixed linear congruential generator, so a
//! given seed produces the same terrain on every platform and in every release.

use noise::NoiseFn;

/// Modulus of the permutation shuffle generator.
const LCG_MODULUS: i64 = 233_280;
/// Multiplier of the permutation shuffle generator.
const LCG_MULTIPLIER: i64 = 9_301;
/// Increment of the permutation shuffle generator.
const LCG_INCREMENT: i64 = 49_297;

/// Seeded 2D coherent noise.
///
/// # Examples
///
/// ```
/// use voxel_world::NoiseField;
///
/// let field = NoiseField::new(42);
/// let value = field.fractal_sum(1.5, -3.25, 4, 0.5);
/// assert!((0.0..=1.0).contains(&value));
/// assert_eq!(value, NoiseField::new(42).fractal_sum(1.5, -3.25, 4, 0.5));
/// ```
#[derive(Clone)]
pub struct NoiseField {
    seed: i64,
    /// The shuffled identity table, stored twice so corner hashes never need wrapping.
    permutation: [u8; 512],
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

impl NoiseField {
    /// Builds the permutation table for `seed`.
    pub fn new(seed: i64) -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }

        let mut random = seed.rem_euclid(LCG_MODULUS);
        for i in (1..256usize).rev() {
            random = (random * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
            let j = ((random as f64 / LCG_MODULUS as f64) * (i + 1) as f64).floor() as usize;
            table.swap(i, j);
        }

        let mut permutation = [0u8; 512];
        permutation[..256].copy_from_slice(&table);
        permutation[256..].copy_from_slice(&table);

        NoiseField { seed, permutation }
    }

    /// The seed this field was built from.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    #[inline]
    fn hash(&self, index: usize) -> usize {
        self.permutation[index] as usize
    }

    /// Samples the noise at `(x, y)`.
    ///
    /// # Returns
    /// A value in `[-1, 1]`; exactly `0` on every integer lattice point.
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let xi = (x_floor as i64 & 255) as usize;
        let yi = (y_floor as i64 & 255) as usize;

        let x = x - x_floor;
        let y = y - y_floor;
        let u = fade(x);
        let v = fade(y);

        let a = self.hash(xi) + yi;
        let aa = self.hash(a);
        let ab = self.hash(a + 1);
        let b = self.hash(xi + 1) + yi;
        let ba = self.hash(b);
        let bb = self.hash(b + 1);

        let bottom = lerp(
            u,
            gradient(self.hash(aa), x, y),
            gradient(self.hash(ba), x - 1.0, y),
        );
        let top = lerp(
            u,
            gradient(self.hash(ab), x, y - 1.0),
            gradient(self.hash(bb), x - 1.0, y - 1.0),
        );

        lerp(v, bottom, top).clamp(-1.0, 1.0)
    }

    /// Sums `octaves` layers of noise, doubling the frequency and scaling the
    /// amplitude by `persistence` each layer.
    ///
    /// # Returns
    /// The sum normalized by the total amplitude and remapped to `[0, 1]`.
    /// Zero octaves yield the midpoint `0.5`.
    pub fn fractal_sum(&self, x: f64, y: f64, octaves: u32, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            total += self.sample_2d(x * frequency, y * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        if max_value == 0.0 {
            return 0.5;
        }
        ((total / max_value + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl NoiseFn<f64, 2> for NoiseField {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample_2d(point[0], point[1])
    }
}

/// Quintic smoothstep `6t⁵ - 15t⁴ + 10t³`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of the four diagonal gradients `(±1, ±1)`.
#[inline]
fn gradient(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 3;
    let (u, v) = if h < 2 { (x, y) } else { (y, x) };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
