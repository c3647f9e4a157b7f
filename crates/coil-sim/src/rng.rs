//! Seeded xorshift32 generator.
//!
//! The game client seeds this generator from the replay header. The
//! validator builds one from the same seed and carries it, but never draws
//! from it: food positions come straight from the replay's food list. It
//! is kept so that a future format could derive food placement on the
//! server side from the seed instead of trusting the client's list.

use coil_core::Point;

/// Xorshift32 (shifts 13, 17, 5), bit-compatible with the game client.
///
/// # Examples
///
/// ```
/// use coil_sim::Xorshift32;
///
/// let mut rng = Xorshift32::new(1);
/// assert_eq!(rng.next_u32(), 270_369);
///
/// // A zero seed would lock the generator at zero forever.
/// assert_eq!(Xorshift32::new(0).state(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed the generator. A zero seed is replaced by 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Current internal state (the effective seed before the first draw).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the next value.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish value in `min..=max` by modulo reduction.
    ///
    /// Returns `min` without advancing when `min >= max`.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }

    /// A point with `x` in `min_x..=max_x` and `y` in `min_y..=max_y`.
    pub fn random_point(&mut self, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Point {
        let x = self.range(min_x, max_x);
        let y = self.range(min_y, max_y);
        Point::new(x, y)
    }
}
