//! Bounded random draws shared by every topic module.
//!
//! Implemented for any [`rand::Rng`], so callers thread their own generator
//! through each call: a seeded `StdRng` reproduces a whole batch, and
//! parallel callers simply hold one generator each.

use rand::Rng;

pub trait RandomSource {
    /// Uniform integer in `min..=max`. Both bounds are reachable.
    fn next_int(&mut self, min: i32, max: i32) -> i32;

    /// `true` or `false` with equal probability.
    fn next_bool(&mut self) -> bool;

    /// Uniformly chosen element; `items` must not be empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T;
}

impl<R: Rng> RandomSource for R {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        self.gen_range(min..=max)
    }

    fn next_bool(&mut self) -> bool {
        self.gen_bool(0.5)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.gen_range(0..items.len())]
    }
}
