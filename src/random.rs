//! Injected randomness for the shuffle helpers.
//!
//! Callers hand a [`RandomSource`] to anything that needs random draws
//! instead of the helpers reaching for a global generator. Every `rand`
//! generator is a source already; tests can also script their own.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// A uniform random number source over `[0, 1)`.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// The default, non-reproducible source backed by the thread-local generator.
#[must_use]
pub fn thread_source() -> ThreadRng {
    rand::rng()
}

/// A reproducible source: the same `seed` always yields the same draws.
#[must_use]
pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw an index uniformly from `0..=upper`.
///
/// Computed as `floor(u * (upper + 1))` for a unit draw `u`. The result is
/// clamped into range, so a source returning values outside `[0, 1)` (or NaN)
/// still yields a valid index.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn pick_index<S: RandomSource + ?Sized>(source: &mut S, upper: usize) -> usize {
    let unit = source.next_unit();
    if unit.is_nan() || unit <= 0.0 {
        return 0;
    }
    let scaled = (unit * (upper as f64 + 1.0)).floor();
    (scaled as usize).min(upper)
}
