//! Unique-value sequences via rejection sampling.

use std::collections::HashSet;
use std::iter::FusedIterator;

use super::sample::Sample;
use crate::engine::Engine;

/// Upper bound on the duplicate set reserved up front; beyond it the set
/// grows as values are accepted.
const MAX_PREALLOC: usize = 1 << 16;

/// Lazy iterator over distinct values drawn from a range.
///
/// Created by [`unique`]. Each item is the next candidate from
/// [`generate_range`](super::generate_range) that has not been seen before;
/// repeats are drawn and discarded. The iterator yields exactly its
/// (clamped) count, then stops.
///
/// Values come out in acceptance order. The iterator consumes engine state
/// as it goes and cannot be replayed without re-seeding the engine.
pub struct Unique<'a, T: Sample, E: Engine + ?Sized> {
    engine: &'a mut E,
    min: T,
    max: T,
    remaining: usize,
    seen: HashSet<T::Key>,
}

impl<'a, T: Sample, E: Engine + ?Sized> Unique<'a, T, E> {
    fn new(engine: &'a mut E, min: T, max: T, count: usize) -> Self {
        let available = T::distinct_count(min, max);
        let remaining = count.min(available);

        if remaining < count {
            debug!(
                "unique sequence: {} values requested, range holds {}, clamping",
                count, available
            );
        }

        Self {
            engine,
            min,
            max,
            remaining,
            seen: HashSet::with_capacity(remaining.min(MAX_PREALLOC)),
        }
    }
}

impl<T: Sample, E: Engine + ?Sized> Iterator for Unique<'_, T, E> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            let value = T::sample_range(&mut *self.engine, self.min, self.max);

            if self.seen.insert(value.key()) {
                self.remaining -= 1;
                return Some(value);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Sample, E: Engine + ?Sized> ExactSizeIterator for Unique<'_, T, E> {}

impl<T: Sample, E: Engine + ?Sized> FusedIterator for Unique<'_, T, E> {}

/// Returns a lazy iterator over up to `count` distinct values in a range.
///
/// `count` is first clamped to the number of values the range can hold:
/// `max - min + 1` for integers, `ceil((max - min) / EPSILON)` for floats.
/// Asking for more values than exist therefore terminates with fewer items
/// instead of looping forever. Compare the length of the result with
/// `count` to detect truncation.
pub fn unique<T: Sample, E: Engine + ?Sized>(
    engine: &mut E,
    min: T,
    max: T,
    count: usize,
) -> Unique<'_, T, E> {
    Unique::new(engine, min, max, count)
}

/// Collects up to `count` distinct values from a range, in acceptance order.
///
/// Behaves like [`unique`] followed by `collect`.
///
/// ```
/// use rngkit::{Pcg32, sequence};
///
/// let mut rng = Pcg32::new(1);
/// let mut digits = sequence(&mut rng, 0i32, 4, 100);
///
/// digits.sort();
/// assert_eq!(digits, [0, 1, 2, 3, 4]);
/// ```
pub fn sequence<T: Sample, E: Engine + ?Sized>(
    engine: &mut E,
    min: T,
    max: T,
    count: usize,
) -> Vec<T> {
    unique(engine, min, max, count).collect()
}
