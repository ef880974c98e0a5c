//! xoshiro256 family
//!
//! 256-bit state, shared (17, 45) linear update, three output scramblers.
//! `**` and `++` are the general-purpose choices; `+` is meant for
//! floating-point generation where only the high bits are used.

use crate::engine::{Engine, impl_rng_core, impl_seedable_u64};
use crate::utils::rotate_left;
use crate::utils::seed::expand;

#[inline(always)]
fn step(s: &mut [u64; 4]) {
    let t = s[1] << 17;

    s[2] ^= s[0];
    s[3] ^= s[1];
    s[1] ^= s[2];
    s[0] ^= s[3];

    s[2] ^= t;
    s[3] = rotate_left(s[3], 45);
}

/// The xoshiro256+ generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256Plus {
    s: [u64; 4],
}

impl Xoshiro256Plus {
    /// Creates an engine from a 64-bit seed.
    pub const fn new(seed: u64) -> Self {
        Self { s: expand(seed) }
    }

    #[cfg(test)]
    pub(crate) const fn from_state(s: [u64; 4]) -> Self {
        Self { s }
    }
}

impl Engine for Xoshiro256Plus {
    type Word = u64;

    const STATE_WORDS: usize = 4;

    #[inline]
    fn next(&mut self) -> u64 {
        let result = self.s[0].wrapping_add(self.s[3]);
        step(&mut self.s);
        result
    }
}

/// The xoshiro256++ generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Creates an engine from a 64-bit seed.
    pub const fn new(seed: u64) -> Self {
        Self { s: expand(seed) }
    }

    #[cfg(test)]
    pub(crate) const fn from_state(s: [u64; 4]) -> Self {
        Self { s }
    }
}

impl Engine for Xoshiro256PlusPlus {
    type Word = u64;

    const STATE_WORDS: usize = 4;

    #[inline]
    fn next(&mut self) -> u64 {
        let result = rotate_left(self.s[0].wrapping_add(self.s[3]), 23).wrapping_add(self.s[0]);
        step(&mut self.s);
        result
    }
}

/// The xoshiro256** generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Creates an engine from a 64-bit seed.
    pub const fn new(seed: u64) -> Self {
        Self { s: expand(seed) }
    }

    #[cfg(test)]
    pub(crate) const fn from_state(s: [u64; 4]) -> Self {
        Self { s }
    }
}

impl Engine for Xoshiro256StarStar {
    type Word = u64;

    const STATE_WORDS: usize = 4;

    #[inline]
    fn next(&mut self) -> u64 {
        let result = rotate_left(self.s[1].wrapping_mul(5), 7).wrapping_mul(9);
        step(&mut self.s);
        result
    }
}

impl_rng_core!(Xoshiro256Plus);
impl_rng_core!(Xoshiro256PlusPlus);
impl_rng_core!(Xoshiro256StarStar);

impl_seedable_u64!(Xoshiro256Plus);
impl_seedable_u64!(Xoshiro256PlusPlus);
impl_seedable_u64!(Xoshiro256StarStar);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_reference_outputs() {
        let mut rng = Xoshiro256Plus::from_state([1, 2, 3, 4]);
        let expected = [5, 211106232532999, 211106635186183, 9223759065350669058];

        for e in expected {
            assert_eq!(rng.next(), e);
        }
    }

    #[test]
    fn plusplus_reference_outputs() {
        let mut rng = Xoshiro256PlusPlus::from_state([1, 2, 3, 4]);
        let expected = [41943041, 58720359, 3588806011781223, 3591011842654386];

        for e in expected {
            assert_eq!(rng.next(), e);
        }
    }

    #[test]
    fn starstar_reference_outputs() {
        let mut rng = Xoshiro256StarStar::from_state([1, 2, 3, 4]);
        let expected = [11520, 0, 1509978240, 1215971899390074240];

        for e in expected {
            assert_eq!(rng.next(), e);
        }
    }
}
