//! xoroshiro128 family
//!
//! Three output scramblers over the same 128-bit linear engine. The `+` and
//! `**` variants share the (24, 16, 37) update; `++` uses (49, 21, 28).

use crate::engine::{Engine, impl_rng_core, impl_seedable_u64};
use crate::utils::rotate_left;
use crate::utils::seed::expand;

/// Advances a xoroshiro128 state with rotation `a`, shift `b`, rotation `c`.
#[inline(always)]
fn step(s: &mut [u64; 2], a: u32, b: u32, c: u32) {
    let s0 = s[0];
    let s1 = s[1] ^ s0;

    s[0] = rotate_left(s0, a) ^ s1 ^ (s1 << b);
    s[1] = rotate_left(s1, c);
}

/// The xoroshiro128+ generator.
///
/// Fastest of the family; the two lowest output bits fail linearity tests,
/// which matters only if they are used on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    s: [u64; 2],
}

impl Xoroshiro128Plus {
    /// Creates an engine from a 64-bit seed.
    pub const fn new(seed: u64) -> Self {
        Self { s: expand(seed) }
    }

    #[cfg(test)]
    pub(crate) const fn from_state(s: [u64; 2]) -> Self {
        Self { s }
    }
}

impl Engine for Xoroshiro128Plus {
    type Word = u64;

    const STATE_WORDS: usize = 2;

    #[inline]
    fn next(&mut self) -> u64 {
        let result = self.s[0].wrapping_add(self.s[1]);
        step(&mut self.s, 24, 16, 37);
        result
    }
}

/// The xoroshiro128++ generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128PlusPlus {
    s: [u64; 2],
}

impl Xoroshiro128PlusPlus {
    /// Creates an engine from a 64-bit seed.
    pub const fn new(seed: u64) -> Self {
        Self { s: expand(seed) }
    }

    #[cfg(test)]
    pub(crate) const fn from_state(s: [u64; 2]) -> Self {
        Self { s }
    }
}

impl Engine for Xoroshiro128PlusPlus {
    type Word = u64;

    const STATE_WORDS: usize = 2;

    #[inline]
    fn next(&mut self) -> u64 {
        let [s0, s1] = self.s;
        let result = rotate_left(s0.wrapping_add(s1), 17).wrapping_add(s0);
        step(&mut self.s, 49, 21, 28);
        result
    }
}

/// The xoroshiro128** generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128StarStar {
    s: [u64; 2],
}

impl Xoroshiro128StarStar {
    /// Creates an engine from a 64-bit seed.
    pub const fn new(seed: u64) -> Self {
        Self { s: expand(seed) }
    }

    #[cfg(test)]
    pub(crate) const fn from_state(s: [u64; 2]) -> Self {
        Self { s }
    }
}

impl Engine for Xoroshiro128StarStar {
    type Word = u64;

    const STATE_WORDS: usize = 2;

    #[inline]
    fn next(&mut self) -> u64 {
        let result = rotate_left(self.s[0].wrapping_mul(5), 7).wrapping_mul(9);
        step(&mut self.s, 24, 16, 37);
        result
    }
}

impl_rng_core!(Xoroshiro128Plus);
impl_rng_core!(Xoroshiro128PlusPlus);
impl_rng_core!(Xoroshiro128StarStar);

impl_seedable_u64!(Xoroshiro128Plus);
impl_seedable_u64!(Xoroshiro128PlusPlus);
impl_seedable_u64!(Xoroshiro128StarStar);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_reference_outputs() {
        let mut rng = Xoroshiro128Plus::from_state([1, 2]);
        let expected = [3, 412333834243, 2360170716294286339, 9295852285959843169];

        for e in expected {
            assert_eq!(rng.next(), e);
        }
    }

    #[test]
    fn plusplus_reference_outputs() {
        let mut rng = Xoroshiro128PlusPlus::from_state([1, 2]);
        let expected = [393217, 669327710093319, 1732421326133921491, 11394790081659126983];

        for e in expected {
            assert_eq!(rng.next(), e);
        }
    }

    #[test]
    fn starstar_reference_outputs() {
        let mut rng = Xoroshiro128StarStar::from_state([1, 2]);
        let expected = [5760, 97769243520, 9706862127477703552, 9223447511460779954];

        for e in expected {
            assert_eq!(rng.next(), e);
        }
    }
}
