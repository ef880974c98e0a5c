//! xorshift128+

use crate::engine::{Engine, impl_rng_core, impl_seedable_u64};
use crate::utils::seed::expand;

/// The xorshift128+ generator (shift triple 23, 18, 5).
///
/// Superseded by the xoroshiro family but kept for compatibility with
/// existing seeded sequences. The lowest output bits are weak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128Plus {
    s: [u64; 2],
}

impl Xorshift128Plus {
    /// Creates an engine from a 64-bit seed.
    pub const fn new(seed: u64) -> Self {
        Self { s: expand(seed) }
    }

    #[cfg(test)]
    pub(crate) const fn from_state(s: [u64; 2]) -> Self {
        Self { s }
    }
}

impl Engine for Xorshift128Plus {
    type Word = u64;

    const STATE_WORDS: usize = 2;

    #[inline]
    fn next(&mut self) -> u64 {
        let mut s1 = self.s[0];
        let s0 = self.s[1];
        let result = s0.wrapping_add(s1);

        self.s[0] = s0;
        s1 ^= s1 << 23;
        self.s[1] = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);

        result
    }
}

impl_rng_core!(Xorshift128Plus);
impl_seedable_u64!(Xorshift128Plus);
