//! PCG32 (XSH-RR output over a 64-bit LCG)
//!
//! The only engine that can move its state without producing output:
//! [`Pcg32::advance`] jumps `delta` steps ahead in `O(log delta)`.

use rand_core::{RngCore, SeedableRng, impls};

use crate::engine::Engine;

/// LCG multiplier.
const MUL: u64 = 6_364_136_223_846_793_005;

/// LCG increment.
const INC: u64 = 1_442_695_040_888_963_407;

/// The PCG32 generator: 64-bit state, 32-bit output per step.
///
/// [`Engine::next`] concatenates two 32-bit steps, the first one landing in
/// the high half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    /// Creates an engine from a 64-bit seed.
    ///
    /// The state is warmed up by one step from zero, offset by `seed`, then
    /// stepped once more.
    pub const fn new(seed: u64) -> Self {
        let mut pcg = Self { state: 0 };
        pcg.next32();
        pcg.state = pcg.state.wrapping_add(seed);
        pcg.next32();
        pcg
    }

    /// Returns the next 32 output bits.
    #[inline]
    pub const fn next32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(MUL).wrapping_add(INC);

        let xorshifted = (((old ^ (old >> 18)) >> 27) & 0xffff_ffff) as u32;
        let rot = (old >> 59) as u32;

        xorshifted.rotate_right(rot)
    }

    /// Moves the state `delta` steps forward, exactly as if [`next32`] had
    /// been called `delta` times.
    ///
    /// Uses the LCG doubling trick: the affine step `x -> MUL * x + INC` is
    /// composed with itself by repeated squaring, so the cost is logarithmic
    /// in `delta`. Since the LCG period is 2^64, `advance(2^64 - n)` steps
    /// back by `n`.
    ///
    /// [`next32`]: Pcg32::next32
    pub const fn advance(&mut self, mut delta: u64) {
        let mut cur_mult = MUL;
        let mut cur_plus = INC;
        let mut acc_mult = 1u64;
        let mut acc_plus = 0u64;

        while delta != 0 {
            if delta & 1 != 0 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            delta >>= 1;
        }

        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }
}

impl Engine for Pcg32 {
    type Word = u64;

    const STATE_WORDS: usize = 1;

    #[inline]
    fn next(&mut self) -> u64 {
        let high = self.next32() as u64;
        let low = self.next32() as u64;
        (high << 32) | low
    }
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Engine::next(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    #[inline]
    fn from_seed(seed: [u8; 8]) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    #[inline]
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

impl Default for Pcg32 {
    /// Seeds the engine from the build-time fallback seed.
    fn default() -> Self {
        trace!("seeding Pcg32 from the build seed");
        Self::new(crate::utils::default_seed())
    }
}
