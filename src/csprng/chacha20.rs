//! ChaCha20 keystream engine
//!
//! This module runs the ChaCha20 block function (RFC 8439) purely as a bit
//! generator. It does **not** encrypt anything: the keystream is consumed
//! directly as random output.
//!
//! State layout (sixteen `u32` words):
//!
//! | Words | Content |
//! |---|---|
//! | 0..4 | `"expand 32-byte k"` constants |
//! | 4..12 | 256-bit key |
//! | 12..14 | 64-bit block counter (low, high) |
//! | 14..16 | 64-bit nonce |
//!
//! This is Bernstein's 64-bit-counter ChaCha layout rather than the IETF
//! 32-bit-counter one, so a single key/nonce pair yields 2^64 blocks before
//! the counter wraps.

use core::fmt;

use rand_core::{CryptoRng, RngCore, SeedableRng, TryRngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::engine::{Engine, impl_rng_core};
use crate::error::EntropyError;
use crate::os::OsEntropy;
use crate::utils::rotate_left;

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"` encoded
/// as little-endian `u32` words.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Index of the low counter word.
const COUNTER_LO: usize = 12;

/// Index of the high counter word.
const COUNTER_HI: usize = 13;

/// Performs one ChaCha20 quarter round.
///
/// Mixes four words of the working state with addition modulo 2³², XOR and
/// left rotations by 16, 12, 8 and 7.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = rotate_left(state[d], 16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = rotate_left(state[b], 12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = rotate_left(state[d], 8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = rotate_left(state[b], 7);
}

/// Applies the ChaCha20 permutation: 10 double rounds, each one column
/// round followed by one diagonal round.
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// ChaCha20-based cryptographically secure engine.
///
/// Every output call computes one 64-byte block from the current state and
/// then bumps the 64-bit block counter, so no counter value is ever reused
/// for a given key and nonce.
///
/// ```
/// use rngkit::{ChaCha20, Engine};
///
/// let mut a = ChaCha20::new([7; 8], [1, 2]);
/// let mut b = ChaCha20::new([7; 8], [1, 2]);
///
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    state: [u32; 16],
}

impl ChaCha20 {
    /// Creates an engine from an explicit key and nonce. The block counter
    /// starts at zero.
    pub fn new(key: [u32; 8], nonce: [u32; 2]) -> Self {
        let mut state = [0u32; 16];

        state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);
        state[4..12].copy_from_slice(&key);
        state[14..16].copy_from_slice(&nonce);

        Self { state }
    }

    /// Creates an engine from an infallible entropy source.
    ///
    /// See [`ChaCha20::try_from_entropy`] for how words are consumed.
    pub fn from_entropy<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let Ok(engine) = Self::try_from_entropy(rng);
        engine
    }

    /// Creates an engine from a fallible entropy source.
    ///
    /// Six 32-bit words are drawn: four fill the first half of the key (the
    /// second half stays zero), then two form the nonce.
    pub fn try_from_entropy<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, R::Error> {
        trace!("seeding ChaCha20 from entropy source");

        let mut key = [0u32; 8];
        for word in key.iter_mut().take(4) {
            *word = rng.try_next_u32()?;
        }

        let nonce = [rng.try_next_u32()?, rng.try_next_u32()?];

        let engine = Self::new(key, nonce);
        key.zeroize();

        Ok(engine)
    }

    /// Creates an engine seeded from the operating system.
    pub fn try_from_os() -> Result<Self, EntropyError> {
        Self::try_from_entropy(&mut OsEntropy)
    }

    /// Returns a full 512-bit keystream block.
    pub fn next512(&mut self) -> [u32; 16] {
        self.block()
    }

    /// Computes the block for the current counter, then advances the counter.
    fn block(&mut self) -> [u32; 16] {
        let mut working = self.state;

        rounds(&mut working);

        // Feed-forward
        working
            .iter_mut()
            .zip(&self.state)
            .for_each(|(w, s)| *w = w.wrapping_add(*s));

        self.increment_counter();

        working
    }

    #[inline]
    fn increment_counter(&mut self) {
        self.state[COUNTER_LO] = self.state[COUNTER_LO].wrapping_add(1);
        if self.state[COUNTER_LO] == 0 {
            self.state[COUNTER_HI] = self.state[COUNTER_HI].wrapping_add(1);
        }
    }
}

impl Engine for ChaCha20 {
    type Word = u32;

    const STATE_WORDS: usize = 16;

    /// Folds one block into 64 bits by XOR-ing the eight
    /// `(word[2i] << 32) | word[2i + 1]` pairs together.
    fn next(&mut self) -> u64 {
        let block = self.block();

        block
            .chunks_exact(2)
            .fold(0u64, |acc, pair| acc ^ (((pair[0] as u64) << 32) | pair[1] as u64))
    }
}

impl_rng_core!(ChaCha20);

impl CryptoRng for ChaCha20 {}

impl SeedableRng for ChaCha20 {
    /// 256-bit key as eight little-endian words; the nonce is zero.
    type Seed = [u8; 32];

    fn from_seed(mut seed: [u8; 32]) -> Self {
        let mut key = [0u32; 8];
        key.iter_mut()
            .zip(seed.chunks_exact(4))
            .for_each(|(k, chunk)| {
                *k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            });
        seed.zeroize();

        let engine = Self::new(key, [0; 2]);
        key.zeroize();

        engine
    }
}

impl fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChaCha20 { .. }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_counter(lo: u32, hi: u32) -> ChaCha20 {
        let mut engine = ChaCha20::new([0; 8], [0; 2]);
        engine.state[COUNTER_LO] = lo;
        engine.state[COUNTER_HI] = hi;
        engine
    }

    #[test]
    fn counter_starts_at_zero() {
        let engine = ChaCha20::new([9; 8], [3, 4]);
        assert_eq!(engine.state[COUNTER_LO], 0);
        assert_eq!(engine.state[COUNTER_HI], 0);
    }

    #[test]
    fn counter_advances_once_per_block_after_compute() {
        let mut engine = ChaCha20::new([0; 8], [0; 2]);
        let first = engine.next512();

        assert_eq!(engine.state[COUNTER_LO], 1);
        // Counter zero block from RFC 8439, so the block used the pre-increment value.
        assert_eq!(first[0], 0xade0_b876);

        engine.next();
        assert_eq!(engine.state[COUNTER_LO], 2);
    }

    #[test]
    fn low_counter_wrap_carries_into_high_word_once() {
        let mut engine = with_counter(u32::MAX - 1, 5);

        engine.next512();
        assert_eq!((engine.state[COUNTER_LO], engine.state[COUNTER_HI]), (u32::MAX, 5));

        engine.next512();
        assert_eq!((engine.state[COUNTER_LO], engine.state[COUNTER_HI]), (0, 6));

        engine.next512();
        assert_eq!((engine.state[COUNTER_LO], engine.state[COUNTER_HI]), (1, 6));
    }

    #[test]
    fn full_counter_wraps_to_zero() {
        let mut engine = with_counter(u32::MAX, u32::MAX);
        engine.next();
        assert_eq!((engine.state[COUNTER_LO], engine.state[COUNTER_HI]), (0, 0));
    }

    #[test]
    fn blocks_differ_across_counter_wrap() {
        let mut engine = with_counter(u32::MAX, 0);
        let before = engine.next512();
        let after = engine.next512();
        assert_ne!(before, after);
    }

    /// Yields 0x01010101, 0x02020202, ... so consumption order is visible.
    struct Counting(u32);

    impl RngCore for Counting {
        fn next_u32(&mut self) -> u32 {
            self.0 += 1;
            self.0 * 0x0101_0101
        }

        fn next_u64(&mut self) -> u64 {
            rand_core::impls::next_u64_via_u32(self)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            rand_core::impls::fill_bytes_via_next(self, dst)
        }
    }

    #[test]
    fn entropy_fills_half_key_and_nonce() {
        let engine = ChaCha20::from_entropy(&mut Counting(0));

        assert_eq!(
            engine.state[4..12],
            [0x0101_0101, 0x0202_0202, 0x0303_0303, 0x0404_0404, 0, 0, 0, 0]
        );
        assert_eq!(engine.state[14..16], [0x0505_0505, 0x0606_0606]);
    }
}
