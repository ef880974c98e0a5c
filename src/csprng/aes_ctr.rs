//! AES-128 counter-mode keystream engine
//!
//! A 128-bit counter is pushed through a reduced AES-128 round and the result
//! is consumed as random output. The round keeps AddRoundKey, SubBytes and
//! ShiftRows but omits MixColumns, so this is **not** AES encryption and must
//! not be used as a cipher. It is a cheap keyed permutation over the counter.
//!
//! The counter occupies sixteen bytes viewed as four `u32` words stored in
//! native little-endian order, the most significant word first. Carries move
//! from word 3 towards word 0.
//!
//! Without MixColumns every output byte depends on exactly one counter byte.
//! Consecutive blocks only differ in the bytes fed by counter word 3, so most
//! of the output stays fixed over long runs. Bytes 0, 2, 5 and 7 of
//! [`Engine::next`] (its low byte included) do not change until word 3
//! wraps, which takes 2^32 blocks; byte 3 holds still for 2^24 blocks. As a
//! consequence `generate::<u8>` returns the same value 2^32 times in a row,
//! and `generate_range` over a span divisible by 8 is stuck in one residue
//! class modulo 8.

use core::fmt;

use rand_core::{RngCore, SeedableRng, TryRngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::engine::{Engine, impl_rng_core};
use crate::error::EntropyError;
use crate::os::OsEntropy;

/// Number of 32-bit words in the key.
const NK: usize = 4;

/// Number of 32-bit columns in the state.
const NB: usize = 4;

/// Number of rounds covered by the key schedule.
const NR: usize = 10;

/// Expanded key length in bytes.
const EXPANDED_KEY_LEN: usize = 4 * NB * (NR + 1);

/// AES substitution box.
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// Round constants, one per key schedule round.
const RCON: [u8; NR] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Expands a 128-bit key into eleven round keys (FIPS-197, section 5.2).
fn key_expansion(key: &[u8; 16]) -> [u8; EXPANDED_KEY_LEN] {
    let mut expanded = [0u8; EXPANDED_KEY_LEN];
    expanded[..16].copy_from_slice(key);

    for i in NK..NB * (NR + 1) {
        let mut temp = [0u8; 4];
        temp.copy_from_slice(&expanded[4 * (i - 1)..4 * i]);

        if i % NK == 0 {
            // RotWord, SubWord, Rcon
            temp.rotate_left(1);
            temp.iter_mut().for_each(|b| *b = SBOX[*b as usize]);
            temp[0] ^= RCON[i / NK - 1];
        }

        for j in 0..4 {
            expanded[4 * i + j] = expanded[4 * (i - NK) + j] ^ temp[j];
        }
    }

    expanded
}

/// Row-shifted source index for every output byte.
///
/// Byte `i` sits in row `i % 4`, column `i / 4`; row `r` rotates left by `r`
/// columns.
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// AES-128-CTR-based keystream engine.
///
/// `next` folds each 16-byte block into 64 bits; `next128` returns the block
/// as two little-endian `u64` halves. Either way the counter advances by
/// exactly one per block.
///
/// # Security
/// Output is keyed but heavily structured: in every 8-byte chunk written by
/// `fill_bytes`, bytes 0, 2, 5 and 7 repeat for 2^32 consecutive chunks (see
/// the module docs). The engine is therefore **not** marked
/// [`CryptoRng`](rand_core::CryptoRng) and must not produce key material.
/// Use [`ChaCha20`](crate::ChaCha20) for that.
///
/// ```compile_fail
/// use rngkit::AesCtr;
/// use rngkit::rand_core::CryptoRng;
///
/// fn key_material<R: CryptoRng>(_rng: R) {}
///
/// key_material(AesCtr::new([0; 16], [0; 16]));
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AesCtr {
    counter: [u8; 16],
    expanded_key: [u8; EXPANDED_KEY_LEN],
}

impl AesCtr {
    /// Creates an engine from an explicit key and nonce.
    ///
    /// The nonce is the initial counter value.
    pub fn new(key: [u8; 16], nonce: [u8; 16]) -> Self {
        Self {
            counter: nonce,
            expanded_key: key_expansion(&key),
        }
    }

    /// Creates an engine from an infallible entropy source.
    ///
    /// See [`AesCtr::try_from_entropy`] for how words are consumed.
    pub fn from_entropy<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let Ok(engine) = Self::try_from_entropy(rng);
        engine
    }

    /// Creates an engine from a fallible entropy source.
    ///
    /// Eight 32-bit words are drawn. The first four become the counter, each
    /// written little-endian; the next four become the key, each written
    /// big-endian.
    pub fn try_from_entropy<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, R::Error> {
        trace!("seeding AesCtr from entropy source");

        let mut nonce = [0u8; 16];
        for chunk in nonce.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rng.try_next_u32()?.to_le_bytes());
        }

        let mut key = [0u8; 16];
        for chunk in key.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rng.try_next_u32()?.to_be_bytes());
        }

        let engine = Self::new(key, nonce);
        key.zeroize();
        nonce.zeroize();

        Ok(engine)
    }

    /// Creates an engine seeded from the operating system.
    pub fn try_from_os() -> Result<Self, EntropyError> {
        Self::try_from_entropy(&mut OsEntropy)
    }

    /// Returns a full 128-bit block as two little-endian `u64` halves.
    pub fn next128(&mut self) -> [u64; 2] {
        let block = self.process_block();
        let (low, high) = split_halves(&block);
        [low, high]
    }

    /// Runs one reduced round over the counter, then advances the counter.
    fn process_block(&mut self) -> [u8; 16] {
        let mut state = self.counter;

        // AddRoundKey
        state
            .iter_mut()
            .zip(&self.expanded_key[..16])
            .for_each(|(s, k)| *s ^= k);

        // SubBytes
        state.iter_mut().for_each(|b| *b = SBOX[*b as usize]);

        // ShiftRows
        let substituted = state;
        state
            .iter_mut()
            .zip(SHIFT_ROWS)
            .for_each(|(s, src)| *s = substituted[src]);

        // AddRoundKey with the first round key
        state
            .iter_mut()
            .zip(&self.expanded_key[16..32])
            .for_each(|(s, k)| *s ^= k);

        self.increment_counter();

        state
    }

    /// Adds one to the 128-bit counter, carrying from word 3 up to word 0.
    fn increment_counter(&mut self) {
        for chunk in self.counter.chunks_exact_mut(4).rev() {
            let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]).wrapping_add(1);
            chunk.copy_from_slice(&word.to_le_bytes());

            if word != 0 {
                break;
            }
        }
    }
}

/// Splits a block into its first and last eight bytes, each read
/// little-endian.
#[inline]
fn split_halves(block: &[u8; 16]) -> (u64, u64) {
    let mut low = [0u8; 8];
    let mut high = [0u8; 8];
    low.copy_from_slice(&block[..8]);
    high.copy_from_slice(&block[8..]);
    (u64::from_le_bytes(low), u64::from_le_bytes(high))
}

impl Engine for AesCtr {
    type Word = u8;

    const STATE_WORDS: usize = 16;

    /// XORs the two little-endian halves of one block.
    fn next(&mut self) -> u64 {
        let block = self.process_block();
        let (low, high) = split_halves(&block);
        low ^ high
    }
}

impl_rng_core!(AesCtr);

impl SeedableRng for AesCtr {
    /// 16-byte key followed by the 16-byte nonce.
    type Seed = [u8; 32];

    fn from_seed(mut seed: [u8; 32]) -> Self {
        let mut key = [0u8; 16];
        let mut nonce = [0u8; 16];
        key.copy_from_slice(&seed[..16]);
        nonce.copy_from_slice(&seed[16..]);
        seed.zeroize();

        let engine = Self::new(key, nonce);
        key.zeroize();
        nonce.zeroize();

        engine
    }
}

impl fmt::Debug for AesCtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AesCtr { .. }")
    }
}
