//! Pseudo-random value generation
//!
//! This crate provides interchangeable random-bit engines and a sampling
//! layer that turns their raw output into typed values.
//!
//! The focus is on **determinism, exactness and auditability**: every engine
//! reproduces its reference algorithm bit for bit, so a given seed yields the
//! same sequence on every platform and every release.
//!
//! # Module overview
//!
//! - `utils`
//!   Stateless bit helpers: word rotation, SplitMix64 seed expansion and the
//!   build-time fallback seed.
//!
//! - `engine`
//!   The [`Engine`] capability: fixed-size private state plus a `next()`
//!   operation yielding 64 bits. Everything else is generic over it.
//!
//! - `prng`
//!   Non-cryptographic engines: xorshift128+, the xoroshiro128 and xoshiro256
//!   families, and PCG32 (with `O(log n)` jump-ahead).
//!
//! - `csprng`
//!   Cryptographic engines: a ChaCha20 keystream engine and an AES-128
//!   counter-mode keystream engine. They generate bits; they do not encrypt.
//!
//! - `generator`
//!   Typed values, ranged values, and sequences of unique values via
//!   rejection sampling.
//!
//! # Seeding
//!
//! Non-cryptographic engines take a single `u64` seed. Cryptographic engines
//! take an explicit key and nonce, or draw them from an entropy source such
//! as [`OsEntropy`]. All engines implement [`rand_core::RngCore`] and
//! [`rand_core::SeedableRng`].
//!
//! # Threading
//!
//! An engine is a plain value with exclusive ownership. Give each thread its
//! own instance, for example seeded with `mix_seed(base_seed + stream)`.
//!
//! ```
//! use rngkit::{Xoshiro256StarStar, generate_range, sequence};
//!
//! let mut rng = Xoshiro256StarStar::new(42);
//!
//! let roll: u8 = generate_range(&mut rng, 1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! let picks = sequence(&mut rng, 1u32, 49, 6);
//! assert_eq!(picks.len(), 6);
//! ```

#[macro_use]
mod log_macros;

mod error;
mod os;

pub mod csprng;
pub mod engine;
pub mod generator;
pub mod prng;
pub mod utils;

pub use csprng::{AesCtr, ChaCha20};
pub use engine::Engine;
pub use error::EntropyError;
pub use generator::{Sample, Unique, generate, generate_range, sequence, unique};
pub use os::OsEntropy;
pub use prng::{
    Pcg32, Xoroshiro128Plus, Xoroshiro128PlusPlus, Xoroshiro128StarStar, Xorshift128Plus,
    Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar,
};

pub use rand_core;
