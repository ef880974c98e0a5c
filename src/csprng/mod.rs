//! Cryptographic engines
//!
//! Keyed engines. Both repurpose a cipher core as a keystream generator over an
//! incrementing block counter:
//!
//! - [`ChaCha20`]  
//!   The full 20-round ChaCha block function. Besides the folded 64-bit
//!   output it exposes whole 512-bit blocks via [`ChaCha20::next512`].
//!
//! - [`AesCtr`]  
//!   A single reduced AES-128 round (no MixColumns) over a 128-bit counter.
//!   Besides the folded 64-bit output it exposes whole 128-bit blocks via
//!   [`AesCtr::next128`]. Its output keeps fixed byte positions over long
//!   counter runs, so unlike [`ChaCha20`] it is not a
//!   [`CryptoRng`](rand_core::CryptoRng).
//!
//! Neither engine is an encryption API. The counter advances exactly once
//! per generated block, after the block is computed, with carries running
//! from the least significant word upwards.
//!
//! Both engines wipe their state when dropped.

mod aes_ctr;
mod chacha20;

pub use aes_ctr::AesCtr;
pub use chacha20::ChaCha20;
