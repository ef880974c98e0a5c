//! Bit utilities
//!
//! Stateless helpers shared by every engine:
//!
//! - `bits`  
//!   Fixed-width word rotation. Only 32-bit and 64-bit words are accepted;
//!   any other width is rejected at compile time.
//!
//! - `seed`  
//!   Seed expansion (SplitMix64) and the build-time fallback seed.

pub mod bits;
pub mod seed;

pub use bits::{Rotate, rotate_left};
pub use seed::{default_seed, mix_seed};
