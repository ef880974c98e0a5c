//! Non-cryptographic engines
//!
//! Fast generators with good statistical quality, built purely from integer
//! shift, xor, rotate, add and multiply steps. They are **not** suitable
//! where output must be unpredictable: observing a few outputs is enough to
//! recover the state.
//!
//! | Engine | State | Output scrambler |
//! |---|---|---|
//! | [`Xorshift128Plus`] | 2 × u64 | `+` |
//! | [`Xoroshiro128Plus`] | 2 × u64 | `+` |
//! | [`Xoroshiro128PlusPlus`] | 2 × u64 | `++` |
//! | [`Xoroshiro128StarStar`] | 2 × u64 | `**` |
//! | [`Xoshiro256Plus`] | 4 × u64 | `+` |
//! | [`Xoshiro256PlusPlus`] | 4 × u64 | `++` |
//! | [`Xoshiro256StarStar`] | 4 × u64 | `**` |
//! | [`Pcg32`] | 1 × u64 | XSH-RR |
//!
//! All xor-shift family engines expand their `u64` seed with
//! [`mix_seed`](crate::utils::mix_seed), word `i` receiving
//! `mix_seed(seed + i)`. The shift and rotation constants are those of the
//! published reference implementations and must not be altered.

mod pcg;
mod xoroshiro;
mod xorshift;
mod xoshiro;

pub use pcg::Pcg32;
pub use xoroshiro::{Xoroshiro128Plus, Xoroshiro128PlusPlus, Xoroshiro128StarStar};
pub use xorshift::Xorshift128Plus;
pub use xoshiro::{Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar};
