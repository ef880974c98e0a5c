//! Engine abstraction
//!
//! An engine is a deterministic state machine over a fixed-size array of
//! unsigned words. Each call to [`Engine::next`] mutates the state and
//! returns 64 fresh bits. Two engines seeded identically produce identical
//! sequences.
//!
//! The sampling layer (see [`crate::generator`]) is generic over this trait,
//! not over any concrete engine, so dispatch is static and every engine is
//! interchangeable. Engines are single-owner values: share one across
//! threads only by giving each thread its own instance.
//!
//! Every engine additionally implements [`rand_core::RngCore`], which lets
//! it drive anything in the `rand` ecosystem.

/// Capability shared by every random-bit engine.
///
/// `Word` and `STATE_WORDS` describe the shape of the internal state (for
/// example sixteen `u32` words for ChaCha20); the state itself stays
/// private to the engine.
pub trait Engine {
    /// Unsigned word type making up the internal state.
    type Word: Copy;

    /// Number of `Word`s in the internal state.
    const STATE_WORDS: usize;

    /// Advances the state and returns the next 64 output bits.
    fn next(&mut self) -> u64;
}

impl<E: Engine + ?Sized> Engine for &mut E {
    type Word = E::Word;

    const STATE_WORDS: usize = E::STATE_WORDS;

    #[inline(always)]
    fn next(&mut self) -> u64 {
        (**self).next()
    }
}

/// Implements `rand_core::RngCore` for an engine on top of `Engine::next`.
///
/// `next_u32` keeps the high half of the 64-bit output, which is the
/// stronger half for the `+` scramblers.
macro_rules! impl_rng_core {
    ($engine:ty) => {
        impl rand_core::RngCore for $engine {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                ($crate::engine::Engine::next(self) >> 32) as u32
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                $crate::engine::Engine::next(self)
            }

            #[inline]
            fn fill_bytes(&mut self, dst: &mut [u8]) {
                rand_core::impls::fill_bytes_via_next(self, dst)
            }
        }
    };
}

/// Implements `SeedableRng` for a non-cryptographic engine whose only
/// constructor input is a `u64` seed.
macro_rules! impl_seedable_u64 {
    ($engine:ty) => {
        impl rand_core::SeedableRng for $engine {
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

        impl Default for $engine {
            /// Seeds the engine from the build-time fallback seed.
            ///
            /// Not suitable for anything that must be unpredictable.
            fn default() -> Self {
                trace!("seeding {} from the build seed", stringify!($engine));
                Self::new($crate::utils::default_seed())
            }
        }
    };
}

pub(crate) use impl_rng_core;
pub(crate) use impl_seedable_u64;
