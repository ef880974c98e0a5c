//! Seed expansion and the fallback build seed.

include!(concat!(env!("OUT_DIR"), "/build_seed.rs"));

/// SplitMix64 increment (the 64-bit golden ratio).
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Mixes a 64-bit value into a well-distributed 64-bit output.
///
/// This is a single SplitMix64 step. Engines use it to turn one scalar seed
/// into several independent-looking state words (word `i` receives
/// `mix_seed(seed + i)`). It is not a general-purpose hash.
#[inline]
pub const fn mix_seed(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Returns the seed baked in at build time.
///
/// The value is the number of seconds since midnight at the moment the crate
/// was built (or derived from `SOURCE_DATE_EPOCH` when set). It changes at
/// most once per build and is trivially guessable.
///
/// # Security Notes
/// - This is **not** a source of randomness.
/// - Never use it to seed anything whose output must stay secret; supply
///   entropy explicitly instead (see [`crate::OsEntropy`]).
#[inline]
pub const fn default_seed() -> u64 {
    BUILD_SEED
}

/// Expands `seed` into `N` state words, word `i` being `mix_seed(seed + i)`.
#[inline]
pub(crate) const fn expand<const N: usize>(seed: u64) -> [u64; N] {
    let mut state = [0u64; N];
    let mut i = 0;
    while i < N {
        state[i] = mix_seed(seed.wrapping_add(i as u64));
        i += 1;
    }
    state
}
