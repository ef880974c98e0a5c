//! Operating system entropy
//!
//! This module provides a unified, platform-independent way to obtain seed
//! material from the operating system. Platform-specific backends are
//! selected at compile time; each exposes the same `sys_random` function.
//!
//! The crate itself never depends on this layer for generation: engines are
//! deterministic state machines. It is only used by [`OsEntropy`], the
//! default entropy source for the cryptographic engines.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
use macos::sys_random;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
use linux::sys_random;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
use windows::sys_random;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn sys_random(_buf: &mut [u8]) -> Result<(), crate::EntropyError> {
    Err(crate::EntropyError::Unsupported)
}

use rand_core::{TryCryptoRng, TryRngCore};

use crate::error::EntropyError;

/// Entropy source backed by the operating system.
///
/// `OsEntropy` supplies uniformly random 32-bit words on demand and is the
/// entropy capability consumed by [`ChaCha20::try_from_os`] and
/// [`AesCtr::try_from_os`]. It holds no state; every call goes to the OS.
///
/// The type implements [`TryRngCore`], so a failed OS call surfaces as an
/// [`EntropyError`] rather than a panic. Wrap it in
/// [`rand_core::UnwrapErr`] where an infallible [`rand_core::RngCore`] is
/// required.
///
/// [`ChaCha20::try_from_os`]: crate::ChaCha20::try_from_os
/// [`AesCtr::try_from_os`]: crate::AesCtr::try_from_os
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    fn fill(buf: &mut [u8]) -> Result<(), EntropyError> {
        let len = buf.len();

        sys_random(buf).inspect_err(|e| {
            error!("os entropy request for {} bytes failed: {}", len, e);
        })
    }
}

impl TryRngCore for OsEntropy {
    type Error = EntropyError;

    fn try_next_u32(&mut self) -> Result<u32, EntropyError> {
        let mut word = [0u8; 4];
        Self::fill(&mut word)?;
        Ok(u32::from_le_bytes(word))
    }

    fn try_next_u64(&mut self) -> Result<u64, EntropyError> {
        let mut word = [0u8; 8];
        Self::fill(&mut word)?;
        Ok(u64::from_le_bytes(word))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill(dst)
    }
}

impl TryCryptoRng for OsEntropy {}
