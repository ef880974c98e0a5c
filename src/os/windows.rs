//! Windows entropy backend.

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

use crate::error::EntropyError;

/// Fills `buf` with random bytes from the system-preferred CNG provider.
///
/// `BCryptGenRandom` takes a 32-bit length, so large buffers are filled in
/// chunks.
pub(super) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            return Err(EntropyError::Status(status));
        }
    }

    Ok(())
}
