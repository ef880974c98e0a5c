//! macOS entropy backend.

use libc::{arc4random_buf, c_void};

use crate::error::EntropyError;

/// Fills `buf` with random bytes from `arc4random_buf`, which cannot fail.
pub(super) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
    }

    Ok(())
}
