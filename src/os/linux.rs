//! Linux entropy backend over `getrandom(2)`.

use std::io;

use libc::{c_void, getrandom};

use crate::error::EntropyError;

/// Fills `buf` with random bytes from the kernel.
///
/// Partial reads and `EINTR` are retried until the whole buffer is filled.
pub(super) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(EntropyError::Os(err));
        }

        filled += ret as usize;
    }

    Ok(())
}
