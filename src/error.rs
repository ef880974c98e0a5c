//! Error types.
//!
//! Engines and samplers never fail. The only fallible operation in the
//! crate is pulling seed material from the operating system.

use thiserror::Error;

/// Errors raised while reading operating system entropy.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The OS entropy call failed with an I/O error.
    #[error("operating system entropy source failed: {0}")]
    Os(#[from] std::io::Error),

    /// The OS entropy call returned a non-zero status code.
    #[error("operating system entropy source returned status {0:#x}")]
    Status(i32),

    /// No entropy backend exists for this target.
    #[error("no operating system entropy source on this target")]
    Unsupported,
}
