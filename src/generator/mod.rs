//! Sampling layer
//!
//! Turns raw 64-bit engine output into typed values. Everything here is
//! generic over [`Engine`](crate::Engine) and works with any engine in the
//! crate (or any user type implementing the trait).
//!
//! - [`generate`]: a value over the type's natural domain
//! - [`generate_range`]: a value inside a range
//! - [`unique`] / [`sequence`]: distinct values from a range, lazily or
//!   collected
//!
//! Integer ranges are reduced with a plain modulo. This carries a known bias
//! towards the low end of the range when the span does not divide 2^64;
//! the mapping is kept stable so seeded sequences never change.

mod sample;
mod sequence;

pub use sample::{Sample, generate, generate_range};
pub use sequence::{Unique, sequence, unique};
