//! Word rotation.

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned machine word that engines are allowed to rotate.
///
/// Implemented for `u32` and `u64` only. The trait is sealed, so calling
/// [`rotate_left`] on any other width fails to compile.
pub trait Rotate: Copy + sealed::Sealed {
    /// Width of the word in bits.
    const BITS: u32;

    /// Rotates `self` left by `k` positions.
    fn rotl(self, k: u32) -> Self;
}

impl Rotate for u32 {
    const BITS: u32 = u32::BITS;

    #[inline(always)]
    fn rotl(self, k: u32) -> Self {
        self.rotate_left(k)
    }
}

impl Rotate for u64 {
    const BITS: u32 = u64::BITS;

    #[inline(always)]
    fn rotl(self, k: u32) -> Self {
        self.rotate_left(k)
    }
}

/// Rotates `x` left by `k` bit positions.
///
/// The rotation amount is taken modulo the word width, so rotating by the
/// full width (or zero) returns `x` unchanged.
///
/// ```
/// use rngkit::utils::rotate_left;
///
/// assert_eq!(rotate_left(0b1u64, 1), 0b10);
/// assert_eq!(rotate_left(0x8000_0000u32, 1), 1);
/// ```
#[inline(always)]
pub fn rotate_left<T: Rotate>(x: T, k: u32) -> T {
    x.rotl(k % T::BITS)
}
