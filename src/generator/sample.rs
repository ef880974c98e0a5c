//! Typed and ranged sampling.

use core::hash::Hash;

use crate::engine::Engine;

mod sealed {
    pub trait Sealed {}
}

/// A numeric type that can be drawn from an [`Engine`].
///
/// Implemented for the primitive integers up to 64 bits (signed and
/// unsigned, including `usize`/`isize`) and for `f32`/`f64`. The trait is
/// sealed; sampling any other type is a compile error.
pub trait Sample: Copy + sealed::Sealed {
    /// Hashable identity used to detect duplicates.
    #[doc(hidden)]
    type Key: Hash + Eq;

    /// Draws a value over the type's natural domain.
    ///
    /// Integers receive the truncated 64-bit output. Floats land in `[0, 1)`.
    fn sample<E: Engine + ?Sized>(engine: &mut E) -> Self;

    /// Draws a value from `[min, max]` for integers, `[min, max)` for floats.
    fn sample_range<E: Engine + ?Sized>(engine: &mut E, min: Self, max: Self) -> Self;

    /// Upper bound on how many distinct values [`Sample::sample_range`] can
    /// produce for this range, saturated at `usize::MAX`.
    fn distinct_count(min: Self, max: Self) -> usize;

    #[doc(hidden)]
    fn key(self) -> Self::Key;
}

macro_rules! impl_sample_int {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Sample for $ty {
            type Key = $ty;

            #[inline]
            fn sample<E: Engine + ?Sized>(engine: &mut E) -> Self {
                engine.next() as $ty
            }

            /// `min + next() % (max - min + 1)`.
            ///
            /// The reduction is a plain modulo and therefore biased towards
            /// the low end of the range whenever the span does not divide
            /// 2^64. This is kept as is: correcting it would change every
            /// seeded sequence.
            #[inline]
            fn sample_range<E: Engine + ?Sized>(engine: &mut E, min: Self, max: Self) -> Self {
                debug_assert!(min <= max, "empty range {}..={}", min, max);

                // A reversed range collapses to a span of one.
                let span = (max as i128 - min as i128 + 1).max(1) as u128;
                let offset = engine.next() as u128 % span;

                (min as i128 + offset as i128) as $ty
            }

            #[inline]
            fn distinct_count(min: Self, max: Self) -> usize {
                if min > max {
                    return 0;
                }

                let span = (max as i128 - min as i128) as u128 + 1;
                usize::try_from(span).unwrap_or(usize::MAX)
            }

            #[inline]
            fn key(self) -> $ty {
                self
            }
        }
    )*};
}

impl_sample_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_sample_float {
    ($($ty:ident => $bits:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Sample for $ty {
            type Key = $bits;

            /// `next() * (1 / u64::MAX)`, kept strictly below one.
            #[inline]
            fn sample<E: Engine + ?Sized>(engine: &mut E) -> Self {
                const INV_MAX: $ty = 1.0 / u64::MAX as $ty;

                below(engine.next() as $ty * INV_MAX, 1.0)
            }

            /// `min + next() / u64::MAX * (max - min)`, kept strictly below
            /// `max`. Ranges wider than the largest finite value are
            /// interpolated between the bounds instead.
            #[inline]
            fn sample_range<E: Engine + ?Sized>(engine: &mut E, min: Self, max: Self) -> Self {
                debug_assert!(min <= max, "empty range {}..{}", min, max);

                let unit = engine.next() as $ty / u64::MAX as $ty;

                if min >= max {
                    return min;
                }

                let span = max - min;
                let value = if span.is_finite() {
                    min + unit * span
                } else {
                    // The span overflowed; interpolate without forming it.
                    min * (1.0 - unit) + max * unit
                };

                below(value, max)
            }

            /// `ceil((max - min) / EPSILON)`, an estimate of the distinct
            /// values in the range, further capped by the exact number of
            /// floats in `[min, max)` so that ranges far from zero, where the
            /// spacing exceeds `EPSILON`, cannot promise more than they hold.
            #[inline]
            fn distinct_count(min: Self, max: Self) -> usize {
                if min.is_nan() || max.is_nan() || min >= max {
                    return 0;
                }

                let estimate = ((max - min) / <$ty>::EPSILON).ceil() as usize;

                let ordered = |x: $ty| -> $bits {
                    let bits = x.to_bits();
                    if x.is_sign_negative() { !bits } else { bits | (1 << (<$bits>::BITS - 1)) }
                };
                let mut representable = ordered(max) - ordered(min);
                if min.is_sign_negative() && max.is_sign_positive() {
                    // -0.0 never comes out as a value of its own
                    representable -= 1;
                }

                estimate.min(usize::try_from(representable).unwrap_or(usize::MAX))
            }

            /// Bit pattern, with `-0.0` folded onto `0.0`.
            #[inline]
            fn key(self) -> $bits {
                if self == 0.0 { 0 } else { self.to_bits() }
            }
        }

        impl Below for $ty {
            #[inline]
            fn next_down(self) -> Self {
                if self.is_nan() || self == <$ty>::NEG_INFINITY {
                    return self;
                }
                if self == 0.0 {
                    // Smallest negative subnormal
                    return -<$ty>::from_bits(1);
                }

                let bits = self.to_bits();
                if self > 0.0 {
                    <$ty>::from_bits(bits - 1)
                } else {
                    <$ty>::from_bits(bits + 1)
                }
            }
        }
    )*};
}

/// Step to the next representable value towards negative infinity.
trait Below: Copy + PartialOrd {
    fn next_down(self) -> Self;
}

/// Returns `x`, or the largest value strictly below `bound` when rounding
/// pushed `x` onto (or past) it.
#[inline]
fn below<T: Below>(x: T, bound: T) -> T {
    if x < bound { x } else { bound.next_down() }
}

impl_sample_float!(f32 => u32, f64 => u64);

/// Draws a value of type `T` over its natural domain.
///
/// Integers take the truncated 64-bit engine output; floats fall in `[0, 1)`.
///
/// ```
/// use rngkit::{Xoshiro256StarStar, generate};
///
/// let mut rng = Xoshiro256StarStar::new(7);
/// let x: f64 = generate(&mut rng);
/// assert!((0.0..1.0).contains(&x));
/// ```
#[inline]
pub fn generate<T: Sample, E: Engine + ?Sized>(engine: &mut E) -> T {
    T::sample(engine)
}

/// Draws a value of type `T` from a range.
///
/// Integers are drawn from the inclusive range `[min, max]` with a plain
/// modulo reduction, which carries a small bias towards low values when the
/// span does not divide 2^64. Floats are drawn from `[min, max)`.
///
/// `min > max` is a caller bug: it trips a debug assertion and otherwise
/// yields `min`.
#[inline]
pub fn generate_range<T: Sample, E: Engine + ?Sized>(engine: &mut E, min: T, max: T) -> T {
    T::sample_range(engine, min, max)
}
