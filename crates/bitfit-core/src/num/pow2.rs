// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Powers of Two
//!
//! Exponentiation, rounding up to a power of two, and power-of-two tests
//! for any primitive integer type.
//!
//! The generic functions work on run-time values. [`StaticPow2`] forces the
//! evaluation of `2^N` into a constant; an `N` that overflows the chosen type
//! is then a compile error.
//!
//! ```rust
//! # use bitfit_core::num::pow2::{is_pow2, pow2, smallest_pow2, StaticPow2};
//! assert_eq!(pow2::<u32>(31), 2_147_483_648);
//! assert_eq!(StaticPow2::<u16, 10>::VAL, 1024);
//! assert_eq!(smallest_pow2(9u8), 16);
//! assert!(is_pow2(64u64));
//! ```
//!
//! ```compile_fail
//! # use bitfit_core::num::pow2::StaticPow2;
//! const TOO_BIG: u8 = StaticPow2::<u8, 8>::VAL;
//! ```

use num_traits::PrimInt;

/// Returns `2^n` in the representation type `T`.
///
/// The value is built by doubling from one `n` times. The caller must pick a
/// `T` wide enough for the result: an overflowing doubling behaves like any
/// other overflowing multiplication of `T`.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::pow2::pow2;
/// assert_eq!(pow2::<i64>(0), 1);
/// assert_eq!(pow2::<u8>(7), 128);
/// ```
#[inline]
pub fn pow2<T>(n: u32) -> T
where
    T: PrimInt,
{
    let two = T::one() + T::one();
    let mut value = T::one();
    for _ in 0..n {
        value = value * two;
    }
    value
}

/// Returns the smallest power of two `m` with `m >= n`.
///
/// Any `n <= 1`, including zero and negative values, yields `1`.
///
/// # Panics
///
/// Panics if the result is not representable in `T`, e.g. `smallest_pow2(200u8)`.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::pow2::smallest_pow2;
/// assert_eq!(smallest_pow2(5u32), 8);
/// assert_eq!(smallest_pow2(8u32), 8);
/// assert_eq!(smallest_pow2(0i16), 1);
/// ```
#[inline]
pub fn smallest_pow2<T>(n: T) -> T
where
    T: PrimInt,
{
    let two = T::one() + T::one();
    let mut m = T::one();
    while m < n {
        m = match m.checked_mul(&two) {
            Some(next) => next,
            None => panic!("smallest_pow2: no power of two at least `n` fits in the representation type"),
        };
    }
    m
}

/// Returns `true` if `n` is a positive power of two.
///
/// Zero is not a power of two, nor is any negative value.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::pow2::is_pow2;
/// assert!(is_pow2(1u32));
/// assert!(is_pow2(1024i32));
/// assert!(!is_pow2(0u32));
/// assert!(!is_pow2(6u8));
/// ```
#[inline(always)]
pub fn is_pow2<T>(n: T) -> bool
where
    T: PrimInt,
{
    n > T::zero() && (n & (n - T::one())) == T::zero()
}

/// `2^N` in the representation type `T`, evaluated at compile time.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::pow2::StaticPow2;
/// const MASK_LEN: usize = StaticPow2::<usize, 12>::VAL;
/// assert_eq!(MASK_LEN, 4096);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StaticPow2<T, const N: u32>(std::marker::PhantomData<T>);

macro_rules! impl_static_pow2_for {
    ($($t:ty),+) => {
        $(
            impl<const N: u32> StaticPow2<$t, N> {
                pub const VAL: $t = {
                    let mut value: $t = 1;
                    let mut i = 0;
                    while i < N {
                        value *= 2;
                        i += 1;
                    }
                    value
                };
            }
        )+
    };
}

impl_static_pow2_for!(i8, i16, i32, i64, i128, isize);
impl_static_pow2_for!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow2_base_case() {
        assert_eq!(pow2::<u8>(0), 1);
        assert_eq!(pow2::<i32>(0), 1);
        assert_eq!(pow2::<u128>(0), 1);
    }

    #[test]
    fn test_pow2_doubles() {
        for n in 1..63 {
            assert_eq!(pow2::<u64>(n), 2 * pow2::<u64>(n - 1));
        }
    }

    #[test]
    fn test_pow2_top_bit() {
        assert_eq!(pow2::<u32>(31), 2_147_483_648);
        assert_eq!(pow2::<u64>(63), 1u64 << 63);
        assert_eq!(pow2::<i64>(62), 1i64 << 62);
    }

    #[test]
    fn test_static_pow2_matches_runtime() {
        assert_eq!(StaticPow2::<u32, 31>::VAL, pow2::<u32>(31));
        assert_eq!(StaticPow2::<i8, 6>::VAL, 64);
        assert_eq!(StaticPow2::<u128, 100>::VAL, 1u128 << 100);
        assert_eq!(StaticPow2::<i16, 0>::VAL, 1);
    }

    #[test]
    fn test_smallest_pow2_examples() {
        assert_eq!(smallest_pow2(1u32), 1);
        assert_eq!(smallest_pow2(5u32), 8);
        assert_eq!(smallest_pow2(8u32), 8);
        assert_eq!(smallest_pow2(9u32), 16);
        assert_eq!(smallest_pow2(1000usize), 1024);
    }

    #[test]
    fn test_smallest_pow2_small_inputs() {
        assert_eq!(smallest_pow2(0u8), 1);
        assert_eq!(smallest_pow2(0i32), 1);
        assert_eq!(smallest_pow2(-17i32), 1);
    }

    #[test]
    fn test_smallest_pow2_at_type_limit() {
        assert_eq!(smallest_pow2(128u8), 128);
        assert_eq!(smallest_pow2(65u8), 128);
        assert_eq!(smallest_pow2(i32::MAX / 2), 1 << 30);
    }

    #[test]
    #[should_panic(expected = "no power of two")]
    fn test_smallest_pow2_overflow_panics() {
        let _ = smallest_pow2(200u8);
    }

    #[test]
    #[should_panic(expected = "no power of two")]
    fn test_smallest_pow2_signed_overflow_panics() {
        let _ = smallest_pow2(i8::MAX);
    }

    #[test]
    fn test_is_pow2_true_cases() {
        assert!(is_pow2(1u32));
        assert!(is_pow2(2u32));
        assert!(is_pow2(1024u32));
        assert!(is_pow2(1u64 << 63));
        assert!(is_pow2(64i8));
    }

    #[test]
    fn test_is_pow2_false_cases() {
        assert!(!is_pow2(3u32));
        assert!(!is_pow2(6u32));
        assert!(!is_pow2(u32::MAX));
    }

    #[test]
    fn test_is_pow2_zero_is_not_a_power() {
        // The plain bit trick accepts zero; it is rejected explicitly.
        assert_eq!(0u32 & 0u32.wrapping_sub(1), 0);
        assert!(!is_pow2(0u32));
        assert!(!is_pow2(0i64));
    }

    #[test]
    fn test_is_pow2_negative() {
        assert!(!is_pow2(i8::MIN));
        assert!(!is_pow2(-2i32));
    }

    #[test]
    fn test_results_are_powers() {
        for n in 0..32 {
            assert!(is_pow2(pow2::<u32>(n)));
        }
        for n in 1u16..=4096 {
            let m = smallest_pow2(n);
            assert!(is_pow2(m));
            assert!(m >= n);
            assert!(m / 2 < n);
        }
    }
}
