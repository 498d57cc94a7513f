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

/// A trait for integer types that expose their representable range as
/// associated constants.
///
/// The bounds are written out as literals for each width instead of being
/// read from the platform, so they are the same on every target.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::limits::IntRange;
/// assert_eq!(<i8 as IntRange>::MIN, -128);
/// assert_eq!(<u32 as IntRange>::MAX, 4_294_967_295);
/// ```
pub trait IntRange: Sized {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
}

macro_rules! impl_int_range_for {
    ($t:ty, $min:expr, $max:expr) => {
        impl IntRange for $t {
            const MIN: Self = $min;
            const MAX: Self = $max;
        }
    };
}

impl_int_range_for!(i8, -128, 127);
impl_int_range_for!(u8, 0, 255);
impl_int_range_for!(i16, -32_768, 32_767);
impl_int_range_for!(u16, 0, 65_535);
impl_int_range_for!(i32, -2_147_483_648, 2_147_483_647);
impl_int_range_for!(u32, 0, 4_294_967_295);
impl_int_range_for!(i64, -9_223_372_036_854_775_808, 9_223_372_036_854_775_807);
impl_int_range_for!(u64, 0, 18_446_744_073_709_551_615);

/// The closed range `[min, max]` of an integer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntBounds<T> {
    pub min: T,
    pub max: T,
}

impl<T> IntBounds<T>
where
    T: PartialOrd,
{
    /// Returns `true` if `value` lies within the bounds.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        &self.min <= value && value <= &self.max
    }
}

impl<T> std::fmt::Display for IntBounds<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Returns the largest value of `T`.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::limits::int_max;
/// const LIMIT: u16 = int_max::<u16>();
/// assert_eq!(LIMIT, 65_535);
/// ```
#[inline(always)]
pub const fn int_max<T: IntRange>() -> T {
    T::MAX
}

/// Returns the smallest value of `T`.
#[inline(always)]
pub const fn int_min<T: IntRange>() -> T {
    T::MIN
}

/// Returns both bounds of `T`.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::limits::int_bounds;
/// let b = int_bounds::<i16>();
/// assert_eq!((b.min, b.max), (-32_768, 32_767));
/// assert_eq!(b.to_string(), "[-32768, 32767]");
/// ```
#[inline(always)]
pub const fn int_bounds<T: IntRange>() -> IntBounds<T> {
    IntBounds {
        min: T::MIN,
        max: T::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_match_primitive_constants() {
        assert_eq!(int_bounds::<i8>(), IntBounds { min: i8::MIN, max: i8::MAX });
        assert_eq!(int_bounds::<u8>(), IntBounds { min: u8::MIN, max: u8::MAX });
        assert_eq!(int_bounds::<i16>(), IntBounds { min: i16::MIN, max: i16::MAX });
        assert_eq!(int_bounds::<u16>(), IntBounds { min: u16::MIN, max: u16::MAX });
        assert_eq!(int_bounds::<i32>(), IntBounds { min: i32::MIN, max: i32::MAX });
        assert_eq!(int_bounds::<u32>(), IntBounds { min: u32::MIN, max: u32::MAX });
        assert_eq!(int_bounds::<i64>(), IntBounds { min: i64::MIN, max: i64::MAX });
        assert_eq!(int_bounds::<u64>(), IntBounds { min: u64::MIN, max: u64::MAX });
    }

    #[test]
    fn test_min_not_above_max() {
        assert!(int_min::<i8>() <= int_max::<i8>());
        assert!(int_min::<u8>() <= int_max::<u8>());
        assert!(int_min::<i32>() <= int_max::<i32>());
        assert!(int_min::<u64>() <= int_max::<u64>());
    }

    #[test]
    fn test_i8_bounds_share_one_type() {
        // Both bounds must be i8 so generic code sees a uniform type.
        let min: i8 = <i8 as IntRange>::MIN;
        let max: i8 = <i8 as IntRange>::MAX;
        assert_eq!(min, -128);
        assert_eq!(max, 127);
        assert_eq!(i16::from(max) - i16::from(min), 255);
    }

    #[test]
    fn test_documented_literals() {
        assert_eq!(int_max::<u32>(), 4_294_967_295);
        assert_eq!(int_min::<u32>(), 0);
        assert_eq!(int_min::<i32>(), -2_147_483_648);
        assert_eq!(int_max::<u16>(), 65_535);
    }

    #[test]
    fn test_bounds_contains() {
        let b = int_bounds::<i8>();
        assert!(b.contains(&-128));
        assert!(b.contains(&0));
        assert!(b.contains(&127));

        let wide = IntBounds { min: -5i32, max: 5 };
        assert!(!wide.contains(&6));
        assert!(!wide.contains(&-6));
    }

    #[test]
    fn test_bounds_usable_in_const_context() {
        const BOUNDS: IntBounds<u8> = int_bounds::<u8>();
        assert_eq!(BOUNDS.max, 255);
        assert_eq!(format!("{}", BOUNDS), "[0, 255]");
    }
}
