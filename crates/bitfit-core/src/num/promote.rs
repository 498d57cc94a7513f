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

//! # Promotion
//!
//! Widening of a numeric value to the next type that holds every value of
//! the source without loss. Arithmetic that may overflow the source type,
//! such as the product of two `i16`, can be carried out on the promoted type
//! instead.
//!
//! | Source | Promoted |
//! |--------|----------|
//! | `i8`   | `i16`    |
//! | `u8`   | `u16`    |
//! | `i16`  | `i32`    |
//! | `u16`  | `u32`    |
//! | `i32`  | `i64`    |
//! | `u32`  | `u64`    |
//! | `i64`  | `i128`   |
//! | `u64`  | `u128`   |
//! | `f32`  | `f32`    |
//! | `f64`  | `f64`    |
//!
//! A promotion moves exactly one level. Apply it again for more headroom.

/// A numeric type with a lossless wider counterpart.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::promote::Promote;
/// let a: i16 = 30_000;
/// let b: i16 = 30_000;
/// assert_eq!(a.promote() * b.promote(), 900_000_000i32);
/// ```
pub trait Promote: Copy {
    /// The type every value of `Self` widens to.
    type Promoted: From<Self> + Copy;

    /// Widens `self` without changing its value.
    #[inline(always)]
    fn promote(self) -> Self::Promoted {
        <Self::Promoted as From<Self>>::from(self)
    }
}

/// The promoted counterpart of `T`.
pub type Promoted<T> = <T as Promote>::Promoted;

macro_rules! impl_promote_for {
    ($src:ty => $dst:ty) => {
        impl Promote for $src {
            type Promoted = $dst;
        }
    };
}

impl_promote_for!(i8 => i16);
impl_promote_for!(u8 => u16);
impl_promote_for!(i16 => i32);
impl_promote_for!(u16 => u32);
impl_promote_for!(i32 => i64);
impl_promote_for!(u32 => u64);
impl_promote_for!(i64 => i128);
impl_promote_for!(u64 => u128);
impl_promote_for!(f32 => f32);
impl_promote_for!(f64 => f64);

/// Widens `value` one level. See [`Promote`].
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::num::promote::promote;
/// let wide = promote(u8::MAX) + 1;
/// assert_eq!(wide, 256u16);
/// ```
#[inline(always)]
pub fn promote<T: Promote>(value: T) -> Promoted<T> {
    value.promote()
}
