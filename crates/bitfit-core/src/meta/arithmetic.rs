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

//! # Arithmetic Type Checks
//!
//! Answers whether a list of types consists only of the primitive integer
//! and floating-point types. There are two forms:
//!
//! - `AllArithmetic`, implemented for tuples of 1 to 12 `Arithmetic` types,
//!   for use as a trait bound. A non-arithmetic member fails the build.
//! - `is_arithmetic::<T>()` and the variadic `all_arithmetic!` macro, which
//!   produce a `bool` for any `'static` type.
//!
//! ```rust
//! use bitfit_core::all_arithmetic;
//! use bitfit_core::meta::arithmetic::AllArithmetic;
//!
//! fn mix<P: AllArithmetic>() -> usize {
//!     P::LEN
//! }
//! assert_eq!(mix::<(i32, f64)>(), 2);
//!
//! assert!(all_arithmetic!(i32, f64));
//! assert!(!all_arithmetic!(i32, String));
//! ```
//!
//! ```compile_fail
//! # use bitfit_core::meta::arithmetic::AllArithmetic;
//! fn mix<P: AllArithmetic>() {}
//! mix::<(i32, &'static str)>();
//! ```

use std::any::TypeId;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer or floating-point type.
///
/// This trait is sealed and cannot be implemented outside of this crate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a primitive arithmetic type",
    note = "only the primitive integer and floating-point types are arithmetic"
)]
pub trait Arithmetic: sealed::Sealed + Copy + PartialOrd + 'static {
    /// `true` for integer types, `false` for floating-point types.
    const IS_INTEGER: bool;
    /// `true` if the type can represent negative values.
    const IS_SIGNED: bool;
    /// Width of the type in bits.
    const BITS: u32;
}

macro_rules! impl_arithmetic_for {
    ($integer:expr, $signed:expr; $($t:ty),+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {
                const IS_INTEGER: bool = $integer;
                const IS_SIGNED: bool = $signed;
                const BITS: u32 = (std::mem::size_of::<$t>() * 8) as u32;
            }
        )+
    };
}

impl_arithmetic_for!(true, true; i8, i16, i32, i64, i128, isize);
impl_arithmetic_for!(true, false; u8, u16, u32, u64, u128, usize);
impl_arithmetic_for!(false, true; f32, f64);

/// A tuple whose members are all [`Arithmetic`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` contains a type that is not a primitive arithmetic type",
    note = "`AllArithmetic` is implemented for tuples of 1 to 12 arithmetic types"
)]
pub trait AllArithmetic {
    /// Number of types in the tuple.
    const LEN: usize;
}

macro_rules! impl_all_arithmetic {
    (@one $t:ident) => { 1 };
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: Arithmetic $(, $tail: Arithmetic)*> AllArithmetic for ($head, $($tail,)*) {
            const LEN: usize = 1 $(+ impl_all_arithmetic!(@one $tail))*;
        }

        impl_all_arithmetic!($($tail),*);
    };
}

impl_all_arithmetic!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Returns `true` if `T` is a primitive integer or floating-point type.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::meta::arithmetic::is_arithmetic;
/// assert!(is_arithmetic::<u16>());
/// assert!(is_arithmetic::<f32>());
/// assert!(!is_arithmetic::<bool>());
/// assert!(!is_arithmetic::<str>());
/// ```
pub fn is_arithmetic<T>() -> bool
where
    T: ?Sized + 'static,
{
    let id = TypeId::of::<T>();
    [
        TypeId::of::<i8>(),
        TypeId::of::<i16>(),
        TypeId::of::<i32>(),
        TypeId::of::<i64>(),
        TypeId::of::<i128>(),
        TypeId::of::<isize>(),
        TypeId::of::<u8>(),
        TypeId::of::<u16>(),
        TypeId::of::<u32>(),
        TypeId::of::<u64>(),
        TypeId::of::<u128>(),
        TypeId::of::<usize>(),
        TypeId::of::<f32>(),
        TypeId::of::<f64>(),
    ]
    .contains(&id)
}

/// Returns `true` if every listed type is a primitive integer or
/// floating-point type.
///
/// The first type is checked and conjoined with the check over the rest.
///
/// # Examples
///
/// ```rust
/// # use bitfit_core::all_arithmetic;
/// assert!(all_arithmetic!(u8));
/// assert!(all_arithmetic!(i32, f64, usize));
/// assert!(!all_arithmetic!(i32, char));
/// ```
#[macro_export]
macro_rules! all_arithmetic {
    ($head:ty $(,)?) => {
        $crate::meta::arithmetic::is_arithmetic::<$head>()
    };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        $crate::meta::arithmetic::is_arithmetic::<$head>() && $crate::all_arithmetic!($($rest),+)
    };
}
