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

//! # Typed Compile-Time Constants
//!
//! Zero-sized types that carry an integer value in their type, so the value
//! can travel through APIs that are parameterized by types. Two constants
//! name the same type exactly when both the integer type and the value
//! match.
//!
//! ```rust
//! # use bitfit_core::meta::static_int::{ConstInt, ConstU32};
//! fn channels<C: ConstInt<Value = u32>>() -> u32 {
//!     C::VALUE
//! }
//! assert_eq!(channels::<ConstU32<2>>(), 2);
//! ```
//!
//! Constants with different values are different types:
//!
//! ```compile_fail
//! # use bitfit_core::meta::static_int::ConstI32;
//! let _x: ConstI32<1> = ConstI32::<2>;
//! ```

/// A type that stands for a single integer value.
pub trait ConstInt: Copy + Default + 'static {
    /// The integer type of the value.
    type Value: Copy;

    /// The carried value.
    const VALUE: Self::Value;
}

macro_rules! const_int_type {
    ($(#[$meta:meta])* $name:ident, $t:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<const V: $t>;

        impl<const V: $t> $name<V> {
            /// The carried value.
            pub const VALUE: $t = V;

            /// Returns the carried value.
            #[inline(always)]
            pub const fn get(self) -> $t {
                V
            }
        }

        impl<const V: $t> ConstInt for $name<V> {
            type Value = $t;
            const VALUE: $t = V;
        }

        impl<const V: $t> From<$name<V>> for $t {
            #[inline(always)]
            fn from(_: $name<V>) -> $t {
                V
            }
        }

        impl<const V: $t> std::fmt::Debug for $name<V> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}<{}>", stringify!($name), V)
            }
        }

        impl<const V: $t> std::fmt::Display for $name<V> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", V)
            }
        }
    };
}

const_int_type!(
    /// An `i8` value carried in the type.
    ConstI8, i8
);
const_int_type!(
    /// A `u8` value carried in the type.
    ConstU8, u8
);
const_int_type!(
    /// An `i16` value carried in the type.
    ConstI16, i16
);
const_int_type!(
    /// A `u16` value carried in the type.
    ConstU16, u16
);
const_int_type!(
    /// An `i32` value carried in the type.
    ConstI32, i32
);
const_int_type!(
    /// A `u32` value carried in the type.
    ConstU32, u32
);
const_int_type!(
    /// An `i64` value carried in the type.
    ConstI64, i64
);
const_int_type!(
    /// A `u64` value carried in the type.
    ConstU64, u64
);
const_int_type!(
    /// A machine-word signed value carried in the type.
    ConstIsize, isize
);
const_int_type!(
    /// A machine-word unsigned value carried in the type.
    ConstUsize, usize
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_identical_type_and_value_are_one_type() {
        assert!(same::<ConstI32<7>, ConstI32<7>>());
        assert!(same::<ConstUsize<0>, ConstUsize<0>>());
    }

    #[test]
    fn test_different_value_is_different_type() {
        assert!(!same::<ConstI32<7>, ConstI32<8>>());
        assert!(!same::<ConstU8<0>, ConstU8<255>>());
    }

    #[test]
    fn test_different_integer_type_is_different_type() {
        assert!(!same::<ConstI32<7>, ConstU32<7>>());
        assert!(!same::<ConstI64<7>, ConstIsize<7>>());
        assert!(!same::<ConstU16<1>, ConstU64<1>>());
    }

    #[test]
    fn test_value_access() {
        assert_eq!(ConstI8::<{ -128 }>::VALUE, i8::MIN);
        assert_eq!(<ConstU64<{ u64::MAX }> as ConstInt>::VALUE, u64::MAX);
        assert_eq!(ConstI16::<{ -3 }>.get(), -3);
        assert_eq!(u32::from(ConstU32::<42>), 42);
    }

    #[test]
    fn test_zero_sized() {
        assert_eq!(std::mem::size_of::<ConstI64<{ i64::MAX }>>(), 0);
        assert_eq!(std::mem::size_of::<ConstUsize<4096>>(), 0);
    }

    #[test]
    fn test_generic_consumer() {
        fn doubled<C: ConstInt<Value = i32>>() -> i32 {
            C::VALUE * 2
        }
        assert_eq!(doubled::<ConstI32<21>>(), 42);
        assert_eq!(doubled::<ConstI32<{ -5 }>>(), -10);
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq!(format!("{:?}", ConstU16::<440>), "ConstU16<440>");
        assert_eq!(format!("{}", ConstIsize::<{ -1 }>), "-1");
    }
}
