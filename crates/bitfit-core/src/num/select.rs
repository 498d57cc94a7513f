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

//! # Type Selection by Bit Width
//!
//! Resolves a bit width known at compile time to the smallest native integer
//! type that can hold it. `IntThatFits<N>` picks a signed type and
//! `UintThatFits<N>` an unsigned one.
//!
//! The mapping is a table of `SelectInt` implementations on the width marker
//! `Bits<N>`, one per supported width. Every entry is checked against
//! [`WidthBucket::classify`] while the crate compiles, so the table and the
//! runtime classifier cannot drift apart.
//!
//! ```rust
//! # use bitfit_core::num::select::{IntThatFits, UintThatFits};
//! let sample: UintThatFits<12> = 4095;
//! assert_eq!(std::mem::size_of_val(&sample), 2);
//!
//! let wide: IntThatFits<64> = i64::MIN;
//! assert_eq!(wide, i64::MIN);
//! ```
//!
//! Widths without a native type are rejected at build time:
//!
//! ```compile_fail
//! # use bitfit_core::num::select::IntThatFits;
//! let _x: IntThatFits<65> = 0;
//! ```
//!
//! ```compile_fail
//! # use bitfit_core::num::select::UintThatFits;
//! let _x: UintThatFits<0> = 0;
//! ```

use crate::num::limits::IntRange;
use crate::num::width::{IntKind, Signedness, WidthBucket};

/// A zero-sized marker carrying a requested bit width in its type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bits<const N: u32>;

impl<const N: u32> Bits<N> {
    /// The requested width.
    pub const BITS: u32 = N;
}

/// Maps a width marker to the native integer types that cover it.
///
/// Implemented for `Bits<1>` through `Bits<64>`.
#[diagnostic::on_unimplemented(
    message = "no native integer type fits the requested width `{Self}`",
    label = "no native integer type fits the requested width",
    note = "native integer types cover widths of 1 to 64 bits"
)]
pub trait SelectInt {
    /// The smallest signed type with at least `N` bits.
    type Signed: IntRange + Copy + 'static;
    /// The smallest unsigned type with at least `N` bits.
    type Unsigned: IntRange + Copy + 'static;

    /// The width bucket the request rounds up to.
    const BUCKET: WidthBucket;

    /// Runtime descriptor of [`SelectInt::Signed`].
    const SIGNED_KIND: IntKind = IntKind::select(Self::BUCKET, Signedness::Signed);

    /// Runtime descriptor of [`SelectInt::Unsigned`].
    const UNSIGNED_KIND: IntKind = IntKind::select(Self::BUCKET, Signedness::Unsigned);
}

/// The smallest signed native integer type with at least `N` bits.
pub type IntThatFits<const N: u32> = <Bits<N> as SelectInt>::Signed;

/// The smallest unsigned native integer type with at least `N` bits.
pub type UintThatFits<const N: u32> = <Bits<N> as SelectInt>::Unsigned;

macro_rules! impl_select_int {
    ($bucket:ident => $signed:ty, $unsigned:ty; $($n:literal)+) => {
        $(
            impl SelectInt for Bits<$n> {
                type Signed = $signed;
                type Unsigned = $unsigned;
                const BUCKET: WidthBucket = WidthBucket::$bucket;
            }

            const _: () = assert!(
                matches!(WidthBucket::classify($n), Ok(WidthBucket::$bucket)),
                "selection table disagrees with the width classifier"
            );
        )+
    };
}

impl_select_int!(W8 => i8, u8; 1 2 3 4 5 6 7 8);
impl_select_int!(W16 => i16, u16; 9 10 11 12 13 14 15 16);
impl_select_int!(W32 => i32, u32;
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
impl_select_int!(W64 => i64, u64;
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_signed_selection_boundaries() {
        assert!(same::<IntThatFits<1>, i8>());
        assert!(same::<IntThatFits<8>, i8>());
        assert!(same::<IntThatFits<9>, i16>());
        assert!(same::<IntThatFits<16>, i16>());
        assert!(same::<IntThatFits<17>, i32>());
        assert!(same::<IntThatFits<32>, i32>());
        assert!(same::<IntThatFits<33>, i64>());
        assert!(same::<IntThatFits<64>, i64>());
    }

    #[test]
    fn test_unsigned_selection_boundaries() {
        assert!(same::<UintThatFits<1>, u8>());
        assert!(same::<UintThatFits<8>, u8>());
        assert!(same::<UintThatFits<9>, u16>());
        assert!(same::<UintThatFits<16>, u16>());
        assert!(same::<UintThatFits<17>, u32>());
        assert!(same::<UintThatFits<32>, u32>());
        assert!(same::<UintThatFits<33>, u64>());
        assert!(same::<UintThatFits<64>, u64>());
    }

    #[test]
    fn test_selected_type_covers_requested_width() {
        macro_rules! check {
            ($($n:literal)+) => {
                $(
                    assert!(std::mem::size_of::<IntThatFits<$n>>() * 8 >= $n);
                    assert!(std::mem::size_of::<UintThatFits<$n>>() * 8 >= $n);
                    assert_eq!(
                        std::mem::size_of::<IntThatFits<$n>>(),
                        <Bits<$n> as SelectInt>::BUCKET.bytes()
                    );
                )+
            };
        }
        check!(1 5 8 9 12 16 17 24 31 32 33 40 48 63 64);
    }

    #[test]
    fn test_selection_kinds_match_runtime_descriptor() {
        assert_eq!(<Bits<12> as SelectInt>::SIGNED_KIND, IntKind::I16);
        assert_eq!(<Bits<12> as SelectInt>::UNSIGNED_KIND, IntKind::U16);
        assert_eq!(
            Some(<Bits<48> as SelectInt>::UNSIGNED_KIND),
            IntKind::fitting(48, Signedness::Unsigned).ok()
        );
    }

    #[test]
    fn test_selected_type_limits() {
        assert_eq!(<IntThatFits<7> as IntRange>::MIN, -128);
        assert_eq!(<UintThatFits<20> as IntRange>::MAX, 4_294_967_295);
        assert_eq!(Bits::<20>::BITS, 20);
    }
}
