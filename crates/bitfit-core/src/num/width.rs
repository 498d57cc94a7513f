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

//! # Width Classification
//!
//! Rounds a requested bit width up to the nearest native integer width
//! (8, 16, 32 or 64 bits) and describes the resulting integer type.
//!
//! Everything here is `const`, so the same classifier drives the type-level
//! selection in [`crate::num::select`] and is available at run time when the
//! width is only known dynamically.
//!
//! ```rust
//! # use bitfit_core::num::width::{IntKind, Signedness, WidthBucket};
//! assert_eq!(WidthBucket::classify(12), Ok(WidthBucket::W16));
//! assert_eq!(WidthBucket::classify(64), Ok(WidthBucket::W64));
//! assert!(WidthBucket::classify(0).is_err());
//!
//! let kind = IntKind::fitting(24, Signedness::Unsigned).unwrap();
//! assert_eq!(kind, IntKind::U32);
//! ```

/// One of the native integer widths.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidthBucket {
    W8 = 8,
    W16 = 16,
    W32 = 32,
    W64 = 64,
}

impl WidthBucket {
    /// All buckets in ascending order.
    pub const ALL: [WidthBucket; 4] = [Self::W8, Self::W16, Self::W32, Self::W64];

    /// Rounds `bits` up to the smallest native width that covers it.
    ///
    /// Returns an error for `bits == 0` and for `bits > 64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitfit_core::num::width::WidthBucket;
    /// assert_eq!(WidthBucket::classify(1), Ok(WidthBucket::W8));
    /// assert_eq!(WidthBucket::classify(33), Ok(WidthBucket::W64));
    /// assert!(WidthBucket::classify(65).is_err());
    /// ```
    #[inline]
    pub const fn classify(bits: u32) -> Result<Self, UnsupportedWidthError> {
        match bits {
            1..=8 => Ok(Self::W8),
            9..=16 => Ok(Self::W16),
            17..=32 => Ok(Self::W32),
            33..=64 => Ok(Self::W64),
            _ => Err(UnsupportedWidthError { bits }),
        }
    }

    /// The width of the bucket in bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// The width of the bucket in bytes.
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        (self as u32 / 8) as usize
    }
}

impl std::fmt::Display for WidthBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

/// Whether a selected integer type carries a sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Identifies one of the eight native fixed-width integer types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl IntKind {
    /// Looks up the integer type of the given bucket and signedness.
    #[inline]
    pub const fn select(bucket: WidthBucket, signedness: Signedness) -> Self {
        match (bucket, signedness) {
            (WidthBucket::W8, Signedness::Signed) => Self::I8,
            (WidthBucket::W16, Signedness::Signed) => Self::I16,
            (WidthBucket::W32, Signedness::Signed) => Self::I32,
            (WidthBucket::W64, Signedness::Signed) => Self::I64,
            (WidthBucket::W8, Signedness::Unsigned) => Self::U8,
            (WidthBucket::W16, Signedness::Unsigned) => Self::U16,
            (WidthBucket::W32, Signedness::Unsigned) => Self::U32,
            (WidthBucket::W64, Signedness::Unsigned) => Self::U64,
        }
    }

    /// Returns the smallest native integer type with at least `bits` bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitfit_core::num::width::{IntKind, Signedness};
    /// assert_eq!(IntKind::fitting(7, Signedness::Signed), Ok(IntKind::I8));
    /// assert_eq!(IntKind::fitting(40, Signedness::Unsigned), Ok(IntKind::U64));
    /// assert!(IntKind::fitting(128, Signedness::Signed).is_err());
    /// ```
    #[inline]
    pub const fn fitting(bits: u32, signedness: Signedness) -> Result<Self, UnsupportedWidthError> {
        match WidthBucket::classify(bits) {
            Ok(bucket) => Ok(Self::select(bucket, signedness)),
            Err(e) => Err(e),
        }
    }

    /// The width bucket this type occupies.
    #[inline]
    pub const fn bucket(self) -> WidthBucket {
        match self {
            Self::I8 | Self::U8 => WidthBucket::W8,
            Self::I16 | Self::U16 => WidthBucket::W16,
            Self::I32 | Self::U32 => WidthBucket::W32,
            Self::I64 | Self::U64 => WidthBucket::W64,
        }
    }

    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.bucket().bits()
    }

    #[inline]
    pub const fn signedness(self) -> Signedness {
        match self {
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => Signedness::Signed,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => Signedness::Unsigned,
        }
    }

    #[inline(always)]
    pub const fn is_signed(self) -> bool {
        matches!(self.signedness(), Signedness::Signed)
    }

    /// The Rust spelling of the type, e.g. `"u16"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

impl std::fmt::Display for IntKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// No native integer type covers the requested number of bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnsupportedWidthError {
    /// The rejected width.
    pub bits: u32,
}

impl std::fmt::Display for UnsupportedWidthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no native integer type fits the requested width of {} bits",
            self.bits
        )
    }
}

impl std::error::Error for UnsupportedWidthError {}
