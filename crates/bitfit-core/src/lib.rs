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

//! # Bitfit Core
//!
//! Compile-time integer utilities for numeric and signal-processing code.
//! The crate picks integer types by bit width, exposes their ranges, widens
//! values safely, computes powers of two, and carries integer values in
//! types.
//!
//! ## Modules
//!
//! - `num`: Width classification (`WidthBucket`, `IntKind`), type selection
//!   by width (`IntThatFits<N>`, `UintThatFits<N>`), range constants
//!   (`IntRange`), lossless promotion (`Promote`) and power-of-two helpers
//!   (`pow2`, `smallest_pow2`, `is_pow2`, `StaticPow2`).
//! - `meta`: Typed compile-time constants (`ConstI32<V>` and friends) and
//!   arithmetic type checks (`Arithmetic`, `AllArithmetic`,
//!   `all_arithmetic!`).
//!
//! ## Purpose
//!
//! Fixed-point and sample-format code needs integer types chosen from a
//! required precision rather than spelled out by hand. Requests that no
//! native type can satisfy are rejected while compiling, never at run time.
//!
//! ```rust
//! use bitfit_core::num::{limits::IntRange, promote::Promote, select::IntThatFits};
//!
//! type Sample = IntThatFits<24>;
//! let peak: Sample = <Sample as IntRange>::MAX;
//! assert_eq!(peak.promote() * 2, 4_294_967_294i64);
//! ```

pub mod meta;
pub mod num;
