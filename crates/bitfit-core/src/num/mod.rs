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

//! # Numeric Foundations
//!
//! Integer-centric building blocks that resolve at compile time wherever
//! their inputs are known at compile time.
//!
//! ## Submodules
//!
//! - `width`: Rounds a bit width up to 8, 16, 32 or 64 bits and describes
//!   the native integer types (`WidthBucket`, `Signedness`, `IntKind`).
//! - `select`: Type-level selection of the smallest signed or unsigned type
//!   for a width (`IntThatFits<N>`, `UintThatFits<N>`). Unsupported widths
//!   fail the build.
//! - `limits`: Associated-constant trait `IntRange` with the literal bounds
//!   of each fixed-width integer, plus `int_min`, `int_max`, `int_bounds`.
//! - `promote`: One-level lossless widening (`Promote`) for integers and
//!   floats.
//! - `pow2`: `pow2`, `smallest_pow2`, `is_pow2` and the const-evaluated
//!   `StaticPow2<T, N>`.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod limits;
pub mod pow2;
pub mod promote;
pub mod select;
pub mod width;
