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

//! # Quadrille Model
//!
//! **The domain model for square packing.**
//!
//! This crate defines the data the placement engines work on and the data they
//! hand back. It knows nothing about traversal orders or retry policies.
//!
//! ## Architecture
//!
//! * **`square`**: The immutable `Square` value (side length `1..=5` and a color).
//! * **`counts`**: `SquareCounts`, the requested multiset of squares by size.
//! * **`palette`**: `Palette` (per-size colors plus the filler color) and the
//!   injectable `ColorSource` trait.
//! * **`grid`**: The `Grid` occupancy matrix with its atomic check-and-fill.
//! * **`placement`**: `Placement`, the anchor-to-square result mapping.
//! * **`error`**: Error types shared by all layers.
//!
//! ## Design Philosophy
//!
//! 1.  **Exclusive mutation**: the only way to change a `Grid` is `fill`, which
//!     takes `&mut self` and performs the occupancy test and the write in one call.
//! 2.  **Memory Layout**: the grid stores its per-cell layers as flat arrays
//!     (occupancy bitset, fill colors, border colors) rather than an array of cells.
//! 3.  **Fail-Fast**: invalid sizes are rejected by constructors before any
//!     placement attempt runs.

pub mod counts;
pub mod error;
pub mod grid;
pub mod palette;
pub mod placement;
pub mod square;
