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

//! # Quadrille Core
//!
//! Foundational value types for the quadrille square-packing ecosystem. The
//! types here are small, `Copy`, and free of any placement logic, so that the
//! model and search crates can share them without pulling in each other.
//!
//! ## Modules
//!
//! - `geometry`: Integer grid coordinates (`Coord`) with translation and the
//!   two diagonal reflections used to turn row-major sweeps into column-major
//!   ones, plus the four start/anchor corners (`Corner`).
//! - `color`: An 8-bit RGBA color value (`Rgba`) with named constants and
//!   source-over layering and weighted mixing.

pub mod color;
pub mod geometry;
