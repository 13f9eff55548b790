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

//! # Quadrille Search
//!
//! Placement engines and the machinery around them.
//!
//! ## Modules
//!
//! - `traversal`: The 16 sweep orders (start corner x parallel/serpentine x
//!   transposed) as a pure `(position, side_length, strategy) -> Coord` map.
//! - `placer`: The `Placer` trait shared by all engines and the filler backfill.
//! - `sweep`: The primary cursor-advance engine, `SweepPlacer`, and the
//!   convenience function `place`.
//! - `tiered`: `TieredPlacer`, an alternative engine that places size tiers
//!   largest-first at random anchors and backtracks tier by tier.
//! - `monitor`: Lifecycle observers that log progress and enforce budgets.
//! - `clock`: The injectable monotonic `Clock` used by time budgets.
//! - `stats`, `result`: Attempt statistics and the outcome of a search.
//!
//! Nothing in this crate retries on its own; a single `Placer::place` call is
//! one attempt. Retrying lives in `quadrille-solver`.

pub mod clock;
pub mod monitor;
pub mod placer;
pub mod result;
pub mod stats;
pub mod sweep;
pub mod tiered;
pub mod traversal;
