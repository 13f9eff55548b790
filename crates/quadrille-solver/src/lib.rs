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

//! # Quadrille Solver
//!
//! The time-budgeted retry controller around the single-attempt placers of
//! `quadrille-search`.
//!
//! ## Modules
//!
//! - `solver`: `Solver` and `SolverBuilder`, which shuffle the request, draw a
//!   random traversal strategy and retry until a placement succeeds or the
//!   budget runs out, then make one deterministic fallback attempt. Also
//!   hosts the convenience function `place_with_retry`.
//!
//! A retrying search never fails. When nothing fits, the outcome carries a
//! grid made entirely of filler squares and a `Degraded` termination reason.

pub mod solver;
