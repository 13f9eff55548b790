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

//! Sweep orders over the grid.
//!
//! A `TraversalStrategy` maps a linear scan position `0..N²` to a grid
//! coordinate. The mapping is pure and stateless, so every one of the 16
//! combinations can be checked in isolation.
//!
//! The sweep always advances line by line away from the start corner. In
//! `Parallel` mode every line runs in the same direction; in `Serpentine` mode
//! the direction flips on every other line (boustrophedon). Setting
//! `transposed` reflects the row-major sweep across the diagonal through the
//! start corner, which turns it into a column-major sweep from that same corner.

use quadrille_core::geometry::{Coord, Corner};
use rand::Rng;

/// Direction pattern of the lines within a sweep.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum SweepMode {
    /// Every line is swept in the same direction.
    #[default]
    Parallel,
    /// Alternate lines are swept in opposite directions.
    Serpentine,
}

impl SweepMode {
    pub const ALL: [SweepMode; 2] = [SweepMode::Parallel, SweepMode::Serpentine];
}

impl std::fmt::Display for SweepMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepMode::Parallel => write!(f, "Parallel"),
            SweepMode::Serpentine => write!(f, "Serpentine"),
        }
    }
}

/// A start corner, a sweep mode, and whether lines run along columns.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TraversalStrategy {
    pub corner: Corner,
    pub sweep: SweepMode,
    pub transposed: bool,
}

impl Default for TraversalStrategy {
    /// Row-major from the top-left corner.
    fn default() -> Self {
        Self::new(Corner::TopLeft, SweepMode::Parallel, false)
    }
}

impl TraversalStrategy {
    #[inline]
    pub const fn new(corner: Corner, sweep: SweepMode, transposed: bool) -> Self {
        Self {
            corner,
            sweep,
            transposed,
        }
    }

    /// All 16 strategies.
    pub fn all() -> impl Iterator<Item = TraversalStrategy> {
        Corner::ALL.into_iter().flat_map(|corner| {
            SweepMode::ALL.into_iter().flat_map(move |sweep| {
                [false, true]
                    .into_iter()
                    .map(move |transposed| TraversalStrategy::new(corner, sweep, transposed))
            })
        })
    }

    /// Draws a corner and a sweep mode uniformly, and flips an independent
    /// coin for the transposition.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        let corner = Corner::ALL[rng.random_range(0..Corner::ALL.len())];
        let sweep = SweepMode::ALL[rng.random_range(0..SweepMode::ALL.len())];
        let transposed = rng.random_bool(0.5);
        Self::new(corner, sweep, transposed)
    }

    /// Returns the coordinate visited at `position` of the sweep.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `position` is not within `0..side_length²`.
    #[inline]
    pub fn coord_at(&self, position: usize, side_length: usize) -> Coord {
        traverse(position, side_length, *self)
    }

    /// Iterates over every cell of a `side_length` grid in sweep order.
    #[inline]
    pub fn sweep(&self, side_length: usize) -> Traversal {
        Traversal {
            strategy: *self,
            side_length,
            next: 0,
            end: side_length * side_length,
        }
    }
}

impl std::fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.corner, self.sweep)?;
        if self.transposed {
            write!(f, "/transposed")?;
        }
        Ok(())
    }
}

/// Maps a linear scan position to a grid coordinate under `strategy`.
pub fn traverse(position: usize, side_length: usize, strategy: TraversalStrategy) -> Coord {
    debug_assert!(
        position < side_length * side_length,
        "called `traverse` with position out of bounds: the area is {} but the position is {}",
        side_length * side_length,
        position
    );

    let left_to_right = position % side_length;
    let right_to_left = side_length - left_to_right - 1;
    let top_to_bottom = position / side_length;
    let bottom_to_top = side_length - top_to_bottom - 1;

    let from_left = strategy.corner.is_left();
    let row = if strategy.corner.is_top() {
        top_to_bottom
    } else {
        bottom_to_top
    };
    let col = match strategy.sweep {
        SweepMode::Parallel if from_left => left_to_right,
        SweepMode::Parallel => right_to_left,
        SweepMode::Serpentine => {
            // The first line leaves the corner; every other line comes back.
            if (top_to_bottom % 2 == 0) == from_left {
                left_to_right
            } else {
                right_to_left
            }
        }
    };

    let coord = Coord::from_indices(row, col);
    match (strategy.transposed, strategy.corner.is_on_main_diagonal()) {
        (false, _) => coord,
        (true, true) => coord.transpose(),
        (true, false) => coord.anti_transpose(side_length),
    }
}

/// Iterator over the cells of a grid in sweep order.
#[derive(Debug, Clone)]
pub struct Traversal {
    strategy: TraversalStrategy,
    side_length: usize,
    next: usize,
    end: usize,
}

impl Iterator for Traversal {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.end {
            return None;
        }
        let coord = traverse(self.next, self.side_length, self.strategy);
        self.next += 1;
        Some(coord)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Traversal {}

impl std::iter::FusedIterator for Traversal {}
