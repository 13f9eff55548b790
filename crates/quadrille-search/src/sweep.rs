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

//! The cursor-advance placement engine.
//!
//! Squares are seated one after another in the order given. For each square
//! the engine walks the traversal from a cursor, anchoring the square by the
//! strategy's start corner at each visited cell, and keeps the first fit. The
//! cursor then moves to the cell after the one that fit; it never moves back,
//! so positions skipped by an earlier square are never revisited. Cells left
//! free at the end become `1 x 1` filler squares.
//!
//! The engine holds no randomness: the same side length, square order and
//! strategy always yield the same placement.

use crate::{
    placer::{Placer, backfill},
    traversal::TraversalStrategy,
};
use quadrille_core::color::Rgba;
use quadrille_model::{error::PackingError, grid::Grid, placement::Placement, square::Square};

/// Single-pass greedy placer over a traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepPlacer;

impl SweepPlacer {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the placement on a caller-provided grid.
    ///
    /// On success the grid is fully occupied and the returned placement covers
    /// it. On failure the grid holds whatever was seated before the failing
    /// square and must be discarded.
    pub fn place_on(
        &self,
        grid: &mut Grid,
        squares: &[Square],
        strategy: TraversalStrategy,
        filler: Rgba,
    ) -> Result<Placement, PackingError> {
        let side_length = grid.side_length();
        let area = grid.area();
        let mut placement = Placement::with_capacity(side_length, squares.len() + area / 2);
        let mut cursor = 0;

        for (square_index, square) in squares.iter().enumerate() {
            let seated = (cursor..area).find_map(|position| {
                let reference = strategy.coord_at(position, side_length);
                grid.fill_by_corner(strategy.corner, reference, square)
                    .map(|anchor| (position, anchor))
            });

            let Some((position, anchor)) = seated else {
                return Err(PackingError::PackingFailed {
                    square_index,
                    side_length: square.side_length(),
                });
            };

            placement.insert(anchor, *square);
            cursor = position + 1;
        }

        backfill(grid, &mut placement, filler);
        Ok(placement)
    }
}

impl Placer for SweepPlacer {
    fn name(&self) -> &str {
        "SweepPlacer"
    }

    fn place(
        &mut self,
        side_length: usize,
        squares: &[Square],
        strategy: TraversalStrategy,
        filler: Rgba,
    ) -> Result<Placement, PackingError> {
        let mut grid = Grid::new(side_length)?;
        self.place_on(&mut grid, squares, strategy, filler)
    }
}

/// Places `squares` in order on a fresh grid with the sweep engine.
///
/// # Examples
///
/// ```rust
/// use quadrille_core::color::Rgba;
/// use quadrille_model::square::Square;
/// use quadrille_search::{sweep::place, traversal::TraversalStrategy};
///
/// let squares = [Square::new(2, Rgba::RED), Square::new(2, Rgba::BLUE)];
/// let placement = place(4, &squares, TraversalStrategy::default(), Rgba::TRANSPARENT).unwrap();
///
/// assert_eq!(placement.count_of_size(2), 2);
/// assert_eq!(placement.count_of_size(1), 8);
/// assert!(placement.validate().is_ok());
/// ```
pub fn place(
    side_length: usize,
    squares: &[Square],
    strategy: TraversalStrategy,
    filler: Rgba,
) -> Result<Placement, PackingError> {
    SweepPlacer.place(side_length, squares, strategy, filler)
}
