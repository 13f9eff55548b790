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

use crate::traversal::TraversalStrategy;
use quadrille_core::color::Rgba;
use quadrille_model::{error::PackingError, grid::Grid, placement::Placement, square::Square};

/// A single-attempt placement engine.
///
/// One call to `place` is one attempt: it either seats every square and
/// returns a placement covering the whole grid, or it fails with
/// `PackingError::PackingFailed`. Implementations never return a partial
/// placement and never retry internally.
pub trait Placer {
    /// A short, stable name used in logs.
    fn name(&self) -> &str;

    /// Places `squares` in the given order on a fresh `side_length` grid and
    /// backfills every remaining cell with a `1 x 1` square of color `filler`.
    fn place(
        &mut self,
        side_length: usize,
        squares: &[Square],
        strategy: TraversalStrategy,
        filler: Rgba,
    ) -> Result<Placement, PackingError>;
}

impl std::fmt::Debug for dyn Placer + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Placer({})", self.name())
    }
}

impl std::fmt::Display for dyn Placer + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Placer({})", self.name())
    }
}

impl<P> Placer for Box<P>
where
    P: Placer + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn place(
        &mut self,
        side_length: usize,
        squares: &[Square],
        strategy: TraversalStrategy,
        filler: Rgba,
    ) -> Result<Placement, PackingError> {
        (**self).place(side_length, squares, strategy, filler)
    }
}

/// Covers every free cell of `grid` with a `1 x 1` square of color `filler`
/// and records each one in `placement`. Returns the number of filler squares.
pub fn backfill(grid: &mut Grid, placement: &mut Placement, filler: Rgba) -> usize {
    let square = Square::filler(filler);
    let free = grid.free_cells();
    for &cell in &free {
        let filled = grid.fill(cell, &square);
        debug_assert!(filled, "free cell {} could not be filled", cell);
        placement.insert(cell, square);
    }
    free.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrille_core::geometry::Coord;

    #[test]
    fn test_backfill_covers_grid_and_is_idempotent() {
        let mut grid = Grid::new(3).unwrap();
        let mut placement = Placement::new(3);
        let big = Square::new(2, Rgba::RED);
        assert!(grid.fill(Coord::ORIGIN, &big));
        placement.insert(Coord::ORIGIN, big);

        assert_eq!(backfill(&mut grid, &mut placement, Rgba::TRANSPARENT), 5);
        assert!(grid.is_full());
        assert!(grid.free_cells().is_empty());
        assert_eq!(placement.validate(), Ok(()));

        assert_eq!(backfill(&mut grid, &mut placement, Rgba::TRANSPARENT), 0);
        assert_eq!(placement.len(), 6);
    }

    #[test]
    fn test_backfilled_cells_have_no_border() {
        let mut grid = Grid::new(2).unwrap();
        let mut placement = Placement::new(2);
        backfill(&mut grid, &mut placement, Rgba::WHITE);
        for (anchor, square) in placement.iter() {
            assert!(square.is_unit());
            let cell = grid.cell(*anchor).unwrap();
            assert_eq!(cell.fill_color, Some(Rgba::WHITE));
            assert_eq!(cell.border_color, None);
        }
    }
}
