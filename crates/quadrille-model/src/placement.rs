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

use crate::{error::PlacementError, square::Square};
use fixedbitset::FixedBitSet;
use quadrille_core::geometry::Coord;
use rustc_hash::FxHashMap;

/// The result of a placement: every placed square keyed by its top-left anchor.
///
/// A placement produced by a successful engine run covers every cell of the
/// grid exactly once, with leftover cells filled by `1 x 1` squares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    side_length: usize,
    squares: FxHashMap<Coord, Square>,
}

impl Placement {
    /// Creates an empty placement for a `side_length x side_length` grid.
    #[inline]
    pub fn new(side_length: usize) -> Self {
        Self {
            side_length,
            squares: FxHashMap::default(),
        }
    }

    /// Creates an empty placement with room for `capacity` squares.
    #[inline]
    pub fn with_capacity(side_length: usize, capacity: usize) -> Self {
        Self {
            side_length,
            squares: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records `square` at `anchor`, returning the square previously there.
    #[inline]
    pub fn insert(&mut self, anchor: Coord, square: Square) -> Option<Square> {
        self.squares.insert(anchor, square)
    }

    #[inline]
    pub fn get(&self, anchor: Coord) -> Option<&Square> {
        self.squares.get(&anchor)
    }

    #[inline]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Number of placed squares, filler included.
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Iterates over `(anchor, square)` pairs in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Coord, &Square)> {
        self.squares.iter()
    }

    /// Returns all `(anchor, square)` pairs sorted by anchor in row-major order.
    pub fn sorted(&self) -> Vec<(Coord, Square)> {
        let mut entries: Vec<(Coord, Square)> =
            self.squares.iter().map(|(a, s)| (*a, *s)).collect();
        entries.sort_unstable_by_key(|(anchor, _)| *anchor);
        entries
    }

    /// Number of squares with the given side length.
    #[inline]
    pub fn count_of_size(&self, side_length: usize) -> usize {
        self.squares
            .values()
            .filter(|s| s.side_length() == side_length)
            .count()
    }

    /// Summed footprint area of all placed squares.
    #[inline]
    pub fn covered_area(&self) -> usize {
        self.squares.values().map(Square::area).sum()
    }

    /// Returns `true` if the footprints add up to the full grid area.
    ///
    /// This is an area check only; see [`Placement::validate`] for the full one.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.grid_area().is_some_and(|area| area > 0 && self.covered_area() == area)
    }

    /// Cell count of the grid, or `None` if it does not fit into a `usize`.
    #[inline]
    fn grid_area(&self) -> Option<usize> {
        self.side_length.checked_mul(self.side_length)
    }

    /// Checks that every footprint lies inside the grid, that no two
    /// footprints overlap, and that together they cover every cell.
    pub fn validate(&self) -> Result<(), PlacementError> {
        let n = self.side_length;
        let Some(area) = self.grid_area() else {
            return Err(PlacementError::Incomplete {
                covered: self.covered_area(),
                area: usize::MAX,
            });
        };
        let mut covered = FixedBitSet::with_capacity(area);

        for (anchor, square) in self.sorted() {
            let extent = square.side_length() as i32 - 1;
            if !anchor.is_within(n) || !anchor.offset(extent, extent).is_within(n) {
                return Err(PlacementError::OutOfBounds {
                    row: anchor.row,
                    col: anchor.col,
                    side_length: square.side_length(),
                });
            }

            let top = anchor.row as usize;
            let left = anchor.col as usize;
            for row in top..top + square.side_length() {
                for col in left..left + square.side_length() {
                    let index = row * n + col;
                    if covered.put(index) {
                        return Err(PlacementError::Overlap {
                            row: row as i32,
                            col: col as i32,
                        });
                    }
                }
            }
        }

        let count = covered.count_ones(..);
        if count != area {
            return Err(PlacementError::Incomplete {
                covered: count,
                area,
            });
        }
        Ok(())
    }

}

impl IntoIterator for Placement {
    type Item = (Coord, Square);
    type IntoIter = std::collections::hash_map::IntoIter<Coord, Square>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}

/// Renders each cell as the side length of the square covering it
/// (`.` for uncovered cells), one row per line.
impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.side_length;
        let Some(area) = self.grid_area() else {
            return writeln!(f, "<{} squares on a {}x{} grid>", self.len(), n, n);
        };
        let mut cells = vec!['.'; area];
        for (anchor, square) in &self.squares {
            let symbol = char::from_digit(square.side_length() as u32, 10).unwrap_or('?');
            for dr in 0..square.side_length() as i32 {
                for dc in 0..square.side_length() as i32 {
                    let cell = anchor.offset(dr, dc);
                    if cell.is_within(n) {
                        cells[cell.row as usize * n + cell.col as usize] = symbol;
                    }
                }
            }
        }
        for row in cells.chunks(n.max(1)) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
