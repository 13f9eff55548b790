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

//! The occupancy matrix squares are packed into.
//!
//! A `Grid` records, per cell, whether it is occupied and which colors its
//! fill and border layers render with. The layers are stored as flat arrays
//! indexed `row * side_length + col`; occupancy is a bitset so that the
//! footprint tests in the hot placement loop stay cheap.
//!
//! The only mutating operation is [`Grid::fill_area`] (and the corner-anchored
//! wrappers around it). It performs the footprint test and the write within a
//! single `&mut self` call, so no other reader or writer can observe the grid
//! between the two.

use crate::{error::GridError, square::Square};
use fixedbitset::FixedBitSet;
use quadrille_core::{
    color::Rgba,
    geometry::{Coord, Corner},
};

/// A snapshot of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub occupied: bool,
    pub fill_color: Option<Rgba>,
    pub border_color: Option<Rgba>,
}

/// A fixed-size `N x N` occupancy matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side_length: usize,
    occupied: FixedBitSet,
    fill: Vec<Option<Rgba>>,
    border: Vec<Option<Rgba>>,
}

impl Grid {
    /// Creates a grid with every cell unoccupied.
    pub fn new(side_length: usize) -> Result<Self, GridError> {
        let Some(area) = side_length.checked_mul(side_length).filter(|&a| a > 0) else {
            return Err(GridError::InvalidGridSize);
        };
        Ok(Self {
            side_length,
            occupied: FixedBitSet::with_capacity(area),
            fill: vec![None; area],
            border: vec![None; area],
        })
    }

    #[inline]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.side_length * self.side_length
    }

    /// Returns the flat index of `coord`, or `None` if it lies outside the grid.
    #[inline]
    fn index_of(&self, coord: Coord) -> Option<usize> {
        let row = coord.row_index()?;
        let col = coord.col_index()?;
        (row < self.side_length && col < self.side_length).then(|| row * self.side_length + col)
    }

    #[inline]
    fn coord_of(&self, index: usize) -> Coord {
        Coord::from_indices(index / self.side_length, index % self.side_length)
    }

    /// Returns a snapshot of the cell at `coord`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        let index = self.index_of(coord)?;
        Some(Cell {
            occupied: self.occupied.contains(index),
            fill_color: self.fill[index],
            border_color: self.border[index],
        })
    }

    /// Returns `true` if `coord` lies inside the grid and is occupied.
    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.index_of(coord)
            .is_some_and(|index| self.occupied.contains(index))
    }

    /// Returns `true` if every cell of the `side_length x side_length`
    /// footprint anchored at `anchor` is inside the grid and unoccupied.
    pub fn can_place(&self, anchor: Coord, side_length: usize) -> bool {
        if side_length == 0 || side_length > self.side_length {
            return false;
        }
        let extent = (side_length - 1) as i32;
        if !anchor.is_within(self.side_length)
            || !anchor.offset(extent, extent).is_within(self.side_length)
        {
            return false;
        }

        // Both corners are in bounds, so the indices below are too.
        let top = anchor.row as usize;
        let left = anchor.col as usize;
        (top..top + side_length).all(|row| {
            let start = row * self.side_length + left;
            (start..start + side_length).all(|index| !self.occupied.contains(index))
        })
    }

    /// Occupies the footprint anchored at `anchor` and paints it with `color`.
    ///
    /// The border layer is only painted for squares larger than `1 x 1`.
    /// Returns `false` without touching the grid if the footprint does not fit.
    pub fn fill_area(&mut self, anchor: Coord, side_length: usize, color: Rgba) -> bool {
        if !self.can_place(anchor, side_length) {
            return false;
        }

        let top = anchor.row as usize;
        let left = anchor.col as usize;
        let border = (side_length > 1).then_some(color);
        for row in top..top + side_length {
            let start = row * self.side_length + left;
            for index in start..start + side_length {
                self.occupied.insert(index);
                self.fill[index] = Some(color);
                if border.is_some() {
                    self.border[index] = border;
                }
            }
        }
        true
    }

    /// Places `square` with its top-left cell at `anchor`.
    #[inline]
    pub fn fill(&mut self, anchor: Coord, square: &Square) -> bool {
        self.fill_area(anchor, square.side_length(), square.color())
    }

    /// Places `square` so that its `corner` cell lands on `reference`.
    ///
    /// Returns the square's top-left anchor on success.
    #[inline]
    pub fn fill_by_corner(
        &mut self,
        corner: Corner,
        reference: Coord,
        square: &Square,
    ) -> Option<Coord> {
        let anchor = corner.to_top_left(reference, square.side_length() as i32);
        self.fill(anchor, square).then_some(anchor)
    }

    #[inline]
    pub fn fill_by_top_left(&mut self, top_left: Coord, square: &Square) -> Option<Coord> {
        self.fill_by_corner(Corner::TopLeft, top_left, square)
    }

    #[inline]
    pub fn fill_by_top_right(&mut self, top_right: Coord, square: &Square) -> Option<Coord> {
        self.fill_by_corner(Corner::TopRight, top_right, square)
    }

    #[inline]
    pub fn fill_by_bottom_left(&mut self, bottom_left: Coord, square: &Square) -> Option<Coord> {
        self.fill_by_corner(Corner::BottomLeft, bottom_left, square)
    }

    #[inline]
    pub fn fill_by_bottom_right(&mut self, bottom_right: Coord, square: &Square) -> Option<Coord> {
        self.fill_by_corner(Corner::BottomRight, bottom_right, square)
    }

    /// All cells matching `predicate`, in row-major order.
    pub fn filter<F>(&self, mut predicate: F) -> Vec<Coord>
    where
        F: FnMut(&Cell) -> bool,
    {
        (0..self.area())
            .filter_map(|index| {
                let coord = self.coord_of(index);
                let cell = self.cell(coord)?;
                predicate(&cell).then_some(coord)
            })
            .collect()
    }

    /// All unoccupied cells, in row-major order.
    pub fn free_cells(&self) -> Vec<Coord> {
        self.occupied
            .zeroes()
            .map(|index| self.coord_of(index))
            .collect()
    }

    /// Number of unoccupied cells.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.area() - self.occupied.count_ones(..)
    }

    /// Returns `true` if every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_count() == 0
    }
}

/// Renders `#` for occupied and `.` for free cells, one row per line.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.side_length {
            for col in 0..self.side_length {
                let index = row * self.side_length + col;
                let symbol = if self.occupied.contains(index) { '#' } else { '.' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
