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

//! # Grid Geometry
//!
//! Integer coordinates on a square grid and the four corners of a square.
//!
//! A `Coord` is a `(row, col)` pair, 0-indexed from the top-left cell. It is
//! deliberately signed: translating a reference corner back to a top-left
//! anchor can step outside the grid, and the occupancy checks rely on seeing
//! those negative values rather than a wrapped-around `usize`.
//!
//! ## Reflections
//!
//! - `transpose` reflects across the main diagonal (`(r, c) -> (c, r)`).
//! - `anti_transpose` reflects across the anti-diagonal of an `n x n` grid
//!   (`(r, c) -> (n - 1 - c, n - 1 - r)`).
//!
//! Both are involutions and both keep their respective fixed corners in place,
//! which is what allows a traversal to switch between row-major and
//! column-major order without changing the corner it starts from.

use std::ops::{Add, Sub};

/// A cell position on the grid, 0-indexed from the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Coord {
    /// The row, counted from the top.
    pub row: i32,
    /// The column, counted from the left.
    pub col: i32,
}

impl Coord {
    /// The top-left cell.
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    /// Creates a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from unsigned grid indices.
    ///
    /// # Panics
    ///
    /// Panics if either index does not fit into an `i32`.
    #[inline]
    pub fn from_indices(row: usize, col: usize) -> Self {
        let row = i32::try_from(row).expect("row index must fit into `i32`");
        let col = i32::try_from(col).expect("column index must fit into `i32`");
        Self { row, col }
    }

    /// Returns the row as an unsigned index, or `None` if it is negative.
    #[inline]
    pub fn row_index(&self) -> Option<usize> {
        usize::try_from(self.row).ok()
    }

    /// Returns the column as an unsigned index, or `None` if it is negative.
    #[inline]
    pub fn col_index(&self) -> Option<usize> {
        usize::try_from(self.col).ok()
    }

    /// Returns `true` if the coordinate lies within `[0, side_length)²`.
    #[inline]
    pub fn is_within(&self, side_length: usize) -> bool {
        match (self.row_index(), self.col_index()) {
            (Some(r), Some(c)) => r < side_length && c < side_length,
            _ => false,
        }
    }

    /// Returns the coordinate shifted by `rows` and `cols`.
    #[inline]
    pub const fn offset(self, rows: i32, cols: i32) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }

    /// Reflects the coordinate across the main diagonal.
    #[inline]
    pub const fn transpose(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }

    /// Reflects the coordinate across the anti-diagonal of a
    /// `side_length x side_length` grid.
    #[inline]
    pub fn anti_transpose(self, side_length: usize) -> Self {
        let last = i32::try_from(side_length).expect("side length must fit into `i32`") - 1;
        Self {
            row: last - self.col,
            col: last - self.row,
        }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        self.offset(rhs.row, rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        self.offset(-rhs.row, -rhs.col)
    }
}

/// Translates both axes by the same amount.
impl Add<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: i32) -> Coord {
        self.offset(rhs, rhs)
    }
}

/// Translates both axes by the same amount.
impl Sub<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: i32) -> Coord {
        self.offset(-rhs, -rhs)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four corners of a square region.
///
/// Used both as the start corner of a grid traversal and as the reference
/// corner a square is anchored by while it is being placed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All four corners, in declaration order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Returns `true` for `TopLeft` and `TopRight`.
    #[inline]
    pub const fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Returns `true` for `TopLeft` and `BottomLeft`.
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Returns `true` for the corners that lie on the main diagonal.
    #[inline]
    pub const fn is_on_main_diagonal(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomRight)
    }

    /// Translates this corner of a square with the given side length to the
    /// square's top-left cell.
    #[inline]
    pub const fn to_top_left(self, corner: Coord, side_length: i32) -> Coord {
        let extent = side_length - 1;
        match self {
            Corner::TopLeft => corner,
            Corner::TopRight => corner.offset(0, -extent),
            Corner::BottomLeft => corner.offset(-extent, 0),
            Corner::BottomRight => corner.offset(-extent, -extent),
        }
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Corner::TopLeft => "TopLeft",
            Corner::TopRight => "TopRight",
            Corner::BottomLeft => "BottomLeft",
            Corner::BottomRight => "BottomRight",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_arithmetic_with_coords_and_scalars() {
        assert_eq!(c(1, 2) + c(3, 4), c(4, 6));
        assert_eq!(c(1, 2) - c(3, 4), c(-2, -2));
        assert_eq!(c(1, 2) + 3, c(4, 5));
        assert_eq!(c(1, 2) - 1, c(0, 1));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut coords = vec![c(1, 0), c(0, 2), c(0, 1), c(2, 0)];
        coords.sort();
        assert_eq!(coords, vec![c(0, 1), c(0, 2), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn test_transpose_swaps_axes_and_is_involution() {
        let p = c(1, 3);
        assert_eq!(p.transpose(), c(3, 1));
        assert_eq!(p.transpose().transpose(), p);
    }

    #[test]
    fn test_anti_transpose_keeps_off_diagonal_corners_fixed() {
        let n = 5;
        assert_eq!(c(0, 4).anti_transpose(n), c(0, 4));
        assert_eq!(c(4, 0).anti_transpose(n), c(4, 0));
        assert_eq!(c(0, 3).anti_transpose(n), c(1, 4));
        for r in 0..5 {
            for col in 0..5 {
                let p = c(r, col);
                assert_eq!(p.anti_transpose(n).anti_transpose(n), p);
                assert!(p.anti_transpose(n).is_within(n));
            }
        }
    }

    #[test]
    fn test_is_within_rejects_negative_and_out_of_range() {
        assert!(c(0, 0).is_within(1));
        assert!(!c(-1, 0).is_within(4));
        assert!(!c(0, 4).is_within(4));
        assert!(!c(0, 0).is_within(0));
    }

    #[test]
    fn test_corner_to_top_left() {
        assert_eq!(Corner::TopLeft.to_top_left(c(2, 2), 3), c(2, 2));
        assert_eq!(Corner::TopRight.to_top_left(c(2, 4), 3), c(2, 2));
        assert_eq!(Corner::BottomLeft.to_top_left(c(4, 2), 3), c(2, 2));
        assert_eq!(Corner::BottomRight.to_top_left(c(4, 4), 3), c(2, 2));
        assert_eq!(Corner::BottomRight.to_top_left(c(0, 0), 2), c(-1, -1));
    }

    #[test]
    fn test_corner_predicates() {
        assert!(Corner::TopLeft.is_top() && Corner::TopLeft.is_left());
        assert!(!Corner::BottomRight.is_top() && !Corner::BottomRight.is_left());
        assert!(Corner::BottomRight.is_on_main_diagonal());
        assert!(!Corner::TopRight.is_on_main_diagonal());
    }
}
