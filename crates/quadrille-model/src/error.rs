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

//! Error types for the quadrille model and the layers built on it.

use thiserror::Error;

/// Errors raised when constructing a grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The grid must have at least one cell, and its cell count must fit into
    /// a `usize`.
    #[error("invalid grid size: side length must be positive with a representable area")]
    InvalidGridSize,
}

/// Errors raised when constructing a square.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareError {
    /// The side length is outside `1..=MAX_SIDE_LENGTH`.
    #[error("invalid square side length {side_length}: expected 1..={max}")]
    InvalidSideLength { side_length: usize, max: usize },
}

/// Errors raised by a single placement attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingError {
    /// The grid side length is zero or its area overflows a `usize`.
    #[error("invalid grid size: side length must be positive with a representable area")]
    InvalidGridSize,

    /// The summed footprint of the requested squares exceeds the grid area.
    #[error("over capacity: requested area {requested} exceeds grid area {available}")]
    OverCapacity { requested: usize, available: usize },

    /// A square exhausted every remaining position without fitting.
    #[error("packing failed: square #{square_index} of side length {side_length} did not fit")]
    PackingFailed {
        square_index: usize,
        side_length: usize,
    },
}

impl From<GridError> for PackingError {
    #[inline]
    fn from(error: GridError) -> Self {
        match error {
            GridError::InvalidGridSize => PackingError::InvalidGridSize,
        }
    }
}

/// Violations found when validating a placement against the grid invariants.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A square's footprint leaves the grid.
    #[error("square anchored at ({row}, {col}) with side length {side_length} leaves the grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        side_length: usize,
    },

    /// Two footprints share a cell.
    #[error("cell ({row}, {col}) is covered by more than one square")]
    Overlap { row: i32, col: i32 },

    /// The footprints do not cover the whole grid.
    #[error("placement covers {covered} of {area} cells")]
    Incomplete { covered: usize, area: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_converts_to_packing_error() {
        assert_eq!(
            PackingError::from(GridError::InvalidGridSize),
            PackingError::InvalidGridSize
        );
    }

    #[test]
    fn test_messages_name_the_offending_values() {
        let e = PackingError::OverCapacity {
            requested: 9,
            available: 4,
        };
        assert_eq!(
            e.to_string(),
            "over capacity: requested area 9 exceeds grid area 4"
        );

        let e = PackingError::PackingFailed {
            square_index: 2,
            side_length: 3,
        };
        assert!(e.to_string().contains("#2"));
    }
}
