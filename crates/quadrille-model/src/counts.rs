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

//! The requested multiset of squares.
//!
//! Callers ask for a number of squares per side length `2..=5`. Unit squares
//! are never requested; the engines synthesize them as filler.

use crate::{
    error::PackingError,
    palette::Palette,
    square::{MAX_SIDE_LENGTH, Square},
};

/// The smallest side length a caller may request.
pub const MIN_REQUESTED_SIDE_LENGTH: usize = 2;

const TIERS: usize = MAX_SIDE_LENGTH - MIN_REQUESTED_SIDE_LENGTH + 1;

/// Number of requested squares per side length `2..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareCounts {
    /// `counts[i]` is the number of squares of side length `i + 2`.
    counts: [usize; TIERS],
}

impl SquareCounts {
    /// Creates an empty request.
    #[inline]
    pub const fn new() -> Self {
        Self { counts: [0; TIERS] }
    }

    /// Creates a request from the counts of sizes 5, 4, 3 and 2, in that order.
    #[inline]
    pub const fn from_largest_first(x5: usize, x4: usize, x3: usize, x2: usize) -> Self {
        Self {
            counts: [x2, x3, x4, x5],
        }
    }

    /// Returns a copy with the count for `side_length` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `side_length` is not within `2..=MAX_SIDE_LENGTH`.
    #[inline]
    pub fn with_count(mut self, side_length: usize, count: usize) -> Self {
        self.counts[Self::slot(side_length, "with_count")] = count;
        self
    }

    /// Returns the count for `side_length`, or `0` for sizes that cannot be requested.
    #[inline]
    pub fn count(&self, side_length: usize) -> usize {
        if (MIN_REQUESTED_SIDE_LENGTH..=MAX_SIDE_LENGTH).contains(&side_length) {
            self.counts[side_length - MIN_REQUESTED_SIDE_LENGTH]
        } else {
            0
        }
    }

    /// Total number of requested squares, saturating at `usize::MAX`.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().fold(0_usize, |acc, &n| acc.saturating_add(n))
    }

    /// Returns `true` if no square is requested.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Summed footprint area of all requested squares.
    ///
    /// An area that does not fit into a `usize` is reported as `usize::MAX`,
    /// which no grid can hold.
    #[inline]
    pub fn area(&self) -> usize {
        self.checked_area().unwrap_or(usize::MAX)
    }

    fn checked_area(&self) -> Option<usize> {
        self.counts
            .iter()
            .enumerate()
            .try_fold(0_usize, |acc, (i, &n)| {
                let side = i + MIN_REQUESTED_SIDE_LENGTH;
                n.checked_mul(side * side)
                    .and_then(|footprint| acc.checked_add(footprint))
            })
    }

    /// Checks that the requested squares can fit into a `side_length` grid by area.
    #[inline]
    pub fn check_capacity(&self, side_length: usize) -> Result<(), PackingError> {
        check_capacity(side_length, self.area())
    }

    /// Expands the request into colored squares, largest first.
    pub fn to_squares(&self, palette: &Palette) -> Vec<Square> {
        let mut squares = Vec::with_capacity(self.total());
        for side in (MIN_REQUESTED_SIDE_LENGTH..=MAX_SIDE_LENGTH).rev() {
            let color = palette.color_for(side);
            squares.extend(std::iter::repeat_n(Square::new(side, color), self.count(side)));
        }
        squares
    }

    #[inline]
    fn slot(side_length: usize, caller: &str) -> usize {
        assert!(
            (MIN_REQUESTED_SIDE_LENGTH..=MAX_SIDE_LENGTH).contains(&side_length),
            "called `SquareCounts::{}` with side length out of range: expected {}..={} but got {}",
            caller,
            MIN_REQUESTED_SIDE_LENGTH,
            MAX_SIDE_LENGTH,
            side_length
        );
        side_length - MIN_REQUESTED_SIDE_LENGTH
    }
}

/// Counts in the order the request form lists them: sizes 5, 4, 3, 2.
impl From<[usize; TIERS]> for SquareCounts {
    #[inline]
    fn from([x5, x4, x3, x2]: [usize; TIERS]) -> Self {
        Self::from_largest_first(x5, x4, x3, x2)
    }
}

impl std::fmt::Display for SquareCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "5x5: {}, 4x4: {}, 3x3: {}, 2x2: {}",
            self.count(5),
            self.count(4),
            self.count(3),
            self.count(2)
        )
    }
}

/// Rejects a zero-sized grid, a grid whose area does not fit into a `usize`,
/// and requests whose area exceeds the grid's.
pub fn check_capacity(side_length: usize, requested_area: usize) -> Result<(), PackingError> {
    let Some(available) = side_length.checked_mul(side_length).filter(|&a| a > 0) else {
        return Err(PackingError::InvalidGridSize);
    };
    if requested_area > available {
        return Err(PackingError::OverCapacity {
            requested: requested_area,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrille_core::color::Rgba;

    #[test]
    fn test_from_largest_first_and_count() {
        let counts = SquareCounts::from_largest_first(1, 2, 3, 4);
        assert_eq!(counts.count(5), 1);
        assert_eq!(counts.count(4), 2);
        assert_eq!(counts.count(3), 3);
        assert_eq!(counts.count(2), 4);
        assert_eq!(counts.count(1), 0);
        assert_eq!(counts.count(6), 0);
        assert_eq!(counts.total(), 10);
        assert_eq!(SquareCounts::from([1, 2, 3, 4]), counts);
    }

    #[test]
    fn test_area() {
        let counts = SquareCounts::from_largest_first(1, 1, 1, 1);
        assert_eq!(counts.area(), 25 + 16 + 9 + 4);
        assert_eq!(SquareCounts::new().area(), 0);
        assert!(SquareCounts::new().is_empty());
    }

    #[test]
    fn test_check_capacity() {
        let counts = SquareCounts::new().with_count(3, 1);
        assert_eq!(
            counts.check_capacity(2),
            Err(PackingError::OverCapacity {
                requested: 9,
                available: 4
            })
        );
        assert_eq!(counts.check_capacity(3), Ok(()));
        assert_eq!(
            SquareCounts::new().check_capacity(0),
            Err(PackingError::InvalidGridSize)
        );
    }

    #[test]
    fn test_area_overflow_is_over_capacity() {
        let counts = SquareCounts::from_largest_first(usize::MAX / 10, 0, 0, 0);
        assert_eq!(counts.area(), usize::MAX);
        assert_eq!(
            counts.check_capacity(4),
            Err(PackingError::OverCapacity {
                requested: usize::MAX,
                available: 16
            })
        );

        let counts = SquareCounts::from_largest_first(0, 0, 1, usize::MAX / 4);
        assert_eq!(counts.area(), usize::MAX);
        assert_eq!(counts.total(), usize::MAX / 4 + 1);

        let counts = SquareCounts::from_largest_first(usize::MAX, usize::MAX, 0, 0);
        assert_eq!(counts.total(), usize::MAX);
    }

    #[test]
    fn test_unrepresentable_grid_area_is_invalid() {
        assert_eq!(
            check_capacity(usize::MAX, 0),
            Err(PackingError::InvalidGridSize)
        );
        assert_eq!(
            check_capacity(1 << (usize::BITS / 2), 4),
            Err(PackingError::InvalidGridSize)
        );
    }

    #[test]
    fn test_to_squares_is_largest_first_with_palette_colors() {
        let palette = Palette::default()
            .with_color(2, Rgba::RED)
            .with_color(4, Rgba::BLUE);
        let squares = SquareCounts::from_largest_first(0, 1, 0, 2).to_squares(&palette);
        assert_eq!(
            squares,
            vec![
                Square::new(4, Rgba::BLUE),
                Square::new(2, Rgba::RED),
                Square::new(2, Rgba::RED),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "side length out of range")]
    fn test_with_count_rejects_unit_squares() {
        let _ = SquareCounts::new().with_count(1, 3);
    }
}
