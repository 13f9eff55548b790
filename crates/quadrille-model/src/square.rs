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

use crate::error::SquareError;
use quadrille_core::color::Rgba;

/// The largest side length a square may have.
pub const MAX_SIDE_LENGTH: usize = 5;

/// An immutable colored square.
///
/// Side lengths range over `1..=MAX_SIDE_LENGTH`. Callers request sizes
/// `2..=5`; `1 x 1` squares are synthesized by the engines to fill leftover
/// cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square {
    side_length: usize,
    color: Rgba,
}

impl Square {
    /// Creates a new square.
    ///
    /// # Panics
    ///
    /// Panics if `side_length` is not within `1..=MAX_SIDE_LENGTH`.
    #[inline]
    pub fn new(side_length: usize, color: Rgba) -> Self {
        assert!(
            (1..=MAX_SIDE_LENGTH).contains(&side_length),
            "called `Square::new` with side length out of range: expected 1..={} but got {}",
            MAX_SIDE_LENGTH,
            side_length
        );
        Self { side_length, color }
    }

    /// Creates a new square, rejecting side lengths outside `1..=MAX_SIDE_LENGTH`.
    #[inline]
    pub fn try_new(side_length: usize, color: Rgba) -> Result<Self, SquareError> {
        if !(1..=MAX_SIDE_LENGTH).contains(&side_length) {
            return Err(SquareError::InvalidSideLength {
                side_length,
                max: MAX_SIDE_LENGTH,
            });
        }
        Ok(Self { side_length, color })
    }

    /// Creates a `1 x 1` filler square.
    #[inline]
    pub const fn filler(color: Rgba) -> Self {
        Self {
            side_length: 1,
            color,
        }
    }

    #[inline]
    pub const fn side_length(&self) -> usize {
        self.side_length
    }

    #[inline]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Number of cells the square covers.
    #[inline]
    pub const fn area(&self) -> usize {
        self.side_length * self.side_length
    }

    /// Returns `true` for `1 x 1` squares, which render without a border.
    #[inline]
    pub const fn is_unit(&self) -> bool {
        self.side_length == 1
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0} {1}", self.side_length, self.color)
    }
}

/// Sums the footprint area of a sequence of squares.
#[inline]
pub fn total_area<'a, I>(squares: I) -> usize
where
    I: IntoIterator<Item = &'a Square>,
{
    squares.into_iter().map(Square::area).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let s = Square::new(3, Rgba::RED);
        assert_eq!(s.side_length(), 3);
        assert_eq!(s.color(), Rgba::RED);
        assert_eq!(s.area(), 9);
        assert!(!s.is_unit());
        assert!(Square::filler(Rgba::TRANSPARENT).is_unit());
    }

    #[test]
    #[should_panic(expected = "side length out of range")]
    fn test_new_panics_on_oversized_square() {
        let _ = Square::new(6, Rgba::RED);
    }

    #[test]
    fn test_try_new_rejects_zero_and_oversized() {
        assert_eq!(
            Square::try_new(0, Rgba::RED),
            Err(SquareError::InvalidSideLength {
                side_length: 0,
                max: MAX_SIDE_LENGTH
            })
        );
        assert!(Square::try_new(6, Rgba::RED).is_err());
        assert!(Square::try_new(5, Rgba::RED).is_ok());
    }

    #[test]
    fn test_total_area() {
        let squares = [Square::new(2, Rgba::RED), Square::new(3, Rgba::BLUE)];
        assert_eq!(total_area(&squares), 13);
        assert_eq!(total_area(&[]), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(2, Rgba::RED).to_string(), "2x2 #FF0000FF");
    }
}
