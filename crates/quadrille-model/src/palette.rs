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

//! Colors for squares.
//!
//! The engines never pick colors themselves. A `Palette` fixes the color for
//! every side length plus the filler color before placement begins, and a
//! `ColorSource` is the injectable supplier a palette is drawn from.

use crate::square::MAX_SIDE_LENGTH;
use quadrille_core::color::Rgba;
use rand::{Rng, seq::SliceRandom};

/// The twelve colors squares are drawn from by default.
pub const DEFAULT_COLORS: [Rgba; 12] = [
    Rgba::RED,
    Rgba::BLUE,
    Rgba::GREEN,
    Rgba::YELLOW,
    Rgba::MAGENTA,
    Rgba::CYAN,
    Rgba::PURPLE_DARK,
    Rgba::PURPLE_LIGHT,
    Rgba::ORANGE_DARK,
    Rgba::ORANGE_LIGHT,
    Rgba::PINK_LIGHT,
    Rgba::PINK_DARK,
];

/// A supplier of square colors.
pub trait ColorSource {
    /// Returns the next color.
    fn next_color(&mut self) -> Rgba;
}

impl<F> ColorSource for F
where
    F: FnMut() -> Rgba,
{
    #[inline]
    fn next_color(&mut self) -> Rgba {
        self()
    }
}

/// Cycles through a fixed list of colors in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedColors {
    colors: Vec<Rgba>,
    next: usize,
}

impl FixedColors {
    /// Creates a new cycling source.
    ///
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    pub fn new(colors: Vec<Rgba>) -> Self {
        assert!(
            !colors.is_empty(),
            "called `FixedColors::new` with an empty color list"
        );
        Self { colors, next: 0 }
    }
}

impl ColorSource for FixedColors {
    fn next_color(&mut self) -> Rgba {
        let color = self.colors[self.next];
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}

/// Draws colors from a shuffled list, reshuffling after every full pass so
/// that consecutive draws within a pass never repeat.
#[derive(Debug, Clone)]
pub struct ShuffledColors<R> {
    colors: Vec<Rgba>,
    next: usize,
    rng: R,
}

impl<R> ShuffledColors<R>
where
    R: Rng,
{
    /// Creates a source over `DEFAULT_COLORS`.
    pub fn new(rng: R) -> Self {
        Self::with_colors(DEFAULT_COLORS.to_vec(), rng)
    }

    /// Creates a source over the given colors.
    ///
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    pub fn with_colors(mut colors: Vec<Rgba>, mut rng: R) -> Self {
        assert!(
            !colors.is_empty(),
            "called `ShuffledColors::with_colors` with an empty color list"
        );
        colors.shuffle(&mut rng);
        Self {
            colors,
            next: 0,
            rng,
        }
    }
}

impl<R> ColorSource for ShuffledColors<R>
where
    R: Rng,
{
    fn next_color(&mut self) -> Rgba {
        if self.next == self.colors.len() {
            self.colors.shuffle(&mut self.rng);
            self.next = 0;
        }
        let color = self.colors[self.next];
        self.next += 1;
        color
    }
}

/// The per-size colors and the filler color used for one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    by_size: [Rgba; MAX_SIDE_LENGTH],
    filler: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Rgba::TRANSPARENT)
    }
}

impl Palette {
    /// Creates a palette whose sizes `2..=5` take the first four default colors.
    pub fn new(filler: Rgba) -> Self {
        let mut by_size = [filler; MAX_SIDE_LENGTH];
        for (slot, color) in by_size.iter_mut().skip(1).zip(DEFAULT_COLORS) {
            *slot = color;
        }
        Self { by_size, filler }
    }

    /// Creates a palette drawing one color per size `2..=5` from `source`.
    /// Size `1` uses the filler color.
    pub fn from_source<S>(source: &mut S, filler: Rgba) -> Self
    where
        S: ColorSource + ?Sized,
    {
        let mut by_size = [filler; MAX_SIDE_LENGTH];
        for slot in by_size.iter_mut().skip(1) {
            *slot = source.next_color();
        }
        Self { by_size, filler }
    }

    /// Returns a copy with `side_length` mapped to `color`.
    ///
    /// # Panics
    ///
    /// Panics if `side_length` is not within `1..=MAX_SIDE_LENGTH`.
    pub fn with_color(mut self, side_length: usize, color: Rgba) -> Self {
        assert!(
            (1..=MAX_SIDE_LENGTH).contains(&side_length),
            "called `Palette::with_color` with side length out of range: expected 1..={} but got {}",
            MAX_SIDE_LENGTH,
            side_length
        );
        self.by_size[side_length - 1] = color;
        self
    }

    /// Returns the color for squares of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `side_length` is not within `1..=MAX_SIDE_LENGTH`.
    #[inline]
    pub fn color_for(&self, side_length: usize) -> Rgba {
        assert!(
            (1..=MAX_SIDE_LENGTH).contains(&side_length),
            "called `Palette::color_for` with side length out of range: expected 1..={} but got {}",
            MAX_SIDE_LENGTH,
            side_length
        );
        self.by_size[side_length - 1]
    }

    /// The color synthesized `1 x 1` filler squares are given.
    #[inline]
    pub fn filler(&self) -> Rgba {
        self.filler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fixed_colors_cycle() {
        let mut source = FixedColors::new(vec![Rgba::RED, Rgba::BLUE]);
        assert_eq!(source.next_color(), Rgba::RED);
        assert_eq!(source.next_color(), Rgba::BLUE);
        assert_eq!(source.next_color(), Rgba::RED);
    }

    #[test]
    fn test_shuffled_colors_cover_every_color_per_pass() {
        let mut source = ShuffledColors::new(ChaCha8Rng::seed_from_u64(7));
        for _ in 0..3 {
            let mut pass: Vec<Rgba> = (0..DEFAULT_COLORS.len())
                .map(|_| source.next_color())
                .collect();
            pass.sort_by_key(|c| (c.r, c.g, c.b, c.a));
            let mut expected = DEFAULT_COLORS.to_vec();
            expected.sort_by_key(|c| (c.r, c.g, c.b, c.a));
            assert_eq!(pass, expected);
        }
    }

    #[test]
    fn test_closure_is_a_color_source() {
        let mut source = || Rgba::CYAN;
        let palette = Palette::from_source(&mut source, Rgba::TRANSPARENT);
        for size in 2..=5 {
            assert_eq!(palette.color_for(size), Rgba::CYAN);
        }
        assert_eq!(palette.color_for(1), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_from_source_assigns_sizes_in_ascending_order() {
        let mut source = FixedColors::new(vec![Rgba::RED, Rgba::GREEN, Rgba::BLUE, Rgba::YELLOW]);
        let palette = Palette::from_source(&mut source, Rgba::WHITE);
        assert_eq!(palette.color_for(2), Rgba::RED);
        assert_eq!(palette.color_for(3), Rgba::GREEN);
        assert_eq!(palette.color_for(4), Rgba::BLUE);
        assert_eq!(palette.color_for(5), Rgba::YELLOW);
        assert_eq!(palette.filler(), Rgba::WHITE);
    }

    #[test]
    fn test_with_color_overrides_one_size() {
        let palette = Palette::default().with_color(4, Rgba::MAGENTA);
        assert_eq!(palette.color_for(4), Rgba::MAGENTA);
        assert_eq!(palette.filler(), Rgba::TRANSPARENT);
    }

    #[test]
    #[should_panic(expected = "side length out of range")]
    fn test_color_for_panics_on_zero() {
        let _ = Palette::default().color_for(0);
    }
}
