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

//! Tiered random-anchor placement with backtracking.
//!
//! Squares are grouped into tiers by side length and the tiers are placed
//! largest first. Within a tier every square is dropped at uniformly random
//! top-left anchors until it fits, with a shared budget of draws per tier.
//! Once a tier is seated the placer recurses into the next one; if a smaller
//! tier cannot be seated, the grid is restored to the state before the
//! current tier and the current tier is scattered again, up to a fixed number
//! of times.
//!
//! This trades the determinism of `SweepPlacer` for a search that can undo
//! earlier choices. The traversal strategy passed to `place` is not consulted.

use crate::{
    placer::{Placer, backfill},
    traversal::TraversalStrategy,
};
use quadrille_core::{color::Rgba, geometry::Coord};
use quadrille_model::{
    error::PackingError,
    grid::Grid,
    placement::Placement,
    square::{MAX_SIDE_LENGTH, Square},
};
use rand::Rng;
use smallvec::SmallVec;

/// Random anchors drawn per tier before the tier is given up.
pub const DEFAULT_MAX_DRAWS_PER_TIER: usize = 1000;

/// How often a tier is scattered again after a smaller tier failed.
pub const DEFAULT_TIER_RETRIES: usize = 2;

/// Squares of one side length, each tagged with its index in the request.
type Tier = SmallVec<[(usize, Square); 8]>;

/// `(square_index, side_length)` of the square that could not be seated.
type Failure = (usize, usize);

#[derive(Debug, Clone)]
pub struct TieredPlacer<R> {
    rng: R,
    max_draws_per_tier: usize,
    tier_retries: usize,
}

impl<R> TieredPlacer<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self::with_limits(rng, DEFAULT_MAX_DRAWS_PER_TIER, DEFAULT_TIER_RETRIES)
    }

    /// # Panics
    ///
    /// Panics if `tier_retries` is zero.
    pub fn with_limits(rng: R, max_draws_per_tier: usize, tier_retries: usize) -> Self {
        assert!(
            tier_retries > 0,
            "called `TieredPlacer::with_limits` with zero tier retries"
        );
        Self {
            rng,
            max_draws_per_tier,
            tier_retries,
        }
    }

    #[inline]
    pub fn max_draws_per_tier(&self) -> usize {
        self.max_draws_per_tier
    }

    #[inline]
    pub fn tier_retries(&self) -> usize {
        self.tier_retries
    }

    fn tiers(squares: &[Square]) -> Vec<Tier> {
        (1..=MAX_SIDE_LENGTH)
            .rev()
            .map(|side| {
                squares
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|(_, s)| s.side_length() == side)
                    .collect::<Tier>()
            })
            .filter(|tier| !tier.is_empty())
            .collect()
    }

    /// Drops every square of `tier` at random anchors.
    fn scatter(
        &mut self,
        grid: &mut Grid,
        tier: &Tier,
        seated: &mut Vec<(Coord, Square)>,
    ) -> Result<(), Failure> {
        let n = grid.side_length();
        let mut draws = 0;

        for &(index, square) in tier {
            let side = square.side_length();
            if side > n {
                return Err((index, side));
            }
            let span = n - side + 1;

            loop {
                if draws == self.max_draws_per_tier {
                    return Err((index, side));
                }
                draws += 1;

                let anchor = Coord::from_indices(
                    self.rng.random_range(0..span),
                    self.rng.random_range(0..span),
                );
                if grid.fill(anchor, &square) {
                    seated.push((anchor, square));
                    break;
                }
            }
        }
        Ok(())
    }

    fn place_tiers(
        &mut self,
        grid: &mut Grid,
        tiers: &[Tier],
        seated: &mut Vec<(Coord, Square)>,
    ) -> Result<(), Failure> {
        let Some((tier, rest)) = tiers.split_first() else {
            return Ok(());
        };

        let mut failure = (tier[0].0, tier[0].1.side_length());
        for _ in 0..self.tier_retries {
            let snapshot = grid.clone();
            let mark = seated.len();

            let result = self
                .scatter(grid, tier, seated)
                .and_then(|()| self.place_tiers(grid, rest, seated));
            match result {
                Ok(()) => return Ok(()),
                Err(f) => failure = f,
            }

            *grid = snapshot;
            seated.truncate(mark);
        }
        Err(failure)
    }
}

impl<R> Placer for TieredPlacer<R>
where
    R: Rng,
{
    fn name(&self) -> &str {
        "TieredPlacer"
    }

    fn place(
        &mut self,
        side_length: usize,
        squares: &[Square],
        _strategy: TraversalStrategy,
        filler: Rgba,
    ) -> Result<Placement, PackingError> {
        let mut grid = Grid::new(side_length)?;
        let tiers = Self::tiers(squares);
        let mut seated = Vec::with_capacity(squares.len());

        self.place_tiers(&mut grid, &tiers, &mut seated)
            .map_err(|(square_index, side_length)| PackingError::PackingFailed {
                square_index,
                side_length,
            })?;

        let mut placement = Placement::with_capacity(side_length, seated.len() + grid.free_count());
        for (anchor, square) in seated {
            placement.insert(anchor, square);
        }
        backfill(&mut grid, &mut placement, filler);
        Ok(placement)
    }
}
