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

//! # Retrying Solver
//!
//! Wraps a single-attempt `Placer` in a randomized retry loop bounded by a
//! wall-clock budget.
//!
//! Each loop iteration shuffles the requested squares, draws a random
//! traversal strategy (corner, sweep mode and transposition) and runs one
//! placement attempt. Budgets are enforced by monitors that are consulted
//! between attempts only; an attempt in progress always runs to completion.
//! Once a monitor asks to stop, exactly one more attempt runs with the
//! caller's original square order and the default strategy. If that fails
//! too, the outcome degrades to a grid covered by filler squares.
//!
//! ## Usage
//!
//! ```rust
//! use quadrille_model::{counts::SquareCounts, palette::Palette};
//! use quadrille_solver::solver::SolverBuilder;
//! use std::time::Duration;
//!
//! let mut solver = SolverBuilder::new()
//!     .with_time_limit(Duration::from_millis(50))
//!     .with_seed(7)
//!     .build();
//!
//! let counts = SquareCounts::from_largest_first(0, 1, 0, 2);
//! let outcome = solver.solve(6, &counts, &Palette::default());
//!
//! assert!(outcome.is_success());
//! assert!(outcome.placement().validate().is_ok());
//! ```

use quadrille_core::color::Rgba;
use quadrille_model::{
    counts::{SquareCounts, check_capacity},
    error::PackingError,
    grid::Grid,
    palette::Palette,
    placement::Placement,
    square::{Square, total_area},
};
use quadrille_search::{
    clock::{Clock, MonotonicClock},
    monitor::{
        attempt_limit::AttemptLimitMonitor,
        composite::CompositeMonitor,
        search_monitor::{Attempt, SearchCommand, SearchMonitor},
        time_limit::TimeLimitMonitor,
    },
    placer::{Placer, backfill},
    result::PackingOutcome,
    stats::SearchStatistics,
    sweep::SweepPlacer,
    traversal::TraversalStrategy,
};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::time::Duration;

/// The wall-clock budget used when none is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(10);

/// The resolved settings of a `Solver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub time_limit: Duration,
    pub attempt_limit: Option<u64>,
    pub seed: Option<u64>,
    pub placer: String,
}

impl std::fmt::Display for SolverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Quadrille Solver Configuration:")?;
        writeln!(f, "   Placer:            {}", self.placer)?;
        writeln!(f, "   Time Limit:        {:?}", self.time_limit)?;
        match self.attempt_limit {
            Some(limit) => writeln!(f, "   Attempt Limit:     {}", limit)?,
            None => writeln!(f, "   Attempt Limit:     none")?,
        }
        match self.seed {
            Some(seed) => writeln!(f, "   Seed:              {}", seed)?,
            None => writeln!(f, "   Seed:              os")?,
        }
        Ok(())
    }
}

pub struct Solver<'a, C = MonotonicClock> {
    placer: Box<dyn Placer + 'a>,
    rng: StdRng,
    clock: C,
    time_limit: Duration,
    attempt_limit: Option<u64>,
    seed: Option<u64>,
    monitor: CompositeMonitor<'a>,
}

impl<C> std::fmt::Debug for Solver<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("placer", &self.placer.name())
            .field("time_limit", &self.time_limit)
            .field("attempt_limit", &self.attempt_limit)
            .field("seed", &self.seed)
            .field("monitor", &self.monitor)
            .finish()
    }
}

impl<'a, C> Solver<'a, C>
where
    C: Clock,
{
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor + 'a,
    {
        self.monitor.add_monitor(monitor);
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    #[inline]
    pub fn attempt_limit(&self) -> Option<u64> {
        self.attempt_limit
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> SolverConfig {
        SolverConfig {
            time_limit: self.time_limit,
            attempt_limit: self.attempt_limit,
            seed: self.seed,
            placer: self.placer.name().to_string(),
        }
    }

    /// Expands `counts` largest-first with the colors of `palette` and runs
    /// the retrying search.
    ///
    /// The request is checked against the grid before it is expanded, so an
    /// oversized request is rejected without materializing its squares.
    pub fn solve(
        &mut self,
        side_length: usize,
        counts: &SquareCounts,
        palette: &Palette,
    ) -> PackingOutcome {
        let squares = match counts.check_capacity(side_length) {
            Ok(()) => counts.to_squares(palette),
            Err(_) => Vec::new(),
        };
        self.search(side_length, counts.area(), &squares, palette.filler())
    }

    /// Runs the retrying search for `squares`.
    ///
    /// The order of `squares` matters only for the fallback attempt, which
    /// places them exactly as given. This never fails; see `PackingOutcome`.
    pub fn solve_squares(
        &mut self,
        side_length: usize,
        squares: &[Square],
        filler: Rgba,
    ) -> PackingOutcome {
        self.search(side_length, total_area(squares), squares, filler)
    }

    fn search(
        &mut self,
        side_length: usize,
        requested_area: usize,
        squares: &[Square],
        filler: Rgba,
    ) -> PackingOutcome {
        let mut monitor = CompositeMonitor::with_capacity(3);
        monitor.add_monitor(TimeLimitMonitor::new(self.time_limit, &self.clock));
        if let Some(limit) = self.attempt_limit {
            monitor.add_monitor(AttemptLimitMonitor::new(limit));
        }
        monitor.add_monitor(&mut self.monitor);

        let start = self.clock.now();
        let mut stats = SearchStatistics::default();
        monitor.on_enter_search(side_length, squares);

        if let Err(err) = check_capacity(side_length, requested_area) {
            tracing::warn!(side_length, error = %err, "rejecting request before any attempt");
            let placement = match err {
                PackingError::InvalidGridSize => Placement::new(side_length),
                _ => filler_placement(side_length, filler),
            };
            stats.set_elapsed(self.clock.now().saturating_sub(start));
            monitor.on_exit_search(&stats);
            return PackingOutcome::degraded(placement, err.to_string(), stats);
        }

        let mut order = squares.to_vec();
        let reason = loop {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                break reason;
            }

            order.shuffle(&mut self.rng);
            let strategy = TraversalStrategy::random(&mut self.rng);
            let result = self.placer.place(side_length, &order, strategy, filler);

            stats.on_attempt(result.is_ok());
            monitor.on_attempt(&Attempt {
                number: stats.attempts,
                strategy,
                fallback: false,
                failure: result.as_ref().err().copied(),
            });

            if let Ok(placement) = result {
                tracing::debug!(attempts = stats.attempts, %strategy, "placement found");
                monitor.on_placement_found(&placement);
                stats.set_elapsed(self.clock.now().saturating_sub(start));
                monitor.on_exit_search(&stats);
                return PackingOutcome::placed(placement, stats);
            }
        };

        tracing::debug!(
            %reason,
            attempts = stats.attempts,
            "budget exhausted, running fallback attempt"
        );

        let strategy = TraversalStrategy::default();
        let result = self.placer.place(side_length, squares, strategy, filler);
        stats.on_fallback();
        monitor.on_attempt(&Attempt {
            number: stats.total_attempts(),
            strategy,
            fallback: true,
            failure: result.as_ref().err().copied(),
        });

        let outcome = match result {
            Ok(placement) => {
                monitor.on_placement_found(&placement);
                stats.set_elapsed(self.clock.now().saturating_sub(start));
                PackingOutcome::placed_by_fallback(placement, stats)
            }
            Err(err) => {
                tracing::warn!(
                    side_length,
                    attempts = stats.total_attempts(),
                    error = %err,
                    "no attempt placed every square, returning a filler grid"
                );
                stats.set_elapsed(self.clock.now().saturating_sub(start));
                PackingOutcome::degraded(
                    filler_placement(side_length, filler),
                    format!("{}; fallback failed: {}", reason, err),
                    stats,
                )
            }
        };

        monitor.on_exit_search(outcome.statistics());
        outcome
    }
}

/// A placement covering every cell of the grid with a `1 x 1` filler square.
fn filler_placement(side_length: usize, filler: Rgba) -> Placement {
    let Ok(mut grid) = Grid::new(side_length) else {
        return Placement::new(side_length);
    };
    let mut placement = Placement::with_capacity(side_length, grid.area());
    backfill(&mut grid, &mut placement, filler);
    placement
}

pub struct SolverBuilder<'a, C = MonotonicClock> {
    placer: Option<Box<dyn Placer + 'a>>,
    clock: C,
    time_limit: Duration,
    attempt_limit: Option<u64>,
    seed: Option<u64>,
    monitor: CompositeMonitor<'a>,
}

impl Default for SolverBuilder<'_, MonotonicClock> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SolverBuilder<'a, MonotonicClock> {
    #[inline]
    pub fn new() -> Self {
        Self {
            placer: None,
            clock: MonotonicClock::new(),
            time_limit: DEFAULT_TIME_LIMIT,
            attempt_limit: None,
            seed: None,
            monitor: CompositeMonitor::new(),
        }
    }
}

impl<'a, C> SolverBuilder<'a, C>
where
    C: Clock,
{
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Caps the number of randomized attempts. The fallback attempt still
    /// runs once the cap is reached.
    #[inline]
    pub fn with_attempt_limit(mut self, limit: u64) -> Self {
        self.attempt_limit = Some(limit);
        self
    }

    /// Seeds the shuffles and strategy draws, making the search reproducible
    /// for a given clock.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn with_clock<D>(self, clock: D) -> SolverBuilder<'a, D>
    where
        D: Clock,
    {
        SolverBuilder {
            placer: self.placer,
            clock,
            time_limit: self.time_limit,
            attempt_limit: self.attempt_limit,
            seed: self.seed,
            monitor: self.monitor,
        }
    }

    #[inline]
    pub fn with_placer<P>(mut self, placer: P) -> Self
    where
        P: Placer + 'a,
    {
        self.placer = Some(Box::new(placer));
        self
    }

    #[inline]
    pub fn add_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor + 'a,
    {
        self.monitor.add_monitor(monitor);
        self
    }

    #[inline]
    pub fn build(self) -> Solver<'a, C> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Solver {
            placer: self.placer.unwrap_or_else(|| Box::new(SweepPlacer)),
            rng,
            clock: self.clock,
            time_limit: self.time_limit,
            attempt_limit: self.attempt_limit,
            seed: self.seed,
            monitor: self.monitor,
        }
    }
}

/// Places the squares described by `counts` on a `side_length` grid, retrying
/// with fresh randomization for at most `time_limit`.
///
/// Never fails: if nothing fits, the result is a grid of filler squares.
pub fn place_with_retry(
    side_length: usize,
    counts: &SquareCounts,
    palette: &Palette,
    time_limit: Duration,
) -> Placement {
    SolverBuilder::new()
        .with_time_limit(time_limit)
        .build()
        .solve(side_length, counts, palette)
        .into_placement()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrille_search::clock::ManualClock;
    use quadrille_search::result::TerminationReason;
    use quadrille_search::tiered::TieredPlacer;
    use rand_chacha::ChaCha8Rng;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(Vec<Square>, TraversalStrategy)>>>;

    /// Records every call and fails the first `fail_first` of them.
    struct RecordingPlacer {
        fail_first: usize,
        calls: Calls,
    }

    impl RecordingPlacer {
        fn new(fail_first: usize) -> (Self, Calls) {
            let calls = Calls::default();
            let placer = Self {
                fail_first,
                calls: Rc::clone(&calls),
            };
            (placer, calls)
        }
    }

    impl Placer for RecordingPlacer {
        fn name(&self) -> &str {
            "RecordingPlacer"
        }

        fn place(
            &mut self,
            side_length: usize,
            squares: &[Square],
            strategy: TraversalStrategy,
            filler: Rgba,
        ) -> Result<Placement, PackingError> {
            let mut calls = self.calls.borrow_mut();
            calls.push((squares.to_vec(), strategy));
            if calls.len() <= self.fail_first {
                return Err(PackingError::PackingFailed {
                    square_index: 0,
                    side_length: 1,
                });
            }
            SweepPlacer.place(side_length, squares, strategy, filler)
        }
    }

    fn distinct_squares() -> Vec<Square> {
        vec![
            Square::new(2, Rgba::RED),
            Square::new(2, Rgba::BLUE),
            Square::new(3, Rgba::GREEN),
        ]
    }

    #[test]
    fn test_first_successful_attempt_is_returned() {
        let mut solver = SolverBuilder::new()
            .with_time_limit(Duration::from_secs(60))
            .with_seed(1)
            .build();

        let counts = SquareCounts::from_largest_first(0, 1, 0, 0);
        let outcome = solver.solve(6, &counts, &Palette::default());
        assert_eq!(outcome.reason(), &TerminationReason::Placed);
        assert_eq!(outcome.statistics().attempts, 1);
        assert!(!outcome.statistics().fallback_attempted);
    }

    #[test]
    fn test_fallback_uses_original_order_and_default_strategy() {
        let squares = distinct_squares();
        let (placer, calls) = RecordingPlacer::new(5);
        let mut solver = SolverBuilder::new()
            .with_time_limit(Duration::from_secs(3600))
            .with_attempt_limit(5)
            .with_clock(ManualClock::new())
            .with_seed(3)
            .with_placer(placer)
            .build();

        let outcome = solver.solve_squares(7, &squares, Rgba::TRANSPARENT);
        assert_eq!(outcome.reason(), &TerminationReason::PlacedByFallback);
        assert_eq!(outcome.statistics().attempts, 5);
        assert_eq!(outcome.statistics().failed_attempts, 5);
        assert!(outcome.statistics().fallback_attempted);
        assert!(outcome.placement().validate().is_ok());

        let calls = calls.borrow();
        assert_eq!(calls.len(), 6);
        let (order, strategy) = &calls[5];
        assert_eq!(order, &squares);
        assert_eq!(*strategy, TraversalStrategy::default());
    }

    #[test]
    fn test_failed_fallback_degrades_to_filler_grid() {
        let (placer, calls) = RecordingPlacer::new(usize::MAX);
        let mut solver = SolverBuilder::new()
            .with_time_limit(Duration::from_secs(3600))
            .with_attempt_limit(5)
            .with_clock(ManualClock::new())
            .with_placer(placer)
            .build();

        let outcome = solver.solve_squares(7, &distinct_squares(), Rgba::WHITE);
        assert_eq!(outcome.statistics().attempts, 5);
        assert_eq!(outcome.statistics().total_attempts(), 6);
        assert_eq!(calls.borrow().len(), 6);
        assert!(outcome.is_degraded());

        let placement = outcome.placement();
        assert_eq!(placement.len(), 49);
        assert_eq!(placement.count_of_size(1), 49);
        assert!(placement.iter().all(|(_, sq)| sq.color() == Rgba::WHITE));
    }

    #[test]
    fn test_time_limit_is_checked_between_attempts() {
        let (placer, calls) = RecordingPlacer::new(usize::MAX);
        let clock = ManualClock::with_step(Duration::from_millis(1));
        let mut solver = SolverBuilder::new()
            .with_time_limit(Duration::from_millis(10))
            .with_clock(clock)
            .with_placer(placer)
            .build();

        let outcome = solver.solve_squares(7, &distinct_squares(), Rgba::WHITE);
        assert!(outcome.is_degraded());
        let made = calls.borrow().len() as u64;
        assert_eq!(made, outcome.statistics().total_attempts());
        assert!(outcome.statistics().attempts > 0);
        assert!(outcome.statistics().attempts <= 10);
    }

    #[test]
    fn test_zero_budget_makes_only_the_fallback_attempt() {
        let mut solver = SolverBuilder::new()
            .with_time_limit(Duration::ZERO)
            .with_clock(ManualClock::new())
            .with_seed(9)
            .build();

        let counts = SquareCounts::from_largest_first(0, 0, 0, 2);
        let outcome = solver.solve(4, &counts, &Palette::default());
        assert_eq!(outcome.statistics().attempts, 0);
        assert_eq!(outcome.statistics().total_attempts(), 1);
        assert_eq!(outcome.reason(), &TerminationReason::PlacedByFallback);
        assert_eq!(outcome.placement().count_of_size(2), 2);
    }

    #[test]
    fn test_over_capacity_is_rejected_without_attempts() {
        let mut solver = SolverBuilder::new().with_seed(0).build();
        let outcome = solver.solve_squares(2, &[Square::new(3, Rgba::RED)], Rgba::TRANSPARENT);

        assert!(outcome.is_degraded());
        assert_eq!(outcome.statistics().total_attempts(), 0);
        assert_eq!(outcome.placement().len(), 4);
        assert_eq!(outcome.placement().count_of_size(1), 4);
    }

    #[test]
    fn test_oversized_counts_are_rejected_before_expansion() {
        let (placer, calls) = RecordingPlacer::new(0);
        let mut solver = SolverBuilder::new()
            .with_clock(ManualClock::new())
            .with_placer(placer)
            .build();

        let counts = SquareCounts::from_largest_first(0, 0, 0, usize::MAX / 4);
        let outcome = solver.solve(4, &counts, &Palette::default());

        assert!(calls.borrow().is_empty());
        assert_eq!(outcome.statistics().total_attempts(), 0);
        assert!(matches!(outcome.reason(), TerminationReason::Degraded(_)));
        assert_eq!(outcome.placement().count_of_size(1), 16);
    }

    #[test]
    fn test_invalid_grid_size_yields_an_empty_placement() {
        let mut solver = SolverBuilder::new().with_seed(0).build();
        let outcome = solver.solve_squares(0, &[], Rgba::TRANSPARENT);

        assert!(outcome.is_degraded());
        assert!(outcome.placement().is_empty());
    }

    #[test]
    fn test_tiered_placer_behind_the_same_interface() {
        let mut solver = SolverBuilder::new()
            .with_time_limit(Duration::from_secs(60))
            .with_seed(5)
            .with_placer(TieredPlacer::new(ChaCha8Rng::seed_from_u64(5)))
            .build();

        let counts = SquareCounts::from_largest_first(1, 1, 1, 1);
        let outcome = solver.solve(10, &counts, &Palette::default());
        assert!(outcome.is_success());
        assert!(outcome.placement().validate().is_ok());
        assert_eq!(solver.config().placer, "TieredPlacer");
    }

    #[test]
    fn test_config_reports_defaults() {
        let solver = SolverBuilder::new().build();
        let config = solver.config();
        assert_eq!(config.time_limit, DEFAULT_TIME_LIMIT);
        assert_eq!(config.attempt_limit, None);
        assert_eq!(config.seed, None);
        assert_eq!(config.placer, "SweepPlacer");
        assert!(config.to_string().contains("Seed:              os"));
    }
}
