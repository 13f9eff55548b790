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

use quadrille_core::color::Rgba;
use quadrille_model::{
    counts::SquareCounts,
    palette::{FixedColors, Palette},
    square::Square,
};
use quadrille_search::{
    clock::ManualClock,
    monitor::{log::LogMonitor, time_limit::TimeLimitMonitor},
    result::TerminationReason,
    sweep,
    traversal::TraversalStrategy,
};
use quadrille_solver::solver::{SolverBuilder, place_with_retry};
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_two_blocks_on_four_by_four() {
    let squares = [Square::new(2, Rgba::RED), Square::new(2, Rgba::BLUE)];
    let placement = sweep::place(4, &squares, TraversalStrategy::default(), Rgba::TRANSPARENT)
        .expect("two 2x2 squares fit a 4x4 grid");

    assert_eq!(placement.len(), 10);
    assert_eq!(placement.count_of_size(2), 2);
    assert_eq!(placement.count_of_size(1), 8);
    assert_eq!(placement.covered_area(), 16);
    assert!(placement.validate().is_ok());
}

#[test]
fn test_over_capacity_degrades_to_fillers_within_budget() {
    init_tracing();
    let squares = [Square::new(3, Rgba::RED)];
    assert!(sweep::place(2, &squares, TraversalStrategy::default(), Rgba::TRANSPARENT).is_err());

    let mut solver = SolverBuilder::new()
        .with_time_limit(Duration::from_millis(10))
        .build();
    let outcome = solver.solve_squares(2, &squares, Rgba::TRANSPARENT);

    assert!(outcome.is_degraded());
    assert_eq!(outcome.placement().len(), 4);
    assert!(
        outcome
            .placement()
            .iter()
            .all(|(_, square)| square.is_unit() && square.color() == Rgba::TRANSPARENT)
    );
}

#[test]
fn test_place_with_retry_zero_budget_on_every_grid_size() {
    init_tracing();
    let counts = SquareCounts::from_largest_first(1, 1, 2, 3);
    let palette = Palette::default();

    for side_length in 0..=12 {
        let placement = place_with_retry(side_length, &counts, &palette, Duration::ZERO);
        assert_eq!(placement.side_length(), side_length);
        if side_length == 0 {
            assert!(placement.is_empty());
        } else {
            assert!(placement.validate().is_ok(), "side length {}", side_length);
        }
    }
}

#[test]
fn test_place_with_retry_oversized_counts_degrade_to_fillers() {
    let palette = Palette::default();
    for counts in [
        SquareCounts::from_largest_first(0, 0, 0, usize::MAX / 4),
        SquareCounts::from_largest_first(usize::MAX / 10, 0, 0, 0),
        SquareCounts::from_largest_first(usize::MAX, usize::MAX, usize::MAX, usize::MAX),
    ] {
        let placement = place_with_retry(4, &counts, &palette, Duration::ZERO);
        assert_eq!(placement.len(), 16, "{}", counts);
        assert_eq!(placement.count_of_size(1), 16, "{}", counts);
        assert!(placement.validate().is_ok());
    }
}

#[test]
fn test_place_with_retry_unrepresentable_side_length_is_empty() {
    let counts = SquareCounts::from_largest_first(0, 0, 1, 1);
    for side_length in [usize::MAX, 1 << (usize::BITS / 2)] {
        let placement = place_with_retry(side_length, &counts, &Palette::default(), Duration::ZERO);
        assert_eq!(placement.side_length(), side_length);
        assert!(placement.is_empty());
    }
}

#[test]
fn test_zero_budget_makes_at_most_two_attempts() {
    let counts = SquareCounts::from_largest_first(0, 2, 0, 1);
    let mut solver = SolverBuilder::new()
        .with_time_limit(Duration::ZERO)
        .with_clock(ManualClock::new())
        .with_seed(11)
        .build();

    let outcome = solver.solve(8, &counts, &Palette::default());
    assert!(outcome.statistics().total_attempts() <= 2);
    assert!(outcome.statistics().fallback_attempted);
}

#[test]
fn test_seeded_solvers_are_reproducible() {
    let counts = SquareCounts::from_largest_first(1, 2, 3, 4);
    let mut colors = FixedColors::new(vec![Rgba::RED, Rgba::GREEN, Rgba::BLUE, Rgba::YELLOW]);
    let palette = Palette::from_source(&mut colors, Rgba::TRANSPARENT);

    let run = || {
        SolverBuilder::new()
            .with_time_limit(Duration::from_secs(3600))
            .with_attempt_limit(200)
            .with_clock(ManualClock::new())
            .with_seed(2024)
            .build()
            .solve(14, &counts, &palette)
    };

    let first = run();
    let second = run();
    assert_eq!(first.placement(), second.placement());
    assert_eq!(first.reason(), second.reason());
    assert_eq!(first.statistics(), second.statistics());
}

#[test]
fn test_user_monitors_see_the_search() {
    init_tracing();
    let clock = ManualClock::new();
    let mut solver = SolverBuilder::new()
        .with_time_limit(Duration::from_secs(3600))
        .with_clock(clock.clone())
        .with_seed(1)
        .add_monitor(LogMonitor::with_clock(Duration::ZERO, clock.clone()))
        .add_monitor(TimeLimitMonitor::new(Duration::ZERO, clock))
        .build();

    let counts = SquareCounts::from_largest_first(0, 0, 1, 0);
    let outcome = solver.solve(5, &counts, &Palette::default());

    assert_eq!(outcome.reason(), &TerminationReason::PlacedByFallback);
    assert_eq!(outcome.statistics().attempts, 0);
    assert_eq!(outcome.placement().count_of_size(3), 1);
    assert_eq!(outcome.placement().count_of_size(1), 16);
}
