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

//! # Time Limit Monitor
//!
//! Enforces a wall-clock budget on a retrying search. The start of the budget
//! is the clock reading taken in `on_enter_search`; `search_command` requests
//! termination once `now - start >= time_limit`.
//!
//! The clock is injected, so tests can drive elapsed time with a
//! `ManualClock` instead of sleeping:
//!
//! ```rust
//! use quadrille_search::clock::ManualClock;
//! use quadrille_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
//! use quadrille_search::monitor::time_limit::TimeLimitMonitor;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut monitor = TimeLimitMonitor::new(Duration::from_millis(10), clock.clone());
//! monitor.on_enter_search(4, &[]);
//! assert_eq!(monitor.search_command(), SearchCommand::Continue);
//!
//! clock.advance(Duration::from_millis(10));
//! assert!(monitor.search_command().is_terminate());
//! ```

use crate::clock::{Clock, MonotonicClock};
use crate::monitor::search_monitor::{Attempt, SearchCommand, SearchMonitor};
use crate::stats::SearchStatistics;
use quadrille_model::{placement::Placement, square::Square};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TimeLimitMonitor<C = MonotonicClock> {
    time_limit: Duration,
    start: Duration,
    clock: C,
}

impl TimeLimitMonitor<MonotonicClock> {
    /// Creates a monitor reading the system's monotonic clock.
    #[inline]
    pub fn with_monotonic_clock(time_limit: Duration) -> Self {
        Self::new(time_limit, MonotonicClock::new())
    }
}

impl<C> TimeLimitMonitor<C>
where
    C: Clock,
{
    #[inline]
    pub fn new(time_limit: Duration, clock: C) -> Self {
        let start = clock.now();
        Self {
            time_limit,
            start,
            clock,
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Time spent since the search was entered.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }
}

impl<C> SearchMonitor for TimeLimitMonitor<C>
where
    C: Clock,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _side_length: usize, _squares: &[Square]) {
        self.start = self.clock.now();
    }

    fn on_attempt(&mut self, _attempt: &Attempt) {}

    fn on_placement_found(&mut self, _placement: &Placement) {}

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    fn search_command(&self) -> SearchCommand {
        if self.elapsed() >= self.time_limit {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}
