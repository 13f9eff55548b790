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

use crate::clock::{Clock, MonotonicClock};
use crate::monitor::search_monitor::{Attempt, SearchCommand, SearchMonitor};
use crate::stats::SearchStatistics;
use quadrille_model::{placement::Placement, square::Square};
use std::time::Duration;

/// Reports search progress through `tracing`.
///
/// Entering and leaving the search log at `info`, every attempt at `trace`,
/// and a `debug` progress line at most once per `log_interval`.
#[derive(Debug, Clone)]
pub struct LogMonitor<C = MonotonicClock> {
    clock: C,
    log_interval: Duration,
    start: Duration,
    last_log: Duration,
    attempts: u64,
    failed_attempts: u64,
}

impl LogMonitor<MonotonicClock> {
    #[inline]
    pub fn new(log_interval: Duration) -> Self {
        Self::with_clock(log_interval, MonotonicClock::new())
    }
}

impl Default for LogMonitor<MonotonicClock> {
    fn default() -> Self {
        Self::new(Duration::from_millis(1))
    }
}

impl<C> LogMonitor<C>
where
    C: Clock,
{
    #[inline]
    pub fn with_clock(log_interval: Duration, clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            log_interval,
            start: now,
            last_log: now,
            attempts: 0,
            failed_attempts: 0,
        }
    }

    #[inline]
    pub fn log_interval(&self) -> Duration {
        self.log_interval
    }

    fn log_progress(&mut self, now: Duration) {
        tracing::debug!(
            elapsed = ?now.saturating_sub(self.start),
            attempts = self.attempts,
            failed = self.failed_attempts,
            "placement search in progress"
        );
        self.last_log = now;
    }
}

impl<C> std::fmt::Display for LogMonitor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(log_interval: {:?})", self.log_interval)
    }
}

impl<C> SearchMonitor for LogMonitor<C>
where
    C: Clock,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, side_length: usize, squares: &[Square]) {
        self.start = self.clock.now();
        self.last_log = self.start;
        self.attempts = 0;
        self.failed_attempts = 0;
        tracing::info!(
            side_length,
            squares = squares.len(),
            "starting placement search"
        );
    }

    fn on_attempt(&mut self, attempt: &Attempt) {
        self.attempts += 1;
        match &attempt.failure {
            None => tracing::trace!(
                number = attempt.number,
                strategy = %attempt.strategy,
                "attempt placed"
            ),
            Some(err) => {
                self.failed_attempts += 1;
                tracing::trace!(
                    number = attempt.number,
                    strategy = %attempt.strategy,
                    error = %err,
                    "attempt failed"
                );
            }
        }

        let now = self.clock.now();
        if now.saturating_sub(self.last_log) >= self.log_interval {
            self.log_progress(now);
        }
    }

    fn on_placement_found(&mut self, placement: &Placement) {
        tracing::debug!(squares = placement.len(), "placement found");
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        tracing::info!(
            attempts = statistics.attempts,
            failed = statistics.failed_attempts,
            fallback = statistics.fallback_attempted,
            elapsed = ?statistics.elapsed,
            "placement search finished"
        );
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
