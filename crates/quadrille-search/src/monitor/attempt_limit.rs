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

use crate::monitor::search_monitor::{Attempt, SearchCommand, SearchMonitor};
use crate::stats::SearchStatistics;
use quadrille_model::{placement::Placement, square::Square};

/// Terminates the search after a fixed number of randomized attempts.
///
/// The fallback attempt is not counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptLimitMonitor {
    attempt_limit: u64,
    attempts: u64,
}

impl AttemptLimitMonitor {
    #[inline]
    pub fn new(attempt_limit: u64) -> Self {
        Self {
            attempt_limit,
            attempts: 0,
        }
    }

    #[inline]
    pub fn attempt_limit(&self) -> u64 {
        self.attempt_limit
    }

    #[inline]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}

impl SearchMonitor for AttemptLimitMonitor {
    fn name(&self) -> &str {
        "AttemptLimitMonitor"
    }

    fn on_enter_search(&mut self, _side_length: usize, _squares: &[Square]) {
        self.attempts = 0;
    }

    #[inline]
    fn on_attempt(&mut self, attempt: &Attempt) {
        if !attempt.fallback {
            self.attempts = self.attempts.saturating_add(1);
        }
    }

    fn on_placement_found(&mut self, _placement: &Placement) {}

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline]
    fn search_command(&self) -> SearchCommand {
        if self.attempts >= self.attempt_limit {
            return SearchCommand::Terminate(format!(
                "attempt limit of {} reached",
                self.attempt_limit
            ));
        }
        SearchCommand::Continue
    }
}
