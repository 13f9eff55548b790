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

use crate::stats::SearchStatistics;
use crate::traversal::TraversalStrategy;
use quadrille_model::{error::PackingError, placement::Placement, square::Square};

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl SearchCommand {
    #[inline]
    pub fn is_terminate(&self) -> bool {
        matches!(self, SearchCommand::Terminate(_))
    }
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// What happened in one call to a placer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Attempt {
    /// One-based attempt number. The fallback attempt continues the count.
    pub number: u64,
    pub strategy: TraversalStrategy,
    /// `true` for the deterministic last-resort attempt.
    pub fallback: bool,
    /// The error the placer returned, if it failed.
    pub failure: Option<PackingError>,
}

impl Attempt {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.fallback { "fallback" } else { "attempt" };
        match &self.failure {
            None => write!(f, "{} #{} ({}): placed", kind, self.number, self.strategy),
            Some(err) => write!(f, "{} #{} ({}): {}", kind, self.number, self.strategy, err),
        }
    }
}

pub trait SearchMonitor {
    fn name(&self) -> &str;
    fn on_enter_search(&mut self, side_length: usize, squares: &[Square]);
    fn on_attempt(&mut self, attempt: &Attempt);
    fn on_placement_found(&mut self, placement: &Placement);
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    fn search_command(&self) -> SearchCommand;
}

impl<M> SearchMonitor for &mut M
where
    M: SearchMonitor + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_enter_search(&mut self, side_length: usize, squares: &[Square]) {
        (**self).on_enter_search(side_length, squares)
    }

    #[inline]
    fn on_attempt(&mut self, attempt: &Attempt) {
        (**self).on_attempt(attempt)
    }

    #[inline]
    fn on_placement_found(&mut self, placement: &Placement) {
        (**self).on_placement_found(placement)
    }

    #[inline]
    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        (**self).on_exit_search(statistics)
    }

    #[inline]
    fn search_command(&self) -> SearchCommand {
        (**self).search_command()
    }
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_display() {
        let ok = Attempt {
            number: 3,
            strategy: TraversalStrategy::default(),
            fallback: false,
            failure: None,
        };
        assert!(ok.is_success());
        assert_eq!(ok.to_string(), "attempt #3 (TopLeft/Parallel): placed");

        let failed = Attempt {
            number: 4,
            strategy: TraversalStrategy::default(),
            fallback: true,
            failure: Some(PackingError::PackingFailed {
                square_index: 1,
                side_length: 3,
            }),
        };
        assert!(!failed.is_success());
        assert!(failed.to_string().starts_with("fallback #4 (TopLeft/Parallel): "));
    }

    #[test]
    fn test_search_command_display() {
        assert_eq!(SearchCommand::Continue.to_string(), "Continue");
        let stop = SearchCommand::Terminate("done".to_string());
        assert!(stop.is_terminate());
        assert_eq!(stop.to_string(), "Terminate: done");
    }
}
