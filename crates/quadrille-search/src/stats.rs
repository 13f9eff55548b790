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

use std::time::Duration;

/// Counters collected over one retrying search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchStatistics {
    /// Randomized attempts made before the budget ran out or one succeeded.
    pub attempts: u64,

    /// Randomized attempts that failed.
    pub failed_attempts: u64,

    /// Whether the deterministic fallback attempt ran.
    pub fallback_attempted: bool,

    /// Time between entering and leaving the search, as read from its clock.
    pub elapsed: Duration,
}

impl SearchStatistics {
    /// Called after every randomized attempt.
    #[inline]
    pub fn on_attempt(&mut self, succeeded: bool) {
        self.attempts = self.attempts.saturating_add(1);
        if !succeeded {
            self.failed_attempts = self.failed_attempts.saturating_add(1);
        }
    }

    /// Called when the fallback attempt runs.
    #[inline]
    pub fn on_fallback(&mut self) {
        self.fallback_attempted = true;
    }

    #[inline]
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Total number of placement attempts, the fallback included.
    #[inline]
    pub fn total_attempts(&self) -> u64 {
        self.attempts + u64::from(self.fallback_attempted)
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Quadrille Search Statistics:")?;
        writeln!(f, "   Attempts:          {}", self.attempts)?;
        writeln!(f, "   Failed Attempts:   {}", self.failed_attempts)?;
        writeln!(f, "   Fallback Used:     {}", self.fallback_attempted)?;
        writeln!(f, "   Elapsed:           {:?}", self.elapsed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = SearchStatistics::default();
        stats.on_attempt(false);
        stats.on_attempt(false);
        stats.on_attempt(true);
        assert_eq!(stats.attempts, 3);
        assert_eq!(stats.failed_attempts, 2);
        assert_eq!(stats.total_attempts(), 3);

        stats.on_fallback();
        assert_eq!(stats.total_attempts(), 4);
    }

    #[test]
    fn test_display_lists_counters() {
        let mut stats = SearchStatistics::default();
        stats.on_attempt(true);
        let text = stats.to_string();
        assert!(text.contains("Attempts:          1"));
        assert!(text.contains("Fallback Used:     false"));
    }
}
