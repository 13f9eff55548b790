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
use quadrille_model::placement::Placement;

/// Why a retrying search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// A randomized attempt seated every square.
    Placed,
    /// The budget ran out and the deterministic fallback attempt succeeded.
    PlacedByFallback,
    /// No attempt succeeded; the placement holds filler squares only (or
    /// nothing, if the grid size itself was invalid). The string says why.
    Degraded(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Placed => write!(f, "Placed"),
            TerminationReason::PlacedByFallback => write!(f, "Placed by fallback"),
            TerminationReason::Degraded(reason) => write!(f, "Degraded: {}", reason),
        }
    }
}

/// The result of a retrying search. Always carries a usable placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingOutcome {
    placement: Placement,
    reason: TerminationReason,
    statistics: SearchStatistics,
}

impl PackingOutcome {
    #[inline]
    pub fn new(
        placement: Placement,
        reason: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            placement,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn placed(placement: Placement, statistics: SearchStatistics) -> Self {
        Self::new(placement, TerminationReason::Placed, statistics)
    }

    #[inline]
    pub fn placed_by_fallback(placement: Placement, statistics: SearchStatistics) -> Self {
        Self::new(placement, TerminationReason::PlacedByFallback, statistics)
    }

    #[inline]
    pub fn degraded<R>(placement: Placement, reason: R, statistics: SearchStatistics) -> Self
    where
        R: Into<String>,
    {
        Self::new(
            placement,
            TerminationReason::Degraded(reason.into()),
            statistics,
        )
    }

    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns `true` if every requested square was seated.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(
            self.reason,
            TerminationReason::Placed | TerminationReason::PlacedByFallback
        )
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        matches!(self.reason, TerminationReason::Degraded(_))
    }

    #[inline]
    pub fn into_placement(self) -> Placement {
        self.placement
    }
}

impl std::fmt::Display for PackingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Outcome: {}", self.reason)?;
        write!(f, "{}", self.statistics)?;
        write!(f, "{}", self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flags() {
        let stats = SearchStatistics::default();
        assert!(PackingOutcome::placed(Placement::new(1), stats.clone()).is_success());
        assert!(PackingOutcome::placed_by_fallback(Placement::new(1), stats.clone()).is_success());

        let degraded = PackingOutcome::degraded(Placement::new(1), "budget exhausted", stats);
        assert!(!degraded.is_success());
        assert!(degraded.is_degraded());
        assert_eq!(degraded.reason().to_string(), "Degraded: budget exhausted");
    }
}
