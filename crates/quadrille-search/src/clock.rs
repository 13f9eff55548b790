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

//! Injectable monotonic time.
//!
//! Time budgets read the clock through the `Clock` trait so tests can drive
//! elapsed time by hand instead of sleeping.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::{Duration, Instant};

/// A monotonic clock. Readings are offsets from an arbitrary fixed origin.
pub trait Clock {
    /// Returns the current reading.
    fn now(&self) -> Duration;
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall-clock time backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    #[inline]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and hand
/// another to the code under test. With a non-zero `step`, every reading
/// advances the clock by that amount after it is taken.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
    step: Duration,
}

impl ManualClock {
    /// Creates a clock at zero that never advances on its own.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at zero that advances by `step` on every reading.
    #[inline]
    pub fn with_step(step: Duration) -> Self {
        Self {
            nanos: Arc::default(),
            step,
        }
    }

    /// Moves the clock forward.
    #[inline]
    pub fn advance(&self, by: Duration) {
        self.nanos.fetch_add(to_nanos(by), Ordering::Relaxed);
    }

    /// Sets the clock to an absolute reading.
    #[inline]
    pub fn set(&self, to: Duration) {
        self.nanos.store(to_nanos(to), Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        let nanos = self.nanos.fetch_add(to_nanos(self.step), Ordering::Relaxed);
        Duration::from_nanos(nanos)
    }
}

#[inline]
fn to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
