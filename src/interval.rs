use crate::errors::IntervalError;
use crate::Time;
use std::fmt;

/// A half-open span of time `[start, end)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Time,
    end: Time,
}

impl From<(Time, Time)> for Interval {
    fn from(bounds: (Time, Time)) -> Self {
        Interval::new(bounds.0, bounds.1)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl Interval {
    /// Build from two endpoints in either order.
    pub fn new(t1: Time, t2: Time) -> Self {
        Interval {
            start: t1.min(t2),
            end: t1.max(t2),
        }
    }

    pub fn try_new(start: Time, end: Time) -> Result<Self, IntervalError> {
        if end < start {
            Err(IntervalError::InvalidInterval { start, end })
        } else {
            Ok(Interval { start, end })
        }
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, t: Time) -> bool {
        self.start <= t && t < self.end
    }

    /// True if the two intervals overlap, one contains the other, or they
    /// share an endpoint with no gap between them.
    pub fn touches(&self, other: Interval) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }

    pub fn expand(&mut self, other: Interval) {
        self.start = self.start.min(other.start);
        self.end = self.end.max(other.end);
    }
}
