use crate::errors::{IntervalError, ValidationError};
use crate::{Interval, Report, SensorId, Time};
use log::{debug, trace};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::ops::Bound::{Excluded, Unbounded};

/// The union of every interval reported so far, kept as a minimal set of
/// disjoint, non-touching intervals keyed by start, plus the total covered
/// duration.
///
/// Sensor ids are carried through for diagnostics only: coverage is "some
/// sensor active", so which sensor reported an interval never affects the
/// union.
#[derive(Debug, Clone, Default)]
pub struct IntervalUnion {
    // start -> end
    entries: BTreeMap<Time, Time>,
    total: Time,
}

impl IntervalUnion {
    pub fn new() -> Self {
        IntervalUnion {
            entries: BTreeMap::new(),
            total: 0,
        }
    }

    /// Ingest the report that `sensor_id` was active over `[start, end)`.
    ///
    /// Reports with `end < start` are rejected before anything is touched.
    /// An empty report (`start == end`) is accepted; it is absorbed if it
    /// touches an existing interval and otherwise leaves no trace.
    pub fn process(
        &mut self,
        sensor_id: SensorId,
        start: Time,
        end: Time,
    ) -> Result<(), IntervalError> {
        let candidate = match Interval::try_new(start, end) {
            Ok(interval) => interval,
            Err(err) => {
                debug!("Rejecting report from sensor {}: {}", sensor_id, err);
                return Err(err);
            }
        };

        let merged = self.merge_neighbors(candidate);
        if merged.is_empty() {
            trace!("Dropping empty interval {} from sensor {}", merged, sensor_id);
            return Ok(());
        }
        self.insert(merged);
        Ok(())
    }

    pub fn add(&mut self, report: Report) -> Result<(), IntervalError> {
        self.process(report.sensor_id, report.start, report.end)
    }

    /// Total time covered by at least one reported interval.  O(1).
    pub fn total_covered_time(&self) -> Time {
        self.total
    }

    /// The disjoint intervals, ascending by start.
    pub fn snapshot(&self) -> Vec<(Time, Time)> {
        self.entries
            .iter()
            .map(|(&start, &end)| (start, end))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Interval> + '_ {
        self.entries
            .iter()
            .map(|(&start, &end)| Interval::new(start, end))
    }

    /// Number of disjoint intervals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_covered(&self, t: Time) -> bool {
        self.predecessor(t)
            .map_or(false, |interval| interval.contains(t))
    }

    /// Full scan of the stored intervals.  Checks that they are non-empty,
    /// pairwise separated by a gap, and that they sum to the running total.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut recomputed: Time = 0;
        let mut previous: Option<Interval> = None;
        for (index, interval) in self.iter().enumerate() {
            if interval.is_empty() {
                return Err(ValidationError::EmptyEntry { index, interval });
            }
            if let Some(prev) = previous {
                if prev.end() >= interval.start() {
                    return Err(ValidationError::TouchingEntries {
                        first_index: index - 1,
                        second_index: index,
                        first: prev,
                        second: interval,
                    });
                }
            }
            recomputed += interval.duration();
            previous = Some(interval);
        }

        if recomputed != self.total {
            return Err(ValidationError::TotalMismatch {
                cached: self.total,
                recomputed,
            });
        }
        Ok(())
    }

    /// Pull every stored interval that touches `working` out of the map,
    /// widening `working` as it goes, until neither side has anything left
    /// to absorb.  Returns the widened interval, which is not yet stored.
    fn merge_neighbors(&mut self, mut working: Interval) -> Interval {
        loop {
            let mut merged = false;

            // Includes an entry starting exactly at working.start().
            while let Some(prev) = self.predecessor(working.start()) {
                if !prev.touches(working) {
                    break;
                }
                trace!("Merging {} into {}", prev, working);
                self.remove(prev);
                working.expand(prev);
                merged = true;
            }

            while let Some(next) = self.successor(working.start()) {
                if !next.touches(working) {
                    break;
                }
                trace!("Merging {} into {}", next, working);
                self.remove(next);
                working.expand(next);
                merged = true;
            }

            if !merged {
                return working;
            }
        }
    }

    /// The stored interval with the greatest start `<= t`.
    fn predecessor(&self, t: Time) -> Option<Interval> {
        self.entries
            .range(..=t)
            .next_back()
            .map(|(&start, &end)| Interval::new(start, end))
    }

    /// The stored interval with the least start `> t`.
    fn successor(&self, t: Time) -> Option<Interval> {
        self.entries
            .range((Excluded(t), Unbounded))
            .next()
            .map(|(&start, &end)| Interval::new(start, end))
    }

    fn insert(&mut self, interval: Interval) {
        self.entries.insert(interval.start(), interval.end());
        self.total += interval.duration();
    }

    fn remove(&mut self, interval: Interval) {
        if self.entries.remove(&interval.start()).is_some() {
            self.total -= interval.duration();
        }
    }
}

impl<R: Into<Report>> TryFrom<Vec<R>> for IntervalUnion {
    type Error = IntervalError;

    fn try_from(reports: Vec<R>) -> Result<Self, Self::Error> {
        let mut union = IntervalUnion::new();
        for report in reports {
            union.add(report.into())?;
        }
        Ok(union)
    }
}
