use crate::{Interval, Time};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum IntervalError {
    #[error("Invalid interval: end {end} is before start {start}")]
    InvalidInterval { start: Time, end: Time },
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Empty entry {index} at {interval}")]
    EmptyEntry { index: usize, interval: Interval },

    #[error("Entries {first_index} {second_index} touch or overlap: {first} and {second}")]
    TouchingEntries {
        first_index: usize,
        second_index: usize,
        first: Interval,
        second: Interval,
    },

    #[error("Running total {cached} does not match recomputed total {recomputed}")]
    TotalMismatch { cached: Time, recomputed: Time },
}
