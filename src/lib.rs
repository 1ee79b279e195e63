mod interval;
mod interval_union;
mod report;

pub mod errors;

pub use interval::Interval;
pub use interval_union::IntervalUnion;
pub use report::Report;

pub type Time = u64;
pub type SensorId = u32;
