use crate::errors::IntervalError;
use crate::{Interval, SensorId, Time};

/// One sensor activity report: `sensor_id` was active over `[start, end)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub sensor_id: SensorId,
    pub start: Time,
    pub end: Time,
}

impl From<(SensorId, Time, Time)> for Report {
    fn from(report: (SensorId, Time, Time)) -> Self {
        Report {
            sensor_id: report.0,
            start: report.1,
            end: report.2,
        }
    }
}

impl Report {
    pub fn new(sensor_id: SensorId, start: Time, end: Time) -> Self {
        Report {
            sensor_id,
            start,
            end,
        }
    }

    pub fn interval(&self) -> Result<Interval, IntervalError> {
        Interval::try_new(self.start, self.end)
    }
}
