use chrono::{DateTime, TimeDelta, Utc};

use crate::{Error, Fixed};

/// A point in time stored as signed nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(i64);

impl Time {
    pub const fn from_nanos(nanos: i64) -> Self {
        Time(nanos)
    }

    pub const fn nanos(self) -> i64 {
        self.0
    }

    pub fn from_datetime(t: &DateTime<Utc>) -> Result<Self, Error> {
        t.timestamp_nanos_opt().map(Time).ok_or(Error::TimeOutOfRange)
    }

    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.0)
    }
}

/// An elapsed span stored as signed nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const fn from_nanos(nanos: i64) -> Self {
        Duration(nanos)
    }

    pub const fn nanos(self) -> i64 {
        self.0
    }

    pub fn from_delta(d: &TimeDelta) -> Result<Self, Error> {
        d.num_nanoseconds()
            .map(Duration)
            .ok_or(Error::DurationOutOfRange)
    }

    pub fn to_delta(self) -> TimeDelta {
        TimeDelta::nanoseconds(self.0)
    }
}

impl Fixed for Time {
    const SIZE: usize = 8;

    fn put(&self, b: &mut [u8]) {
        self.0.put(b);
    }

    fn get(b: &[u8]) -> Self {
        Time(i64::get(b))
    }
}

impl Fixed for Duration {
    const SIZE: usize = 8;

    fn put(&self, b: &mut [u8]) {
        self.0.put(b);
    }

    fn get(b: &[u8]) -> Self {
        Duration(i64::get(b))
    }
}
