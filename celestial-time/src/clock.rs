use crate::{Instant, TimeResult};

/// Where the current scenario gets its time from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClockSource {
    /// A pinned instant, returned unchanged on every read.
    Fixed(Instant),
    /// The wall clock, read afresh each time.
    #[default]
    Live,
}

impl ClockSource {
    pub fn resolve(&self) -> TimeResult<Instant> {
        match self {
            ClockSource::Fixed(instant) => Ok(*instant),
            ClockSource::Live => Instant::now(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, ClockSource::Live)
    }
}

impl From<Instant> for ClockSource {
    fn from(instant: Instant) -> Self {
        ClockSource::Fixed(instant)
    }
}
