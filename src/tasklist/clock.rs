//! Source of "today" for due-date classification.
//!
//! Due tags are computed against the calendar date at a fixed UTC offset, never
//! the machine's local zone. The offset is injected so tests can pin the date.

use chrono::{FixedOffset, NaiveDate, Utc};

/// Default offset, in hours east of UTC.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 2;

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock and converts it to a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Returns `None` when `hours` is outside `-23..=23`.
    pub fn with_offset_hours(hours: i32) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
