//! DateTime display utilities.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp, Unit};

/// Formats a `Timestamp` in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Days from `today` until an event `date`: "today", "in 3 days",
/// "2 days ago".
pub struct Countdown {
    pub date: Date,
    pub today: Date,
}

impl Countdown {
    /// Number of whole days from `today` to `date`; negative once passed.
    pub fn days(&self) -> i64 {
        self.today
            .until((Unit::Day, self.date))
            .map(|span| i64::from(span.get_days()))
            .unwrap_or(0)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days() {
            0 => write!(f, "today"),
            1 => write!(f, "tomorrow"),
            -1 => write!(f, "yesterday"),
            d if d > 0 => write!(f, "in {d} days"),
            d => write!(f, "{} days ago", -d),
        }
    }
}
