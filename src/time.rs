//! Wall-clock sampling and digit decomposition.

use std::cell::Cell;

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

use crate::config::{DisplayConfig, HourFormat};

/// Hour, minute and second read from the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Hour tens, hour ones, minute tens, minute ones.
    pub const fn digits(self) -> [u8; 4] {
        // Both fields are below 24 and 60, so each digit fits in a u8.
        [
            (self.hour / 10) as u8,
            (self.hour % 10) as u8,
            (self.minute / 10) as u8,
            (self.minute % 10) as u8,
        ]
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Lookahead applied when sampling the time that the digits will show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookahead {
    /// Skew only when the current second is strictly greater than this.
    pub after_second: u32,
    pub seconds: i64,
}

impl Default for Lookahead {
    fn default() -> Self {
        Self {
            after_second: 40,
            seconds: 30,
        }
    }
}

impl From<&DisplayConfig> for Lookahead {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            after_second: config.lookahead_after_second,
            seconds: config.lookahead_seconds,
        }
    }
}

/// Extracts the fields of `now`, skewed forward by the lookahead when given
/// and the second is past the threshold, so that digits computed shortly
/// before a minute boundary show the upcoming minute.
pub fn sample_time(now: NaiveDateTime, lookahead: Option<Lookahead>, format: HourFormat) -> ClockTime {
    let instant = match lookahead {
        Some(skew) if now.second() > skew.after_second => TimeDelta::try_seconds(skew.seconds)
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(now),
        _ => now,
    };

    let mut hour = instant.hour();
    if format == HourFormat::Twelve {
        if hour > 12 {
            hour -= 12;
        } else if hour == 0 {
            hour = 12;
        }
    }
    ClockTime::new(hour, instant.minute(), instant.second())
}

/// Source of the current local time.
pub trait WallClock {
    fn now(&self) -> NaiveDateTime;

    fn sample(&self, lookahead: Option<Lookahead>, format: HourFormat) -> ClockTime {
        sample_time(self.now(), lookahead, format)
    }
}

/// The system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    now: Cell<NaiveDateTime>,
}

impl SimulatedClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, instant: NaiveDateTime) {
        self.now.set(instant);
    }

    pub fn advance(&self, delta: TimeDelta) {
        let now = self.now.get();
        self.now.set(now.checked_add_signed(delta).unwrap_or(now));
    }
}

impl WallClock for SimulatedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn lookahead_skews_late_seconds() {
        let clock = SimulatedClock::new(at(9, 59, 45));
        assert_eq!(
            clock.sample(Some(Lookahead::default()), HourFormat::TwentyFour),
            ClockTime::new(10, 0, 15)
        );
        assert_eq!(
            clock.sample(None, HourFormat::TwentyFour),
            ClockTime::new(9, 59, 45)
        );
    }

    #[test]
    fn lookahead_ignores_early_seconds() {
        let clock = SimulatedClock::new(at(9, 30, 40));
        assert_eq!(
            clock.sample(Some(Lookahead::default()), HourFormat::TwentyFour),
            ClockTime::new(9, 30, 40)
        );
    }

    #[test]
    fn twelve_hour_conversion() {
        let twelve = |h| sample_time(at(h, 0, 0), None, HourFormat::Twelve).hour;
        assert_eq!(twelve(0), 12);
        assert_eq!(twelve(7), 7);
        assert_eq!(twelve(12), 12);
        assert_eq!(twelve(13), 1);
        assert_eq!(twelve(23), 11);
        assert_eq!(sample_time(at(0, 0, 0), None, HourFormat::TwentyFour).hour, 0);
    }

    #[test]
    fn lookahead_crosses_midnight() {
        let time = sample_time(at(23, 59, 50), Some(Lookahead::default()), HourFormat::Twelve);
        assert_eq!(time, ClockTime::new(12, 0, 20));
    }

    #[test]
    fn digit_decomposition() {
        assert_eq!(ClockTime::new(7, 5, 0).digits(), [0, 7, 0, 5]);
        assert_eq!(ClockTime::new(12, 42, 0).digits(), [1, 2, 4, 2]);
        assert_eq!(ClockTime::new(10, 0, 0).digits(), [1, 0, 0, 0]);
        assert_eq!(ClockTime::new(23, 59, 0).digits(), [2, 3, 5, 9]);
    }

    #[test]
    fn simulated_clock_advances() {
        let clock = SimulatedClock::new(at(8, 0, 59));
        clock.advance(TimeDelta::try_seconds(2).unwrap());
        assert_eq!(clock.now(), at(8, 1, 1));
    }
}
