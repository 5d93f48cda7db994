use chrono::{Duration, NaiveDateTime};
use std::iter::Iterator;
use std::mem::replace;

/// Default spacing between grid points, in minutes.
pub const DEFAULT_STEP_MINUTES: i64 = 15;

/// Equally spaced timestamps from a start up to and including any point
/// that is not after the end.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct TimeGrid {
    next: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
}

impl TimeGrid {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, step: Duration) -> TimeGrid {
        assert!(step > Duration::zero(), "TimeGrid step must be positive");
        TimeGrid {
            next: start,
            end,
            step,
        }
    }
}

impl Iterator for TimeGrid {
    type Item = NaiveDateTime;
    fn next(&mut self) -> Option<Self::Item> {
        if self.next <= self.end {
            let following = self.next + self.step;
            Some(replace(&mut self.next, following))
        } else {
            None
        }
    }
}
