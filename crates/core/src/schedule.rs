// Time-of-day trigger queue for the scheduler loop.
//
// The queue is pure over injected timestamps: `due_at(now)` reports the
// triggers whose scheduled time fell inside the window since the previous
// check and advances the checkpoint. Sleeping lives in the binary's poll
// loop, not here, so tests drive the queue with a simulated clock.
//
// The daily-idempotence guard in the driver is read-then-act; two processes
// polling the same repository can still race it.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Days a trigger fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayFilter {
    Daily,
    Weekdays,
}

impl DayFilter {
    fn matches(self, weekday: Weekday) -> bool {
        match self {
            DayFilter::Daily => true,
            DayFilter::Weekdays => !matches!(weekday, Weekday::Sat | Weekday::Sun),
        }
    }
}

/// One scheduled firing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub day: DayFilter,
    pub at: NaiveTime,
}

impl Trigger {
    pub fn new(day: DayFilter, at: NaiveTime) -> Self {
        Self { day, at }
    }

    /// Whether a firing time for this trigger lies in `(after, upto]`.
    fn fires_between(&self, after: NaiveDateTime, upto: NaiveDateTime) -> bool {
        // The window is minutes long in practice, so it spans at most two
        // calendar dates; walk them rather than special-casing midnight.
        let mut date = after.date();
        while date <= upto.date() {
            if self.day.matches(date.weekday()) {
                let firing = date.and_time(self.at);
                if firing > after && firing <= upto {
                    return true;
                }
            }
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        false
    }
}

/// Registered triggers plus the timestamp of the last poll.
#[derive(Debug, Clone)]
pub struct ScheduleQueue {
    triggers: Vec<Trigger>,
    last_checked: NaiveDateTime,
}

impl ScheduleQueue {
    pub fn new(triggers: Vec<Trigger>, started_at: NaiveDateTime) -> Self {
        Self { triggers, last_checked: started_at }
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Triggers that became due since the previous check. Advances the
    /// checkpoint to `now`, so each firing time is reported once.
    pub fn due_at(&mut self, now: NaiveDateTime) -> Vec<Trigger> {
        let due = self
            .triggers
            .iter()
            .copied()
            .filter(|trigger| trigger.fires_between(self.last_checked, now))
            .collect();
        self.last_checked = now;
        due
    }
}

/// Default trigger set: one daily run at 14:30 plus a weekday run at 10:00.
pub fn default_triggers() -> Vec<Trigger> {
    vec![
        Trigger::new(DayFilter::Daily, NaiveTime::from_hms_opt(14, 30, 0).expect("valid time")),
        Trigger::new(DayFilter::Weekdays, NaiveTime::from_hms_opt(10, 0, 0).expect("valid time")),
    ]
}
