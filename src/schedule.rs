//! Commit timestamp scheduling
//!
//! Produces a batch of monotonically increasing timestamps inside a fixed
//! window. A random-walk of 5-180 minute gaps on its own either wanders into
//! the middle of the night or blows past the window end, so two corrections
//! keep the schedule plausible: timestamps landing outside working hours snap
//! to the start of the next day, and once the walk overshoots the window end
//! the remaining entries are compressed evenly into the time left.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use rand::Rng;
use tracing::debug;

/// Longest gap drawn for the first commit of a day, in minutes.
const DAY_START_MAX_MINUTES: i64 = 30;

/// Inclusive hour-of-day band treated as working time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHours {
    pub start: u32,
    pub end: u32,
}

impl WorkHours {
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour <= self.end
    }
}

/// The bounded time range a schedule is generated into.
///
/// Invariants (enforced at config load, assumed here): `start < end` and
/// `min_interval <= max_interval`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub min_interval: TimeDelta,
    pub max_interval: TimeDelta,
    pub work_hours: WorkHours,
}

/// Generate `n` timestamps within `window`, non-decreasing, all in
/// `[window.start, window.end]`.
///
/// The first entry is exactly `window.start`. Each subsequent entry adds a
/// uniform random interval to its predecessor, with two corrections:
///
/// 1. A predecessor outside working hours advances to the next calendar day
///    at `work_hours.start`, with a short redrawn interval (the first action
///    of the day comes quickly).
/// 2. An entry that would land past `window.end` is recomputed as an even
///    share of the time remaining, which also pins every later entry inside
///    the window.
///
/// Entries are not guaranteed strictly increasing: when many remain and
/// little time is left, the compressed share rounds to zero and timestamps
/// repeat. Callers that need distinct times must widen the window.
pub fn generate(n: usize, window: &ScheduleWindow, rng: &mut impl Rng) -> Vec<NaiveDateTime> {
    let mut schedule = Vec::with_capacity(n);
    if n == 0 {
        return schedule;
    }

    schedule.push(window.start);

    for i in 1..n {
        let prev = schedule[i - 1];
        let mut cursor = prev;
        let mut interval = draw_interval(rng, window.min_interval, window.max_interval);

        if !window.work_hours.contains(cursor.hour()) {
            cursor = next_workday_start(cursor, window.work_hours.start);
            let cap = window.min_interval.max(TimeDelta::minutes(DAY_START_MAX_MINUTES));
            interval = draw_interval(rng, window.min_interval, cap);
        }

        let mut next = cursor + interval;
        if next > window.end {
            let remaining = (n - i) as i32;
            next = prev + (window.end - prev) / remaining;
            debug!(
                entry = i,
                remaining, "schedule overshot window end, compressing"
            );
        }

        schedule.push(next);
    }

    schedule
}

fn draw_interval(rng: &mut impl Rng, min: TimeDelta, max: TimeDelta) -> TimeDelta {
    TimeDelta::minutes(rng.random_range(min.num_minutes()..=max.num_minutes()))
}

/// 09:00 (or whatever the configured start hour is) on the day after `t`.
fn next_workday_start(t: NaiveDateTime, start_hour: u32) -> NaiveDateTime {
    t.date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(start_hour, 0, 0))
        .unwrap_or(t)
}
