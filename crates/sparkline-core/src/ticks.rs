// File: crates/sparkline-core/src/ticks.rs
// Summary: Hour-of-day tick cadence and tick label formatting for the time axis.

use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};

use crate::domain::Domain;

/// Ticks at every `n`-th hour of the (UTC) day: 00:00, n:00, 2n:00, ...
/// restarting at each midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickInterval {
    hours: u32,
}

impl TickInterval {
    /// `hours` is clamped to `1..=24`.
    pub fn hours(hours: u32) -> Self {
        Self { hours: hours.clamp(1, 24) }
    }

    pub fn every(&self) -> u32 { self.hours }

    fn matches(&self, t: &DateTime<Utc>) -> bool {
        t.minute() == 0 && t.second() == 0 && t.nanosecond() == 0 && t.hour() % self.hours == 0
    }

    /// Tick instants in the half-open interval `[start, end)`.
    ///
    /// Half-open so a 24h domain yields `24 / n` ticks regardless of where it
    /// starts. A collapsed domain yields its single instant if it is on a tick.
    /// Cost is linear in the span: one tick per `hours` across the whole domain.
    pub fn ticks(&self, domain: &Domain<DateTime<Utc>>) -> Vec<DateTime<Utc>> {
        let (start, end) = (domain.min, domain.max);
        if start >= end {
            return if start == end && self.matches(&start) { vec![start] } else { Vec::new() };
        }

        let mut out = Vec::new();
        let mut day = start.date_naive();
        loop {
            let midnight = day.and_time(NaiveTime::MIN).and_utc();
            if midnight >= end {
                break;
            }
            for h in (0..24).step_by(self.hours as usize) {
                let t = midnight + Duration::hours(h as i64);
                if t >= end {
                    break;
                }
                if t >= start {
                    out.push(t);
                }
            }
            day = match day.succ_opt() {
                Some(d) => d,
                None => break,
            };
        }
        out
    }
}

impl Default for TickInterval {
    fn default() -> Self { Self::hours(4) }
}

/// strftime-style label format for X ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickFormat(pub &'static str);

impl TickFormat {
    /// Two-digit 24-hour hour of day, "00".."23".
    pub const HOUR_OF_DAY: TickFormat = TickFormat("%H");

    pub fn format(&self, t: &DateTime<Utc>) -> String {
        t.format(self.0).to_string()
    }
}

impl Default for TickFormat {
    fn default() -> Self { Self::HOUR_OF_DAY }
}
