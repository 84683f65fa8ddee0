//! Uptime computation and timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Time zone every reported timestamp is expressed in.
pub const TIMEZONE: &str = "UTC";

/// Elapsed time since the service started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Uptime {
    /// Whole seconds elapsed, truncated.
    pub seconds: u64,
    /// `"<H> hours, <M> minutes"`.
    pub human: String,
    /// Current time with the `+00:00` suffix rewritten to `.000Z`.
    pub current_time: String,
    pub timezone: &'static str,
}

impl Uptime {
    /// Measure uptime against the wall clock.
    pub fn since(started_at: DateTime<Utc>) -> Self {
        Self::between(started_at, Utc::now())
    }

    /// Measure uptime at `now`. A clock that stepped backwards reports zero.
    pub fn between(started_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let seconds = elapsed_seconds(started_at, now);

        Self {
            seconds,
            human: humanize(seconds),
            current_time: zulu(&isoformat(now)),
            timezone: TIMEZONE,
        }
    }
}

/// Whole seconds between `started_at` and `now`, never negative.
pub fn elapsed_seconds(started_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - started_at).num_seconds()).unwrap_or(0)
}

/// Hours and leftover minutes; days roll into hours.
pub fn humanize(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{} hours, {} minutes", hours, minutes)
}

/// ISO-8601 with a `+00:00` offset. Microseconds are printed only when non-zero.
pub fn isoformat(ts: DateTime<Utc>) -> String {
    let format = if ts.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    ts.to_rfc3339_opts(format, false)
}

/// Textual `+00:00` -> `.000Z` rewrite. Existing fractional digits are kept as-is.
pub fn zulu(iso: &str) -> String {
    iso.replace("+00:00", ".000Z")
}
