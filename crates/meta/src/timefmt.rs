use std::fmt;

use chrono::{DateTime, Local, TimeZone};

use crate::record::PathMetadata;

const STAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S%z";

/// The three rendered local-time strings of a report.
///
/// Always produced together from the same [`PathMetadata`]; each string
/// carries the UTC offset in effect at the instant it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTimestamps {
    pub access: String,
    pub modify: String,
    pub change: String,
}

impl FormattedTimestamps {
    pub fn for_meta(meta: &PathMetadata) -> Self {
        Self {
            access: local_stamp(meta.atime_secs),
            modify: local_stamp(meta.mtime_secs),
            change: local_stamp(meta.ctime_secs),
        }
    }
}

/// Render epoch seconds as `YYYY-MM-DD HH:MM:SS±HHMM` in the local timezone.
pub fn local_stamp(secs: i64) -> String {
    stamp_in(secs, &Local)
}

fn stamp_in<Tz: TimeZone>(secs: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let dt = tz
        .timestamp_opt(secs, 0)
        .earliest()
        .unwrap_or_else(|| DateTime::UNIX_EPOCH.with_timezone(tz));
    dt.format(STAMP_PATTERN).to_string()
}

#[cfg(test)]
#[path = "timefmt_tests.rs"]
mod tests;
