//! Publish-date parsing and file change-time fallback

use std::fs::Metadata;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Date layout accepted in `<time datetime="...">`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `datetime` attribute value as a calendar date at local midnight
///
/// Only the leading `YYYY-MM-DD` is read; anything after it (a time of day,
/// an offset) is ignored, so `2014-03-01T09:30Z` still yields 2014-03-01.
///
/// Returns `None` if the value does not start with a valid date, or if local
/// midnight does not exist on that day.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use sblg_article::date::parse_date;
///
/// let date = parse_date("2014-03-01").unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2014, 3, 1));
/// assert_eq!(date.hour(), 0);
///
/// assert!(parse_date("March 1st").is_none());
/// ```
pub fn parse_date(value: &str) -> Option<DateTime<Local>> {
    let (date, _rest) = NaiveDate::parse_and_remainder(value, DATE_FORMAT).ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local.from_local_datetime(&midnight).earliest()
}

/// Last metadata-change time of a file, in local time
///
/// Uses the inode change time on Unix.
#[cfg(unix)]
pub fn change_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    DateTime::from_timestamp(metadata.ctime(), nanos).map(|utc| utc.with_timezone(&Local))
}

/// Last metadata-change time of a file, in local time
///
/// Platforms without an inode change time use the modification time.
#[cfg(not(unix))]
pub fn change_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    metadata.modified().ok().map(DateTime::<Local>::from)
}
