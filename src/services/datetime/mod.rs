//! Flexible parsing of loosely-formatted date/time strings.
//!
//! Countdown targets arrive as page attributes written by hand, so the parser
//! accepts `YYYY-MM-DD[ T]HH:MM[:SS]`, `/`-separated variants, and sloppy
//! digit widths. It never fails: anything unparsable resolves to the caller's
//! fallback instant (normally "now"), which downstream reads as an already
//! finished countdown.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Standard literal layouts tried before any normalization, most specific
/// first. All are interpreted in local time.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolves `raw` to a local instant, falling back to the current time when
/// nothing matches.
pub fn parse_flexible(raw: &str) -> DateTime<Local> {
    parse_flexible_at(raw, Local::now())
}

/// Same as [`parse_flexible`] with an injected fallback instant, so callers
/// and tests control what "now" means.
///
/// Attempt order: literal parse of the trimmed input, literal parse after
/// separator normalization, manual component parse, then the fallback.
pub fn parse_flexible_at(raw: &str, fallback: DateTime<Local>) -> DateTime<Local> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback;
    }

    if let Some(parsed) = parse_literal(trimmed) {
        return parsed;
    }

    let normalized = normalize_separators(trimmed);
    if let Some(parsed) = parse_literal(&normalized) {
        return parsed;
    }

    if let Some(parsed) = parse_components(&normalized) {
        return parsed;
    }

    log::debug!("unparsable date string {raw:?}, falling back to current time");
    fallback
}

fn parse_literal(value: &str) -> Option<DateTime<Local>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Local));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return resolve_local(naive);
        }
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
    resolve_local(date.and_hms_opt(0, 0, 0)?)
}

/// `YYYY/MM/DD HH:MM:SS` and friends: every `/` becomes `-`, the first space
/// becomes a `T` separator.
fn normalize_separators(value: &str) -> String {
    value.replace('/', "-").replacen(' ', "T", 1)
}

/// Manual net under the literal layouts: `YEAR-MONTH-DAY[THOUR:MINUTE[:SECOND]]`
/// with a 4-digit year and 1-2 digit time components. Out-of-range components
/// (month 13, hour 25) are rejected rather than rolled over.
fn parse_components(value: &str) -> Option<DateTime<Local>> {
    let (date_part, time_part) = match value.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };

    let mut fields = date_part.split('-');
    let year = parse_field(fields.next()?, 4, 4)?;
    let month = parse_field(fields.next()?, 1, 2)?;
    let day = parse_field(fields.next()?, 1, 2)?;
    if fields.next().is_some() {
        return None;
    }

    let (hour, minute, second) = match time_part {
        Some(time) => {
            let mut fields = time.split(':');
            let hour = parse_field(fields.next()?, 1, 2)?;
            let minute = parse_field(fields.next()?, 1, 2)?;
            let second = match fields.next() {
                Some(field) => parse_field(field, 1, 2)?,
                None => 0,
            };
            if fields.next().is_some() {
                return None;
            }
            (hour, minute, second)
        }
        None => (0, 0, 0),
    };

    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)?.and_hms_opt(hour, minute, second)?;
    resolve_local(naive)
}

fn parse_field(field: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if field.len() < min_len || field.len() > max_len {
        return None;
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Maps a wall-clock time into the local zone. Ambiguous times (DST overlap)
/// take the earliest mapping; nonexistent times (DST gap) yield None.
fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}
