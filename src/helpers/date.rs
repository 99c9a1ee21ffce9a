//! Date helpers for front-matter dates

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::cmp::Ordering;

lazy_static! {
    static ref ISO_DATE_PREFIX: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid date prefix regex");
}

/// Parse a front-matter date string in one of the common formats.
///
/// Offsets are normalised to UTC; dates without a time are midnight.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_utc());
        }
    }

    None
}

/// Sort key for post dates.
///
/// Dates starting with `YYYY-MM-DD` keep their raw text as the key, so a set
/// of such dates orders exactly as plain strings do. Other dates that parse
/// are rewritten as `YYYY-MM-DD HH:MM:SS` and slot in among them. Anything
/// else orders before (older than) every recognised date, by raw text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateKey<'a> {
    recognised: bool,
    key: Cow<'a, str>,
}

impl<'a> DateKey<'a> {
    pub fn new(raw: &'a str) -> Self {
        if ISO_DATE_PREFIX.is_match(raw) {
            return Self {
                recognised: true,
                key: Cow::Borrowed(raw),
            };
        }

        match parse_date(raw) {
            Some(dt) => Self {
                recognised: true,
                key: Cow::Owned(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            },
            None => Self {
                recognised: false,
                key: Cow::Borrowed(raw),
            },
        }
    }
}

/// Compare two date strings so that the newest comes first
pub fn newest_first(a: &str, b: &str) -> Ordering {
    DateKey::new(b).cmp(&DateKey::new(a))
}
