//! Show timing: past/upcoming classification, partitioning and formatting.
//!
//! A show is *upcoming* when its start time is strictly after `now`, and
//! *past* otherwise. The boundary instant is therefore past, and every show
//! lands in exactly one bucket.

use chrono::{NaiveDateTime, TimeZone, Utc};

use crate::types::Timestamp;

/// Format used for start times in listings and detail pages.
pub const LISTING_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Formats accepted when a start time is submitted through a form.
const SUBMITTED_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

/// Classify a start time relative to `now`.
pub fn classify(start_time: Timestamp, now: Timestamp) -> ShowTiming {
    if start_time > now {
        ShowTiming::Upcoming
    } else {
        ShowTiming::Past
    }
}

/// Items split into past and upcoming buckets, each in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Partitioned<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    /// Project every item in both buckets, keeping bucket membership.
    pub fn map<U, F>(self, mut f: F) -> Partitioned<U>
    where
        F: FnMut(T) -> U,
    {
        Partitioned {
            past: self.past.into_iter().map(&mut f).collect(),
            upcoming: self.upcoming.into_iter().map(&mut f).collect(),
        }
    }
}

/// Partition `items` by the start time `start_of` extracts from each.
pub fn partition_by_start<T, I, F>(items: I, start_of: F, now: Timestamp) -> Partitioned<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Timestamp,
{
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for item in items {
        match classify(start_of(&item), now) {
            ShowTiming::Past => past.push(item),
            ShowTiming::Upcoming => upcoming.push(item),
        }
    }
    Partitioned { past, upcoming }
}

/// Number of start times strictly after `now`.
pub fn count_upcoming<I>(start_times: I, now: Timestamp) -> usize
where
    I: IntoIterator<Item = Timestamp>,
{
    start_times
        .into_iter()
        .filter(|start| classify(*start, now) == ShowTiming::Upcoming)
        .count()
}

/// Format a start time for listings (`05/21/2035, 21:30:00`).
pub fn format_start_time(start_time: Timestamp) -> String {
    start_time.format(LISTING_TIME_FORMAT).to_string()
}

/// Long-form date styles used on the show listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    Medium,
}

pub fn format_datetime(value: Timestamp, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Parse a submitted start time. Values carry no zone and are taken as UTC.
pub fn parse_start_time(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    SUBMITTED_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}
