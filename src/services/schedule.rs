//! Past/upcoming classification of shows.
//!
//! Nothing about a show's status is stored: a show is "past" when it started
//! strictly before the reference instant and "upcoming" otherwise, so the same
//! row moves between the two lists as time passes.

use chrono::{Local, NaiveDateTime};

/// Reference instant for classification, in server local time.
///
/// Start times are entered and stored without an offset, so they are compared
/// against the local wall clock.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time >= now
}

/// Split `items` into `(past, upcoming)`, keeping the input order within each half.
pub fn partition<T, F>(items: Vec<T>, now: NaiveDateTime, start_time: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> NaiveDateTime,
{
    let (upcoming, past): (Vec<T>, Vec<T>) = items
        .into_iter()
        .partition(|item| is_upcoming(start_time(item), now));
    (past, upcoming)
}

pub fn count_upcoming<I>(start_times: I, now: NaiveDateTime) -> usize
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    start_times
        .into_iter()
        .filter(|start| is_upcoming(*start, now))
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Thursday January, 1, 2099 at 8:00PM`
    Full,
    /// `Thu 01, 01, 2099 8:00PM`
    Medium,
}

pub fn format_datetime(value: NaiveDateTime, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}
