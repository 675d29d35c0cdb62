//!
//! Date arithmetic for the picker pages.
//!
//! Two flavours of month arithmetic exist. [add_months] and [add_years]
//! keep the day-of-month and let it roll over into the next month,
//! the way a plain component-wise date calculation does: Jan 31 + 1 month
//! is Mar 3 (or Mar 2 in a leap year). [shift_months] clamps the day
//! instead and is what the page navigation uses, so that paging through
//! the months never skips one.
//!

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Is this a leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in the month. Month is 1-based.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of the first day of the month. Sunday is 0.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|v| v.weekday().num_days_from_sunday())
        .unwrap_or_default()
}

/// Same year, month and day. Time is ignored.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Truncate to midnight.
pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// Year and 1-based month after adding delta months.
fn month_offset(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total = year as i64 * 12 + month0 as i64 + delta as i64;
    (total.div_euclid(12) as i32, total.rem_euclid(12) as u32 + 1)
}

/// Day 1 of the month plus (day - 1) days.
fn rollover(year: i32, month: u32, day: u32, time: NaiveTime) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(day.saturating_sub(1) as u64))
        .map(|v| v.and_time(time))
}

/// Day clamped to the length of the month.
fn clamped(year: i32, month: u32, day: u32, time: NaiveTime) -> Option<NaiveDateTime> {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).map(|v| v.and_time(time))
}

/// Add delta months. The day-of-month is kept and overflows
/// into the next month if it doesn't exist in the target month.
///
/// Returns the date unchanged if the result is out of chrono's range.
pub fn add_months(date: NaiveDateTime, delta: i32) -> NaiveDateTime {
    let (year, month) = month_offset(date.year(), date.month0(), delta);
    rollover(year, month, date.day(), date.time()).unwrap_or(date)
}

/// Add delta years. Feb 29 overflows to Mar 1 in a common year.
///
/// Returns the date unchanged if the result is out of chrono's range.
pub fn add_years(date: NaiveDateTime, delta: i32) -> NaiveDateTime {
    let Some(year) = date.year().checked_add(delta) else {
        return date;
    };
    rollover(year, date.month(), date.day(), date.time()).unwrap_or(date)
}

/// Add delta months and clamp the day to the target month.
///
/// Returns the date unchanged if the result is out of chrono's range.
pub fn shift_months(date: NaiveDateTime, delta: i32) -> NaiveDateTime {
    let (year, month) = month_offset(date.year(), date.month0(), delta);
    clamped(year, month, date.day(), date.time()).unwrap_or(date)
}

/// Replace the year. The day is clamped.
pub fn with_year(date: NaiveDateTime, year: i32) -> NaiveDateTime {
    clamped(year, date.month(), date.day(), date.time()).unwrap_or(date)
}

/// Replace the month. Month is 0-based, the day is clamped.
/// Invalid months return the date unchanged.
pub fn with_month0(date: NaiveDateTime, month0: u32) -> NaiveDateTime {
    if month0 >= 12 {
        return date;
    }
    clamped(date.year(), month0 + 1, date.day(), date.time()).unwrap_or(date)
}

/// Jan 1st, midnight.
pub fn start_of_year(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(|v| v.and_time(NaiveTime::MIN))
}
