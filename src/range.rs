//!
//! Min/max bounds for the picker.
//!

use crate::date_util::{days_in_month, start_of_year};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// How the bounds are compared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
    /// Compare only the dates, min and max inclusive.
    ///
    /// Used by the calendar grid, where every day is a whole cell.
    #[default]
    DayInclusive,
    /// Compare the exact instants, min inclusive, max exclusive.
    ///
    /// Used for typed-in values.
    MaxExclusive,
}

/// Optional min/max date.
///
/// There is no check for min <= max. If that doesn't hold
/// nothing can be selected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: Option<NaiveDateTime>,
    pub max: Option<NaiveDateTime>,
}

impl DateBounds {
    pub fn new(min: Option<NaiveDateTime>, max: Option<NaiveDateTime>) -> Self {
        Self { min, max }
    }

    /// Lower bound.
    pub fn with_min(mut self, min: NaiveDateTime) -> Self {
        self.min = Some(min);
        self
    }

    /// Upper bound.
    pub fn with_max(mut self, max: NaiveDateTime) -> Self {
        self.max = Some(max);
        self
    }

    /// No bounds at all.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Is the candidate admissible.
    pub fn contains(&self, candidate: NaiveDateTime, policy: RangePolicy) -> bool {
        match policy {
            RangePolicy::DayInclusive => {
                if let Some(min) = self.min {
                    if candidate.date() < min.date() {
                        return false;
                    }
                }
                if let Some(max) = self.max {
                    if candidate.date() > max.date() {
                        return false;
                    }
                }
                true
            }
            RangePolicy::MaxExclusive => {
                if let Some(min) = self.min {
                    if candidate < min {
                        return false;
                    }
                }
                if let Some(max) = self.max {
                    if candidate >= max {
                        return false;
                    }
                }
                true
            }
        }
    }

    /// Is the given day selectable at all. Checks midnight.
    pub fn day_selectable(&self, date: NaiveDate, policy: RangePolicy) -> bool {
        self.contains(date.and_time(NaiveTime::MIN), policy)
    }

    /// Is there at least one selectable day in this month.
    /// Month is 0-based.
    pub fn month_selectable(&self, year: i32, month0: u32, policy: RangePolicy) -> bool {
        if month0 >= 12 {
            return false;
        }
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, month0 + 1, 1),
            NaiveDate::from_ymd_opt(year, month0 + 1, days_in_month(year, month0 + 1)),
        ) else {
            return false;
        };
        self.span_selectable(first, last, policy)
    }

    /// Is there at least one selectable day in this year.
    pub fn year_selectable(&self, year: i32, policy: RangePolicy) -> bool {
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return false;
        };
        self.span_selectable(first, last, policy)
    }

    /// Is Jan 1st of the year admissible. That's the value
    /// a year-picker commits.
    pub fn year_start_selectable(&self, year: i32, policy: RangePolicy) -> bool {
        match start_of_year(year) {
            Some(v) => self.contains(v, policy),
            None => false,
        }
    }

    // Overlap of [first, last] with the admissible days.
    fn span_selectable(&self, first: NaiveDate, last: NaiveDate, policy: RangePolicy) -> bool {
        let exact = policy == RangePolicy::MaxExclusive;
        let lo = match self.min {
            None => first,
            Some(min) => {
                // midnight of min.date() is before min.
                let day = if exact && min.time() > NaiveTime::MIN {
                    let Some(day) = min.date().succ_opt() else {
                        return false;
                    };
                    day
                } else {
                    min.date()
                };
                day.max(first)
            }
        };
        let hi = match self.max {
            None => last,
            Some(max) => {
                // midnight of max.date() is max itself.
                let day = if exact && max.time() == NaiveTime::MIN {
                    let Some(day) = max.date().pred_opt() else {
                        return false;
                    };
                    day
                } else {
                    max.date()
                };
                day.min(last)
            }
        };
        lo <= hi
    }
}

/// Is the candidate admissible for the bounds.
pub fn is_in_range(candidate: NaiveDateTime, bounds: &DateBounds, policy: RangePolicy) -> bool {
    bounds.contains(candidate, policy)
}
