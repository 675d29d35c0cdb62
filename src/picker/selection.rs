use crate::date_util::{start_of_year, with_month0, with_year};
use crate::picker::event::PickerOutcome;
use crate::picker::{InteractionMode, ValueOwner};
use crate::picker_type::PickerView;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::picker::DatePickerState;

impl DatePickerState {
    /// Select a day of the displayed month.
    ///
    /// Commits the day at midnight if it is within the bounds.
    /// Closes the picker, except for a `DateTime` picker where
    /// the time is still missing.
    pub fn select_day(&mut self, day: u32) -> PickerOutcome {
        if self.disabled || !self.kind().has_view(PickerView::Calendar) {
            return PickerOutcome::Continue;
        }
        let Some(date) = NaiveDate::from_ymd_opt(self.anchor.year(), self.anchor.month(), day)
        else {
            debug!("{} picker invalid day {}", self.kind(), day);
            return PickerOutcome::Unchanged;
        };
        let candidate = date.and_time(NaiveTime::MIN);
        if !self.is_in_range(candidate) {
            debug!("{} picker rejected {}", self.kind(), candidate);
            return PickerOutcome::Unchanged;
        }
        let r = self.commit(Some(candidate));
        if self.kind().info().closes_on_day_select {
            self.open = false;
        }
        r
    }

    /// Select a month of the displayed year. Month is 0-based.
    ///
    /// Only moves the displayed page and goes back to the calendar.
    /// The value stays as it is.
    pub fn select_month(&mut self, month0: u32) -> PickerOutcome {
        if self.disabled || !self.kind().has_view(PickerView::Month) {
            return PickerOutcome::Continue;
        }
        if !self
            .bounds()
            .month_selectable(self.anchor.year(), month0, self.range_policy())
        {
            debug!("{} picker rejected month {}", self.kind(), month0);
            return PickerOutcome::Unchanged;
        }
        self.anchor = with_month0(self.anchor, month0);
        self.view = PickerView::Calendar;
        PickerOutcome::Changed
    }

    /// Select a year.
    ///
    /// For a `Year` picker this commits Jan 1st of the year and closes.
    /// Otherwise it moves the displayed page to the year and goes back
    /// to the calendar.
    pub fn select_year(&mut self, year: i32) -> PickerOutcome {
        if self.disabled || !self.kind().has_view(PickerView::Year) {
            return PickerOutcome::Continue;
        }
        if self.kind().info().year_is_terminal {
            let Some(candidate) = start_of_year(year) else {
                return PickerOutcome::Unchanged;
            };
            if !self.is_in_range(candidate) {
                debug!("{} picker rejected {}", self.kind(), candidate);
                return PickerOutcome::Unchanged;
            }
            let r = self.commit(Some(candidate));
            self.open = false;
            r
        } else {
            if !self.year_selectable(year) {
                debug!("{} picker rejected year {}", self.kind(), year);
                return PickerOutcome::Unchanged;
            }
            self.anchor = with_year(self.anchor, year);
            self.view = PickerView::Calendar;
            PickerOutcome::Changed
        }
    }

    /// Set the time.
    ///
    /// The date comes from the value, or from the displayed page if
    /// there is no value yet. Seconds are set to 0. Doesn't close.
    pub fn select_time(&mut self, hour: u32, minute: u32) -> PickerOutcome {
        if self.disabled || !self.kind().has_view(PickerView::Time) {
            return PickerOutcome::Continue;
        }
        let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
            debug!("{} picker invalid time {}:{}", self.kind(), hour, minute);
            return PickerOutcome::Unchanged;
        };
        let date = self.value.unwrap_or(self.anchor).date();
        let candidate = date.and_time(time);
        if !self.is_in_range(candidate) {
            debug!("{} picker rejected {}", self.kind(), candidate);
            return PickerOutcome::Unchanged;
        }
        self.commit(Some(candidate))
    }

    /// Set the hour, keep the minute.
    pub fn select_hour(&mut self, hour: u32) -> PickerOutcome {
        let (_, minute) = self.time_fields();
        self.select_time(hour, minute)
    }

    /// Set the minute, keep the hour.
    pub fn select_minute(&mut self, minute: u32) -> PickerOutcome {
        let (hour, _) = self.time_fields();
        self.select_time(hour, minute)
    }

    /// Add n hours, wrapping around midnight. The date stays.
    pub fn step_hour(&mut self, n: i32) -> PickerOutcome {
        let (hour, _) = self.time_fields();
        self.select_hour((hour as i32 + n).rem_euclid(24) as u32)
    }

    /// Add n minutes, wrapping around the hour. The hour stays.
    pub fn step_minute(&mut self, n: i32) -> PickerOutcome {
        let (_, minute) = self.time_fields();
        self.select_minute((minute as i32 + n).rem_euclid(60) as u32)
    }

    /// Clear the value.
    ///
    /// Reports None each time it is called, even if there was
    /// no value.
    pub fn clear(&mut self) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        self.clear_value()
    }

    /// Clear without looking at the disabled flag.
    pub(super) fn clear_value(&mut self) -> PickerOutcome {
        if self.owner() == ValueOwner::Engine {
            self.anchor = self.clock.now();
        }
        if self.mode() == InteractionMode::TextInput {
            self.open = false;
        }
        self.commit(None)
    }

    /// Typed-in text.
    ///
    /// Empty text clears the value. Text that can't be parsed
    /// or a value outside the bounds is ignored.
    pub fn set_text(&mut self, text: &str) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        if text.trim().is_empty() {
            return self.clear();
        }
        let today = self.clock.today().date();
        let Some(candidate) = self.format().parse(text, today) else {
            debug!("{} picker can't parse {:?}", self.kind(), text);
            return PickerOutcome::Unchanged;
        };
        if !self.is_in_range(candidate) {
            debug!("{} picker rejected {}", self.kind(), candidate);
            return PickerOutcome::Unchanged;
        }
        self.commit(Some(candidate))
    }

    /// Current value.
    pub fn get_value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    /// Set the value and report it like a selection.
    ///
    /// There is no range check, and this works for a disabled
    /// picker too.
    pub fn set_value(&mut self, value: Option<NaiveDateTime>) -> PickerOutcome {
        self.commit(value)
    }

    /// Take over the value from the host. No callback.
    ///
    /// Moves the displayed page to the value.
    pub fn sync_value(&mut self, value: Option<NaiveDateTime>) {
        self.store_value(value);
        if let Some(value) = value {
            self.anchor = value;
        }
    }
}
