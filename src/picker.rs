//!
//! Date/time picker.
//!
//! [DatePickerState] is the complete picker: committed value, displayed
//! page, current view, open/closed. It does all the event-handling.
//!
//! There is no widget that renders it. The renderer asks the state for
//! the [calendar_days](DatePickerState::calendar_days),
//! [month_cells](DatePickerState::month_cells),
//! [year_cells](DatePickerState::year_cells),
//! the [header](DatePickerState::header) and the
//! [display_text](DatePickerState::display_text), and writes the areas of
//! all click-targets back into the state. Those are used for mouse
//! handling.
//!
//! The value is only changed by a *terminal* selection: a day for `Date`
//! and `DateTime`, a time field for `Time` and `DateTime`, a year for
//! `Year`, or typed-in text. Picking a month or a year while drilling down
//! to a day only changes the displayed page. Each terminal selection
//! calls the on_change callback and returns [PickerOutcome::Value].
//!

mod command;
pub(crate) mod event;
mod handle;
mod selection;
mod state;

pub use command::{PickerCommand, PickerHandle};
pub use event::PickerOutcome;
pub use handle::{handle_events, handle_mouse_events};
pub use state::DatePickerState;

use crate::range::RangePolicy;
use chrono::NaiveDate;

/// How the user enters the value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Dropdown with the day, month, year and time grids.
    #[default]
    Calendar,
    /// The value is typed in. A `Year` picker additionally
    /// gets a dropdown with a decade of years.
    ///
    /// Clearing the value closes the dropdown.
    TextInput,
}

impl InteractionMode {
    /// Range policy for this mode.
    pub fn range_policy(self) -> RangePolicy {
        match self {
            InteractionMode::Calendar => RangePolicy::DayInclusive,
            InteractionMode::TextInput => RangePolicy::MaxExclusive,
        }
    }

    /// Years per prev/next step in the year view.
    pub fn year_step(self) -> i32 {
        match self {
            InteractionMode::Calendar => 1,
            InteractionMode::TextInput => 10,
        }
    }
}

/// Who owns the value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ValueOwner {
    /// The picker keeps the committed value.
    #[default]
    Engine,
    /// The host keeps the value. Selections are reported, but
    /// the picker only takes over a value with
    /// [sync_value](DatePickerState::sync_value).
    Host,
}

/// One day of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month.
    pub day: u32,
    pub date: NaiveDate,
    /// Within the bounds. Other days are shown but can't be selected.
    pub selectable: bool,
    /// This is the committed value.
    pub selected: bool,
    /// Keyboard cursor.
    pub cursor: bool,
    pub today: bool,
}

/// One month of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    /// 0-based month.
    pub month0: u32,
    /// Localized month name.
    pub name: String,
    /// At least one day of the month is within the bounds.
    pub selectable: bool,
    /// Month of the committed value.
    pub selected: bool,
    /// Keyboard cursor.
    pub cursor: bool,
}

/// One year of the year grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    pub selectable: bool,
    /// Year of the committed value.
    pub selected: bool,
    /// Keyboard cursor.
    pub cursor: bool,
}

/// Labels for the header of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerHeader {
    /// Month name. None if there is no month view.
    pub month: Option<String>,
    /// Year, or the range of years shown.
    pub year: String,
}
