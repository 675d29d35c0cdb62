//!
//! The four picker flavours and what differs between them.
//!
//! All per-type behaviour is collected in one [PickerInfo] table
//! instead of being spread over the picker as conditionals.
//!

use std::fmt::{Display, Formatter};

/// Kind of value the picker produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerType {
    /// A calendar date. The time is always midnight.
    #[default]
    Date,
    /// Hour and minute. The date part is today and carries no meaning.
    Time,
    /// Calendar date with hour and minute.
    DateTime,
    /// A year. The value is Jan 1st, midnight.
    Year,
}

/// Views of the dropdown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerView {
    /// Day grid of one month.
    #[default]
    Calendar,
    /// The 12 months.
    Month,
    /// A page of years.
    Year,
    /// Hour and minute fields.
    Time,
}

/// Static configuration for one [PickerType].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerInfo {
    /// chrono pattern used when none is given.
    pub default_pattern: &'static str,
    /// View after opening the picker.
    pub default_view: PickerView,
    /// Views this type can show.
    pub views: &'static [PickerView],
    /// Selecting a day finishes the selection and closes the picker.
    pub closes_on_day_select: bool,
    /// Selecting a year is the final selection.
    pub year_is_terminal: bool,
    /// Has hour/minute fields.
    pub has_time: bool,
    /// Placeholder when nothing is selected.
    pub placeholder: &'static str,
}

static DATE: PickerInfo = PickerInfo {
    default_pattern: "%Y-%m-%d",
    default_view: PickerView::Calendar,
    views: &[PickerView::Calendar, PickerView::Month, PickerView::Year],
    closes_on_day_select: true,
    year_is_terminal: false,
    has_time: false,
    placeholder: "Select date",
};

static TIME: PickerInfo = PickerInfo {
    default_pattern: "%H:%M",
    default_view: PickerView::Time,
    views: &[PickerView::Time],
    closes_on_day_select: false,
    year_is_terminal: false,
    has_time: true,
    placeholder: "Select time",
};

static DATE_TIME: PickerInfo = PickerInfo {
    default_pattern: "%Y-%m-%d %H:%M",
    default_view: PickerView::Calendar,
    views: &[
        PickerView::Calendar,
        PickerView::Month,
        PickerView::Year,
        PickerView::Time,
    ],
    closes_on_day_select: false,
    year_is_terminal: false,
    has_time: true,
    placeholder: "Select date and time",
};

static YEAR: PickerInfo = PickerInfo {
    default_pattern: "%Y",
    default_view: PickerView::Year,
    views: &[PickerView::Year],
    closes_on_day_select: false,
    year_is_terminal: true,
    has_time: false,
    placeholder: "Select year",
};

impl PickerType {
    /// All types.
    pub const ALL: [PickerType; 4] = [
        PickerType::Date,
        PickerType::Time,
        PickerType::DateTime,
        PickerType::Year,
    ];

    /// Static configuration.
    pub fn info(self) -> &'static PickerInfo {
        match self {
            PickerType::Date => &DATE,
            PickerType::Time => &TIME,
            PickerType::DateTime => &DATE_TIME,
            PickerType::Year => &YEAR,
        }
    }

    #[inline]
    pub fn default_pattern(self) -> &'static str {
        self.info().default_pattern
    }

    #[inline]
    pub fn default_view(self) -> PickerView {
        self.info().default_view
    }

    /// Can this type show the view.
    #[inline]
    pub fn has_view(self, view: PickerView) -> bool {
        self.info().views.contains(&view)
    }
}

impl Display for PickerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PickerType::Date => "date",
            PickerType::Time => "time",
            PickerType::DateTime => "datetime",
            PickerType::Year => "year",
        };
        f.write_str(s)
    }
}
