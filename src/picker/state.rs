//!
//! The picker state.
//!
//! Configuration, open/close, view navigation and the data
//! a renderer needs. Selections live in `selection.rs`, event-handling
//! in `handle.rs`.
//!

use crate::_private::NonExhaustive;
use crate::clock::{Clock, LocalClock};
use crate::date_util::{days_in_month, first_weekday_of_month, same_day, shift_months, with_year};
use crate::format::PickerFormat;
use crate::picker::command::{CommandQueue, PickerCommand, PickerHandle};
use crate::picker::event::PickerOutcome;
use crate::picker::{
    DayCell, InteractionMode, MonthCell, PickerHeader, ValueOwner, YearCell,
};
use crate::picker_type::{PickerType, PickerView};
use crate::range::{DateBounds, RangePolicy};
use chrono::{Datelike, Days, Locale, NaiveDate, NaiveDateTime, Timelike};
use log::debug;
use rat_focus::FocusFlag;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Callback for committed values.
type OnChange = Box<dyn FnMut(Option<NaiveDateTime>) + 'static>;

/// State & event-handling.
pub struct DatePickerState {
    /// Area of the input field. Clicking toggles the dropdown.
    /// __read+write__ set by the renderer.
    pub area: Rect,
    /// Clear button.
    /// __read+write__ set by the renderer.
    pub area_clear: Rect,
    /// Complete dropdown.
    /// __read+write__ set by the renderer.
    pub area_popup: Rect,
    /// Previous page button.
    /// __read+write__ set by the renderer.
    pub area_prev: Rect,
    /// Next page button.
    /// __read+write__ set by the renderer.
    pub area_next: Rect,
    /// Month label in the header.
    /// __read+write__ set by the renderer.
    pub area_month_label: Rect,
    /// Year label in the header.
    /// __read+write__ set by the renderer.
    pub area_year_label: Rect,
    /// Day cells, index 0 is the 1st.
    /// __read+write__ set by the renderer.
    pub area_days: [Rect; 31],
    /// Month cells.
    /// __read+write__ set by the renderer.
    pub area_months: [Rect; 12],
    /// Year cells, same order as [year_page](Self::year_page).
    /// __read+write__ set by the renderer.
    pub area_years: Vec<Rect>,
    /// Hour field.
    /// __read+write__ set by the renderer.
    pub area_hour: Rect,
    /// Minute field.
    /// __read+write__ set by the renderer.
    pub area_minute: Rect,

    /// Picker type. Fixed.
    kind: PickerType,
    mode: InteractionMode,
    owner: ValueOwner,
    policy: RangePolicy,
    bounds: DateBounds,
    format: PickerFormat,

    /// Committed value.
    pub(super) value: Option<NaiveDateTime>,
    /// Decides the displayed page. Doubles as keyboard cursor.
    pub(super) anchor: NaiveDateTime,
    pub(super) view: PickerView,
    pub(super) open: bool,

    placeholder: Option<String>,
    pub(super) disabled: bool,
    is_error: bool,
    error_message: String,
    show_icon: bool,
    icon: Option<String>,

    pub(super) clock: Rc<dyn Clock>,
    on_change: Option<OnChange>,
    commands: Rc<CommandQueue>,
    published: Rc<Cell<Option<NaiveDateTime>>>,

    /// Focus
    /// __read+write__
    pub focus: FocusFlag,

    pub non_exhaustive: NonExhaustive,
}

impl Debug for DatePickerState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePickerState")
            .field("area", &self.area)
            .field("area_popup", &self.area_popup)
            .field("kind", &self.kind)
            .field("mode", &self.mode)
            .field("owner", &self.owner)
            .field("policy", &self.policy)
            .field("bounds", &self.bounds)
            .field("format", &self.format)
            .field("value", &self.value)
            .field("anchor", &self.anchor)
            .field("view", &self.view)
            .field("open", &self.open)
            .field("placeholder", &self.placeholder)
            .field("disabled", &self.disabled)
            .field("is_error", &self.is_error)
            .field("error_message", &self.error_message)
            .field("clock", &self.clock)
            .field("on_change", &self.on_change.as_ref().map(|_| "dyn FnMut"))
            .field("focus", &self.focus)
            .finish()
    }
}

impl Default for DatePickerState {
    fn default() -> Self {
        Self::new(PickerType::default())
    }
}

impl DatePickerState {
    /// New picker of the given type.
    pub fn new(kind: PickerType) -> Self {
        let clock: Rc<dyn Clock> = Rc::new(LocalClock);
        let anchor = clock.now();
        Self {
            area: Default::default(),
            area_clear: Default::default(),
            area_popup: Default::default(),
            area_prev: Default::default(),
            area_next: Default::default(),
            area_month_label: Default::default(),
            area_year_label: Default::default(),
            area_days: [Rect::default(); 31],
            area_months: [Rect::default(); 12],
            area_years: Default::default(),
            area_hour: Default::default(),
            area_minute: Default::default(),
            kind,
            mode: Default::default(),
            owner: Default::default(),
            policy: InteractionMode::default().range_policy(),
            bounds: Default::default(),
            format: PickerFormat::new(kind),
            value: None,
            anchor,
            view: kind.default_view(),
            open: false,
            placeholder: None,
            disabled: false,
            is_error: false,
            error_message: Default::default(),
            show_icon: true,
            icon: None,
            clock,
            on_change: None,
            commands: Default::default(),
            published: Default::default(),
            focus: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }

    /// New picker with a name for the focus flag.
    pub fn named(kind: PickerType, name: &str) -> Self {
        let mut z = Self::new(kind);
        z.focus = FocusFlag::named(name);
        z
    }

    /// Interaction mode. Resets the range policy to the
    /// default of the mode.
    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = mode;
        self.policy = mode.range_policy();
        self
    }

    /// Who owns the value.
    pub fn with_owner(mut self, owner: ValueOwner) -> Self {
        self.owner = owner;
        self
    }

    /// Override the range policy of the interaction mode.
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Initial value.
    pub fn with_value(mut self, value: Option<NaiveDateTime>) -> Self {
        self.store_value(value);
        self.anchor = value.unwrap_or_else(|| self.clock.now());
        self
    }

    /// Initial value.
    pub fn with_default_value(self, value: NaiveDateTime) -> Self {
        self.with_value(Some(value))
    }

    /// Lower bound, inclusive.
    pub fn with_min_date(mut self, min: NaiveDateTime) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Upper bound. Inclusive or exclusive depends on the
    /// [RangePolicy].
    pub fn with_max_date(mut self, max: NaiveDateTime) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Both bounds.
    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// chrono pattern for display and parsing.
    ///
    /// The pattern is not validated. An unusable pattern shows the
    /// value in its default form.
    pub fn with_format(mut self, pattern: impl Into<String>) -> Self {
        self.format = PickerFormat::with_pattern(self.kind, pattern).locale(self.format.get_locale());
        self
    }

    /// chrono pattern for display and parsing.
    ///
    /// Fails if the pattern can't be used for formatting.
    pub fn try_with_format(mut self, pattern: impl Into<String>) -> Result<Self, fmt::Error> {
        let format =
            PickerFormat::with_pattern(self.kind, pattern).locale(self.format.get_locale());
        format.validate()?;
        self.format = format;
        Ok(self)
    }

    /// Locale for month and weekday names.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.format = self.format.locale(locale);
        self
    }

    /// Text shown when there is no value.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Disable all interaction.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark as invalid with a message. Presentation only.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.is_error = true;
        self.error_message = message.into();
        self
    }

    /// Show an icon. Presentation only.
    pub fn with_show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    /// Replace the default icon. Presentation only.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Source for the current date.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Rc::new(clock);
        self.anchor = self.value.unwrap_or_else(|| self.clock.now());
        self
    }

    /// Called for every committed value.
    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(Option<NaiveDateTime>) + 'static,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }
}

impl DatePickerState {
    #[inline]
    pub fn kind(&self) -> PickerType {
        self.kind
    }

    #[inline]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[inline]
    pub fn owner(&self) -> ValueOwner {
        self.owner
    }

    #[inline]
    pub fn range_policy(&self) -> RangePolicy {
        self.policy
    }

    #[inline]
    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    /// Change the bounds.
    pub fn set_bounds(&mut self, bounds: DateBounds) {
        self.bounds = bounds;
    }

    #[inline]
    pub fn format(&self) -> &PickerFormat {
        &self.format
    }

    /// Change the pattern. None resets to the default of the type.
    pub fn set_format(&mut self, pattern: Option<&str>) {
        self.format.set_pattern(pattern);
    }

    /// Committed value.
    #[inline]
    pub fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    /// Date used for the displayed page.
    #[inline]
    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    /// Current view.
    #[inline]
    pub fn view(&self) -> PickerView {
        self.view
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    #[inline]
    pub fn error_message(&self) -> &str {
        self.error_message.as_str()
    }

    /// Set or reset the error marker.
    pub fn set_error(&mut self, message: Option<String>) {
        self.is_error = message.is_some();
        self.error_message = message.unwrap_or_default();
    }

    #[inline]
    pub fn show_icon(&self) -> bool {
        self.show_icon
    }

    #[inline]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        self.placeholder
            .as_deref()
            .unwrap_or(self.kind.info().placeholder)
    }

    /// Text for the input field. The formatted value
    /// or the placeholder.
    pub fn display_text(&self) -> String {
        if self.value.is_some() {
            self.format.format(self.value)
        } else {
            self.placeholder().to_string()
        }
    }

    /// Text for a text-input. Empty if there is no value.
    pub fn input_text(&self) -> String {
        self.format.format(self.value)
    }

    /// Is the clear button visible.
    pub fn show_clear(&self) -> bool {
        self.value.is_some() && !self.disabled
    }

    /// Error message to display, if any.
    pub fn visible_error(&self) -> Option<&str> {
        if self.is_error && !self.error_message.is_empty() {
            Some(self.error_message.as_str())
        } else {
            None
        }
    }

    /// Handle for imperative access.
    pub fn command_handle(&self) -> PickerHandle {
        PickerHandle {
            queue: self.commands.clone(),
            value: self.published.clone(),
        }
    }

    /// Is the candidate within the bounds.
    pub fn is_in_range(&self, candidate: NaiveDateTime) -> bool {
        self.bounds.contains(candidate, self.policy)
    }

    /// Execute all queued commands, in order. This ignores the
    /// disabled flag.
    ///
    /// Returns the outcome of the last one.
    pub fn process_commands(&mut self) -> PickerOutcome {
        let mut r = PickerOutcome::Continue;
        while let Some(cmd) = self.commands.take() {
            r = match cmd {
                PickerCommand::SetValue(v) => self.set_value(v),
                PickerCommand::Clear => self.clear_value(),
            };
        }
        r
    }

    /// Store a value and publish it for the handles.
    pub(super) fn store_value(&mut self, value: Option<NaiveDateTime>) {
        self.value = value;
        self.published.set(value);
    }

    /// Finish a terminal selection.
    pub(super) fn commit(&mut self, value: Option<NaiveDateTime>) -> PickerOutcome {
        debug!("{} picker commit {:?}", self.kind, value);
        if self.owner == ValueOwner::Engine {
            self.store_value(value);
        }
        if let Some(value) = value {
            self.anchor = value;
        }
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(value);
        }
        PickerOutcome::Value(value)
    }
}

// open/close
impl DatePickerState {
    /// Open the dropdown. Starts with the default view of the type.
    ///
    /// In text-input mode only a `Year` picker has a dropdown.
    pub fn open(&mut self) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        // text-input has only the decade grid of the year picker.
        if self.mode == InteractionMode::TextInput && self.kind != PickerType::Year {
            return PickerOutcome::Unchanged;
        }
        if self.open {
            return PickerOutcome::Unchanged;
        }
        self.open = true;
        self.view = self.kind.default_view();
        PickerOutcome::Changed
    }

    /// Close the dropdown. Keeps value and page.
    pub fn close(&mut self) -> PickerOutcome {
        if !self.open {
            return PickerOutcome::Unchanged;
        }
        self.open = false;
        PickerOutcome::Changed
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) -> PickerOutcome {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }
}

// view navigation
impl DatePickerState {
    /// Switch the view.
    ///
    /// Only views the type supports are possible, and there is
    /// no way back from the time view.
    pub fn set_view(&mut self, view: PickerView) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        if !self.kind.has_view(view) || self.view == PickerView::Time {
            return PickerOutcome::Unchanged;
        }
        if self.view == view {
            return PickerOutcome::Unchanged;
        }
        debug!("{} picker view {:?} -> {:?}", self.kind, self.view, view);
        self.view = view;
        PickerOutcome::Changed
    }

    /// Header month label.
    pub fn show_month_view(&mut self) -> PickerOutcome {
        self.set_view(PickerView::Month)
    }

    /// Header year label.
    pub fn show_year_view(&mut self) -> PickerOutcome {
        self.set_view(PickerView::Year)
    }

    /// Hour/minute fields.
    pub fn show_time_view(&mut self) -> PickerOutcome {
        self.set_view(PickerView::Time)
    }

    /// Previous page of the current view.
    pub fn prev_page(&mut self) -> PickerOutcome {
        self.page(-1)
    }

    /// Next page of the current view.
    pub fn next_page(&mut self) -> PickerOutcome {
        self.page(1)
    }

    fn page(&mut self, dir: i32) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        match self.view {
            PickerView::Calendar => self.move_months(dir),
            PickerView::Month => self.move_years(dir),
            PickerView::Year => self.move_years(dir * self.mode.year_step()),
            PickerView::Time => PickerOutcome::Continue,
        }
    }

    /// Move the anchor by n days.
    pub fn move_days(&mut self, n: i64) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        let days = Days::new(n.unsigned_abs());
        let moved = if n >= 0 {
            self.anchor.checked_add_days(days)
        } else {
            self.anchor.checked_sub_days(days)
        };
        match moved {
            Some(v) if v != self.anchor => {
                self.anchor = v;
                PickerOutcome::Changed
            }
            _ => PickerOutcome::Unchanged,
        }
    }

    /// Move the anchor by n months. The day is clamped to
    /// the target month.
    pub fn move_months(&mut self, n: i32) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        let old = self.anchor;
        self.anchor = shift_months(self.anchor, n);
        (old != self.anchor).into()
    }

    /// Move the anchor by n years. The day is clamped.
    pub fn move_years(&mut self, n: i32) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        let old = self.anchor;
        let Some(year) = self.anchor.year().checked_add(n) else {
            return PickerOutcome::Unchanged;
        };
        self.anchor = with_year(self.anchor, year);
        (old != self.anchor).into()
    }

    /// Move the anchor to now.
    pub fn move_to_today(&mut self) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        let old = self.anchor;
        self.anchor = self.clock.now();
        (old != self.anchor).into()
    }
}

// data for rendering
impl DatePickerState {
    /// Day grid of the anchor month.
    ///
    /// Starts with one None for each weekday before the 1st,
    /// weeks start on Sunday.
    pub fn calendar_days(&self) -> Vec<Option<DayCell>> {
        let year = self.anchor.year();
        let month = self.anchor.month();
        let today = self.clock.now().date();

        let lead = first_weekday_of_month(year, month) as usize;
        let mut days = Vec::with_capacity(lead + 31);
        days.resize(lead, None);
        for day in 1..=days_in_month(year, month) {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            days.push(Some(DayCell {
                day,
                date,
                selectable: self.bounds.day_selectable(date, self.policy),
                selected: self.value.map(|v| v.date() == date).unwrap_or(false),
                cursor: self.anchor.date() == date,
                today: date == today,
            }));
        }
        days
    }

    /// The 12 months of the anchor year.
    pub fn month_cells(&self) -> Vec<MonthCell> {
        let year = self.anchor.year();
        (0..12)
            .map(|month0| MonthCell {
                month0,
                name: self.format.month_name(month0),
                selectable: self.bounds.month_selectable(year, month0, self.policy),
                selected: self
                    .value
                    .map(|v| v.year() == year && v.month0() == month0)
                    .unwrap_or(false),
                cursor: self.anchor.month0() == month0,
            })
            .collect()
    }

    /// Years shown in the year view.
    ///
    /// The calendar mode shows 10 years before and after the anchor.
    /// The text-input mode shows the decade of the anchor plus one year
    /// on either side.
    pub fn year_page(&self) -> Vec<i32> {
        let year = self.anchor.year();
        match self.mode {
            InteractionMode::Calendar => (year - 10..=year + 10).collect(),
            InteractionMode::TextInput => {
                let start = year.div_euclid(10) * 10;
                (start - 1..=start + 10).collect()
            }
        }
    }

    /// Cells of the year view.
    pub fn year_cells(&self) -> Vec<YearCell> {
        self.year_page()
            .into_iter()
            .map(|year| YearCell {
                year,
                selectable: self.year_selectable(year),
                selected: self.value.map(|v| v.year() == year).unwrap_or(false),
                cursor: self.anchor.year() == year,
            })
            .collect()
    }

    /// Can this year be picked.
    pub(super) fn year_selectable(&self, year: i32) -> bool {
        if self.kind.info().year_is_terminal {
            self.bounds.year_start_selectable(year, self.policy)
        } else {
            self.bounds.year_selectable(year, self.policy)
        }
    }

    /// Header labels. None for the time picker.
    pub fn header(&self) -> Option<PickerHeader> {
        if self.kind == PickerType::Time {
            return None;
        }
        let month = if self.kind.has_view(PickerView::Month) {
            Some(self.format.month_name(self.anchor.month0()))
        } else {
            None
        };
        let year = if self.view == PickerView::Year && self.mode == InteractionMode::TextInput {
            let page = self.year_page();
            // without the extra years at either end.
            format!("{} - {}", page[1], page[page.len() - 2])
        } else {
            self.anchor.year().to_string()
        };
        Some(PickerHeader { month, year })
    }

    /// Localized short weekday names, starting with Sunday.
    pub fn weekday_names(&self) -> [String; 7] {
        self.format.weekday_names()
    }

    /// Hour and minute of the value, 0:00 if there is none.
    pub fn time_fields(&self) -> (u32, u32) {
        self.value
            .map(|v| (v.hour(), v.minute()))
            .unwrap_or_default()
    }

    /// Is the value on this day.
    pub fn is_selected_day(&self, date: NaiveDateTime) -> bool {
        self.value.map(|v| same_day(v, date)).unwrap_or(false)
    }
}
