use crate::picker::event::PickerOutcome;
use crate::picker::DatePickerState;
use crate::picker_type::PickerView;
use chrono::Datelike;
use rat_event::{ct_event, ConsumedEvent, HandleEvent, MouseOnly, Regular};
use ratatui::layout::{Position, Rect};

impl HandleEvent<crossterm::event::Event, Regular, PickerOutcome> for DatePickerState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> PickerOutcome {
        let r0 = self.process_commands();

        let r = if self.disabled {
            PickerOutcome::Continue
        } else if self.focus.get() {
            if self.open {
                self.handle_open_keys(event)
            } else {
                self.handle_closed_keys(event)
            }
        } else {
            PickerOutcome::Continue
        };

        r.or_else(|| self.handle(event, MouseOnly)).or_else(|| r0)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, PickerOutcome> for DatePickerState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }
        match event {
            ct_event!(mouse down Left for x, y) => self.click(*x, *y),
            ct_event!(scroll up for x, y) if self.open => self.scroll(*x, *y, -1),
            ct_event!(scroll down for x, y) if self.open => self.scroll(*x, *y, 1),
            _ => PickerOutcome::Continue,
        }
    }
}

impl DatePickerState {
    fn handle_closed_keys(&mut self, event: &crossterm::event::Event) -> PickerOutcome {
        match event {
            ct_event!(keycode press Enter) | ct_event!(keycode press ALT-Down) => self.open(),
            ct_event!(keycode press Delete) | ct_event!(keycode press Backspace) => {
                if self.show_clear() {
                    self.clear()
                } else {
                    PickerOutcome::Unchanged
                }
            }
            _ => PickerOutcome::Continue,
        }
    }

    fn handle_open_keys(&mut self, event: &crossterm::event::Event) -> PickerOutcome {
        if let ct_event!(keycode press Esc) = event {
            return self.close();
        }
        match self.view {
            PickerView::Calendar => match event {
                ct_event!(keycode press Left) => self.move_days(-1),
                ct_event!(keycode press Right) => self.move_days(1),
                ct_event!(keycode press Up) => self.move_days(-7),
                ct_event!(keycode press Down) => self.move_days(7),
                ct_event!(keycode press PageUp) => self.prev_page(),
                ct_event!(keycode press PageDown) => self.next_page(),
                ct_event!(keycode press Enter) => self.select_day(self.anchor.day()),
                ct_event!(key press 'm') => self.show_month_view(),
                ct_event!(key press 'y') => self.show_year_view(),
                ct_event!(key press 't') => self.show_time_view(),
                _ => PickerOutcome::Continue,
            },
            PickerView::Month => match event {
                ct_event!(keycode press Left) => self.move_months(-1),
                ct_event!(keycode press Right) => self.move_months(1),
                ct_event!(keycode press Up) => self.move_months(-3),
                ct_event!(keycode press Down) => self.move_months(3),
                ct_event!(keycode press PageUp) => self.prev_page(),
                ct_event!(keycode press PageDown) => self.next_page(),
                ct_event!(keycode press Enter) => self.select_month(self.anchor.month0()),
                _ => PickerOutcome::Continue,
            },
            PickerView::Year => match event {
                ct_event!(keycode press Left) => self.move_years(-1),
                ct_event!(keycode press Right) => self.move_years(1),
                ct_event!(keycode press Up) => self.move_years(-4),
                ct_event!(keycode press Down) => self.move_years(4),
                ct_event!(keycode press PageUp) => self.prev_page(),
                ct_event!(keycode press PageDown) => self.next_page(),
                ct_event!(keycode press Enter) => self.select_year(self.anchor.year()),
                _ => PickerOutcome::Continue,
            },
            PickerView::Time => match event {
                ct_event!(keycode press Up) => self.step_hour(1),
                ct_event!(keycode press Down) => self.step_hour(-1),
                ct_event!(keycode press Left) => self.step_minute(-1),
                ct_event!(keycode press Right) => self.step_minute(1),
                ct_event!(keycode press Enter) => self.close(),
                _ => PickerOutcome::Continue,
            },
        }
    }

    fn click(&mut self, x: u16, y: u16) -> PickerOutcome {
        let pos = Position::new(x, y);

        if self.show_clear() && self.area_clear.contains(pos) {
            return self.clear();
        }
        if self.area.contains(pos) {
            return self.toggle();
        }
        if !self.open {
            return PickerOutcome::Continue;
        }

        if self.area_prev.contains(pos) {
            return self.prev_page();
        }
        if self.area_next.contains(pos) {
            return self.next_page();
        }
        if self.area_month_label.contains(pos) {
            return self.show_month_view();
        }
        if self.area_year_label.contains(pos) {
            return self.show_year_view();
        }

        let r = match self.view {
            PickerView::Calendar => match item_at(&self.area_days, pos) {
                Some(i) => self.select_day(i as u32 + 1),
                None => PickerOutcome::Continue,
            },
            PickerView::Month => match item_at(&self.area_months, pos) {
                Some(i) => self.select_month(i as u32),
                None => PickerOutcome::Continue,
            },
            PickerView::Year => match item_at(&self.area_years, pos) {
                Some(i) => match self.year_page().get(i) {
                    Some(year) => self.select_year(*year),
                    None => PickerOutcome::Continue,
                },
                None => PickerOutcome::Continue,
            },
            PickerView::Time => PickerOutcome::Continue,
        };

        r.or_else(|| {
            if self.area_popup.contains(pos) {
                PickerOutcome::Unchanged
            } else {
                PickerOutcome::Continue
            }
        })
    }

    fn scroll(&mut self, x: u16, y: u16, dir: i32) -> PickerOutcome {
        if !self.kind().info().has_time || self.view != PickerView::Time {
            return PickerOutcome::Continue;
        }
        let pos = Position::new(x, y);
        if self.area_hour.contains(pos) {
            self.step_hour(-dir)
        } else if self.area_minute.contains(pos) {
            self.step_minute(-dir)
        } else {
            PickerOutcome::Continue
        }
    }
}

// Index of the area containing the position.
fn item_at(areas: &[Rect], pos: Position) -> Option<usize> {
    areas.iter().position(|v| v.contains(pos))
}

/// Handle all events.
///
/// Keyboard events are only processed if the focus flag is set.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut DatePickerState,
    focus: bool,
    event: &crossterm::event::Event,
) -> PickerOutcome {
    state.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut DatePickerState,
    event: &crossterm::event::Event,
) -> PickerOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}

