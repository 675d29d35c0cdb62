#![allow(dead_code, unreachable_pub)]

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_picker::{DatePickerState, FixedClock, PickerType};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

/// Creates the output dir and installs a logger writing to
/// test_out/<name>.log. Only the first call per test binary wins.
pub fn init_test(name: &str) -> Result<(), anyhow::Error> {
    fs::create_dir_all("test_out")?;
    let log = fern::log_file(format!("test_out/{}.log", name))?;
    _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{} {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(log)
        .apply();
    Ok(())
}

pub fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|v| v.and_hms_opt(hour, minute, 0))
        .expect("valid date")
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    dt(year, month, day, 0, 0)
}

/// The clock used by all tests: 2024-03-15 10:30.
pub fn now() -> NaiveDateTime {
    dt(2024, 3, 15, 10, 30)
}

/// Picker with the fixed test clock.
pub fn picker(kind: PickerType) -> DatePickerState {
    DatePickerState::new(kind).with_clock(FixedClock(now()))
}

/// Records every value passed to on_change.
pub type Calls = Rc<RefCell<Vec<Option<NaiveDateTime>>>>;

/// Picker with the fixed test clock and a recording callback.
pub fn recording(kind: PickerType) -> (DatePickerState, Calls) {
    let calls: Calls = Default::default();
    let c = calls.clone();
    let state = picker(kind).with_on_change(move |v| c.borrow_mut().push(v));
    (state, calls)
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn alt_key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::ALT))
}

pub fn char_key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn scroll_up(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollUp,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}
