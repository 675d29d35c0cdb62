use crate::lib_test::{day, init_test, key, picker, recording};
use crossterm::event::KeyCode;
use rat_picker::event::PickerOutcome;
use rat_picker::picker::handle_events;
use rat_picker::{PickerType, ValueOwner};

mod lib_test;

#[test]
fn test_queue_order() -> Result<(), anyhow::Error> {
    init_test("test_command")?;

    let (mut state, calls) = recording(PickerType::Date);
    let handle = state.command_handle();
    assert!(!handle.is_pending());

    handle.set_value(Some(day(2024, 5, 1)));
    handle.clear();
    handle.set_value(Some(day(2024, 6, 1)));
    assert!(handle.is_pending());
    // nothing happens until the picker runs the queue.
    assert_eq!(handle.get_value(), None);
    assert!(calls.borrow().is_empty());

    assert_eq!(
        state.process_commands(),
        PickerOutcome::Value(Some(day(2024, 6, 1)))
    );
    assert!(!handle.is_pending());
    assert_eq!(
        calls.borrow().as_slice(),
        &[Some(day(2024, 5, 1)), None, Some(day(2024, 6, 1))]
    );
    assert_eq!(handle.get_value(), Some(day(2024, 6, 1)));
    assert_eq!(state.value(), Some(day(2024, 6, 1)));

    assert_eq!(state.process_commands(), PickerOutcome::Continue);
    Ok(())
}

#[test]
fn test_queue_with_events() -> Result<(), anyhow::Error> {
    init_test("test_command")?;

    let mut state = picker(PickerType::Date);
    let handle = state.command_handle();

    handle.set_value(Some(day(2024, 5, 1)));
    // unused event, the result of the commands is returned.
    assert_eq!(
        handle_events(&mut state, true, &key(KeyCode::F(5))),
        PickerOutcome::Value(Some(day(2024, 5, 1)))
    );

    handle.clear();
    // the event wins.
    assert_eq!(
        handle_events(&mut state, true, &key(KeyCode::Enter)),
        PickerOutcome::Changed
    );
    assert_eq!(state.value(), None);
    assert_eq!(handle.get_value(), None);
    Ok(())
}

#[test]
fn test_handle_sees_selection() -> Result<(), anyhow::Error> {
    init_test("test_command")?;

    let mut state = picker(PickerType::Date);
    let handle = state.command_handle();
    let other = handle.clone();

    state.select_day(3);
    assert_eq!(handle.get_value(), Some(day(2024, 3, 3)));
    assert_eq!(other.get_value(), Some(day(2024, 3, 3)));

    state.sync_value(None);
    assert_eq!(handle.get_value(), None);
    Ok(())
}

#[test]
fn test_host_owned() -> Result<(), anyhow::Error> {
    init_test("test_command")?;

    let (state, calls) = recording(PickerType::Date);
    let mut state = state
        .with_owner(ValueOwner::Host)
        .with_value(Some(day(2024, 1, 20)));
    state.open();

    // reported, but not taken over.
    assert_eq!(
        state.select_day(10),
        PickerOutcome::Value(Some(day(2024, 1, 10)))
    );
    assert_eq!(state.value(), Some(day(2024, 1, 20)));
    assert_eq!(calls.borrow().len(), 1);

    state.sync_value(Some(day(2024, 3, 10)));
    assert_eq!(state.value(), Some(day(2024, 3, 10)));
    assert_eq!(calls.borrow().len(), 1);

    // anchor is left alone.
    state.move_days(5);
    assert_eq!(state.clear(), PickerOutcome::Value(None));
    assert_eq!(state.anchor(), day(2024, 3, 15));
    assert_eq!(state.value(), Some(day(2024, 3, 10)));
    Ok(())
}


#[test]
fn test_commands_on_disabled() -> Result<(), anyhow::Error> {
    init_test("test_command")?;

    let (state, calls) = recording(PickerType::Date);
    let mut state = state.with_disabled(true);
    let handle = state.command_handle();

    handle.set_value(Some(day(2024, 5, 1)));
    assert_eq!(
        state.process_commands(),
        PickerOutcome::Value(Some(day(2024, 5, 1)))
    );
    assert!(!handle.is_pending());
    assert_eq!(state.value(), Some(day(2024, 5, 1)));
    assert_eq!(handle.get_value(), Some(day(2024, 5, 1)));

    handle.clear();
    assert_eq!(state.process_commands(), PickerOutcome::Value(None));
    assert_eq!(state.value(), None);
    assert_eq!(calls.borrow().as_slice(), &[Some(day(2024, 5, 1)), None]);

    // the user still can't clear.
    state.set_value(Some(day(2024, 5, 2)));
    assert_eq!(state.clear(), PickerOutcome::Continue);
    assert_eq!(state.value(), Some(day(2024, 5, 2)));
    Ok(())
}
