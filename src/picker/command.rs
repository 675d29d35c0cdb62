//!
//! Imperative access to a picker from outside of event-handling.
//!

use chrono::NaiveDateTime;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Command sent through a [PickerHandle].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerCommand {
    /// Set the value and report it like a selection.
    SetValue(Option<NaiveDateTime>),
    /// Clear the value.
    Clear,
}

/// Queue for commands.
#[derive(Debug, Default)]
pub(crate) struct CommandQueue {
    queue: RefCell<VecDeque<PickerCommand>>,
}

impl CommandQueue {
    /// is empty
    pub(crate) fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// take the first command.
    pub(crate) fn take(&self) -> Option<PickerCommand> {
        self.queue.borrow_mut().pop_front()
    }

    /// push a new command to the queue.
    pub(crate) fn push(&self, cmd: PickerCommand) {
        self.queue.borrow_mut().push_back(cmd);
    }
}

/// Handle to a [DatePickerState](crate::picker::DatePickerState).
///
/// set_value() and clear() only queue a command. The picker executes
/// them in order with
/// [process_commands](crate::picker::DatePickerState::process_commands),
/// which is also done at the start of each event-handling call.
///
/// get_value() returns the value as of the last executed change.
#[derive(Debug, Clone)]
pub struct PickerHandle {
    pub(crate) queue: Rc<CommandQueue>,
    pub(crate) value: Rc<Cell<Option<NaiveDateTime>>>,
}

impl PickerHandle {
    /// Current committed value.
    pub fn get_value(&self) -> Option<NaiveDateTime> {
        self.value.get()
    }

    /// Queue a new value.
    pub fn set_value(&self, value: Option<NaiveDateTime>) {
        self.queue.push(PickerCommand::SetValue(value));
    }

    /// Queue clearing the value.
    pub fn clear(&self) {
        self.queue.push(PickerCommand::Clear);
    }

    /// Any commands not yet executed.
    pub fn is_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}
