#![doc = include_str!("../readme.md")]
//
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

pub mod event {
    //!
    //! Event-handler traits and Keybindings.
    //!
    //! See [rat-event](https://docs.rs/rat-event/latest/rat_event/)
    //!
    pub use rat_event::*;

    pub use crate::picker::event::PickerOutcome;
}

/// Module for focus-handling functionality.
/// See [rat-focus](https://docs.rs/rat-focus)
pub mod focus {
    pub use rat_focus::FocusFlag;
}

pub mod clock;
pub mod date_util;
pub mod format;
pub mod picker;
pub mod picker_type;
pub mod range;

pub use clock::{Clock, FixedClock, LocalClock};
pub use format::PickerFormat;
pub use picker::{DatePickerState, InteractionMode, PickerCommand, PickerHandle, ValueOwner};
pub use picker_type::{PickerInfo, PickerType, PickerView};
pub use range::{DateBounds, RangePolicy};

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
