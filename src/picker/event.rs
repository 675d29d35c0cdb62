use chrono::NaiveDateTime;
use rat_event::{ConsumedEvent, Outcome};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PickerOutcome {
    /// The given event has not been used at all.
    Continue,
    /// The event has been recognized, but the result was nil.
    /// Further processing for this event may stop.
    Unchanged,
    /// The event has been recognized and there is some change
    /// due to it.
    /// Further processing for this event may stop.
    /// Rendering the ui is advised.
    Changed,
    /// A value has been committed. None if the value was cleared.
    Value(Option<NaiveDateTime>),
}

impl ConsumedEvent for PickerOutcome {
    fn is_consumed(&self) -> bool {
        *self != PickerOutcome::Continue
    }
}

impl From<Outcome> for PickerOutcome {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Continue => PickerOutcome::Continue,
            Outcome::Unchanged => PickerOutcome::Unchanged,
            Outcome::Changed => PickerOutcome::Changed,
        }
    }
}

impl From<PickerOutcome> for Outcome {
    fn from(value: PickerOutcome) -> Self {
        match value {
            PickerOutcome::Continue => Outcome::Continue,
            PickerOutcome::Unchanged => Outcome::Unchanged,
            PickerOutcome::Changed => Outcome::Changed,
            PickerOutcome::Value(_) => Outcome::Changed,
        }
    }
}

// Useful for converting most navigation results.
impl From<bool> for PickerOutcome {
    fn from(value: bool) -> Self {
        if value {
            PickerOutcome::Changed
        } else {
            PickerOutcome::Unchanged
        }
    }
}
