//! Form State Machine
//!
//! The registration form's state as an explicit reducer: every user
//! interaction is a named [`FormAction`] applied by [`FormState::apply`].
//! Keeping the transitions pure makes the scheduling invariants testable
//! without a DOM.

use crate::api::MedicationRecord;

/// Scheduling mode for the record being edited.
///
/// The two modes are mutually exclusive: fixed clock times, or "every N
/// hours". Switching modes clears the other mode's data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleMode {
    Times,
    Interval,
}

/// In-progress form state.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub record: MedicationRecord,
    pub mode: ScheduleMode,
    /// Time-of-day entry not yet confirmed into the schedule
    pub time_input: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            record: MedicationRecord::default(),
            mode: ScheduleMode::Times,
            time_input: String::new(),
        }
    }
}

/// Named state transitions.
#[derive(Clone, Debug)]
pub enum FormAction {
    SetName(String),
    SetMode(ScheduleMode),
    SetTimeInput(String),
    /// Confirm the pending time entry into the schedule
    AddTime,
    /// Remove every schedule entry matching the given time
    RemoveTime(String),
    /// `0` clears the interval
    SetInterval(u8),
    /// Normalize the record for submission
    SubmitStart,
    SubmitSuccess,
    SubmitFailure,
}

impl FormState {
    /// Apply a transition in place.
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetName(name) => {
                self.record.name = name;
            }
            FormAction::SetMode(mode) => {
                match mode {
                    ScheduleMode::Times => self.record.interval_hours = 0,
                    ScheduleMode::Interval => {
                        self.record.schedule_time.clear();
                        self.time_input.clear();
                    }
                }
                self.mode = mode;
            }
            FormAction::SetTimeInput(value) => {
                self.time_input = value;
            }
            FormAction::AddTime => {
                // Duplicate entries are kept; removal drops all of them
                if !is_valid_time(&self.time_input) {
                    return;
                }
                let time = std::mem::take(&mut self.time_input);
                self.record.schedule_time.push(time);
                self.record.schedule_time.sort();
            }
            FormAction::RemoveTime(time) => {
                self.record.schedule_time.retain(|t| t != &time);
            }
            FormAction::SetInterval(hours) => {
                self.record.interval_hours = hours;
            }
            FormAction::SubmitStart => {
                self.record = self.payload();
            }
            FormAction::SubmitSuccess => {
                self.record = MedicationRecord::default();
                self.time_input.clear();
            }
            FormAction::SubmitFailure => {
                // Record stays as entered so the user can retry
            }
        }
    }

    /// The record as it goes on the wire: the inactive mode's field is
    /// cleared, whatever it held before.
    pub fn payload(&self) -> MedicationRecord {
        let mut record = self.record.clone();
        match self.mode {
            ScheduleMode::Times => record.interval_hours = 0,
            ScheduleMode::Interval => record.schedule_time.clear(),
        }
        record
    }
}

/// `HH:MM` check. Native `type="time"` inputs only produce this shape, but
/// actions can be dispatched from anywhere.
fn is_valid_time(value: &str) -> bool {
    !value.is_empty() && chrono::NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: &mut FormState, time: &str) {
        state.apply(FormAction::SetTimeInput(time.to_string()));
        state.apply(FormAction::AddTime);
    }

    #[test]
    fn test_times_stay_sorted_through_add_and_remove() {
        let mut state = FormState::default();
        state.apply(FormAction::SetName("Aspirin".to_string()));

        add(&mut state, "08:00");
        add(&mut state, "20:00");
        assert_eq!(state.record.schedule_time, vec!["08:00", "20:00"]);

        add(&mut state, "12:00");
        assert_eq!(state.record.schedule_time, vec!["08:00", "12:00", "20:00"]);

        state.apply(FormAction::RemoveTime("12:00".to_string()));
        assert_eq!(state.record.schedule_time, vec!["08:00", "20:00"]);

        state.apply(FormAction::SubmitStart);
        let payload = state.payload();
        assert_eq!(payload.name, "Aspirin");
        assert_eq!(payload.schedule_time, vec!["08:00", "20:00"]);
        assert_eq!(payload.interval_hours, 0);
    }

    #[test]
    fn test_confirming_empty_entry_is_a_noop() {
        let mut state = FormState::default();
        state.apply(FormAction::AddTime);
        assert!(state.record.schedule_time.is_empty());
    }

    #[test]
    fn test_confirming_clears_the_entry() {
        let mut state = FormState::default();
        add(&mut state, "07:30");
        assert_eq!(state.time_input, "");
    }

    #[test]
    fn test_malformed_entry_is_rejected() {
        let mut state = FormState::default();
        add(&mut state, "8 o'clock");
        add(&mut state, "25:00");
        assert!(state.record.schedule_time.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept_and_removed_together() {
        let mut state = FormState::default();
        add(&mut state, "08:00");
        add(&mut state, "08:00");
        assert_eq!(state.record.schedule_time, vec!["08:00", "08:00"]);

        state.apply(FormAction::RemoveTime("08:00".to_string()));
        assert!(state.record.schedule_time.is_empty());
    }

    #[test]
    fn test_switching_mode_clears_the_inactive_field() {
        let mut state = FormState::default();
        add(&mut state, "08:00");
        state.apply(FormAction::SetTimeInput("12:00".to_string()));

        state.apply(FormAction::SetMode(ScheduleMode::Interval));
        assert!(state.record.schedule_time.is_empty());
        assert_eq!(state.time_input, "");

        state.apply(FormAction::SetInterval(8));
        state.apply(FormAction::SetMode(ScheduleMode::Times));
        assert_eq!(state.record.interval_hours, 0);
    }

    #[test]
    fn test_submit_in_times_mode_zeroes_interval() {
        let mut state = FormState::default();
        add(&mut state, "08:00");
        // A stale interval value must not leak into the payload
        state.apply(FormAction::SetInterval(5));

        state.apply(FormAction::SubmitStart);
        assert_eq!(state.record.interval_hours, 0);
        assert_eq!(state.payload().schedule_time, vec!["08:00"]);
    }

    #[test]
    fn test_submit_in_interval_mode_sends_empty_times() {
        let mut state = FormState::default();
        state.apply(FormAction::SetName("Ibuprofen".to_string()));
        state.apply(FormAction::SetMode(ScheduleMode::Interval));
        state.apply(FormAction::SetInterval(8));
        add(&mut state, "08:00");

        state.apply(FormAction::SubmitStart);
        let payload = state.payload();
        assert!(payload.schedule_time.is_empty());
        assert_eq!(payload.interval_hours, 8);
    }

    #[test]
    fn test_success_resets_record_and_entry_but_keeps_mode() {
        let mut state = FormState::default();
        state.apply(FormAction::SetMode(ScheduleMode::Interval));
        state.apply(FormAction::SetName("Aspirin".to_string()));
        state.apply(FormAction::SetInterval(8));
        state.apply(FormAction::SetTimeInput("09:00".to_string()));

        state.apply(FormAction::SubmitSuccess);
        assert_eq!(state.record, MedicationRecord::default());
        assert_eq!(state.time_input, "");
        assert_eq!(state.mode, ScheduleMode::Interval);
    }

    #[test]
    fn test_failure_keeps_the_record() {
        let mut state = FormState::default();
        state.apply(FormAction::SetName("Aspirin".to_string()));
        add(&mut state, "08:00");
        state.apply(FormAction::SubmitStart);

        let before = state.clone();
        state.apply(FormAction::SubmitFailure);
        assert_eq!(state, before);
    }
}
