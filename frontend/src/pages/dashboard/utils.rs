use crate::api::AttendanceRecord;
use crate::state::shell::{ShellEvent, ShellState};
use chrono::{NaiveTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl ClockAction {
    pub fn label(self) -> &'static str {
        match self {
            ClockAction::ClockIn => "Clock in",
            ClockAction::ClockOut => "Clock out",
            ClockAction::BreakStart => "Start break",
            ClockAction::BreakEnd => "End break",
        }
    }

    pub fn event(self) -> ShellEvent {
        match self {
            ClockAction::ClockIn => ShellEvent::ClockedIn,
            ClockAction::ClockOut => ShellEvent::ClockedOut,
            ClockAction::BreakStart => ShellEvent::BreakStarted,
            ClockAction::BreakEnd => ShellEvent::BreakEnded,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            ClockAction::ClockIn => "Clocked in.",
            ClockAction::ClockOut => "Clocked out.",
            ClockAction::BreakStart => "Break started.",
            ClockAction::BreakEnd => "Break ended.",
        }
    }
}

/// Buttons offered for the current shift state.
pub fn available_actions(state: &ShellState) -> Vec<ClockAction> {
    match (state.clocked_in, state.active_break) {
        (false, _) => vec![ClockAction::ClockIn],
        (true, false) => vec![ClockAction::BreakStart, ClockAction::ClockOut],
        (true, true) => vec![ClockAction::BreakEnd],
    }
}

pub fn greeting(name: &str, now: NaiveTime) -> String {
    let part = match now.hour() {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{}, {}", part, name)
}

/// Most recent record by date, then clock-in time.
pub fn latest_record(records: &[AttendanceRecord]) -> Option<&AttendanceRecord> {
    records.iter().max_by_key(|record| (record.date, record.clock_in))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actions_follow_shift_state() {
        let mut state = ShellState::default();
        assert_eq!(available_actions(&state), vec![ClockAction::ClockIn]);

        state.clocked_in = true;
        assert_eq!(
            available_actions(&state),
            vec![ClockAction::BreakStart, ClockAction::ClockOut]
        );

        state.active_break = true;
        assert_eq!(available_actions(&state), vec![ClockAction::BreakEnd]);
    }

    #[test]
    fn greeting_depends_on_time_of_day() {
        let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        assert_eq!(greeting("Jane", at(8)), "Good morning, Jane");
        assert_eq!(greeting("Jane", at(13)), "Good afternoon, Jane");
        assert_eq!(greeting("Jane", at(21)), "Good evening, Jane");
    }

    #[test]
    fn latest_record_prefers_newest_date() {
        let records: Vec<AttendanceRecord> = serde_json::from_value(json!([
            { "id": "a", "date": "2024-05-02", "clockIn": "2024-05-02T09:00:00" },
            { "id": "b", "date": "2024-05-03", "clockIn": "2024-05-03T08:30:00" },
            { "id": "c", "date": "2024-05-01" }
        ]))
        .unwrap();
        assert_eq!(latest_record(&records).map(|r| r.id.as_str()), Some("b"));
        assert!(latest_record(&[]).is_none());
    }
}
