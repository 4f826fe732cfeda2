use crate::api::AttendanceRecord;

/// Finished shifts only, newest first.
pub fn complete_history(records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    let mut history: Vec<AttendanceRecord> = records
        .iter()
        .filter(|record| record.is_complete())
        .cloned()
        .collect();
    history.sort_by(|a, b| (b.date, b.clock_in).cmp(&(a.date, a.clock_in)));
    history
}

pub fn total_hours(records: &[AttendanceRecord]) -> f64 {
    records.iter().filter_map(AttendanceRecord::worked_hours).sum()
}

pub fn break_minutes(record: &AttendanceRecord) -> i64 {
    record
        .breaks
        .iter()
        .filter_map(|b| Some((b.end? - b.start?).num_minutes()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<AttendanceRecord> {
        serde_json::from_value(json!([
            { "id": "old", "date": "2024-05-01", "clockIn": "2024-05-01T09:00:00", "clockOut": "2024-05-01T17:00:00" },
            { "id": "open", "date": "2024-05-04", "clockIn": "2024-05-04T09:00:00" },
            {
                "id": "new",
                "date": "2024-05-03",
                "clockIn": "2024-05-03T08:00:00",
                "clockOut": "2024-05-03T17:00:00",
                "breaks": [{ "id": "b", "start": "2024-05-03T12:00:00", "end": "2024-05-03T13:00:00" }]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn history_drops_open_shifts_and_sorts_newest_first() {
        let ids: Vec<_> = complete_history(&records())
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn totals_worked_hours_and_breaks() {
        let history = complete_history(&records());
        assert_eq!(total_hours(&history), 16.0);
        assert_eq!(break_minutes(&history[0]), 60);
        assert_eq!(break_minutes(&history[1]), 0);
    }
}
