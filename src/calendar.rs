use crate::models::{CompletionCalendar, CompletionRecord, StoredDay, StoredHabit};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::BTreeMap;

const DAY_FORMAT: &str = "%Y-%m-%d";

impl From<Value> for StoredDay {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(flag) => StoredDay::Flag(flag),
            Value::Object(fields) => StoredDay::Record {
                completed: fields.get("completed").and_then(Value::as_bool).unwrap_or(false),
                note: fields
                    .get("note")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            _ => StoredDay::Malformed,
        }
    }
}

impl From<StoredDay> for CompletionRecord {
    fn from(day: StoredDay) -> Self {
        match day {
            StoredDay::Flag(completed) => CompletionRecord {
                completed,
                note: String::new(),
            },
            StoredDay::Record { completed, note } => CompletionRecord { completed, note },
            StoredDay::Malformed => CompletionRecord::default(),
        }
    }
}

/// Converts stored days of any historical shape into a canonical calendar.
pub fn normalize(days: BTreeMap<String, StoredDay>) -> CompletionCalendar {
    days.into_iter()
        .map(|(key, day)| (key, CompletionRecord::from(day)))
        .collect()
}

pub fn habit_calendar(habit: &StoredHabit) -> CompletionCalendar {
    habit.days.clone().map(normalize).unwrap_or_default()
}

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parses a canonical day key: four-digit year, zero-padded month and day.
/// Keys that parse but are not in that form (e.g. `2025-5-1`, `+10000-01-01`)
/// are rejected, since lookups by formatted date would never find them.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    if key.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(key, DAY_FORMAT).ok()?;
    (day_key(date) == key).then_some(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored(value: Value) -> StoredDay {
        serde_json::from_value(value).expect("stored day")
    }

    #[test]
    fn legacy_flag_matches_structured_record() {
        let legacy = CompletionRecord::from(stored(json!(true)));
        let structured = CompletionRecord::from(stored(json!({ "completed": true, "note": "" })));
        assert_eq!(legacy, structured);
        assert_eq!(
            CompletionRecord::from(stored(json!(false))),
            CompletionRecord::default()
        );
    }

    #[test]
    fn record_fields_of_the_wrong_type_fall_back() {
        let record = CompletionRecord::from(stored(json!({ "completed": "yes", "note": 4 })));
        assert_eq!(record, CompletionRecord::default());

        let record = CompletionRecord::from(stored(json!({ "note": "ran 5k" })));
        assert!(!record.completed);
        assert_eq!(record.note, "ran 5k");
    }

    #[test]
    fn other_shapes_are_not_completed() {
        for value in [json!(null), json!(1), json!("true"), json!([true])] {
            assert_eq!(stored(value.clone()), StoredDay::Malformed, "{value}");
            assert_eq!(CompletionRecord::from(stored(value)), CompletionRecord::default());
        }
    }

    #[test]
    fn normalize_keeps_every_key() {
        let days: BTreeMap<String, StoredDay> = serde_json::from_value(json!({
            "2025-05-01": true,
            "2025-05-02": { "completed": true, "note": "easy" },
            "garbage": null,
        }))
        .unwrap();

        let calendar = normalize(days);
        assert_eq!(calendar.len(), 3);
        assert!(calendar["2025-05-01"].completed);
        assert_eq!(calendar["2025-05-02"].note, "easy");
        assert!(!calendar["garbage"].completed);
    }

    #[test]
    fn habit_without_days_has_empty_calendar() {
        let habit: StoredHabit = serde_json::from_value(json!({ "title": "Read", "days": null })).unwrap();
        assert!(habit_calendar(&habit).is_empty());
    }

    #[test]
    fn parse_day_key_requires_canonical_form() {
        assert_eq!(
            parse_day_key("2025-05-01"),
            NaiveDate::from_ymd_opt(2025, 5, 1)
        );
        assert_eq!(parse_day_key("2025-5-1"), None);
        assert_eq!(parse_day_key("2025-02-30"), None);
        assert_eq!(parse_day_key("yesterday"), None);
        assert_eq!(parse_day_key(" 2025-05-01"), None);
        assert_eq!(parse_day_key("9999-12-31"), NaiveDate::from_ymd_opt(9999, 12, 31));
        assert_eq!(parse_day_key("+10000-01-01"), None);
        assert_eq!(parse_day_key(&day_key(NaiveDate::MIN)), None);
        assert_eq!(parse_day_key(&day_key(NaiveDate::MAX)), None);
    }
}
