use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of a habit, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompletionRecord {
    pub completed: bool,
    #[serde(default)]
    pub note: String,
}

/// Day key (`YYYY-MM-DD`) to record. Absent days count as not completed.
pub type CompletionCalendar = BTreeMap<String, CompletionRecord>;

/// A day as it may appear in stored data.
///
/// Older snapshots hold a bare boolean per day, newer ones an object with
/// `completed` and `note`. Any other shape is kept as `Malformed`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum StoredDay {
    Flag(bool),
    Record { completed: bool, note: String },
    Malformed,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoredHabit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub days: Option<BTreeMap<String, StoredDay>>,
    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
}

/// One user's habits, keyed by habit id.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HabitData {
    #[serde(default)]
    pub habits: BTreeMap<String, StoredHabit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct DayPoint {
    pub date: String,
    pub completed: bool,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct HabitReport {
    pub id: String,
    pub title: String,
    pub created_at: Option<String>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completed_days: usize,
    pub last_completed: Option<String>,
    pub recent_days: Vec<DayPoint>,
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub habit_id: String,
    pub habit_title: String,
    pub completed: bool,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct LogDay {
    pub date: String,
    pub entries: Vec<LogEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub today: String,
    pub habits: Vec<HabitReport>,
    pub log: Vec<LogDay>,
}
