use crate::calendar::{day_key, habit_calendar, parse_day_key};
use crate::models::{DayPoint, HabitData, HabitReport, LogDay, LogEntry, ReportResponse};
use crate::streak::{completed_dates, compute_streaks};
use chrono::{Days, Local, NaiveDate};
use std::collections::BTreeMap;

const RECENT_DAYS: u64 = 30;

pub fn build_report(data: &HabitData) -> ReportResponse {
    build_report_at(Local::now().date_naive(), data)
}

pub fn build_report_at(today: NaiveDate, data: &HabitData) -> ReportResponse {
    let mut habits = Vec::with_capacity(data.habits.len());

    for (id, habit) in &data.habits {
        let calendar = habit_calendar(habit);
        let streaks = compute_streaks(&calendar, today);
        let completed = completed_dates(&calendar);

        let mut recent_days = Vec::with_capacity(RECENT_DAYS as usize);
        for offset in (0..RECENT_DAYS).rev() {
            let Some(date) = today.checked_sub_days(Days::new(offset)) else {
                continue;
            };
            let record = calendar.get(&day_key(date)).cloned().unwrap_or_default();
            recent_days.push(DayPoint {
                date: day_key(date),
                completed: record.completed,
                note: record.note,
            });
        }

        habits.push(HabitReport {
            id: id.clone(),
            title: habit.title.clone(),
            created_at: habit.created_at.clone(),
            current_streak: streaks.current_streak,
            longest_streak: streaks.longest_streak,
            completed_days: completed.len(),
            last_completed: completed.last().map(|date| day_key(*date)),
            recent_days,
        });
    }

    ReportResponse {
        today: day_key(today),
        habits,
        log: build_log(data),
    }
}

/// Every logged day across all habits, newest day first.
pub fn build_log(data: &HabitData) -> Vec<LogDay> {
    let mut by_date: BTreeMap<NaiveDate, Vec<LogEntry>> = BTreeMap::new();

    for (id, habit) in &data.habits {
        for (key, record) in habit_calendar(habit) {
            let Some(date) = parse_day_key(&key) else {
                continue;
            };
            by_date.entry(date).or_default().push(LogEntry {
                habit_id: id.clone(),
                habit_title: habit.title.clone(),
                completed: record.completed,
                note: record.note,
            });
        }
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, entries)| LogDay {
            date: day_key(date),
            entries,
        })
        .collect()
}
