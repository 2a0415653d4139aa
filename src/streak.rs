use crate::calendar::{day_key, parse_day_key};
use crate::models::{CompletionCalendar, StreakResult};
use chrono::{Local, NaiveDate};
use tracing::debug;

pub fn compute_streaks_now(calendar: &CompletionCalendar) -> StreakResult {
    compute_streaks(calendar, Local::now().date_naive())
}

/// Derives the longest run of consecutive completed days anywhere in the
/// calendar, and the run ending at `today`.
///
/// Only completed entries take part; missing days and explicit `false` are
/// the same gap. Keys that are not canonical `YYYY-MM-DD` dates are skipped.
pub fn compute_streaks(calendar: &CompletionCalendar, today: NaiveDate) -> StreakResult {
    StreakResult {
        current_streak: current_streak(calendar, today),
        longest_streak: longest_streak(calendar),
    }
}

pub(crate) fn completed_dates(calendar: &CompletionCalendar) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = calendar
        .iter()
        .filter(|(_, record)| record.completed)
        .filter_map(|(key, _)| {
            let date = parse_day_key(key);
            if date.is_none() {
                debug!("skipping malformed day key {key:?}");
            }
            date
        })
        .collect();
    dates.sort_unstable();
    dates
}

fn longest_streak(calendar: &CompletionCalendar) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for date in completed_dates(calendar) {
        run = match prev.and_then(|p| p.succ_opt()) {
            Some(next) if next == date => run.saturating_add(1),
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }

    longest
}

fn current_streak(calendar: &CompletionCalendar, today: NaiveDate) -> u32 {
    let mut count = 0u32;
    let mut cursor = Some(today);

    while let Some(date) = cursor {
        let completed = calendar
            .get(&day_key(date))
            .is_some_and(|record| record.completed);
        if !completed {
            break;
        }
        count = count.saturating_add(1);
        cursor = date.pred_opt();
    }

    count
}
