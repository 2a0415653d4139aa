pub mod calendar;
pub mod config;
pub mod errors;
pub mod models;
pub mod stats;
pub mod storage;
pub mod streak;

pub use config::Settings;
pub use models::{CompletionCalendar, CompletionRecord, StreakResult};
pub use stats::{build_log, build_report, build_report_at};
pub use storage::{load_data, resolve_data_path};
pub use streak::{compute_streaks, compute_streaks_now};
