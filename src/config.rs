use crate::calendar::parse_day_key;
use crate::errors::AppError;
use crate::storage::resolve_data_path;
use chrono::{Local, NaiveDate};
use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_path: PathBuf,
    pub today: NaiveDate,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        let today = parse_today(env::var("APP_TODAY").ok().as_deref(), Local::now().date_naive())?;
        Ok(Self {
            data_path: resolve_data_path(),
            today,
        })
    }
}

/// `APP_TODAY` pins the reference day; unset or blank means `fallback`.
pub fn parse_today(value: Option<&str>, fallback: NaiveDate) -> Result<NaiveDate, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(fallback),
        Some(raw) => parse_day_key(raw)
            .ok_or_else(|| AppError::bad_request(format!("APP_TODAY must be YYYY-MM-DD, got {raw:?}"))),
    }
}
