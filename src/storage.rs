use crate::models::HabitData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/habits.json")
}

/// Reads a habit snapshot. A missing file is an empty snapshot; an
/// unreadable or unparseable one is logged and also treated as empty.
pub async fn load_data(path: &Path) -> HabitData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<HabitData>(&bytes) {
            Ok(data) => {
                info!("loaded {} habits from {}", data.habits.len(), path.display());
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                HabitData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => HabitData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            HabitData::default()
        }
    }
}
