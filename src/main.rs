use habit_streaks::{build_report_at, errors::AppError, load_data, Settings};
use std::io::Write;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env()?;
    info!(
        "computing streaks from {} as of {}",
        settings.data_path.display(),
        settings.today
    );

    let data = load_data(&settings.data_path).await;
    let report = build_report_at(settings.today, &data);

    let payload = serde_json::to_string_pretty(&report).map_err(AppError::from)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{payload}").map_err(AppError::from)?;

    Ok(())
}
