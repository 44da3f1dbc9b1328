use std::env;

use chrono::Local;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Sets up process-wide logging: an append-only file under `logs/` named
/// after the process, its pid and the start time, mirrored to the console.
pub fn init(process_name: &str) -> Result<()> {
    let log_dir = env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_name = format!(
        "{}_{}_{}.log",
        process_name,
        std::process::id(),
        Local::now().format("%Y-%m-%d_%H-%M-%S"),
    );

    let file_appender = RollingFileAppender::new(Rotation::NEVER, log_dir, &log_file_name);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    let console_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(file_layer)
        .with(console_layer)
        .init();

    info!("logging initiated to file {}", log_file_name);
    Ok(())
}
