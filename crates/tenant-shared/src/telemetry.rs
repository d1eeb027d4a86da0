//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSettings};
use crate::error::AppError;

pub fn init_telemetry(settings: &LoggingSettings) -> Result<(), AppError> {
    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;

    let file_appender = match &settings.directory {
        Some(dir) => Some(
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("tenant-console")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?,
        ),
        None => None,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match settings.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_level(true))
            .with(file_appender.map(|writer| fmt::layer().json().with_writer(writer)))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(true).with_thread_ids(false))
            .with(file_appender.map(|writer| {
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_ansi(false)
            }))
            .try_init(),
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))
}
