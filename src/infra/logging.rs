use std::{fs, path::Path};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

const LOG_FILE_NAME: &str = "pomodoro.log";

/// Routes tracing output to a log file; the terminal belongs to the TUI.
///
/// The returned guard flushes buffered records on drop and must outlive the run.
pub fn init(config: &LogConfig, layout: &StorageLayout) -> Result<WorkerGuard, AppError> {
    let log_dir = config
        .directory
        .clone()
        .unwrap_or_else(|| layout.log_dir.clone());

    fs::create_dir_all(&log_dir).map_err(|source| AppError::StorageDirCreate {
        path: log_dir.clone(),
        source,
    })?;

    let appender = file_appender(&log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, AppError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .map_err(|error| AppError::LoggingInit(Box::new(error)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_under(root: &Path) -> StorageLayout {
        StorageLayout {
            config_dir: root.to_path_buf(),
            log_dir: root.join("logs"),
        }
    }

    #[test]
    fn appender_creates_log_file_in_directory() {
        let root = tempfile::tempdir().expect("temp dir should be creatable");

        file_appender(root.path()).expect("appender should open log file");

        assert!(root.path().join(LOG_FILE_NAME).is_file());
    }

    #[test]
    fn unopenable_log_file_is_reported_as_error() {
        let root = tempfile::tempdir().expect("temp dir should be creatable");
        fs::create_dir(root.path().join(LOG_FILE_NAME))
            .expect("log file path should be occupied by a directory");
        let config = LogConfig {
            directory: Some(root.path().to_path_buf()),
            ..LogConfig::default()
        };

        let error = init(&config, &layout_under(root.path()))
            .expect_err("log file that is a directory must fail");

        assert!(matches!(error, AppError::LoggingInit(_)));
    }
}
