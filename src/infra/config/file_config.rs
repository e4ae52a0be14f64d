use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, TimerConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub timer: Option<FileTimerConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(timer) = self.timer {
            timer.merge_into(&mut config.timer);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub directory: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(directory) = self.directory {
            config.directory = Some(directory);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTimerConfig {
    pub session_minutes: Option<u32>,
    pub bell_on_complete: Option<bool>,
}

impl FileTimerConfig {
    fn merge_into(self, config: &mut TimerConfig) {
        if let Some(minutes) = self.session_minutes {
            config.session_minutes = minutes;
        }

        if let Some(bell) = self.bell_on_complete {
            config.bell_on_complete = bell;
        }
    }
}
