use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::timer::DEFAULT_SESSION_MINUTES;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub timer: TimerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerConfig {
    pub session_minutes: u32,
    pub bell_on_complete: bool,
}

impl TimerConfig {
    pub const MAX_SESSION_MINUTES: u32 = 24 * 60;
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            session_minutes: DEFAULT_SESSION_MINUTES,
            bell_on_complete: true,
        }
    }
}
