//! Countdown runtime: the periodic tick task behind a running timer.

pub mod ticker;

use std::time::Duration;

use anyhow::Result;
use tokio::runtime::{Builder, Runtime};

pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

const RUNTIME_THREAD_NAME: &str = "pomodoro-countdown";

pub fn build_runtime() -> Result<Runtime> {
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name(RUNTIME_THREAD_NAME)
        .enable_time()
        .build()?;

    Ok(runtime)
}

/// Returns the countdown module name for smoke checks.
pub fn module_name() -> &'static str {
    "countdown"
}
