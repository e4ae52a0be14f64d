use anyhow::Result;

use crate::domain::{events::AppEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Owns the periodic task that drives the countdown.
///
/// At most one loop is alive at a time: `start` replaces any loop still running.
pub trait TickScheduler {
    fn start(&mut self, generation: u64) -> Result<()>;
    fn cancel(&mut self);
}
