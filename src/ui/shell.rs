use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        session_minutes = context.config.timer.session_minutes,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    let mut completed_sessions = orchestrator.state().completed_sessions();

    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }

        if session_just_completed(&mut completed_sessions, orchestrator.state().completed_sessions())
            && context.config.timer.bell_on_complete
        {
            terminal.ring_bell()?;
        }
    }

    tracing::info!("TUI shell stopped");
    Ok(())
}

fn session_just_completed(seen: &mut u32, current: u32) -> bool {
    let completed = current > *seen;
    *seen = current;
    completed
}
