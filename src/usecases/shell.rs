use anyhow::Result;

use crate::domain::{
    events::{AppEvent, CountdownSignal, KeyInput},
    shell_state::ShellState,
    timer::{StartPauseTransition, TickOutcome, TimerState},
};

use super::contracts::{ShellOrchestrator, TickScheduler};

const TIMER_SESSION_COMPLETED: &str = "TIMER_SESSION_COMPLETED";
const TIMER_STALE_TICK_IGNORED: &str = "TIMER_STALE_TICK_IGNORED";

pub struct DefaultShellOrchestrator<T>
where
    T: TickScheduler,
{
    state: ShellState,
    scheduler: T,
    generation: u64,
}

impl<T> DefaultShellOrchestrator<T>
where
    T: TickScheduler,
{
    pub fn new(scheduler: T, timer: TimerState) -> Self {
        Self {
            state: ShellState::new(timer),
            scheduler,
            generation: 0,
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Result<()> {
        if key.ctrl {
            return Ok(());
        }

        match key.key.as_str() {
            "s" | " " => self.press_start_pause()?,
            "r" => self.press_reset(),
            _ => {}
        }

        Ok(())
    }

    fn press_start_pause(&mut self) -> Result<()> {
        match self.state.timer_mut().press_start_pause() {
            StartPauseTransition::Started => {
                self.generation += 1;
                self.scheduler.start(self.generation)?;
                tracing::info!(
                    generation = self.generation,
                    progress = self.state.timer().progress(),
                    "countdown started"
                );
            }
            StartPauseTransition::Stopped => {
                self.scheduler.cancel();
                tracing::info!(
                    progress = self.state.timer().progress(),
                    "countdown paused"
                );
            }
            StartPauseTransition::Unchanged => {}
        }

        Ok(())
    }

    fn press_reset(&mut self) {
        self.scheduler.cancel();
        self.state.timer_mut().reset();
        tracing::info!("countdown reset");
    }

    fn handle_countdown_tick(&mut self, signal: CountdownSignal) {
        if signal.generation != self.generation {
            tracing::debug!(
                code = TIMER_STALE_TICK_IGNORED,
                generation = signal.generation,
                current_generation = self.generation,
                "ignoring tick from a cancelled countdown loop"
            );
            return;
        }

        if self.state.timer_mut().tick() == TickOutcome::Completed {
            self.scheduler.cancel();
            self.state.record_completed_session();
            tracing::info!(
                code = TIMER_SESSION_COMPLETED,
                completed_sessions = self.state.completed_sessions(),
                "pomodoro session completed"
            );
        }
    }
}

impl<T> ShellOrchestrator for DefaultShellOrchestrator<T>
where
    T: TickScheduler,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => {
                self.scheduler.cancel();
                self.state.stop();
            }
            AppEvent::InputKey(key) => self.handle_key(key)?,
            AppEvent::CountdownTick(signal) => self.handle_countdown_tick(signal),
        }

        Ok(())
    }
}
