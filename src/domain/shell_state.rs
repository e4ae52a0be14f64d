use super::timer::TimerState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    timer: TimerState,
    completed_sessions: u32,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(TimerState::default())
    }
}

impl ShellState {
    pub fn new(timer: TimerState) -> Self {
        Self {
            running: true,
            timer,
            completed_sessions: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut TimerState {
        &mut self.timer
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    pub fn record_completed_session(&mut self) {
        self.completed_sessions = self.completed_sessions.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_with_default_timer() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert_eq!(state.timer(), &TimerState::default());
        assert_eq!(state.completed_sessions(), 0);
    }

    #[test]
    fn stop_keeps_timer_untouched() {
        let mut state = ShellState::default();
        state.timer_mut().press_start_pause();
        state.stop();

        assert!(!state.is_running());
        assert!(state.timer().is_running());
    }
}
