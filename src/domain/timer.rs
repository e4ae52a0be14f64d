//! Countdown state for a single Pomodoro session.
//!
//! Progress counts half-second ticks, offset by [`FINAL_PROGRESS`]. A fresh
//! 25 minute session starts at `3002` and wraps back to the start once it
//! reaches `2`.

pub const FINAL_PROGRESS: u32 = 2;
pub const TICKS_PER_SECOND: u32 = 2;
pub const TICKS_PER_MINUTE: u32 = 60 * TICKS_PER_SECOND;
pub const DEFAULT_SESSION_MINUTES: u32 = 25;

/// Gap left open at the top of the dial, in degrees.
pub const DIVIDER_DEGREES: f64 = 1.8;
/// Dial arcs start at twelve o'clock.
pub const START_ANGLE_DEGREES: f64 = -90.0;

const FULL_CIRCLE_DEGREES: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Counted,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPauseTransition {
    Started,
    Stopped,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    running: bool,
    pause_armed: bool,
    progress: u32,
    initial: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::with_session_minutes(DEFAULT_SESSION_MINUTES)
    }
}

impl TimerState {
    /// Session lengths are expected within `1..=1440` minutes, as enforced by
    /// config loading. Zero is raised to one minute and absurdly large values
    /// saturate instead of overflowing.
    pub fn with_session_minutes(minutes: u32) -> Self {
        let initial = minutes
            .max(1)
            .saturating_mul(TICKS_PER_MINUTE)
            .saturating_add(FINAL_PROGRESS);
        Self {
            running: false,
            pause_armed: false,
            progress: initial,
            initial,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_pause_armed(&self) -> bool {
        self.pause_armed
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn initial_progress(&self) -> u32 {
        self.initial
    }

    /// Handles the Start/Pause control.
    ///
    /// The running flag follows the previous label: pressing "Start" runs the
    /// countdown, pressing "Pause" stops it. The label flips on every press.
    pub fn press_start_pause(&mut self) -> StartPauseTransition {
        let was_running = self.running;
        self.running = !self.pause_armed;
        self.pause_armed = !self.pause_armed;

        match (was_running, self.running) {
            (false, true) => StartPauseTransition::Started,
            (true, false) => StartPauseTransition::Stopped,
            _ => StartPauseTransition::Unchanged,
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.pause_armed = false;
        self.progress = self.initial;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.progress = self.progress.saturating_sub(1);
        if self.progress <= FINAL_PROGRESS {
            self.progress = self.initial;
            self.running = false;
            return TickOutcome::Completed;
        }

        TickOutcome::Counted
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.progress - FINAL_PROGRESS
    }

    pub fn minutes(&self) -> u32 {
        decode_minutes(self.progress)
    }

    pub fn seconds(&self) -> u32 {
        decode_seconds(self.progress)
    }

    /// `M:SS`, minutes unpadded.
    pub fn time_label(&self) -> String {
        format!("{}:{:02}", self.minutes(), self.seconds())
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.pause_armed {
            "Pause"
        } else {
            "Start"
        }
    }

    /// Arc length drawn by the dial, proportional to the remaining progress.
    pub fn sweep_degrees(&self) -> f64 {
        let span = f64::from(self.initial - FINAL_PROGRESS);
        let fraction = f64::from(self.remaining_ticks()) / span;
        (fraction * FULL_CIRCLE_DEGREES - DIVIDER_DEGREES).max(0.0)
    }

    pub fn start_angle_degrees(&self) -> f64 {
        START_ANGLE_DEGREES + DIVIDER_DEGREES / 2.0
    }
}

pub fn decode_minutes(progress: u32) -> u32 {
    progress.saturating_sub(FINAL_PROGRESS) / TICKS_PER_MINUTE
}

pub fn decode_seconds(progress: u32) -> u32 {
    (progress.saturating_sub(FINAL_PROGRESS) % TICKS_PER_MINUTE) / TICKS_PER_SECOND
}
