use chrono::{DateTime, Local, TimeDelta};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::domain::{
    shell_state::ShellState,
    timer::{TimerState, TICKS_PER_SECOND},
};

use super::{dial, styles};

const TITLE: &str = "Pomodoro Technique";
const BUTTON_WIDTH: u16 = 13;
const BUTTON_HEIGHT: u16 = 3;
const KEY_HINTS: &str = "s/space start or pause · r reset · q quit";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    frame.render_widget(Block::default().style(styles::screen_style()), frame.area());

    let [title_area, dial_area, status_area, buttons_area, hints_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let title = Paragraph::new(TITLE)
        .style(styles::title_style())
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    render_dial_with_time(frame, dial_area, state.timer());

    let status = Paragraph::new(status_line(state, Local::now()))
        .style(styles::hint_style())
        .alignment(Alignment::Center);
    frame.render_widget(status, status_area);

    render_buttons(frame, buttons_area, state.timer());

    let hints = Paragraph::new(KEY_HINTS)
        .style(styles::hint_style())
        .alignment(Alignment::Center);
    frame.render_widget(hints, hints_area);
}

fn render_dial_with_time(frame: &mut Frame<'_>, area: Rect, timer: &TimerState) {
    let dial_area = dial::square_area(area);
    dial::render_dial(frame, dial_area, timer);

    // Drawn after the canvas so the digits sit on top of the arc.
    let time_area = Rect {
        x: dial_area.x,
        y: dial_area.y + dial_area.height / 2,
        width: dial_area.width,
        height: dial_area.height.min(1),
    };
    let time = Paragraph::new(timer.time_label())
        .style(styles::time_style())
        .alignment(Alignment::Center);
    frame.render_widget(time, time_area);
}

fn render_buttons(frame: &mut Frame<'_>, area: Rect, timer: &TimerState) {
    let [_, toggle_area, _, reset_area, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
        ])
        .areas(area);

    let toggle_label = format!("[s] {}", timer.toggle_label());
    frame.render_widget(
        button(&toggle_label).style(styles::toggle_button_style()),
        toggle_area,
    );
    frame.render_widget(
        button("[r] Reset").style(styles::reset_button_style()),
        reset_area,
    );
}

fn button(label: &str) -> Paragraph<'_> {
    Paragraph::new(vec![Line::raw(""), Line::raw(label)]).alignment(Alignment::Center)
}

fn status_line(state: &ShellState, now: DateTime<Local>) -> String {
    let timer = state.timer();
    let phase = if timer.is_running() {
        let remaining_ms = i64::from(timer.remaining_ticks()) * 1_000 / i64::from(TICKS_PER_SECOND);
        let ends_at = now + TimeDelta::milliseconds(remaining_ms);
        format!("Running · ends at {}", ends_at.format("%H:%M"))
    } else if timer.progress() < timer.initial_progress() {
        "Paused".to_owned()
    } else {
        "Ready".to_owned()
    };

    format!("{phase} · sessions completed: {}", state.completed_sessions())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn screen_text(state: &ShellState) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(60, 30)).expect("test terminal should build");
        terminal
            .draw(|frame| render(frame, state))
            .expect("view should render");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("fixed time should be unambiguous")
    }

    #[test]
    fn idle_screen_shows_title_time_and_controls() {
        let text = screen_text(&ShellState::default());

        assert!(text.contains(TITLE));
        assert!(text.contains("25:00"));
        assert!(text.contains("[s] Start"));
        assert!(text.contains("[r] Reset"));
    }

    #[test]
    fn running_screen_shows_pause_label_and_remaining_time() {
        let mut state = ShellState::default();
        state.timer_mut().press_start_pause();
        for _ in 0..3 {
            state.timer_mut().tick();
        }

        let text = screen_text(&state);

        assert!(text.contains("[s] Pause"));
        assert!(text.contains("24:58"));
    }

    #[test]
    fn status_reports_ready_before_first_start() {
        let state = ShellState::default();

        assert_eq!(
            status_line(&state, fixed_now()),
            "Ready · sessions completed: 0"
        );
    }

    #[test]
    fn status_reports_end_time_while_running() {
        let mut state = ShellState::default();
        state.timer_mut().press_start_pause();

        assert_eq!(
            status_line(&state, fixed_now()),
            "Running · ends at 09:25 · sessions completed: 0"
        );
    }

    #[test]
    fn status_reports_paused_after_partial_run() {
        let mut state = ShellState::default();
        state.timer_mut().press_start_pause();
        state.timer_mut().tick();
        state.timer_mut().press_start_pause();

        assert!(status_line(&state, fixed_now()).starts_with("Paused"));
    }
}
