//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Screen background, a deep tomato red.
pub const BACKGROUND: Color = Color::Rgb(0xB7, 0x3E, 0x3E);

/// Color of the reset control.
pub const RESET_ACCENT: Color = Color::Rgb(0xE0, 0x2B, 0x2B);

pub fn screen_style() -> Style {
    Style::default().bg(BACKGROUND).fg(Color::White)
}

/// Style for the "Pomodoro Technique" heading.
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn dial_color() -> Color {
    Color::White
}

/// Style for the `M:SS` readout in the middle of the dial.
pub fn time_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Start/Pause control: white button, background-colored label.
pub fn toggle_button_style() -> Style {
    Style::default()
        .bg(Color::White)
        .fg(BACKGROUND)
        .add_modifier(Modifier::BOLD)
}

pub fn reset_button_style() -> Style {
    Style::default()
        .bg(RESET_ACCENT)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status and key hint lines.
pub fn hint_style() -> Style {
    Style::default().fg(Color::Gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_style_is_bold_white() {
        let style = title_style();
        assert_eq!(style.fg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn reset_button_uses_red_accent() {
        let style = reset_button_style();
        assert_eq!(style.bg, Some(RESET_ACCENT));
        assert_eq!(style.fg, Some(Color::White));
    }

    #[test]
    fn toggle_button_inverts_screen_colors() {
        let style = toggle_button_style();
        assert_eq!(style.bg, Some(Color::White));
        assert_eq!(style.fg, Some(BACKGROUND));
    }
}
