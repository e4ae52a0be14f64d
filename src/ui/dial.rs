//! Circular progress dial drawn on a braille canvas.

use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Points},
    Frame,
};

use crate::domain::timer::TimerState;

use super::styles;

const RADIUS: f64 = 0.9;
const STEP_DEGREES: f64 = 0.5;
const TRACK_COLOR: Color = Color::Rgb(0xD9, 0x7A, 0x7A);

pub fn render_dial(frame: &mut Frame<'_>, area: Rect, timer: &TimerState) {
    let arc = arc_points(timer.start_angle_degrees(), timer.sweep_degrees(), RADIUS);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(styles::BACKGROUND)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: TRACK_COLOR,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &arc,
                color: styles::dial_color(),
            });
        });

    frame.render_widget(canvas, area);
}

/// Samples an arc that starts at `start_degrees` and runs clockwise for
/// `sweep_degrees`. Angles use screen orientation: 0 is three o'clock and -90
/// is twelve o'clock. The returned points are in y-up canvas space.
pub fn arc_points(start_degrees: f64, sweep_degrees: f64, radius: f64) -> Vec<(f64, f64)> {
    if sweep_degrees <= 0.0 {
        return Vec::new();
    }

    let steps = (sweep_degrees / STEP_DEGREES).ceil() as usize;
    (0..=steps)
        .map(|step| {
            let offset = (step as f64 * STEP_DEGREES).min(sweep_degrees);
            let radians = (start_degrees + offset).to_radians();
            (radius * radians.cos(), -radius * radians.sin())
        })
        .collect()
}

/// Largest area with a 2:1 column/row ratio centred in `area`, so the dial
/// looks round in a typical terminal cell grid.
pub fn square_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
