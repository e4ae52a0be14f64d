use std::{io, panic};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Puts the terminal back into cooked mode before the panic message is printed,
/// otherwise it lands on the alternate screen and is lost.
pub fn install_terminal_restore_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        let payload = panic_payload(panic_info.payload());

        if let Some(location) = panic_info.location() {
            eprintln!(
                "pomodoro panic: {} at {}:{}:{}",
                payload,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("pomodoro panic: {}", payload);
        }
    }));
}

fn panic_payload(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic payload omitted".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_static_and_owned_payloads() {
        let static_payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        let owned_payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        let opaque_payload: Box<dyn std::any::Any + Send> = Box::new(42_u8);

        assert_eq!(panic_payload(static_payload.as_ref()), "boom");
        assert_eq!(panic_payload(owned_payload.as_ref()), "bang");
        assert_eq!(panic_payload(opaque_payload.as_ref()), "panic payload omitted");
    }
}
