use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, CountdownSignal, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Merges countdown ticks from the runtime with terminal key presses.
pub struct CrosstermEventSource {
    countdown_rx: Receiver<CountdownSignal>,
}

impl CrosstermEventSource {
    pub fn new(countdown_rx: Receiver<CountdownSignal>) -> Self {
        Self { countdown_rx }
    }
}

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(signal) = next_countdown_signal(&self.countdown_rx) {
            return Ok(Some(AppEvent::CountdownTick(signal)));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            return Ok(key_event(key.code, key.modifiers));
        }

        Ok(None)
    }
}

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Option<AppEvent> {
    let KeyCode::Char(ch) = code else {
        return None;
    };

    let ch = ch.to_ascii_lowercase();
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    if ch == 'q' || (ch == 'c' && ctrl) {
        return Some(AppEvent::QuitRequested);
    }

    Some(AppEvent::InputKey(KeyInput::new(ch.to_string(), ctrl)))
}

fn next_countdown_signal(rx: &Receiver<CountdownSignal>) -> Option<CountdownSignal> {
    match rx.try_recv() {
        Ok(signal) => Some(signal),
        Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn pending_countdown_signal_is_taken_first() {
        let (tx, rx) = mpsc::channel();
        tx.send(CountdownSignal { generation: 4 })
            .expect("signal should be queued");

        assert_eq!(
            next_countdown_signal(&rx),
            Some(CountdownSignal { generation: 4 })
        );
        assert_eq!(next_countdown_signal(&rx), None);
    }

    #[test]
    fn quit_key_works_in_either_case() {
        assert_eq!(
            key_event(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(
            key_event(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(
            key_event(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(AppEvent::QuitRequested)
        );
    }

    #[test]
    fn letter_keys_are_lowercased_for_orchestrator() {
        assert_eq!(
            key_event(KeyCode::Char('S'), KeyModifiers::SHIFT),
            Some(AppEvent::InputKey(KeyInput::new("s", false)))
        );
        assert_eq!(key_event(KeyCode::Enter, KeyModifiers::NONE), None);
    }

    #[test]
    fn disconnected_countdown_channel_yields_nothing() {
        let (tx, rx) = mpsc::channel::<CountdownSignal>();
        drop(tx);

        assert_eq!(next_countdown_signal(&rx), None);
    }

    #[test]
    fn countdown_signal_reaches_app_event_without_touching_terminal() {
        let (tx, rx) = mpsc::channel();
        tx.send(CountdownSignal { generation: 1 })
            .expect("signal should be queued");
        let mut source = CrosstermEventSource::new(rx);

        let event = source.next_event().expect("signal should be read");

        assert_eq!(
            event,
            Some(AppEvent::CountdownTick(CountdownSignal { generation: 1 }))
        );
    }
}
