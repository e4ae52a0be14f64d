use std::{sync::mpsc::Sender, time::Duration};

use anyhow::Result;
use tokio::{
    runtime::Handle,
    sync::watch,
    time::{self, MissedTickBehavior},
};

use crate::{domain::events::CountdownSignal, usecases::contracts::TickScheduler};

const COUNTDOWN_LOOP_STARTED: &str = "COUNTDOWN_LOOP_STARTED";
const COUNTDOWN_LOOP_STOPPED: &str = "COUNTDOWN_LOOP_STOPPED";
const COUNTDOWN_LOOP_CANCEL_REQUESTED: &str = "COUNTDOWN_LOOP_CANCEL_REQUESTED";
const COUNTDOWN_SIGNAL_SEND_FAILED: &str = "COUNTDOWN_SIGNAL_SEND_FAILED";

/// Runs countdown loops on a tokio runtime and forwards their ticks over a
/// channel to the UI thread.
#[derive(Debug)]
pub struct TokioTickScheduler {
    runtime: Handle,
    interval: Duration,
    signal_tx: Sender<CountdownSignal>,
    stop_tx: Option<watch::Sender<bool>>,
}

impl TokioTickScheduler {
    pub fn new(runtime: Handle, interval: Duration, signal_tx: Sender<CountdownSignal>) -> Self {
        Self {
            runtime,
            interval,
            signal_tx,
            stop_tx: None,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_active(&self) -> bool {
        self.stop_tx
            .as_ref()
            .is_some_and(|stop_tx| !stop_tx.is_closed())
    }
}

impl TickScheduler for TokioTickScheduler {
    fn start(&mut self, generation: u64) -> Result<()> {
        self.cancel();

        let (stop_tx, stop_rx) = watch::channel(false);
        self.runtime.spawn(run_loop(
            self.interval,
            generation,
            self.signal_tx.clone(),
            stop_rx,
        ));

        tracing::debug!(
            code = COUNTDOWN_LOOP_STARTED,
            generation,
            interval_ms = self.interval.as_millis() as u64,
            "countdown loop started"
        );

        self.stop_tx = Some(stop_tx);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
            tracing::debug!(
                code = COUNTDOWN_LOOP_CANCEL_REQUESTED,
                "countdown loop cancel requested"
            );
        }
    }
}

impl Drop for TokioTickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_loop(
    interval: Duration,
    generation: u64,
    signal_tx: Sender<CountdownSignal>,
    mut stop_rx: watch::Receiver<bool>,
) {
    // The first tick resolves immediately, so a fresh loop counts down at once.
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    tracing::debug!(
                        code = COUNTDOWN_LOOP_STOPPED,
                        generation,
                        "countdown loop stopped"
                    );
                    return;
                }
            }
            _ = ticker.tick() => {
                if let Err(error) = signal_tx.send(CountdownSignal { generation }) {
                    tracing::warn!(
                        code = COUNTDOWN_SIGNAL_SEND_FAILED,
                        generation,
                        error = %error,
                        "countdown loop failed to deliver tick; stopping"
                    );
                    return;
                }
            }
        }
    }
}
