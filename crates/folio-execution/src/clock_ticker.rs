//! Periodic clock ticks for the menu bar and window title bars.
//!
//! The ticker is a scoped resource: [`ClockTicker::start`] spawns the timer
//! task and returns a [`TickerHandle`]; dropping the handle (or calling
//! [`TickerHandle::stop`]) cancels it, so the timer never outlives the view
//! that mounted it.

use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Spawns a task that sends the current local time at a fixed interval.
#[derive(Debug, Clone)]
pub struct ClockTicker {
    interval: Duration,
}

impl ClockTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Starts ticking into `sender`. The first tick is sent immediately.
    ///
    /// The task ends when the handle is stopped or dropped, or when the
    /// receiving side of `sender` is closed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, sender: mpsc::UnboundedSender<DateTime<Local>>) -> TickerHandle {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let period = self.interval;

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            tracing::debug!("[ClockTicker] Started with interval {:?}", period);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if sender.send(Local::now()).is_err() {
                            tracing::debug!("[ClockTicker] Receiver dropped");
                            break;
                        }
                    }
                }
            }

            tracing::debug!("[ClockTicker] Stopped");
        });

        TickerHandle {
            cancel,
            task: Some(task),
        }
    }
}

/// Owner of a running ticker. Cancels the ticker when dropped.
#[derive(Debug)]
pub struct TickerHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancels the ticker and waits for its task to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("[ClockTicker] Task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
