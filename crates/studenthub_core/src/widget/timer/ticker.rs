//! Background tick worker for a shared countdown timer.
//!
//! # Invariants
//! - At most one worker thread exists per ticker.
//! - `pause`/`reset` return only after the worker has exited.

use super::{CountdownTimer, TimerPhase, TimerView};
use log::{debug, info};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

type RenderFn = dyn Fn(&TimerView) + Send + Sync + 'static;

struct Worker {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

/// Drives a [`CountdownTimer`] with a recurring tick on its own thread.
pub struct TimerTicker {
    timer: Arc<Mutex<CountdownTimer>>,
    interval: Duration,
    render: Arc<RenderFn>,
    worker: Option<Worker>,
}

impl TimerTicker {
    /// Creates a ticker; `render` runs after every tick and state change.
    pub fn new(
        timer: CountdownTimer,
        interval: Duration,
        render: impl Fn(&TimerView) + Send + Sync + 'static,
    ) -> Self {
        Self {
            timer: Arc::new(Mutex::new(timer)),
            interval,
            render: Arc::new(render),
            worker: None,
        }
    }

    /// Current render snapshot.
    pub fn view(&self) -> TimerView {
        lock(&self.timer).render()
    }

    pub fn phase(&self) -> TimerPhase {
        lock(&self.timer).phase()
    }

    pub fn remaining_seconds(&self) -> u32 {
        lock(&self.timer).remaining_seconds()
    }

    /// Renders the current state without changing it.
    pub fn render_now(&self) {
        let view = self.view();
        (self.render)(&view);
    }

    /// Starts the tick worker. No-op while a worker is alive or the timer
    /// has completed.
    pub fn start(&mut self) {
        self.reap_finished_worker();
        if self.worker.is_some() {
            debug!("event=timer_start module=timer status=ignored reason=already_running");
            return;
        }
        if !lock(&self.timer).start() {
            debug!("event=timer_start module=timer status=ignored reason=not_idle");
            return;
        }

        let (stop, stop_rx) = mpsc::channel::<()>();
        let timer = Arc::clone(&self.timer);
        let render = Arc::clone(&self.render);
        let interval = self.interval;
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
            let (phase, view) = {
                let mut guard = lock(&timer);
                let phase = guard.tick();
                (phase, guard.render())
            };
            render(&view);
            if phase != TimerPhase::Running {
                info!("event=timer_complete module=timer status=ok");
                break;
            }
        });

        info!(
            "event=timer_start module=timer status=ok remaining_seconds={}",
            self.remaining_seconds()
        );
        self.worker = Some(Worker { stop, handle });
    }

    /// Stops the tick worker and keeps the remaining time.
    pub fn pause(&mut self) {
        self.stop_worker();
        lock(&self.timer).pause();
        info!(
            "event=timer_pause module=timer status=ok remaining_seconds={}",
            self.remaining_seconds()
        );
    }

    /// Stops the tick worker and restores the full session.
    pub fn reset(&mut self) {
        self.stop_worker();
        lock(&self.timer).reset();
        info!("event=timer_reset module=timer status=ok");
        self.render_now();
    }

    /// Returns whether a worker is currently ticking.
    pub fn is_ticking(&mut self) -> bool {
        self.reap_finished_worker();
        self.worker.is_some()
    }

    fn stop_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop.send(());
            let _ = worker.handle.join();
        }
    }

    fn reap_finished_worker(&mut self) {
        let finished = self
            .worker
            .as_ref()
            .is_some_and(|worker| worker.handle.is_finished());
        if finished {
            self.stop_worker();
        }
    }
}

impl Drop for TimerTicker {
    fn drop(&mut self) {
        self.stop_worker();
    }
}

// A panicking render callback must not wedge the timer controls.
fn lock(timer: &Mutex<CountdownTimer>) -> MutexGuard<'_, CountdownTimer> {
    timer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
