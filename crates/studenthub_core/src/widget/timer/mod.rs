//! Pomodoro countdown timer.
//!
//! # Responsibility
//! - Hold remaining time and running state for one countdown session.
//! - Derive the `MM:SS` label and ring progress from remaining time.
//!
//! # Invariants
//! - `remaining_seconds` stays within `[0, total_seconds]`.
//! - A completed timer only leaves `Completed` through `reset`.
//! - At most one tick worker drives a timer (see [`TimerTicker`]).

use std::f64::consts::PI;

mod ticker;

pub use ticker::TimerTicker;

/// Full session length: 25 minutes.
pub const POMODORO_SECONDS: u32 = 25 * 60;
/// Radius of the progress ring, in view units.
pub const RING_RADIUS: f64 = 94.0;
/// Label shown once the countdown has finished.
pub const COMPLETION_MARKER: &str = "Done!";

/// Ring circumference, used as the stroke dash length.
pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Completed,
}

/// Render snapshot of the timer.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerView {
    /// `MM:SS`, or the completion marker.
    pub label: String,
    /// Elapsed fraction in `[0, 1]`.
    pub progress: f64,
    /// Ring stroke offset: `circumference * progress`.
    pub stroke_offset: f64,
}

/// Countdown state machine. Ticks are delivered by the caller.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    phase: TimerPhase,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    /// Creates an idle pomodoro timer showing `25:00`.
    pub fn new() -> Self {
        Self::with_total_seconds(POMODORO_SECONDS)
    }

    /// Creates an idle timer with a custom session length (minimum 1s).
    pub fn with_total_seconds(total_seconds: u32) -> Self {
        let total_seconds = total_seconds.max(1);
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            phase: TimerPhase::Idle,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Starts counting down. Returns `false` when already running or
    /// completed, in which case nothing changes.
    pub fn start(&mut self) -> bool {
        if self.phase != TimerPhase::Idle {
            return false;
        }
        self.phase = TimerPhase::Running;
        true
    }

    /// Stops counting and keeps the remaining time. Idempotent.
    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Idle;
        }
    }

    /// Stops counting and restores the full session length.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.phase = TimerPhase::Idle;
    }

    /// Applies one one-second tick. Returns the phase after the tick.
    ///
    /// Ticks delivered while not running are ignored. The tick that
    /// reaches zero moves the timer to `Completed`.
    pub fn tick(&mut self) -> TimerPhase {
        if self.phase != TimerPhase::Running {
            return self.phase;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.phase = TimerPhase::Completed;
        }
        self.phase
    }

    pub fn render(&self) -> TimerView {
        let label = if self.phase == TimerPhase::Completed {
            COMPLETION_MARKER.to_string()
        } else {
            format!(
                "{:02}:{:02}",
                self.remaining_seconds / 60,
                self.remaining_seconds % 60
            )
        };
        let elapsed = self.total_seconds - self.remaining_seconds;
        let progress = f64::from(elapsed) / f64::from(self.total_seconds);
        TimerView {
            label,
            progress,
            stroke_offset: ring_circumference() * progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ring_circumference, CountdownTimer, TimerPhase, COMPLETION_MARKER};

    #[test]
    fn fresh_timer_renders_full_session() {
        let timer = CountdownTimer::new();
        let view = timer.render();
        assert_eq!(view.label, "25:00");
        assert_eq!(view.progress, 0.0);
        assert_eq!(view.stroke_offset, 0.0);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn ticks_are_ignored_until_started() {
        let mut timer = CountdownTimer::new();
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 1500);

        assert!(timer.start());
        timer.tick();
        assert_eq!(timer.render().label, "24:59");
    }

    #[test]
    fn second_start_does_not_speed_up_countdown() {
        let mut once = CountdownTimer::new();
        once.start();
        let mut twice = CountdownTimer::new();
        twice.start();
        assert!(!twice.start());

        for _ in 0..10 {
            once.tick();
            twice.tick();
        }
        assert_eq!(once.remaining_seconds(), twice.remaining_seconds());
        assert_eq!(twice.remaining_seconds(), 1490);
    }

    #[test]
    fn full_session_ends_with_completion_marker() {
        let mut timer = CountdownTimer::new();
        timer.start();
        for _ in 0..1499 {
            assert_eq!(timer.tick(), TimerPhase::Running);
        }
        assert_eq!(timer.render().label, "00:01");
        assert_eq!(timer.tick(), TimerPhase::Completed);

        let view = timer.render();
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(view.label, COMPLETION_MARKER);
        assert_eq!(view.progress, 1.0);
        assert!((view.stroke_offset - ring_circumference()).abs() < 1e-9);

        assert!(!timer.start());
        assert_eq!(timer.tick(), TimerPhase::Completed);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn pause_keeps_remaining_time_and_is_idempotent() {
        let mut timer = CountdownTimer::new();
        timer.start();
        for _ in 0..75 {
            timer.tick();
        }
        timer.pause();
        timer.pause();
        timer.tick();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.render().label, "23:45");
        assert!((timer.render().progress - 0.05).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_full_session_from_any_state() {
        let mut timer = CountdownTimer::with_total_seconds(3);
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.render().label, "00:03");
        assert_eq!(timer.phase(), TimerPhase::Idle);

        timer.start();
        for _ in 0..3 {
            timer.tick();
        }
        assert_eq!(timer.phase(), TimerPhase::Completed);
        timer.reset();
        assert_eq!(timer.remaining_seconds(), 3);
        assert!(timer.start());
    }
}
