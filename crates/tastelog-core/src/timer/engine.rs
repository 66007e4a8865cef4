//! Countdown timer engine.
//!
//! The engine is a caller-ticked state machine. It owns no thread and no
//! clock -- the UI schedules one `tick()` per second while the timer is
//! running and stops scheduling when it is not.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused <-> Running) -> Finished -> Idle (reset)
//! ```
//!
//! `stop()` returns to Idle at the full configured duration from Running or
//! Paused. Exactly one completion event is emitted per run-to-zero; manual
//! stop and reset never emit one.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Finished,
}

/// A single countdown, parameterized by total duration and a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    /// Configured duration in seconds.
    duration_secs: u32,
    /// Remaining time in seconds for the current run.
    remaining_secs: u32,
    label: String,
    state: TimerState,
}

impl CountdownTimer {
    /// Create a new countdown in the `Idle` state with the full duration.
    pub fn new(duration_secs: u32, label: impl Into<String>) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            label: label.into(),
            state: TimerState::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 0.0 .. 1.0 progress through the countdown.
    pub fn progress(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        (1.0 - f64::from(self.remaining_secs) / f64::from(self.duration_secs)).max(0.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            label: self.label.clone(),
            remaining_secs: self.remaining_secs,
            duration_secs: self.duration_secs,
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start from Idle or resume from Paused. No-op while Running; a
    /// finished timer must be reset before it can run again.
    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    label: self.label.clone(),
                    duration_secs: self.duration_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => {
                self.state = TimerState::Running;
                Some(Event::TimerResumed {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running | TimerState::Finished => None,
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Cancel the current run and restore the full duration.
    pub fn stop(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running | TimerState::Paused => {
                self.state = TimerState::Idle;
                self.remaining_secs = self.duration_secs;
                Some(Event::TimerStopped { at: Utc::now() })
            }
            _ => None,
        }
    }

    /// Return to Idle at the full duration from any state.
    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.remaining_secs = self.duration_secs;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Add or subtract whole seconds from the remaining time, clamped at
    /// zero. Only permitted while Idle or Paused.
    pub fn adjust(&mut self, delta_secs: i64) -> Option<Event> {
        match self.state {
            TimerState::Idle | TimerState::Paused => {
                let adjusted = i64::from(self.remaining_secs) + delta_secs;
                self.remaining_secs = adjusted.clamp(0, i64::from(u32::MAX)) as u32;
                Some(Event::TimerAdjusted {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running | TimerState::Finished => None,
        }
    }

    /// Advance the countdown by one second. Returns
    /// `Some(Event::TimerFinished)` on the tick that reaches zero; every
    /// other tick, and every tick outside Running, returns `None`.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Finished;
            return Some(Event::TimerFinished {
                label: self.label.clone(),
                at: Utc::now(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_resume() {
        let mut timer = CountdownTimer::new(60, "Tea Steeping");
        assert_eq!(timer.state(), TimerState::Idle);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);

        // Starting again is a no-op.
        assert!(timer.start().is_none());

        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), TimerState::Paused);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn pause_outside_running_is_noop() {
        let mut timer = CountdownTimer::new(60, "t");
        assert!(timer.pause().is_none());
        timer.start();
        timer.pause();
        assert!(timer.pause().is_none());
    }

    #[test]
    fn runs_to_zero_with_exactly_one_completion() {
        let mut timer = CountdownTimer::new(10, "Soft Boiled Eggs");
        timer.start();

        let mut completions = 0;
        for _ in 0..10 {
            if let Some(Event::TimerFinished { .. }) = timer.tick() {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.state(), TimerState::Finished);

        // Further ticks stay silent.
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn pause_resumes_from_remaining_not_from_full() {
        let mut timer = CountdownTimer::new(10, "t");
        timer.start();
        for _ in 0..4 {
            timer.tick();
        }
        assert_eq!(timer.remaining_secs(), 6);

        timer.pause();
        timer.start();
        timer.tick();
        assert_eq!(timer.remaining_secs(), 5);
    }

    #[test]
    fn stop_restores_full_duration_without_completion() {
        let mut timer = CountdownTimer::new(30, "t");
        timer.start();
        timer.tick();
        timer.tick();

        let event = timer.stop();
        assert!(matches!(event, Some(Event::TimerStopped { .. })));
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 30);
    }

    #[test]
    fn reset_returns_finished_timer_to_idle() {
        let mut timer = CountdownTimer::new(2, "t");
        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.state(), TimerState::Finished);

        // A finished timer will not start until reset.
        assert!(timer.start().is_none());

        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 2);
        assert!(timer.start().is_some());
    }

    #[test]
    fn adjust_only_while_idle_or_paused() {
        let mut timer = CountdownTimer::new(120, "t");

        assert!(timer.adjust(60).is_some());
        assert_eq!(timer.remaining_secs(), 180);

        timer.start();
        assert!(timer.adjust(60).is_none());
        assert_eq!(timer.remaining_secs(), 180);

        timer.pause();
        assert!(timer.adjust(-60).is_some());
        assert_eq!(timer.remaining_secs(), 120);
    }

    #[test]
    fn adjust_clamps_at_zero() {
        let mut timer = CountdownTimer::new(30, "t");
        timer.adjust(-300);
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let mut timer = CountdownTimer::new(10, "t");
        assert_eq!(timer.progress(), 0.0);
        timer.start();
        for _ in 0..5 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_reflects_state() {
        let timer = CountdownTimer::new(300, "Steamed Vegetables");
        match timer.snapshot() {
            Event::StateSnapshot {
                state,
                remaining_secs,
                duration_secs,
                ..
            } => {
                assert_eq!(state, TimerState::Idle);
                assert_eq!(remaining_secs, 300);
                assert_eq!(duration_secs, 300);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
