//! Round countdown timer.
//!
//! Stopped -> Running -> Expired, ticking once per second off its own
//! [`Cadence`]. Expiry is signalled exactly once per run.

use bicopt_core::constants::ROUND_TIMER_PERIOD_SECS;
use bicopt_core::enums::TimerState;

use crate::cadence::Cadence;

/// Output of a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    /// Seconds remaining after this tick.
    Updated(u32),
    /// The round is over.
    Expired,
}

#[derive(Debug)]
pub struct RoundTimer {
    state: TimerState,
    seconds_remaining: u32,
    cadence: Cadence,
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            seconds_remaining: 0,
            cadence: Cadence::new(ROUND_TIMER_PERIOD_SECS),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Stopped -> Running. Ignored in any other state; an expired timer
    /// must be `reset` first.
    pub fn start(&mut self, duration_secs: u32) {
        if self.state != TimerState::Stopped {
            return;
        }
        self.seconds_remaining = duration_secs;
        self.state = TimerState::Running;
        self.cadence.start();
    }

    /// Running -> Stopped without signalling expiry.
    pub fn stop(&mut self) {
        self.cadence.stop();
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
    }

    /// Stop and set the remaining time without starting.
    pub fn reset(&mut self, duration_secs: u32) {
        self.cadence.stop();
        self.state = TimerState::Stopped;
        self.seconds_remaining = duration_secs;
    }

    /// Advance logical time; runs one `tick` per elapsed second.
    pub fn advance(&mut self, dt: f64) -> Vec<TimerSignal> {
        let mut signals = Vec::new();
        for ticket in self.cadence.advance(dt) {
            if !self.cadence.is_current(ticket) {
                break;
            }
            signals.extend(self.tick());
        }
        signals
    }

    /// One one-second step. No-op unless Running.
    pub fn tick(&mut self) -> Vec<TimerSignal> {
        if self.state != TimerState::Running {
            return Vec::new();
        }
        if self.seconds_remaining == 0 {
            return vec![self.expire()];
        }
        self.seconds_remaining -= 1;
        let mut signals = vec![TimerSignal::Updated(self.seconds_remaining)];
        if self.seconds_remaining == 0 {
            signals.push(self.expire());
        }
        signals
    }

    fn expire(&mut self) -> TimerSignal {
        self.state = TimerState::Expired;
        self.cadence.stop();
        TimerSignal::Expired
    }
}
