//! Cancellable periodic task driven by a logical clock.
//!
//! A `Cadence` accumulates host time and yields one [`TickTicket`] per
//! elapsed period. Every ticket carries the generation it was issued under;
//! `stop()` bumps the generation, so a ticket that is already in flight when
//! the cadence stops is rejected at callback entry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bicopt_core::types::TickTicket;

/// Tolerance for float accumulation so exact multiples of the period fire.
const PERIOD_EPSILON: f64 = 1e-9;

/// Most tickets one `advance` call may return. Longer stalls drop the rest.
pub const MAX_CATCH_UP_TICKS: usize = 3600;

/// A fixed-period task that can be started, stopped and restarted.
#[derive(Debug)]
pub struct Cadence {
    period_secs: f64,
    accumulated_secs: f64,
    running: bool,
    generation: Arc<AtomicU64>,
}

/// Cancellation view of a cadence, safe to hand to another thread.
#[derive(Debug, Clone)]
pub struct CadenceToken {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl Cadence {
    pub fn new(period_secs: f64) -> Self {
        Self {
            period_secs,
            accumulated_secs: 0.0,
            running: false,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn period_secs(&self) -> f64 {
        self.period_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Change the period. Takes effect from the next accumulated tick.
    pub fn set_period(&mut self, period_secs: f64) {
        self.period_secs = period_secs;
    }

    /// Start (or restart) the cadence. The first tick fires one full period
    /// after this call. Tickets from any earlier run are invalidated.
    pub fn start(&mut self) -> CadenceToken {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.running = true;
        self.accumulated_secs = 0.0;
        self.token()
    }

    /// Stop the cadence. Idempotent. No ticket issued before this call will
    /// pass [`Cadence::is_current`] afterwards.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.accumulated_secs = 0.0;
            self.generation.fetch_add(1, Ordering::AcqRel);
        }
    }

    /// Token observing the current generation.
    pub fn token(&self) -> CadenceToken {
        CadenceToken {
            generation: Arc::clone(&self.generation),
            issued: self.generation.load(Ordering::Acquire),
        }
    }

    /// Ticket for a tick scheduled now, or `None` while stopped.
    pub fn ticket(&self) -> Option<TickTicket> {
        self.running.then(|| TickTicket {
            generation: self.generation.load(Ordering::Acquire),
        })
    }

    /// Advance by `dt` seconds and return one ticket per elapsed period,
    /// at most [`MAX_CATCH_UP_TICKS`]. Non-finite or non-positive steps are
    /// ignored.
    pub fn advance(&mut self, dt: f64) -> Vec<TickTicket> {
        if !self.running || !(self.period_secs > 0.0) || !dt.is_finite() || dt <= 0.0 {
            return Vec::new();
        }
        self.accumulated_secs += dt;
        let periods = ((self.accumulated_secs + PERIOD_EPSILON) / self.period_secs).floor();
        if periods < 1.0 {
            return Vec::new();
        }
        self.accumulated_secs = (self.accumulated_secs - periods * self.period_secs).max(0.0);

        let due = if periods > MAX_CATCH_UP_TICKS as f64 {
            log::warn!("Cadence fell {periods} periods behind; firing {MAX_CATCH_UP_TICKS}");
            MAX_CATCH_UP_TICKS
        } else {
            periods as usize
        };
        let generation = self.generation.load(Ordering::Acquire);
        vec![TickTicket { generation }; due]
    }

    /// Whether a ticket may still fire. Checked at callback entry.
    pub fn is_current(&self, ticket: TickTicket) -> bool {
        self.running && ticket.generation == self.generation.load(Ordering::Acquire)
    }
}

impl CadenceToken {
    /// True once the cadence has been stopped or restarted since issue.
    pub fn is_cancelled(&self) -> bool {
        self.generation.load(Ordering::Acquire) != self.issued
    }
}
