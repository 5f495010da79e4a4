//! Challenge timer implementation.
//!
//! The timer is a tick-driven state machine. It does not own a thread: a
//! [`Clock`] registration produces ticks and whoever drives the timer feeds
//! them to [`ChallengeTimer::on_tick`].
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Expired -> (reset) Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = ChallengeTimer::new(5_000, clock, sink)?;
//! timer.start();
//! // For every tick delivered by the clock:
//! timer.on_tick(id); // Returns Some(Event::ResultReported) on expiry
//! timer.stop();      // Reports a win while time is left
//! timer.reset();     // After the sink is dismissed
//! ```
//!
//! Out-of-order calls (start while running, stop while idle or expired,
//! reset while running) are no-ops and return `None`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, TickHandle, TickId, TICK_INTERVAL, TICK_MS};
use super::outcome::ChallengeResult;
use super::sink::ResultSink;
use crate::challenge::ChallengeSpec;
use crate::error::ValidationError;
use crate::events::Event;
use crate::view::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    /// Round over; a result has been reported and the sink is open.
    Expired,
}

/// Countdown against a fixed target.
///
/// Owns its tick handle exclusively. The handle exists only while the phase
/// is `Running` and is released on stop, expiry and drop.
pub struct ChallengeTimer<C: Clock, S: ResultSink> {
    target_ms: u64,
    remaining_ms: u64,
    phase: Phase,
    tick: Option<C::Handle>,
    clock: C,
    sink: S,
}

impl<C: Clock, S: ResultSink> ChallengeTimer<C, S> {
    /// Create an idle timer with `remaining_ms == target_ms`.
    pub fn new(target_ms: u64, clock: C, sink: S) -> Result<Self, ValidationError> {
        if target_ms == 0 {
            return Err(ValidationError::ZeroTarget);
        }
        Ok(Self {
            target_ms,
            remaining_ms: target_ms,
            phase: Phase::Idle,
            tick: None,
            clock,
            sink,
        })
    }

    pub fn for_challenge(spec: &ChallengeSpec, clock: C, sink: S) -> Result<Self, ValidationError> {
        Self::new(spec.target_ms(), clock, sink)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Id of the live tick registration, if any.
    pub fn tick_id(&self) -> Option<TickId> {
        self.tick.as_ref().map(|h| h.id())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            target_ms: self.target_ms,
            remaining_ms: self.remaining_ms,
            is_active: self.is_active(),
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            target_ms: self.target_ms,
            remaining_ms: self.remaining_ms,
            is_active: self.is_active(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = ?self.phase, "ignoring start");
            return None;
        }
        // Never hold two registrations at once.
        self.release();
        self.tick = Some(self.clock.acquire(TICK_INTERVAL));
        self.phase = Phase::Running;
        tracing::debug!(target_ms = self.target_ms, "challenge started");
        Some(Event::ChallengeStarted {
            target_ms: self.target_ms,
            at: Utc::now(),
        })
    }

    /// Deliver a tick from registration `id`.
    ///
    /// Ticks from any registration other than the live one are dropped.
    pub fn on_tick(&mut self, id: TickId) -> Option<Event> {
        if self.phase != Phase::Running || self.tick_id() != Some(id) {
            tracing::trace!(tick = id.as_u64(), "dropping stale tick");
            return None;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(TICK_MS);
        if self.remaining_ms == 0 {
            self.release();
            self.phase = Phase::Expired;
            let result = ChallengeResult::expired(self.target_ms);
            return Some(self.report(result));
        }

        Some(Event::Ticked {
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Deliver a tick for the live registration. No-op when not running.
    pub fn tick(&mut self) -> Option<Event> {
        let id = self.tick_id()?;
        self.on_tick(id)
    }

    pub fn stop(&mut self) -> Option<Event> {
        if self.phase != Phase::Running {
            tracing::debug!(phase = ?self.phase, "ignoring stop");
            return None;
        }
        self.release();
        self.phase = Phase::Expired;
        let result = ChallengeResult::stopped(self.target_ms, self.remaining_ms);
        Some(self.report(result))
    }

    pub fn reset(&mut self) -> Option<Event> {
        if self.phase == Phase::Running {
            tracing::debug!("ignoring reset while running");
            return None;
        }
        self.release();
        self.remaining_ms = self.target_ms;
        self.phase = Phase::Idle;
        Some(Event::ChallengeReset {
            target_ms: self.target_ms,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn release(&mut self) {
        if let Some(handle) = self.tick.take() {
            tracing::trace!(tick = handle.id().as_u64(), "releasing tick handle");
        }
    }

    fn report(&mut self, result: ChallengeResult) -> Event {
        tracing::info!(
            outcome = %result.outcome,
            target_ms = result.target_ms,
            remaining_ms = result.remaining_ms,
            score = result.score,
            "challenge finished"
        );
        self.sink.report(&result);
        Event::ResultReported {
            result,
            at: Utc::now(),
        }
    }
}

impl<C: Clock, S: ResultSink> Drop for ChallengeTimer<C, S> {
    fn drop(&mut self) {
        self.release();
    }
}
