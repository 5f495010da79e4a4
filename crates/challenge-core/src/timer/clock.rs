//! Tick sources for the challenge timer.
//!
//! A [`Clock`] hands out repeating tick registrations. Each registration is
//! represented by a handle that the session owns exclusively; dropping the
//! handle cancels the registration. Ticks carry the [`TickId`] of the
//! registration that produced them so a session can discard anything that
//! arrives after its handle was released.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Countdown granularity in milliseconds.
pub const TICK_MS: u64 = 10;

/// Countdown granularity.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_MS);

/// Identifies one tick registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TickId(u64);

impl TickId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Ownership of a live repeating registration. Dropping it cancels the
/// registration.
pub trait TickHandle {
    fn id(&self) -> TickId;
}

/// Source of repeating tick registrations.
pub trait Clock {
    type Handle: TickHandle;

    /// Register a repeating tick with the given period.
    fn acquire(&mut self, period: Duration) -> Self::Handle;
}

// ── Manual clock ─────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: Vec<TickId>,
    acquired: u64,
    peak_live: usize,
}

/// Deterministic clock for tests and simulations.
///
/// Ticks are delivered by whoever drives the timer; the clock only keeps the
/// books on live registrations. Clones share the same registry, so a test can
/// keep one clone while the timer owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    registry: Rc<RefCell<Registry>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrations currently alive.
    pub fn live_count(&self) -> usize {
        self.registry.borrow().live.len()
    }

    /// Highest number of simultaneously live registrations ever observed.
    pub fn peak_live(&self) -> usize {
        self.registry.borrow().peak_live
    }

    /// Total registrations handed out.
    pub fn acquisitions(&self) -> u64 {
        self.registry.borrow().acquired
    }

    pub fn is_live(&self, id: TickId) -> bool {
        self.registry.borrow().live.contains(&id)
    }
}

impl Clock for ManualClock {
    type Handle = ManualTick;

    fn acquire(&mut self, _period: Duration) -> ManualTick {
        let mut reg = self.registry.borrow_mut();
        let id = TickId(reg.next_id);
        reg.next_id += 1;
        reg.acquired += 1;
        reg.live.push(id);
        reg.peak_live = reg.peak_live.max(reg.live.len());
        ManualTick {
            id,
            registry: Rc::clone(&self.registry),
        }
    }
}

/// Handle issued by [`ManualClock`].
#[derive(Debug)]
pub struct ManualTick {
    id: TickId,
    registry: Rc<RefCell<Registry>>,
}

impl TickHandle for ManualTick {
    fn id(&self) -> TickId {
        self.id
    }
}

impl Drop for ManualTick {
    fn drop(&mut self) {
        let mut reg = self.registry.borrow_mut();
        reg.live.retain(|id| *id != self.id);
    }
}

// ── Tokio clock ──────────────────────────────────────────────────────

/// Receiving end for ticks produced by a [`TokioClock`].
pub type TickReceiver = mpsc::UnboundedReceiver<TickId>;

/// Wall-clock tick source backed by `tokio::time::interval`.
///
/// Every registration runs as its own task that pushes its id into a shared
/// channel once per period. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioClock {
    tx: mpsc::UnboundedSender<TickId>,
    next_id: u64,
}

impl TokioClock {
    pub fn new() -> (Self, TickReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, next_id: 0 }, rx)
    }
}

impl Clock for TokioClock {
    type Handle = TokioTick;

    fn acquire(&mut self, period: Duration) -> TokioTick {
        let id = TickId(self.next_id);
        self.next_id += 1;
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if tx.send(id).is_err() {
                    break;
                }
            }
        });
        TokioTick { id, task }
    }
}

/// Handle issued by [`TokioClock`]. Aborts the interval task on drop.
#[derive(Debug)]
pub struct TokioTick {
    id: TickId,
    task: JoinHandle<()>,
}

impl TickHandle for TokioTick {
    fn id(&self) -> TickId {
        self.id
    }
}

impl Drop for TokioTick {
    fn drop(&mut self) {
        self.task.abort();
    }
}
