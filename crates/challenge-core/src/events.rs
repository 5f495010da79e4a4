use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{ChallengeResult, Phase};

/// Every state change of a challenge produces an Event.
/// Views redraw from them; the CLI prints them as JSON lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ChallengeStarted {
        target_ms: u64,
        at: DateTime<Utc>,
    },
    Ticked {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// Round over, either by stop or by expiry.
    ResultReported {
        result: ChallengeResult,
        at: DateTime<Utc>,
    },
    ChallengeReset {
        target_ms: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        target_ms: u64,
        remaining_ms: u64,
        is_active: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_tick(&self) -> bool {
        matches!(self, Event::Ticked { .. })
    }

    /// The reported result, if this event closes a round.
    pub fn result(&self) -> Option<&ChallengeResult> {
        match self {
            Event::ResultReported { result, .. } => Some(result),
            _ => None,
        }
    }
}
