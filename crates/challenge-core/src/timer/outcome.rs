use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "win")]
    Win,
    #[serde(rename = "lost")]
    Lost,
}

impl Outcome {
    /// Outcome of a round stopped with `remaining_ms` left on the clock.
    pub fn from_remaining(remaining_ms: u64) -> Self {
        if remaining_ms == 0 {
            Outcome::Lost
        } else {
            Outcome::Win
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lost => "lost",
        }
    }

    /// Past-tense verb for the result dialog headline.
    pub fn verb(self) -> &'static str {
        match self {
            Outcome::Win => "won",
            Outcome::Lost => "lost",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `round((1 - remaining/target) * 100)`, clamped to `0..=100`.
///
/// Rounds half away from zero. A zero target scores 0.
pub fn score(target_ms: u64, remaining_ms: u64) -> u8 {
    if target_ms == 0 {
        return 0;
    }
    let remaining = remaining_ms.min(target_ms) as u128;
    let target = target_ms as u128;
    let elapsed = target - remaining;
    let pct = (elapsed * 100 + target / 2) / target;
    pct.min(100) as u8
}

/// What the timer reports to its [`ResultSink`](super::ResultSink) at the end
/// of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeResult {
    pub outcome: Outcome,
    pub target_ms: u64,
    pub remaining_ms: u64,
    pub score: u8,
}

impl ChallengeResult {
    /// Result of a manual stop with `remaining_ms` left.
    pub fn stopped(target_ms: u64, remaining_ms: u64) -> Self {
        let outcome = Outcome::from_remaining(remaining_ms);
        let score = match outcome {
            Outcome::Win => score(target_ms, remaining_ms),
            Outcome::Lost => 0,
        };
        Self {
            outcome,
            target_ms,
            remaining_ms,
            score,
        }
    }

    /// Result of a countdown that ran out.
    pub fn expired(target_ms: u64) -> Self {
        Self {
            outcome: Outcome::Lost,
            target_ms,
            remaining_ms: 0,
            score: 0,
        }
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    /// Lines of the result dialog.
    pub fn summary(&self) -> Vec<String> {
        let target_secs = self.target_ms as f64 / 1000.0;
        let unit = if self.target_ms == 1000 { "second" } else { "seconds" };
        let mut lines = vec![
            format!("You {}", self.outcome.verb()),
            format!("The target time was {} {unit}.", trim_secs(target_secs)),
            format!(
                "You stopped the timer with {:.2} seconds left.",
                self.remaining_ms as f64 / 1000.0
            ),
        ];
        if self.is_win() {
            lines.push(format!("Score: {}", self.score));
        }
        lines
    }
}

fn trim_secs(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{}", secs as u64)
    } else {
        format!("{secs}")
    }
}
