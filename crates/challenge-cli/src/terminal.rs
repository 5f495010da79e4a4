//! Terminal collaborators: a one-line countdown view and a result dialog.

use std::io::Write;
use std::time::{Duration, Instant};

use challenge_core::{ChallengeResult, ResultSink, View, ViewState};

/// Redraws a single status line on stderr, at most once per `refresh`
/// unless the running state changed.
pub struct TerminalView {
    refresh: Duration,
    last_draw: Option<Instant>,
    last_active: Option<bool>,
}

impl TerminalView {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh: Duration::from_millis(refresh_ms),
            last_draw: None,
            last_active: None,
        }
    }
}

impl View for TerminalView {
    fn render(&mut self, state: &ViewState) {
        let changed = self.last_active != Some(state.is_active);
        let due = self.last_draw.map_or(true, |t| t.elapsed() >= self.refresh);
        if !changed && !due {
            return;
        }
        self.last_draw = Some(Instant::now());
        self.last_active = Some(state.is_active);

        let mut err = std::io::stderr().lock();
        let drawn = write!(
            err,
            "\r{:<16} {:>6.2}s   [Enter: {}]   ",
            state.status_label(),
            state.remaining_secs(),
            state.action_label()
        )
        .and_then(|()| err.flush());
        if let Err(e) = drawn {
            tracing::trace!("status line not drawn: {e}");
        }
    }
}

/// Prints the result dialog to stdout. The dialog stays "open" until the
/// player presses Enter or Ctrl-C.
pub struct TerminalSink {
    show_score: bool,
}

impl TerminalSink {
    pub fn new(show_score: bool) -> Self {
        Self { show_score }
    }
}

impl ResultSink for TerminalSink {
    fn report(&mut self, result: &ChallengeResult) {
        eprintln!();
        println!("+----------------------------------------------+");
        for line in result.summary() {
            if !self.show_score && line.starts_with("Score:") {
                continue;
            }
            println!("| {line:<44} |");
        }
        println!("+----------------------------------------------+");
        println!("Press Enter to close.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(remaining_ms: u64, is_active: bool) -> ViewState {
        ViewState {
            target_ms: 1_000,
            remaining_ms,
            is_active,
        }
    }

    #[test]
    fn view_skips_redraw_inside_refresh_window() {
        let mut view = TerminalView::new(60_000);
        view.render(&state(1_000, false));
        let first = view.last_draw;
        assert!(first.is_some());

        view.render(&state(1_000, false));
        assert_eq!(view.last_draw, first);
    }

    #[test]
    fn view_redraws_when_running_state_changes() {
        let mut view = TerminalView::new(60_000);
        view.render(&state(1_000, false));
        view.render(&state(990, true));
        assert_eq!(view.last_active, Some(true));
        view.render(&state(500, false));
        assert_eq!(view.last_active, Some(false));
    }
}
