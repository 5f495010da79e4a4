//! What the timer pushes to its View.

use serde::{Deserialize, Serialize};

/// Read-only state a View needs to draw a challenge card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub target_ms: u64,
    pub remaining_ms: u64,
    pub is_active: bool,
}

impl ViewState {
    /// Label of the start/stop control.
    pub fn action_label(&self) -> &'static str {
        if self.is_active {
            "Stop challenge"
        } else {
            "Start challenge"
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Timer running..."
        } else {
            "Timer inactive"
        }
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_ms as f64 / 1000.0
    }
}

/// Renders timer state. Called after every state change.
pub trait View {
    fn render(&mut self, state: &ViewState);
}

impl<V: View + ?Sized> View for &mut V {
    fn render(&mut self, state: &ViewState) {
        (**self).render(state);
    }
}

/// View that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl View for NullView {
    fn render(&mut self, _state: &ViewState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_activity() {
        let mut state = ViewState {
            target_ms: 1000,
            remaining_ms: 1000,
            is_active: false,
        };
        assert_eq!(state.action_label(), "Start challenge");
        assert_eq!(state.status_label(), "Timer inactive");

        state.is_active = true;
        assert_eq!(state.action_label(), "Stop challenge");
        assert_eq!(state.status_label(), "Timer running...");
    }
}
