use serde::{Deserialize, Serialize};

const ANONYMOUS: &str = "unknown entity";

/// The person playing. Only a display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: Option<String>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        let mut player = Self::default();
        player.set_name(name);
        player
    }

    /// Set the name from raw input. Blank input clears it.
    pub fn set_name(&mut self, input: &str) {
        let trimmed = input.trim();
        self.name = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    pub fn greeting(&self) -> String {
        format!("Welcome {}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_greeting() {
        assert_eq!(Player::default().greeting(), "Welcome unknown entity");
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(Player::new("  Ada ").greeting(), "Welcome Ada");
    }

    #[test]
    fn blank_name_clears() {
        let mut player = Player::new("Ada");
        player.set_name("   ");
        assert_eq!(player.name, None);
    }
}
