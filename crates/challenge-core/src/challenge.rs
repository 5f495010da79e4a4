//! Challenge catalog.
//!
//! A challenge is a titled target duration. The catalog ships with four
//! difficulty levels and can be replaced through the `challenges` section of
//! the config file.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSpec {
    pub title: String,
    /// Target duration in whole seconds.
    pub target_secs: u32,
}

impl ChallengeSpec {
    pub fn new(title: impl Into<String>, target_secs: u32) -> Self {
        Self {
            title: title.into(),
            target_secs,
        }
    }

    pub fn target_ms(&self) -> u64 {
        u64::from(self.target_secs).saturating_mul(1000)
    }

    /// "1 second", "5 seconds".
    pub fn time_label(&self) -> String {
        let unit = if self.target_secs == 1 { "second" } else { "seconds" };
        format!("{} {unit}", self.target_secs)
    }
}

/// The built-in challenges.
pub fn default_catalog() -> Vec<ChallengeSpec> {
    vec![
        ChallengeSpec::new("Easy", 1),
        ChallengeSpec::new("Not easy", 5),
        ChallengeSpec::new("Getting tough", 10),
        ChallengeSpec::new("Pros only", 15),
    ]
}

/// Find a challenge by 1-based index or case-insensitive title.
pub fn find<'a>(
    catalog: &'a [ChallengeSpec],
    key: &str,
) -> Result<&'a ChallengeSpec, ValidationError> {
    let key = key.trim();
    if let Ok(index) = key.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| catalog.get(i))
            .ok_or_else(|| ValidationError::UnknownChallenge(key.to_string()));
    }
    catalog
        .iter()
        .find(|c| c.title.eq_ignore_ascii_case(key))
        .ok_or_else(|| ValidationError::UnknownChallenge(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_label_pluralises() {
        assert_eq!(ChallengeSpec::new("a", 1).time_label(), "1 second");
        assert_eq!(ChallengeSpec::new("b", 15).time_label(), "15 seconds");
    }

    #[test]
    fn find_by_index_and_title() {
        let catalog = default_catalog();
        assert_eq!(find(&catalog, "2").unwrap().title, "Not easy");
        assert_eq!(find(&catalog, "pros ONLY").unwrap().target_secs, 15);
    }

    #[test]
    fn find_rejects_unknown_keys() {
        let catalog = default_catalog();
        assert_eq!(
            find(&catalog, "0"),
            Err(ValidationError::UnknownChallenge("0".into()))
        );
        assert!(find(&catalog, "5").is_err());
        assert!(find(&catalog, "impossible").is_err());
    }
}
