mod config;

pub use config::{Config, DisplayConfig, LogConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the configuration directory, creating it if needed.
///
/// `CHALLENGE_CONFIG_DIR` wins when set. Otherwise the directory is
/// `~/.config/timer-challenge[-dev]/`; set CHALLENGE_ENV=dev to use the
/// development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("CHALLENGE_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("CHALLENGE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("timer-challenge-dev")
            } else {
                base_dir.join("timer-challenge")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
