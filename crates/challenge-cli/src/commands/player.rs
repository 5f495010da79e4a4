use challenge_core::{Config, ConfigError};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PlayerAction {
    /// Print the greeting for the current player
    Show,
    /// Set the player name
    Set {
        /// New name; surrounding whitespace is dropped
        name: String,
    },
    /// Forget the player name
    Clear,
}

pub fn run(
    action: PlayerAction,
    loaded: Result<Config, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = loaded?;
    match action {
        PlayerAction::Show => {}
        PlayerAction::Set { name } => {
            config.player.set_name(&name);
            config.save()?;
        }
        PlayerAction::Clear => {
            config.player.set_name("");
            config.save()?;
        }
    }
    println!("{}", config.player.greeting());
    Ok(())
}
