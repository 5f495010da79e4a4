use challenge_core::{Config, ConfigError};
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod logging;
mod terminal;

#[derive(Parser)]
#[command(name = "challenge-cli", version, about = "Timer Challenge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a challenge interactively
    Play {
        /// Challenge number (as shown by `list`) or title
        challenge: String,
    },
    /// Run a round on a simulated clock and print its events as JSON
    Simulate(commands::simulate::SimulateArgs),
    /// List the configured challenges
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Player name management
    Player {
        #[command(subcommand)]
        action: commands::player::PlayerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: clap_complete::Shell,
    },
}

/// Read-only commands may run on defaults; anything that saves must not
/// overwrite a config file it failed to read.
fn or_default(loaded: &Result<Config, ConfigError>) -> Config {
    match loaded {
        Ok(config) => config.clone(),
        Err(e) => {
            tracing::warn!("using default config: {e}");
            Config::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let loaded = Config::load();
    let level = loaded
        .as_ref()
        .map(|c| c.log.level.clone())
        .unwrap_or_else(|_| "warn".into());
    logging::init(&level);

    let result = match cli.command {
        Commands::Play { challenge } => commands::play::run(&challenge, &or_default(&loaded)),
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::List { json } => commands::list::run(&or_default(&loaded), json),
        Commands::Player { action } => commands::player::run(action, loaded),
        Commands::Config { action } => commands::config::run(action, loaded),
        Commands::Completions { shell } => {
            let mut out = std::io::stdout();
            clap_complete::generate(shell, &mut Cli::command(), "challenge-cli", &mut out);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
