use std::io::BufRead;

use challenge_core::challenge;
use challenge_core::error::Result;
use challenge_core::runtime::{self, Command};
use challenge_core::{ChallengeTimer, Config, CoreError, TokioClock};
use tokio::sync::mpsc;

use crate::terminal::{TerminalSink, TerminalView};

pub fn run(key: &str, config: &Config) -> std::result::Result<(), Box<dyn std::error::Error>> {
    Ok(play(key, config)?)
}

fn play(key: &str, config: &Config) -> Result<()> {
    let spec = challenge::find(&config.challenges, key)?.clone();
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    println!("{}", config.player.greeting());
    println!("{} ({})", spec.title, spec.time_label());
    println!("Press Enter to start or stop the timer, q to quit.");

    rt.block_on(async {
        let (clock, mut ticks) = TokioClock::new();
        let sink = TerminalSink::new(config.display.show_score);
        let mut timer = ChallengeTimer::for_challenge(&spec, clock, sink)?;
        let mut view = TerminalView::new(config.display.refresh_ms);

        let (tx, mut rx) = mpsc::channel(16);
        spawn_stdin(tx.clone());
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                if tx.send(Command::Cancel).await.is_err() {
                    break;
                }
            }
        });

        let events = runtime::drive(&mut timer, &mut ticks, &mut rx, &mut view).await;
        eprintln!();
        tracing::info!(events = events.len(), "session ended");
        Ok::<_, CoreError>(())
    })?;

    // The stdin thread may still be blocked on a read; it ends with the process.
    Ok(())
}

/// Forward stdin lines as commands from a plain thread, since stdin reads
/// block.
fn spawn_stdin(tx: mpsc::Sender<Command>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let command = match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => Command::Quit,
                Ok(_) => Command::Toggle,
                Err(_) => Command::Quit,
            };
            if tx.blocking_send(command).is_err() || command == Command::Quit {
                return;
            }
        }
        let _ = tx.blocking_send(Command::Quit);
    });
}
