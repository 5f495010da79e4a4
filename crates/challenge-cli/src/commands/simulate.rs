use challenge_core::{ChallengeTimer, Event, ManualClock, RecordingSink};
use clap::Args;

#[derive(Args)]
pub struct SimulateArgs {
    /// Target duration in milliseconds
    #[arg(long)]
    pub target_ms: u64,
    /// Number of 10 ms ticks to deliver after starting
    #[arg(long, default_value = "0")]
    pub ticks: u64,
    /// Stop the timer after the ticks
    #[arg(long)]
    pub stop: bool,
    /// Also print every tick event
    #[arg(long)]
    pub verbose: bool,
}

fn emit(event: &Event) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let clock = ManualClock::new();
    let mut timer = ChallengeTimer::new(args.target_ms, clock.clone(), RecordingSink::new())?;

    if let Some(event) = timer.start() {
        emit(&event)?;
    }
    for _ in 0..args.ticks {
        match timer.tick() {
            Some(event) if args.verbose || !event.is_tick() => emit(&event)?,
            Some(_) => {}
            None => break,
        }
    }
    if args.stop {
        if let Some(event) = timer.stop() {
            emit(&event)?;
        }
    }
    emit(&timer.snapshot())?;

    tracing::debug!(
        acquisitions = clock.acquisitions(),
        live = clock.live_count(),
        "simulation finished"
    );
    Ok(())
}
