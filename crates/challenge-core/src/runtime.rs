//! Async driver for a challenge on the tokio clock.
//!
//! [`drive`] multiplexes ticks from a [`TokioClock`] with user commands and
//! pushes a [`ViewState`](crate::view::ViewState) to the view after every
//! event. All transitions happen on the task that awaits `drive`.

use tokio::sync::mpsc;

use crate::events::Event;
use crate::timer::{ChallengeTimer, Phase, ResultSink, TickReceiver, TokioClock};
use crate::view::View;

/// User input for a running challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    /// Start when idle, stop when running, dismiss when a result is open.
    Toggle,
    /// The result sink was closed; resets the timer.
    Dismiss,
    /// Platform cancel signal: dismisses an open result, otherwise quits.
    Cancel,
    Quit,
}

fn apply<S: ResultSink>(
    timer: &mut ChallengeTimer<TokioClock, S>,
    command: Command,
) -> Option<Event> {
    match command {
        Command::Start => timer.start(),
        Command::Stop => timer.stop(),
        Command::Dismiss => timer.reset(),
        Command::Toggle => match timer.phase() {
            Phase::Idle => timer.start(),
            Phase::Running => timer.stop(),
            Phase::Expired => timer.reset(),
        },
        Command::Cancel | Command::Quit => None,
    }
}

/// Run `timer` until [`Command::Quit`] arrives, [`Command::Cancel`] arrives
/// with no result open, or the command channel closes.
///
/// Returns every non-tick event in order.
pub async fn drive<S, V>(
    timer: &mut ChallengeTimer<TokioClock, S>,
    ticks: &mut TickReceiver,
    commands: &mut mpsc::Receiver<Command>,
    view: &mut V,
) -> Vec<Event>
where
    S: ResultSink,
    V: View,
{
    let mut log = Vec::new();
    view.render(&timer.view_state());

    loop {
        let event = tokio::select! {
            biased;
            command = commands.recv() => match command {
                None | Some(Command::Quit) => break,
                Some(Command::Cancel) if timer.phase() != Phase::Expired => break,
                Some(Command::Cancel) => timer.reset(),
                Some(command) => {
                    tracing::debug!(?command, phase = ?timer.phase(), "command");
                    apply(timer, command)
                }
            },
            Some(id) = ticks.recv() => timer.on_tick(id),
        };

        if let Some(event) = event {
            view.render(&timer.view_state());
            if !event.is_tick() {
                log.push(event);
            }
        }
    }

    tracing::debug!(events = log.len(), "challenge driver stopped");
    log
}
