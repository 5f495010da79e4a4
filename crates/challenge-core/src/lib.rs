//! # Timer Challenge Core Library
//!
//! A reaction game: start a countdown against a target duration and stop it
//! as late as possible without letting it run out. The closer to zero, the
//! higher the score; letting it expire loses the round.
//!
//! ## Architecture
//!
//! - **Challenge Timer**: A tick-driven state machine. A [`Clock`] hands out
//!   10 ms tick registrations; the session owns its registration exclusively.
//! - **Result Sink**: Receives one [`ChallengeResult`] per round and decides
//!   when to dismiss it.
//! - **View**: Gets a [`ViewState`] pushed after every state change.
//! - **Storage**: TOML-based configuration (player name, catalog, display).
//!
//! ## Key Components
//!
//! - [`ChallengeTimer`]: Countdown state machine
//! - [`ManualClock`] / [`TokioClock`]: Deterministic and wall-clock tick sources
//! - [`runtime::drive`]: Async loop that wires a timer to user commands
//! - [`Config`]: Application configuration management

pub mod challenge;
pub mod error;
pub mod events;
pub mod player;
pub mod runtime;
pub mod storage;
pub mod timer;
pub mod view;

pub use challenge::ChallengeSpec;
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use player::Player;
pub use runtime::Command;
pub use storage::Config;
pub use timer::{
    ChallengeResult, ChallengeTimer, Clock, ManualClock, Outcome, Phase, RecordingSink,
    ResultSink, TokioClock,
};
pub use view::{View, ViewState};
