mod clock;
mod engine;
mod outcome;
mod sink;

pub use clock::{
    Clock, ManualClock, ManualTick, TickHandle, TickId, TickReceiver, TokioClock, TokioTick,
    TICK_INTERVAL, TICK_MS,
};
pub use engine::{ChallengeTimer, Phase};
pub use outcome::{score, ChallengeResult, Outcome};
pub use sink::{RecordingSink, ResultSink};
