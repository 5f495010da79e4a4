use super::outcome::ChallengeResult;

/// Receives the outcome of a round.
///
/// The sink owns whatever display and dismiss lifecycle it has. Once it is
/// dismissed, its owner calls [`ChallengeTimer::reset`](super::ChallengeTimer::reset)
/// (the runtime driver does this on [`Command::Dismiss`](crate::runtime::Command::Dismiss)).
pub trait ResultSink {
    fn report(&mut self, result: &ChallengeResult);
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn report(&mut self, result: &ChallengeResult) {
        (**self).report(result);
    }
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn report(&mut self, result: &ChallengeResult) {
        (**self).report(result);
    }
}

/// Sink that keeps every report in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub reports: Vec<ChallengeResult>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ChallengeResult> {
        self.reports.last()
    }
}

impl ResultSink for RecordingSink {
    fn report(&mut self, result: &ChallengeResult) {
        self.reports.push(*result);
    }
}
