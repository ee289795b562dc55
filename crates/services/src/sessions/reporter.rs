use prep_core::model::QuizResult;

/// Receives the final result of a quiz session.
///
/// The session invokes its reporter at most once, when it completes. A reporter
/// must not call back into the session.
pub trait ResultReporter: Send {
    fn report(&mut self, result: &QuizResult);
}

impl<F> ResultReporter for F
where
    F: FnMut(&QuizResult) + Send,
{
    fn report(&mut self, result: &QuizResult) {
        self(result);
    }
}
